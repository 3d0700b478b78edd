//! Error types for the binskel IR

use crate::ea::Ea;
use crate::ir::{NodeId, NodeKind};
use thiserror::Error;

/// IR and utility errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Byte reinterpretation
    /// Input length is not a multiple of the target width
    ///
    /// **Triggered by:** `byte_array_8_to_16/32/64` on a buffer whose length
    /// does not divide evenly into words
    /// **Example:** widening `[0x01, 0x02, 0x03]` to 16-bit values
    #[error("Range error: input length {len} is not divisible by target width {width}")]
    ByteWidthMismatch {
        /// Length of the input buffer in bytes
        len: usize,
        /// Width of the target integer in bytes
        width: usize,
    },

    // Attachment
    /// A registered parent constraint rejected the candidate parent
    ///
    /// **Triggered by:** attaching a node under a parent of the wrong kind
    /// **Example:** attaching a Region directly under the IR root
    #[error("Validation error: {node} requires {expected}, got {actual}")]
    ValidationError {
        /// Node being attached
        node: NodeId,
        /// Index of the failing constraint in registration order
        constraint: usize,
        /// Description of what the constraint expects
        expected: String,
        /// Kind of the rejected candidate parent
        actual: NodeKind,
    },

    /// The node already has a parent
    #[error("Node {node} is already attached to {parent}")]
    AlreadyAttached {
        /// Node being attached or modified
        node: NodeId,
        /// Its current parent
        parent: NodeId,
    },

    /// Attaching would make a node its own ancestor
    #[error("Attaching {node} under {parent} would create a cycle")]
    Cycle {
        /// Node being attached
        node: NodeId,
        /// Candidate parent
        parent: NodeId,
    },

    // Lookup
    /// Handle does not refer to a live node
    #[error("Unknown node: {id}")]
    UnknownNode {
        /// Stale or foreign handle
        id: NodeId,
    },

    /// Node exists but is not of the requested kind
    #[error("Kind mismatch for {id}: expected {expected}, got {got}")]
    KindMismatch {
        /// Node handle
        id: NodeId,
        /// Requested kind
        expected: NodeKind,
        /// Actual kind
        got: NodeKind,
    },

    // Address arithmetic
    /// `address + size` does not fit in the EA domain
    #[error("Address overflow: {address} + {size:#x} exceeds the address space")]
    AddressOverflow {
        /// Start address of the subject
        address: Ea,
        /// Size of the subject in bytes
        size: u64,
    },
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Fatal error that cannot be recovered from
    Fatal,
    /// Recoverable error; the caller may retry with different inputs
    Recoverable,
    /// Lookup-style failure that leaves the graph untouched
    Warning,
}

impl Error {
    /// Create a byte width error for a buffer of `len` bytes
    pub fn byte_width(len: usize, width: usize) -> Self {
        Error::ByteWidthMismatch { len, width }
    }

    /// Create a lookup error for a stale handle
    pub fn unknown(id: NodeId) -> Self {
        Error::UnknownNode { id }
    }

    /// Classify error severity
    ///
    /// Nothing in this crate is process-fatal.
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::ByteWidthMismatch { .. } => ErrorSeverity::Recoverable,
            Error::ValidationError { .. } => ErrorSeverity::Recoverable,
            Error::AlreadyAttached { .. } => ErrorSeverity::Recoverable,
            Error::Cycle { .. } => ErrorSeverity::Recoverable,
            Error::AddressOverflow { .. } => ErrorSeverity::Recoverable,

            Error::UnknownNode { .. } => ErrorSeverity::Warning,
            Error::KindMismatch { .. } => ErrorSeverity::Warning,
        }
    }

    /// Returns true for errors raised by the attachment protocol
    pub fn is_attachment_error(&self) -> bool {
        matches!(
            self,
            Error::ValidationError { .. } | Error::AlreadyAttached { .. } | Error::Cycle { .. }
        )
    }
}

/// Result type for binskel operations
pub type Result<T> = std::result::Result<T, Error>;
