//! # binskel - Typed IR Skeleton for Disassembled Binaries
//!
//! Represents the structure of a disassembled program as a rooted tree of
//! typed nodes (IR root, modules, regions, data objects). Every node states,
//! when it is created, what kind of parent it accepts, and the graph checks
//! those constraints whenever an edge is created.
//!
//! ## Features
//!
//! - **Checked attachment** - a Region only ever sits directly under a Module
//! - **Arena ownership** - parents own children, parents are plain handles
//! - **Address ranges** - `[address, address + size)` containment queries
//! - **Byte reinterpretation** - widen raw bytes into 16/32/64-bit words
//!
//! ## Quick Start
//!
//! ```rust
//! use binskel::ir::IrGraph;
//! use binskel::utilities::{byte_array_8_to_16, contains_ea};
//! use binskel::{Ea, Result};
//!
//! # fn main() -> Result<()> {
//! let mut graph = IrGraph::new();
//! let ir = graph.add_ir();
//! let module = graph.add_module("firmware.bin");
//! graph.attach(module, ir)?;
//!
//! let data = graph.add_data(Ea::new(100), 10);
//! graph.attach(data, module)?;
//! assert!(contains_ea(graph.data(data)?, Ea::new(109)));
//! assert!(!contains_ea(graph.data(data)?, Ea::new(110)));
//!
//! assert_eq!(byte_array_8_to_16(&[0x01, 0x02], false)?, vec![0x0102]);
//! assert_eq!(byte_array_8_to_16(&[0x01, 0x02], true)?, vec![0x0201]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`Ea`] - effective address with an "unset" sentinel
//! - [`ir::IrGraph`] - node arena; attachment, removal and lookups
//! - [`ir::ParentConstraint`] - exact, ancestor and predicate parent rules
//! - [`ir::SharedIr`] - lock-protected graph for use across threads
//! - [`utilities`] - address range, byte widening and flag helpers
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`Result`]; nothing panics on bad input.
//!
//! ```rust
//! use binskel::utilities::byte_array_8_to_32;
//! use binskel::Error;
//!
//! match byte_array_8_to_32(&[1, 2, 3], false) {
//!     Err(Error::ByteWidthMismatch { len, width }) => assert_eq!((len, width), (3, 4)),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod ea;
pub mod error;
pub mod ir;
pub mod utilities;

// Re-export main types
pub use ea::Ea;
pub use error::{Error, ErrorSeverity, Result};
pub use ir::{IrGraph, NodeId, NodeKind, ParentConstraint, SharedIr};
