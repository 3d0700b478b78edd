//! # Effective Addresses
//!
//! An [`Ea`] identifies a byte offset in a program's address space. The
//! zero value is the "unset" sentinel and carries no address semantics.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Effective address
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ea(u64);

impl Ea {
    /// The unset sentinel
    pub const UNSET: Ea = Ea(0);

    /// Largest representable address
    pub const MAX: Ea = Ea(u64::MAX);

    /// Wraps a raw address value.
    pub const fn new(value: u64) -> Self {
        Ea(value)
    }

    /// Raw address value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// True for the unset sentinel.
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Offset by `size` bytes, or `None` past the end of the address space.
    pub fn checked_add(self, size: u64) -> Option<Ea> {
        self.0.checked_add(size).map(Ea)
    }

    /// Offset by `size` bytes, clamping at [`Ea::MAX`].
    pub fn saturating_add(self, size: u64) -> Ea {
        Ea(self.0.saturating_add(size))
    }
}

impl From<u64> for Ea {
    fn from(value: u64) -> Self {
        Ea(value)
    }
}

impl From<Ea> for u64 {
    fn from(ea: Ea) -> Self {
        ea.0
    }
}

impl fmt::Display for Ea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for Ea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
