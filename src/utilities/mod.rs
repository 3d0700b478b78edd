//! # Utilities
//!
//! Stateless helpers used by node kinds that carry addresses or raw bytes.
//!
//! - [`address_range`] - containment queries over `[address, address + size)`
//! - [`bytes`] - widening 8-bit buffers into 16/32/64-bit words
//! - [`flags`] - loose and strict bit flag matches

pub mod address_range;
pub mod bytes;
pub mod flags;

pub use address_range::{address_limit, checked_address_limit, contains_ea, AddressRange};
pub use bytes::{
    byte_array_8_to_16, byte_array_8_to_32, byte_array_8_to_64, narrow, swap_endian, widen,
    SwapEndian, Word,
};
pub use flags::{is_any_flag_set, is_flag_set};
