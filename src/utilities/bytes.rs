//! # Byte Reinterpretation
//!
//! Widens raw program bytes into machine words. Each group of `W` bytes is
//! combined with the first byte most significant; passing `swap = true`
//! reverses the group first, which reads it as little-endian instead.

use crate::error::{Error, Result};

/// Unsigned word that raw bytes can be widened into.
pub trait Word: Copy + sealed::Sealed {
    /// Width in bytes
    const WIDTH: usize;

    #[doc(hidden)]
    fn truncate(value: u64) -> Self;

    #[doc(hidden)]
    fn append_bytes(self, swap: bool, out: &mut Vec<u8>);
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_word {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Word for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            fn truncate(value: u64) -> Self {
                value as $ty
            }

            fn append_bytes(self, swap: bool, out: &mut Vec<u8>) {
                if swap {
                    out.extend_from_slice(&self.to_le_bytes());
                } else {
                    out.extend_from_slice(&self.to_be_bytes());
                }
            }
        }
    )*};
}

impl_word!(u16, u32, u64);

/// Widen `bytes` into words of type `T`.
///
/// Fails with [`Error::ByteWidthMismatch`] unless the length is an exact
/// multiple of `T::WIDTH`; no partial output is produced.
pub fn widen<T: Word>(bytes: &[u8], swap: bool) -> Result<Vec<T>> {
    let width = T::WIDTH;
    if bytes.len() % width != 0 {
        tracing::debug!(len = bytes.len(), width, "rejecting byte buffer");
        return Err(Error::byte_width(bytes.len(), width));
    }

    let combine = |acc: u64, byte: &u8| (acc << 8) | u64::from(*byte);
    let words = bytes
        .chunks_exact(width)
        .map(|group| {
            let value = if swap {
                group.iter().rev().fold(0, combine)
            } else {
                group.iter().fold(0, combine)
            };
            T::truncate(value)
        })
        .collect();

    Ok(words)
}

/// Split words back into their bytes; inverse of [`widen`] with the same `swap`.
pub fn narrow<T: Word>(words: &[T], swap: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * T::WIDTH);
    for word in words {
        word.append_bytes(swap, &mut out);
    }
    out
}

/// Convert 8-bit values to 16-bit values. The length must be divisible by 2.
pub fn byte_array_8_to_16(bytes: &[u8], swap: bool) -> Result<Vec<u16>> {
    widen(bytes, swap)
}

/// Convert 8-bit values to 32-bit values. The length must be divisible by 4.
pub fn byte_array_8_to_32(bytes: &[u8], swap: bool) -> Result<Vec<u32>> {
    widen(bytes, swap)
}

/// Convert 8-bit values to 64-bit values. The length must be divisible by 8.
pub fn byte_array_8_to_64(bytes: &[u8], swap: bool) -> Result<Vec<u64>> {
    widen(bytes, swap)
}

/// Reverse the byte order of a fixed-width value.
///
/// Operates on the raw representation, so it is well defined for signed and
/// floating point values too.
pub trait SwapEndian: Copy {
    /// Returns `self` with its bytes in reverse order.
    fn swap_endian(self) -> Self;
}

macro_rules! impl_swap_endian_int {
    ($($ty:ty),*) => {$(
        impl SwapEndian for $ty {
            fn swap_endian(self) -> Self {
                self.swap_bytes()
            }
        }
    )*};
}

impl_swap_endian_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl SwapEndian for f32 {
    fn swap_endian(self) -> Self {
        f32::from_bits(self.to_bits().swap_bytes())
    }
}

impl SwapEndian for f64 {
    fn swap_endian(self) -> Self {
        f64::from_bits(self.to_bits().swap_bytes())
    }
}

/// Free-function form of [`SwapEndian::swap_endian`].
pub fn swap_endian<T: SwapEndian>(value: T) -> T {
    value.swap_endian()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_16() {
        assert_eq!(byte_array_8_to_16(&[0x01, 0x02], false), Ok(vec![0x0102]));
        assert_eq!(byte_array_8_to_16(&[0x01, 0x02], true), Ok(vec![0x0201]));
    }

    #[test]
    fn test_widen_32_preserves_group_order() {
        let bytes = [0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x00, 0x01];
        assert_eq!(
            byte_array_8_to_32(&bytes, false),
            Ok(vec![0xdeadbeef, 0x00000001])
        );
        assert_eq!(
            byte_array_8_to_32(&bytes, true),
            Ok(vec![0xefbeadde, 0x01000000])
        );
    }

    #[test]
    fn test_widen_64() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(
            byte_array_8_to_64(&bytes, false),
            Ok(vec![0x0102030405060708])
        );
        assert_eq!(
            byte_array_8_to_64(&bytes, true),
            Ok(vec![0x0807060504030201])
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(byte_array_8_to_64(&[], false), Ok(vec![]));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            byte_array_8_to_16(&[1, 2, 3], false),
            Err(Error::byte_width(3, 2))
        );
        assert_eq!(
            byte_array_8_to_32(&[1, 2, 3, 4, 5, 6], true),
            Err(Error::byte_width(6, 4))
        );
        assert_eq!(
            byte_array_8_to_64(&[0; 12], false),
            Err(Error::byte_width(12, 8))
        );
    }

    #[test]
    fn test_narrow_inverts_widen() {
        let bytes = [0x10, 0x20, 0x30, 0x40];
        for swap in [false, true] {
            let words = byte_array_8_to_16(&bytes, swap).unwrap();
            assert_eq!(narrow(&words, swap), bytes);
        }
    }

    #[test]
    fn test_swap_endian() {
        assert_eq!(0x1234u16.swap_endian(), 0x3412);
        assert_eq!(swap_endian(0x11223344u32), 0x44332211);
        assert_eq!(0xabu8.swap_endian(), 0xab);
        assert_eq!((-2i16).swap_endian(), -257); // 0xfffe -> 0xfeff
        assert_eq!(1.5f64.swap_endian().swap_endian(), 1.5);
    }
}
