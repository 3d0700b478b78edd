//! Data objects: contiguous initialized bytes at a known address

use super::kind::NodeKind;
use super::validator::ParentConstraint;
use crate::ea::Ea;
use crate::error::Result;
use crate::utilities::{self, AddressRange};

/// Contiguous data of `size` bytes starting at `address`.
///
/// Holds the raw bytes when they are known, so they can be read back as
/// machine words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataObject {
    address: Ea,
    size: u64,
    bytes: Vec<u8>,
}

impl DataObject {
    /// Constraint every data object places on its parent
    pub const PARENT: ParentConstraint = ParentConstraint::ancestor(NodeKind::Module);

    /// Creates a data object without contents.
    pub fn new(address: Ea, size: u64) -> Self {
        Self {
            address,
            size,
            bytes: Vec::new(),
        }
    }

    /// Creates a data object whose size is the length of `bytes`.
    pub fn with_bytes(address: Ea, bytes: Vec<u8>) -> Self {
        Self {
            address,
            size: bytes.len() as u64,
            bytes,
        }
    }

    /// Raw contents, empty when unknown.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Contents as 16-bit words.
    pub fn words_16(&self, swap: bool) -> Result<Vec<u16>> {
        utilities::byte_array_8_to_16(&self.bytes, swap)
    }

    /// Contents as 32-bit words.
    pub fn words_32(&self, swap: bool) -> Result<Vec<u32>> {
        utilities::byte_array_8_to_32(&self.bytes, swap)
    }

    /// Contents as 64-bit words.
    pub fn words_64(&self, swap: bool) -> Result<Vec<u64>> {
        utilities::byte_array_8_to_64(&self.bytes, swap)
    }
}

impl AddressRange for DataObject {
    fn address(&self) -> Ea {
        self.address
    }

    fn size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utilities::contains_ea;

    #[test]
    fn test_range() {
        let data = DataObject::new(Ea::new(100), 10);
        assert!(contains_ea(&data, Ea::new(100)));
        assert!(contains_ea(&data, Ea::new(109)));
        assert!(!contains_ea(&data, Ea::new(110)));
    }

    #[test]
    fn test_words() {
        let data = DataObject::with_bytes(Ea::new(0x2000), vec![0x7f, 0x45, 0x4c, 0x46]);
        assert_eq!(data.size(), 4);
        assert_eq!(data.words_32(false), Ok(vec![0x7f454c46]));
        assert_eq!(data.words_16(true), Ok(vec![0x457f, 0x464c]));
        assert_eq!(data.words_64(false), Err(Error::byte_width(4, 8)));
    }
}
