//! Address range queries over objects that span `[address, address + size)`.

use crate::ea::Ea;
use crate::error::{Error, Result};

/// Anything that occupies a contiguous byte span in the address space.
pub trait AddressRange {
    /// First address of the span.
    fn address(&self) -> Ea;
    /// Length of the span in bytes.
    fn size(&self) -> u64;
}

impl<T: AddressRange + ?Sized> AddressRange for &T {
    fn address(&self) -> Ea {
        (**self).address()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }
}

/// Exclusive limit of an object's address range.
///
/// Clamps at [`Ea::MAX`] when `address + size` does not fit.
pub fn address_limit<T: AddressRange + ?Sized>(object: &T) -> Ea {
    object.address().saturating_add(object.size())
}

/// Exclusive limit of an object's address range, reporting overflow.
pub fn checked_address_limit<T: AddressRange + ?Sized>(object: &T) -> Result<Ea> {
    let address = object.address();
    let size = object.size();
    address
        .checked_add(size)
        .ok_or(Error::AddressOverflow { address, size })
}

/// Does `object` contain `ea`?
///
/// An object whose address is unset contains nothing, whatever its size.
pub fn contains_ea<T: AddressRange + ?Sized>(object: &T, ea: Ea) -> bool {
    let address = object.address();
    if address.is_unset() {
        return false;
    }
    address <= ea && ea < address_limit(object)
}
