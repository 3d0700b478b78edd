//! Regions: sets of addresses a module claims as one unit

use super::kind::NodeKind;
use super::validator::ParentConstraint;
use crate::ea::Ea;
use std::collections::BTreeSet;

/// Set of effective addresses. Must be attached directly under a Module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    eas: BTreeSet<Ea>,
}

impl Region {
    /// Constraint every region places on its parent
    pub const PARENT: ParentConstraint = ParentConstraint::exact(NodeKind::Module);

    /// Creates an empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `ea` to the region. Adding an address twice is a no-op.
    pub fn add_ea(&mut self, ea: Ea) {
        self.eas.insert(ea);
    }

    /// Copy of the member addresses.
    pub fn eas(&self) -> BTreeSet<Ea> {
        self.eas.clone()
    }

    /// True if `ea` was added to this region.
    pub fn contains(&self, ea: Ea) -> bool {
        self.eas.contains(&ea)
    }

    /// Member addresses in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Ea> + '_ {
        self.eas.iter().copied()
    }

    /// Number of member addresses.
    pub fn len(&self) -> usize {
        self.eas.len()
    }

    /// True when no address has been added.
    pub fn is_empty(&self) -> bool {
        self.eas.is_empty()
    }
}
