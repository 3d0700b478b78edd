//! Node type identities

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type identity of an IR node.
///
/// `Node` is the abstract base of every other kind and is never instantiated
/// on its own; it exists so constraints can say "any node".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// Abstract base kind
    Node,
    /// Root of an IR tree
    Ir,
    /// A single binary (executable or library)
    Module,
    /// Set of addresses a module claims as one region
    Region,
    /// Contiguous initialized data
    Data,
}

impl NodeKind {
    /// Direct supertype, `None` for the base kind.
    pub fn supertype(self) -> Option<NodeKind> {
        match self {
            NodeKind::Node => None,
            NodeKind::Ir | NodeKind::Module | NodeKind::Region | NodeKind::Data => {
                Some(NodeKind::Node)
            }
        }
    }

    /// This kind followed by each of its supertypes, most derived first.
    pub fn lineage(self) -> impl Iterator<Item = NodeKind> {
        std::iter::successors(Some(self), |kind| kind.supertype())
    }

    /// True if `self` is `other` or derives from it.
    pub fn is_a(self, other: NodeKind) -> bool {
        self.lineage().any(|kind| kind == other)
    }

    /// Kind name as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Node => "Node",
            NodeKind::Ir => "Ir",
            NodeKind::Module => "Module",
            NodeKind::Region => "Region",
            NodeKind::Data => "Data",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
