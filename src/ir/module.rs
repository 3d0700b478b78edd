//! Modules: one binary inside an IR tree

use super::kind::NodeKind;
use super::validator::ParentConstraint;

/// A single binary. Must be attached directly under the IR root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    /// Binary name, usually the file name
    pub name: String,
}

impl Module {
    /// Constraint every module places on its parent
    pub const PARENT: ParentConstraint = ParentConstraint::exact(NodeKind::Ir);

    /// Creates a module named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
