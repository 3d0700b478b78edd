//! # Parent Constraints
//!
//! Every node registers the constraints it places on its parent when it is
//! built. The graph evaluates all of them against a candidate parent before
//! it creates the edge.

use super::kind::NodeKind;
use std::fmt;

/// Rule a candidate parent must satisfy.
#[derive(Clone, Copy)]
pub enum ParentConstraint {
    /// Parent kind must equal the given kind.
    ExactParent(NodeKind),
    /// Parent kind must be the given kind or derive from it.
    AncestorParent(NodeKind),
    /// Parent kind must pass an arbitrary test.
    Predicate {
        /// Short description used in diagnostics
        name: &'static str,
        /// The test itself
        accepts: fn(NodeKind) -> bool,
    },
}

impl ParentConstraint {
    /// "has a parent of exactly kind `kind`"
    pub const fn exact(kind: NodeKind) -> Self {
        ParentConstraint::ExactParent(kind)
    }

    /// "has a parent of kind `kind` or one derived from it"
    pub const fn ancestor(kind: NodeKind) -> Self {
        ParentConstraint::AncestorParent(kind)
    }

    /// Arbitrary test over the candidate's kind
    pub const fn predicate(name: &'static str, accepts: fn(NodeKind) -> bool) -> Self {
        ParentConstraint::Predicate { name, accepts }
    }

    /// Does a parent of kind `candidate` satisfy this constraint?
    pub fn evaluate(&self, candidate: NodeKind) -> bool {
        match *self {
            ParentConstraint::ExactParent(kind) => candidate == kind,
            ParentConstraint::AncestorParent(kind) => candidate.is_a(kind),
            ParentConstraint::Predicate { accepts, .. } => accepts(candidate),
        }
    }

    /// What this constraint expects, for error messages.
    pub fn describe(&self) -> String {
        match self {
            ParentConstraint::ExactParent(kind) => format!("parent of exact kind {}", kind),
            ParentConstraint::AncestorParent(kind) => format!("parent of kind {} or derived", kind),
            ParentConstraint::Predicate { name, .. } => format!("parent matching {}", name),
        }
    }
}

impl fmt::Debug for ParentConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentConstraint::ExactParent(kind) => f.debug_tuple("ExactParent").field(kind).finish(),
            ParentConstraint::AncestorParent(kind) => {
                f.debug_tuple("AncestorParent").field(kind).finish()
            }
            ParentConstraint::Predicate { name, .. } => {
                f.debug_struct("Predicate").field("name", name).finish()
            }
        }
    }
}

impl fmt::Display for ParentConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
