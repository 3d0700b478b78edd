//! Thread-safe handle to an [`IrGraph`]
//!
//! Constraint registration, attachment, EA insertion and removal all take the
//! write lock, so a node's attachment check and the edge it creates are never
//! interleaved with another writer.

use super::graph::IrGraph;
use super::kind::NodeKind;
use super::node::NodeId;
use super::validator::ParentConstraint;
use crate::ea::Ea;
use crate::error::Result;
use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Cloneable, lock-protected IR graph
#[derive(Debug, Clone, Default)]
pub struct SharedIr {
    inner: Arc<RwLock<IrGraph>>,
}

impl SharedIr {
    /// Wraps `graph` for shared use.
    pub fn new(graph: IrGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Runs `f` with shared access to the graph.
    pub fn read<R>(&self, f: impl FnOnce(&IrGraph) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the graph.
    pub fn write<R>(&self, f: impl FnOnce(&mut IrGraph) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// See [`IrGraph::add_region`].
    pub fn add_region(&self) -> NodeId {
        self.inner.write().add_region()
    }

    /// See [`IrGraph::register_constraint`].
    pub fn register_constraint(&self, id: NodeId, constraint: ParentConstraint) -> Result<()> {
        self.inner.write().register_constraint(id, constraint)
    }

    /// See [`IrGraph::attach`].
    pub fn attach(&self, child: NodeId, parent: NodeId) -> Result<()> {
        self.inner.write().attach(child, parent)
    }

    /// See [`IrGraph::add_ea`].
    pub fn add_ea(&self, region: NodeId, ea: Ea) -> Result<()> {
        self.inner.write().add_ea(region, ea)
    }

    /// See [`IrGraph::eas`].
    pub fn eas(&self, region: NodeId) -> Result<BTreeSet<Ea>> {
        self.inner.read().eas(region)
    }

    /// See [`IrGraph::kind`].
    pub fn kind(&self, id: NodeId) -> Result<NodeKind> {
        self.inner.read().kind(id)
    }

    /// See [`IrGraph::remove`].
    pub fn remove(&self, id: NodeId) -> Result<usize> {
        self.inner.write().remove(id)
    }

    /// Takes the graph back if this is the last handle.
    pub fn try_unwrap(self) -> std::result::Result<IrGraph, SharedIr> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| SharedIr { inner })
    }
}

impl From<IrGraph> for SharedIr {
    fn from(graph: IrGraph) -> Self {
        Self::new(graph)
    }
}
