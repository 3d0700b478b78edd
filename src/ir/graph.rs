//! # IR Graph
//!
//! Arena that owns every node of an IR tree and is the only place edges are
//! created. [`IrGraph::attach`] checks every constraint the child registered
//! against the candidate parent before it links the two; a rejected
//! attachment leaves both nodes untouched.

use super::data::DataObject;
use super::kind::NodeKind;
use super::module::Module;
use super::node::{Node, NodeId, NodePayload};
use super::region::Region;
use super::validator::ParentConstraint;
use crate::ea::Ea;
use crate::error::{Error, Result};
use crate::utilities::contains_ea;
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

/// Graph construction options
#[derive(Debug, Clone)]
pub struct GraphOptions {
    /// Number of node slots to preallocate
    pub initial_capacity: usize,
    /// Label attached to log events from this graph
    pub name: String,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            name: "ir".to_string(),
        }
    }
}

/// Arena of IR nodes
///
/// Slots of destroyed nodes are never reused, so a stale [`NodeId`] keeps
/// failing with [`Error::UnknownNode`] instead of aliasing a newer node.
#[derive(Debug, Clone)]
pub struct IrGraph {
    nodes: Vec<Option<Node>>,
    by_uuid: HashMap<Uuid, NodeId>,
    live: usize,
    options: GraphOptions,
}

impl IrGraph {
    /// Creates an empty graph with default options.
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Creates an empty graph.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            nodes: Vec::with_capacity(options.initial_capacity),
            by_uuid: HashMap::with_capacity(options.initial_capacity),
            live: 0,
            options,
        }
    }

    /// Options the graph was built with
    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Adds an unattached node holding `payload`.
    pub fn add_node(&mut self, payload: NodePayload) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let node = Node::new(payload);
        tracing::trace!(graph = %self.options.name, %id, kind = %node.kind(), "node created");
        self.by_uuid.insert(node.uuid(), id);
        self.nodes.push(Some(node));
        self.live += 1;
        id
    }

    /// Adds an IR root.
    pub fn add_ir(&mut self) -> NodeId {
        self.add_node(NodePayload::Ir)
    }

    /// Adds a module named `name`.
    pub fn add_module(&mut self, name: impl Into<String>) -> NodeId {
        self.add_node(NodePayload::Module(Module::new(name)))
    }

    /// Adds an empty region.
    pub fn add_region(&mut self) -> NodeId {
        self.add_node(NodePayload::Region(Region::new()))
    }

    /// Adds a data object spanning `size` bytes from `address`.
    pub fn add_data(&mut self, address: Ea, size: u64) -> NodeId {
        self.add_node(NodePayload::Data(DataObject::new(address, size)))
    }

    /// Registers an extra parent constraint on an unattached node.
    pub fn register_constraint(&mut self, id: NodeId, constraint: ParentConstraint) -> Result<()> {
        let node = self.get_mut(id)?;
        if let Some(parent) = node.parent() {
            return Err(Error::AlreadyAttached { node: id, parent });
        }
        node.push_constraint(constraint);
        Ok(())
    }

    // =========================================================================
    // Attachment
    // =========================================================================

    /// Makes `child` a child of `parent`.
    ///
    /// Every constraint `child` registered is evaluated against `parent`'s
    /// kind. The first one that fails is reported as
    /// [`Error::ValidationError`]. A node that already has a parent cannot be
    /// attached again, and an attachment every constraint accepts still fails
    /// with [`Error::Cycle`] if `parent` is `child` or lies below it.
    pub fn attach(&mut self, child: NodeId, parent: NodeId) -> Result<()> {
        let parent_kind = self.get(parent)?.kind();
        let child_node = self.get(child)?;

        if let Some(current) = child_node.parent() {
            tracing::debug!(
                graph = %self.options.name,
                %child,
                %current,
                "attach rejected: already attached"
            );
            return Err(Error::AlreadyAttached {
                node: child,
                parent: current,
            });
        }

        if let Some((index, constraint)) = child_node.first_rejection(parent_kind) {
            tracing::debug!(
                graph = %self.options.name,
                %child,
                %parent,
                %constraint,
                actual = %parent_kind,
                "attach rejected: constraint failed"
            );
            return Err(Error::ValidationError {
                node: child,
                constraint: index,
                expected: constraint.describe(),
                actual: parent_kind,
            });
        }

        if child == parent || self.is_ancestor(child, parent) {
            tracing::debug!(graph = %self.options.name, %child, %parent, "attach rejected: cycle");
            return Err(Error::Cycle {
                node: child,
                parent,
            });
        }

        self.get_mut(child)?.set_parent(parent);
        self.get_mut(parent)?.push_child(child);
        tracing::trace!(graph = %self.options.name, %child, %parent, "attached");
        Ok(())
    }

    /// True if `ancestor` is on the parent chain of `id`.
    fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.node(id).and_then(Node::parent);
        while let Some(next) = current {
            if next == ancestor {
                return true;
            }
            current = self.node(next).and_then(Node::parent);
        }
        false
    }

    // =========================================================================
    // Destruction
    // =========================================================================

    /// Destroys `id` and everything it owns, returning the number of nodes
    /// released.
    ///
    /// Works from either attachment state; an attached node is first
    /// unlinked from its parent.
    pub fn remove(&mut self, id: NodeId) -> Result<usize> {
        let parent = self.get(id)?.parent();
        if let Some(parent) = parent {
            self.get_mut(parent)?.remove_child(id);
        }

        let mut released = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let Some(node) = self.nodes.get_mut(next.index()).and_then(Option::take) else {
                continue;
            };
            self.by_uuid.remove(&node.uuid());
            stack.extend_from_slice(node.children());
            released += 1;
        }

        self.live -= released;
        tracing::trace!(graph = %self.options.name, %id, released, "subtree removed");
        Ok(released)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    /// Node behind `id`.
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        self.node(id).ok_or(Error::unknown(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(Error::unknown(id))
    }

    /// Kind of the node behind `id`.
    pub fn kind(&self, id: NodeId) -> Result<NodeKind> {
        Ok(self.get(id)?.kind())
    }

    /// Parent of `id`, `None` while unattached.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.get(id)?.parent())
    }

    /// Children of `id` in attachment order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.get(id)?.children())
    }

    /// True once `id` has a parent.
    pub fn is_attached(&self, id: NodeId) -> Result<bool> {
        Ok(self.get(id)?.is_attached())
    }

    /// Looks a node up by its UUID.
    pub fn find_by_uuid(&self, uuid: Uuid) -> Option<NodeId> {
        self.by_uuid.get(&uuid).copied()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    /// True when the graph holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeId::new(i), node)))
    }

    /// `id` and everything below it, pre-order.
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.get(id)?;
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.node(next) {
                out.push(next);
                stack.extend(node.children().iter().rev());
            }
        }
        Ok(out)
    }

    /// Parent chain of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let mut out = Vec::new();
        let mut current = self.get(id)?.parent();
        while let Some(next) = current {
            out.push(next);
            current = self.node(next).and_then(Node::parent);
        }
        Ok(out)
    }

    // =========================================================================
    // Typed access
    // =========================================================================

    fn mismatch(&self, id: NodeId, expected: NodeKind) -> Error {
        match self.node(id) {
            Some(node) => Error::KindMismatch {
                id,
                expected,
                got: node.kind(),
            },
            None => Error::unknown(id),
        }
    }

    /// Region behind `id`.
    pub fn region(&self, id: NodeId) -> Result<&Region> {
        self.get(id)?
            .as_region()
            .ok_or_else(|| self.mismatch(id, NodeKind::Region))
    }

    /// Module behind `id`.
    pub fn module(&self, id: NodeId) -> Result<&Module> {
        self.get(id)?
            .as_module()
            .ok_or_else(|| self.mismatch(id, NodeKind::Module))
    }

    /// Data object behind `id`.
    pub fn data(&self, id: NodeId) -> Result<&DataObject> {
        self.get(id)?
            .as_data()
            .ok_or_else(|| self.mismatch(id, NodeKind::Data))
    }

    /// Mutable region behind `id`.
    pub fn region_mut(&mut self, id: NodeId) -> Result<&mut Region> {
        let kind = self.get(id)?.kind();
        match self.get_mut(id)?.payload_mut() {
            NodePayload::Region(region) => Ok(region),
            _ => Err(Error::KindMismatch {
                id,
                expected: NodeKind::Region,
                got: kind,
            }),
        }
    }

    /// Adds `ea` to the region behind `id`.
    pub fn add_ea(&mut self, id: NodeId, ea: Ea) -> Result<()> {
        self.region_mut(id)?.add_ea(ea);
        Ok(())
    }

    /// Copy of the addresses of the region behind `id`.
    pub fn eas(&self, id: NodeId) -> Result<BTreeSet<Ea>> {
        Ok(self.region(id)?.eas())
    }

    /// Regions that list `ea` as a member.
    pub fn regions_containing(&self, ea: Ea) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.as_region().is_some_and(|region| region.contains(ea)))
            .map(|(id, _)| id)
            .collect()
    }

    /// Data objects whose byte span covers `ea`.
    pub fn data_containing(&self, ea: Ea) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.as_data().is_some_and(|data| contains_ea(data, ea)))
            .map(|(id, _)| id)
            .collect()
    }
}

impl Default for IrGraph {
    fn default() -> Self {
        Self::new()
    }
}
