//! # IR Nodes
//!
//! A [`Node`] is one element of the IR tree. Nodes live in an
//! [`IrGraph`](super::IrGraph) arena and refer to each other through
//! [`NodeId`] handles: children are owned through the arena, the parent
//! handle is only a back-reference.

use super::data::DataObject;
use super::kind::NodeKind;
use super::module::Module;
use super::region::Region;
use super::validator::ParentConstraint;
use std::fmt;
use uuid::Uuid;

/// Handle to a node inside an [`IrGraph`](super::IrGraph).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// The raw index into the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind-specific contents of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodePayload {
    /// IR root
    Ir,
    /// Module
    Module(Module),
    /// Region
    Region(Region),
    /// Data object
    Data(DataObject),
}

impl NodePayload {
    /// Kind of node this payload belongs to
    pub fn kind(&self) -> NodeKind {
        match self {
            NodePayload::Ir => NodeKind::Ir,
            NodePayload::Module(_) => NodeKind::Module,
            NodePayload::Region(_) => NodeKind::Region,
            NodePayload::Data(_) => NodeKind::Data,
        }
    }

    /// Constraints a node of this kind registers when it is built
    fn parent_constraints(&self) -> Vec<ParentConstraint> {
        match self {
            NodePayload::Ir => Vec::new(),
            NodePayload::Module(_) => vec![Module::PARENT],
            NodePayload::Region(_) => vec![Region::PARENT],
            NodePayload::Data(_) => vec![DataObject::PARENT],
        }
    }
}

/// Element of the IR tree
#[derive(Debug, Clone)]
pub struct Node {
    uuid: Uuid,
    constraints: Vec<ParentConstraint>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    payload: NodePayload,
}

impl Node {
    /// Builds an unattached node and registers its kind's parent constraints.
    pub(crate) fn new(payload: NodePayload) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            constraints: payload.parent_constraints(),
            parent: None,
            children: Vec::new(),
            payload,
        }
    }

    /// Unique identifier, stable for the node's lifetime
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Node kind
    pub fn kind(&self) -> NodeKind {
        self.payload.kind()
    }

    /// Parent handle, `None` while unattached
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in attachment order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Registered parent constraints in registration order
    pub fn constraints(&self) -> &[ParentConstraint] {
        &self.constraints
    }

    /// True once the node has a parent
    pub fn is_attached(&self) -> bool {
        self.parent.is_some()
    }

    /// Kind-specific contents
    pub fn payload(&self) -> &NodePayload {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut NodePayload {
        &mut self.payload
    }

    pub(crate) fn push_constraint(&mut self, constraint: ParentConstraint) {
        self.constraints.push(constraint);
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn remove_child(&mut self, child: NodeId) {
        self.children.retain(|&id| id != child);
    }

    /// Index and description of the first constraint `candidate` fails
    pub(crate) fn first_rejection(&self, candidate: NodeKind) -> Option<(usize, &ParentConstraint)> {
        self.constraints
            .iter()
            .enumerate()
            .find(|(_, constraint)| !constraint.evaluate(candidate))
    }

    /// Region contents, if this is a region
    pub fn as_region(&self) -> Option<&Region> {
        match &self.payload {
            NodePayload::Region(region) => Some(region),
            _ => None,
        }
    }

    /// Module contents, if this is a module
    pub fn as_module(&self) -> Option<&Module> {
        match &self.payload {
            NodePayload::Module(module) => Some(module),
            _ => None,
        }
    }

    /// Data object contents, if this is a data object
    pub fn as_data(&self) -> Option<&DataObject> {
        match &self.payload {
            NodePayload::Data(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_registers_module_constraint_once() {
        let node = Node::new(NodePayload::Region(Region::new()));
        assert_eq!(node.kind(), NodeKind::Region);
        assert_eq!(node.constraints().len(), 1);
        assert!(!node.is_attached());
        assert!(node.first_rejection(NodeKind::Module).is_none());
        assert_eq!(node.first_rejection(NodeKind::Ir).map(|(i, _)| i), Some(0));
    }

    #[test]
    fn test_root_has_no_constraints() {
        let node = Node::new(NodePayload::Ir);
        assert!(node.constraints().is_empty());
        assert!(node.first_rejection(NodeKind::Region).is_none());
    }

    #[test]
    fn test_uuids_are_unique() {
        let a = Node::new(NodePayload::Ir);
        let b = Node::new(NodePayload::Ir);
        assert_ne!(a.uuid(), b.uuid());
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(12).to_string(), "#12");
        assert_eq!(format!("{:?}", NodeId::new(3)), "#3");
    }

    #[test]
    fn test_node_id_keeps_full_index() {
        let past_u32 = u32::MAX as usize + 1;
        let id = NodeId::new(past_u32);
        assert_eq!(id.index(), past_u32);
        assert_ne!(id, NodeId::new(0));
    }
}
