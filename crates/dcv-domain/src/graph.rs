//! Live object graph model
//!
//! Nodes are the host's composite objects: each carries attached
//! injectable component instances. The verifier walks them in waves,
//! and the graph host materializes new ones from sub-hierarchy
//! references discovered during injection.
//!
//! Shared ownership is `Rc<RefCell<_>>`: the whole verification pass is
//! single-threaded and cooperative, so thread-safe sharing would only
//! obscure the model.

use crate::injectable::Injectable;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Identity of a node within the live graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a node id from its raw value
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A component instance attached to a node
pub type SharedComponent = Rc<RefCell<Box<dyn Injectable>>>;

/// A node shared between the graph host and the verifier
pub type SharedNode = Rc<RefCell<Node>>;

/// Lightweight snapshot of a node's identity
///
/// Handed to injector contexts as the "current node" for contextual
/// resolution, so a context never needs to borrow the node itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    /// Node identity
    pub id: NodeId,
    /// Human-readable node name
    pub name: String,
}

/// A composite object in the live graph
pub struct Node {
    /// Node identity, unique within one graph host
    pub id: NodeId,
    /// Human-readable node name
    pub name: String,
    /// Component instances attached to this node
    pub components: Vec<SharedComponent>,
}

impl Node {
    /// Create an empty node
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Attach a component instance
    pub fn attach(&mut self, component: Box<dyn Injectable>) {
        self.components.push(Rc::new(RefCell::new(component)));
    }

    /// Wrap into the shared handle used across the verifier
    pub fn into_shared(self) -> SharedNode {
        Rc::new(RefCell::new(self))
    }

    /// Identity snapshot for contextual resolution
    pub fn info(&self) -> NodeInfo {
        NodeInfo {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("components", &self.components.len())
            .finish()
    }
}
