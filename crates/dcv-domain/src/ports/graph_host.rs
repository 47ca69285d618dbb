//! Live Graph Access Port
//!
//! The hierarchical verifier is agnostic to how nodes actually come to
//! exist: the host owns instantiation and destruction, and this port is
//! the narrow contract it exposes.

use crate::error::Result;
use crate::graph::SharedNode;
use crate::value_objects::SubHierarchyRef;

/// Live object graph owned by the host environment
pub trait GraphHost {
    /// Every node currently present in the live graph, in stable order
    fn list_all_nodes(&self) -> Vec<SharedNode>;

    /// Instantiate the referenced sub-hierarchy into the live graph
    ///
    /// Returns the newly materialized node. A failure here is a
    /// host-collaborator failure and aborts the run.
    fn materialize(&mut self, reference: &SubHierarchyRef) -> Result<SharedNode>;

    /// Remove a previously listed or materialized node from the graph
    fn remove(&mut self, node: &SharedNode) -> Result<()>;
}
