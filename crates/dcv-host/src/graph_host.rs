//! In-memory live object graph
//!
//! Owns the current node set plus the sub-hierarchy templates that
//! materialization instantiates from. Instantiate/destroy of the host
//! runtime reduced to the [`GraphHost`] port: materializing builds a
//! new node from a template's component types, removal deletes it
//! again.

use dcv_domain::{
    ComponentType, Error, FieldId, GraphHost, Node, NodeId, OptionId, Result, SharedNode,
    SubHierarchyRef,
};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// One component slot of a node template
#[derive(Clone)]
pub struct TemplateComponent {
    ty: ComponentType,
    presets: Vec<(FieldId, OptionId)>,
}

impl TemplateComponent {
    /// A slot constructing a bare instance of `ty`
    pub fn new(ty: ComponentType) -> Self {
        Self {
            ty,
            presets: Vec::new(),
        }
    }

    /// Pre-assign a selector option on every constructed instance
    ///
    /// Mirrors serialized field values a live node would carry.
    pub fn with_preset(mut self, field: impl Into<FieldId>, option: impl Into<OptionId>) -> Self {
        self.presets.push((field.into(), option.into()));
        self
    }
}

/// Blueprint for a materializable sub-hierarchy
#[derive(Clone, Default)]
pub struct NodeTemplate {
    name: String,
    components: Vec<TemplateComponent>,
}

impl NodeTemplate {
    /// Create a template producing nodes named `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Add a component slot
    pub fn with_component(mut self, component: TemplateComponent) -> Self {
        self.components.push(component);
        self
    }
}

/// Live graph backed by an in-memory node list
#[derive(Default)]
pub struct InMemoryGraphHost {
    nodes: Vec<SharedNode>,
    templates: HashMap<SubHierarchyRef, NodeTemplate>,
    next_id: u64,
}

impl InMemoryGraphHost {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the given components to the live graph
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        components: Vec<Box<dyn dcv_domain::Injectable>>,
    ) -> SharedNode {
        let mut node = Node::new(self.allocate_id(), name);
        for component in components {
            node.attach(component);
        }
        let shared = node.into_shared();
        self.nodes.push(Rc::clone(&shared));
        shared
    }

    /// Register a materializable template under a reference
    pub fn add_template(&mut self, reference: impl Into<SubHierarchyRef>, template: NodeTemplate) {
        self.templates.insert(reference.into(), template);
    }

    /// Number of nodes currently in the live graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn allocate_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl GraphHost for InMemoryGraphHost {
    fn list_all_nodes(&self) -> Vec<SharedNode> {
        self.nodes.clone()
    }

    fn materialize(&mut self, reference: &SubHierarchyRef) -> Result<SharedNode> {
        let template = self
            .templates
            .get(reference)
            .cloned()
            .ok_or_else(|| Error::Materialization {
                reference: reference.to_string(),
                message: "no template registered for this reference".to_string(),
            })?;

        let name = format!("{} (instance for dependency verification)", template.name);
        debug!(reference = %reference, node = %name, "materializing node from template");

        let mut node = Node::new(self.allocate_id(), name);
        for slot in &template.components {
            let mut instance = slot.ty.construct()?;
            for (field, option) in &slot.presets {
                instance
                    .set_selector(field, option)
                    .map_err(|error| Error::Materialization {
                        reference: reference.to_string(),
                        message: format!("preset for field '{field}' rejected: {error}"),
                    })?;
            }
            node.attach(instance);
        }

        let shared = node.into_shared();
        self.nodes.push(Rc::clone(&shared));
        Ok(shared)
    }

    fn remove(&mut self, node: &SharedNode) -> Result<()> {
        let position = self.nodes.iter().position(|other| Rc::ptr_eq(other, node));
        match position {
            Some(position) => {
                self.nodes.remove(position);
                Ok(())
            }
            None => Err(Error::graph(format!(
                "node '{}' is not in the live graph",
                node.borrow().name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ScriptedComponent;

    #[test]
    fn test_materialize_unknown_reference_fails() {
        let mut graph = InMemoryGraphHost::new();
        let error = graph
            .materialize(&SubHierarchyRef::new("missing"))
            .unwrap_err();
        assert!(matches!(error, Error::Materialization { .. }));
    }

    #[test]
    fn test_materialize_and_remove_roundtrip() {
        let mut graph = InMemoryGraphHost::new();
        let ty = ScriptedComponent::new("hud.Widget").component_type();
        graph.add_template(
            "hud",
            NodeTemplate::new("HUD").with_component(TemplateComponent::new(ty)),
        );

        let node = graph.materialize(&SubHierarchyRef::new("hud")).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert!(node
            .borrow()
            .name
            .contains("(instance for dependency verification)"));

        graph.remove(&node).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert!(graph.remove(&node).is_err());
    }
}
