//! Scenario configuration
//!
//! A scenario is a TOML description of a whole verification world:
//! the injectable type population, the profile option catalog, the
//! resolvable bindings, the initial live graph, and the materializable
//! sub-hierarchies. Loaded through figment (TOML file + `DCV_`
//! environment overrides) and assembled into the in-memory adapters.
//!
//! ## Example
//!
//! ```toml
//! bindings = ["db", "logging/verbose", "logging/quiet"]
//!
//! [catalog]
//! logging = ["verbose", "quiet"]
//!
//! [[types]]
//! name = "game.Audio"
//! requires = ["db"]
//! selectors = [{ field = "log_profile", store = "logging" }]
//!
//! [[nodes]]
//! name = "root"
//! components = [{ type = "game.Audio", set = { log_profile = "verbose" } }]
//!
//! [[hierarchies]]
//! reference = "hud"
//! name = "HUD"
//! components = ["hud.Widget"]
//! ```
//!
//! Profile-scoped bindings are explicit: a selector field choosing
//! option `verbose` under store kind `logging` resolves the binding
//! `logging/verbose`, which the scenario must list for the choice to
//! verify.

use crate::catalog::StaticOptionCatalog;
use crate::component::ScriptedComponent;
use crate::discovery::StaticTypeDiscovery;
use crate::graph_host::{InMemoryGraphHost, NodeTemplate, TemplateComponent};
use crate::injector::{HostWorld, InMemoryContextFactory};
use dcv_domain::{Error, FieldId, Injectable, OptionId, Result};
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::info;

/// One selector field declaration on a scenario type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorSpec {
    /// Field name
    pub field: String,
    /// Store kind the field's options are looked up under
    pub store: String,
}

/// One injectable type declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSpec {
    /// Fully-qualified type name
    pub name: String,
    /// Bindings the type's injection must resolve
    #[serde(default)]
    pub requires: Vec<String>,
    /// Selector fields in declaration order
    #[serde(default)]
    pub selectors: Vec<SelectorSpec>,
    /// Sub-hierarchy factories requested during injection
    #[serde(default)]
    pub factories: Vec<String>,
}

/// Reference to a component type from a node or template
///
/// Either a bare type name, or a type name with pre-assigned selector
/// options (the in-file equivalent of serialized field values on a
/// live node).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentRef {
    /// Bare type name
    Name(String),
    /// Type name with preset selector options
    Configured {
        /// The component type name
        #[serde(rename = "type")]
        type_name: String,
        /// Preset selector options, field name to option
        #[serde(default)]
        set: BTreeMap<String, String>,
    },
}

/// One initial node of the live graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Node name
    pub name: String,
    /// Components attached to the node
    #[serde(default)]
    pub components: Vec<ComponentRef>,
    /// Bindings resolvable only in this node's context
    #[serde(default)]
    pub bindings: Vec<String>,
}

/// One materializable sub-hierarchy template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchySpec {
    /// The reference factories resolve this template by
    pub reference: String,
    /// Display name for materialized nodes; defaults to the reference
    #[serde(default)]
    pub name: Option<String>,
    /// Components attached to each materialized node
    #[serde(default)]
    pub components: Vec<ComponentRef>,
}

/// TOML-loadable description of a verification world
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Globally resolvable bindings
    #[serde(default)]
    pub bindings: Vec<String>,
    /// Bindings requiring a running host outside verification mode
    #[serde(default)]
    pub live_bindings: Vec<String>,
    /// Ordered profile options per store kind
    #[serde(default)]
    pub catalog: BTreeMap<String, Vec<String>>,
    /// Injectable type population, in discovery order
    #[serde(default)]
    pub types: Vec<TypeSpec>,
    /// Initial live graph
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    /// Materializable sub-hierarchies
    #[serde(default)]
    pub hierarchies: Vec<HierarchySpec>,
}

/// Assembled host adapters for one scenario
pub struct ScenarioWorld {
    /// Type discovery over the scenario's type population
    pub discovery: StaticTypeDiscovery,
    /// Profile option catalog
    pub catalog: StaticOptionCatalog,
    /// Verification context factory
    pub contexts: InMemoryContextFactory,
    /// Live graph host with initial nodes and templates
    pub graph: InMemoryGraphHost,
}

impl std::fmt::Debug for ScenarioWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenarioWorld").finish_non_exhaustive()
    }
}

impl Scenario {
    /// Load a scenario from a TOML file with `DCV_` env overrides
    pub fn from_path(path: &Path) -> Result<Self> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("DCV_"))
            .extract()
            .map_err(|error| Error::config(error.to_string()))
    }

    /// Parse a scenario from a TOML string
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|error| Error::config(error.to_string()))
    }

    /// Assemble the host adapters this scenario describes
    pub fn build(&self) -> Result<ScenarioWorld> {
        info!(
            types = self.types.len(),
            nodes = self.nodes.len(),
            hierarchies = self.hierarchies.len(),
            "assembling scenario world"
        );

        let mut catalog = StaticOptionCatalog::new();
        for (store_kind, options) in &self.catalog {
            catalog = catalog.with_options(
                store_kind.as_str(),
                options.iter().map(OptionId::new).collect(),
            );
        }

        let scripts = self.scripts();

        let mut world = HostWorld::new();
        for binding in &self.bindings {
            world = world.with_binding(binding.as_str());
        }
        for binding in &self.live_bindings {
            world = world.with_live_binding(binding.as_str());
        }
        for node in &self.nodes {
            for binding in &node.bindings {
                world = world.with_node_binding(node.name.as_str(), binding.as_str());
            }
        }
        for hierarchy in &self.hierarchies {
            world = world.with_factory(hierarchy.reference.as_str());
        }
        let contexts = InMemoryContextFactory::from_world(world);

        let mut graph = InMemoryGraphHost::new();
        for hierarchy in &self.hierarchies {
            let display_name = hierarchy
                .name
                .clone()
                .unwrap_or_else(|| hierarchy.reference.clone());
            let mut template = NodeTemplate::new(display_name);
            for reference in &hierarchy.components {
                template = template.with_component(template_component(reference, &scripts)?);
            }
            graph.add_template(hierarchy.reference.as_str(), template);
        }
        for node in &self.nodes {
            let mut components = Vec::new();
            for reference in &node.components {
                components.push(node_component(reference, &scripts)?);
            }
            graph.add_node(node.name.as_str(), components);
        }

        let mut types = Vec::new();
        for spec in &self.types {
            // scripts() is keyed by the names of self.types, so the
            // lookup cannot miss; guard anyway to keep this total.
            let script = scripts
                .get(&spec.name)
                .ok_or_else(|| Error::config(format!("unknown component type '{}'", spec.name)))?;
            types.push(script.component_type());
        }
        let discovery = StaticTypeDiscovery::new(types);

        Ok(ScenarioWorld {
            discovery,
            catalog,
            contexts,
            graph,
        })
    }

    fn scripts(&self) -> HashMap<String, ScriptedComponent> {
        let mut scripts = HashMap::new();
        for spec in &self.types {
            let mut script = ScriptedComponent::new(spec.name.as_str());
            for binding in &spec.requires {
                script = script.with_required(binding.as_str());
            }
            for selector in &spec.selectors {
                script = script.with_selector(selector.field.as_str(), selector.store.as_str());
            }
            for reference in &spec.factories {
                script = script.with_factory_ref(reference.as_str());
            }
            scripts.insert(spec.name.clone(), script);
        }
        scripts
    }
}

fn lookup<'a>(
    scripts: &'a HashMap<String, ScriptedComponent>,
    type_name: &str,
) -> Result<&'a ScriptedComponent> {
    scripts.get(type_name).ok_or_else(|| {
        Error::config(format!(
            "scenario references unknown component type '{type_name}'"
        ))
    })
}

fn template_component(
    reference: &ComponentRef,
    scripts: &HashMap<String, ScriptedComponent>,
) -> Result<TemplateComponent> {
    match reference {
        ComponentRef::Name(type_name) => {
            let script = lookup(scripts, type_name)?;
            Ok(TemplateComponent::new(script.component_type()))
        }
        ComponentRef::Configured { type_name, set } => {
            let script = lookup(scripts, type_name)?;
            let mut slot = TemplateComponent::new(script.component_type());
            for (field, option) in set {
                slot = slot.with_preset(field.as_str(), option.as_str());
            }
            Ok(slot)
        }
    }
}

fn node_component(
    reference: &ComponentRef,
    scripts: &HashMap<String, ScriptedComponent>,
) -> Result<Box<dyn Injectable>> {
    match reference {
        ComponentRef::Name(type_name) => {
            let script = lookup(scripts, type_name)?;
            Ok(Box::new(script.fresh()))
        }
        ComponentRef::Configured { type_name, set } => {
            let script = lookup(scripts, type_name)?;
            let mut instance = script.fresh();
            for (field, option) in set {
                instance
                    .set_selector(&FieldId::new(field.as_str()), &OptionId::new(option.as_str()))
                    .map_err(|error| {
                        Error::config(format!(
                            "preset on node component '{type_name}' rejected: {error}"
                        ))
                    })?;
            }
            Ok(Box::new(instance))
        }
    }
}
