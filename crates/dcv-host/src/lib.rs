//! Reference host adapters for DCV (Dependency Configuration Verifier)
//!
//! The verifier core consumes its environment through narrow ports;
//! this crate supplies in-memory implementations of all of them so the
//! system can run end to end without a real DI container or object
//! runtime:
//!
//! - [`InMemoryInjector`] / [`InMemoryContextFactory`] - a binding-set
//!   backed verification kernel with node-scoped resolution and
//!   factory interception
//! - [`StaticOptionCatalog`] - ordered profile options per store kind
//! - [`InMemoryGraphHost`] - a live node set plus sub-hierarchy
//!   templates for materialization
//! - [`ScriptedComponent`] - a declarative injectable driven by
//!   required bindings, selector fields, and factory references
//! - [`Scenario`] - a TOML-loadable description of a whole world,
//!   assembled into the adapters above
//!
//! The same adapters double as the test doubles for the core's
//! integration tests.

pub mod catalog;
pub mod component;
pub mod discovery;
pub mod graph_host;
pub mod injector;
pub mod scenario;

pub use catalog::StaticOptionCatalog;
pub use component::ScriptedComponent;
pub use discovery::StaticTypeDiscovery;
pub use graph_host::{InMemoryGraphHost, NodeTemplate, TemplateComponent};
pub use injector::{HostWorld, InMemoryContextFactory, InMemoryInjector};
pub use scenario::{Scenario, ScenarioWorld};
