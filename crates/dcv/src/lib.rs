//! DCV - Dependency Configuration Verifier
//!
//! Facade crate re-exporting the public API of the workspace:
//!
//! - [`dcv_domain`] - component model, value objects, and host ports
//! - [`dcv_verify`] - the verification engine and report types
//! - [`dcv_host`] - in-memory host adapters and the scenario loader
//!
//! # Quick Start
//!
//! ```ignore
//! use dcv::{ConfigurationVerifier, Reporter, Scenario};
//!
//! let scenario = Scenario::from_path("world.toml".as_ref())?;
//! let world = scenario.build()?;
//! let mut verifier = ConfigurationVerifier::new(
//!     Box::new(world.discovery),
//!     Box::new(world.catalog),
//!     Box::new(world.contexts),
//!     Box::new(world.graph),
//! );
//! let report = verifier.verify_all()?;
//! println!("{}", Reporter::to_human_readable(&report));
//! ```

pub use dcv_domain::{
    BindingKey, Combination, ComponentType, ContextFactory, Error, FieldDescriptor, FieldId,
    GraphHost, Injectable, InjectorContext, Node, NodeId, NodeInfo, OptionId,
    ProfileOptionCatalog, Result, SharedNode, StoreKind, SubHierarchyRef, TypeDiscovery,
};
pub use dcv_host::{
    InMemoryContextFactory, InMemoryGraphHost, Scenario, ScenarioWorld, ScriptedComponent,
    StaticOptionCatalog, StaticTypeDiscovery,
};
pub use dcv_verify::{
    list_injectable_types, CombinationEnumerator, ConfigurationVerifier, FailureRecord, Phase,
    Reporter, SelectorColumn, VerificationReport, VerificationSummary,
};

use dcv_verify::VerificationReport as Report;

/// Run a full verification over an assembled scenario world
///
/// Convenience wrapper boxing the world's adapters into the
/// orchestrator and running both phases.
pub fn verify_world(world: ScenarioWorld) -> Result<Report> {
    let mut verifier = ConfigurationVerifier::new(
        Box::new(world.discovery),
        Box::new(world.catalog),
        Box::new(world.contexts),
        Box::new(world.graph),
    );
    verifier.verify_all()
}
