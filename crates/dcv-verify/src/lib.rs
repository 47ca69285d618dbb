//! Core verification engine for DCV (Dependency Configuration Verifier)
//!
//! Given a population of injectable component types, a catalog of named
//! profile options, and a live object graph, this crate proves by
//! exhaustive attempted injection that every component's dependencies
//! can be resolved:
//!
//! - **non-contextually**: each type in isolation, once per combination
//!   of applicable profile selections ([`NonContextualVerifier`]);
//! - **hierarchically**: each component of each graph node, expanding
//!   factory-produced sub-hierarchies on demand until a fixed point is
//!   reached ([`HierarchicalVerifier`]).
//!
//! Failures are counted per attempt and never abort a phase; the run
//! produces a single pass/fail [`VerificationReport`].
//!
//! # Quick Start
//!
//! ```ignore
//! use dcv_verify::ConfigurationVerifier;
//!
//! let mut verifier = ConfigurationVerifier::new(discovery, catalog, contexts, graph);
//! let report = verifier.verify_all()?;
//! println!("{}", dcv_verify::Reporter::to_human_readable(&report));
//! ```

pub mod attempt;
pub mod combinations;
pub mod hierarchical;
pub mod noncontextual;
pub mod registry;
pub mod report;

pub use attempt::{run_attempt, AttemptOutcome, FailureRecord, Phase};
pub use combinations::{CombinationEnumerator, SelectorColumn};
pub use hierarchical::{ExpansionFrontier, HierarchicalVerifier};
pub use noncontextual::NonContextualVerifier;
pub use registry::{
    list_injectable_types, FieldSpec, InjectableTypeEntry, RegistryTypeDiscovery, INJECTABLE_TYPES,
};
pub use report::{PhaseOutcome, Reporter, VerificationReport, VerificationSummary};

use dcv_domain::{ContextFactory, GraphHost, ProfileOptionCatalog, Result, TypeDiscovery};
use tracing::{error, info};

/// Top-level orchestrator running both verification phases
///
/// Owns the four host ports for the duration of a run. Phases can be
/// run individually or together through [`verify_all`], which
/// aggregates their outcomes into one report.
///
/// [`verify_all`]: ConfigurationVerifier::verify_all
pub struct ConfigurationVerifier {
    discovery: Box<dyn TypeDiscovery>,
    catalog: Box<dyn ProfileOptionCatalog>,
    contexts: Box<dyn ContextFactory>,
    graph: Box<dyn GraphHost>,
}

impl ConfigurationVerifier {
    /// Create a verifier over the given host ports
    pub fn new(
        discovery: Box<dyn TypeDiscovery>,
        catalog: Box<dyn ProfileOptionCatalog>,
        contexts: Box<dyn ContextFactory>,
        graph: Box<dyn GraphHost>,
    ) -> Self {
        Self {
            discovery,
            catalog,
            contexts,
            graph,
        }
    }

    /// Run the context-free phase over every discovered type
    pub fn run_non_contextual_phase(&mut self) -> Result<PhaseOutcome> {
        NonContextualVerifier::new(
            self.discovery.as_ref(),
            self.catalog.as_ref(),
            self.contexts.as_ref(),
        )
        .run()
    }

    /// Run the wave-based phase over the live graph
    pub fn run_hierarchical_phase(&mut self) -> Result<PhaseOutcome> {
        HierarchicalVerifier::new(self.contexts.as_ref(), self.graph.as_mut()).run()
    }

    /// Run both phases in sequence and aggregate the report
    pub fn verify_all(&mut self) -> Result<VerificationReport> {
        info!("beginning dependency injection verification");

        let non_contextual = self.run_non_contextual_phase()?;
        let hierarchical = self.run_hierarchical_phase()?;

        let report = VerificationReport::from_phases(non_contextual, hierarchical);
        if report.summary.passed {
            info!("{}", report.verdict());
        } else {
            error!("{}", report.verdict());
        }
        Ok(report)
    }
}
