//! Non-contextual verification phase
//!
//! Proves context-free resolvability: for every discovered component
//! type, a throwaway instance is constructed and injected once per
//! profile combination (or once bare, when there is nothing to vary).
//! This phase never touches the live object graph.

use crate::attempt::{run_attempt, AttemptOutcome, FailureRecord, Phase};
use crate::combinations::{CombinationEnumerator, SelectorColumn};
use crate::report::PhaseOutcome;
use dcv_domain::{
    ComponentType, ContextFactory, Error, OptionId, ProfileOptionCatalog, Result, StoreKind,
    TypeDiscovery,
};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// Context-free verifier over the discovered type population
///
/// Owns a run-scoped option cache: the catalog is read-only for the
/// duration of one run, and the cache is invalidated at the start of
/// every run since it reflects the current host state.
pub struct NonContextualVerifier<'a> {
    discovery: &'a dyn TypeDiscovery,
    catalog: &'a dyn ProfileOptionCatalog,
    contexts: &'a dyn ContextFactory,
    option_cache: HashMap<StoreKind, Vec<OptionId>>,
}

impl<'a> NonContextualVerifier<'a> {
    /// Create a verifier over the given host ports
    pub fn new(
        discovery: &'a dyn TypeDiscovery,
        catalog: &'a dyn ProfileOptionCatalog,
        contexts: &'a dyn ContextFactory,
    ) -> Self {
        Self {
            discovery,
            catalog,
            contexts,
            option_cache: HashMap::new(),
        }
    }

    /// Run the phase over every discovered type
    ///
    /// Construction failures abort with `Err`; resolution failures are
    /// counted into the outcome and never stop evaluation of sibling
    /// combinations or sibling types.
    pub fn run(&mut self) -> Result<PhaseOutcome> {
        self.option_cache.clear();

        let types = self.discovery.injectable_types()?;
        info!(
            types = types.len(),
            "testing dependencies can be non-contextually satisfied"
        );

        let mut outcome = PhaseOutcome::default();
        for ty in &types {
            self.verify_type(ty, &mut outcome)?;
        }

        info!(
            attempts = outcome.attempts,
            errors = outcome.error_count(),
            "non-contextual phase complete"
        );
        Ok(outcome)
    }

    fn verify_type(&mut self, ty: &ComponentType, outcome: &mut PhaseOutcome) -> Result<()> {
        debug!(component = ty.name(), "constructing throwaway instance");
        let mut instance = ty.construct()?;

        let columns = self.selector_columns(ty)?;
        let mut produced_any = false;

        for combination in CombinationEnumerator::new(columns) {
            produced_any = true;
            debug!(
                component = ty.name(),
                profiles = %combination,
                "testing dependencies"
            );
            outcome.attempts += 1;
            match run_attempt(self.contexts, instance.as_mut(), Some(&combination), None, None)? {
                AttemptOutcome::Passed => {}
                AttemptOutcome::Failed { error: detail } => {
                    let record = FailureRecord {
                        phase: Phase::NonContextual,
                        component: ty.name().to_string(),
                        combination: Some(combination),
                        node: None,
                        error: detail,
                    };
                    error!("{record}");
                    outcome.failures.push(record);
                }
            }
        }

        // Nothing to vary: run exactly once with no combination.
        if !produced_any {
            debug!(component = ty.name(), "testing dependencies");
            outcome.attempts += 1;
            match run_attempt(self.contexts, instance.as_mut(), None, None, None)? {
                AttemptOutcome::Passed => {}
                AttemptOutcome::Failed { error: detail } => {
                    let record = FailureRecord {
                        phase: Phase::NonContextual,
                        component: ty.name().to_string(),
                        combination: None,
                        node: None,
                        error: detail,
                    };
                    error!("{record}");
                    outcome.failures.push(record);
                }
            }
        }

        // Instance dropped here; nothing from a failed attempt survives.
        Ok(())
    }

    /// Selector columns for a type, in field declaration order
    fn selector_columns(&mut self, ty: &ComponentType) -> Result<Vec<SelectorColumn>> {
        let mut columns = Vec::new();
        for (field, store_kind) in ty.selector_fields() {
            let options = self.options_for(store_kind)?;
            columns.push(SelectorColumn::new(field.clone(), options));
        }
        Ok(columns)
    }

    /// Options for a store kind, through the run-scoped cache
    ///
    /// A missing option source degrades to zero options for that
    /// selector; any other catalog error aborts the run.
    fn options_for(&mut self, store_kind: &StoreKind) -> Result<Vec<OptionId>> {
        if let Some(cached) = self.option_cache.get(store_kind) {
            return Ok(cached.clone());
        }

        let options = match self.catalog.options_for(store_kind) {
            Ok(options) => options,
            Err(Error::MissingOptionSource { store_kind }) => {
                warn!(store_kind, "no option source; treating as zero options");
                Vec::new()
            }
            Err(other) => return Err(other),
        };

        self.option_cache
            .insert(store_kind.clone(), options.clone());
        Ok(options)
    }
}
