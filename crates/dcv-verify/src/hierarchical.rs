//! Hierarchical verification phase
//!
//! Fixed-point expansion of the live object graph: every component of
//! every node is injected with the node as ambient context and a
//! factory hook that records sub-hierarchy references instead of
//! resolving them eagerly. Recorded references are materialized between
//! waves, and the traversal halts when a wave discovers nothing new.
//!
//! Every node materialized during the run is removed from the graph
//! before the phase returns, whatever the outcome of earlier waves.

use crate::attempt::{run_attempt, AttemptOutcome, FailureRecord, Phase};
use crate::report::PhaseOutcome;
use dcv_domain::{
    ContextFactory, FactoryHook, GraphHost, Result, SharedNode, SubHierarchyRef,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{debug, error, info, warn};

/// Pending and already-processed sub-hierarchy references
///
/// The membership check across both sets is the cycle and duplicate
/// guard: a reference already seen - whether materialized or merely
/// queued - is never queued twice, which bounds termination even when
/// references repeat or cycle.
///
/// Known limitation: a reference is verified at most once per run, even
/// when it is reachable from several different ambient nodes; a second
/// ambient context is not re-tested.
#[derive(Debug, Default)]
pub struct ExpansionFrontier {
    pending: Vec<SubHierarchyRef>,
    processed: HashSet<SubHierarchyRef>,
}

impl ExpansionFrontier {
    /// Queue a reference unless it was already queued or processed
    pub fn record(&mut self, reference: &SubHierarchyRef) {
        if self.processed.contains(reference) || self.pending.contains(reference) {
            return;
        }
        self.pending.push(reference.clone());
    }

    /// Take the queued references in discovery order, clearing the queue
    pub fn drain_pending(&mut self) -> Vec<SubHierarchyRef> {
        std::mem::take(&mut self.pending)
    }

    /// Mark a reference as materialized and verified-or-in-progress
    pub fn mark_processed(&mut self, reference: SubHierarchyRef) {
        self.processed.insert(reference);
    }

    /// Number of references processed so far
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }
}

/// Wave-based verifier over the live object graph
pub struct HierarchicalVerifier<'a> {
    contexts: &'a dyn ContextFactory,
    graph: &'a mut dyn GraphHost,
}

impl<'a> HierarchicalVerifier<'a> {
    /// Create a verifier over the given host ports
    pub fn new(contexts: &'a dyn ContextFactory, graph: &'a mut dyn GraphHost) -> Self {
        Self { contexts, graph }
    }

    /// Run waves to the fixed point, then tear down materialized nodes
    pub fn run(&mut self) -> Result<PhaseOutcome> {
        info!("testing dependencies can be contextually satisfied in the graph hierarchy");

        let mut outcome = PhaseOutcome::default();
        let mut materialized: Vec<SharedNode> = Vec::new();

        let result = run_waves(self.contexts, self.graph, &mut materialized, &mut outcome);

        // Teardown runs whatever happened above.
        for node in &materialized {
            let name = node.borrow().name.clone();
            debug!(node = %name, "removing materialized node");
            if let Err(remove_error) = self.graph.remove(node) {
                warn!(node = %name, "failed to remove materialized node: {remove_error}");
            }
        }

        result?;
        info!(
            attempts = outcome.attempts,
            errors = outcome.error_count(),
            materialized = materialized.len(),
            "hierarchical phase complete"
        );
        Ok(outcome)
    }
}

fn run_waves(
    contexts: &dyn ContextFactory,
    graph: &mut dyn GraphHost,
    materialized: &mut Vec<SharedNode>,
    outcome: &mut PhaseOutcome,
) -> Result<()> {
    let frontier_state = Rc::new(RefCell::new(ExpansionFrontier::default()));
    let mut frontier = graph.list_all_nodes();

    while !frontier.is_empty() {
        for node in &frontier {
            let (info, components) = {
                let node = node.borrow();
                (node.info(), node.components.clone())
            };

            for component in components {
                let hook: FactoryHook = {
                    let state = Rc::clone(&frontier_state);
                    Rc::new(RefCell::new(move |reference: &SubHierarchyRef| {
                        state.borrow_mut().record(reference);
                    }))
                };

                let mut instance = component.borrow_mut();
                debug!(
                    component = instance.type_name(),
                    node = %info.name,
                    "testing dependencies in graph context"
                );
                outcome.attempts += 1;
                match run_attempt(contexts, instance.as_mut(), None, Some(&info), Some(hook))? {
                    AttemptOutcome::Passed => {}
                    AttemptOutcome::Failed { error: detail } => {
                        let record = FailureRecord {
                            phase: Phase::Hierarchical,
                            component: instance.type_name().to_string(),
                            combination: None,
                            node: Some(info.name.clone()),
                            error: detail,
                        };
                        error!("{record}");
                        outcome.failures.push(record);
                    }
                }
            }
        }

        frontier.clear();

        let pending = frontier_state.borrow_mut().drain_pending();
        for reference in pending {
            info!(reference = %reference, "materializing sub-hierarchy into the graph");
            let node = graph.materialize(&reference)?;
            materialized.push(Rc::clone(&node));
            frontier.push(node);
            frontier_state.borrow_mut().mark_processed(reference);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(name: &str) -> SubHierarchyRef {
        SubHierarchyRef::new(name)
    }

    #[test]
    fn test_frontier_dedups_pending_and_processed() {
        let mut frontier = ExpansionFrontier::default();
        frontier.record(&reference("hud"));
        frontier.record(&reference("hud"));
        assert_eq!(frontier.drain_pending().len(), 1);

        frontier.mark_processed(reference("hud"));
        frontier.record(&reference("hud"));
        assert!(frontier.drain_pending().is_empty());
    }

    #[test]
    fn test_frontier_preserves_discovery_order() {
        let mut frontier = ExpansionFrontier::default();
        frontier.record(&reference("b"));
        frontier.record(&reference("a"));
        frontier.record(&reference("b"));
        let pending = frontier.drain_pending();
        assert_eq!(pending, vec![reference("b"), reference("a")]);
    }
}
