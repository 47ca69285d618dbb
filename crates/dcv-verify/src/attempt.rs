//! Isolated verification attempts
//!
//! One attempt is one end-to-end trial of injecting a component
//! instance: fresh context, optional ambient node, optional factory
//! interception, optional profile combination applied onto the
//! instance, then a single invocation of the injection entry point.
//!
//! Resolution failures are captured at this boundary and converted into
//! records; they never abort the surrounding phase. Side effects are
//! confined to the instance and the context, both of which the caller
//! disposes of.

use dcv_domain::{
    Combination, ContextFactory, FactoryHook, Injectable, NodeInfo, Result,
};
use serde::Serialize;
use std::fmt;

/// Which verification phase an attempt belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Context-free verification of a bare instance
    NonContextual,
    /// Verification of a component attached to a live graph node
    Hierarchical,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonContextual => write!(f, "non-contextual"),
            Self::Hierarchical => write!(f, "hierarchical"),
        }
    }
}

/// One captured verification failure
///
/// Carries everything the report needs to reproduce the attempt: the
/// component identity, the combination it ran under (if any), the
/// ambient node (if any), and the underlying error - never a wrapper
/// around it.
#[derive(Debug, Clone, Serialize)]
pub struct FailureRecord {
    /// Phase the failing attempt ran in
    pub phase: Phase,
    /// Component type identity
    pub component: String,
    /// Profile combination the attempt ran under, if any
    pub combination: Option<Combination>,
    /// Ambient node name, if the attempt ran in graph context
    pub node: Option<String>,
    /// The underlying resolution error
    pub error: String,
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.phase, self.component)?;
        if let Some(combination) = &self.combination {
            write!(f, " with profiles {combination}")?;
        }
        if let Some(node) = &self.node {
            write!(f, " on '{node}'")?;
        }
        write!(f, ": {}", self.error)
    }
}

/// Outcome of a single isolated attempt
#[derive(Debug)]
pub enum AttemptOutcome {
    /// Injection returned normally
    Passed,
    /// Injection raised a resolution error, captured for the report
    Failed {
        /// The underlying error text
        error: String,
    },
}

impl AttemptOutcome {
    /// True when the attempt passed
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Run one isolated verification attempt
///
/// Constructs a brand-new verification context, applies the ambient
/// node and factory hook when present, applies every (field, option)
/// pair of `combination` directly onto the instance, and invokes the
/// injection entry point exactly once.
///
/// Returns `Err` only when the context factory itself fails - that is
/// a host failure and aborts the run. Resolution failures, including
/// selector application failures, come back as
/// [`AttemptOutcome::Failed`] so siblings keep running.
pub fn run_attempt(
    contexts: &dyn ContextFactory,
    instance: &mut dyn Injectable,
    combination: Option<&Combination>,
    ambient: Option<&NodeInfo>,
    hook: Option<FactoryHook>,
) -> Result<AttemptOutcome> {
    let mut context = contexts.new_verification_context()?;

    if let Some(node) = ambient {
        context.set_current_node(node);
    }
    if let Some(hook) = hook {
        context.override_factory_resolution(hook);
    }

    if let Some(combination) = combination {
        for (field, option) in combination.iter() {
            if let Err(error) = instance.set_selector(field, option) {
                return Ok(AttemptOutcome::Failed {
                    error: error.to_string(),
                });
            }
        }
    }

    match context.invoke_injection(instance) {
        Ok(()) => Ok(AttemptOutcome::Passed),
        Err(error) => Ok(AttemptOutcome::Failed {
            error: error.to_string(),
        }),
    }
}
