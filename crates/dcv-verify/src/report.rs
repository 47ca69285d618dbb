//! Verification Report Generation
//!
//! Generates reports in two formats:
//! - JSON for CI integration
//! - Human-readable for terminal output
//!
//! The user-visible outcome is a single pass/fail verdict plus the
//! itemized list of failing attempts; any error count above zero is an
//! overall failure.

use crate::attempt::FailureRecord;
use serde::Serialize;

/// Accumulated result of one verification phase
#[derive(Debug, Default)]
pub struct PhaseOutcome {
    /// Number of attempts the phase ran
    pub attempts: usize,
    /// Every captured failure, in attempt order
    pub failures: Vec<FailureRecord>,
}

impl PhaseOutcome {
    /// Number of failed attempts in this phase
    pub fn error_count(&self) -> usize {
        self.failures.len()
    }
}

/// Summary statistics for a full verification run
#[derive(Debug, Clone, Serialize)]
pub struct VerificationSummary {
    /// Total attempts across both phases
    pub attempts: usize,
    /// Failures in the non-contextual phase
    pub non_contextual_errors: usize,
    /// Failures in the hierarchical phase
    pub hierarchical_errors: usize,
    /// Total failures
    pub total_errors: usize,
    /// Whether verification passed (zero failures)
    pub passed: bool,
}

/// Full report for one verification run
#[derive(Debug, Serialize)]
pub struct VerificationReport {
    /// Timestamp of the run, RFC 3339
    pub timestamp: String,
    /// Summary statistics
    pub summary: VerificationSummary,
    /// Every failing attempt, non-contextual phase first
    pub failures: Vec<FailureRecord>,
}

impl VerificationReport {
    /// Aggregate the two phase outcomes into a report
    pub fn from_phases(non_contextual: PhaseOutcome, hierarchical: PhaseOutcome) -> Self {
        let summary = VerificationSummary {
            attempts: non_contextual.attempts + hierarchical.attempts,
            non_contextual_errors: non_contextual.error_count(),
            hierarchical_errors: hierarchical.error_count(),
            total_errors: non_contextual.error_count() + hierarchical.error_count(),
            passed: non_contextual.failures.is_empty() && hierarchical.failures.is_empty(),
        };

        let mut failures = non_contextual.failures;
        failures.extend(hierarchical.failures);

        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary,
            failures,
        }
    }

    /// The one-line verdict for this run
    pub fn verdict(&self) -> String {
        if self.summary.passed {
            "OKAY - all dependencies can be satisfied!".to_string()
        } else {
            format!(
                "FAIL - there were {} errors when testing dependencies.",
                self.summary.total_errors
            )
        }
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &VerificationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &VerificationReport) -> String {
        let mut output = String::new();

        output.push_str("=== Dependency Injection Verification Report ===\n\n");
        output.push_str(&format!("Timestamp: {}\n\n", report.timestamp));

        output.push_str("--- Summary ---\n");
        output.push_str(&format!("Attempts:        {}\n", report.summary.attempts));
        output.push_str(&format!(
            "Non-contextual:  {} errors\n",
            report.summary.non_contextual_errors
        ));
        output.push_str(&format!(
            "Hierarchical:    {} errors\n",
            report.summary.hierarchical_errors
        ));

        if !report.failures.is_empty() {
            output.push_str("\n--- Failures ---\n");
            for failure in &report.failures {
                output.push_str(&format!("{failure}\n"));
            }
        }

        output.push('\n');
        output.push_str(&report.verdict());
        output.push('\n');

        output
    }
}
