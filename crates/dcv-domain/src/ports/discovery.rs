//! Injectable Type Discovery Port
//!
//! The verifier never scans for types itself; the host supplies the
//! population of injectable component types through this port, once per
//! verification run.

use crate::error::Result;
use crate::injectable::ComponentType;

/// Supplies the set of injectable component types to verify
pub trait TypeDiscovery {
    /// List every discoverable injectable type
    ///
    /// Order is preserved into the verification run, so implementations
    /// must return a stable order for deterministic replay. A failure
    /// here aborts the run.
    fn injectable_types(&self) -> Result<Vec<ComponentType>>;
}
