//! Profile Option Catalog Port
//!
//! Given a selector field's store kind, the catalog returns the ordered
//! list of option identifiers available for it. Order is significant:
//! it defines combination enumeration order.

use crate::error::Result;
use crate::value_objects::{OptionId, StoreKind};

/// Supplies available profile options per store kind
pub trait ProfileOptionCatalog {
    /// Ordered options available for a store kind
    ///
    /// An empty list is valid and means the selector contributes zero
    /// combinations. [`crate::Error::MissingOptionSource`] means the
    /// store kind has no queryable source at all; the verifier treats
    /// that the same as zero options. Results may be cached by the
    /// caller for the duration of one run, so implementations must stay
    /// read-only while a run is in progress.
    fn options_for(&self, store_kind: &StoreKind) -> Result<Vec<OptionId>>;
}
