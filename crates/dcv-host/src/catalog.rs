//! Static profile option catalog
//!
//! Ordered option lists per store kind, fixed at build time. The
//! in-process stand-in for a host that scans configuration assets for
//! setting stores.

use dcv_domain::{Error, OptionId, ProfileOptionCatalog, Result, StoreKind};
use std::collections::HashMap;

/// Catalog backed by a fixed map of ordered option lists
///
/// Store kinds that were never registered report
/// [`Error::MissingOptionSource`]; a registered store kind with an
/// empty list is a valid catalog entry contributing zero combinations.
#[derive(Debug, Default)]
pub struct StaticOptionCatalog {
    options: HashMap<StoreKind, Vec<OptionId>>,
}

impl StaticOptionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the ordered options for a store kind
    pub fn with_options(
        mut self,
        store_kind: impl Into<StoreKind>,
        options: Vec<OptionId>,
    ) -> Self {
        self.options.insert(store_kind.into(), options);
        self
    }

    /// Register options given as string slices
    pub fn with_option_names(self, store_kind: impl Into<StoreKind>, names: &[&str]) -> Self {
        self.with_options(
            store_kind,
            names.iter().map(|name| OptionId::new(*name)).collect(),
        )
    }
}

impl ProfileOptionCatalog for StaticOptionCatalog {
    fn options_for(&self, store_kind: &StoreKind) -> Result<Vec<OptionId>> {
        self.options
            .get(store_kind)
            .cloned()
            .ok_or_else(|| Error::MissingOptionSource {
                store_kind: store_kind.to_string(),
            })
    }
}
