//! Injectable component model
//!
//! A [`ComponentType`] is one discoverable injectable unit: an identity,
//! an ordered list of declared fields, and a construct function that
//! produces a fresh throwaway instance for verification. Instances
//! implement [`Injectable`], whose `inject` entry point is invoked
//! exactly once per verification attempt.

use crate::error::Result;
use crate::ports::InjectorContext;
use crate::value_objects::{FieldId, OptionId, StoreKind};
use std::fmt;
use std::sync::Arc;

/// Marks a field as requiring a profile-scoped value
///
/// Only fields carrying this tag participate in combination
/// enumeration; all other declared fields are ignored by the verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorTag {
    /// The store kind used to look up available options
    pub store_kind: StoreKind,
}

/// One declared field of a component type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identity, in declaration order on the owning type
    pub name: FieldId,
    /// Present when the field's value must come from a profile option
    pub selector: Option<SelectorTag>,
}

impl FieldDescriptor {
    /// Declare a plain field with no profile selector
    pub fn plain(name: impl Into<FieldId>) -> Self {
        Self {
            name: name.into(),
            selector: None,
        }
    }

    /// Declare a selector field looking its options up under `store_kind`
    pub fn selector(name: impl Into<FieldId>, store_kind: impl Into<StoreKind>) -> Self {
        Self {
            name: name.into(),
            selector: Some(SelectorTag {
                store_kind: store_kind.into(),
            }),
        }
    }
}

/// An injectable component instance under verification
///
/// Instances are throwaway: constructed for one type's verification,
/// mutated by selector assignment and injection, then discarded.
pub trait Injectable {
    /// Fully-qualified name of the owning component type
    fn type_name(&self) -> &str;

    /// Apply a chosen profile option directly onto the instance
    ///
    /// Called once per selector field before injection is invoked.
    fn set_selector(&mut self, field: &FieldId, option: &OptionId) -> Result<()>;

    /// The injection entry point
    ///
    /// Invoked exactly once per verification attempt with a fresh
    /// context. An `Err` here means a dependency could not be resolved;
    /// the verifier counts it and moves on.
    fn inject(&mut self, ctx: &mut dyn InjectorContext) -> Result<()>;
}

/// Factory producing a fresh instance of a component type
pub type ConstructFn = Arc<dyn Fn() -> Result<Box<dyn Injectable>>>;

/// A discoverable injectable unit
///
/// Carries the type's identity, its declared fields, and the construct
/// function used to create throwaway instances. Construction failure is
/// a host-collaborator failure and aborts the run: it means the
/// verifier's operating environment is broken, not the graph under
/// test.
#[derive(Clone)]
pub struct ComponentType {
    name: String,
    fields: Vec<FieldDescriptor>,
    construct: ConstructFn,
}

impl ComponentType {
    /// Define a component type from its identity, fields, and constructor
    pub fn new(
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        construct: impl Fn() -> Result<Box<dyn Injectable>> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            fields,
            construct: Arc::new(construct),
        }
    }

    /// Fully-qualified type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// The selector-tagged fields, in declaration order
    pub fn selector_fields(&self) -> impl Iterator<Item = (&FieldId, &StoreKind)> {
        self.fields.iter().filter_map(|field| {
            field
                .selector
                .as_ref()
                .map(|tag| (&field.name, &tag.store_kind))
        })
    }

    /// Construct a fresh throwaway instance
    pub fn construct(&self) -> Result<Box<dyn Injectable>> {
        (self.construct)()
    }
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_fields_filters_plain_fields() {
        let ty = ComponentType::new(
            "game.Audio",
            vec![
                FieldDescriptor::plain("volume"),
                FieldDescriptor::selector("mixer_profile", "audio"),
                FieldDescriptor::selector("log_profile", "logging"),
            ],
            || {
                Err(crate::error::Error::Construction {
                    component: "game.Audio".to_string(),
                    message: "test type".to_string(),
                })
            },
        );

        let selectors: Vec<_> = ty.selector_fields().collect();
        assert_eq!(selectors.len(), 2);
        assert_eq!(selectors[0].0.as_str(), "mixer_profile");
        assert_eq!(selectors[0].1.as_str(), "audio");
        assert_eq!(selectors[1].0.as_str(), "log_profile");
    }
}
