//! Value objects shared across the verifier
//!
//! String-backed identifiers for the injectable component model, plus
//! [`Combination`], the one concrete assignment of profile options that
//! a verification attempt is run under.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// The identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identity of a declared field on an injectable component type
    FieldId
);

string_id!(
    /// The store kind a selector field looks its options up under
    StoreKind
);

string_id!(
    /// One available profile option identifier for a store kind
    OptionId
);

string_id!(
    /// A binding key resolvable through an injector context
    BindingKey
);

string_id!(
    /// Identity of a factory-producible sub-hierarchy
    SubHierarchyRef
);

/// One concrete assignment of profile options to selector fields
///
/// A combination maps every selector field of a component type to one
/// chosen option, in field declaration order. The domain is always the
/// component's full selector field set, never a subset; components with
/// no selector fields are verified with no combination at all rather
/// than an empty one.
///
/// Created by the combination enumerator, consumed by exactly one
/// verification attempt, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    entries: Vec<(FieldId, OptionId)>,
}

impl Combination {
    /// Create a combination from ordered (field, option) pairs
    pub fn new(entries: Vec<(FieldId, OptionId)>) -> Self {
        Self { entries }
    }

    /// Number of selector fields assigned
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no selector fields are assigned
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the (field, option) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &OptionId)> {
        self.entries.iter().map(|(f, o)| (f, o))
    }

    /// The option chosen for a field, if the field is in the domain
    pub fn get(&self, field: &FieldId) -> Option<&OptionId> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, o)| o)
    }

    /// Render as `field='value', field2='value2'` for logs and reports
    pub fn render(&self) -> String {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(field, option)| format!("{field}='{option}'"))
            .collect();
        parts.join(", ")
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
