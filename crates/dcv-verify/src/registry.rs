//! Injectable Type Registry
//!
//! Compile-time registration of injectable component types using linkme
//! distributed slices. Statically linked components register themselves
//! via `#[linkme::distributed_slice(INJECTABLE_TYPES)]` and are
//! discovered at runtime through [`RegistryTypeDiscovery`], with no
//! runtime introspection involved.

use dcv_domain::{ComponentType, FieldDescriptor, Injectable, Result, TypeDiscovery};

/// Static field declaration for a registered component type
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name, in declaration order on the owning type
    pub name: &'static str,
    /// Store kind when the field is a profile selector, `None` otherwise
    pub store_kind: Option<&'static str>,
}

/// Registry entry for injectable component types
///
/// Each injectable type registers itself with this entry using
/// `#[linkme::distributed_slice(INJECTABLE_TYPES)]`. The entry carries
/// the type's identity, its declared fields, and a factory function
/// producing a fresh throwaway instance per verification attempt.
pub struct InjectableTypeEntry {
    /// Fully-qualified type name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Declared fields in declaration order
    pub fields: &'static [FieldSpec],
    /// Factory function producing a fresh instance
    pub construct: fn() -> Result<Box<dyn Injectable>>,
}

// Auto-collection via linkme distributed slices - injectable types
// submit entries at compile time
#[linkme::distributed_slice]
pub static INJECTABLE_TYPES: [InjectableTypeEntry] = [..];

/// Type discovery backed by the compile-time registry
///
/// # Example
///
/// ```ignore
/// use dcv_verify::registry::{RegistryTypeDiscovery, INJECTABLE_TYPES, InjectableTypeEntry};
///
/// #[linkme::distributed_slice(INJECTABLE_TYPES)]
/// static AUDIO: InjectableTypeEntry = InjectableTypeEntry {
///     name: "game.Audio",
///     description: "Audio subsystem behaviour",
///     fields: &[],
///     construct: || Ok(Box::new(AudioBehaviour::default())),
/// };
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryTypeDiscovery;

impl TypeDiscovery for RegistryTypeDiscovery {
    fn injectable_types(&self) -> Result<Vec<ComponentType>> {
        Ok(INJECTABLE_TYPES.iter().map(component_type_for).collect())
    }
}

fn component_type_for(entry: &'static InjectableTypeEntry) -> ComponentType {
    let fields = entry
        .fields
        .iter()
        .map(|field| match field.store_kind {
            Some(store_kind) => FieldDescriptor::selector(field.name, store_kind),
            None => FieldDescriptor::plain(field.name),
        })
        .collect();
    let construct = entry.construct;
    ComponentType::new(entry.name, fields, construct)
}

/// List all registered injectable types
///
/// Returns (name, description) pairs in registration order. Useful for
/// CLI listing.
pub fn list_injectable_types() -> Vec<(&'static str, &'static str)> {
    INJECTABLE_TYPES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
