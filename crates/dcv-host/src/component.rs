//! Scripted injectable components
//!
//! A declarative [`Injectable`] for scenarios and tests: its injection
//! entry point resolves a list of required bindings, one profile-scoped
//! binding per selector field (`<store kind>/<chosen option>`), and
//! requests a factory for each declared sub-hierarchy reference.

use dcv_domain::{
    BindingKey, ComponentType, Error, FieldDescriptor, FieldId, Injectable, InjectorContext,
    OptionId, Result, StoreKind, SubHierarchyRef,
};

#[derive(Debug, Clone)]
struct SelectorState {
    field: FieldId,
    store_kind: StoreKind,
    chosen: Option<OptionId>,
}

/// Injectable component driven by a declarative dependency script
#[derive(Debug, Clone)]
pub struct ScriptedComponent {
    type_name: String,
    requires: Vec<BindingKey>,
    selectors: Vec<SelectorState>,
    factory_refs: Vec<SubHierarchyRef>,
}

impl ScriptedComponent {
    /// Create a component with the given type name and no dependencies
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            requires: Vec::new(),
            selectors: Vec::new(),
            factory_refs: Vec::new(),
        }
    }

    /// Require a binding to be resolvable during injection
    pub fn with_required(mut self, binding: impl Into<BindingKey>) -> Self {
        self.requires.push(binding.into());
        self
    }

    /// Declare a selector field looking options up under `store_kind`
    ///
    /// During injection the field's chosen option is resolved as the
    /// binding `<store_kind>/<option>`.
    pub fn with_selector(
        mut self,
        field: impl Into<FieldId>,
        store_kind: impl Into<StoreKind>,
    ) -> Self {
        self.selectors.push(SelectorState {
            field: field.into(),
            store_kind: store_kind.into(),
            chosen: None,
        });
        self
    }

    /// Request a sub-hierarchy factory during injection
    pub fn with_factory_ref(mut self, reference: impl Into<SubHierarchyRef>) -> Self {
        self.factory_refs.push(reference.into());
        self
    }

    /// A fresh instance with no selector options assigned
    pub fn fresh(&self) -> Self {
        let mut instance = self.clone();
        for selector in &mut instance.selectors {
            selector.chosen = None;
        }
        instance
    }

    /// The discoverable [`ComponentType`] for this script
    ///
    /// The construct function produces a fresh instance per attempt
    /// from this script as prototype.
    pub fn component_type(&self) -> ComponentType {
        let fields = self
            .selectors
            .iter()
            .map(|selector| {
                FieldDescriptor::selector(selector.field.clone(), selector.store_kind.clone())
            })
            .collect();
        let prototype = self.clone();
        ComponentType::new(self.type_name.clone(), fields, move || {
            Ok(Box::new(prototype.fresh()) as Box<dyn Injectable>)
        })
    }
}

impl Injectable for ScriptedComponent {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn set_selector(&mut self, field: &FieldId, option: &OptionId) -> Result<()> {
        for selector in &mut self.selectors {
            if &selector.field == field {
                selector.chosen = Some(option.clone());
                return Ok(());
            }
        }
        Err(Error::resolution(format!(
            "component '{}' has no selector field '{field}'",
            self.type_name
        )))
    }

    fn inject(&mut self, ctx: &mut dyn InjectorContext) -> Result<()> {
        for binding in &self.requires {
            ctx.resolve(binding)?;
        }
        for selector in &self.selectors {
            match &selector.chosen {
                Some(option) => {
                    let binding = BindingKey::new(format!("{}/{option}", selector.store_kind));
                    ctx.resolve(&binding)?;
                }
                None => {
                    return Err(Error::resolution(format!(
                        "selector field '{}' on '{}' has no option assigned",
                        selector.field, self.type_name
                    )));
                }
            }
        }
        for reference in &self.factory_refs {
            ctx.resolve_factory(reference)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_type_exposes_selector_fields_in_order() {
        let script = ScriptedComponent::new("game.Audio")
            .with_selector("mixer_profile", "audio")
            .with_selector("log_profile", "logging");
        let ty = script.component_type();

        let selectors: Vec<_> = ty.selector_fields().collect();
        assert_eq!(selectors.len(), 2);
        assert_eq!(selectors[0].0.as_str(), "mixer_profile");
        assert_eq!(selectors[1].0.as_str(), "log_profile");
    }

    #[test]
    fn test_set_selector_rejects_unknown_field() {
        let mut script = ScriptedComponent::new("game.Audio").with_selector("log_profile", "logging");
        let error = script
            .set_selector(&FieldId::new("missing"), &OptionId::new("x"))
            .unwrap_err();
        assert!(error.to_string().contains("no selector field"));
    }

    #[test]
    fn test_fresh_clears_chosen_options() {
        let mut script = ScriptedComponent::new("game.Audio").with_selector("log_profile", "logging");
        script
            .set_selector(&FieldId::new("log_profile"), &OptionId::new("verbose"))
            .unwrap();
        let fresh = script.fresh();
        assert!(fresh.selectors[0].chosen.is_none());
    }
}
