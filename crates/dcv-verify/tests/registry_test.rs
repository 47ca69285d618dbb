//! Registry discovery integration tests
//!
//! Registers an injectable type into the distributed slice from this
//! test crate and checks it comes back out through discovery.

use dcv_domain::{Error, FieldId, Injectable, InjectorContext, OptionId, Result, TypeDiscovery};
use dcv_verify::{
    list_injectable_types, FieldSpec, InjectableTypeEntry, RegistryTypeDiscovery, INJECTABLE_TYPES,
};

#[derive(Debug, Default)]
struct ProbeBehaviour {
    log_profile: Option<OptionId>,
}

impl Injectable for ProbeBehaviour {
    fn type_name(&self) -> &str {
        "test.Probe"
    }

    fn set_selector(&mut self, field: &FieldId, option: &OptionId) -> Result<()> {
        if field.as_str() == "log_profile" {
            self.log_profile = Some(option.clone());
            return Ok(());
        }
        Err(Error::resolution(format!("no selector field '{field}'")))
    }

    fn inject(&mut self, _ctx: &mut dyn InjectorContext) -> Result<()> {
        Ok(())
    }
}

static PROBE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "volume",
        store_kind: None,
    },
    FieldSpec {
        name: "log_profile",
        store_kind: Some("logging"),
    },
];

fn construct_probe() -> Result<Box<dyn Injectable>> {
    Ok(Box::new(ProbeBehaviour::default()))
}

#[linkme::distributed_slice(INJECTABLE_TYPES)]
static PROBE: InjectableTypeEntry = InjectableTypeEntry {
    name: "test.Probe",
    description: "probe behaviour for registry tests",
    fields: PROBE_FIELDS,
    construct: construct_probe,
};

#[test]
fn test_registered_type_is_listed() {
    let listed = list_injectable_types();
    assert!(listed
        .iter()
        .any(|(name, description)| *name == "test.Probe"
            && *description == "probe behaviour for registry tests"));
}

#[test]
fn test_registry_discovery_exposes_selector_fields() {
    let types = RegistryTypeDiscovery.injectable_types().unwrap();
    let probe = types
        .iter()
        .find(|ty| ty.name() == "test.Probe")
        .expect("registered type not discovered");

    // Only the selector-tagged field participates in enumeration.
    let selectors: Vec<_> = probe.selector_fields().collect();
    assert_eq!(selectors.len(), 1);
    assert_eq!(selectors[0].0.as_str(), "log_profile");
    assert_eq!(selectors[0].1.as_str(), "logging");
}

#[test]
fn test_registry_entry_constructs_fresh_instances() {
    let types = RegistryTypeDiscovery.injectable_types().unwrap();
    let probe = types
        .iter()
        .find(|ty| ty.name() == "test.Probe")
        .expect("registered type not discovered");

    let mut instance = probe.construct().unwrap();
    assert_eq!(instance.type_name(), "test.Probe");
    instance
        .set_selector(&FieldId::new("log_profile"), &OptionId::new("verbose"))
        .unwrap();
    assert!(instance
        .set_selector(&FieldId::new("volume"), &OptionId::new("11"))
        .is_err());
}
