//! Scenario loading integration tests
//!
//! TOML parsing through both entry points, world assembly, and the
//! errors for scenarios referencing unknown component types.

use dcv_domain::{Error, GraphHost, ProfileOptionCatalog, StoreKind, SubHierarchyRef, TypeDiscovery};
use dcv_host::Scenario;

const FULL_SCENARIO: &str = r#"
bindings = ["db", "logging/verbose", "logging/quiet"]
live_bindings = ["net"]

[catalog]
logging = ["verbose", "quiet"]

[[types]]
name = "game.Audio"
requires = ["db"]
selectors = [{ field = "log_profile", store = "logging" }]

[[types]]
name = "game.Root"
factories = ["hud"]

[[types]]
name = "hud.Widget"

[[nodes]]
name = "root"
components = ["game.Root", { type = "game.Audio", set = { log_profile = "verbose" } }]
bindings = ["local_cache"]

[[hierarchies]]
reference = "hud"
name = "HUD"
components = ["hud.Widget"]
"#;

#[test]
fn test_full_scenario_parses_and_assembles() {
    let scenario = Scenario::from_toml_str(FULL_SCENARIO).unwrap();
    assert_eq!(scenario.types.len(), 3);
    assert_eq!(scenario.nodes.len(), 1);
    assert_eq!(scenario.hierarchies.len(), 1);

    let world = scenario.build().unwrap();
    assert_eq!(world.graph.node_count(), 1);
    assert_eq!(world.discovery.injectable_types().unwrap().len(), 3);

    let options = world
        .catalog
        .options_for(&StoreKind::new("logging"))
        .unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].as_str(), "verbose");
}

#[test]
fn test_hierarchy_templates_are_materializable() {
    let mut world = Scenario::from_toml_str(FULL_SCENARIO).unwrap().build().unwrap();

    let node = world
        .graph
        .materialize(&SubHierarchyRef::new("hud"))
        .unwrap();
    assert_eq!(
        node.borrow().name,
        "HUD (instance for dependency verification)"
    );
    assert_eq!(world.graph.node_count(), 2);
}

#[test]
fn test_hierarchy_name_defaults_to_the_reference() {
    let raw = r#"
[[types]]
name = "hud.Widget"

[[hierarchies]]
reference = "hud"
components = ["hud.Widget"]
"#;
    let mut world = Scenario::from_toml_str(raw).unwrap().build().unwrap();

    let node = world
        .graph
        .materialize(&SubHierarchyRef::new("hud"))
        .unwrap();
    assert!(node.borrow().name.starts_with("hud "));
}

#[test]
fn test_node_referencing_unknown_type_fails_assembly() {
    let raw = r#"
[[nodes]]
name = "root"
components = ["ghost.Type"]
"#;
    let error = Scenario::from_toml_str(raw).unwrap().build().unwrap_err();
    assert!(matches!(error, Error::Config { .. }));
    assert!(error.to_string().contains("ghost.Type"));
}

#[test]
fn test_preset_for_unknown_field_fails_assembly() {
    let raw = r#"
[[types]]
name = "game.Audio"

[[nodes]]
name = "root"
components = [{ type = "game.Audio", set = { log_profile = "verbose" } }]
"#;
    let error = Scenario::from_toml_str(raw).unwrap().build().unwrap_err();
    assert!(matches!(error, Error::Config { .. }));
    assert!(error.to_string().contains("preset"));
}

#[test]
fn test_scenario_loads_from_a_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.toml");
    std::fs::write(&path, FULL_SCENARIO).unwrap();

    let scenario = Scenario::from_path(&path).unwrap();
    assert_eq!(scenario.bindings.len(), 3);
    assert_eq!(scenario.live_bindings, vec!["net".to_string()]);
    assert!(scenario.catalog.contains_key("logging"));
}

#[test]
fn test_empty_document_is_an_empty_world() {
    let world = Scenario::from_toml_str("").unwrap().build().unwrap();
    assert_eq!(world.graph.node_count(), 0);
    assert!(world.discovery.injectable_types().unwrap().is_empty());
}

#[test]
fn test_malformed_toml_is_a_config_error() {
    let error = Scenario::from_toml_str("bindings = not-a-list").unwrap_err();
    assert!(matches!(error, Error::Config { .. }));
}
