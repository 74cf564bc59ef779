//! Persistence Integration Tests
//!
//! Saving, directory scans, reset and duplicate naming:
//! - Every generation survives a save and reload unchanged
//! - Failed saves leave the previous file in place
//! - Reset picks built-in, saved, legacy or defaults in that order

mod common;

use common::*;
use layerconf::{
    BuiltinEntry, Configuration, DirectoryBuiltins, LayerState, NO_RANK, Parameter, ResetSource,
    SettingType, SettingValue, StaticBuiltins, load_all, make_configuration_name,
};
use serde_json::json;

// =============================================================================
// Save
// =============================================================================

#[test]
fn test_every_generation_round_trips_through_save() {
    let fixture = TestFixture::new();
    let documents = [
        ("Legacy", v2_0_document("2.0.3", "Legacy")),
        ("V21", v2_1_document("V21")),
        ("Current", v2_2_document("Current")),
    ];

    for (name, document) in documents {
        let source = fixture.write_document(&fixture.temp_dir.path().join("source"), name, &document);
        let loaded = Configuration::load(&source, &fixture.layers, &fixture.policy).unwrap();

        let saved = loaded.save_to(&fixture.paths).unwrap();
        assert_eq!(saved, fixture.config_dir().join(format!("{name}.json")));

        let reloaded = Configuration::load(&saved, &fixture.layers, &fixture.policy).unwrap();
        assert_eq!(reloaded, loaded, "{name} changed after save");
    }
}

#[test]
fn test_save_writes_current_generation() {
    let fixture = TestFixture::new();
    let mut configuration = Configuration::new("Written");

    let mut validation = Parameter::new(VALIDATION, LayerState::Overridden).with_rank(2);
    *validation.settings.create("message_id_filter", SettingType::VuidFilter) =
        SettingValue::VuidFilter(vec!["VUID-1".into(), "VUID-2".into()]);
    configuration.insert_parameter(validation);

    let mut api_dump = Parameter::new(API_DUMP, LayerState::Excluded);
    *api_dump.settings.create("show_timestamp", SettingType::BoolNumeric) =
        SettingValue::BoolNumeric(true);
    configuration.insert_parameter(api_dump);

    configuration.insert_parameter(Parameter::new(MONITOR, LayerState::ApplicationControlled));

    let path = configuration.save_to(&fixture.paths).unwrap();
    let document = fixture.read_document(&path);

    assert_eq!(document["file_format_version"], json!("2.2.0"));
    let layers = document["configuration"]["layers"].as_array().unwrap();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0]["name"], json!(VALIDATION));
    assert_eq!(layers[0]["rank"], json!(2));
    assert_eq!(
        layers[0]["settings"][0],
        json!({ "key": "message_id_filter", "type": "VUID_EXCLUDE", "value": ["VUID-1", "VUID-2"] })
    );
    assert_eq!(layers[1]["name"], json!(API_DUMP));
    assert_eq!(layers[1]["rank"], json!(-1));
    assert_eq!(layers[1]["settings"][0]["value"], json!(true));

    let reloaded = Configuration::load(&path, &fixture.layers, &fixture.policy).unwrap();
    assert!(reloaded.find_parameter(MONITOR).is_none());
}

#[test]
fn test_failed_save_keeps_previous_file() {
    let fixture = TestFixture::new();
    let configuration = Configuration::new("Stable");
    let path = configuration.save_to(&fixture.paths).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    // A directory in the temp file's place makes the write fail
    std::fs::create_dir_all(fixture.config_dir().join("Stable.json.tmp")).unwrap();

    let mut changed = configuration.clone();
    changed.description = "changed".into();
    let err = changed.save(&path).unwrap_err();

    assert!(err.is_io());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_name_with_separators_saved_in_config_dir() {
    let fixture = TestFixture::new();
    let configuration = Configuration::new("Team/Debug");

    let path = configuration.save_to(&fixture.paths).unwrap();

    assert_eq!(path.parent(), Some(fixture.config_dir()));
    assert!(configuration.has_saved_file(&fixture.paths));
    let configurations = load_all(fixture.config_dir(), &fixture.layers, &fixture.policy).unwrap();
    assert_eq!(configurations.len(), 1);
    assert_eq!(configurations[0].key, "Team/Debug");
}

#[test]
fn test_has_saved_file() {
    let fixture = TestFixture::new();
    let configuration = Configuration::new("Lookup");
    assert!(!configuration.has_saved_file(&fixture.paths));

    configuration.save_to(&fixture.paths).unwrap();
    assert!(configuration.has_saved_file(&fixture.paths));
}

// =============================================================================
// Directory Scan
// =============================================================================

#[test]
fn test_load_all_skips_unrelated_and_broken_files() {
    let fixture = TestFixture::new();
    let dir = fixture.config_dir();
    fixture.write_document(dir, "B Current", &v2_2_document("Current"));
    fixture.write_document(dir, "A Legacy", &v2_0_document("2.0.3", "Legacy"));
    fixture.write_document(dir, "layers", &json!({ "file_format_version": "2.2.0", "layers": [] }));
    fixture.write_text(dir, "broken", "{{{");
    std::fs::write(dir.join("notes.txt"), "not json").unwrap();

    let configurations = load_all(dir, &fixture.layers, &fixture.policy).unwrap();

    let names: Vec<_> = configurations.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(names, vec!["Legacy", "Current"]);
}

#[test]
fn test_load_all_missing_directory() {
    let fixture = TestFixture::new();
    let configurations = load_all(
        &fixture.temp_dir.path().join("nowhere"),
        &fixture.layers,
        &fixture.policy,
    )
    .unwrap();
    assert!(configurations.is_empty());
}

// =============================================================================
// Reset
// =============================================================================

fn edited(name: &str) -> Configuration {
    let mut configuration = Configuration::new(name);
    configuration.insert_parameter(Parameter::new("VK_LAYER_edited", LayerState::Overridden).with_rank(0));
    configuration
}

#[test]
fn test_reset_prefers_builtin() {
    let fixture = TestFixture::new();
    let builtin = fixture.write_document(&fixture.builtin_dir(), "Preset", &v2_2_document("Preset"));
    fixture.write_document(fixture.config_dir(), "Preset", &v2_1_document("Preset"));
    let builtins = fixture.paths.builtins().unwrap();

    let mut configuration = edited("Preset");
    assert!(configuration.is_builtin(&builtins).unwrap());

    let source = configuration
        .reset(&fixture.layers, &builtins, &fixture.paths, &fixture.policy)
        .unwrap();

    assert_eq!(source, ResetSource::Builtin(builtin.clone()));
    let expected = Configuration::load(&builtin, &fixture.layers, &fixture.policy).unwrap();
    assert_eq!(configuration, expected);
}

#[test]
fn test_reset_uses_saved_file() {
    let fixture = TestFixture::new();
    let saved = fixture.write_document(fixture.config_dir(), "Mine", &v2_1_document("Mine"));
    let builtins = DirectoryBuiltins::new(fixture.builtin_dir());

    let mut configuration = edited("Mine");
    assert!(!configuration.is_builtin(&builtins).unwrap());

    let source = configuration
        .reset(&fixture.layers, &builtins, &fixture.paths, &fixture.policy)
        .unwrap();

    assert_eq!(source, ResetSource::Saved(saved));
    assert!(configuration.find_parameter("VK_LAYER_edited").is_none());
    assert_eq!(configuration.parameters[0].key, VALIDATION);
}

#[test]
fn test_reset_falls_back_to_legacy_location() {
    let fixture = TestFixture::new();
    let legacy = fixture.write_document(&fixture.legacy_dir(), "Old", &v2_0_document("2.0.3", "Old"));

    let mut configuration = edited("Old");
    let source = configuration
        .reset(&fixture.layers, &StaticBuiltins::default(), &fixture.paths, &fixture.policy)
        .unwrap();

    assert_eq!(source, ResetSource::Saved(legacy));
    assert_eq!(configuration.parameters.len(), 3);
}

#[test]
fn test_reset_current_location_wins_over_legacy() {
    let fixture = TestFixture::new();
    fixture.write_document(&fixture.legacy_dir(), "Both", &v2_0_document("2.0.3", "Both"));
    let current = fixture.write_document(fixture.config_dir(), "Both", &v2_2_document("Both"));

    let mut configuration = edited("Both");
    let source = configuration
        .reset(&fixture.layers, &StaticBuiltins::default(), &fixture.paths, &fixture.policy)
        .unwrap();

    assert_eq!(source, ResetSource::Saved(current));
}

#[test]
fn test_reset_to_defaults() {
    let fixture = TestFixture::new();
    let mut configuration = Configuration::new("Unsaved");

    let mut validation = Parameter::new(VALIDATION, LayerState::Overridden).with_rank(4);
    *validation.settings.create("duplicate_message_limit", SettingType::Int) = SettingValue::Int(99);
    configuration.insert_parameter(validation);
    configuration.insert_parameter(Parameter::new(API_DUMP, LayerState::Excluded).with_rank(1));

    let source = configuration
        .reset(&fixture.layers, &StaticBuiltins::default(), &fixture.paths, &fixture.policy)
        .unwrap();

    assert_eq!(source, ResetSource::Defaults);
    assert_eq!(configuration.key, "Unsaved");
    for parameter in &configuration.parameters {
        assert_eq!(parameter.state, LayerState::ApplicationControlled);
        assert_eq!(parameter.overridden_rank, NO_RANK);
    }
    let validation = configuration.find_parameter(VALIDATION).unwrap();
    assert_eq!(
        validation.settings.get("duplicate_message_limit"),
        Some(&SettingValue::Int(10))
    );
}

#[test]
fn test_failed_reset_leaves_configuration_unchanged() {
    let fixture = TestFixture::new();
    let broken = fixture.write_text(&fixture.builtin_dir(), "Fragile", "not json");
    let builtins = StaticBuiltins(vec![BuiltinEntry::new("Fragile", &broken)]);

    let mut configuration = edited("Fragile");
    let before = configuration.clone();

    let err = configuration
        .reset(&fixture.layers, &builtins, &fixture.paths, &fixture.policy)
        .unwrap_err();

    assert!(err.is_malformed());
    assert_eq!(configuration, before);
}

// =============================================================================
// Duplicate Names
// =============================================================================

#[test]
fn test_duplicate_names() {
    assert_eq!(make_configuration_name(["Foo", "Foo (2)"], "Foo"), "Foo (3)");
    assert_eq!(make_configuration_name(["Bar"], "Baz"), "Baz");
    assert_eq!(make_configuration_name(["Foo"], "Foo (7)"), "Foo (2)");
}

#[test]
fn test_duplicate_saved_configuration() {
    let fixture = TestFixture::new();
    let dir = fixture.config_dir();
    fixture.write_document(dir, "Current", &v2_2_document("Current"));
    fixture.write_document(dir, "Current (4)", &v2_2_document("Current (4)"));

    let configurations = load_all(dir, &fixture.layers, &fixture.policy).unwrap();
    let copy = configurations[0].duplicate(&configurations);

    assert_eq!(copy.key, "Current (5)");
    assert_eq!(copy.parameters, configurations[0].parameters);

    let path = copy.save_to(&fixture.paths).unwrap();
    assert!(path.ends_with("Current (5).json"));
    assert_eq!(load_all(dir, &fixture.layers, &fixture.policy).unwrap().len(), 3);
}
