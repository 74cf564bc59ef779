//! Common test utilities for layerconf integration tests
//!
//! Provides a temporary directory layout, a small layer catalog, and helpers
//! for writing raw documents.

#![allow(dead_code)]

use layerconf::{ConfigPaths, Layer, LoadPolicy, SettingDefinition, SettingType, SettingValue};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// Layer Catalog
// =============================================================================

pub const VALIDATION: &str = "VK_LAYER_KHRONOS_validation";
pub const API_DUMP: &str = "VK_LAYER_LUNARG_api_dump";
pub const MONITOR: &str = "VK_LAYER_LUNARG_monitor";

/// Catalog with settings of most kinds
pub fn sample_layers() -> Vec<Layer> {
    vec![
        Layer::new(VALIDATION)
            .setting(SettingDefinition::new(
                "enables",
                SettingValue::Flags(vec!["VK_VALIDATION_FEATURE_ENABLE_BEST_PRACTICES_EXT".into()]),
            ))
            .setting(SettingDefinition::new(
                "duplicate_message_limit",
                SettingValue::Int(10),
            ))
            .setting(SettingDefinition::new(
                "message_id_filter",
                SettingValue::VuidFilter(Vec::new()),
            ))
            .setting(SettingDefinition::new(
                "log_filename",
                SettingValue::SaveFile("stdout".into()),
            )),
        Layer::new(API_DUMP)
            .setting(SettingDefinition::new("detailed", SettingValue::Bool(true)))
            .setting(SettingDefinition::new(
                "show_timestamp",
                SettingValue::BoolNumeric(false),
            ))
            .setting(SettingDefinition::typed("output_format", SettingType::Enum)),
        Layer::new(MONITOR),
    ]
}

// =============================================================================
// Test Fixture
// =============================================================================

/// Test fixture with current, legacy and built-in directories
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub paths: ConfigPaths,
    pub layers: Vec<Layer>,
    pub policy: LoadPolicy,
}

impl TestFixture {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let paths = ConfigPaths::builder()
            .config_dir(temp_dir.path().join("configurations"))
            .legacy_dir(temp_dir.path().join("legacy"))
            .builtin_dir(temp_dir.path().join("builtin"))
            .build();

        Self {
            temp_dir,
            paths,
            layers: sample_layers(),
            policy: LoadPolicy::default(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.paths.config_dir
    }

    pub fn legacy_dir(&self) -> PathBuf {
        self.paths.legacy_dir.clone().expect("legacy dir set")
    }

    pub fn builtin_dir(&self) -> PathBuf {
        self.paths.builtin_dir.clone().expect("builtin dir set")
    }

    /// Write a raw JSON document into `dir` as `<name>.json`
    pub fn write_document(&self, dir: &Path, name: &str, document: &Value) -> PathBuf {
        self.write_text(dir, name, &serde_json::to_string_pretty(document).unwrap())
    }

    /// Write raw text into `dir` as `<name>.json`
    pub fn write_text(&self, dir: &Path, name: &str, text: &str) -> PathBuf {
        std::fs::create_dir_all(dir).unwrap();
        let path = ConfigPaths::file_in(dir, name);
        std::fs::write(&path, text).unwrap();
        path
    }

    pub fn read_document(&self, path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Sample Documents
// =============================================================================

pub fn v2_0_document(version: &str, name: &str) -> Value {
    serde_json::json!({
        "file_format_version": version,
        name: {
            "name": name,
            "description": "Legacy validation preset",
            "layer_options": {
                VALIDATION: {
                    "layer_rank": 1,
                    "enables": { "type": "MULTI_ENUM", "default": "A,B" },
                    "duplicate_message_limit": { "type": "INT", "default": "25" }
                },
                API_DUMP: {
                    "layer_rank": 0,
                    "detailed": { "type": "BOOL", "default": "FALSE" },
                    "show_timestamp": { "type": "BOOL_NUMERIC", "default": "1" }
                }
            },
            "blacklisted_layers": [MONITOR]
        }
    })
}

pub fn v2_1_document(name: &str) -> Value {
    serde_json::json!({
        "file_format_version": "2.1.0",
        "configuration": {
            "name": name,
            "description": "Generation 2.1 preset",
            "platforms": ["WINDOWS", "LINUX"],
            "layers": [
                {
                    "name": VALIDATION,
                    "rank": 0,
                    "state": "OVERRIDDEN",
                    "settings": [
                        { "key": "enables", "value": "A,B" },
                        { "key": "duplicate_message_limit", "value": "5" },
                        { "key": "custom", "value": "text" }
                    ]
                },
                { "name": API_DUMP, "rank": -1, "state": "EXCLUDED" }
            ]
        }
    })
}

pub fn v2_2_document(name: &str) -> Value {
    serde_json::json!({
        "file_format_version": "2.2.0",
        "configuration": {
            "name": name,
            "description": "Generation 2.2 preset",
            "editor_state": { "expanded": [VALIDATION] },
            "platforms": ["LINUX"],
            "layers": [
                {
                    "name": API_DUMP,
                    "rank": -1,
                    "state": "OVERRIDDEN",
                    "platforms": ["LINUX", "WINDOWS"],
                    "settings": [
                        { "key": "detailed", "type": "BOOL", "value": false },
                        { "key": "output_format", "type": "ENUM", "value": "html" }
                    ]
                },
                {
                    "name": VALIDATION,
                    "rank": 3,
                    "state": "OVERRIDDEN",
                    "settings": [
                        { "key": "enables", "type": "FLAGS", "value": ["A", "B"] }
                    ]
                }
            ]
        }
    })
}
