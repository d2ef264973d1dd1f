//! Shared test helpers for configuration tests.

use camino::Utf8PathBuf;
use ortho_config::MergeComposer;
use serde_json::Value;
use tempfile::TempDir;

use crate::HatcheryConfig;

/// Runner variables cleared by tests that resolve fallbacks.
pub const RUNNER_VARIABLES: [&str; 5] = [
    "GITHUB_TOKEN",
    "GITHUB_REPOSITORY",
    "GITHUB_EVENT_PATH",
    "GITHUB_API_URL",
    "GITHUB_SERVER_URL",
];

/// Applies a configuration layer to the composer based on the layer type.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Helper to compose a [`HatcheryConfig`] from a sequence of `(layer_type, value)` pairs.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> HatcheryConfig {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    HatcheryConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// Writes an event payload into a fresh temporary directory.
pub fn write_event(content: &str) -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("event.json"))
        .expect("temp path should be UTF-8");
    std::fs::write(&path, content).expect("event should be written");
    (dir, path)
}
