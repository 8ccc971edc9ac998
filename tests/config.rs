//! Configuration system tests
//!
//! Tests for config paths and drawer settings loading from YAML files.

use std::fs;

use sidedrawer::config::{DrawerConfig, TriggerConfig};
use sidedrawer::config_paths;
use sidedrawer::drawer::Drawer;
use sidedrawer::element::StyleProperty;
use sidedrawer::error::DrawerError;
use sidedrawer::geometry::Edge;
use tempfile::tempdir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_sidedrawer() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("sidedrawer"));
}

#[test]
fn test_config_dir_uses_dot_config_on_unix() {
    #[cfg(not(target_os = "windows"))]
    {
        if std::env::var_os("XDG_CONFIG_HOME").is_none() {
            let dir = config_paths::config_dir().unwrap();
            assert!(
                dir.to_string_lossy().contains(".config"),
                "Expected .config in path, got: {}",
                dir.display()
            );
        }
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("drawer.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// Settings File Tests
// ========================================================================

#[test]
fn test_load_reads_yaml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drawer.yaml");
    fs::write(&path, "id: nav\nposition: top\nsize: 45vh\n").unwrap();

    let config = DrawerConfig::load(&path).unwrap();
    assert_eq!(config.id.as_deref(), Some("nav"));
    assert_eq!(config.position, Edge::Top);
    assert_eq!(config.size.as_str(), "45vh");
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = DrawerConfig::load(&path).unwrap_err();
    match err {
        DrawerError::ConfigRead { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected a read error, got {other}"),
    }
}

#[test]
fn test_load_malformed_yaml_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drawer.yaml");
    fs::write(&path, "position: [unclosed\n").unwrap();

    assert!(matches!(
        DrawerConfig::load(&path),
        Err(DrawerError::ConfigParse(_))
    ));
}

#[test]
fn test_config_serialize_deserialize() {
    let config = DrawerConfig::new()
        .with_id("settings")
        .with_position("right")
        .with_size("250px")
        .with_button(TriggerConfig {
            open_icon: "»".to_string(),
            close_icon: "«".to_string(),
            tooltip: Some("Open settings".to_string()),
            offset: "40px".to_string(),
        });

    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed = DrawerConfig::from_yaml(&yaml).unwrap();
    assert_eq!(parsed.id.as_deref(), Some("settings"));
    assert_eq!(parsed.position, Edge::Right);
    assert_eq!(parsed.size.as_str(), "250px");
    assert_eq!(parsed.button, config.button);
}

// ========================================================================
// Drawer Assembly Tests
// ========================================================================

#[test]
fn test_drawer_assembles_from_loaded_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drawer.yaml");
    fs::write(
        &path,
        "id: settings\nposition: right\nsize: 250px\nshow_overlay: true\n",
    )
    .unwrap();

    let config = DrawerConfig::load(&path).unwrap();
    let mut drawer = Drawer::new(config).unwrap();
    assert_eq!(
        drawer.panel().styles().get(StyleProperty::Right),
        Some("-250px")
    );
    assert!(drawer.overlay().is_some());

    drawer.toggle();
    assert_eq!(
        drawer.panel().styles().get(StyleProperty::Right),
        Some("0px")
    );
}
