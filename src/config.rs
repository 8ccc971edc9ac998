//! Drawer configuration
//!
//! Construction-time settings for a drawer. Input is deliberately permissive:
//! malformed `position` and `size` values coerce to documented defaults
//! instead of failing, so a half-written YAML file still assembles a working
//! drawer. Only the content contract is enforced, at assembly time.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DrawerError, Result};
use crate::geometry::{Edge, Extent};

fn default_size() -> Extent {
    Extent::default()
}

fn default_open_icon() -> String {
    "+".to_string()
}

fn default_close_icon() -> String {
    "-".to_string()
}

fn default_button_offset() -> String {
    "35px".to_string()
}

/// Trigger control settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Icon shown while the drawer is closed
    #[serde(default = "default_open_icon")]
    pub open_icon: String,

    /// Icon shown while the drawer is opened
    #[serde(default = "default_close_icon")]
    pub close_icon: String,

    /// Tooltip projected onto the trigger's `title` attribute
    #[serde(default)]
    pub tooltip: Option<String>,

    /// Fixed offset pinning the trigger along its perpendicular axis
    #[serde(default = "default_button_offset")]
    pub offset: String,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            open_icon: default_open_icon(),
            close_icon: default_close_icon(),
            tooltip: None,
            offset: default_button_offset(),
        }
    }
}

/// Construction-time drawer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawerConfig {
    /// Identity key; element ids derive from it by fixed suffixes.
    /// Generated from the current timestamp when absent.
    #[serde(default)]
    pub id: Option<String>,

    /// Panel size along the slide axis
    #[serde(default = "default_size", deserialize_with = "lenient_extent")]
    pub size: Extent,

    /// Edge the panel anchors to
    #[serde(default, deserialize_with = "lenient_edge")]
    pub position: Edge,

    /// Initial panel content: markup text or a tagged node
    #[serde(default)]
    pub content: Option<serde_json::Value>,

    /// Whether a dimming overlay accompanies the panel
    #[serde(default)]
    pub show_overlay: bool,

    /// Whether the panel carries a close control
    #[serde(default)]
    pub close_button: bool,

    /// Whether opening suppresses page scrolling
    #[serde(default)]
    pub suppress_scroll: bool,

    /// Trigger control settings
    #[serde(default)]
    pub button: TriggerConfig,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            id: None,
            size: default_size(),
            position: Edge::default(),
            content: None,
            show_overlay: false,
            close_button: false,
            suppress_scroll: false,
            button: TriggerConfig::default(),
        }
    }
}

impl DrawerConfig {
    /// Settings with every field at its documented default
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<Extent>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<Edge>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<serde_json::Value>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_overlay(mut self, show_overlay: bool) -> Self {
        self.show_overlay = show_overlay;
        self
    }

    pub fn with_close_button(mut self, close_button: bool) -> Self {
        self.close_button = close_button;
        self
    }

    pub fn with_suppress_scroll(mut self, suppress_scroll: bool) -> Self {
        self.suppress_scroll = suppress_scroll;
        self
    }

    pub fn with_button(mut self, button: TriggerConfig) -> Self {
        self.button = button;
        self
    }

    /// Parse settings from YAML text
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load settings from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DrawerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        tracing::info!("Loaded drawer config from {}", path.display());
        Ok(config)
    }
}

/// Accept any value for the anchor edge; non-keyword input coerces to the
/// default
fn lenient_edge<'de, D>(deserializer: D) -> std::result::Result<Edge, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_yaml::Value::String(keyword) => Edge::from(keyword.as_str()),
        other => {
            tracing::warn!("Config position {:?} is not an edge keyword, using default", other);
            Edge::default()
        }
    })
}

/// Accept any value for the panel size; non-text input coerces to the default
fn lenient_extent<'de, D>(deserializer: D) -> std::result::Result<Extent, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_yaml::Value::String(measurement) => Extent::from(measurement),
        other => {
            tracing::warn!("Config size {:?} is not a measurement, using default", other);
            Extent::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let config = DrawerConfig::from_yaml("{}").unwrap();
        assert_eq!(config.id, None);
        assert_eq!(config.size, Extent::default());
        assert_eq!(config.position, Edge::Left);
        assert!(config.content.is_none());
        assert!(!config.show_overlay);
        assert!(!config.close_button);
        assert!(!config.suppress_scroll);
        assert_eq!(config.button, TriggerConfig::default());
    }

    #[test]
    fn test_full_yaml_round_trip() {
        let config = DrawerConfig::from_yaml(
            r#"
id: settings
size: 250px
position: right
content: "<ul><li>Home</li></ul>"
show_overlay: true
close_button: true
suppress_scroll: true
button:
  open_icon: "»"
  close_icon: "«"
  tooltip: Open settings
  offset: 40px
"#,
        )
        .unwrap();
        assert_eq!(config.id.as_deref(), Some("settings"));
        assert_eq!(config.size.as_str(), "250px");
        assert_eq!(config.position, Edge::Right);
        assert!(config.show_overlay);
        assert!(config.close_button);
        assert!(config.suppress_scroll);
        assert_eq!(config.button.open_icon, "»");
        assert_eq!(config.button.close_icon, "«");
        assert_eq!(config.button.tooltip.as_deref(), Some("Open settings"));
        assert_eq!(config.button.offset, "40px");
    }

    #[test]
    fn test_malformed_position_and_size_coerce() {
        let config = DrawerConfig::from_yaml("position: 42\nsize: 300\n").unwrap();
        assert_eq!(config.position, Edge::Left);
        assert_eq!(config.size, Extent::default());

        let config = DrawerConfig::from_yaml("position: diagonal\n").unwrap();
        assert_eq!(config.position, Edge::Left);

        let config = DrawerConfig::from_yaml("position: RIGHT\n").unwrap();
        assert_eq!(config.position, Edge::Right);
    }

    #[test]
    fn test_builder_chain() {
        let config = DrawerConfig::new()
            .with_id("nav")
            .with_size("20rem")
            .with_position("bottom")
            .with_overlay(true)
            .with_suppress_scroll(true);
        assert_eq!(config.id.as_deref(), Some("nav"));
        assert_eq!(config.size.as_str(), "20rem");
        assert_eq!(config.position, Edge::Bottom);
        assert!(config.show_overlay);
        assert!(config.suppress_scroll);
    }
}
