//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging geometry
//! resolution and toggle transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=sidedrawer::drawer=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/sidedrawer/logs/sidedrawer.log` with daily
//! rotation. File logging uses debug level by default for more verbose
//! troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::drawer::Drawer;
use crate::geometry::{DrawerState, Edge};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering. File logging
/// writes to `~/.config/sidedrawer/logs/sidedrawer.log` with daily rotation.
/// Only binaries call this; the library never installs a subscriber.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "sidedrawer.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of a drawer's projected geometry for diffing
#[derive(Debug, Clone)]
pub struct DrawerSnapshot {
    pub state: DrawerState,
    pub edge: Edge,
    pub panel_offset: Option<String>,
    pub button_offset: Option<String>,
    pub icon: Option<String>,
}

impl DrawerSnapshot {
    pub fn from_drawer(drawer: &Drawer) -> Self {
        let edge = drawer.edge();
        let offset_property = edge.offset_property();
        Self {
            state: drawer.state(),
            edge,
            panel_offset: drawer
                .panel()
                .styles()
                .get(offset_property)
                .map(str::to_string),
            button_offset: drawer
                .trigger()
                .styles()
                .get(offset_property)
                .map(str::to_string),
            icon: drawer.trigger().text().map(str::to_string),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &DrawerSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.state != other.state {
            changes.push(format!("state: {:?} -> {:?}", self.state, other.state));
        }
        if self.edge != other.edge {
            changes.push(format!("edge: {} -> {}", self.edge, other.edge));
        }
        if self.panel_offset != other.panel_offset {
            changes.push(format!(
                "panel: {} -> {}",
                self.panel_offset.as_deref().unwrap_or("(unset)"),
                other.panel_offset.as_deref().unwrap_or("(unset)")
            ));
        }
        if self.button_offset != other.button_offset {
            changes.push(format!(
                "button: {} -> {}",
                self.button_offset.as_deref().unwrap_or("(unset)"),
                other.button_offset.as_deref().unwrap_or("(unset)")
            ));
        }
        if self.icon != other.icon {
            changes.push(format!(
                "icon: {} -> {}",
                self.icon.as_deref().unwrap_or("(unset)"),
                other.icon.as_deref().unwrap_or("(unset)")
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrawerConfig;

    #[test]
    fn test_snapshot_diff_reports_transition() {
        let mut drawer = Drawer::new(DrawerConfig::new().with_id("d")).unwrap();
        let before = DrawerSnapshot::from_drawer(&drawer);
        drawer.toggle();
        let after = DrawerSnapshot::from_drawer(&drawer);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("state: Closed -> Opened"));
        assert!(diff.contains("panel: -300px -> 0px"));
        assert!(before.diff(&before).is_none());
    }
}
