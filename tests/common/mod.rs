//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use sidedrawer::config::{DrawerConfig, TriggerConfig};
use sidedrawer::drawer::Drawer;

/// Drawer with a fixed id and otherwise default settings
pub fn test_drawer(id: &str) -> Drawer {
    Drawer::new(DrawerConfig::new().with_id(id)).unwrap()
}

/// Drawer assembled with an explicit edge and size
pub fn positioned_drawer(id: &str, edge: &str, size: &str) -> Drawer {
    Drawer::new(
        DrawerConfig::new()
            .with_id(id)
            .with_position(edge)
            .with_size(size),
    )
    .unwrap()
}

/// Drawer with overlay and close control enabled
pub fn full_drawer(id: &str) -> Drawer {
    Drawer::new(
        DrawerConfig::new()
            .with_id(id)
            .with_overlay(true)
            .with_close_button(true)
            .with_button(TriggerConfig {
                tooltip: Some("Toggle".to_string()),
                ..TriggerConfig::default()
            }),
    )
    .unwrap()
}

/// The panel's style value along the drawer's anchored edge
pub fn panel_offset(drawer: &Drawer) -> Option<String> {
    let property = drawer.edge().offset_property();
    drawer.panel().styles().get(property).map(str::to_string)
}

/// The trigger's style value along the drawer's anchored edge
pub fn trigger_offset(drawer: &Drawer) -> Option<String> {
    let property = drawer.edge().offset_property();
    drawer.trigger().styles().get(property).map(str::to_string)
}
