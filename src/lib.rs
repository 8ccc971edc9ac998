//! sidedrawer - edge-anchored slide-out panels
//!
//! This crate models a slide-out drawer panel: the geometry that anchors it
//! to a viewport edge, the two-state toggle protocol that slides it on and
//! off screen, and the element records an embedding mirrors to a real
//! document.

pub mod config;
pub mod config_paths;
pub mod content;
pub mod drawer;
pub mod element;
pub mod error;
pub mod geometry;
pub mod page;
pub mod tracing;

// Re-export commonly used types
pub use config::{DrawerConfig, TriggerConfig};
pub use content::{ContentElement, ContentNode, InsertAt};
pub use drawer::Drawer;
pub use element::{Element, Fragment, StyleMap, StyleProperty};
pub use error::{DrawerError, Result};
pub use geometry::{Axis, DrawerState, Edge, Extent, SlideOffsets};
