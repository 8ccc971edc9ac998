//! Edge anchoring and slide geometry
//!
//! Pure data: which edge a panel anchors to, the axis it slides along, and
//! the closed/opened offset pairs derived from its size. Nothing here touches
//! element records; the controller applies the resolved values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::StyleProperty;

// ============================================================================
// Edges and axes
// ============================================================================

/// Viewport edge a drawer anchors to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges for iteration
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Parse an edge keyword, case-insensitively
    pub fn from_keyword(keyword: &str) -> Option<Edge> {
        match keyword.to_ascii_lowercase().as_str() {
            "top" => Some(Edge::Top),
            "right" => Some(Edge::Right),
            "bottom" => Some(Edge::Bottom),
            "left" => Some(Edge::Left),
            _ => None,
        }
    }

    /// The edge's keyword form
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }

    /// Returns the axis the panel slides along
    pub fn axis(&self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::Horizontal,
            Edge::Top | Edge::Bottom => Axis::Vertical,
        }
    }

    /// Style slot carrying the slide offset for this edge
    #[inline]
    pub fn offset_property(&self) -> StyleProperty {
        match self {
            Edge::Top => StyleProperty::Top,
            Edge::Right => StyleProperty::Right,
            Edge::Bottom => StyleProperty::Bottom,
            Edge::Left => StyleProperty::Left,
        }
    }

    /// Style slot carrying the panel's measured size
    pub fn size_property(&self) -> StyleProperty {
        match self.axis() {
            Axis::Horizontal => StyleProperty::Width,
            Axis::Vertical => StyleProperty::Height,
        }
    }

    /// The size slot the other axis would use; cleared on re-size
    pub fn cross_size_property(&self) -> StyleProperty {
        match self.axis() {
            Axis::Horizontal => StyleProperty::Height,
            Axis::Vertical => StyleProperty::Width,
        }
    }

    /// Style slot pinning the trigger along the perpendicular axis
    pub fn anchor_property(&self) -> StyleProperty {
        match self.axis() {
            Axis::Horizontal => StyleProperty::Top,
            Axis::Vertical => StyleProperty::Left,
        }
    }

    /// The anchor slot the other axis would use; cleared on re-size
    pub fn cross_anchor_property(&self) -> StyleProperty {
        match self.axis() {
            Axis::Horizontal => StyleProperty::Left,
            Axis::Vertical => StyleProperty::Top,
        }
    }

    /// Positional class token for stylesheets
    pub fn class_token(&self) -> &'static str {
        match self {
            Edge::Top => "drawer-edge-top",
            Edge::Right => "drawer-edge-right",
            Edge::Bottom => "drawer-edge-bottom",
            Edge::Left => "drawer-edge-left",
        }
    }
}

impl Default for Edge {
    /// The fallback edge for absent or unrecognized input
    fn default() -> Self {
        Edge::Left
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_keyword())
    }
}

impl From<&str> for Edge {
    /// Lenient conversion: unrecognized keywords fall back to the default
    fn from(keyword: &str) -> Self {
        Edge::from_keyword(keyword).unwrap_or_default()
    }
}

impl From<String> for Edge {
    fn from(keyword: String) -> Self {
        Edge::from(keyword.as_str())
    }
}

/// Axis a panel slides along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

// ============================================================================
// Extents and offsets
// ============================================================================

/// A size measurement along the slide axis, e.g. "300px"
///
/// Any length unit the styling layer understands is carried verbatim; absent
/// input falls back to [`Extent::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extent(String);

impl Extent {
    /// Fallback measurement
    pub const DEFAULT: &'static str = "300px";

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The measurement negated, sliding the panel off-screen
    pub fn negated(&self) -> String {
        format!("-{}", self.0)
    }
}

impl Default for Extent {
    fn default() -> Self {
        Extent(Extent::DEFAULT.to_string())
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Extent {
    fn from(measurement: &str) -> Self {
        Extent(measurement.to_string())
    }
}

impl From<String> for Extent {
    fn from(measurement: String) -> Self {
        Extent(measurement)
    }
}

impl From<Option<&str>> for Extent {
    /// `None` falls back to the default measurement
    fn from(measurement: Option<&str>) -> Self {
        measurement.map(Extent::from).unwrap_or_default()
    }
}

/// Closed/opened style values for the panel and its trigger
///
/// The panel hides by sliding a full extent off-screen (negative offset) and
/// shows flush with the edge; the trigger rides along, sitting on the edge
/// while closed and a full extent inward while opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideOffsets {
    pub panel_closed: String,
    pub panel_opened: String,
    pub button_closed: String,
    pub button_opened: String,
}

impl SlideOffsets {
    /// Derive the offset pairs for a measured size
    pub fn resolve(extent: &Extent) -> SlideOffsets {
        SlideOffsets {
            panel_closed: extent.negated(),
            panel_opened: "0px".to_string(),
            button_closed: "0px".to_string(),
            button_opened: extent.to_string(),
        }
    }

    /// The panel's active offset for a state
    #[inline]
    pub fn panel(&self, state: DrawerState) -> &str {
        match state {
            DrawerState::Closed => &self.panel_closed,
            DrawerState::Opened => &self.panel_opened,
        }
    }

    /// The trigger's active offset for a state
    #[inline]
    pub fn button(&self, state: DrawerState) -> &str {
        match state {
            DrawerState::Closed => &self.button_closed,
            DrawerState::Opened => &self.button_opened,
        }
    }
}

impl Default for SlideOffsets {
    fn default() -> Self {
        SlideOffsets::resolve(&Extent::default())
    }
}

// ============================================================================
// State
// ============================================================================

/// Open/closed state of a drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    Closed,
    Opened,
}

impl DrawerState {
    /// Derive the state a style value encodes.
    ///
    /// A closed panel sits off-screen behind a negative measurement, so a
    /// value containing `-` reads as closed; anything else, a cleared slot
    /// included, reads as opened.
    pub fn from_style_value(value: Option<&str>) -> DrawerState {
        match value {
            Some(value) if value.contains('-') => DrawerState::Closed,
            _ => DrawerState::Opened,
        }
    }

    /// The opposite state
    #[inline]
    pub fn toggled(&self) -> DrawerState {
        match self {
            DrawerState::Closed => DrawerState::Opened,
            DrawerState::Opened => DrawerState::Closed,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, DrawerState::Opened)
    }
}
