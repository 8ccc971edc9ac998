//! The drawer controller
//!
//! [`Drawer`] owns the element records for one slide-out panel and drives
//! them through the public operations: [`position`](Drawer::position),
//! [`size`](Drawer::size), [`toggle`](Drawer::toggle), and
//! [`add_content`](Drawer::add_content). Assembly runs the construction
//! sequence in a fixed order: records are created, anchored, sized, and
//! filled with any configured content.
//!
//! The controller's own fields are the source of truth; element records are
//! a projection written after each operation. The one exception is
//! [`toggle`](Drawer::toggle), which derives its transition direction from
//! the panel's projected offset so records mutated from outside stay
//! consistent.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::DrawerConfig;
use crate::content::{ContentNode, InsertAt};
use crate::element::{Element, Fragment, StyleProperty};
use crate::error::Result;
use crate::geometry::{DrawerState, Edge, Extent, SlideOffsets};
use crate::page;

// ============================================================================
// Class and id catalog
// ============================================================================

/// Class applied to the panel record
pub const CLASS_PANEL: &str = "drawer";
/// Class applied to the trigger record
pub const CLASS_TRIGGER: &str = "drawer-button";
/// Class applied to the overlay record
pub const CLASS_OVERLAY: &str = "drawer-overlay";
/// Class applied to the close-control record
pub const CLASS_CLOSE: &str = "drawer-close";
/// Class of the panel's content slot in rendered markup
pub const CLASS_CONTENT: &str = "drawer-content";

const TRIGGER_SUFFIX: &str = "-button";
const OVERLAY_SUFFIX: &str = "-overlay";
const CLOSE_SUFFIX: &str = "-close";

// ============================================================================
// Controller
// ============================================================================

/// Controller for one slide-out panel
#[derive(Debug, Clone)]
pub struct Drawer {
    id: String,
    /// `None` until the first `position` call records an edge
    edge: Option<Edge>,
    extent: Extent,
    offsets: SlideOffsets,
    state: DrawerState,
    open_icon: String,
    close_icon: String,
    button_offset: String,
    suppress_scroll: bool,
    fragment: Fragment,
    content: Vec<ContentNode>,
}

impl Drawer {
    /// Assemble a drawer from its configuration.
    ///
    /// Creates the element records, anchors and sizes them, and attaches any
    /// configured content. Fails only when the configured content value
    /// violates the content contract.
    pub fn new(config: DrawerConfig) -> Result<Drawer> {
        let id = config.id.unwrap_or_else(generated_id);
        let button = config.button;

        let mut fragment = Fragment::new();

        let mut panel = Element::new("div", id.clone());
        panel.add_class(CLASS_PANEL);
        fragment.insert(panel);

        let mut trigger = Element::new("a", format!("{id}{TRIGGER_SUFFIX}"));
        trigger.add_class(CLASS_TRIGGER);
        trigger.set_text(button.open_icon.clone());
        if let Some(tooltip) = button.tooltip {
            trigger.set_attribute("title", tooltip);
        }
        fragment.insert(trigger);

        if config.show_overlay {
            let mut overlay = Element::new("div", format!("{id}{OVERLAY_SUFFIX}"));
            overlay.add_class(CLASS_OVERLAY);
            overlay.styles_mut().set(StyleProperty::Visibility, "hidden");
            fragment.insert(overlay);
        }

        if config.close_button {
            let mut close = Element::new("a", format!("{id}{CLOSE_SUFFIX}"));
            close.add_class(CLASS_CLOSE);
            close.set_text("X");
            close.set_attribute("data-toggle", format!("{id}{TRIGGER_SUFFIX}"));
            fragment.insert(close);
        }

        let mut drawer = Drawer {
            id,
            edge: None,
            extent: Extent::default(),
            offsets: SlideOffsets::default(),
            state: DrawerState::Closed,
            open_icon: button.open_icon,
            close_icon: button.close_icon,
            button_offset: button.offset,
            suppress_scroll: config.suppress_scroll,
            fragment,
            content: Vec::new(),
        };

        drawer.position(config.position);
        drawer.size(config.size);
        if let Some(content) = config.content {
            drawer.add_content(content, InsertAt::End)?;
        }

        tracing::debug!(
            "Assembled drawer {} ({} at {})",
            drawer.id,
            drawer.extent,
            drawer.edge()
        );
        Ok(drawer)
    }

    /// Anchor the panel to an edge.
    ///
    /// Accepts edge keywords case-insensitively; unrecognized input falls
    /// back to the default edge. Re-anchoring first migrates the currently
    /// active offset value into the new edge's style slot (clearing the old
    /// one) and re-applies the stored size, so an open panel stays open
    /// relative to its new edge instead of snapping closed. Positional class
    /// tokens on the panel and trigger are swapped to the new edge's token.
    ///
    /// # Panics
    ///
    /// Panics when the panel or trigger record has been removed from the
    /// fragment.
    pub fn position(&mut self, edge: impl Into<Edge>) -> &mut Drawer {
        let edge = edge.into();
        let previous = self.edge.replace(edge);

        if let Some(old_edge) = previous {
            let from = old_edge.offset_property();
            let to = edge.offset_property();
            for element_id in [self.id.clone(), self.trigger_id()] {
                let element = self.fragment.expect_mut(&element_id);
                if let Some(active) = element.styles_mut().take(from) {
                    element.styles_mut().set(to, active);
                }
            }
            let extent = self.extent.clone();
            self.size(extent);
        }

        for element_id in [self.id.clone(), self.trigger_id()] {
            let element = self.fragment.expect_mut(&element_id);
            set_edge_class(element, edge);
        }

        tracing::debug!("Drawer {} anchored to {}", self.id, edge);
        self
    }

    /// Resolve and apply the panel's measured size.
    ///
    /// Accepts any measurement text; `None` falls back to the default.
    /// Sets exactly one of width/height on the panel (the anchored edge's
    /// axis) and clears the other, pins the trigger along its perpendicular
    /// axis, and re-applies the offsets for the current open/closed state.
    /// Callable before the first `position`; axis selection then assumes the
    /// default edge.
    ///
    /// # Panics
    ///
    /// Panics when the panel or trigger record has been removed from the
    /// fragment.
    pub fn size(&mut self, extent: impl Into<Extent>) -> &mut Drawer {
        let extent = extent.into();
        let edge = self.edge.unwrap_or_default();
        let offsets = SlideOffsets::resolve(&extent);
        let offset_property = edge.offset_property();

        let panel_offset = offsets.panel(self.state).to_string();
        let button_offset = offsets.button(self.state).to_string();

        let panel = self.fragment.expect_mut(&self.id);
        panel.styles_mut().set(edge.size_property(), extent.as_str());
        panel.styles_mut().take(edge.cross_size_property());
        panel.styles_mut().set(offset_property, panel_offset);

        let trigger_id = self.trigger_id();
        let trigger = self.fragment.expect_mut(&trigger_id);
        trigger
            .styles_mut()
            .set(edge.anchor_property(), self.button_offset.clone());
        trigger.styles_mut().take(edge.cross_anchor_property());
        trigger.styles_mut().set(offset_property, button_offset);

        self.extent = extent;
        self.offsets = offsets;
        tracing::debug!("Drawer {} sized to {}", self.id, self.extent);
        self
    }

    /// Flip the drawer between closed and opened.
    ///
    /// The transition direction derives from the panel's projected offset
    /// value: a negative measurement reads as closed, anything else
    /// (a cleared slot included) as opened. Opening applies the opened
    /// offsets to panel and trigger, swaps the trigger icon, shows the
    /// overlay at half opacity, and suppresses page scrolling when enabled;
    /// closing is the exact inverse.
    ///
    /// # Panics
    ///
    /// Panics when the panel or trigger record has been removed from the
    /// fragment; losing either makes the geometry unresolvable.
    pub fn toggle(&mut self) -> &mut Drawer {
        let edge = self.edge.unwrap_or_default();
        let offset_property = edge.offset_property();

        let derived = {
            let panel = self.fragment.expect(&self.id);
            DrawerState::from_style_value(panel.styles().get(offset_property))
        };
        let next = derived.toggled();

        let panel_offset = self.offsets.panel(next).to_string();
        let button_offset = self.offsets.button(next).to_string();
        let icon = match next {
            DrawerState::Opened => self.close_icon.clone(),
            DrawerState::Closed => self.open_icon.clone(),
        };

        let panel = self.fragment.expect_mut(&self.id);
        panel.styles_mut().set(offset_property, panel_offset);

        let trigger_id = self.trigger_id();
        let trigger = self.fragment.expect_mut(&trigger_id);
        trigger.styles_mut().set(offset_property, button_offset);
        trigger.set_text(icon);

        let overlay_id = self.overlay_id();
        if let Some(overlay) = self.fragment.get_mut(&overlay_id) {
            // The overlay's style set is replaced whole on each transition
            let styles = overlay.styles_mut();
            styles.clear();
            match next {
                DrawerState::Opened => {
                    styles.set(StyleProperty::Visibility, "visible");
                    styles.set(StyleProperty::Opacity, "0.5");
                }
                DrawerState::Closed => {
                    styles.set(StyleProperty::Visibility, "hidden");
                }
            }
        }

        if self.suppress_scroll {
            match next {
                DrawerState::Opened => page::suppress_scroll(),
                DrawerState::Closed => page::restore_scroll(),
            }
        }

        self.state = next;
        tracing::debug!("Drawer {} toggled {:?}", self.id, self.state);
        self
    }

    /// Attach content to the panel's content slot.
    ///
    /// `value` is markup text or a map carrying a `tag` key; anything else
    /// is rejected without touching the slot. `at` accepts the begin/end
    /// keywords case-insensitively, and unrecognized keywords land at the
    /// end.
    pub fn add_content(
        &mut self,
        value: impl Into<serde_json::Value>,
        at: impl Into<InsertAt>,
    ) -> Result<&mut Drawer> {
        let node = ContentNode::from_value(value.into())?;
        match at.into() {
            InsertAt::Begin => self.content.insert(0, node),
            InsertAt::End => self.content.push(node),
        }
        tracing::debug!(
            "Drawer {} content slot holds {} node(s)",
            self.id,
            self.content.len()
        );
        Ok(self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the trigger record
    pub fn trigger_id(&self) -> String {
        format!("{}{TRIGGER_SUFFIX}", self.id)
    }

    /// Id of the overlay record, whether or not one exists
    pub fn overlay_id(&self) -> String {
        format!("{}{OVERLAY_SUFFIX}", self.id)
    }

    /// Id of the close-control record, whether or not one exists
    pub fn close_id(&self) -> String {
        format!("{}{CLOSE_SUFFIX}", self.id)
    }

    /// The panel record.
    ///
    /// # Panics
    ///
    /// Panics when the panel record has been removed from the fragment.
    pub fn panel(&self) -> &Element {
        self.fragment.expect(&self.id)
    }

    /// The trigger record.
    ///
    /// # Panics
    ///
    /// Panics when the trigger record has been removed from the fragment.
    pub fn trigger(&self) -> &Element {
        self.fragment.expect(&self.trigger_id())
    }

    /// The overlay record, when overlays are enabled
    pub fn overlay(&self) -> Option<&Element> {
        self.fragment.get(&self.overlay_id())
    }

    /// The close-control record, when enabled
    pub fn close_control(&self) -> Option<&Element> {
        self.fragment.get(&self.close_id())
    }

    /// All element records, for embeddings that mirror them outward
    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// Mutable record access; the seam through which external code may
    /// adjust projected styles between operations
    pub fn fragment_mut(&mut self) -> &mut Fragment {
        &mut self.fragment
    }

    /// The panel's content slot, in insertion order
    pub fn content(&self) -> &[ContentNode] {
        &self.content
    }

    /// The anchored edge (the default edge when never positioned)
    pub fn edge(&self) -> Edge {
        self.edge.unwrap_or_default()
    }

    #[inline]
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// The resolved closed/opened offset pairs
    #[inline]
    pub fn offsets(&self) -> &SlideOffsets {
        &self.offsets
    }

    #[inline]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Render the drawer's records as markup, in document order: overlay,
    /// then the panel with its close control and content slot, then the
    /// trigger.
    pub fn to_markup(&self) -> String {
        let mut markup = String::new();
        if let Some(overlay) = self.overlay() {
            markup.push_str(&format!("{overlay}\n"));
        }
        let panel = self.panel();
        markup.push_str(&panel.open_tag());
        if let Some(close) = self.close_control() {
            markup.push_str(&format!("\n  {close}"));
        }
        markup.push_str(&format!("\n  <div class=\"{CLASS_CONTENT}\">"));
        for node in &self.content {
            markup.push_str(&format!("\n    {node}"));
        }
        markup.push_str("\n  </div>");
        markup.push_str(&format!("\n</{}>", panel.tag()));
        markup.push_str(&format!("\n{}", self.trigger()));
        markup
    }
}

/// Swap an element's positional class token, matching structurally against
/// the known token set
fn set_edge_class(element: &mut Element, edge: Edge) {
    for known in Edge::ALL {
        element.remove_class(known.class_token());
    }
    element.add_class(edge.class_token());
}

fn generated_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("drawer-{millis}")
}
