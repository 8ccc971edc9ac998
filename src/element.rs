//! Element projection records
//!
//! The drawer drives a handful of document elements it does not own: the
//! panel, the trigger, and optionally an overlay and a close control. Each is
//! modeled as a plain record of style slots, class tokens, text, and
//! attributes; an embedding mirrors the records outward after each operation.
//! Records render as markup via [`Display`](std::fmt::Display) for demos and
//! snapshots. Parsing markup back in is not a goal.

use std::collections::BTreeMap;
use std::fmt;

/// Style slots a drawer writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProperty {
    Top,
    Right,
    Bottom,
    Left,
    Width,
    Height,
    Visibility,
    Opacity,
}

impl StyleProperty {
    /// The CSS property name
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleProperty::Top => "top",
            StyleProperty::Right => "right",
            StyleProperty::Bottom => "bottom",
            StyleProperty::Left => "left",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::Visibility => "visibility",
            StyleProperty::Opacity => "opacity",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered style slots for one element
///
/// Slot order follows [`StyleProperty`] declaration order so rendered
/// snapshots stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    slots: BTreeMap<StyleProperty, String>,
}

impl StyleMap {
    pub fn new() -> StyleMap {
        StyleMap::default()
    }

    /// Write a slot
    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) {
        self.slots.insert(property, value.into());
    }

    /// Read a slot
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.slots.get(&property).map(String::as_str)
    }

    /// Clear a slot, returning the value it held
    pub fn take(&mut self, property: StyleProperty) -> Option<String> {
        self.slots.remove(&property)
    }

    /// Drop every slot
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Iterate slots in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.slots
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }

    /// Render as an inline style string, e.g. `left: -300px; width: 300px`
    pub fn inline(&self) -> String {
        self.iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// One projected document element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: String,
    tag: &'static str,
    classes: Vec<String>,
    styles: StyleMap,
    text: Option<String>,
    attributes: BTreeMap<String, String>,
}

impl Element {
    /// A record with the given tag and id and nothing else set
    pub fn new(tag: &'static str, id: impl Into<String>) -> Element {
        Element {
            id: id.into(),
            tag,
            classes: Vec::new(),
            styles: StyleMap::new(),
            text: None,
            attributes: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Applied class tokens, in application order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.iter().any(|applied| applied == token)
    }

    /// Append a class token; already-applied tokens are not duplicated
    pub fn add_class(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !self.has_class(&token) {
            self.classes.push(token);
        }
    }

    /// Drop a class token if applied
    pub fn remove_class(&mut self, token: &str) {
        self.classes.retain(|applied| applied != token);
    }

    #[inline]
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    #[inline]
    pub fn styles_mut(&mut self) -> &mut StyleMap {
        &mut self.styles
    }

    /// Text content, when set
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the text content whole
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Read a plain attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Write a plain attribute
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// The opening tag with id, classes, attributes, and styles
    pub fn open_tag(&self) -> String {
        let mut tag = format!("<{} id=\"{}\"", self.tag, self.id);
        if !self.classes.is_empty() {
            tag.push_str(&format!(" class=\"{}\"", self.classes.join(" ")));
        }
        for (name, value) in &self.attributes {
            tag.push_str(&format!(" {name}=\"{value}\""));
        }
        if !self.styles.is_empty() {
            tag.push_str(&format!(" style=\"{}\"", self.styles.inline()));
        }
        tag.push('>');
        tag
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.open_tag())?;
        if let Some(text) = &self.text {
            f.write_str(text)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Id-keyed set of element records owned by one drawer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    elements: BTreeMap<String, Element>,
}

impl Fragment {
    pub fn new() -> Fragment {
        Fragment::default()
    }

    /// Add a record, keyed by its id. Replaces any record with the same id.
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id().to_string(), element);
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Remove a record, returning it
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate records in id order
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Fetch a record that must exist.
    ///
    /// # Panics
    ///
    /// Panics when no record with `id` exists. Geometry operations address
    /// the panel and trigger this way: losing either is a programming error,
    /// and carrying on would corrupt the next derived-state read.
    pub fn expect(&self, id: &str) -> &Element {
        match self.elements.get(id) {
            Some(element) => element,
            None => panic!("no element record with id {id:?}"),
        }
    }

    /// Mutable [`Fragment::expect`].
    ///
    /// # Panics
    ///
    /// Panics when no record with `id` exists.
    pub fn expect_mut(&mut self, id: &str) -> &mut Element {
        match self.elements.get_mut(id) {
            Some(element) => element,
            None => panic!("no element record with id {id:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_class_does_not_duplicate() {
        let mut element = Element::new("div", "x");
        element.add_class("drawer");
        element.add_class("drawer");
        assert_eq!(element.classes(), ["drawer"]);
    }

    #[test]
    fn test_remove_class_leaves_others() {
        let mut element = Element::new("div", "x");
        element.add_class("drawer");
        element.add_class("drawer-edge-left");
        element.remove_class("drawer-edge-left");
        assert_eq!(element.classes(), ["drawer"]);
        assert!(!element.has_class("drawer-edge-left"));
    }

    #[test]
    fn test_style_take_clears_slot() {
        let mut styles = StyleMap::new();
        styles.set(StyleProperty::Left, "-300px");
        assert_eq!(styles.take(StyleProperty::Left), Some("-300px".to_string()));
        assert_eq!(styles.get(StyleProperty::Left), None);
        assert!(styles.is_empty());
    }

    #[test]
    fn test_inline_renders_in_declaration_order() {
        let mut styles = StyleMap::new();
        styles.set(StyleProperty::Width, "300px");
        styles.set(StyleProperty::Left, "-300px");
        assert_eq!(styles.inline(), "left: -300px; width: 300px");
    }

    #[test]
    fn test_style_iter_follows_declaration_order() {
        let mut styles = StyleMap::new();
        styles.set(StyleProperty::Opacity, "0.5");
        styles.set(StyleProperty::Top, "0px");
        let slots: Vec<_> = styles.iter().collect();
        assert_eq!(
            slots,
            [(StyleProperty::Top, "0px"), (StyleProperty::Opacity, "0.5")]
        );
    }

    #[test]
    fn test_display_renders_full_element() {
        let mut element = Element::new("a", "menu-button");
        element.add_class("drawer-button");
        element.set_text("+");
        element.set_attribute("title", "Open menu");
        element.styles_mut().set(StyleProperty::Top, "35px");
        assert_eq!(
            element.to_string(),
            "<a id=\"menu-button\" class=\"drawer-button\" title=\"Open menu\" style=\"top: 35px\">+</a>"
        );
    }

    #[test]
    fn test_fragment_lookup_by_id() {
        let mut fragment = Fragment::new();
        fragment.insert(Element::new("div", "menu"));
        assert!(fragment.contains("menu"));
        assert_eq!(fragment.expect("menu").tag(), "div");
        assert!(fragment.get("menu-overlay").is_none());
    }

    #[test]
    #[should_panic(expected = "no element record")]
    fn test_expect_panics_on_missing_record() {
        let fragment = Fragment::new();
        fragment.expect("gone");
    }
}
