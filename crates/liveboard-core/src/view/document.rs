// ── Host document ──
//
// In-memory stand-in for the page the dashboard renders into: a flat map
// of element id → (inner HTML, class list). Components never look
// elements up by ambient global name; they go through a `ViewBinding`.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use tracing::warn;

use super::ViewBinding;

/// One addressable element of the host page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    inner_html: String,
    classes: BTreeSet<String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn into_inner_html(self) -> String {
        self.inner_html
    }

    /// Replace the children with pre-built markup.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    /// Replace the children with a single text node.
    ///
    /// The stored markup is the serialization of that text node, so markup
    /// characters in `text` can never become elements.
    pub fn set_text_content(&mut self, text: &str) {
        self.inner_html = serialize_text_node(text);
    }

    /// Concatenated text of all descendants (tags dropped, entities decoded).
    pub fn text_content(&self) -> String {
        text_of(&self.inner_html)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Space-separated class list, as it appears in a `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The page the dashboard writes into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: IndexMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding every slot named by `binding`, in page order.
    pub fn for_binding(binding: &ViewBinding) -> Self {
        let mut doc = Self::new();
        doc.insert(&binding.total_count, Element::new());
        doc.insert(&binding.live_count, Element::new());
        doc.insert(&binding.last_update, Element::new());
        doc.insert(&binding.grid, Element::new().with_class("streamers-grid"));
        doc.insert(&binding.modal, Element::new().with_class("modal"));
        doc.insert(&binding.modal_title, Element::new());
        doc.insert(&binding.modal_body, Element::new().with_class("modal-body"));
        doc
    }

    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_owned(), element);
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.get(id).map(Element::inner_html)
    }

    pub fn text_content(&self, id: &str) -> Option<String> {
        self.get(id).map(Element::text_content)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.has_class(class))
    }

    // ── Mutation ─────────────────────────────────────────────────────
    //
    // Writes to a missing slot are logged and dropped: the page contract is
    // fixed, so a missing id is a host-page bug, not a runtime condition.

    pub fn set_inner_html(&mut self, id: &str, html: impl Into<String>) -> bool {
        self.slot_mut(id).map(|e| e.set_inner_html(html)).is_some()
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.slot_mut(id).map(|e| e.set_text_content(text)).is_some()
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        self.slot_mut(id).map(|e| e.add_class(class)).is_some()
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> bool {
        self.slot_mut(id).map(|e| e.remove_class(class)).is_some()
    }

    fn slot_mut(&mut self, id: &str) -> Option<&mut Element> {
        let slot = self.elements.get_mut(id);
        if slot.is_none() {
            warn!(id, "element missing from host document");
        }
        slot
    }
}

// ── Serialization helpers ────────────────────────────────────────────

/// HTML serialization of a text node: `&`, `<`, `>` and no-break space are
/// escaped, everything else is emitted verbatim.
fn serialize_text_node(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Strip tags and decode the entities this crate emits.
fn text_of(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
