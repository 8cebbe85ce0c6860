//! Typed document elements and the id-keyed store.
//!
//! The [`Document`] knows nothing about rendering or layout. It is the typed
//! stand-in for the page structure the outline operations mutate: elements
//! are looked up by id, enumerated by tag in document order, and expose only
//! the attributes the outline touches.

use std::collections::HashMap;

use crate::domain::NodeId;

/// A typed document element.
///
/// Carries the tag name and the mutable presentation attributes used by
/// outlining: `class` on outline nodes, and `src`/`title`/`alt` on toggle
/// icons. All attributes are optional; markup decides which are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    class: Option<String>,
    src: Option<String>,
    title: Option<String>,
    alt: Option<String>,
}

impl Element {
    /// Creates an element with the given tag name and no attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            src: None,
            title: None,
            alt: None,
        }
    }

    /// Sets the class attribute.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the image source attribute.
    #[must_use]
    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Sets the tooltip title attribute.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the `alt` marker attribute.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the class attribute, if set.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Overwrites the class attribute.
    pub fn set_class(&mut self, class: impl Into<String>) {
        self.class = Some(class.into());
    }

    /// Returns the image source attribute, if set.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Overwrites the image source attribute.
    pub fn set_src(&mut self, src: impl Into<String>) {
        self.src = Some(src.into());
    }

    /// Returns the tooltip title attribute, if set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Overwrites the tooltip title attribute.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Returns the `alt` marker attribute, if set.
    #[must_use]
    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }

    /// Overwrites the `alt` marker attribute.
    pub fn set_alt(&mut self, alt: impl Into<String>) {
        self.alt = Some(alt.into());
    }
}

/// An id-keyed, document-ordered element store.
///
/// Elements are stored flat; the outline's nesting lives in the embedding
/// markup and is never traversed here. Lookup is by id, enumeration is by
/// tag in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    /// Ids in document order; drives enumeration.
    order: Vec<NodeId>,

    /// Elements keyed by id.
    elements: HashMap<NodeId, Element>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with pre-allocated capacity for the given
    /// number of elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            elements: HashMap::with_capacity(capacity),
        }
    }

    /// Appends an element at the end of the document.
    ///
    /// # Panics
    ///
    /// Panics if an element with the same id already exists.
    pub fn insert(&mut self, id: NodeId, element: Element) {
        assert!(
            !self.elements.contains_key(&id),
            "Duplicate element id: {id}"
        );

        self.order.push(id.clone());
        self.elements.insert(id, element);
    }

    /// Removes an element, returning it if it existed.
    pub fn remove(&mut self, id: &NodeId) -> Option<Element> {
        let element = self.elements.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(element)
    }

    /// Retrieves an element by id.
    #[must_use]
    pub fn get(&self, id: &NodeId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Retrieves an element by id for mutation.
    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Returns whether an element with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.elements.contains_key(id)
    }

    /// Returns an iterator over all elements in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Element)> {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id).map(|element| (id, element)))
    }

    /// Returns an iterator over the elements with the given tag, in document
    /// order.
    pub fn elements_by_tag<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = (&'a NodeId, &'a Element)> + 'a {
        self.iter().filter(move |(_, element)| element.tag() == tag)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::try_from(s).unwrap()
    }

    #[test]
    fn insert_and_get() {
        let mut document = Document::new();
        document.insert(id("oNode1"), Element::new("div").with_class("collapsed"));

        let element = document.get(&id("oNode1")).unwrap();
        assert_eq!(element.tag(), "div");
        assert_eq!(element.class(), Some("collapsed"));
        assert!(document.contains(&id("oNode1")));
        assert!(!document.contains(&id("oNode2")));
    }

    #[test]
    #[should_panic(expected = "Duplicate element id")]
    fn insert_duplicate_id_panics() {
        let mut document = Document::new();
        document.insert(id("oNode1"), Element::new("div"));
        document.insert(id("oNode1"), Element::new("div"));
    }

    #[test]
    fn get_mut_mutates_in_place() {
        let mut document = Document::new();
        document.insert(id("iNode1"), Element::new("img").with_alt(">"));

        let element = document.get_mut(&id("iNode1")).unwrap();
        element.set_src("Collapsed.png");
        element.set_title("expand");

        let element = document.get(&id("iNode1")).unwrap();
        assert_eq!(element.src(), Some("Collapsed.png"));
        assert_eq!(element.title(), Some("expand"));
        assert_eq!(element.alt(), Some(">"));
    }

    #[test]
    fn iter_preserves_document_order() {
        let mut document = Document::new();
        document.insert(id("oNode2"), Element::new("div"));
        document.insert(id("oNode1"), Element::new("div"));
        document.insert(id("oNode3"), Element::new("div"));

        let ids: Vec<&str> = document.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["oNode2", "oNode1", "oNode3"]);
    }

    #[test]
    fn elements_by_tag_filters_in_order() {
        let mut document = Document::new();
        document.insert(id("oNode1"), Element::new("div"));
        document.insert(id("iNode1"), Element::new("img"));
        document.insert(id("oNode2"), Element::new("div"));

        let ids: Vec<&str> = document
            .elements_by_tag("div")
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(ids, ["oNode1", "oNode2"]);

        assert_eq!(document.elements_by_tag("span").count(), 0);
    }

    #[test]
    fn remove_drops_element_and_order_entry() {
        let mut document = Document::new();
        document.insert(id("oNode1"), Element::new("div"));
        document.insert(id("oNode2"), Element::new("div"));

        let removed = document.remove(&id("oNode1")).unwrap();
        assert_eq!(removed.tag(), "div");
        assert!(!document.contains(&id("oNode1")));

        let ids: Vec<&str> = document.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["oNode2"]);

        assert!(document.remove(&id("oNode1")).is_none());
    }

    #[test]
    fn len_and_is_empty() {
        let mut document = Document::new();
        assert!(document.is_empty());

        document.insert(id("oNode1"), Element::new("div"));
        assert_eq!(document.len(), 1);
        assert!(!document.is_empty());
    }

    #[test]
    fn builder_sets_all_attributes() {
        let element = Element::new("img")
            .with_class("handle")
            .with_src("blank.png")
            .with_title("expand")
            .with_alt("*");

        assert_eq!(element.class(), Some("handle"));
        assert_eq!(element.src(), Some("blank.png"));
        assert_eq!(element.title(), Some("expand"));
        assert_eq!(element.alt(), Some("*"));
    }
}
