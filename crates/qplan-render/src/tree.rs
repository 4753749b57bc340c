//! Arena-backed model of the renderer-produced visual tree.
//!
//! The embedding renderer lays the diagram out as a fixed table-like nesting
//! of elements (see the class and data-attribute markers below); this module
//! is the headless stand-in for that element tree. Parent links are plain
//! ids used for upward lookup only, never ownership.

use crate::geom::{Rect, rect};
use indexmap::IndexMap;

/// Class marker carried by every rendered operator box.
pub const NODE_CLASS: &str = "qp-node";
/// Class marker of the row container enclosing a node and its children.
pub const ROW_CLASS: &str = "qp-tr";
/// Class marker of the diagram root; its rect is the coordinate origin for
/// all connector output.
pub const ROOT_CLASS: &str = "qp-root";

/// Data attribute carried by statement-level containers.
pub const STATEMENT_ID_ATTR: &str = "data-statement-id";
/// Data attribute carried by operator nodes (absent for top-level statements).
pub const NODE_ID_ATTR: &str = "data-node-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// One element of the visual tree: class list, attributes, screen rectangle.
#[derive(Debug, Clone)]
pub struct VisualElement {
    classes: Vec<String>,
    attrs: IndexMap<String, String>,
    rect: Rect,
}

impl VisualElement {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            attrs: IndexMap::new(),
            rect: rect(0.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }
}

impl Default for VisualElement {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct ElementData {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    element: VisualElement,
}

#[derive(Debug, Default)]
pub struct VisualTree {
    elements: Vec<ElementData>,
}

impl VisualTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element under `parent` (or as a root) and returns its id.
    /// Children keep insertion order, which is the document order the
    /// renderer produced them in.
    pub fn push(&mut self, parent: Option<ElementId>, element: VisualElement) -> ElementId {
        let id = ElementId(self.elements.len());
        if let Some(parent) = parent {
            self.elements[parent.0].children.push(id);
        }
        self.elements.push(ElementData {
            parent,
            children: Vec::new(),
            element,
        });
        id
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements[id.0].parent
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.elements[id.0].children
    }

    pub fn child(&self, id: ElementId, index: usize) -> Option<ElementId> {
        self.elements[id.0].children.get(index).copied()
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements[id.0].element.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements[id.0]
            .element
            .classes
            .iter()
            .any(|c| c == class)
    }

    pub fn rect(&self, id: ElementId) -> Rect {
        self.elements[id.0].element.rect
    }

    /// Bounded upward traversal over proper ancestors; the element itself is
    /// not a candidate.
    pub fn find_ancestor(
        &self,
        id: ElementId,
        predicate: impl Fn(ElementId) -> bool,
    ) -> Option<ElementId> {
        let mut current = self.parent(id);
        while let Some(element) = current {
            if predicate(element) {
                return Some(element);
            }
            current = self.parent(element);
        }
        None
    }

    pub fn find_ancestor_with_class(&self, id: ElementId, class: &str) -> Option<ElementId> {
        self.find_ancestor(id, |e| self.has_class(e, class))
    }

    /// True when `ancestor` is `id` itself or appears on `id`'s parent chain.
    pub fn is_ancestor_or_self(&self, ancestor: ElementId, id: ElementId) -> bool {
        ancestor == id || self.find_ancestor(id, |e| e == ancestor).is_some()
    }

    /// All elements carrying `class`, in document order.
    pub fn elements_with_class<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = ElementId> + 'a {
        (0..self.elements.len())
            .map(ElementId)
            .filter(move |&id| self.has_class(id, class))
    }
}
