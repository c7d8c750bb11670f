//! Shared element handles forming an in-memory element tree.
//!
//! An [`Element`] is a cheap-to-clone handle (`Rc<RefCell<..>>`) to one node. Clones
//! refer to the same node, so a handle resolved once at bind time keeps observing
//! every later mutation. Handles are intentionally `!Send`: the tree lives on the
//! single UI thread.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Click listener attached to an element.
pub type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    value: String,
    children: Vec<Element>,
    listeners: Vec<Listener>,
}

/// Handle to an element node.
///
/// # Example
///
/// ```rust
/// use newsdesk::dom::Element;
///
/// let row = Element::new("div").with_class("row");
/// row.append(Element::new("p").with_text("hello"));
///
/// assert_eq!(row.child_element_count(), 1);
/// assert_eq!(row.text_content(), "hello");
/// ```
#[derive(Clone)]
pub struct Element(Rc<RefCell<Node>>);

impl Element {
    /// Creates a detached element with the given tag name.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        })))
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.set_attribute("id", id);
        self
    }

    /// Sets the `class` attribute. An empty class list leaves the attribute unset.
    #[must_use]
    pub fn with_class(self, class_name: &str) -> Self {
        if !class_name.is_empty() {
            self.set_attribute("class", class_name);
        }
        self
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    /// Sets an attribute, replacing an existing value in place.
    ///
    /// Attributes keep their first insertion order, which is also the order they
    /// are serialized in.
    pub fn set_attribute(&self, name: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        match node.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    #[must_use]
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.0.borrow().attributes.clone()
    }

    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    /// Returns the `class` attribute, or an empty string.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.attribute("class").unwrap_or_default()
    }

    /// Returns whether the class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name().split_whitespace().any(|c| c == class)
    }

    pub fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = Some(text.to_string());
    }

    /// Returns the element's own text, excluding descendants.
    #[must_use]
    pub fn own_text(&self) -> Option<String> {
        self.0.borrow().text.clone()
    }

    /// Concatenates this element's text with that of every descendant, depth first.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        let node = self.0.borrow();
        if let Some(text) = &node.text {
            out.push_str(text);
        }
        for child in &node.children {
            child.collect_text(out);
        }
    }

    /// Current value of a form control.
    #[must_use]
    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    pub fn append(&self, child: Element) {
        self.0.borrow_mut().children.push(child);
    }

    /// Removes every child of this element.
    pub fn clear_children(&self) {
        self.0.borrow_mut().children.clear();
    }

    #[must_use]
    pub fn children(&self) -> Vec<Element> {
        self.0.borrow().children.clone()
    }

    #[must_use]
    pub fn child_element_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    #[must_use]
    pub fn first_element_child(&self) -> Option<Element> {
        self.0.borrow().children.first().cloned()
    }

    /// Searches this element and its descendants for the given id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<Element> {
        if self.id().as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.0
            .borrow()
            .children
            .iter()
            .find_map(|child| child.find_by_id(id))
    }

    pub fn add_click_listener<F>(&self, listener: F)
    where
        F: Fn() + 'static,
    {
        self.0.borrow_mut().listeners.push(Rc::new(listener));
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.0.borrow().listeners.len()
    }

    /// Activates the element, invoking every click listener in registration order.
    ///
    /// The listener list is snapshotted first and no borrow is held while listeners
    /// run, so they may freely read or mutate this element or its tree.
    pub fn click(&self) {
        let listeners = self.0.borrow().listeners.clone();
        tracing::trace!(tag = %self.tag(), listener_count = listeners.len(), "dispatching click");
        for listener in listeners {
            listener();
        }
    }

    /// Returns whether both handles refer to the same node.
    #[must_use]
    pub fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("Element")
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .field("text", &node.text)
            .field("children", &node.children.len())
            .finish()
    }
}
