//! Page anchor lookup and the in-memory host document.

use crate::dom::html::{escape, to_html};
use crate::dom::Element;
use crate::AnchorIds;

/// Capability to locate named regions of the host page.
///
/// The view resolves its anchors through this trait once, at bind time. Any UI
/// binding layer can implement it; [`Document`] is the in-memory implementation.
pub trait Page {
    /// Returns the element carrying `id`, if the page has one.
    fn element_by_id(&self, id: &str) -> Option<Element>;
}

/// In-memory host page rooted at a `body` element.
///
/// # Example
///
/// ```rust
/// use newsdesk::dom::{Document, Page};
/// use newsdesk::AnchorIds;
///
/// let document = Document::with_anchors(&AnchorIds::default());
/// assert!(document.element_by_id("articles-container").is_some());
/// assert!(document.element_by_id("nope").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    stylesheet: Option<String>,
    body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            stylesheet: None,
            body: Element::new("body"),
        }
    }

    /// Creates a document with the standard host skeleton for `anchors`.
    ///
    /// Layout:
    ///
    /// ```text
    /// body
    /// ├── div.search
    /// │   ├── input#<search_input> (type=text)
    /// │   ├── button#<search_button> "Search"
    /// │   └── button#<reset_button>  "Reset"
    /// └── div#<container>
    /// ```
    #[must_use]
    pub fn with_anchors(anchors: &AnchorIds) -> Self {
        let document = Self::new();

        let controls = Element::new("div").with_class("search");
        controls.append(
            Element::new("input")
                .with_id(&anchors.search_input)
                .with_attribute("type", "text"),
        );
        controls.append(
            Element::new("button")
                .with_id(&anchors.search_button)
                .with_text("Search"),
        );
        controls.append(
            Element::new("button")
                .with_id(&anchors.reset_button)
                .with_text("Reset"),
        );
        document.body.append(controls);
        document
            .body
            .append(Element::new("div").with_id(&anchors.container));

        document
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    #[must_use]
    pub fn with_stylesheet(mut self, href: Option<&str>) -> Self {
        self.stylesheet = href.map(String::from);
        self
    }

    #[must_use]
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Serializes the whole document as an HTML5 page.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        if let Some(href) = &self.stylesheet {
            out.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                escape(href)
            ));
        }
        out.push_str("</head>\n");
        out.push_str(&to_html(&self.body));
        out.push_str("\n</html>\n");
        out
    }
}

impl Page for Document {
    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.body.find_by_id(id)
    }
}
