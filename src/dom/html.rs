//! HTML serialization of element trees.

use crate::dom::Element;

/// Elements that never have an end tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Serializes an element and its descendants to an HTML fragment.
///
/// Text and attribute values are escaped. An element's own text is written before
/// its children. For `input` elements a non-empty `value` is emitted as a `value`
/// attribute, unless one is already set.
///
/// # Example
///
/// ```rust
/// use newsdesk::dom::{html::to_html, Element};
///
/// let link = Element::new("a")
///     .with_attribute("href", "https://example.com/?a=1&b=2")
///     .with_text("LINK");
///
/// assert_eq!(
///     to_html(&link),
///     r#"<a href="https://example.com/?a=1&amp;b=2">LINK</a>"#
/// );
/// ```
#[must_use]
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    let tag = element.tag();
    out.push('<');
    out.push_str(&tag);

    let mut attributes = element.attributes();
    if tag == "input" {
        let value = element.value();
        if !value.is_empty() && !attributes.iter().any(|(name, _)| name == "value") {
            attributes.push(("value".to_string(), value));
        }
    }
    for (name, value) in &attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&tag.as_str()) {
        return;
    }

    if let Some(text) = element.own_text() {
        out.push_str(&escape(&text));
    }
    for child in element.children() {
        write_element(&child, out);
    }

    out.push_str("</");
    out.push_str(&tag);
    out.push('>');
}

/// Escapes `&`, `<`, `>` and `"` for use in text or double-quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
