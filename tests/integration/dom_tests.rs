use newsdesk::dom::html::{escape, to_html};
use newsdesk::dom::{Document, Element, Page};
use newsdesk::AnchorIds;

#[test]
fn given_markup_characters_when_escaped_should_use_entities() {
    assert_eq!(escape(r#"<b class="x">Q&A</b>"#), "&lt;b class=&quot;x&quot;&gt;Q&amp;A&lt;/b&gt;");
    assert_eq!(escape("plain 'text'"), "plain 'text'");
}

#[test]
fn given_void_elements_when_serialized_should_omit_end_tags() {
    let line = Element::new("p").with_text("a");
    line.append(Element::new("br"));
    line.append(Element::new("IMG").with_attribute("src", "x.jpg"));

    assert_eq!(to_html(&line), r#"<p>a<br><img src="x.jpg"></p>"#);
}

#[test]
fn given_an_input_with_a_value_when_serialized_should_emit_value_attribute() {
    let input = Element::new("input").with_attribute("type", "text");
    assert_eq!(to_html(&input), r#"<input type="text">"#);

    input.set_value("climate \"talks\"");
    assert_eq!(to_html(&input), r#"<input type="text" value="climate &quot;talks&quot;">"#);
}

#[test]
fn given_an_existing_attribute_when_set_again_should_replace_in_place() {
    let el = Element::new("div").with_id("a").with_class("one");

    el.set_attribute("id", "b");

    assert_eq!(
        el.attributes(),
        vec![
            ("id".to_string(), "b".to_string()),
            ("class".to_string(), "one".to_string()),
        ]
    );
    assert!(el.has_class("one"));
    assert!(!el.has_class("on"));
}

#[test]
fn given_a_nested_tree_should_find_descendants_and_collect_text() {
    let root = Element::new("div");
    let inner = Element::new("section").with_text("first ");
    inner.append(Element::new("span").with_id("deep").with_text("second"));
    root.append(inner);
    root.append(Element::new("p").with_text(" third"));

    assert_eq!(root.text_content(), "first second third");
    assert_eq!(root.find_by_id("deep").unwrap().own_text().as_deref(), Some("second"));
    assert!(root.find_by_id("missing").is_none());

    root.clear_children();
    assert_eq!(root.child_element_count(), 0);
    assert!(root.find_by_id("deep").is_none());
}

#[test]
fn given_a_click_listener_when_clicked_should_be_able_to_mutate_its_element() {
    let button = Element::new("button").with_text("Go");
    let handle = button.clone();
    button.add_click_listener(move || {
        handle.set_text("Clicked");
        handle.add_click_listener(|| {});
    });

    button.click();

    assert_eq!(button.own_text().as_deref(), Some("Clicked"));
    assert_eq!(button.listener_count(), 2);
}

#[test]
fn given_a_standard_document_when_serialized_should_include_head_and_anchors() {
    let document = Document::with_anchors(&AnchorIds::default())
        .with_title("News & Views")
        .with_stylesheet(Some("https://cdn.example.com/site.css"));

    let html = document.to_html();

    assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n"));
    assert!(html.contains("<title>News &amp; Views</title>"));
    assert!(html.contains(r#"<link rel="stylesheet" href="https://cdn.example.com/site.css">"#));
    assert!(html.contains(r#"<div id="articles-container"></div>"#));
    assert!(html.contains(r#"<button id="reset-button">Reset</button>"#));
    assert!(html.ends_with("</body>\n</html>\n"));

    let input = document.element_by_id("search-query").unwrap();
    assert!(input.same_node(&document.element_by_id("search-query").unwrap()));
    assert!(!input.same_node(&Element::new("input")));
}

#[test]
fn given_no_stylesheet_when_serialized_should_omit_link() {
    let html = Document::new().to_html();

    assert!(!html.contains("<link"));
    assert!(html.contains("<body></body>"));
}
