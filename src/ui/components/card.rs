//! Card component: column wrapper, card and body.

use crate::dom::Element;
use crate::ui::components::{image, text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardViewModel;

/// Renders one article as a column containing a card.
///
/// The image, when present, precedes the body. The body children always appear in
/// the same order: title, section, date, byline, link, abstract.
///
/// # Example
///
/// ```rust
/// use newsdesk::ui::components::render_card;
/// use newsdesk::ui::{CardViewModel, Theme};
///
/// let card = CardViewModel {
///     body_id: "article-1".into(),
///     image: None,
///     title: "Title".into(),
///     section: "WORLD".into(),
///     date: "2023-05-01 09:15".into(),
///     byline: "By Someone".into(),
///     url: "https://example.com".into(),
///     summary: "Abstract".into(),
/// };
///
/// let column = render_card(&card, &Theme::default());
/// assert_eq!(column.class_name(), "col-sm-6");
/// ```
#[must_use]
pub fn render_card(card: &CardViewModel, theme: &Theme) -> Element {
    let column_el = Element::new("div").with_class(&theme.classes.column);
    let card_el = Element::new("div").with_class(&theme.classes.card);

    if let Some(info) = &card.image {
        card_el.append(image::render_image(info, theme));
    }
    card_el.append(render_body(card, theme));

    column_el.append(card_el);
    column_el
}

fn render_body(card: &CardViewModel, theme: &Theme) -> Element {
    let body_el = Element::new("div")
        .with_class(&theme.classes.card_body)
        .with_id(&card.body_id);

    body_el.append(text::render_title(&card.title, theme));
    body_el.append(text::render_meta(&card.section, theme));
    body_el.append(text::render_meta(&card.date, theme));
    body_el.append(text::render_meta(&card.byline, theme));
    body_el.append(text::render_link(&card.url, theme));
    body_el.append(text::render_abstract(&card.summary, theme));
    body_el
}
