//! Text components of the card body.

use crate::dom::Element;
use crate::ui::helpers::LINK_LABEL;
use crate::ui::theme::Theme;

pub fn render_title(title: &str, theme: &Theme) -> Element {
    Element::new("h6")
        .with_class(&theme.classes.title)
        .with_text(title)
}

/// Renders a secondary line (section, date or byline) as `p > small`.
pub fn render_meta(value: &str, theme: &Theme) -> Element {
    let paragraph = Element::new("p").with_class(&theme.classes.meta);
    paragraph.append(
        Element::new("small")
            .with_class(&theme.classes.muted)
            .with_text(value),
    );
    paragraph
}

/// Renders the article link as `p > small > a`.
pub fn render_link(url: &str, theme: &Theme) -> Element {
    let link = Element::new("a")
        .with_attribute("href", url)
        .with_text(LINK_LABEL);

    let small = Element::new("small");
    small.append(link);

    let paragraph = Element::new("p").with_class(&theme.classes.text);
    paragraph.append(small);
    paragraph
}

pub fn render_abstract(summary: &str, theme: &Theme) -> Element {
    Element::new("p")
        .with_class(&theme.classes.text)
        .with_text(summary)
}
