//! Lead image component.

use crate::dom::Element;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ImageInfo;

/// Renders the card image with the caption as alternate text.
pub fn render_image(info: &ImageInfo, theme: &Theme) -> Element {
    let image_el = Element::new("img")
        .with_class(&theme.classes.card_image)
        .with_attribute("src", &info.src)
        .with_attribute("alt", &info.alt);

    if let Some(style) = theme.image_style() {
        image_el.set_attribute("style", &style);
    }
    image_el
}
