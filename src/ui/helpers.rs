//! Shared rendering utilities.
//!
//! Text transformations applied to article fields before they reach a card.

use crate::domain::error::{NewsdeskError, Result};

/// Label of the link pointing at the full article.
pub const LINK_LABEL: &str = "LINK";

/// Number of leading characters kept from the time segment (`HH:MM`).
const TIME_PREFIX_LEN: usize = 5;

/// Formats a publication timestamp as `"<date> <HH:MM>"`.
///
/// The input is split on the first `T`; the date is everything before it. The time
/// is the text between that `T` and the next `-` (the start of the UTC offset),
/// truncated to five characters. This is a literal layout rule: no calendar parsing,
/// validation or timezone conversion happens.
///
/// # Errors
///
/// Returns [`NewsdeskError::MalformedDate`] when the input has no `T`, or no `-`
/// after the `T`. `Z` and `+hh:mm` offsets therefore fail.
///
/// # Example
///
/// ```rust
/// use newsdesk::ui::helpers::format_date;
///
/// assert_eq!(format_date("2023-05-01T09:15:30-04:00")?, "2023-05-01 09:15");
/// assert!(format_date("2023-05-01").is_err());
/// # Ok::<(), newsdesk::NewsdeskError>(())
/// ```
pub fn format_date(published: &str) -> Result<String> {
    let malformed = || NewsdeskError::MalformedDate(published.to_string());

    let (day, rest) = published.split_once('T').ok_or_else(malformed)?;
    let (time, _offset) = rest.split_once('-').ok_or_else(malformed)?;
    let hours_minutes: String = time.chars().take(TIME_PREFIX_LEN).collect();

    Ok(format!("{day} {hours_minutes}"))
}

/// Upper-cases a section name for display.
#[must_use]
pub fn section_label(section: &str) -> String {
    section.to_uppercase()
}
