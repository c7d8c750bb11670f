use newsdesk::ui::helpers::{format_date, section_label};
use newsdesk::NewsdeskError;

#[test]
fn given_offset_timestamps_when_formatted_should_keep_date_and_hours_minutes() {
    assert_eq!(format_date("2023-05-01T09:15:30-04:00").unwrap(), "2023-05-01 09:15");
    assert_eq!(format_date("2023-12-31T23:59:00-00:00").unwrap(), "2023-12-31 23:59");
}

#[test]
fn given_a_short_time_segment_when_formatted_should_keep_it_verbatim() {
    assert_eq!(format_date("2023-05-01T9:5-04:00").unwrap(), "2023-05-01 9:5");
}

#[test]
fn given_no_time_separator_when_formatted_should_fail() {
    let result = format_date("2023-05-01 09:15:30-04:00");

    assert!(matches!(result, Err(NewsdeskError::MalformedDate(ref raw)) if raw == "2023-05-01 09:15:30-04:00"));
}

#[test]
fn given_no_offset_marker_after_time_when_formatted_should_fail() {
    for raw in ["2023-05-01T09:15:30Z", "2023-05-01T09:15:30+02:00", "2023-05-01T09:15:30", ""] {
        assert!(
            matches!(format_date(raw), Err(NewsdeskError::MalformedDate(_))),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn given_a_section_when_labelled_should_upper_case_it() {
    assert_eq!(section_label("us"), "US");
    assert_eq!(section_label("Arts & Leisure"), "ARTS & LEISURE");
    assert_eq!(section_label(""), "");
}
