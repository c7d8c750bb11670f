use std::collections::BTreeMap;
use std::io::Write;

use newsdesk::{AnchorIds, Config, NewsdeskError, Theme};
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn given_an_empty_map_when_parsed_should_use_defaults() {
    let config = Config::from_map(&BTreeMap::new());

    assert_eq!(config, Config::default());
    assert_eq!(config.anchors, AnchorIds::default());
    assert_eq!(config.page_title, "Articles");
}

#[test]
fn given_selector_style_and_blank_values_when_parsed_should_normalize_them() {
    let mut map = BTreeMap::new();
    map.insert("search_input_id".to_string(), " #q ".to_string());
    map.insert("reset_button_id".to_string(), "#".to_string());
    map.insert("theme".to_string(), "   ".to_string());
    map.insert("trace_level".to_string(), "debug".to_string());
    map.insert("page_title".to_string(), "Top Stories".to_string());

    let config = Config::from_map(&map);

    assert_eq!(config.anchors.search_input, "q");
    assert_eq!(config.anchors.reset_button, "reset-button");
    assert_eq!(config.theme_name, None);
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert_eq!(config.page_title, "Top Stories");
}

#[test]
fn given_a_partial_toml_file_when_loaded_should_fill_missing_fields_with_defaults() {
    let file = toml_file(
        r#"
theme = "minimal"
stylesheet = "style.css"

[anchors]
container = "results"
"#,
    );

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.theme_name.as_deref(), Some("minimal"));
    assert_eq!(config.stylesheet.as_deref(), Some("style.css"));
    assert_eq!(config.anchors.container, "results");
    assert_eq!(config.anchors.search_button, "search-button");
    assert_eq!(config.page_title, "Articles");
}

#[test]
fn given_invalid_toml_when_loaded_should_fail_with_config_error() {
    let file = toml_file("theme = [unterminated");

    assert!(matches!(Config::from_file(file.path()), Err(NewsdeskError::Config(_))));
}

#[test]
fn given_a_missing_file_when_loaded_should_fail_with_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = Config::from_file(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(NewsdeskError::Io(_))));
}

#[test]
fn given_theme_settings_when_resolved_should_prefer_file_then_name_then_default() {
    let file = toml_file(
        r#"
name = "custom"

[classes]
row = "r"
column = "c"
card = "k"
card_image = "i"
card_body = "b"
title = "t"
meta = "m"
muted = "u"
text = "x"
"#,
    );

    let from_file = Config {
        theme_name: Some("minimal".to_string()),
        theme_file: Some(file.path().to_string_lossy().into_owned()),
        ..Config::default()
    };
    assert_eq!(from_file.resolve_theme().name, "custom");

    let from_name = Config {
        theme_name: Some("minimal".to_string()),
        ..Config::default()
    };
    assert_eq!(from_name.resolve_theme().name, "minimal");

    assert_eq!(Config::default().resolve_theme(), Theme::default());
}

#[test]
fn given_unloadable_themes_when_resolved_should_fall_back_to_default() {
    let unknown = Config {
        theme_name: Some("no-such-theme".to_string()),
        ..Config::default()
    };
    assert_eq!(unknown.resolve_theme(), Theme::default());

    let broken = Config {
        theme_file: Some("/definitely/not/here.toml".to_string()),
        ..Config::default()
    };
    assert_eq!(broken.resolve_theme(), Theme::default());
}

#[test]
fn given_a_file_config_when_merged_with_settings_should_override_only_given_keys() {
    let file = toml_file(
        r#"
theme = "minimal"
page_title = "From file"

[anchors]
container = "results"
search_input = "q"
"#,
    );
    let mut settings = BTreeMap::new();
    settings.insert("container_id".to_string(), "#feed".to_string());
    settings.insert("theme".to_string(), "bootstrap".to_string());
    settings.insert("page_title".to_string(), " ".to_string());
    settings.insert("unknown".to_string(), "ignored".to_string());

    let config = Config::from_file(file.path()).unwrap().merge_map(&settings);

    assert_eq!(config.anchors.container, "feed");
    assert_eq!(config.anchors.search_input, "q");
    assert_eq!(config.theme_name.as_deref(), Some("bootstrap"));
    assert_eq!(config.page_title, "From file");
}
