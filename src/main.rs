//! Snapshot renderer entry point.
//!
//! Renders a JSON file of articles into a static HTML page and prints it to stdout.
//!
//! # Usage
//!
//! ```text
//! newsdesk <articles.json> [config.toml] [key=value ...]
//! ```
//!
//! The articles file may be a bare JSON array of articles or an object holding them
//! under `results`. Without a config file the defaults are used (Bootstrap theme,
//! the standard anchor ids). `key=value` settings such as `theme=minimal` or
//! `container_id=results` override the file. Logs go to stderr; see `RUST_LOG`.

use std::collections::BTreeMap;
use std::process::ExitCode;

use anyhow::Context;
use newsdesk::dom::Document;
use newsdesk::{initialize, parse_articles, Config};

/// Snapshots have no interactive controls, so spawned handlers are simply dropped.
fn discard(_future: newsdesk::app::LocalBoxFuture<'static, ()>) {}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("newsdesk: {e:#}");
            ExitCode::FAILURE
        }
    }
}

const USAGE: &str = "usage: newsdesk <articles.json> [config.toml] [key=value ...]";

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let articles_path = args.next().context(USAGE)?;

    let mut config_path = None;
    let mut overrides = BTreeMap::new();
    for arg in args {
        let setting = arg
            .split_once('=')
            .map(|(key, value)| (key.trim().to_string(), value.to_string()));
        match setting {
            Some((key, value)) => {
                overrides.insert(key, value);
            }
            None if config_path.is_none() => config_path = Some(arg),
            None => anyhow::bail!("unexpected argument {arg:?}\n{USAGE}"),
        }
    }

    let config = match config_path {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => Config::default(),
    }
    .merge_map(&overrides);
    newsdesk::observability::init_tracing(&config);

    let span = tracing::debug_span!("snapshot", articles = %articles_path);
    let _guard = span.entered();

    let json = std::fs::read_to_string(&articles_path)
        .with_context(|| format!("failed to read {articles_path}"))?;
    let articles = parse_articles(&json)?;

    let document = Document::with_anchors(&config.anchors)
        .with_title(&config.page_title)
        .with_stylesheet(config.stylesheet.as_deref());

    let view = initialize(&config, &document, discard)?;
    view.display_articles(&articles)?;

    tracing::info!(article_count = articles.len(), "rendered snapshot");
    println!("{}", document.to_html());
    Ok(())
}
