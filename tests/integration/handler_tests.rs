use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::fixtures::{article, bound_view, capture_logs, queued_view};
use newsdesk::Article;

type Log = Rc<RefCell<Vec<String>>>;

fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn given_two_search_handlers_when_search_activated_should_invoke_both_with_current_query() {
    let (_document, view) = bound_view();
    let calls = log();

    for name in ["first", "second"] {
        let calls = Rc::clone(&calls);
        view.add_search_event_handler(move |query| {
            let calls = Rc::clone(&calls);
            async move {
                calls.borrow_mut().push(format!("{name}:{query}"));
                Ok(())
            }
        });
    }

    view.search_input().set_value("climate");
    view.search_button().click();
    view.search_input().set_value("elections");
    view.search_button().click();

    assert_eq!(
        *calls.borrow(),
        vec!["first:climate", "second:climate", "first:elections", "second:elections"]
    );
}

#[test]
fn given_a_query_when_reset_activated_should_clear_input_before_invoking_handler() {
    let (_document, view) = bound_view();
    let observed = log();

    let input = view.search_input().clone();
    let seen = Rc::clone(&observed);
    view.add_reset_event_handler(move || {
        seen.borrow_mut().push(input.value());
        async { Ok(()) }
    });

    view.search_input().set_value("stale query");
    view.reset_button().click();

    assert_eq!(*observed.borrow(), vec![String::new()]);
    assert_eq!(view.search_input().value(), "");
}

#[test]
fn given_two_reset_handlers_when_reset_activated_should_invoke_both() {
    let (_document, view) = bound_view();
    let calls = log();

    for name in ["first", "second"] {
        let calls = Rc::clone(&calls);
        view.add_reset_event_handler(move || {
            calls.borrow_mut().push(name.to_string());
            async { Ok(()) }
        });
    }

    view.reset_button().click();

    assert_eq!(*calls.borrow(), vec!["first", "second"]);
}

#[test]
fn given_a_queued_spawner_when_search_activated_twice_should_not_await_handlers() {
    let (view, spawner) = queued_view();
    let calls = log();

    let recorded = Rc::clone(&calls);
    view.add_search_event_handler(move |query| {
        let recorded = Rc::clone(&recorded);
        async move {
            recorded.borrow_mut().push(query);
            Ok(())
        }
    });

    view.search_input().set_value("a");
    view.search_button().click();
    view.search_input().set_value("b");
    view.search_button().click();

    assert_eq!(spawner.pending_count(), 2);
    assert!(calls.borrow().is_empty());

    assert_eq!(spawner.run_pending(), 2);
    assert_eq!(*calls.borrow(), vec!["a", "b"]);
}

#[test]
fn given_a_failing_handler_when_search_activated_should_still_invoke_later_handlers() {
    let (_document, view) = bound_view();
    let calls = log();

    view.add_search_event_handler(|_query| async { Err(anyhow::anyhow!("upstream unavailable")) });
    let recorded = Rc::clone(&calls);
    view.add_search_event_handler(move |query| {
        let recorded = Rc::clone(&recorded);
        async move {
            recorded.borrow_mut().push(query);
            Ok(())
        }
    });

    view.search_input().set_value("q");
    view.search_button().click();
    view.search_button().click();

    assert_eq!(*calls.borrow(), vec!["q", "q"]);
}

#[test]
fn given_a_failing_handler_when_activated_should_log_a_warning_naming_kind_and_error() {
    let (_document, view) = bound_view();
    view.add_search_event_handler(|_query| async { Err(anyhow::anyhow!("upstream unavailable")) });
    view.add_reset_event_handler(|| async { Err(anyhow::anyhow!("catalog gone")) });

    let logs = capture_logs(|| {
        view.search_button().click();
        view.reset_button().click();
    })
    .contents();

    let lines: Vec<&str> = logs.lines().collect();
    assert_eq!(lines.len(), 2, "{logs}");
    assert!(lines[0].contains("WARN"), "{logs}");
    assert!(lines[0].contains("handler=search"), "{logs}");
    assert!(lines[0].contains("upstream unavailable"), "{logs}");
    assert!(lines[1].contains("handler=reset"), "{logs}");
    assert!(lines[1].contains("catalog gone"), "{logs}");
}

#[test]
fn given_no_handlers_when_controls_activated_should_do_nothing() {
    let (_document, view) = bound_view();
    view.search_input().set_value("kept");

    view.search_button().click();
    view.reset_button().click();

    assert_eq!(view.search_input().value(), "kept");
    assert_eq!(view.container().child_element_count(), 0);
}

#[test]
fn given_a_controller_handler_when_search_activated_should_render_matching_articles() {
    let (_document, view) = bound_view();
    let view = Rc::new(view);
    let catalog: Vec<Article> = vec![
        Article {
            title: "Rust in space".to_string(),
            ..article(1)
        },
        Article {
            title: "Gardening tips".to_string(),
            ..article(2)
        },
        Article {
            title: "Rust at scale".to_string(),
            ..article(3)
        },
    ];

    let controller_view = Rc::downgrade(&view);
    let search_catalog = catalog.clone();
    view.add_search_event_handler(move |query| {
        let view = Weak::clone(&controller_view);
        let matching: Vec<Article> = search_catalog
            .iter()
            .filter(|a| a.title.contains(&query))
            .cloned()
            .collect();
        async move {
            if let Some(view) = view.upgrade() {
                view.display_articles(&matching)?;
            }
            Ok(())
        }
    });

    let reset_view = Rc::downgrade(&view);
    view.add_reset_event_handler(move || {
        let view = Weak::clone(&reset_view);
        let all = catalog.clone();
        async move {
            if let Some(view) = view.upgrade() {
                view.display_articles(&all)?;
            }
            Ok(())
        }
    });
    assert_eq!(Rc::strong_count(&view), 1);

    view.search_input().set_value("Rust");
    view.search_button().click();

    let rows = view.container().children();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].child_element_count(), 2);
    assert!(!view.container().text_content().contains("Gardening"));

    view.reset_button().click();

    assert_eq!(view.search_input().value(), "");
    assert_eq!(view.container().children().len(), 2);
    assert!(view.container().text_content().contains("Gardening"));

    let released = Rc::downgrade(&view);
    drop(view);
    assert!(released.upgrade().is_none());
}
