// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instrumentation tests: the session's rebuilds show up as nested spans.

#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use lab_catalog::Group;
use lab_session::{LabSession, SessionConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

#[derive(Clone, Debug)]
struct CapturedSpan {
    name: String,
    parent: Option<String>,
}

#[derive(Clone, Default)]
struct Capture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    messages: Arc<Mutex<Vec<String>>>,
}

impl Capture {
    fn span_names(&self) -> Vec<String> {
        self.spans
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.name.clone())
            .collect()
    }

    fn parent_of(&self, name: &str) -> Option<String> {
        self.spans
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.name == name)
            .and_then(|s| s.parent.clone())
    }

    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

struct MessageVisitor(Option<String>);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let parent = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span| span.name().to_string());
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            parent,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.messages.lock().unwrap().push(message);
        }
    }
}

fn with_capture(f: impl FnOnce()) -> Capture {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    tracing::subscriber::with_default(subscriber, f);
    capture
}

fn session() -> LabSession<&'static str> {
    LabSession::new(
        vec![Group::new("one", "One", "", 0, 2), Group::new("two", "Two", "", 2, 1)],
        vec!["Alpha", "Beta", "Gamma"],
        SessionConfig::default().with_viewport_height(100.0),
    )
    .unwrap()
}

#[test]
fn refresh_wraps_filter_and_flatten() {
    let capture = with_capture(|| {
        let mut s = session();
        s.set_query("gam");
    });
    let names = capture.span_names();
    assert_eq!(
        names.iter().filter(|n| *n == "session_refresh").count(),
        2,
        "{names:?}"
    );
    assert_eq!(capture.parent_of("filter").as_deref(), Some("session_refresh"));
    assert_eq!(capture.parent_of("flatten").as_deref(), Some("session_refresh"));
}

#[test]
fn query_and_selection_changes_are_logged() {
    let capture = with_capture(|| {
        let mut s = session();
        s.set_query("a");
        s.select(1);
        s.mark_completed(1);
    });
    let messages = capture.messages();
    for expected in ["query changed", "selection changed", "item completed"] {
        assert!(
            messages.iter().any(|m| m == expected),
            "missing {expected:?} in {messages:?}"
        );
    }
}

#[test]
fn no_op_query_emits_nothing() {
    let mut s = session();
    s.set_query("beta");
    let capture = with_capture(|| {
        s.set_query(" BETA ");
    });
    assert!(capture.span_names().is_empty());
    assert!(capture.messages().is_empty());
}
