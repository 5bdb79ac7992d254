#![forbid(unsafe_code)]

//! Tracing instrumentation tests.
//!
//!   cargo test -p dotfx-effects --features tracing --test tracing_capture

use std::sync::{Arc, Mutex};

use dotfx_core::template::RowTemplate;
use dotfx_effects::{FireFx, FrameDriver, FrameEffect, RandomDotsFx};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: Vec<(String, String)>,
    parent: Option<String>,
}

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
}

#[derive(Default, Clone)]
struct Capture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl Capture {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
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
        ctx: Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        let parent = ctx
            .current_span()
            .metadata()
            .map(|meta| meta.name().to_string());
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0,
            parent,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let message = visitor
            .0
            .into_iter()
            .find(|(name, _)| name == "message")
            .map(|(_, value)| value)
            .unwrap_or_default();
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message,
        });
    }
}

fn with_capture(f: impl FnOnce()) -> Capture {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    tracing::subscriber::with_default(subscriber, || {
        tracing::callsite::rebuild_interest_cache();
        f();
    });
    capture
}

fn field<'a>(span: &'a CapturedSpan, name: &str) -> Option<&'a str> {
    span.fields
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn fire_update_opens_span_with_frame_fields() {
    let capture = with_capture(|| {
        let mut fx = FireFx::new();
        fx.init(0, 6, 5).unwrap();
        fx.update_frame().unwrap();
        fx.update_frame().unwrap();
    });

    let updates: Vec<CapturedSpan> = capture
        .spans()
        .into_iter()
        .filter(|s| s.name == "fx_update")
        .collect();
    assert_eq!(updates.len(), 2);
    assert_eq!(field(&updates[0], "effect"), Some("Fire"));
    assert_eq!(field(&updates[0], "frame"), Some("0"));
    assert_eq!(field(&updates[1], "frame"), Some("1"));
    assert_eq!(field(&updates[1], "w"), Some("6"));
    assert_eq!(field(&updates[1], "h"), Some("5"));

    let events = capture.events();
    assert!(events.iter().any(|e| e.message == "frame arena allocated"));
    assert!(events.iter().any(|e| e.message == "effect initialized"));
}

#[test]
fn draw_line_spans_nest_under_driver_frame() {
    let capture = with_capture(|| {
        let mut driver = FrameDriver::new(RandomDotsFx::new(), 1, 3, 2, false).unwrap();
        driver.step().unwrap();
    });

    let spans = capture.spans();
    let draws: Vec<&CapturedSpan> = spans.iter().filter(|s| s.name == "fx_draw_line").collect();
    assert_eq!(draws.len(), 2);
    for (line, span) in draws.iter().enumerate() {
        assert_eq!(field(span, "line"), Some(line.to_string().as_str()));
        assert_eq!(field(span, "effect"), Some("Random Dots"));
        assert_eq!(span.parent.as_deref(), Some("frame"));
    }
}

#[test]
fn rejected_calls_log_warnings() {
    let capture = with_capture(|| {
        let mut fx = FireFx::new();
        fx.init(0, 4, 4).unwrap();
        fx.update_frame().unwrap();

        let template = RowTemplate::new(4);
        let mut row = template.build();
        assert!(fx.draw_line(&mut row, template.offset(), 9).is_err());
        let mut short = vec![0u8; 8];
        assert!(fx.draw_line(&mut short, 0, 0).is_err());
        assert!(FireFx::new().init(0, 4000, 4000).is_err());
    });

    let warnings: Vec<String> = capture
        .events()
        .into_iter()
        .filter(|e| e.level == tracing::Level::WARN)
        .map(|e| e.message)
        .collect();
    assert_eq!(
        warnings,
        vec![
            "line out of range".to_string(),
            "row buffer too short".to_string(),
            "frame arena overflow".to_string(),
        ]
    );
}
