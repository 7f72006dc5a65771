//! In-memory event capture for log assertions
//!
//! [`init_test_capture`] installs a recording layer as the global subscriber
//! and hands back a [`TestCapture`] over the shared buffer.

use crate::core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// One recorded event, with every field rendered as a string
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    /// Value of a field, if the event carried it
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

// Integers and bools fall through to `record_debug`, whose output matches
// their `Display` form.
struct Fields<'a>(&'a mut BTreeMap<String, String>);

impl Visit for Fields<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct RecordingLayer {
    buffer: Buffer,
}

impl<S: Subscriber> Layer<S> for RecordingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut Fields(&mut fields));
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields,
        };
        if let Ok(mut events) = self.buffer.lock() {
            events.push(captured);
        }
    }
}

/// Read handle over the captured events
#[derive(Clone)]
pub struct TestCapture {
    buffer: Buffer,
}

impl TestCapture {
    /// Snapshot of every event recorded so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.buffer
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events of one operation with the given lifecycle event name
    pub fn events_for(&self, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.is(op, event))
            .collect()
    }

    /// Like [`events_for`](Self::events_for), narrowed to events whose
    /// `field` equals `value`
    pub fn events_with(&self, op: &str, event: &str, field: &str, value: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.is(op, event) && e.field(field) == Some(value))
            .collect()
    }

    /// # Panics
    ///
    /// Panics if no event of `op` named `event` was captured.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "no op={} event={} among {} captured events",
            op,
            event,
            events.len()
        );
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the recording subscriber (first call only) and return its handle
///
/// The buffer is process-wide. Tests sharing a binary should filter on a
/// field value unique to the test, such as a document id or path.
///
/// ```
/// use discodiff_core::logging_facility::test_capture::init_test_capture;
/// use discodiff_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let buffer = Buffer::default();
            tracing_subscriber::registry()
                .with(RecordingLayer {
                    buffer: buffer.clone(),
                })
                .init();
            TestCapture { buffer }
        })
        .clone()
}
