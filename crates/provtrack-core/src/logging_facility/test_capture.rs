//! In-memory capture of log events for test assertions
//!
//! The capture layer is installed as the process-wide subscriber, so every
//! test in a binary writes into the same buffer. Correlate on something the
//! test controls: a unique operation name, or the `request_id` of a
//! comparison found through a unique `project`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use provtrack_core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP, FIELD_REQUEST_ID};

type EventBuffer = Arc<Mutex<Vec<CapturedEvent>>>;

/// One emitted event, every field rendered as a string
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub request_id: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, fields: HashMap<String, String>) -> Self {
        Self {
            level,
            component: fields.get(FIELD_COMPONENT).cloned(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            request_id: fields.get(FIELD_REQUEST_ID).cloned(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// True for the `event` boundary of operation `op`
    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

#[derive(Default)]
struct StringFields(HashMap<String, String>);

impl Visit for StringFields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

/// Layer appending every event to a shared buffer
pub struct TestCaptureLayer {
    buffer: EventBuffer,
}

impl TestCaptureLayer {
    /// A layer and the handle reading what it captures
    pub fn new() -> (Self, TestCapture) {
        let buffer = EventBuffer::default();
        (
            Self {
                buffer: Arc::clone(&buffer),
            },
            TestCapture { buffer },
        )
    }
}

impl<S: tracing::Subscriber> Layer<S> for TestCaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = StringFields::default();
        event.record(&mut visitor);
        let captured = CapturedEvent::from_fields(*event.metadata().level(), visitor.0);
        if let Ok(mut events) = self.buffer.lock() {
            events.push(captured);
        }
    }
}

/// Read handle on the captured events
#[derive(Clone)]
pub struct TestCapture {
    buffer: EventBuffer,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.buffer
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events emitted for `op`, in emission order
    pub fn events_for(&self, op: &str) -> Vec<CapturedEvent> {
        self.filtered(|e| e.op.as_deref() == Some(op))
    }

    /// Events carrying `name = value`
    pub fn events_with(&self, name: &str, value: &str) -> Vec<CapturedEvent> {
        self.filtered(|e| e.field(name) == Some(value))
    }

    /// Events of one comparison request
    pub fn events_for_request(&self, request_id: &str) -> Vec<CapturedEvent> {
        self.filtered(|e| e.request_id.as_deref() == Some(request_id))
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.filtered(predicate).len()
    }

    /// # Panics
    ///
    /// Panics if no `event` boundary was captured for `op`
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let total = self.events().len();
        assert!(
            self.count_events(|e| e.is(op, event)) > 0,
            "no {}/{} event among {} captured",
            op,
            event,
            total
        );
    }

    fn filtered<F>(&self, predicate: F) -> Vec<CapturedEvent>
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().into_iter().filter(|e| predicate(e)).collect()
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber on first use and
/// return a handle to the shared buffer.
///
/// ```
/// use provtrack_core::logging_facility::test_capture::init_test_capture;
/// use provtrack_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}
