//! AWS Health event notifier.
//!
//! Lambda function that receives AWS Health events from EventBridge,
//! formats a human-readable alert, and publishes it to an SNS topic. If the
//! event cannot be processed or delivered, a best-effort diagnostic
//! notification is sent instead and the original error is propagated so the
//! trigger's retry policy applies.

mod error;
pub use error::NotifyError;

mod event;
pub use event::{
    extract_fields, parse_event, EventDescription, EventFields, HealthDetail, HealthEvent, UNKNOWN,
};

mod status;
pub use status::StatusClass;

mod message;
pub use message::{render, render_fallback, Notification};

mod notify;
pub use notify::{Notifier, SnsNotifier};

mod handler;
pub use handler::{handle_event, NotifyResponse, Resources};
