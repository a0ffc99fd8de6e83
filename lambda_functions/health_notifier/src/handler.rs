use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error, info};

use crate::error::NotifyError;
use crate::event::{extract_fields, parse_event, EventFields};
use crate::message::{render, render_fallback};
use crate::notify::{Notifier, SnsNotifier};

/// Immutable per-worker state, created once in `main` and shared by every
/// invocation.
#[derive(Debug)]
pub struct Resources {
    pub notifier: SnsNotifier,
    pub environment: String,
    pub html_notifications: bool,
}

/// Result returned to the Lambda runtime on success, mirroring the upstream
/// trigger's expected `{statusCode, body}` shape.
#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl NotifyResponse {
    fn success(message_id: &str, environment: &str, fields: &EventFields) -> Self {
        let body = json!({
            "message": "Notification sent successfully",
            "messageId": message_id,
            "environment": environment,
            "service": fields.service,
            "status": fields.status,
        })
        .to_string();
        Self {
            status_code: 200,
            body,
        }
    }
}

/// Process one health event: extract, render, publish.
///
/// On any failure a single diagnostic notification is attempted with the raw
/// payload attached; its own failure is logged and swallowed, and the
/// original error propagates so the trigger's retry policy stays in charge.
pub async fn handle_event<N: Notifier>(
    notifier: &N,
    environment: &str,
    render_html: bool,
    payload: Value,
) -> Result<NotifyResponse, NotifyError> {
    debug!(payload = %payload, "received health event");

    match process(notifier, environment, render_html, &payload).await {
        Ok(response) => Ok(response),
        Err(err) => {
            error!(error = %err, "failed to deliver health notification");
            let fallback = render_fallback(environment, &err.to_string(), Utc::now(), &payload);
            if let Err(fallback_err) = notifier.publish(&fallback).await {
                let fallback_err = NotifyError::FallbackPublish(fallback_err.to_string());
                error!(error = %fallback_err, "fallback notification not delivered");
            }
            Err(err)
        }
    }
}

async fn process<N: Notifier>(
    notifier: &N,
    environment: &str,
    render_html: bool,
    payload: &Value,
) -> Result<NotifyResponse, NotifyError> {
    let event = parse_event(payload)?;
    let fields = extract_fields(&event)?;
    let notification = render(environment, &fields, render_html);
    let message_id = notifier.publish(&notification).await?;

    info!(
        %message_id,
        service = %fields.service,
        status = %fields.status,
        "health notification published"
    );

    Ok(NotifyResponse::success(&message_id, environment, &fields))
}
