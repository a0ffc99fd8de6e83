use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::event::EventFields;
use crate::status::StatusClass;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const FOOTER: &str = "AWS Health Event Monitoring System";

/// One logical notification: a subject, a plain-text body, and optionally an
/// HTML rendering of the same content. Both bodies always travel together as
/// alternates of a single publish request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
    pub html_body: Option<String>,
}

/// Render the notification for an extracted event. Pure and deterministic:
/// the same fields always produce byte-identical output.
pub fn render(environment: &str, fields: &EventFields, html: bool) -> Notification {
    let class = StatusClass::classify(&fields.status);
    Notification {
        subject: render_subject(environment, fields),
        body: render_text(environment, fields, class),
        html_body: html.then(|| render_html(environment, fields, class)),
    }
}

fn render_subject(environment: &str, fields: &EventFields) -> String {
    format!(
        "{} Health Alert: {} {} - {}",
        environment,
        fields.service,
        fields.status.to_uppercase(),
        fields.event_type
    )
}

fn render_text(environment: &str, fields: &EventFields, class: StatusClass) -> String {
    format!(
        "{icon} AWS Health Event - {environment} Environment
{RULE}

📊 Event Summary:
- Service: {service}
- Status: {status}
- Type: {event_type}
- Category: {category}

🕒 Timeline:
- Detected: {detected}
- Started: {started}
- Ended: {ended}

📝 Description:
{description}

🔍 Event Details:
- Event ARN: {event_arn}
- Region: {region}
- Account: {account}

{RULE}
{FOOTER}",
        icon = class.icon(),
        service = fields.service,
        status = fields.status,
        event_type = fields.event_type,
        category = fields.category,
        detected = fields.detected_at,
        started = fields.start_time,
        ended = fields.end_time,
        description = fields.description,
        event_arn = fields.event_arn,
        region = fields.region,
        account = fields.account,
    )
}

// Destination is a trusted notification channel, so the description goes in
// verbatim, unescaped, same as the plain-text body.
fn render_html(environment: &str, fields: &EventFields, class: StatusClass) -> String {
    format!(
        r#"<html>
<body style="font-family: Arial, Helvetica, sans-serif; color: #212121;">
<div style="background-color: {color}; color: #ffffff; padding: 12px 16px; font-size: 18px;">
{icon} AWS Health Event - {environment} Environment
</div>
<h3>📊 Event Summary</h3>
<ul>
<li><b>Service:</b> {service}</li>
<li><b>Status:</b> {status}</li>
<li><b>Type:</b> {event_type}</li>
<li><b>Category:</b> {category}</li>
</ul>
<h3>🕒 Timeline</h3>
<ul>
<li><b>Detected:</b> {detected}</li>
<li><b>Started:</b> {started}</li>
<li><b>Ended:</b> {ended}</li>
</ul>
<h3>📝 Description</h3>
<p>{description}</p>
<h3>🔍 Event Details</h3>
<ul>
<li><b>Event ARN:</b> {event_arn}</li>
<li><b>Region:</b> {region}</li>
<li><b>Account:</b> {account}</li>
</ul>
<hr>
<p style="color: #757575;">{FOOTER}</p>
</body>
</html>"#,
        color = class.color(),
        icon = class.icon(),
        service = fields.service,
        status = fields.status,
        event_type = fields.event_type,
        category = fields.category,
        detected = fields.detected_at,
        started = fields.start_time,
        ended = fields.end_time,
        description = fields.description,
        event_arn = fields.event_arn,
        region = fields.region,
        account = fields.account,
    )
}

/// Render the terse diagnostic sent when the primary notification could not
/// be produced or delivered. The timestamp is passed in by the caller.
pub fn render_fallback(
    environment: &str,
    error: &str,
    failed_at: DateTime<Utc>,
    raw_event: &Value,
) -> Notification {
    let payload =
        serde_json::to_string_pretty(raw_event).unwrap_or_else(|_| raw_event.to_string());

    Notification {
        subject: format!("{environment} Health Alert: Processing Error"),
        body: format!(
            "⚠️ AWS Health Event Processing Error - {environment} Environment
{RULE}

A health event was received but could not be delivered as a formatted
notification.

- Error: {error}
- Timestamp: {timestamp}

Original event payload:
{payload}

{RULE}
{FOOTER}",
            timestamp = failed_at.to_rfc3339(),
        ),
        html_body: None,
    }
}
