use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::NotifyError;

/// Placeholder rendered for any field the incoming event does not carry.
pub const UNKNOWN: &str = "Unknown";

/// An AWS Health event as delivered by EventBridge.
///
/// Field names mirror the upstream schema and must not be altered. Every
/// field is optional; only a missing `detail` object is treated as a
/// malformed event.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEvent {
    #[serde(default)]
    pub detail: Option<HealthDetail>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDetail {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub event_type_code: Option<String>,
    #[serde(default)]
    pub event_type_category: Option<String>,
    #[serde(default)]
    pub event_description: Option<Vec<EventDescription>>,
    #[serde(default)]
    pub event_arn: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDescription {
    #[serde(default)]
    pub latest_description: Option<String>,
}

/// Flat, fully-populated view of a health event, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub service: String,
    pub status: String,
    pub event_type: String,
    pub category: String,
    pub description: String,
    pub event_arn: String,
    pub start_time: String,
    pub end_time: String,
    pub detected_at: String,
    pub region: String,
    pub account: String,
}

/// Deserialize the raw invocation payload into a typed event.
pub fn parse_event(payload: &Value) -> Result<HealthEvent, NotifyError> {
    serde_json::from_value(payload.clone())
        .map_err(|e| NotifyError::InvalidEvent(format!("malformed event payload: {e}")))
}

/// Flatten a health event into owned strings, substituting `"Unknown"` for
/// anything absent. A missing `detail` object is the one hard failure.
pub fn extract_fields(event: &HealthEvent) -> Result<EventFields, NotifyError> {
    let detail = event
        .detail
        .as_ref()
        .ok_or_else(|| NotifyError::InvalidEvent("missing detail object".to_string()))?;

    Ok(EventFields {
        service: or_unknown(detail.service.as_deref()),
        status: or_unknown(detail.status_code.as_deref()),
        event_type: or_unknown(detail.event_type_code.as_deref()),
        category: or_unknown(detail.event_type_category.as_deref()),
        description: or_unknown(
            detail
                .event_description
                .as_ref()
                .and_then(|descriptions| descriptions.first())
                .and_then(|first| first.latest_description.as_deref()),
        ),
        event_arn: or_unknown(detail.event_arn.as_deref()),
        start_time: or_unknown(detail.start_time.as_deref()),
        end_time: or_unknown(detail.end_time.as_deref()),
        detected_at: or_unknown(event.time.as_deref()),
        region: or_unknown(event.region.as_deref()),
        account: or_unknown(event.account.as_deref()),
    })
}

// Empty strings count as absent, matching the upstream producer's habit of
// sending "" for fields it has no value for.
fn or_unknown(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_optional_fields_extract_as_unknown() {
        let event: HealthEvent = serde_json::from_value(json!({
            "detail": {
                "service": "EC2",
                "statusCode": "open"
            },
            "region": "us-east-1"
        }))
        .unwrap();

        let fields = extract_fields(&event).unwrap();
        assert_eq!(fields.service, "EC2");
        assert_eq!(fields.status, "open");
        assert_eq!(fields.event_type, UNKNOWN);
        assert_eq!(fields.category, UNKNOWN);
        assert_eq!(fields.description, UNKNOWN);
        assert_eq!(fields.event_arn, UNKNOWN);
        assert_eq!(fields.start_time, UNKNOWN);
        assert_eq!(fields.end_time, UNKNOWN);
        assert_eq!(fields.detected_at, UNKNOWN);
        assert_eq!(fields.region, "us-east-1");
        assert_eq!(fields.account, UNKNOWN);
    }

    #[test]
    fn empty_detail_object_extracts_every_field_as_unknown() {
        let event = parse_event(&json!({ "detail": {} })).unwrap();
        let fields = extract_fields(&event).unwrap();

        for value in [
            &fields.service,
            &fields.status,
            &fields.event_type,
            &fields.category,
            &fields.description,
            &fields.event_arn,
            &fields.start_time,
            &fields.end_time,
            &fields.detected_at,
            &fields.region,
            &fields.account,
        ] {
            assert_eq!(value, UNKNOWN);
        }
    }

    #[test]
    fn missing_detail_is_an_invalid_event() {
        let event = parse_event(&json!({ "region": "eu-west-1" })).unwrap();
        let err = extract_fields(&event).unwrap_err();
        assert!(matches!(err, NotifyError::InvalidEvent(_)));
    }

    #[test]
    fn null_and_empty_values_degrade_to_unknown() {
        let event = parse_event(&json!({
            "detail": {
                "service": "",
                "statusCode": null,
                "endTime": null
            }
        }))
        .unwrap();

        let fields = extract_fields(&event).unwrap();
        assert_eq!(fields.service, UNKNOWN);
        assert_eq!(fields.status, UNKNOWN);
        assert_eq!(fields.end_time, UNKNOWN);
    }

    #[test]
    fn first_description_entry_wins() {
        let event = parse_event(&json!({
            "detail": {
                "eventDescription": [
                    { "latestDescription": "first entry" },
                    { "latestDescription": "second entry" }
                ]
            }
        }))
        .unwrap();

        let fields = extract_fields(&event).unwrap();
        assert_eq!(fields.description, "first entry");
    }

    #[test]
    fn empty_description_list_degrades_to_unknown() {
        let event = parse_event(&json!({
            "detail": { "eventDescription": [] }
        }))
        .unwrap();

        assert_eq!(extract_fields(&event).unwrap().description, UNKNOWN);
    }

    #[test]
    fn non_object_payload_is_rejected_at_parse_time() {
        let err = parse_event(&json!({ "detail": "not an object" })).unwrap_err();
        assert!(matches!(err, NotifyError::InvalidEvent(_)));
    }
}
