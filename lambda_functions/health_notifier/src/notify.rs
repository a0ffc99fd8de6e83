use async_trait::async_trait;
use serde_json::json;

use crate::error::NotifyError;
use crate::message::Notification;

// SNS rejects subjects of 100 or more characters.
const MAX_SUBJECT_CHARS: usize = 99;

/// Delivery seam for notifications. The production implementation talks to
/// SNS; tests substitute a recording mock.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Submit one notification and return the publish API's message id.
    async fn publish(&self, notification: &Notification) -> Result<String, NotifyError>;
}

/// SNS-backed notifier addressing a single deployment-configured topic.
#[derive(Debug)]
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(client: aws_sdk_sns::Client, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, notification: &Notification) -> Result<String, NotifyError> {
        let mut request = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(truncate_subject(&notification.subject));

        // With an HTML alternate, both variants travel in one request keyed
        // by delivery protocol; SNS picks the right one per subscription.
        request = match &notification.html_body {
            Some(html) => request
                .message(
                    json!({
                        "default": notification.body,
                        "email": html,
                    })
                    .to_string(),
                )
                .message_structure("json"),
            None => request.message(&notification.body),
        };

        let output = request
            .send()
            .await
            .map_err(|e| NotifyError::Publish(e.to_string()))?;

        Ok(output.message_id().unwrap_or_default().to_string())
    }
}

fn truncate_subject(subject: &str) -> String {
    subject.chars().take(MAX_SUBJECT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_subjects_pass_through_unchanged() {
        assert_eq!(
            truncate_subject("PROD Health Alert: EC2 OPEN"),
            "PROD Health Alert: EC2 OPEN"
        );
    }

    #[test]
    fn long_subjects_are_truncated_to_the_sns_limit() {
        let subject = "x".repeat(300);
        let truncated = truncate_subject(&subject);
        assert_eq!(truncated.chars().count(), MAX_SUBJECT_CHARS);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let subject = "é".repeat(150);
        let truncated = truncate_subject(&subject);
        assert_eq!(truncated.chars().count(), MAX_SUBJECT_CHARS);
        assert!(truncated.chars().all(|c| c == 'é'));
    }
}
