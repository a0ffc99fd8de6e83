use thiserror::Error;

/// Errors raised while turning a health event into a delivered notification.
///
/// `InvalidEvent` and `Publish` are fatal for the invocation and propagate to
/// the Lambda runtime so the trigger's redelivery policy can engage.
/// `FallbackPublish` is only ever logged; it must not replace the error that
/// put the invocation on the fallback path in the first place.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    #[error("Failed to publish notification: {0}")]
    Publish(String),
    #[error("Failed to publish fallback notification: {0}")]
    FallbackPublish(String),
}
