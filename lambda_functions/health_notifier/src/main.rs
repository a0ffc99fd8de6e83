use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::env;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

use health_notifier::{handle_event, NotifyResponse, Resources, SnsNotifier};

// Shared across invocations; the SNS client is safe to reuse sequentially.
static RESOURCES: OnceCell<Arc<Resources>> = OnceCell::const_new();

async fn initialize_resources() -> Arc<Resources> {
    let topic_arn =
        env::var("SNS_TOPIC_ARN").expect("SNS_TOPIC_ARN environment variable not set");
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "UNKNOWN".to_string());
    let html_notifications = env::var("HTML_NOTIFICATIONS")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);

    let config = aws_config::load_from_env().await;
    let sns_client = aws_sdk_sns::Client::new(&config);

    Arc::new(Resources {
        notifier: SnsNotifier::new(sns_client, topic_arn),
        environment,
        html_notifications,
    })
}

async fn function_handler(event: LambdaEvent<Value>) -> Result<NotifyResponse, Error> {
    let resources = RESOURCES.get().expect("Resources not initialized");

    let response = handle_event(
        &resources.notifier,
        &resources.environment,
        resources.html_notifications,
        event.payload,
    )
    .await?;

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .init();

    let resources = initialize_resources().await;
    info!(environment = %resources.environment, "shared resources initialized");
    RESOURCES.set(resources).expect("Failed to set resources");

    run(service_fn(function_handler)).await
}
