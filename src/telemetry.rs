use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Initialize structured logging. Log output goes to stderr so the JSON tool
/// responses on stdout stay machine-readable.
pub fn init_telemetry() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(true),
        )
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::debug!("branchwright telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking the steps of one workflow run.
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span with common workflow attributes
pub fn create_workflow_span(
    operation: &str,
    project: &str,
    correlation_id: Option<&str>,
) -> tracing::Span {
    tracing::info_span!(
        "workflow",
        operation = operation,
        project = project,
        correlation.id = correlation_id,
    )
}
