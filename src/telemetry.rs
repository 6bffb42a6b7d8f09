use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::types::ParticipantId;

/// Initialize structured logging for embedding applications.
/// JSON output with span context so tracker operations can be correlated
/// end to end; `RUST_LOG` narrows the filter.
pub fn init_telemetry() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true),
        )
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Yearbook tracker telemetry initialized with structured logging");
    Ok(())
}

/// Generate a correlation ID for linking related operations
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span with common page-workflow attributes
pub fn create_tracker_span(
    operation: &str,
    participant_id: Option<&ParticipantId>,
    correlation_id: &str,
) -> tracing::Span {
    tracing::info_span!(
        "page_workflow",
        operation = operation,
        participant.id = participant_id.map(|id| id.0.as_str()),
        correlation.id = correlation_id,
    )
}
