use thiserror::Error;

/// Errors from the issue-tracker collaborator. Each variant carries the name
/// of the remote call that failed so partial workflows can report precisely
/// which step broke.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("tracker request '{operation}' failed: {source}")]
    Http {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("tracker rejected '{operation}': {}", messages.join("; "))]
    Api {
        operation: &'static str,
        messages: Vec<String>,
    },

    #[error("unexpected tracker response shape for '{operation}': {detail}")]
    Decode {
        operation: &'static str,
        detail: String,
    },
}

impl TrackerError {
    pub(crate) fn http(operation: &'static str, source: reqwest::Error) -> Self {
        TrackerError::Http { operation, source }
    }

    pub(crate) fn api(operation: &'static str, messages: Vec<String>) -> Self {
        TrackerError::Api { operation, messages }
    }

    pub(crate) fn decode(operation: &'static str, detail: impl Into<String>) -> Self {
        TrackerError::Decode {
            operation,
            detail: detail.into(),
        }
    }
}
