use thiserror::Error;

/// Input/format failures from the naming generators. Always recoverable;
/// surfaced to callers as a structured `{success: false, error}` response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConventionError {
    #[error("Invalid branch type '{found}'. Valid types: {valid}")]
    InvalidBranchType { found: String, valid: String },

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Invalid issue ref format '{0}'. Expected format: PROJECT-123")]
    InvalidIssueRefFormat(String),

    #[error("Description must contain at least one valid character")]
    DescriptionNormalizesToEmpty,

    #[error("Invalid commit type '{found}'. Valid types: {valid}")]
    InvalidCommitType { found: String, valid: String },

    #[error("Subject cannot be empty")]
    EmptySubject,
}
