use thiserror::Error;

/// Errors from the repo-host collaborator. 404-class lookups are normalized
/// to `Ok(None)` by the client and never surface here; everything else
/// carries the remote failure through.
#[derive(Debug, Error)]
pub enum RepoHostError {
    #[error("repo host API error: {0}")]
    Api(#[from] octocrab::Error),

    #[error("base branch '{0}' not found")]
    BaseBranchNotFound(String),

    #[error("repository '{0}' does not advertise a default branch")]
    MissingDefaultBranch(String),

    #[error("ref for branch '{0}' did not resolve to a commit")]
    UnexpectedRefObject(String),
}

impl RepoHostError {
    /// Whether the underlying remote response was a 404.
    pub fn is_not_found(&self) -> bool {
        match self {
            RepoHostError::Api(octocrab::Error::GitHub { source, .. }) => {
                source.status_code.as_u16() == 404
            }
            RepoHostError::BaseBranchNotFound(_) => true,
            _ => false,
        }
    }
}
