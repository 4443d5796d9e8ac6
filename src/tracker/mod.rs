//! Issue-tracker collaborator: typed models, GraphQL client, and the trait
//! seam the workflow orchestrator runs against.

pub mod client;
pub mod error;
pub mod priority;
pub mod types;

pub use client::TrackerClient;
pub use error::TrackerError;
pub use priority::Priority;
pub use types::{CreateIssueRequest, Issue, Label, Team, UpdateIssueRequest, User, WorkflowState};

#[cfg(test)]
use mockall::automock;

/// The tracker operations the workflow orchestrator depends on. Kept narrow
/// so tests can mock it without standing up a GraphQL server.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TrackerOps: Send + Sync {
    async fn team_by_key(&self, key: &str) -> Result<Option<Team>, TrackerError>;
    async fn create_issue(&self, request: CreateIssueRequest) -> Result<Issue, TrackerError>;
}

#[async_trait::async_trait]
impl TrackerOps for TrackerClient {
    async fn team_by_key(&self, key: &str) -> Result<Option<Team>, TrackerError> {
        TrackerClient::team_by_key(self, key).await
    }

    async fn create_issue(&self, request: CreateIssueRequest) -> Result<Issue, TrackerError> {
        TrackerClient::create_issue(self, request).await
    }
}
