//! Repo-host collaborator: octocrab-backed client, local entity views, and
//! the trait seam the workflow orchestrator runs against.

pub mod client;
pub mod errors;
pub mod types;

pub use client::RepoHostClient;
pub use errors::RepoHostError;
pub use types::{Branch, PullRequest, Repository};

#[cfg(test)]
use mockall::automock;

/// The repo-host operations the workflow orchestrator depends on.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RepoHostOps: Send + Sync {
    async fn default_branch(&self, repo: &str) -> Result<String, RepoHostError>;
    async fn get_branch(&self, repo: &str, branch: &str) -> Result<Option<Branch>, RepoHostError>;
    async fn create_branch<'a>(
        &self,
        repo: &str,
        branch: &str,
        base_branch: Option<&'a str>,
    ) -> Result<Branch, RepoHostError>;
}

#[async_trait::async_trait]
impl RepoHostOps for RepoHostClient {
    async fn default_branch(&self, repo: &str) -> Result<String, RepoHostError> {
        RepoHostClient::default_branch(self, repo).await
    }

    async fn get_branch(&self, repo: &str, branch: &str) -> Result<Option<Branch>, RepoHostError> {
        RepoHostClient::get_branch(self, repo, branch).await
    }

    async fn create_branch<'a>(
        &self,
        repo: &str,
        branch: &str,
        base_branch: Option<&'a str>,
    ) -> Result<Branch, RepoHostError> {
        RepoHostClient::create_branch(self, repo, branch, base_branch).await
    }
}
