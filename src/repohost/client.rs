//! Repo-host client over octocrab.

use octocrab::params::repos::Reference;
use octocrab::Octocrab;

use super::errors::RepoHostError;
use super::types::{Branch, PullRequest, Repository};

/// Client for the repo-host REST API. Bare repository names are resolved
/// under the configured organization; `owner/name` forms are used as-is.
#[derive(Debug, Clone)]
pub struct RepoHostClient {
    octocrab: Octocrab,
    org: String,
}

impl RepoHostClient {
    pub fn new(token: &str, org: &str) -> Result<Self, RepoHostError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;

        Ok(Self {
            octocrab,
            org: org.to_string(),
        })
    }

    /// Build a client against a custom API root. Used by tests to point at a
    /// local mock server.
    pub fn with_base_uri(base_uri: &str, token: &str, org: &str) -> Result<Self, RepoHostError> {
        let octocrab = Octocrab::builder()
            .base_uri(base_uri)?
            .personal_token(token.to_string())
            .build()?;

        Ok(Self {
            octocrab,
            org: org.to_string(),
        })
    }

    fn split_repo(&self, repo: &str) -> (String, String) {
        match repo.split_once('/') {
            Some((owner, name)) => (owner.to_string(), name.to_string()),
            None => (self.org.clone(), repo.to_string()),
        }
    }

    pub async fn get_repository(&self, repo: &str) -> Result<Repository, RepoHostError> {
        let (owner, name) = self.split_repo(repo);
        let repository = self.octocrab.repos(&owner, &name).get().await?;

        Ok(Repository {
            name: repository.name,
            full_name: repository.full_name,
            default_branch: repository.default_branch,
            private: repository.private.unwrap_or(false),
        })
    }

    /// Resolve the repository's default branch name.
    pub async fn default_branch(&self, repo: &str) -> Result<String, RepoHostError> {
        let repository = self.get_repository(repo).await?;
        repository
            .default_branch
            .ok_or_else(|| RepoHostError::MissingDefaultBranch(repo.to_string()))
    }

    /// Look up a branch. A 404 from the remote means the branch does not
    /// exist and is reported as `None`, not as an error.
    pub async fn get_branch(&self, repo: &str, branch: &str) -> Result<Option<Branch>, RepoHostError> {
        let (owner, name) = self.split_repo(repo);
        match self
            .octocrab
            .repos(&owner, &name)
            .get_ref(&Reference::Branch(branch.to_string()))
            .await
        {
            Ok(git_ref) => Ok(Some(Branch {
                name: branch.to_string(),
                sha: ref_sha(&git_ref),
                protected: false,
            })),
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
                Ok(None)
            }
            Err(e) => Err(RepoHostError::Api(e)),
        }
    }

    /// Create a branch from `base_branch` (the repository default when not
    /// given) by resolving the base ref SHA and creating a new head ref.
    pub async fn create_branch(
        &self,
        repo: &str,
        branch: &str,
        base_branch: Option<&str>,
    ) -> Result<Branch, RepoHostError> {
        let base_branch = match base_branch {
            Some(base) => base.to_string(),
            None => self.default_branch(repo).await?,
        };

        let base = self
            .get_branch(repo, &base_branch)
            .await?
            .ok_or_else(|| RepoHostError::BaseBranchNotFound(base_branch.clone()))?;
        let sha = base
            .sha
            .ok_or_else(|| RepoHostError::UnexpectedRefObject(base_branch.clone()))?;

        tracing::info!(repo, branch, base = %base_branch, "creating branch");

        let (owner, name) = self.split_repo(repo);
        let created = self
            .octocrab
            .repos(&owner, &name)
            .create_ref(&Reference::Branch(branch.to_string()), sha)
            .await?;

        Ok(Branch {
            name: branch.to_string(),
            sha: ref_sha(&created),
            protected: false,
        })
    }

    pub async fn list_pull_requests(
        &self,
        repo: &str,
        state: octocrab::params::State,
        limit: u8,
    ) -> Result<Vec<PullRequest>, RepoHostError> {
        let (owner, name) = self.split_repo(repo);
        let page = self
            .octocrab
            .pulls(&owner, &name)
            .list()
            .state(state)
            .per_page(limit)
            .send()
            .await?;

        Ok(page.items.into_iter().map(PullRequest::from_model).collect())
    }

    /// Look up a pull request by number; 404 is reported as `None`.
    pub async fn get_pull_request(
        &self,
        repo: &str,
        number: u64,
    ) -> Result<Option<PullRequest>, RepoHostError> {
        let (owner, name) = self.split_repo(repo);
        match self.octocrab.pulls(&owner, &name).get(number).await {
            Ok(pr) => Ok(Some(PullRequest::from_model(pr))),
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
                Ok(None)
            }
            Err(e) => Err(RepoHostError::Api(e)),
        }
    }

    pub async fn create_pull_request(
        &self,
        repo: &str,
        title: &str,
        head: &str,
        base: Option<&str>,
        body: Option<&str>,
        draft: bool,
    ) -> Result<PullRequest, RepoHostError> {
        let base = match base {
            Some(base) => base.to_string(),
            None => self.default_branch(repo).await?,
        };

        let (owner, name) = self.split_repo(repo);
        let pulls = self.octocrab.pulls(&owner, &name);
        let mut request = pulls.create(title, head, base).draft(draft);
        if let Some(body) = body {
            request = request.body(body);
        }

        let pr = request.send().await?;
        Ok(PullRequest::from_model(pr))
    }
}

fn ref_sha(git_ref: &octocrab::models::repos::Ref) -> Option<String> {
    use octocrab::models::repos::Object;

    match &git_ref.object {
        Object::Commit { sha, .. } => Some(sha.clone()),
        Object::Tag { sha, .. } => Some(sha.clone()),
        _ => None,
    }
}
