//! Local views of repo-host entities, reduced to the fields the workflows
//! report back to callers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: Option<String>,
    pub default_branch: Option<String>,
    pub private: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub sha: Option<String>,
    pub protected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub state: Option<String>,
    pub html_url: Option<String>,
    pub head_branch: String,
    pub head_sha: String,
    pub base_branch: String,
    pub draft: bool,
}

impl PullRequest {
    pub(crate) fn from_model(pr: octocrab::models::pulls::PullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            body: pr.body,
            state: pr.state.map(|state| format!("{state:?}").to_lowercase()),
            html_url: pr.html_url.map(|url| url.to_string()),
            head_branch: pr.head.ref_field,
            head_sha: pr.head.sha,
            base_branch: pr.base.ref_field,
            draft: pr.draft.unwrap_or(false),
        }
    }
}
