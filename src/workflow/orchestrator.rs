//! The start-feature workflow: create a tracker issue, then create a
//! correspondingly named branch on the repo host.
//!
//! The two remote systems share no transaction, so steps run strictly in
//! order and a later failure never rolls back an earlier step's side effect.
//! The outcome reports whatever was created before the point of failure so
//! the caller can take manual corrective action.

use serde::Serialize;
use tracing::Instrument;

use crate::conventions::generate_branch_name;
use crate::repohost::RepoHostOps;
use crate::tracker::{CreateIssueRequest, Issue, TrackerOps};

/// Inputs for the start-feature workflow.
#[derive(Debug, Clone)]
pub struct StartFeatureRequest {
    /// Feature title; used for the issue and, normalized, for the branch.
    pub title: String,
    pub description: Option<String>,
    /// Repo on the repo host; falls back to the configured default.
    pub repo: String,
    /// Tracker project/team key, e.g. `FAVRES`.
    pub project: String,
    /// Tracker priority level (1=Urgent .. 4=Low).
    pub priority: u8,
    /// Branch category for the generated branch name.
    pub branch_type: String,
}

/// Branch information as reported in a workflow outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    pub already_exists: bool,
}

/// Outcome of a compound workflow. The only record in the crate whose fields
/// fill in progressively: each completed remote step lands here even when a
/// later step fails.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowOutcome {
    pub success: bool,
    pub issue: Option<Issue>,
    pub branch: Option<BranchRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub next_steps: Vec<String>,
}

impl WorkflowOutcome {
    fn failed(error: String) -> Self {
        Self {
            success: false,
            issue: None,
            branch: None,
            error: Some(error),
            message: None,
            next_steps: Vec::new(),
        }
    }
}

/// Sequences tracker and repo-host calls. Holds no state between runs; every
/// invocation re-queries the remote source of truth.
pub struct WorkflowOrchestrator<T, R> {
    tracker: T,
    repo_host: R,
}

impl<T: TrackerOps, R: RepoHostOps> WorkflowOrchestrator<T, R> {
    pub fn new(tracker: T, repo_host: R) -> Self {
        Self { tracker, repo_host }
    }

    /// Start a feature: resolve the project, create the issue, derive the
    /// branch name, then ensure the branch exists on the repo host.
    pub async fn start_feature(&self, request: StartFeatureRequest) -> WorkflowOutcome {
        let correlation_id = crate::telemetry::generate_correlation_id();
        let span = crate::telemetry::create_workflow_span(
            "start_feature",
            &request.project,
            Some(&correlation_id),
        );
        self.run_start_feature(request).instrument(span).await
    }

    async fn run_start_feature(&self, request: StartFeatureRequest) -> WorkflowOutcome {
        // Step 1: resolve the tracker project.
        let team = match self.tracker.team_by_key(&request.project).await {
            Ok(Some(team)) => team,
            Ok(None) => {
                return WorkflowOutcome::failed(format!(
                    "Team/project '{}' not found",
                    request.project
                ));
            }
            Err(e) => return WorkflowOutcome::failed(format!("Tracker error: {e}")),
        };

        // Step 2: create the issue.
        let issue = match self
            .tracker
            .create_issue(CreateIssueRequest {
                title: request.title.clone(),
                description: request.description.clone(),
                team_id: team.id,
                priority: request.priority,
                ..CreateIssueRequest::default()
            })
            .await
        {
            Ok(issue) => issue,
            Err(e) => return WorkflowOutcome::failed(format!("Tracker error: {e}")),
        };
        tracing::info!(identifier = %issue.identifier, "created tracker issue");

        // Step 3: derive the branch name. The issue already exists remotely,
        // so a naming failure still reports it.
        let branch_name = match generate_branch_name(
            &request.branch_type,
            &request.title,
            Some(&issue.identifier),
        ) {
            Ok(name) => name,
            Err(e) => {
                return WorkflowOutcome {
                    success: false,
                    issue: Some(issue),
                    branch: None,
                    error: Some(e.to_string()),
                    message: Some("Issue was created but no branch name could be derived".to_string()),
                    next_steps: Vec::new(),
                };
            }
        };

        // Step 4: ensure the branch exists.
        let (branch, message) = match self.repo_host.get_branch(&request.repo, &branch_name).await {
            Ok(Some(existing)) => {
                let message = format!(
                    "Issue {} created. Branch '{}' already exists.",
                    issue.identifier, branch_name
                );
                (
                    BranchRecord {
                        name: branch_name.clone(),
                        sha: existing.sha,
                        already_exists: true,
                    },
                    message,
                )
            }
            Ok(None) => {
                let created = match self
                    .repo_host
                    .create_branch(&request.repo, &branch_name, None)
                    .await
                {
                    Ok(branch) => branch,
                    Err(e) => {
                        return WorkflowOutcome {
                            success: false,
                            issue: Some(issue),
                            branch: None,
                            error: Some(format!("Repo host error: {e}")),
                            message: Some("Issue was created but branch creation failed".to_string()),
                            next_steps: Vec::new(),
                        };
                    }
                };
                let message = format!(
                    "Created issue {} and branch '{}'",
                    issue.identifier, branch_name
                );
                (
                    BranchRecord {
                        name: branch_name.clone(),
                        sha: created.sha,
                        already_exists: false,
                    },
                    message,
                )
            }
            Err(e) => {
                return WorkflowOutcome {
                    success: false,
                    issue: Some(issue),
                    branch: None,
                    error: Some(format!("Repo host error: {e}")),
                    message: Some("Issue was created but branch creation failed".to_string()),
                    next_steps: Vec::new(),
                };
            }
        };

        let next_steps = vec![
            "git fetch origin".to_string(),
            format!("git checkout {branch_name}"),
            "# Start working on your feature".to_string(),
            format!("# When ready, create a PR linking to {}", issue.identifier),
        ];

        WorkflowOutcome {
            success: true,
            issue: Some(issue),
            branch: Some(branch),
            error: None,
            message: Some(message),
            next_steps,
        }
    }
}
