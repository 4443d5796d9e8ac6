use anyhow::Result;
use serde_json::json;
use std::time::Duration;

use super::print_response;
use crate::config;
use crate::repohost::RepoHostClient;
use crate::tracker::{Priority, TrackerClient};
use crate::workflow::{StartFeatureRequest, WorkflowOrchestrator};

pub async fn start_feature(
    title: String,
    description: Option<String>,
    repo: Option<String>,
    project: Option<String>,
    priority: u8,
    branch_type: String,
) -> Result<()> {
    if Priority::from_level(priority).is_none() {
        return print_response(&json!({
            "success": false,
            "error": format!("Invalid priority level {priority}. Expected 0-4."),
        }));
    }

    let config = config::config()?;

    let Some(api_key) = config.tracker.api_key.as_deref() else {
        return print_response(&json!({
            "success": false,
            "error": "Tracker API key not configured. Set TRACKER_API_KEY or tracker.api_key.",
        }));
    };
    let Some(token) = config.repo_host.token.as_deref() else {
        return print_response(&json!({
            "success": false,
            "error": "Repo host token not configured. Set GITHUB_TOKEN or repo_host.token.",
        }));
    };

    let tracker = TrackerClient::new(
        &config.tracker.api_url,
        api_key,
        Duration::from_secs(config.defaults.request_timeout_seconds),
    )?;
    let repo_host = RepoHostClient::new(token, &config.repo_host.org)?;

    let request = StartFeatureRequest {
        title,
        description,
        repo: repo.unwrap_or_else(|| config.defaults.repo.clone()),
        project: project.unwrap_or_else(|| config.defaults.project.clone()),
        priority,
        branch_type,
    };

    let outcome = WorkflowOrchestrator::new(tracker, repo_host)
        .start_feature(request)
        .await;

    print_response(&serde_json::to_value(&outcome)?)
}
