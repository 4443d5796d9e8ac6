//! GraphQL client for the issue tracker.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::error::TrackerError;
use super::types::{CreateIssueRequest, Issue, Label, Team, UpdateIssueRequest, User, WorkflowState};

/// Field selection shared by every query that returns issues, so all code
/// paths decode the same shape.
const ISSUE_FIELDS: &str = r"
    id
    identifier
    title
    description
    priority
    priorityLabel
    url
    createdAt
    updatedAt
    state {
        id
        name
        type
        color
    }
    assignee {
        id
        name
        email
    }
    labels {
        nodes {
            id
            name
            color
        }
    }
    team {
        id
        name
        key
    }
";

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope {
    data: Option<Value>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// Client for the issue-tracker GraphQL API.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    http: reqwest::Client,
    api_url: String,
}

impl TrackerClient {
    pub fn new(api_url: &str, api_key: &str, timeout: Duration) -> Result<Self, TrackerError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(api_key)
            .map_err(|_| TrackerError::decode("initialize", "API key is not a valid header value"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| TrackerError::http("initialize", e))?;

        Ok(Self {
            http,
            api_url: api_url.to_string(),
        })
    }

    async fn execute(
        &self,
        operation: &'static str,
        query: &str,
        variables: Value,
    ) -> Result<Value, TrackerError> {
        tracing::debug!(operation, "executing tracker query");

        let response = self
            .http
            .post(self.api_url.as_str())
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| TrackerError::http(operation, e))?
            .error_for_status()
            .map_err(|e| TrackerError::http(operation, e))?;

        let envelope: GraphQlEnvelope = response
            .json()
            .await
            .map_err(|e| TrackerError::http(operation, e))?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                return Err(TrackerError::api(
                    operation,
                    errors.into_iter().map(|e| e.message).collect(),
                ));
            }
        }

        envelope
            .data
            .ok_or_else(|| TrackerError::decode(operation, "response carried no data"))
    }

    /// Get the authenticated user.
    pub async fn viewer(&self) -> Result<User, TrackerError> {
        let query = r"
            query Viewer {
                viewer {
                    id
                    name
                    email
                    displayName
                }
            }
        ";
        let data = self.execute("viewer", query, json!({})).await?;
        decode("viewer", data.pointer("/viewer").cloned())
    }

    /// List all teams visible to the authenticated user.
    pub async fn list_teams(&self) -> Result<Vec<Team>, TrackerError> {
        let query = r"
            query Teams {
                teams {
                    nodes {
                        id
                        name
                        key
                    }
                }
            }
        ";
        let data = self.execute("list_teams", query, json!({})).await?;
        decode("list_teams", data.pointer("/teams/nodes").cloned())
    }

    /// Resolve a team by its project key (e.g. `FAVRES`), case-insensitively.
    pub async fn team_by_key(&self, key: &str) -> Result<Option<Team>, TrackerError> {
        let teams = self.list_teams().await?;
        Ok(teams.into_iter().find(|t| t.key.eq_ignore_ascii_case(key)))
    }

    /// List workflow states configured for a team.
    pub async fn list_states(&self, team_id: &str) -> Result<Vec<WorkflowState>, TrackerError> {
        let query = r"
            query WorkflowStates($teamId: String!) {
                workflowStates(filter: { team: { id: { eq: $teamId } } }) {
                    nodes {
                        id
                        name
                        type
                        color
                    }
                }
            }
        ";
        let data = self
            .execute("list_states", query, json!({ "teamId": team_id }))
            .await?;
        decode("list_states", data.pointer("/workflowStates/nodes").cloned())
    }

    /// Resolve a workflow state by display name, case-insensitively.
    pub async fn state_by_name(
        &self,
        team_id: &str,
        state_name: &str,
    ) -> Result<Option<WorkflowState>, TrackerError> {
        let states = self.list_states(team_id).await?;
        Ok(states
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(state_name)))
    }

    /// List labels configured for a team.
    pub async fn list_labels(&self, team_id: &str) -> Result<Vec<Label>, TrackerError> {
        let query = r"
            query Labels($teamId: String!) {
                issueLabels(filter: { team: { id: { eq: $teamId } } }) {
                    nodes {
                        id
                        name
                        color
                    }
                }
            }
        ";
        let data = self
            .execute("list_labels", query, json!({ "teamId": team_id }))
            .await?;
        decode("list_labels", data.pointer("/issueLabels/nodes").cloned())
    }

    /// List all users in the workspace.
    pub async fn list_users(&self) -> Result<Vec<User>, TrackerError> {
        let query = r"
            query Users {
                users {
                    nodes {
                        id
                        name
                        email
                        displayName
                    }
                }
            }
        ";
        let data = self.execute("list_users", query, json!({})).await?;
        decode("list_users", data.pointer("/users/nodes").cloned())
    }

    /// List issues for a team, optionally filtered by state name.
    pub async fn list_issues(
        &self,
        team_key: &str,
        state: Option<&str>,
        first: u32,
    ) -> Result<Vec<Issue>, TrackerError> {
        let query = format!(
            r"
            query Issues($first: Int!, $filter: IssueFilter) {{
                issues(first: $first, filter: $filter) {{
                    nodes {{
                        {ISSUE_FIELDS}
                    }}
                }}
            }}
        "
        );

        let mut filter = json!({ "team": { "key": { "eq": team_key } } });
        if let Some(state) = state {
            filter["state"] = json!({ "name": { "eq": state } });
        }

        let data = self
            .execute(
                "list_issues",
                &query,
                json!({ "first": first, "filter": filter }),
            )
            .await?;

        let nodes = data
            .pointer("/issues/nodes")
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| TrackerError::decode("list_issues", "missing issues.nodes"))?;

        nodes
            .into_iter()
            .map(|node| issue_from_node("list_issues", node))
            .collect()
    }

    /// Find an issue by its human-facing identifier (e.g. `FAVRES-123`).
    /// Unparseable identifiers and missing issues both yield `None`.
    pub async fn find_issue(&self, identifier: &str) -> Result<Option<Issue>, TrackerError> {
        let Some((team_key, number)) = identifier.split_once('-') else {
            return Ok(None);
        };
        let Ok(number) = number.parse::<u64>() else {
            return Ok(None);
        };

        let query = format!(
            r"
            query IssueByIdentifier($filter: IssueFilter!) {{
                issues(filter: $filter, first: 1) {{
                    nodes {{
                        {ISSUE_FIELDS}
                    }}
                }}
            }}
        "
        );

        let data = self
            .execute(
                "find_issue",
                &query,
                json!({
                    "filter": {
                        "team": { "key": { "eq": team_key } },
                        "number": { "eq": number },
                    }
                }),
            )
            .await?;

        let Some(node) = data
            .pointer("/issues/nodes/0")
            .filter(|node| !node.is_null())
            .cloned()
        else {
            return Ok(None);
        };

        issue_from_node("find_issue", node).map(Some)
    }

    /// Create a new issue.
    pub async fn create_issue(&self, request: CreateIssueRequest) -> Result<Issue, TrackerError> {
        let query = format!(
            r"
            mutation CreateIssue($input: IssueCreateInput!) {{
                issueCreate(input: $input) {{
                    success
                    issue {{
                        {ISSUE_FIELDS}
                    }}
                }}
            }}
        "
        );

        let mut input = json!({
            "title": request.title,
            "teamId": request.team_id,
            "priority": request.priority,
        });
        if let Some(description) = &request.description {
            input["description"] = json!(description);
        }
        if let Some(project_id) = &request.project_id {
            input["projectId"] = json!(project_id);
        }
        if let Some(assignee_id) = &request.assignee_id {
            input["assigneeId"] = json!(assignee_id);
        }
        if let Some(state_id) = &request.state_id {
            input["stateId"] = json!(state_id);
        }
        if !request.label_ids.is_empty() {
            input["labelIds"] = json!(request.label_ids);
        }

        let data = self
            .execute("create_issue", &query, json!({ "input": input }))
            .await?;

        if data.pointer("/issueCreate/success") != Some(&Value::Bool(true)) {
            return Err(TrackerError::api(
                "create_issue",
                vec!["issue creation was not acknowledged".to_string()],
            ));
        }

        let node = data
            .pointer("/issueCreate/issue")
            .cloned()
            .ok_or_else(|| TrackerError::decode("create_issue", "missing created issue"))?;
        issue_from_node("create_issue", node)
    }

    /// Update fields on an existing issue (by internal id).
    pub async fn update_issue(
        &self,
        issue_id: &str,
        request: UpdateIssueRequest,
    ) -> Result<Issue, TrackerError> {
        let query = format!(
            r"
            mutation UpdateIssue($id: String!, $input: IssueUpdateInput!) {{
                issueUpdate(id: $id, input: $input) {{
                    success
                    issue {{
                        {ISSUE_FIELDS}
                    }}
                }}
            }}
        "
        );

        let mut input = json!({});
        if let Some(title) = &request.title {
            input["title"] = json!(title);
        }
        if let Some(description) = &request.description {
            input["description"] = json!(description);
        }
        if let Some(priority) = request.priority {
            input["priority"] = json!(priority);
        }
        if let Some(state_id) = &request.state_id {
            input["stateId"] = json!(state_id);
        }
        if let Some(assignee_id) = &request.assignee_id {
            input["assigneeId"] = json!(assignee_id);
        }
        if let Some(label_ids) = &request.label_ids {
            input["labelIds"] = json!(label_ids);
        }

        let data = self
            .execute(
                "update_issue",
                &query,
                json!({ "id": issue_id, "input": input }),
            )
            .await?;

        if data.pointer("/issueUpdate/success") != Some(&Value::Bool(true)) {
            return Err(TrackerError::api(
                "update_issue",
                vec!["issue update was not acknowledged".to_string()],
            ));
        }

        let node = data
            .pointer("/issueUpdate/issue")
            .cloned()
            .ok_or_else(|| TrackerError::decode("update_issue", "missing updated issue"))?;
        issue_from_node("update_issue", node)
    }
}

/// The wire nests labels under `labels.nodes`; flatten before decoding into
/// the local model.
fn issue_from_node(operation: &'static str, mut node: Value) -> Result<Issue, TrackerError> {
    if let Some(nodes) = node.pointer("/labels/nodes").cloned() {
        node["labels"] = nodes;
    }
    serde_json::from_value(node).map_err(|e| TrackerError::decode(operation, e.to_string()))
}

fn decode<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    value: Option<Value>,
) -> Result<T, TrackerError> {
    let value = value.ok_or_else(|| TrackerError::decode(operation, "missing field in response"))?;
    serde_json::from_value(value).map_err(|e| TrackerError::decode(operation, e.to_string()))
}
