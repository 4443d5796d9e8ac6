//! Tracker client tests against a deterministic mock GraphQL endpoint,
//! eliminating network dependencies.

use std::time::Duration;

use branchwright::tracker::{CreateIssueRequest, TrackerClient, TrackerError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TrackerClient {
    TrackerClient::new(&server.uri(), "test-api-key", Duration::from_secs(5))
        .expect("client builds")
}

#[tokio::test]
async fn test_team_by_key_is_case_insensitive() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "teams": {
                    "nodes": [
                        { "id": "team-1", "name": "Favorite Restaurants", "key": "FAVRES" },
                        { "id": "team-2", "name": "Platform", "key": "PLAT" },
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let team = client(&server)
        .team_by_key("favres")
        .await
        .unwrap()
        .expect("team should resolve");

    assert_eq!(team.id, "team-1");
    assert_eq!(team.key, "FAVRES");
}

#[tokio::test]
async fn test_team_by_key_returns_none_for_unknown_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "teams": { "nodes": [] } }
        })))
        .mount(&server)
        .await;

    let team = client(&server).team_by_key("FAVRES").await.unwrap();
    assert!(team.is_none());
}

#[tokio::test]
async fn test_create_issue_sends_input_and_flattens_labels() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "variables": {
                "input": {
                    "title": "restaurant search",
                    "teamId": "team-1",
                    "priority": 3,
                    "description": "Search nearby restaurants",
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "issueCreate": {
                    "success": true,
                    "issue": {
                        "id": "issue-uuid-1",
                        "identifier": "FAVRES-123",
                        "title": "restaurant search",
                        "description": "Search nearby restaurants",
                        "priority": 3,
                        "priorityLabel": "Normal",
                        "url": "https://tracker.example/issue/FAVRES-123",
                        "createdAt": "2026-01-15T10:00:00.000Z",
                        "updatedAt": "2026-01-15T10:00:00.000Z",
                        "state": {
                            "id": "state-1",
                            "name": "Backlog",
                            "type": "backlog",
                            "color": "#bec2c8"
                        },
                        "labels": {
                            "nodes": [
                                { "id": "label-1", "name": "mobile", "color": "#26b5ce" }
                            ]
                        },
                        "team": { "id": "team-1", "name": "Favorite Restaurants", "key": "FAVRES" }
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let issue = client(&server)
        .create_issue(CreateIssueRequest {
            title: "restaurant search".to_string(),
            description: Some("Search nearby restaurants".to_string()),
            team_id: "team-1".to_string(),
            priority: 3,
            ..CreateIssueRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(issue.identifier, "FAVRES-123");
    assert_eq!(issue.priority, Some(3));
    assert_eq!(issue.labels.len(), 1);
    assert_eq!(issue.labels[0].name, "mobile");
    assert_eq!(issue.state.as_ref().map(|s| s.name.as_str()), Some("Backlog"));
}

#[tokio::test]
async fn test_create_issue_unacknowledged_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "issueCreate": { "success": false, "issue": null } }
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .create_issue(CreateIssueRequest {
            title: "t".to_string(),
            team_id: "team-1".to_string(),
            priority: 3,
            ..CreateIssueRequest::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, TrackerError::Api { operation: "create_issue", .. }));
}

#[tokio::test]
async fn test_graphql_errors_surface_with_operation_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [ { "message": "rate limited" } ]
        })))
        .mount(&server)
        .await;

    let err = client(&server).list_teams().await.unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("list_teams"), "got: {rendered}");
    assert!(rendered.contains("rate limited"), "got: {rendered}");
}

#[tokio::test]
async fn test_http_failure_is_annotated_with_operation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server).list_users().await.unwrap_err();
    assert!(matches!(err, TrackerError::Http { operation: "list_users", .. }));
}

#[tokio::test]
async fn test_find_issue_returns_none_when_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "issues": { "nodes": [] } }
        })))
        .mount(&server)
        .await;

    let issue = client(&server).find_issue("FAVRES-999").await.unwrap();
    assert!(issue.is_none());
}

#[tokio::test]
async fn test_find_issue_rejects_malformed_identifier_without_a_request() {
    // No mock mounted: a malformed identifier must short-circuit before any
    // network call.
    let server = MockServer::start().await;

    let issue = client(&server).find_issue("not-an-identifier").await.unwrap();
    assert!(issue.is_none());
}

#[tokio::test]
async fn test_list_issues_applies_state_filter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "variables": {
                "first": 50,
                "filter": {
                    "team": { "key": { "eq": "FAVRES" } },
                    "state": { "name": { "eq": "In Progress" } },
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "issues": {
                    "nodes": [
                        {
                            "id": "issue-uuid-2",
                            "identifier": "FAVRES-7",
                            "title": "map crash",
                            "priority": 2,
                            "labels": { "nodes": [] }
                        }
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let issues = client(&server)
        .list_issues("FAVRES", Some("In Progress"), 50)
        .await
        .unwrap();

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].identifier, "FAVRES-7");
}

#[tokio::test]
async fn test_viewer_decodes_authenticated_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "viewer": {
                    "id": "user-1",
                    "name": "Dev One",
                    "email": "dev@example.com",
                    "displayName": "dev.one"
                }
            }
        })))
        .mount(&server)
        .await;

    let user = client(&server).viewer().await.unwrap();
    assert_eq!(user.id, "user-1");
    assert_eq!(user.display_name.as_deref(), Some("dev.one"));
}

#[tokio::test]
async fn test_update_issue_sends_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "variables": {
                "id": "issue-uuid-1",
                "input": { "stateId": "state-2" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "issueUpdate": {
                    "success": true,
                    "issue": {
                        "id": "issue-uuid-1",
                        "identifier": "FAVRES-123",
                        "title": "restaurant search",
                        "priority": 3,
                        "state": {
                            "id": "state-2",
                            "name": "In Progress",
                            "type": "started",
                            "color": null
                        },
                        "labels": { "nodes": [] }
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let issue = client(&server)
        .update_issue(
            "issue-uuid-1",
            branchwright::tracker::UpdateIssueRequest {
                state_id: Some("state-2".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(issue.state.as_ref().map(|s| s.name.as_str()), Some("In Progress"));
}

#[tokio::test]
async fn test_state_by_name_matches_case_insensitively() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "workflowStates": {
                    "nodes": [
                        { "id": "state-1", "name": "Backlog", "type": "backlog", "color": null },
                        { "id": "state-2", "name": "In Progress", "type": "started", "color": null },
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let state = client(&server)
        .state_by_name("team-1", "in progress")
        .await
        .unwrap()
        .expect("state should resolve");

    assert_eq!(state.id, "state-2");
}
