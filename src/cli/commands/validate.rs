use anyhow::Result;
use serde_json::json;

use super::print_response;
use crate::conventions::{
    grammar::{BranchType, CommitType},
    validate_branch_name, validate_commit_message,
};

pub fn validate_branch(name: &str) -> Result<()> {
    let result = validate_branch_name(name);

    let message = if result.is_valid {
        let branch_type = result
            .branch_type
            .map(|t| t.to_string())
            .unwrap_or_default();
        match &result.issue_ref {
            Some(issue_ref) => format!("Valid {branch_type} branch for issue {issue_ref}"),
            None => format!("Valid {branch_type} branch"),
        }
    } else {
        format!(
            "Invalid branch name: {}",
            result.error.as_deref().unwrap_or("unknown error")
        )
    };

    let mut response = serde_json::to_value(&result)?;
    response["valid_types"] = json!(BranchType::sorted_names());
    response["message"] = json!(message);
    print_response(&response)
}

pub fn validate_commit(message: &str) -> Result<()> {
    let result = validate_commit_message(message);

    let summary = if result.is_valid {
        let commit_type = result
            .commit_type
            .map(|t| t.to_string())
            .unwrap_or_default();
        match &result.scope {
            Some(scope) => format!("Valid {commit_type} commit with scope '{scope}'"),
            None => format!("Valid {commit_type} commit"),
        }
    } else {
        format!(
            "Invalid commit message: {}",
            result.error.as_deref().unwrap_or("unknown error")
        )
    };

    let mut response = serde_json::to_value(&result)?;
    response["valid_types"] = json!(CommitType::sorted_names());
    response["message"] = json!(summary);
    print_response(&response)
}
