use anyhow::Result;
use serde_json::json;

use super::print_response;
use crate::conventions::{
    generate_branch_name, generate_commit_message,
    grammar::{BranchType, CommitType},
};

pub fn generate_branch(branch_type: &str, description: &str, issue_ref: Option<&str>) -> Result<()> {
    let response = match generate_branch_name(branch_type, description, issue_ref) {
        Ok(branch_name) => json!({
            "success": true,
            "branch_name": branch_name,
            "components": {
                "type": branch_type,
                "issue_ref": issue_ref,
                "description": description,
            },
        }),
        Err(e) => json!({
            "success": false,
            "error": e.to_string(),
            "valid_types": BranchType::sorted_names(),
        }),
    };
    print_response(&response)
}

pub fn generate_commit(commit_type: &str, subject: &str, scope: Option<&str>) -> Result<()> {
    let response = match generate_commit_message(commit_type, subject, scope) {
        Ok(message) => json!({
            "success": true,
            "commit_message": message,
            "components": {
                "type": commit_type,
                "scope": scope,
                "subject": subject,
            },
        }),
        Err(e) => json!({
            "success": false,
            "error": e.to_string(),
            "valid_types": CommitType::sorted_names(),
        }),
    };
    print_response(&response)
}
