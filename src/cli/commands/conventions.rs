use anyhow::Result;
use serde_json::json;

use super::print_response;
use crate::conventions::grammar::{BranchType, CommitType};
use crate::tracker::Priority;

/// Print the naming conventions reference document.
pub fn conventions() -> Result<()> {
    let commit_descriptions: serde_json::Map<String, serde_json::Value> = CommitType::ALL
        .iter()
        .map(|t| (t.to_string(), json!(t.description())))
        .collect();

    let response = json!({
        "branch_naming": {
            "format": "<type>/<issue-ref>-<description>",
            "types": BranchType::sorted_names(),
            "examples": [
                "feature/FAVRES-123-restaurant-search",
                "bugfix/FAVRES-456-map-crash",
                "hotfix/FAVRES-789-auth-fix",
                "docs/update-readme",
                "spike/swiftui-animations",
                "release/1-2-0",
            ],
        },
        "commit_format": {
            "format": "<type>(<scope>): <subject>",
            "types": CommitType::sorted_names(),
            "type_descriptions": commit_descriptions,
            "examples": [
                "feat(search): add restaurant filtering",
                "fix(map): resolve annotation crash",
                "docs(readme): update installation steps",
                "refactor: simplify auth flow",
            ],
            "rules": [
                "Subject should be lowercase",
                "No period at the end of subject",
                "Maximum 100 characters for first line",
                "Use imperative mood (add, fix, update, not added, fixed, updated)",
            ],
        },
        "pr_naming": {
            "format": "<Type>/<Issue-Ref>: <Title>",
            "examples": [
                "Feature/FAVRES-123: Restaurant Search Implementation",
                "Bugfix/FAVRES-456: Map Annotation Crash Fix",
                "Hotfix/FAVRES-789: Authentication Token Refresh",
            ],
        },
        "priority_levels": {
            "1": Priority::Urgent.label(),
            "2": Priority::High.label(),
            "3": format!("{} (default)", Priority::Normal.label()),
            "4": Priority::Low.label(),
        },
    });
    print_response(&response)
}
