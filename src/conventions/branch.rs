//! Branch name validation and generation.
//!
//! Branch naming format:
//!     <type>/<issue-ref>-<short-description>
//!
//! Examples:
//!     - feature/FAVRES-123-restaurant-search
//!     - bugfix/FAVRES-456-map-crash
//!     - docs/update-readme
//!     - spike/swiftui-animations

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::error::ConventionError;
use super::grammar::{BranchType, BRANCH_PATTERN, ISSUE_REF_PATTERN, RESERVED_BRANCH_NAMES};

static WHITESPACE_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("whitespace pattern compiles"));
static INVALID_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("slug charset pattern compiles"));
static HYPHEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("hyphen run pattern compiles"));

/// Result of branch name validation. Constructed once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct BranchValidationResult {
    pub is_valid: bool,
    pub branch_type: Option<BranchType>,
    pub issue_ref: Option<String>,
    pub description: Option<String>,
    pub error: Option<String>,
    pub suggestions: Vec<String>,
}

impl BranchValidationResult {
    fn valid(branch_type: BranchType, issue_ref: Option<String>, description: String) -> Self {
        Self {
            is_valid: true,
            branch_type: Some(branch_type),
            issue_ref,
            description: Some(description),
            error: None,
            suggestions: Vec::new(),
        }
    }

    fn invalid(error: String, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: false,
            branch_type: None,
            issue_ref: None,
            description: None,
            error: Some(error),
            suggestions,
        }
    }
}

/// Validate a branch name against the naming convention.
pub fn validate_branch_name(branch_name: &str) -> BranchValidationResult {
    if branch_name.is_empty() {
        return BranchValidationResult::invalid("Branch name cannot be empty".to_string(), Vec::new());
    }

    if RESERVED_BRANCH_NAMES.contains(&branch_name) {
        return BranchValidationResult::invalid(
            format!("'{branch_name}' is a reserved branch name"),
            Vec::new(),
        );
    }

    let Some(captures) = BRANCH_PATTERN.captures(branch_name) else {
        let suggestions = generate_suggestions(branch_name);

        let error = if !branch_name.contains('/') {
            "Branch name must include a type prefix (e.g., feature/, bugfix/)".to_string()
        } else {
            let prefix = branch_name.split('/').next().unwrap_or_default();
            if BranchType::parse(prefix).is_none() {
                format!(
                    "Invalid branch type '{prefix}'. Valid types: {}",
                    BranchType::sorted_names().join(", ")
                )
            } else {
                "Branch name format is invalid. Expected: <type>/<issue-ref>-<description> or <type>/<description>"
                    .to_string()
            }
        };

        return BranchValidationResult::invalid(error, suggestions);
    };

    // The pattern only admits type names from the valid set.
    let branch_type = BranchType::parse(&captures[1]).unwrap_or(BranchType::Feature);
    let issue_ref = captures.get(2).map(|m| m.as_str().to_string());
    let description = captures[3].to_string();

    BranchValidationResult::valid(branch_type, issue_ref, description)
}

/// Parse a branch name into (branch_type, issue_ref, description).
/// Invalid names yield all-`None`.
pub fn parse_branch_name(branch_name: &str) -> (Option<BranchType>, Option<String>, Option<String>) {
    let result = validate_branch_name(branch_name);
    (result.branch_type, result.issue_ref, result.description)
}

/// Generate a valid branch name from its components.
///
/// The description is normalized into a slug; the result always re-validates
/// against [`BRANCH_PATTERN`].
pub fn generate_branch_name(
    branch_type: &str,
    description: &str,
    issue_ref: Option<&str>,
) -> Result<String, ConventionError> {
    let branch_type = BranchType::parse(branch_type).ok_or_else(|| ConventionError::InvalidBranchType {
        found: branch_type.to_string(),
        valid: BranchType::sorted_names().join(", "),
    })?;

    if description.is_empty() {
        return Err(ConventionError::EmptyDescription);
    }

    if let Some(issue_ref) = issue_ref {
        if !ISSUE_REF_PATTERN.is_match(issue_ref) {
            return Err(ConventionError::InvalidIssueRefFormat(issue_ref.to_string()));
        }
    }

    let normalized = normalize_description(description);
    if normalized.is_empty() {
        return Err(ConventionError::DescriptionNormalizesToEmpty);
    }

    Ok(match issue_ref {
        Some(issue_ref) => format!("{branch_type}/{issue_ref}-{normalized}"),
        None => format!("{branch_type}/{normalized}"),
    })
}

/// Normalize free text into a branch description slug: lowercase, hyphens for
/// whitespace/underscore runs, strip anything outside `[a-z0-9-]`, collapse
/// hyphen runs, trim edge hyphens.
pub fn normalize_description(description: &str) -> String {
    let lowered = description.to_lowercase();
    let hyphenated = WHITESPACE_UNDERSCORE.replace_all(&lowered, "-");
    let cleaned = INVALID_SLUG_CHARS.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

/// Suggestions for fixing an invalid branch name. Token 0 is matched against
/// the valid types by 3-character prefix; otherwise the whole input is slugged
/// under the two most common types. Capped at 3.
fn generate_suggestions(branch_name: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    let parts: Vec<&str> = branch_name
        .split(['/', ' ', '_'])
        .collect();

    if parts.len() >= 2 {
        let potential_type = parts[0].to_lowercase();
        let rest = parts[1..].join("-");

        for valid_type in BranchType::ALL {
            if potential_type.starts_with(&valid_type.as_str()[..3]) {
                let normalized = normalize_description(&rest);
                if !normalized.is_empty() {
                    suggestions.push(format!("{valid_type}/{normalized}"));
                }
                break;
            }
        }
    }

    if suggestions.is_empty() {
        let normalized = normalize_description(branch_name);
        if !normalized.is_empty() {
            suggestions.push(format!("feature/{normalized}"));
            suggestions.push(format!("bugfix/{normalized}"));
        }
    }

    suggestions.truncate(3);
    suggestions
}
