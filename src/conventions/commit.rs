//! Commit message validation and generation following Conventional Commits.
//!
//! Commit format:
//!     <type>(<scope>): <subject>
//!
//! Examples:
//!     - feat(search): add restaurant filtering
//!     - fix(map): resolve annotation crash
//!     - refactor: simplify auth flow

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::error::ConventionError;
use super::grammar::{CommitType, COMMIT_PATTERN, MAX_COMMIT_SUBJECT_LINE};

static TYPE_BEFORE_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)(?:\(([^)]+)\))?$").expect("colon prefix pattern compiles"));

/// Result of commit message validation. Constructed once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct CommitValidationResult {
    pub is_valid: bool,
    pub commit_type: Option<CommitType>,
    pub scope: Option<String>,
    pub subject: Option<String>,
    pub error: Option<String>,
    pub suggestions: Vec<String>,
}

impl CommitValidationResult {
    fn valid(commit_type: CommitType, scope: Option<String>, subject: String) -> Self {
        Self {
            is_valid: true,
            commit_type: Some(commit_type),
            scope,
            subject: Some(subject),
            error: None,
            suggestions: Vec::new(),
        }
    }

    fn invalid(error: String, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: false,
            commit_type: None,
            scope: None,
            subject: None,
            error: Some(error),
            suggestions,
        }
    }
}

/// Validate a commit message. Only the first line is evaluated; body lines are
/// ignored.
pub fn validate_commit_message(message: &str) -> CommitValidationResult {
    if message.is_empty() {
        return CommitValidationResult::invalid("Commit message cannot be empty".to_string(), Vec::new());
    }

    let first_line = message.split('\n').next().unwrap_or_default().trim();
    if first_line.is_empty() {
        return CommitValidationResult::invalid("Commit message cannot be empty".to_string(), Vec::new());
    }

    let length = first_line.chars().count();
    if length > MAX_COMMIT_SUBJECT_LINE {
        return CommitValidationResult::invalid(
            format!("Commit message too long ({length} chars). Maximum is {MAX_COMMIT_SUBJECT_LINE} characters."),
            Vec::new(),
        );
    }

    let Some(captures) = COMMIT_PATTERN.captures(first_line) else {
        return CommitValidationResult::invalid(
            mismatch_error(first_line),
            generate_suggestions(first_line),
        );
    };

    // The pattern only admits type names from the valid set.
    let commit_type = CommitType::parse(&captures[1]).unwrap_or(CommitType::Chore);
    let scope = captures.get(2).map(|m| m.as_str().to_string());
    let subject = captures[3].to_string();

    if subject.chars().next().is_some_and(char::is_uppercase) {
        let corrected = lowercase_first(&subject);
        return CommitValidationResult {
            is_valid: false,
            commit_type: Some(commit_type),
            scope: scope.clone(),
            subject: Some(subject),
            error: Some("Subject should start with lowercase letter".to_string()),
            suggestions: vec![render_message(commit_type, scope.as_deref(), &corrected)],
        };
    }

    if let Some(trimmed) = subject.strip_suffix('.') {
        let corrected = trimmed.to_string();
        return CommitValidationResult {
            is_valid: false,
            commit_type: Some(commit_type),
            scope: scope.clone(),
            subject: Some(subject),
            error: Some("Subject should not end with a period".to_string()),
            suggestions: vec![render_message(commit_type, scope.as_deref(), &corrected)],
        };
    }

    CommitValidationResult::valid(commit_type, scope, subject)
}

/// Parse a commit message into (commit_type, scope, subject).
/// Invalid messages yield all-`None`.
pub fn parse_commit_message(message: &str) -> (Option<CommitType>, Option<String>, Option<String>) {
    let result = validate_commit_message(message);
    (result.commit_type, result.scope, result.subject)
}

/// Generate a valid commit message from its components.
///
/// Only the first character of the subject is lowercased; internal
/// capitalization is left alone. One trailing period is stripped.
pub fn generate_commit_message(
    commit_type: &str,
    subject: &str,
    scope: Option<&str>,
) -> Result<String, ConventionError> {
    let commit_type = CommitType::parse(commit_type).ok_or_else(|| ConventionError::InvalidCommitType {
        found: commit_type.to_string(),
        valid: CommitType::sorted_names().join(", "),
    })?;

    let trimmed = subject.trim();
    if trimmed.is_empty() {
        return Err(ConventionError::EmptySubject);
    }

    let mut normalized = lowercase_first(trimmed);
    if let Some(stripped) = normalized.strip_suffix('.') {
        normalized = stripped.to_string();
    }

    Ok(render_message(commit_type, scope, &normalized))
}

fn render_message(commit_type: CommitType, scope: Option<&str>, subject: &str) -> String {
    match scope {
        Some(scope) => format!("{commit_type}({scope}): {subject}"),
        None => format!("{commit_type}: {subject}"),
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Diagnose why the first line missed the commit pattern.
fn mismatch_error(first_line: &str) -> String {
    if !first_line.contains(':') {
        return "Commit message must follow format: <type>(<scope>): <subject>".to_string();
    }

    let (type_part, subject_part) = first_line
        .split_once(':')
        .unwrap_or((first_line, ""));
    let type_part = type_part.trim();

    let Some(captures) = TYPE_BEFORE_COLON.captures(type_part) else {
        return "Invalid format before colon. Expected: <type> or <type>(<scope>)".to_string();
    };

    let potential_type = &captures[1];
    if CommitType::parse(potential_type).is_none() {
        return format!(
            "Invalid commit type '{potential_type}'. Valid types: {}",
            CommitType::sorted_names().join(", ")
        );
    }

    if subject_part.trim().is_empty() {
        return "Subject cannot be empty after the colon".to_string();
    }

    "Commit message format is invalid. Expected: <type>(<scope>): <subject>".to_string()
}

/// One repair suggestion: recover a leading type if present, otherwise guess a
/// type from keywords in the message.
fn generate_suggestions(first_line: &str) -> Vec<String> {
    let cleaned = first_line.trim();
    let lowered = cleaned.to_lowercase();

    for commit_type in CommitType::ALL {
        if lowered.starts_with(commit_type.as_str()) {
            let mut rest = cleaned[commit_type.as_str().len()..].trim_start();
            if let Some(stripped) = rest.strip_prefix(':') {
                rest = stripped.trim_start();
            }
            if let Some(stripped) = rest.strip_prefix('-') {
                rest = stripped.trim_start();
            }
            if !rest.is_empty() {
                return vec![render_message(commit_type, None, &normalize_subject(rest))];
            }
            break;
        }
    }

    let guessed = guess_type_from_keywords(&lowered);
    vec![render_message(guessed, None, &normalize_subject(cleaned))]
}

/// Keyword buckets checked in fixed order; first hit wins.
fn guess_type_from_keywords(lowered: &str) -> CommitType {
    const BUCKETS: [(&[&str], CommitType); 4] = [
        (&["add", "new", "create", "implement"], CommitType::Feat),
        (&["fix", "bug", "issue", "resolve"], CommitType::Fix),
        (&["doc", "readme", "comment"], CommitType::Docs),
        (&["refactor", "clean", "simplify"], CommitType::Refactor),
    ];

    for (keywords, commit_type) in BUCKETS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return commit_type;
        }
    }
    CommitType::Chore
}

/// Normalize free text for use as a subject: drop a leading type prefix,
/// lowercase the first character, strip one trailing period.
fn normalize_subject(text: &str) -> String {
    let mut message = text;
    let lowered = text.to_lowercase();
    for commit_type in CommitType::ALL {
        if lowered.starts_with(commit_type.as_str()) {
            message = message[commit_type.as_str().len()..].trim_start();
            if let Some(stripped) = message.strip_prefix(':') {
                message = stripped.trim_start();
            }
            break;
        }
    }

    let mut normalized = lowercase_first(message);
    if let Some(stripped) = normalized.strip_suffix('.') {
        normalized = stripped.to_string();
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_feat_with_scope() {
        let result = validate_commit_message("feat(search): add restaurant filtering");

        assert!(result.is_valid);
        assert_eq!(result.commit_type, Some(CommitType::Feat));
        assert_eq!(result.scope.as_deref(), Some("search"));
        assert_eq!(result.subject.as_deref(), Some("add restaurant filtering"));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_valid_refactor_without_scope() {
        let result = validate_commit_message("refactor: simplify auth flow");

        assert!(result.is_valid);
        assert_eq!(result.commit_type, Some(CommitType::Refactor));
        assert_eq!(result.scope, None);
        assert_eq!(result.subject.as_deref(), Some("simplify auth flow"));
    }

    #[test]
    fn test_all_commit_types_valid() {
        for commit_type in CommitType::ALL {
            let result = validate_commit_message(&format!("{commit_type}: test message"));
            assert!(result.is_valid, "type '{commit_type}' should be valid");
            assert_eq!(result.commit_type, Some(commit_type));
        }
    }

    #[test]
    fn test_empty_message() {
        let result = validate_commit_message("");

        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Commit message cannot be empty"));
    }

    #[test]
    fn test_whitespace_first_line() {
        let result = validate_commit_message("   \nbody text");

        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Commit message cannot be empty"));
    }

    #[test]
    fn test_no_colon() {
        let result = validate_commit_message("feat add something");

        assert!(!result.is_valid);
        assert!(result
            .error
            .as_deref()
            .is_some_and(|e| e.to_lowercase().contains("format")));
    }

    #[test]
    fn test_unknown_commit_type() {
        let result = validate_commit_message("unknown: some message");

        assert!(!result.is_valid);
        assert!(result
            .error
            .as_deref()
            .is_some_and(|e| e.contains("Invalid commit type 'unknown'")));
    }

    #[test]
    fn test_invalid_format_before_colon() {
        let result = validate_commit_message("feat(scope: missing paren");

        assert!(!result.is_valid);
        assert!(result
            .error
            .as_deref()
            .is_some_and(|e| e.contains("Invalid format before colon")));
    }

    #[test]
    fn test_uppercase_subject() {
        let result = validate_commit_message("feat: Add new feature");

        assert!(!result.is_valid);
        assert_eq!(result.commit_type, Some(CommitType::Feat));
        assert!(result.error.as_deref().is_some_and(|e| e.contains("lowercase")));
        assert_eq!(result.suggestions, vec!["feat: add new feature".to_string()]);
    }

    #[test]
    fn test_uppercase_rule_checked_before_period_rule() {
        let result = validate_commit_message("feat: Add thing.");

        assert!(!result.is_valid);
        assert!(result.error.as_deref().is_some_and(|e| e.contains("lowercase")));
        // Only the first character is corrected; the trailing period survives
        // into the suggestion because the uppercase rule fires first.
        assert_eq!(result.suggestions, vec!["feat: add thing.".to_string()]);
    }

    #[test]
    fn test_trailing_period() {
        let result = validate_commit_message("feat: add new feature.");

        assert!(!result.is_valid);
        assert!(result.error.as_deref().is_some_and(|e| e.contains("period")));
        assert_eq!(result.suggestions, vec!["feat: add new feature".to_string()]);
    }

    #[test]
    fn test_trailing_period_with_scope() {
        let result = validate_commit_message("fix(map): resolve crash.");

        assert!(!result.is_valid);
        assert_eq!(result.suggestions, vec!["fix(map): resolve crash".to_string()]);
    }

    #[test]
    fn test_exactly_100_chars_accepted() {
        // "feat: " is 6 chars; pad the subject to land on exactly 100.
        let message = format!("feat: {}", "a".repeat(94));
        assert_eq!(message.chars().count(), 100);

        let result = validate_commit_message(&message);
        assert!(result.is_valid);
    }

    #[test]
    fn test_101_chars_rejected() {
        let message = format!("feat: {}", "a".repeat(95));
        assert_eq!(message.chars().count(), 101);

        let result = validate_commit_message(&message);
        assert!(!result.is_valid);
        assert!(result
            .error
            .as_deref()
            .is_some_and(|e| e.contains("too long (101 chars)")));
    }

    #[test]
    fn test_multiline_uses_first_line() {
        let result = validate_commit_message("feat: add feature\n\nThis is a longer description");

        assert!(result.is_valid);
        assert_eq!(result.subject.as_deref(), Some("add feature"));
    }

    #[test]
    fn test_suggestion_recovers_type_prefix() {
        let result = validate_commit_message("feat added the thing");

        assert!(!result.is_valid);
        assert_eq!(result.suggestions, vec!["feat: added the thing".to_string()]);
    }

    #[test]
    fn test_suggestion_guesses_feat_from_keywords() {
        let result = validate_commit_message("Added new feature");

        assert!(!result.is_valid);
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.suggestions[0].starts_with("feat: "));
    }

    #[test]
    fn test_suggestion_guesses_chore_as_fallback() {
        let result = validate_commit_message("bump version to 1.2.3");

        assert!(!result.is_valid);
        assert_eq!(result.suggestions, vec!["chore: bump version to 1.2.3".to_string()]);
    }

    #[test]
    fn test_parse_full_message() {
        let (commit_type, scope, subject) = parse_commit_message("feat(search): add restaurant filtering");

        assert_eq!(commit_type, Some(CommitType::Feat));
        assert_eq!(scope.as_deref(), Some("search"));
        assert_eq!(subject.as_deref(), Some("add restaurant filtering"));
    }

    #[test]
    fn test_parse_invalid_message() {
        let (commit_type, scope, subject) = parse_commit_message("invalid message");

        assert_eq!(commit_type, None);
        assert_eq!(scope, None);
        assert_eq!(subject, None);
    }

    #[test]
    fn test_generate_with_scope() {
        let message = generate_commit_message("feat", "add restaurant filtering", Some("search")).unwrap();
        assert_eq!(message, "feat(search): add restaurant filtering");
    }

    #[test]
    fn test_generate_without_scope() {
        let message = generate_commit_message("fix", "resolve crash", None).unwrap();
        assert_eq!(message, "fix: resolve crash");
    }

    #[test]
    fn test_generate_lowercases_only_first_char() {
        let message = generate_commit_message("feat", "Add New Feature.", None).unwrap();
        assert_eq!(message, "feat: add New Feature");
    }

    #[test]
    fn test_generate_invalid_type() {
        let err = generate_commit_message("invalid", "test", None).unwrap_err();
        assert!(matches!(err, ConventionError::InvalidCommitType { .. }));
    }

    #[test]
    fn test_generate_empty_subject() {
        let err = generate_commit_message("feat", "   ", None).unwrap_err();
        assert!(matches!(err, ConventionError::EmptySubject));
    }

    #[test]
    fn test_generated_messages_validate() {
        for commit_type in CommitType::ALL {
            let message = generate_commit_message(commit_type.as_str(), "test message", None).unwrap();
            let result = validate_commit_message(&message);
            assert!(result.is_valid, "'{message}' should round-trip");
            assert_eq!(result.commit_type, Some(commit_type));
        }
    }
}
