//! Integration coverage for the branch name engine against the documented
//! scenarios.

use branchwright::conventions::{generate_branch_name, validate_branch_name, BranchType};

#[test]
fn test_generate_with_issue_ref_scenario() {
    let name = generate_branch_name("feature", "restaurant search", Some("FAVRES-123")).unwrap();
    assert_eq!(name, "feature/FAVRES-123-restaurant-search");
}

#[test]
fn test_generate_without_issue_ref_scenario() {
    let name = generate_branch_name("docs", "Update README!", None).unwrap();
    assert_eq!(name, "docs/update-readme");
}

#[test]
fn test_unknown_type_scenario() {
    let result = validate_branch_name("unknown/some-branch");

    assert!(!result.is_valid);
    assert!(result
        .error
        .as_deref()
        .is_some_and(|e| e.contains("Invalid branch type 'unknown'")));
}

#[test]
fn test_reserved_names_always_invalid() {
    for name in ["main", "master", "develop", "HEAD"] {
        let result = validate_branch_name(name);
        assert!(!result.is_valid, "'{name}' must never validate");
        assert!(result
            .error
            .as_deref()
            .is_some_and(|e| e.contains("reserved")));
        assert!(result.suggestions.is_empty());
    }
}

#[test]
fn test_names_without_slash_get_prefix_error() {
    for name in ["my-branch", "somebranch", "Fix the thing"] {
        let result = validate_branch_name(name);
        assert!(!result.is_valid, "'{name}' must be invalid");
        assert!(
            result.error.as_deref().is_some_and(|e| e.contains("type prefix")),
            "'{name}' should get a type-prefix error, got {:?}",
            result.error
        );
    }
}

#[test]
fn test_suggestions_never_exceed_three() {
    for name in ["my feature branch", "feat add stuff", "x_y_z_w", "totally wrong"] {
        let result = validate_branch_name(name);
        assert!(result.suggestions.len() <= 3, "too many suggestions for '{name}'");
    }
}

#[test]
fn test_suggested_names_are_themselves_valid() {
    for name in ["my feature branch", "feat/Add Search", "bugfx map crash"] {
        let result = validate_branch_name(name);
        assert!(!result.is_valid);
        for suggestion in &result.suggestions {
            let revalidated = validate_branch_name(suggestion);
            assert!(
                revalidated.is_valid,
                "suggestion '{suggestion}' for '{name}' should validate"
            );
        }
    }
}

#[test]
fn test_every_branch_type_round_trips() {
    for branch_type in BranchType::ALL {
        let name = generate_branch_name(branch_type.as_str(), "Some Change", None).unwrap();
        let result = validate_branch_name(&name);
        assert!(result.is_valid);
        assert_eq!(result.branch_type, Some(branch_type));
        assert_eq!(result.description.as_deref(), Some("some-change"));
    }
}
