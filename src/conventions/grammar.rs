//! Naming grammar: the closed sets of branch/commit types and the patterns
//! that validation and generation must agree on. Generators are required to
//! produce names their own validators accept, so every pattern lives here and
//! nowhere else.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Branch categories recognized by the branch naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchType {
    Feature,
    Bugfix,
    Hotfix,
    Docs,
    Spike,
    Release,
}

impl BranchType {
    pub const ALL: [BranchType; 6] = [
        BranchType::Feature,
        BranchType::Bugfix,
        BranchType::Hotfix,
        BranchType::Docs,
        BranchType::Spike,
        BranchType::Release,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BranchType::Feature => "feature",
            BranchType::Bugfix => "bugfix",
            BranchType::Hotfix => "hotfix",
            BranchType::Docs => "docs",
            BranchType::Spike => "spike",
            BranchType::Release => "release",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }

    /// Capitalized prefix used in pull request titles (`Feature/KEY-123: ...`).
    pub fn pr_title_prefix(self) -> &'static str {
        match self {
            BranchType::Feature => "Feature",
            BranchType::Bugfix => "Bugfix",
            BranchType::Hotfix => "Hotfix",
            BranchType::Docs => "Docs",
            BranchType::Spike => "Spike",
            BranchType::Release => "Release",
        }
    }

    /// Type names in alphabetical order, as listed in error messages.
    pub fn sorted_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::ALL.iter().map(|t| t.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commit categories following the Conventional Commits grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
    Build,
    Ci,
    Revert,
}

impl CommitType {
    pub const ALL: [CommitType; 11] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Chore,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Revert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Revert => "revert",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }

    pub fn description(self) -> &'static str {
        match self {
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => "Changes that do not affect the meaning of the code",
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Test => "Adding missing tests or correcting existing tests",
            CommitType::Chore => "Other changes that don't modify src or test files",
            CommitType::Build => "Changes that affect the build system or external dependencies",
            CommitType::Ci => "Changes to CI configuration files and scripts",
            CommitType::Revert => "Reverts a previous commit",
        }
    }

    /// Type names in alphabetical order, as listed in error messages.
    pub fn sorted_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::ALL.iter().map(|t| t.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Branch names that may never be created or validated as convention branches.
/// Matched case-sensitively.
pub const RESERVED_BRANCH_NAMES: [&str; 4] = ["main", "master", "develop", "HEAD"];

/// Maximum length of a commit message first line.
pub const MAX_COMMIT_SUBJECT_LINE: usize = 100;

/// `<type>/<ISSUE-REF>-<description>` with the issue-ref part optional.
pub static BRANCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(feature|bugfix|hotfix|docs|spike|release)/(?:([A-Z]+-\d+)-)?([a-z0-9]+(?:-[a-z0-9]+)*)$",
    )
    .expect("branch pattern compiles")
});

/// `<type>(<scope>): <subject>` with the scope part optional.
pub static COMMIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(feat|fix|docs|style|refactor|perf|test|chore|build|ci|revert)(?:\(([a-z0-9-]+)\))?:\s+(.+)$",
    )
    .expect("commit pattern compiles")
});

/// External tracker identifier, e.g. `FAVRES-123`.
pub static ISSUE_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+-\d+$").expect("issue ref pattern compiles"));

/// `<Type>/<ISSUE-REF>: <Title>` for pull request titles.
pub static PR_TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Feature|Bugfix|Hotfix|Docs|Spike|Release)/([A-Z]+-\d+):\s+(.+)$")
        .expect("PR title pattern compiles")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_type_round_trip() {
        for branch_type in BranchType::ALL {
            assert_eq!(BranchType::parse(branch_type.as_str()), Some(branch_type));
        }
        assert_eq!(BranchType::parse("unknown"), None);
        assert_eq!(BranchType::parse("Feature"), None);
    }

    #[test]
    fn test_commit_type_round_trip() {
        for commit_type in CommitType::ALL {
            assert_eq!(CommitType::parse(commit_type.as_str()), Some(commit_type));
        }
        assert_eq!(CommitType::parse("feature"), None);
    }

    #[test]
    fn test_sorted_names_are_alphabetical() {
        assert_eq!(
            BranchType::sorted_names(),
            vec!["bugfix", "docs", "feature", "hotfix", "release", "spike"]
        );
        assert_eq!(
            CommitType::sorted_names(),
            vec![
                "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert",
                "style", "test"
            ]
        );
    }

    #[test]
    fn test_patterns_agree_with_type_sets() {
        for branch_type in BranchType::ALL {
            let name = format!("{}/some-change", branch_type);
            assert!(BRANCH_PATTERN.is_match(&name), "{name} should match");
        }
        for commit_type in CommitType::ALL {
            let message = format!("{}: do something", commit_type);
            assert!(COMMIT_PATTERN.is_match(&message), "{message} should match");
        }
    }

    #[test]
    fn test_issue_ref_pattern() {
        assert!(ISSUE_REF_PATTERN.is_match("FAVRES-123"));
        assert!(ISSUE_REF_PATTERN.is_match("A-1"));
        assert!(!ISSUE_REF_PATTERN.is_match("favres-123"));
        assert!(!ISSUE_REF_PATTERN.is_match("FAVRES123"));
        assert!(!ISSUE_REF_PATTERN.is_match("FAVRES-"));
    }

    #[test]
    fn test_pr_title_pattern() {
        assert!(PR_TITLE_PATTERN.is_match("Feature/FAVRES-123: Restaurant Search"));
        assert!(!PR_TITLE_PATTERN.is_match("feature/FAVRES-123: restaurant search"));
    }

    #[test]
    fn test_pr_title_prefixes_match_the_pattern() {
        for branch_type in BranchType::ALL {
            let title = format!("{}/FAVRES-1: Some change", branch_type.pr_title_prefix());
            assert!(PR_TITLE_PATTERN.is_match(&title), "{title} should match");
        }
    }
}
