//! The naming-convention engine: grammar rules plus the branch and commit
//! engines that parse, validate, generate, and suggest.

pub mod branch;
pub mod commit;
pub mod error;
pub mod grammar;

pub use branch::{
    generate_branch_name, normalize_description, parse_branch_name, validate_branch_name,
    BranchValidationResult,
};
pub use commit::{
    generate_commit_message, parse_commit_message, validate_commit_message, CommitValidationResult,
};
pub use error::ConventionError;
pub use grammar::{BranchType, CommitType, RESERVED_BRANCH_NAMES};
