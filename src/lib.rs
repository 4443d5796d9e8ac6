// Branchwright Library - Naming Conventions + Cross-Service Workflows
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod conventions;
pub mod repohost;
pub mod telemetry;
pub mod tracker;
pub mod workflow;

// Re-export key types for easy access
pub use config::{config, BranchwrightConfig};
pub use conventions::{
    generate_branch_name, generate_commit_message, normalize_description, parse_branch_name,
    parse_commit_message, validate_branch_name, validate_commit_message, BranchType,
    BranchValidationResult, CommitType, CommitValidationResult, ConventionError,
};
pub use repohost::{Branch, PullRequest, RepoHostClient, RepoHostError, RepoHostOps, Repository};
pub use telemetry::{create_workflow_span, generate_correlation_id, init_telemetry};
pub use tracker::{
    CreateIssueRequest, Issue, Priority, Team, TrackerClient, TrackerError, TrackerOps,
    UpdateIssueRequest,
};
pub use workflow::{BranchRecord, StartFeatureRequest, WorkflowOrchestrator, WorkflowOutcome};
