//! Cross-service workflows that sequence the issue tracker and the repo host
//! into one compound operation.

pub mod orchestrator;

pub use orchestrator::{
    BranchRecord, StartFeatureRequest, WorkflowOrchestrator, WorkflowOutcome,
};
