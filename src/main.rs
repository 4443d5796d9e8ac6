use anyhow::Result;
use clap::Parser;

use branchwright::cli::{commands, Cli, Commands};
use branchwright::telemetry;

fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::ValidateBranchName { name } => commands::validate::validate_branch(&name),
        Commands::GenerateBranchName {
            branch_type,
            description,
            issue_ref,
        } => commands::generate::generate_branch(&branch_type, &description, issue_ref.as_deref()),
        Commands::ValidateCommitMessage { message } => commands::validate::validate_commit(&message),
        Commands::GenerateCommitMessage {
            commit_type,
            subject,
            scope,
        } => commands::generate::generate_commit(&commit_type, &subject, scope.as_deref()),
        Commands::Conventions => commands::conventions::conventions(),
        Commands::StartFeature {
            title,
            description,
            repo,
            project,
            priority,
            branch_type,
        } => tokio::runtime::Runtime::new()?.block_on(commands::start_feature::start_feature(
            title,
            description,
            repo,
            project,
            priority,
            branch_type,
        )),
    }
}
