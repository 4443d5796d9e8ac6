use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "branchwright")]
#[command(about = "Naming-convention tooling and issue-tracker/repo-host workflows")]
#[command(long_about = "Branchwright validates and generates branch names and commit messages \
                       against the team naming convention, and orchestrates cross-service \
                       workflows such as creating a tracker issue together with its matching \
                       branch. Every command prints a structured JSON result.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a branch name against the naming convention
    ValidateBranchName {
        /// The branch name to validate
        name: String,
    },
    /// Generate a convention-compliant branch name
    GenerateBranchName {
        /// Type of branch (feature, bugfix, hotfix, docs, spike, release)
        #[arg(long)]
        branch_type: String,
        /// Short free-text description; normalized into the branch slug
        #[arg(long)]
        description: String,
        /// Optional tracker issue ref (e.g. FAVRES-123)
        #[arg(long)]
        issue_ref: Option<String>,
    },
    /// Validate a commit message against Conventional Commits
    ValidateCommitMessage {
        /// The commit message to validate (only the first line is checked)
        message: String,
    },
    /// Generate a Conventional Commits message
    GenerateCommitMessage {
        /// Type of commit (feat, fix, docs, ...)
        #[arg(long)]
        commit_type: String,
        /// The commit subject
        #[arg(long)]
        subject: String,
        /// Optional scope of the commit
        #[arg(long)]
        scope: Option<String>,
    },
    /// Print the naming conventions reference
    Conventions,
    /// Create a tracker issue and a matching branch in one step
    StartFeature {
        /// Feature title (used for both the issue and the branch)
        #[arg(long)]
        title: String,
        /// Optional description for the tracker issue
        #[arg(long)]
        description: Option<String>,
        /// Repository name (defaults to the configured default)
        #[arg(long)]
        repo: Option<String>,
        /// Tracker project/team key (defaults to the configured default)
        #[arg(long)]
        project: Option<String>,
        /// Issue priority (1=Urgent, 2=High, 3=Normal, 4=Low)
        #[arg(long, default_value = "3")]
        priority: u8,
        /// Type of branch to create
        #[arg(long, default_value = "feature")]
        branch_type: String,
    },
}
