//! CLI argument parsing.
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Conventional commits linked to Azure DevOps work items.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, global = true)]
    /// Configuration file to use instead of searching for one.
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Commit convention subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask for the commit fields and commit with the resulting message.
    Commit(CommitArgs),

    /// Validate a commit message against the commit schema.
    Check(CheckArgs),

    /// Print the commit questionnaire as JSON.
    Questions,

    /// Show an example commit message.
    Example,

    /// Show the commit message layout.
    Schema,

    /// Show the regular expression commit messages must match.
    SchemaPattern,

    /// Show detailed information about the convention.
    Info,

    /// Print the description extracted from a commit message.
    ProcessCommit {
        /// Full commit message.
        message: String,
    },

    /// Rewrite changelog entries so their scope links to work items.
    ///
    /// Entries are read as JSON (a single object or an array) from stdin
    /// unless --message is given.
    ChangelogEntry(ChangelogEntryArgs),

    /// Show the version bump implied by commit messages.
    Bump(BumpArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct CommitArgs {
    #[arg(long, default_value_t = false)]
    /// Print the message instead of committing.
    pub dry_run: bool,

    #[arg(long)]
    /// Also write the message to this file.
    pub write_message_to_file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Default)]
pub struct CheckArgs {
    #[arg(long, conflicts_with = "commit_msg_file")]
    /// Commit message to check.
    pub message: Option<String>,

    #[arg(long)]
    /// File holding the commit message, as passed to a commit-msg hook.
    pub commit_msg_file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Default)]
pub struct ChangelogEntryArgs {
    #[arg(long)]
    /// Parse this commit message into an entry instead of reading stdin.
    pub message: Option<String>,

    #[arg(long, default_value = "")]
    /// Revision of the commit the entry belongs to.
    pub rev: String,
}

#[derive(ClapArgs, Debug, Default)]
pub struct BumpArgs {
    #[arg(long = "message")]
    /// Commit message to consider, repeatable. Reads stdin when omitted,
    /// messages separated by NUL (as printed by `git log -z --format=%B`).
    pub messages: Vec<String>,

    #[arg(long)]
    /// Current version, overriding the configured one.
    pub current_version: Option<String>,
}
