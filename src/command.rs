//! Command implementations, one module per subcommand.
pub mod bump;
pub mod changelog_entry;
pub mod check;
pub mod commit;
pub mod common;
pub mod show;

use crate::{
    cli::{Args, Command},
    result::Result,
};

/// Run the subcommand selected on the command line.
pub fn execute(args: &Args) -> Result<()> {
    match &args.command {
        Command::Commit(commit_args) => commit::execute(args, commit_args),
        Command::Check(check_args) => check::execute(args, check_args),
        Command::ChangelogEntry(entry_args) => {
            changelog_entry::execute(args, entry_args)
        }
        Command::Bump(bump_args) => bump::execute(args, bump_args),
        Command::Questions
        | Command::Example
        | Command::Schema
        | Command::SchemaPattern
        | Command::Info
        | Command::ProcessCommit { .. } => show::execute(args),
    }
}
