//! Check command implementation.
use color_eyre::eyre::{WrapErr, eyre};
use log::*;
use regex::Regex;
use std::fs;

use crate::{
    cli::{Args, CheckArgs},
    command::common,
    convention::CommitConvention,
    error::CzError,
    result::Result,
};

/// Messages starting with one of these are generated by git or a forge and
/// are never checked.
pub const ALLOWED_PREFIXES: [&str; 5] =
    ["Merge", "Revert", "Pull request", "fixup!", "squash!"];

/// Validate a commit message given on the command line or in a file.
pub fn execute(args: &Args, check_args: &CheckArgs) -> Result<()> {
    let convention = common::load_convention(args)?;

    let message = match (&check_args.message, &check_args.commit_msg_file) {
        (Some(message), _) => message.clone(),
        (None, Some(path)) => {
            let content = fs::read_to_string(path).wrap_err_with(|| {
                format!("failed to read commit message from {}", path.display())
            })?;
            strip_comments(&content)
        }
        (None, None) => {
            return Err(eyre!(
                "either --message or --commit-msg-file is required"
            ));
        }
    };

    check_message(&convention, &message)?;
    info!("commit validation: successful!");
    Ok(())
}

/// Drop the comment lines git adds to commit message files.
pub fn strip_comments(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<&str>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Check a message against the convention's schema.
pub fn check_message(
    convention: &dyn CommitConvention,
    message: &str,
) -> std::result::Result<(), CzError> {
    if ALLOWED_PREFIXES.iter().any(|p| message.starts_with(p)) {
        debug!("skipping check for generated commit message");
        return Ok(());
    }

    let pattern = convention.schema_pattern();

    if Regex::new(&format!("(?s)^{pattern}"))?.is_match(message) {
        return Ok(());
    }

    let header = message.lines().next().unwrap_or_default();
    Err(CzError::InvalidCommitMessage(format!(
        "\"{header}\"\npattern: {pattern}"
    )))
}
