//! Commit command implementation.
use color_eyre::eyre::{WrapErr, eyre};
use log::*;
use std::{fs, io, path::Path, process::Command};

use crate::{
    cli::{Args, CommitArgs},
    command::common,
    convention::CommitConvention,
    prompt::{self, Prompter, TermPrompter},
    result::Result,
};

/// Ask for the commit fields, then commit (or print) the message.
pub fn execute(args: &Args, commit_args: &CommitArgs) -> Result<()> {
    let convention = common::load_convention(args)?;

    let stdin = io::stdin();
    let mut prompter = TermPrompter::new(stdin.lock(), io::stderr());

    let message = compose(&convention, &mut prompter)?;

    if let Some(path) = &commit_args.write_message_to_file {
        write_message(path, &message)?;
    }

    if commit_args.dry_run {
        println!("{message}");
        return Ok(());
    }

    git_commit(&message)
}

/// Run the questionnaire and render the commit message.
pub fn compose(
    convention: &dyn CommitConvention,
    prompter: &mut dyn Prompter,
) -> Result<String> {
    let answers = prompt::collect_answers(prompter, &convention.questions())?;
    let message = convention.message(&answers)?;
    debug!("composed commit message: {message:?}");
    Ok(message)
}

fn write_message(path: &Path, message: &str) -> Result<()> {
    info!("writing commit message to: {}", path.display());
    fs::write(path, message).wrap_err_with(|| {
        format!("failed to write commit message to {}", path.display())
    })?;
    Ok(())
}

fn git_commit(message: &str) -> Result<()> {
    let status = Command::new("git")
        .arg("commit")
        .arg("-m")
        .arg(message)
        .status()
        .wrap_err("failed to run git commit")?;

    if !status.success() {
        return Err(eyre!("git commit exited with {status}"));
    }

    info!("commit successful");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{
        convention::AzureDevopsConventional, error::CzError,
        prompt::MockPrompter,
    };

    fn prompter(scope: &'static str, subject: &'static str) -> MockPrompter {
        let mut prompter = MockPrompter::new();
        prompter.expect_select().returning(|_, _| Ok("fix".into()));
        let mut answers = vec![scope, subject, "", ""].into_iter();
        prompter
            .expect_input()
            .times(4)
            .returning(move |_| Ok(answers.next().unwrap_or_default().into()));
        prompter.expect_confirm().returning(|_, _| Ok(false));
        prompter
    }

    #[test]
    fn composes_message_from_answers() {
        let convention = AzureDevopsConventional::default();
        let mut prompter = prompter("42", "correct typo.");

        let message = compose(&convention, &mut prompter).unwrap();

        assert_eq!(message, "fix(#42): correct typo");
    }

    #[test]
    fn empty_subject_aborts_before_committing() {
        let convention = AzureDevopsConventional::default();
        let mut prompter = MockPrompter::new();
        prompter.expect_select().returning(|_, _| Ok("fix".into()));
        let mut answers = vec!["", "  .  "].into_iter();
        prompter
            .expect_input()
            .times(2)
            .returning(move |_| Ok(answers.next().unwrap_or_default().into()));
        prompter.expect_confirm().never();

        let err = compose(&convention, &mut prompter).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CzError>(),
            Some(CzError::RequiredValueMissing(_))
        ));
    }

    #[test]
    fn writes_message_to_file() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("COMMIT_EDITMSG");

        write_message(&path, "fix: correct typo").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "fix: correct typo");
    }
}
