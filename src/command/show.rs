//! Commands printing information about the convention.
use std::io::Write;

use crate::{
    cli::{Args, Command},
    command::common,
    convention::CommitConvention,
    result::Result,
};

/// Print the questionnaire, example, schema, pattern or info text, or the
/// description of a commit message.
pub fn execute(args: &Args) -> Result<()> {
    let convention = common::load_convention(args)?;
    let mut stdout = std::io::stdout().lock();
    show(&convention, &args.command, &mut stdout)
}

/// Write the text requested by `command` to `out`.
pub fn show(
    convention: &dyn CommitConvention,
    command: &Command,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Questions => {
            let questions = convention.questions();
            writeln!(out, "{}", serde_json::to_string_pretty(&questions)?)?
        }
        Command::Example => writeln!(out, "{}", convention.example())?,
        Command::Schema => writeln!(out, "{}", convention.schema())?,
        Command::SchemaPattern => {
            writeln!(out, "{}", convention.schema_pattern())?
        }
        Command::Info => write!(out, "{}", convention.info())?,
        Command::ProcessCommit { message } => {
            // non conforming commits print nothing
            if let Some(description) = convention.process_commit(message) {
                writeln!(out, "{description}")?;
            }
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::AzureDevopsConventional;

    fn run(command: Command) -> String {
        let convention = AzureDevopsConventional::default();
        let mut out = vec![];
        show(&convention, &command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn shows_example_and_schema() {
        assert!(run(Command::Example).starts_with("fix: correct minor typos"));
        assert!(run(Command::Schema).contains("(BREAKING CHANGE: )<footer>"));
        assert!(run(Command::SchemaPattern).starts_with("(build|ci|docs"));
        assert!(run(Command::Info).contains("_workitems/edit"));
    }

    #[test]
    fn shows_questions_as_json() {
        let output: serde_json::Value =
            serde_json::from_str(&run(Command::Questions)).unwrap();

        let questions = output.as_array().unwrap();
        assert_eq!(questions.len(), 6);
        assert_eq!(questions[0]["field"], "prefix");
        assert_eq!(questions[0]["kind"]["type"], "list");
        assert_eq!(questions[4]["kind"]["default"], false);
        assert!(questions[1].get("filter").is_none());
    }

    #[test]
    fn process_commit_prints_description_or_nothing() {
        let output = run(Command::ProcessCommit {
            message: "feat(#1): add login".into(),
        });
        assert_eq!(output, "add login\n");

        let output = run(Command::ProcessCommit {
            message: "update readme".into(),
        });
        assert_eq!(output, "");
    }
}
