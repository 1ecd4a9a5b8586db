//! Changelog entry command implementation.
use color_eyre::eyre::WrapErr;
use log::*;
use serde_json::Value;
use std::io::{self, Read};

use crate::{
    cli::{Args, ChangelogEntryArgs},
    command::common,
    convention::{
        CommitConvention, GitCommit, ParsedChangelogEntry, changelog,
    },
    result::Result,
};

/// Rewrite changelog entries read from stdin, or parsed from a message,
/// and print them as JSON.
pub fn execute(args: &Args, entry_args: &ChangelogEntryArgs) -> Result<()> {
    let convention = common::load_convention(args)?;

    let commit = GitCommit {
        rev: entry_args.rev.clone(),
        ..GitCommit::default()
    };

    let output = match &entry_args.message {
        Some(message) => rewrite_message(&convention, message, &commit)?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .wrap_err("failed to read changelog entries from stdin")?;
            Some(rewrite_entries(&convention, &input, &commit)?)
        }
    };

    if let Some(output) = output {
        println!("{output}");
    }

    Ok(())
}

/// Parse a commit message into an entry and rewrite it. `None` when the
/// commit does not belong in the changelog.
pub fn rewrite_message(
    convention: &dyn CommitConvention,
    message: &str,
    commit: &GitCommit,
) -> Result<Option<String>> {
    let Some(entry) = changelog::parse_commit(message) else {
        info!("commit is not part of the changelog, skipping");
        return Ok(None);
    };

    let entry = convention.changelog_message_builder_hook(entry, commit)?;
    Ok(Some(serde_json::to_string_pretty(&entry)?))
}

/// Rewrite a JSON entry, or array of entries, through the changelog hook.
///
/// A missing base url fails the whole input; no partial output is produced.
pub fn rewrite_entries(
    convention: &dyn CommitConvention,
    input: &str,
    commit: &GitCommit,
) -> Result<String> {
    let value: Value = serde_json::from_str(input)
        .wrap_err("changelog entries must be a JSON object or array")?;

    let rewrite = |value: Value| -> Result<Value> {
        let entry: ParsedChangelogEntry = serde_json::from_value(value)?;
        let entry = convention.changelog_message_builder_hook(entry, commit)?;
        Ok(serde_json::to_value(entry)?)
    };

    let output = match value {
        Value::Array(entries) => Value::Array(
            entries
                .into_iter()
                .map(rewrite)
                .collect::<Result<Vec<Value>>>()?,
        ),
        entry => rewrite(entry)?,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        config::Settings, convention::AzureDevopsConventional, error::CzError,
    };

    fn convention() -> AzureDevopsConventional {
        AzureDevopsConventional::new(&Settings {
            azure_devops_project_base_url: Some(
                "https://dev.azure.com/org/proj".into(),
            ),
            ..Settings::default()
        })
        .unwrap()
    }

    fn parse(output: &str) -> Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn rewrites_array_of_entries() {
        let input = json!([
            {"change_type": "feat", "scope": "#42,100", "message": "a"},
            {"change_type": "fix", "scope": null, "message": "b"},
        ])
        .to_string();

        let output =
            rewrite_entries(&convention(), &input, &GitCommit::default())
                .unwrap();

        assert_eq!(
            parse(&output),
            json!([
                {
                    "change_type": "feat",
                    "scope": "[#42](https://dev.azure.com/org/proj/_workitems/edit/42) [100](https://dev.azure.com/org/proj/_workitems/edit/100)",
                    "message": "a",
                },
                {"change_type": "fix", "scope": null, "message": "b"},
            ])
        );
    }

    #[test]
    fn rewrites_single_entry() {
        let input = r##"{"scope": "#7"}"##;

        let output =
            rewrite_entries(&convention(), input, &GitCommit::default())
                .unwrap();

        assert_eq!(
            parse(&output),
            json!({"scope": "[#7](https://dev.azure.com/org/proj/_workitems/edit/7)"})
        );
    }

    #[test]
    fn missing_base_url_fails_without_output() {
        let convention = AzureDevopsConventional::default();
        let input = json!([{"scope": ""}, {"scope": "#1"}]).to_string();

        let err = rewrite_entries(&convention, &input, &GitCommit::default())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CzError>(),
            Some(CzError::ConfigurationMissing(_))
        ));
    }

    #[test]
    fn rewrites_parsed_commit_message() {
        let output = rewrite_message(
            &convention(),
            "fix(#12): correct typo",
            &GitCommit::default(),
        )
        .unwrap();

        let entry = parse(&output.unwrap());
        assert_eq!(
            entry["scope"],
            json!("[#12](https://dev.azure.com/org/proj/_workitems/edit/12)")
        );
        assert_eq!(entry["message"], json!("correct typo"));
    }

    #[test]
    fn skips_commits_outside_the_changelog() {
        let output = rewrite_message(
            &convention(),
            "docs: update guide",
            &GitCommit::default(),
        )
        .unwrap();

        assert!(output.is_none());
    }
}
