//! Conventional commits linked to Azure DevOps work items.

use log::*;
use url::Url;

use crate::{
    config::Settings,
    convention::{
        bump::{self, BumpMap},
        changelog::{self, GitCommit, ParsedChangelogEntry},
        grammar,
        message::{self, CommitAnswers},
        questions::{self, Question},
        traits::CommitConvention,
    },
    error::{CzError, Result},
};

/// Help text describing the convention.
pub const INFO: &str = include_str!("conventional_commits_info.txt");

/// Changelog section titles by change type.
pub const DEFAULT_CHANGE_TYPE_MAP: [(&str, &str); 4] = [
    ("feat", "Feat"),
    ("fix", "Fix"),
    ("refactor", "Refactor"),
    ("perf", "Perf"),
];

/// Commit convention whose scope is a list of Azure DevOps work item ids.
#[derive(Debug, Clone, Default)]
pub struct AzureDevopsConventional {
    base_url: Option<String>,
}

impl AzureDevopsConventional {
    /// Create the convention from project settings.
    ///
    /// Fails when the settings ask for something the convention does not
    /// support, or when the configured base url is not a valid url.
    pub fn new(settings: &Settings) -> Result<Self> {
        if settings.change_type_map.is_some() {
            return Err(CzError::UnsupportedConfiguration(
                "Only default change type map is supported at the moment."
                    .into(),
            ));
        }

        let base_url = settings
            .azure_devops_project_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty());

        if let Some(url) = base_url {
            Url::parse(url).map_err(|err| {
                CzError::invalid_config(format!(
                    "azure_devops_project_base_url '{url}' is not a valid url: {err}"
                ))
            })?;
        } else {
            debug!("no azure devops project base url configured");
        }

        Ok(Self {
            base_url: base_url.map(str::to_string),
        })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

impl CommitConvention for AzureDevopsConventional {
    fn questions(&self) -> Vec<Question> {
        questions::questions()
    }

    fn message(&self, answers: &CommitAnswers) -> Result<String> {
        message::format_message(answers)
    }

    fn example(&self) -> String {
        [
            "fix: correct minor typos in code",
            "",
            "see the issue for details on the typos fixed",
            "",
            "closes issue #12",
        ]
        .join("\n")
    }

    fn schema(&self) -> String {
        [
            "<type>(<scope>): <subject>",
            "<BLANK LINE>",
            "<body>",
            "<BLANK LINE>",
            "(BREAKING CHANGE: )<footer>",
        ]
        .join("\n")
    }

    fn schema_pattern(&self) -> String {
        grammar::SCHEMA_PATTERN.to_string()
    }

    fn info(&self) -> String {
        INFO.to_string()
    }

    fn process_commit(&self, commit: &str) -> Option<String> {
        grammar::process_commit(commit)
    }

    fn bump_pattern(&self) -> String {
        bump::BUMP_PATTERN.to_string()
    }

    fn bump_map(&self, major_version_zero: bool) -> BumpMap {
        if major_version_zero {
            bump::BUMP_MAP_MAJOR_VERSION_ZERO
        } else {
            bump::BUMP_MAP
        }
    }

    fn commit_parser(&self) -> String {
        changelog::COMMIT_PARSER.to_string()
    }

    fn change_type_map(&self) -> Vec<(&'static str, &'static str)> {
        DEFAULT_CHANGE_TYPE_MAP.to_vec()
    }

    fn changelog_message_builder_hook(
        &self,
        mut parsed_message: ParsedChangelogEntry,
        commit: &GitCommit,
    ) -> Result<ParsedChangelogEntry> {
        let base_url = self.base_url.as_deref().ok_or_else(|| {
            CzError::ConfigurationMissing(
                "Failed to generate changelog: Azure Devops project base \
                 URL is not set in the config file."
                    .into(),
            )
        })?;

        debug!("building changelog entry for commit {}", commit.rev);
        changelog::rewrite_scope(&mut parsed_message, base_url);

        Ok(parsed_message)
    }
}
