//! Contract between a commit convention and the tools that drive it.

use crate::{
    convention::{
        bump::BumpMap,
        changelog::{GitCommit, ParsedChangelogEntry},
        message::CommitAnswers,
        questions::Question,
    },
    error::Result,
};

/// A commit convention: how commits are asked for, written, validated and
/// turned into changelog entries.
pub trait CommitConvention {
    /// Ordered questions used to collect a commit's answers.
    fn questions(&self) -> Vec<Question>;

    /// Render answers into a commit message.
    fn message(&self, answers: &CommitAnswers) -> Result<String>;

    /// An example commit message following the convention.
    fn example(&self) -> String;

    /// Human readable outline of the commit message layout.
    fn schema(&self) -> String;

    /// Regular expression a commit message must match.
    fn schema_pattern(&self) -> String;

    /// Longer help text describing the convention.
    fn info(&self) -> String;

    /// Description extracted from a commit message, `None` if the message
    /// does not follow the convention.
    fn process_commit(&self, commit: &str) -> Option<String>;

    /// Regular expression locating bump keywords in commit messages.
    fn bump_pattern(&self) -> String;

    /// Bump table selected for the project's major version.
    fn bump_map(&self, major_version_zero: bool) -> BumpMap;

    /// Regular expression parsing commits into changelog entries.
    fn commit_parser(&self) -> String;

    /// Changelog section titles by change type.
    fn change_type_map(&self) -> Vec<(&'static str, &'static str)>;

    /// Adjust a parsed changelog entry before it is rendered.
    fn changelog_message_builder_hook(
        &self,
        parsed_message: ParsedChangelogEntry,
        commit: &GitCommit,
    ) -> Result<ParsedChangelogEntry>;
}
