//! Structured commit answers and their rendering into a commit message.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::{
    convention::{bump::BREAKING_CHANGE, change_type::ChangeType, filters},
    error::{CzError, Result},
};

/// Numeric identifier of an Azure DevOps work item, kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkItemId(String);

impl WorkItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for WorkItemId {
    type Err = CzError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CzError::invalid_answer(format!(
                "Azure Devops work item '{s}' is not valid."
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for WorkItemId {
    type Error = CzError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<WorkItemId> for String {
    fn from(value: WorkItemId) -> Self {
        value.0
    }
}

impl Display for WorkItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answers collected from the user, or supplied programmatically, for a
/// single commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct CommitAnswers {
    pub change_type: ChangeType,
    #[builder(default)]
    #[serde(default)]
    pub work_items: Vec<WorkItemId>,
    pub subject: String,
    #[builder(default)]
    #[serde(default)]
    pub body: String,
    #[builder(default)]
    #[serde(default)]
    pub is_breaking_change: bool,
    #[builder(default)]
    #[serde(default)]
    pub footer: String,
}

impl From<CommitAnswersBuilderError> for CzError {
    fn from(err: CommitAnswersBuilderError) -> Self {
        match err {
            CommitAnswersBuilderError::UninitializedField(field) => {
                CzError::required(format!("Answer for '{field}' is required."))
            }
            CommitAnswersBuilderError::ValidationError(msg) => {
                CzError::invalid_answer(msg)
            }
        }
    }
}

impl CommitAnswers {
    /// Render the header line, `<type>(<#id>,...): <subject>`.
    pub fn header(&self) -> String {
        if self.work_items.is_empty() {
            return format!("{}: {}", self.change_type, self.subject);
        }

        let scope = self
            .work_items
            .iter()
            .map(|id| format!("#{id}"))
            .collect::<Vec<String>>()
            .join(",");

        format!("{}({}): {}", self.change_type, scope, self.subject)
    }

    /// Footer as it appears in the message, including the breaking change
    /// label when flagged.
    pub fn rendered_footer(&self) -> String {
        if self.is_breaking_change {
            format!("{BREAKING_CHANGE}: {}", self.footer)
        } else {
            self.footer.clone()
        }
    }
}

/// Format validated answers into the canonical commit message.
pub fn format_message(answers: &CommitAnswers) -> Result<String> {
    // re-run the subject filter so programmatic answers hold the same
    // invariant as prompted ones
    filters::parse_subject(&answers.subject)?;

    let mut message = answers.header();

    if !answers.body.is_empty() {
        message.push_str("\n\n");
        message.push_str(&answers.body);
    }

    let footer = answers.rendered_footer();

    if !footer.is_empty() {
        message.push_str("\n\n");
        message.push_str(&footer);
    }

    Ok(message)
}
