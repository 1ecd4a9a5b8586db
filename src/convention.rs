//! The Azure DevOps flavour of conventional commits.
//!
//! Everything here is a pure transformation: questions to answers, answers
//! to a commit message, commit messages to changelog entries.
pub mod azure_devops;
pub mod bump;
pub mod change_type;
pub mod changelog;
pub mod filters;
pub mod grammar;
pub mod message;
pub mod questions;
pub mod traits;

pub use azure_devops::AzureDevopsConventional;
pub use bump::{BumpLevel, BumpRules};
pub use change_type::ChangeType;
pub use changelog::{GitCommit, ParsedChangelogEntry};
pub use message::{CommitAnswers, CommitAnswersBuilder, WorkItemId};
pub use questions::{AnswerValue, Choice, Field, Question, QuestionKind};
pub use traits::CommitConvention;
