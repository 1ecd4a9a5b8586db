use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::{CzError, Result};

/// Conventional commit change types offered to the user when committing.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Fix,
    Feat,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
}

impl ChangeType {
    /// All change types in the order they are presented to the user.
    pub const ALL: [ChangeType; 10] = [
        ChangeType::Fix,
        ChangeType::Feat,
        ChangeType::Docs,
        ChangeType::Style,
        ChangeType::Refactor,
        ChangeType::Perf,
        ChangeType::Test,
        ChangeType::Build,
        ChangeType::Ci,
        ChangeType::Chore,
    ];

    /// Tag as written in the commit header.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Fix => "fix",
            ChangeType::Feat => "feat",
            ChangeType::Docs => "docs",
            ChangeType::Style => "style",
            ChangeType::Refactor => "refactor",
            ChangeType::Perf => "perf",
            ChangeType::Test => "test",
            ChangeType::Build => "build",
            ChangeType::Ci => "ci",
            ChangeType::Chore => "chore",
        }
    }

    /// One-line description shown next to the tag in the selection list.
    pub fn description(&self) -> &'static str {
        match self {
            ChangeType::Fix => "A bug fix. Correlates with PATCH in SemVer",
            ChangeType::Feat => {
                "A new feature. Correlates with MINOR in SemVer"
            }
            ChangeType::Docs => "Documentation only changes",
            ChangeType::Style => {
                "Changes that do not affect the meaning of the code \
                 (white-space, formatting, missing semi-colons, etc)"
            }
            ChangeType::Refactor => {
                "A code change that neither fixes a bug nor adds a feature"
            }
            ChangeType::Perf => "A code change that improves performance",
            ChangeType::Test => "Adding missing or correcting existing tests",
            ChangeType::Build => {
                "Changes that affect the build system or external \
                 dependencies (example scopes: pip, docker, npm)"
            }
            ChangeType::Ci => {
                "Changes to our CI configuration files and scripts \
                 (example scopes: GitLabCI)"
            }
            ChangeType::Chore => {
                "Other changes that don't modify source or test files"
            }
        }
    }
}

impl Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = CzError;

    fn from_str(s: &str) -> Result<Self> {
        ChangeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CzError::invalid_answer(format!(
                    "Change type '{s}' is not valid."
                ))
            })
    }
}
