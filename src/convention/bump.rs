//! Version bump tables for the Azure DevOps convention.
//!
//! Every change type bumps the version by at least a patch. Which table
//! applies depends on whether the project is still on major version zero,
//! where breaking changes only bump the minor component.

use log::*;
use regex::Regex;
use semver::Version;
use serde::Serialize;
use std::{fmt::Display, sync::LazyLock};

/// Keyword used in footers (and bump tables) to flag a breaking change.
pub const BREAKING_CHANGE: &str = "BREAKING CHANGE";

/// Pattern locating the bump keyword on a commit message line.
pub const BUMP_PATTERN: &str = r"^((BREAKING[- ]CHANGE|\w+)(\(.+\))?!?):";

static BUMP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BUMP_PATTERN).unwrap());

/// Severity of a semantic version increment.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum BumpLevel {
    Patch,
    Minor,
    Major,
}

impl Display for BumpLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BumpLevel::Patch => f.write_str("PATCH"),
            BumpLevel::Minor => f.write_str("MINOR"),
            BumpLevel::Major => f.write_str("MAJOR"),
        }
    }
}

pub type BumpMap = &'static [(&'static str, BumpLevel)];

/// Bump table for projects at version 1.0.0 and above.
pub const BUMP_MAP: BumpMap = &[
    (BREAKING_CHANGE, BumpLevel::Major),
    ("feat", BumpLevel::Minor),
    ("fix", BumpLevel::Patch),
    ("refactor", BumpLevel::Patch),
    ("perf", BumpLevel::Patch),
    ("style", BumpLevel::Patch),
    ("test", BumpLevel::Patch),
    ("docs", BumpLevel::Patch),
    ("build", BumpLevel::Patch),
    ("ci", BumpLevel::Patch),
    ("chore", BumpLevel::Patch),
];

/// Bump table for projects still on major version zero.
pub const BUMP_MAP_MAJOR_VERSION_ZERO: BumpMap = &[
    (BREAKING_CHANGE, BumpLevel::Minor),
    ("feat", BumpLevel::Minor),
    ("fix", BumpLevel::Patch),
    ("refactor", BumpLevel::Patch),
    ("perf", BumpLevel::Patch),
    ("style", BumpLevel::Patch),
    ("test", BumpLevel::Patch),
    ("docs", BumpLevel::Patch),
    ("build", BumpLevel::Patch),
    ("ci", BumpLevel::Patch),
    ("chore", BumpLevel::Patch),
];

/// Resolves commit messages to bump levels using one of the bump tables.
#[derive(Debug, Clone, Copy)]
pub struct BumpRules {
    map: BumpMap,
}

impl BumpRules {
    /// Rules using the table selected by `major_version_zero`.
    pub fn new(major_version_zero: bool) -> Self {
        let map = if major_version_zero {
            BUMP_MAP_MAJOR_VERSION_ZERO
        } else {
            BUMP_MAP
        };
        Self { map }
    }

    /// Rules for the given current version.
    pub fn for_version(current: &Version) -> Self {
        Self::new(current.major == 0)
    }

    pub fn map(&self) -> BumpMap {
        self.map
    }

    /// Level for a single keyword such as `feat` or `feat(#42)!`.
    ///
    /// The first table key the keyword starts with wins.
    pub fn level_for_keyword(&self, keyword: &str) -> Option<BumpLevel> {
        self.map
            .iter()
            .find(|(key, _)| keyword.starts_with(key))
            .map(|(_, level)| *level)
    }

    /// Highest level found on any line of a commit message.
    pub fn level_for_message(&self, message: &str) -> Option<BumpLevel> {
        message
            .lines()
            .filter_map(|line| BUMP_REGEX.captures(line))
            .filter_map(|caps| {
                // BREAKING-CHANGE is an accepted spelling of the footer
                let keyword =
                    caps[1].replacen("BREAKING-CHANGE", BREAKING_CHANGE, 1);
                self.level_for_keyword(&keyword)
            })
            .max()
    }

    /// Highest level across a set of commit messages, if any of them bump.
    pub fn increment<S: AsRef<str>>(
        &self,
        messages: &[S],
    ) -> Option<BumpLevel> {
        let increment = messages
            .iter()
            .filter_map(|m| self.level_for_message(m.as_ref()))
            .max();
        debug!(
            "computed increment {:?} over {} messages",
            increment,
            messages.len()
        );
        increment
    }
}
