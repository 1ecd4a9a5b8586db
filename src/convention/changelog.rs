//! Changelog entries parsed from commits and the rewrite that turns their
//! scope into Azure DevOps work item links.

use log::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Pattern used to parse conventional commits into changelog entries.
pub const COMMIT_PARSER: &str = concat!(
    r"^((?P<change_type>feat|fix|refactor|perf|BREAKING CHANGE)",
    r"(?:\((?P<scope>[^()\r\n]*)\)|\()?(?P<breaking>!)?|\w+!):\s(?P<message>.*)?"
);

static COMMIT_PARSER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMMIT_PARSER).unwrap());

/// Path of the work item page relative to the project base url.
const WORK_ITEM_PATH: &str = "_workitems/edit";

/// Commit the changelog entry was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitCommit {
    pub rev: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub author_email: String,
}

/// A changelog entry as produced by the commit parser.
///
/// Only `scope` is ever inspected; every other field is carried through
/// untouched and in its original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedChangelogEntry(Map<String, Value>);

impl ParsedChangelogEntry {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Scope as a string, `None` when absent, null or not a string.
    pub fn scope(&self) -> Option<&str> {
        self.0.get("scope").and_then(Value::as_str)
    }

    pub fn set_scope(&mut self, scope: impl Into<String>) {
        self.0.insert("scope".into(), Value::String(scope.into()));
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ParsedChangelogEntry {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Parse a commit message into a changelog entry.
///
/// Commits whose type does not belong in the changelog yield `None`.
pub fn parse_commit(message: &str) -> Option<ParsedChangelogEntry> {
    let caps = COMMIT_PARSER_REGEX.captures(message)?;

    let mut fields = Map::new();

    for name in ["change_type", "scope", "breaking", "message"] {
        let value = caps
            .name(name)
            .map(|m| Value::String(m.as_str().to_string()))
            .unwrap_or(Value::Null);
        fields.insert(name.into(), value);
    }

    Some(ParsedChangelogEntry(fields))
}

/// Turn a comma separated list of work item ids into markdown links.
///
/// Each token keeps its text (with or without a leading `#`) as the link
/// label; the link target uses the bare id.
pub fn link_work_items(scope: &str, base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');

    scope
        .split(',')
        .map(str::trim)
        .map(|work_item| {
            let id = work_item.trim_start_matches('#');
            format!("[{work_item}]({base_url}/{WORK_ITEM_PATH}/{id})")
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Replace the entry's scope with work item links, in place.
///
/// Entries with an empty or absent scope are left as they are.
pub fn rewrite_scope(entry: &mut ParsedChangelogEntry, base_url: &str) {
    let Some(scope) = entry.scope().filter(|s| !s.is_empty()) else {
        return;
    };

    let links = link_work_items(scope, base_url);
    debug!("rewrote changelog scope {scope:?} into {links:?}");
    entry.set_scope(links);
}
