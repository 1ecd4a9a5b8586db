//! Commit message grammar accepted by the convention.

use log::*;
use regex::Regex;
use std::sync::LazyLock;

/// Pattern a commit message must match, anchored at the start of the
/// message.
pub const SCHEMA_PATTERN: &str = concat!(
    r"(build|ci|docs|feat|fix|perf|refactor|style|test|chore|revert|bump)",
    r"(\(\S+\))?!?:(\s.*)"
);

// dot matches newlines so the description runs to the end of the message
static SCHEMA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?s)^{SCHEMA_PATTERN}")).unwrap()
});

/// Extract the description (everything after the header's `: `) from a
/// commit message, trimmed.
///
/// Messages that do not follow the grammar are not errors, commit history
/// routinely contains them, so they yield `None`.
pub fn process_commit(commit: &str) -> Option<String> {
    match SCHEMA_REGEX.captures(commit) {
        Some(caps) => Some(caps[3].trim().to_string()),
        None => {
            debug!("commit does not follow the schema: {commit:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_description_from_plain_header() {
        assert_eq!(
            process_commit("fix: correct typo"),
            Some("correct typo".to_string())
        );
    }

    #[test]
    fn extracts_description_with_scope_and_bang() {
        assert_eq!(
            process_commit("feat(#42,#123)!:   new login  "),
            Some("new login".to_string())
        );
    }

    #[test]
    fn description_includes_body_and_footer() {
        let commit = "docs(#1): guide\n\nmore words\n\nBREAKING CHANGE: ";
        assert_eq!(
            process_commit(commit),
            Some("guide\n\nmore words\n\nBREAKING CHANGE:".to_string())
        );
    }

    #[test]
    fn accepts_revert_and_bump_tags() {
        assert!(process_commit("revert: feat: add login").is_some());
        assert!(process_commit("bump: version 0.1.0 → 0.2.0").is_some());
    }

    #[test]
    fn non_conforming_messages_yield_none() {
        assert_eq!(process_commit("update readme"), None);
        assert_eq!(process_commit(""), None);
        // no whitespace after the colon
        assert_eq!(process_commit("fix:typo"), None);
        // whitespace inside the scope
        assert_eq!(process_commit("fix(#1, #2): typo"), None);
        // unknown tag
        assert_eq!(process_commit("feature: typo"), None);
        // grammar is anchored at the start
        assert_eq!(process_commit("wip fix: typo"), None);
    }
}
