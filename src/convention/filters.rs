//! Answer filters applied to raw prompt input before it is accepted.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{CzError, Result};

/// Typed to a user in a single line prompt to request a paragraph break.
pub const LINE_BREAK_MARKER: &str = "\\n";

static WORK_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

static LINE_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\n|\r?\n").unwrap());

/// Validate a comma separated list of Azure DevOps work item ids.
///
/// Empty input yields no work items since the scope is optional. Tokens are
/// returned as written (trimmed); they are opaque ids, never converted to
/// integers.
pub fn parse_scope(text: &str) -> Result<Vec<String>> {
    let text = text.trim();

    if text.is_empty() {
        return Ok(vec![]);
    }

    let work_items = text
        .split(',')
        .map(|item| item.trim().to_string())
        .collect::<Vec<String>>();

    if work_items.iter().all(|item| item.is_empty()) {
        return Err(CzError::required("Azure Devops work item is required"));
    }

    for work_item in work_items.iter() {
        if !WORK_ITEM_REGEX.is_match(work_item) {
            return Err(CzError::invalid_answer(format!(
                "Azure Devops work item '{work_item}' is not valid."
            )));
        }
    }

    Ok(work_items)
}

/// Normalize the commit subject, dropping trailing periods.
pub fn parse_subject(text: &str) -> Result<String> {
    let subject = text.trim().trim_end_matches('.').trim();

    if subject.is_empty() {
        return Err(CzError::required("Subject is required."));
    }

    Ok(subject.to_string())
}

/// Turn line break markers typed into a single line prompt into paragraph
/// breaks.
pub fn multiple_line_breaker(text: &str) -> String {
    if !LINE_BREAK_REGEX.is_match(text) {
        return text.to_string();
    }

    LINE_BREAK_REGEX
        .split(text)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<&str>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_splits_and_trims_work_items() {
        assert_eq!(parse_scope("42, 123").unwrap(), vec!["42", "123"]);
        assert_eq!(parse_scope(" 7 ").unwrap(), vec!["7"]);
    }

    #[test]
    fn scope_is_optional() {
        assert!(parse_scope("").unwrap().is_empty());
        assert!(parse_scope("   ").unwrap().is_empty());
    }

    #[test]
    fn scope_rejects_non_numeric_work_items() {
        let err = parse_scope("abc").unwrap_err();
        assert!(matches!(err, CzError::InvalidAnswer(_)));
        assert!(err.to_string().contains("'abc'"));

        let err = parse_scope("42, #43").unwrap_err();
        assert!(err.to_string().contains("'#43'"));
    }

    #[test]
    fn scope_rejects_all_separator_input() {
        let result = parse_scope(",");
        assert!(matches!(result, Err(CzError::RequiredValueMissing(_))));

        let result = parse_scope(" , ,");
        assert!(matches!(result, Err(CzError::RequiredValueMissing(_))));
    }

    #[test]
    fn scope_rejects_empty_token_between_ids() {
        let result = parse_scope("42,,43");
        assert!(matches!(result, Err(CzError::InvalidAnswer(_))));
    }

    #[test]
    fn scope_accepts_long_ids_without_overflow_checks() {
        let long = "123456789012345678901234567890";
        assert_eq!(parse_scope(long).unwrap(), vec![long]);
    }

    #[test]
    fn scope_rejects_non_ascii_digits() {
        let result = parse_scope("٤٢");
        assert!(matches!(result, Err(CzError::InvalidAnswer(_))));
    }

    #[test]
    fn subject_strips_periods_and_whitespace() {
        assert_eq!(parse_subject("  Fix the bug.  ").unwrap(), "Fix the bug");
        assert_eq!(parse_subject("add thing...").unwrap(), "add thing");
        assert_eq!(parse_subject("v1.2 support").unwrap(), "v1.2 support");
    }

    #[test]
    fn subject_is_required() {
        for input in [".", "", "   ", " ... "] {
            let result = parse_subject(input);
            assert!(
                matches!(result, Err(CzError::RequiredValueMissing(_))),
                "{input:?}"
            );
        }
    }

    #[test]
    fn body_without_markers_is_unchanged() {
        assert_eq!(multiple_line_breaker("  plain body "), "  plain body ");
        assert_eq!(multiple_line_breaker(""), "");
    }

    #[test]
    fn body_markers_become_paragraph_breaks() {
        assert_eq!(
            multiple_line_breaker("first line\\nsecond line"),
            "first line\n\nsecond line"
        );
        assert_eq!(
            multiple_line_breaker("one \\n\\n two\nthree"),
            "one\n\ntwo\n\nthree"
        );
    }
}
