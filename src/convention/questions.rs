//! Questionnaire presented to the user when composing a commit.

use serde::Serialize;

use crate::{
    convention::{change_type::ChangeType, filters},
    error::Result,
};

/// Example shown to the user for entering several work items.
pub const WORK_ITEM_MULTIPLE_HINT: &str = "42, 123";

/// Commit field a question collects, in message order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Prefix,
    Scope,
    Subject,
    Body,
    IsBreakingChange,
    Footer,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Prefix => "prefix",
            Field::Scope => "scope",
            Field::Subject => "subject",
            Field::Body => "body",
            Field::IsBreakingChange => "is_breaking_change",
            Field::Footer => "footer",
        }
    }
}

/// Entry of a single choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub name: String,
}

/// How the answer to a question is captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    List { choices: Vec<Choice> },
    Input,
    Confirm { default: bool },
}

/// Answer after filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    List(Vec<String>),
    Bool(bool),
}

pub type AnswerFilter = fn(&str) -> Result<AnswerValue>;

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub field: Field,
    pub kind: QuestionKind,
    pub message: String,
    #[serde(skip)]
    pub filter: Option<AnswerFilter>,
}

impl Question {
    /// Apply the question's filter to raw text input.
    pub fn filter_text(&self, raw: &str) -> Result<AnswerValue> {
        match self.filter {
            Some(filter) => filter(raw),
            None => Ok(AnswerValue::Text(raw.to_string())),
        }
    }
}

fn scope_filter(text: &str) -> Result<AnswerValue> {
    filters::parse_scope(text).map(AnswerValue::List)
}

fn subject_filter(text: &str) -> Result<AnswerValue> {
    filters::parse_subject(text).map(AnswerValue::Text)
}

fn body_filter(text: &str) -> Result<AnswerValue> {
    Ok(AnswerValue::Text(filters::multiple_line_breaker(text)))
}

/// Choices for the change type selection, in presentation order.
pub fn change_type_choices() -> Vec<Choice> {
    ChangeType::ALL
        .iter()
        .map(|change_type| Choice {
            value: change_type.as_str().to_string(),
            name: format!("{}: {}", change_type, change_type.description()),
        })
        .collect()
}

/// The ordered question set.
pub fn questions() -> Vec<Question> {
    vec![
        Question {
            field: Field::Prefix,
            kind: QuestionKind::List {
                choices: change_type_choices(),
            },
            message: "Select the type of change you are committing".into(),
            filter: None,
        },
        Question {
            field: Field::Scope,
            kind: QuestionKind::Input,
            message: format!(
                "Azure Devops work item number (multiple \"{WORK_ITEM_MULTIPLE_HINT}\")."
            ),
            filter: Some(scope_filter),
        },
        Question {
            field: Field::Subject,
            kind: QuestionKind::Input,
            message: "Write a short and imperative summary of the code \
                      changes: (lower case and no period)\n"
                .into(),
            filter: Some(subject_filter),
        },
        Question {
            field: Field::Body,
            kind: QuestionKind::Input,
            message: "Provide additional contextual information about the \
                      code changes: (press [enter] to skip)\n"
                .into(),
            filter: Some(body_filter),
        },
        Question {
            field: Field::IsBreakingChange,
            kind: QuestionKind::Confirm { default: false },
            message: "Is this a BREAKING CHANGE? Correlates with MAJOR in \
                      SemVer"
                .into(),
            filter: None,
        },
        Question {
            field: Field::Footer,
            kind: QuestionKind::Input,
            message: "Footer. Information about Breaking Changes and \
                      reference issues that this commit closes: (press \
                      [enter] to skip)\n"
                .into(),
            filter: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CzError;

    #[test]
    fn questions_follow_message_order() {
        let fields = questions()
            .iter()
            .map(|q| q.field.name())
            .collect::<Vec<&str>>();

        assert_eq!(
            fields,
            vec![
                "prefix",
                "scope",
                "subject",
                "body",
                "is_breaking_change",
                "footer"
            ]
        );
    }

    #[test]
    fn change_type_question_lists_every_type() {
        let questions = questions();
        let QuestionKind::List { choices } = &questions[0].kind else {
            panic!("expected a list question");
        };

        assert_eq!(choices.len(), ChangeType::ALL.len());
        assert_eq!(choices[0].value, "fix");
        assert_eq!(
            choices[0].name,
            "fix: A bug fix. Correlates with PATCH in SemVer"
        );
    }

    #[test]
    fn breaking_change_defaults_to_no() {
        let questions = questions();
        assert_eq!(
            questions[4].kind,
            QuestionKind::Confirm { default: false }
        );
    }

    #[test]
    fn scope_question_mentions_hint_and_filters() {
        let questions = questions();
        let scope = &questions[1];

        assert!(scope.message.contains(WORK_ITEM_MULTIPLE_HINT));
        assert_eq!(
            scope.filter_text("42, 123").unwrap(),
            AnswerValue::List(vec!["42".into(), "123".into()])
        );
        assert!(matches!(
            scope.filter_text("abc"),
            Err(CzError::InvalidAnswer(_))
        ));
    }

    #[test]
    fn footer_is_accepted_as_typed() {
        let questions = questions();
        assert_eq!(
            questions[5].filter_text(" closes #12 ").unwrap(),
            AnswerValue::Text(" closes #12 ".into())
        );
    }

    #[test]
    fn body_question_breaks_lines() {
        let questions = questions();
        assert_eq!(
            questions[3].filter_text("a\\nb").unwrap(),
            AnswerValue::Text("a\n\nb".into())
        );
    }
}
