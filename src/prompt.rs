//! Terminal prompting for commit answers.
use color_eyre::eyre::eyre;
use log::*;
use std::io::{BufRead, Write};

use crate::{
    convention::{
        AnswerValue, ChangeType, Choice, CommitAnswers, CommitAnswersBuilder,
        Field, Question, QuestionKind, WorkItemId,
    },
    error::{CzError, Result},
};

/// Asks the user for a single answer at a time.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Pick one of `choices`, returning its value.
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<String>;

    /// Free text answer, without the trailing newline.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Yes or no answer.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Line oriented prompter over any reader and writer pair, usually stdin
/// and stderr.
pub struct TermPrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TermPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();

        if self.reader.read_line(&mut line)? == 0 {
            return Err(CzError::Other(eyre!("prompt aborted: input closed")));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask(&mut self, message: &str, suffix: &str) -> Result<String> {
        write!(self.writer, "? {}{suffix} ", message.trim_end())?;
        self.writer.flush()?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Prompter for TermPrompter<R, W> {
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<String> {
        writeln!(self.writer, "? {}", message.trim_end())?;
        for (index, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", index + 1, choice.name)?;
        }

        loop {
            let answer = self.ask("Answer", "")?;
            let answer = answer.trim();

            let by_index = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| choices.get(i));

            let selected =
                by_index.or_else(|| choices.iter().find(|c| c.value == answer));

            match selected {
                Some(choice) => return Ok(choice.value.clone()),
                None => writeln!(
                    self.writer,
                    "  '{answer}' is not one of the choices, try again"
                )?,
            }
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        self.ask(message, "")
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { " (Y/n)" } else { " (y/N)" };

        loop {
            let answer = self.ask(message, hint)?;

            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                other => {
                    writeln!(self.writer, "  '{other}' is not yes or no")?
                }
            }
        }
    }
}

/// Ask every question in order and assemble the answers.
///
/// Answers that fail their question's filter abort the whole questionnaire.
pub fn collect_answers(
    prompter: &mut dyn Prompter,
    questions: &[Question],
) -> Result<CommitAnswers> {
    let mut builder = CommitAnswersBuilder::default();

    for question in questions {
        let value = match &question.kind {
            QuestionKind::List { choices } => AnswerValue::Text(
                prompter.select(&question.message, choices)?,
            ),
            QuestionKind::Input => {
                let raw = prompter.input(&question.message)?;
                question.filter_text(&raw)?
            }
            QuestionKind::Confirm { default } => {
                AnswerValue::Bool(prompter.confirm(&question.message, *default)?)
            }
        };

        debug!("answer for {}: {:?}", question.field.name(), value);

        match (question.field, value) {
            (Field::Prefix, AnswerValue::Text(tag)) => {
                builder.change_type(tag.parse::<ChangeType>()?);
            }
            (Field::Scope, AnswerValue::List(work_items)) => {
                let work_items = work_items
                    .iter()
                    .map(|id| id.parse::<WorkItemId>())
                    .collect::<Result<Vec<WorkItemId>>>()?;
                builder.work_items(work_items);
            }
            (Field::Subject, AnswerValue::Text(subject)) => {
                builder.subject(subject);
            }
            (Field::Body, AnswerValue::Text(body)) => {
                builder.body(body);
            }
            (Field::IsBreakingChange, AnswerValue::Bool(breaking)) => {
                builder.is_breaking_change(breaking);
            }
            (Field::Footer, AnswerValue::Text(footer)) => {
                builder.footer(footer);
            }
            (field, value) => {
                return Err(CzError::invalid_answer(format!(
                    "unexpected answer {value:?} for {}",
                    field.name()
                )));
            }
        }
    }

    Ok(builder.build()?)
}
