/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Orchestration: run prompts in sequence and record their answers.
//!
//! [ask] drives each [Question] through the same lifecycle: prompt, validate (asking
//! again on rejection), transform, paint the final answer line, write the value to
//! the caller's [AnswerSink]. A fatal error anywhere ([AskError::Interrupted]
//! included) abandons the rest of the batch; answers already written stay written.

use crate::{Answer, AnswerSink, AskError, AskResult, Prompt};

/// Inspects a candidate answer. `Err` carries the reason shown to the user before
/// the question is asked again; it is not an [AskError].
pub type Validator = Box<dyn Fn(&Answer) -> core::result::Result<(), String>>;

/// Rewrites a validated answer before it is recorded. Returning `None` keeps the
/// answer as is.
pub type Transformer = Box<dyn Fn(&Answer) -> Option<Answer>>;

/// One named entry in an [ask] batch.
///
/// ```no_run
/// use r3bl_ask::{ask, validators, Answers, Confirm, Input, Question};
///
/// let mut answers = Answers::new();
/// ask(
///     vec![
///         Question::new("name", Input::new().set_message("What is your name?"))
///             .with_validator(validators::required),
///         Question::new("pie", Confirm::new().set_message("Like pie?").set_default(true)),
///     ],
///     &mut answers,
/// )?;
/// # Ok::<(), r3bl_ask::AskError>(())
/// ```
pub struct Question {
    name: String,
    prompt: Box<dyn Prompt>,
    validators: Vec<Validator>,
    maybe_transformer: Option<Transformer>,
}

impl Question {
    pub fn new(name: impl Into<String>, prompt: impl Prompt + 'static) -> Self {
        Self {
            name: name.into(),
            prompt: Box::new(prompt),
            validators: vec![],
            maybe_transformer: None,
        }
    }

    /// Add a validator. Validators run in the order added; the first rejection is
    /// reported and the question is asked again from scratch.
    pub fn with_validator(
        mut self,
        validator: impl Fn(&Answer) -> core::result::Result<(), String> + 'static,
    ) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn with_transformer(
        mut self,
        transformer: impl Fn(&Answer) -> Option<Answer> + 'static,
    ) -> Self {
        self.maybe_transformer = Some(Box::new(transformer));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ask every question in order, recording each validated answer in `sink` under the
/// question's name before moving on.
pub fn ask(questions: Vec<Question>, sink: &mut impl AnswerSink) -> AskResult<()> {
    for question in questions {
        ask_question(question, sink)?;
    }
    Ok(())
}

/// Ask a single prompt outside any batch. The optional validator gets the same
/// reject-and-ask-again treatment as in [ask].
pub fn ask_one(
    mut prompt: impl Prompt,
    maybe_validator: Option<Validator>,
) -> AskResult<Answer> {
    let validators: Vec<Validator> = maybe_validator.into_iter().collect();
    let answer = prompt_until_valid(&mut prompt, &validators)?;
    prompt.cleanup(&answer)?;
    Ok(answer)
}

fn ask_question(mut question: Question, sink: &mut impl AnswerSink) -> AskResult<()> {
    // % is Display, ? is Debug.
    tracing::debug!(message = "asking question", name = %question.name);

    let answer = prompt_until_valid(question.prompt.as_mut(), &question.validators)?;
    let answer = match &question.maybe_transformer {
        Some(transformer) => transformer(&answer).unwrap_or(answer),
        None => answer,
    };
    question.prompt.cleanup(&answer)?;

    tracing::debug!(message = "question answered", name = %question.name, answer = ?answer);
    sink.write_answer(&question.name, answer.into_value())
        .map_err(|error| AskError::AnswerWrite {
            name: question.name.clone(),
            message: error.to_string(),
        })
}

fn prompt_until_valid(
    prompt: &mut dyn Prompt,
    validators: &[Validator],
) -> AskResult<Answer> {
    loop {
        let answer = prompt.prompt()?;
        match first_rejection(validators, &answer) {
            None => return Ok(answer),
            Some(reason) => {
                tracing::debug!(message = "answer rejected", reason = %reason);
                prompt.report_error(&format!("Sorry, your reply was invalid: {reason}"))?;
            }
        }
    }
}

fn first_rejection(validators: &[Validator], answer: &Answer) -> Option<String> {
    validators
        .iter()
        .find_map(|validator| validator(answer).err())
}

/// Stock validators for [Question::with_validator].
pub mod validators {
    use crate::Answer;

    /// Rejects answers with nothing in them: no answer at all, an empty line, an
    /// unchecked confirm, an empty selection.
    pub fn required(answer: &Answer) -> core::result::Result<(), String> {
        let empty = match answer {
            Answer::None => true,
            Answer::Bool(flag) => !flag,
            Answer::Text(text) => text.is_empty(),
            Answer::Value(value) => match value {
                serde_json::Value::Null => true,
                serde_json::Value::String(text) => text.is_empty(),
                serde_json::Value::Array(items) => items.is_empty(),
                _ => false,
            },
            Answer::Choice(_) => false,
            Answer::Choices(choices) => choices.is_empty(),
        };
        if empty {
            Err("Value is required".to_string())
        } else {
            Ok(())
        }
    }
}

/// Stock transformers for [Question::with_transformer].
pub mod transformers {
    use crate::Answer;

    use super::Transformer;

    /// Lowercase a text answer. Leaves every other answer kind alone.
    pub fn to_lower(answer: &Answer) -> Option<Answer> {
        match answer {
            Answer::Text(text) => Some(Answer::Text(text.to_lowercase())),
            _ => None,
        }
    }

    /// Uppercase the first letter of every word of a text answer. Leaves every
    /// other answer kind alone.
    pub fn title_case(answer: &Answer) -> Option<Answer> {
        let Answer::Text(text) = answer else {
            return None;
        };
        let mut titled = String::with_capacity(text.len());
        let mut at_word_start = true;
        for character in text.chars() {
            if character.is_whitespace() {
                at_word_start = true;
                titled.push(character);
            } else if at_word_start {
                at_word_start = false;
                titled.extend(character.to_uppercase());
            } else {
                titled.push(character);
            }
        }
        Some(Answer::Text(titled))
    }

    /// Chain two transformers, feeding the first's output (or the untouched answer)
    /// into the second.
    pub fn compose_transformers(first: Transformer, second: Transformer) -> Transformer {
        Box::new(move |answer| {
            let after_first = first(answer);
            let input_to_second = after_first.as_ref().unwrap_or(answer);
            second(input_to_second).or(after_first)
        })
    }
}
