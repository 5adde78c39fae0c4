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

use std::io::{stdout, Stdout, Write};

use serde_json::Value;

use crate::{
    components::{LinePromptComponent, StyleSheet},
    prompts::{input_error, is_help_line, unexpected_eof, Prompt},
    Answer, AskError, AskResult, InputFrame, LineRead, LineReader, StdinLineReader,
};

/// Free form text answered on one line.
///
/// Runs in cooked mode. A non empty line is the answer as typed; an empty line takes
/// the configured default (which can be any JSON value, not just text), or no answer
/// at all when there is none.
///
/// ```no_run
/// use r3bl_ask::{Input, Prompt};
///
/// let answer = Input::new()
///     .set_message("What is your name?")
///     .set_default(serde_json::json!("Anonymous"))
///     .prompt();
/// ```
pub struct Input<W: Write, R: LineReader> {
    write: W,
    line_reader: R,
    message: String,
    maybe_help: Option<String>,
    maybe_default: Option<Value>,
    style_sheet: StyleSheet,
}

impl Input<Stdout, StdinLineReader> {
    pub fn new() -> Self { Self::with_io(stdout(), StdinLineReader) }
}

impl Default for Input<Stdout, StdinLineReader> {
    fn default() -> Self { Self::new() }
}

impl<W: Write, R: LineReader> Input<W, R> {
    pub fn with_io(write: W, line_reader: R) -> Self {
        Self {
            write,
            line_reader,
            message: String::new(),
            maybe_help: None,
            maybe_default: None,
            style_sheet: StyleSheet::default(),
        }
    }

    pub fn set_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn set_help(mut self, help: impl Into<String>) -> Self {
        self.maybe_help = Some(help.into());
        self
    }

    /// The answer an empty line produces, shown in parentheses after the message.
    pub fn set_default(mut self, default_value: impl Into<Value>) -> Self {
        self.maybe_default = Some(default_value.into());
        self
    }

    pub fn with_style_sheet(mut self, style_sheet: StyleSheet) -> Self {
        self.style_sheet = style_sheet;
        self
    }
}

impl<W: Write, R: LineReader> Prompt for Input<W, R> {
    fn prompt(&mut self) -> AskResult<Answer> {
        let mut component = LinePromptComponent::new(&mut self.write, self.style_sheet);

        let frame = InputFrame::question(
            &self.message,
            self.maybe_help.as_deref(),
            false,
            self.maybe_default.as_ref(),
        );
        component.render_input(&frame).map_err(input_error)?;

        loop {
            match self.line_reader.read_line().map_err(input_error)? {
                LineRead::Eof => return Err(unexpected_eof()),
                LineRead::Interrupted => return Err(AskError::Interrupted),
                LineRead::Line(line) => {
                    // The echoed newline left the cursor one row below the question.
                    component.move_to_previous_line().map_err(input_error)?;

                    if is_help_line(&line) && self.maybe_help.is_some() {
                        let frame = InputFrame::question(
                            &self.message,
                            self.maybe_help.as_deref(),
                            true,
                            self.maybe_default.as_ref(),
                        );
                        component.render_input(&frame).map_err(input_error)?;
                        continue;
                    }
                    if line.is_empty() {
                        return Ok(match &self.maybe_default {
                            Some(value) => Answer::Value(value.clone()),
                            None => Answer::None,
                        });
                    }
                    tracing::debug!(message = "input accepted", answer = %line);
                    return Ok(Answer::Text(line));
                }
            }
        }
    }

    fn report_error(&mut self, error_text: &str) -> AskResult<()> {
        LinePromptComponent::new(&mut self.write, self.style_sheet)
            .render_error_line(error_text)
            .map_err(input_error)
    }

    fn cleanup(&mut self, answer: &Answer) -> AskResult<()> {
        LinePromptComponent::new(&mut self.write, self.style_sheet)
            .render_answer_line(&self.message, &answer.to_display_string())
            .map_err(input_error)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_fixtures::{TestStringWriter, TestVecLineReader};

    fn name_input(lines: &[&str]) -> Input<TestStringWriter, TestVecLineReader> {
        Input::with_io(TestStringWriter::new(), TestVecLineReader::from_lines(lines))
            .with_style_sheet(StyleSheet::monochrome())
            .set_message("What is your name?")
    }

    #[test]
    fn typed_text_is_the_answer() {
        let mut input = name_input(&["Nadia"]);
        let answer = input.prompt().unwrap();
        assert_eq!(answer, Answer::Text("Nadia".to_string()));
    }

    #[test]
    fn typed_text_beats_the_default() {
        let mut input = name_input(&["Nadia"]).set_default(json!("Bob"));
        let answer = input.prompt().unwrap();
        assert_eq!(answer, Answer::Text("Nadia".to_string()));
    }

    #[test]
    fn empty_line_takes_the_default_value_verbatim() {
        let mut input = name_input(&[""]).set_default(json!({"first": "Bob"}));
        let answer = input.prompt().unwrap();
        assert_eq!(answer, Answer::Value(json!({"first": "Bob"})));
    }

    #[test]
    fn empty_line_without_a_default_yields_no_answer() {
        let mut input = name_input(&[""]);
        let answer = input.prompt().unwrap();
        assert_eq!(answer, Answer::None);
    }

    #[test]
    fn the_default_is_shown_in_parentheses() {
        let mut input = name_input(&["Nadia"]).set_default(json!("Bob"));
        input.prompt().unwrap();
        let buffer = input.write.get_copy_of_buffer();
        assert!(buffer.contains("? What is your name? (Bob) "));
    }

    #[test]
    fn help_line_reveals_the_help_text_then_asks_again() {
        let mut input = name_input(&["?", "Nadia"]).set_help("Legal name not required.");
        let answer = input.prompt().unwrap();
        assert_eq!(answer, Answer::Text("Nadia".to_string()));
        let buffer = input.write.get_copy_of_buffer();
        assert!(buffer.contains("ⓘ Legal name not required."));
    }

    #[test]
    fn question_mark_without_help_is_a_literal_answer() {
        let mut input = name_input(&["?"]);
        let answer = input.prompt().unwrap();
        assert_eq!(answer, Answer::Text("?".to_string()));
    }

    #[test]
    fn closed_input_is_an_io_error() {
        let mut input = name_input(&[]);
        let result = input.prompt();
        assert!(matches!(result, Err(AskError::Input { .. })));
    }

    #[test]
    fn interrupt_surfaces_as_an_error() {
        let mut input = Input::with_io(
            TestStringWriter::new(),
            TestVecLineReader::new(vec![LineRead::Interrupted]),
        )
        .set_message("What is your name?");
        assert!(matches!(input.prompt(), Err(AskError::Interrupted)));
    }
}
