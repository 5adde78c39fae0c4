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

use crate::{
    components::{LinePromptComponent, StyleSheet},
    prompts::{input_error, is_help_line, unexpected_eof, Prompt},
    Answer, AskError, AskResult, ConfirmFrame, LineRead, LineReader, StdinLineReader,
};

/// A yes / no question answered on one line.
///
/// Runs in cooked mode: the terminal echoes and line-edits as usual, and the prompt
/// reads whole lines. `y` / `yes` and `n` / `no` are accepted in any case, an empty
/// line takes the default, and anything else paints an error above the re-asked
/// question.
///
/// ```no_run
/// use r3bl_ask::{Confirm, Prompt};
///
/// let answer = Confirm::new()
///     .set_message("Overwrite the existing file?")
///     .set_default(false)
///     .prompt();
/// ```
pub struct Confirm<W: Write, R: LineReader> {
    write: W,
    line_reader: R,
    message: String,
    maybe_help: Option<String>,
    default_value: bool,
    style_sheet: StyleSheet,
}

impl Confirm<Stdout, StdinLineReader> {
    pub fn new() -> Self { Self::with_io(stdout(), StdinLineReader) }
}

impl Default for Confirm<Stdout, StdinLineReader> {
    fn default() -> Self { Self::new() }
}

impl<W: Write, R: LineReader> Confirm<W, R> {
    pub fn with_io(write: W, line_reader: R) -> Self {
        Self {
            write,
            line_reader,
            message: String::new(),
            maybe_help: None,
            default_value: false,
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

    /// The answer an empty line produces. Also decides which side of `(Y/n)` is
    /// capitalized.
    pub fn set_default(mut self, default_value: bool) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn with_style_sheet(mut self, style_sheet: StyleSheet) -> Self {
        self.style_sheet = style_sheet;
        self
    }
}

impl<W: Write, R: LineReader> Prompt for Confirm<W, R> {
    fn prompt(&mut self) -> AskResult<Answer> {
        let mut help_shown = false;
        let mut component = LinePromptComponent::new(&mut self.write, self.style_sheet);

        let frame = ConfirmFrame::question(
            &self.message,
            self.maybe_help.as_deref(),
            false,
            self.default_value,
        );
        component.render_confirm(&frame).map_err(input_error)?;

        loop {
            match self.line_reader.read_line().map_err(input_error)? {
                LineRead::Eof => return Err(unexpected_eof()),
                LineRead::Interrupted => return Err(AskError::Interrupted),
                LineRead::Line(line) => {
                    // The echoed newline left the cursor one row below the question.
                    component.move_to_previous_line().map_err(input_error)?;

                    if let Some(flag) = parse_yes_no(&line) {
                        tracing::debug!(message = "confirm accepted", answer = %flag);
                        return Ok(Answer::Bool(flag));
                    }
                    if line.is_empty() {
                        tracing::debug!(
                            message = "confirm accepted default",
                            answer = %self.default_value
                        );
                        return Ok(Answer::Bool(self.default_value));
                    }
                    if is_help_line(&line) && self.maybe_help.is_some() {
                        help_shown = true;
                        let frame = ConfirmFrame::question(
                            &self.message,
                            self.maybe_help.as_deref(),
                            true,
                            self.default_value,
                        );
                        component.render_confirm(&frame).map_err(input_error)?;
                        continue;
                    }

                    component
                        .render_error_line(&format!(
                            "{line:?} is not a valid answer, please try again."
                        ))
                        .map_err(input_error)?;
                    // Once the help text is on screen, stop advertising it.
                    let maybe_help = if help_shown {
                        None
                    } else {
                        self.maybe_help.as_deref()
                    };
                    let frame = ConfirmFrame::question(
                        &self.message,
                        maybe_help,
                        false,
                        self.default_value,
                    );
                    component.render_confirm(&frame).map_err(input_error)?;
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

/// Anchored, case insensitive `y` / `yes` / `n` / `no`. Anything else, including
/// surrounding whitespace, is not an answer.
fn parse_yes_no(line: &str) -> Option<bool> {
    match line.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::{TestStringWriter, TestVecLineReader};

    fn pie_confirm(lines: &[&str]) -> Confirm<TestStringWriter, TestVecLineReader> {
        Confirm::with_io(TestStringWriter::new(), TestVecLineReader::from_lines(lines))
            .with_style_sheet(StyleSheet::monochrome())
            .set_message("Like pie?")
    }

    #[test]
    fn yes_and_no_parse_in_any_case() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no("YES"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("NO"), Some(false));
    }

    #[test]
    fn near_misses_do_not_parse() {
        assert_eq!(parse_yes_no("ye"), None);
        assert_eq!(parse_yes_no("yess"), None);
        assert_eq!(parse_yes_no(" y"), None);
        assert_eq!(parse_yes_no("n o"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn typed_yes_beats_a_no_default() {
        let mut confirm = pie_confirm(&["y"]).set_default(false);
        let answer = confirm.prompt().unwrap();
        assert_eq!(answer, Answer::Bool(true));
    }

    #[test]
    fn empty_line_takes_the_default() {
        let mut confirm = pie_confirm(&[""]).set_default(true);
        assert_eq!(confirm.prompt().unwrap(), Answer::Bool(true));

        let mut confirm = pie_confirm(&[""]).set_default(false);
        assert_eq!(confirm.prompt().unwrap(), Answer::Bool(false));
    }

    #[test]
    fn invalid_answer_paints_an_error_and_asks_again() {
        let mut confirm = pie_confirm(&["maybe", "n"]);
        let answer = confirm.prompt().unwrap();
        assert_eq!(answer, Answer::Bool(false));

        let buffer = confirm.write.get_copy_of_buffer();
        assert!(buffer.contains("✘ \"maybe\" is not a valid answer, please try again."));
        // The question was painted twice: once up front, once after the error.
        assert_eq!(buffer.matches("? Like pie? (y/N) ").count(), 2);
    }

    #[test]
    fn help_line_reveals_the_help_text_then_asks_again() {
        let mut confirm = pie_confirm(&["?", "y"]).set_help("Pie is a dessert.");
        let answer = confirm.prompt().unwrap();
        assert_eq!(answer, Answer::Bool(true));

        let buffer = confirm.write.get_copy_of_buffer();
        assert!(buffer.contains("ⓘ Pie is a dessert."));
        assert!(buffer.contains("[? for help]"));
    }

    #[test]
    fn help_hint_is_not_advertised_again_after_help_was_shown() {
        let mut confirm = pie_confirm(&["?", "maybe", "y"]).set_help("Pie facts.");
        confirm.prompt().unwrap();
        let buffer = confirm.write.get_copy_of_buffer();
        // Only the very first question line advertises help.
        assert_eq!(buffer.matches("[? for help]").count(), 1);
    }

    #[test]
    fn question_mark_without_help_is_just_an_invalid_answer() {
        let mut confirm = pie_confirm(&["?", "y"]);
        let answer = confirm.prompt().unwrap();
        assert_eq!(answer, Answer::Bool(true));
        let buffer = confirm.write.get_copy_of_buffer();
        assert!(buffer.contains("✘ \"?\" is not a valid answer"));
    }

    #[test]
    fn closed_input_is_an_io_error() {
        let mut confirm = pie_confirm(&[]);
        let result = confirm.prompt();
        assert!(matches!(result, Err(AskError::Input { .. })));
    }

    #[test]
    fn interrupt_surfaces_as_an_error() {
        let mut confirm = Confirm::with_io(
            TestStringWriter::new(),
            TestVecLineReader::new(vec![LineRead::Interrupted]),
        )
        .set_message("Like pie?");
        assert!(matches!(confirm.prompt(), Err(AskError::Interrupted)));
    }

    #[test]
    fn cleanup_paints_the_final_answer_line() {
        let mut confirm = pie_confirm(&[]);
        confirm.cleanup(&Answer::Bool(true)).unwrap();
        assert_eq!(
            confirm.write.get_copy_of_buffer(),
            "\u{1b}[2K? Like pie? Yes\n"
        );
    }
}
