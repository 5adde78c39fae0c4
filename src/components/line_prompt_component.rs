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

//! Paints the line oriented prompts: [Confirm](crate::Confirm) and
//! [Input](crate::Input), plus the finished answer line and error line used by every
//! prompt type.
//!
//! The question line is painted without a trailing newline so the user types right
//! after it. After the terminal echoes the typed line, the prompt moves the cursor
//! back up one row, which lets the next paint (help, error, or the finished answer)
//! land on top of the question instead of scrolling away from it.

use std::io::{Result, Write};

use crossterm::{
    cursor::MoveToPreviousLine,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::{
    components::style::{queue_styled_text, styled, StyleSheet},
    constants::{ERROR_ICON, HELP_ICON, HELP_RUNE, QUESTION_ICON},
    ConfirmFrame, InputFrame,
};

pub struct LinePromptComponent<W: Write> {
    pub write: W,
    pub style_sheet: StyleSheet,
}

impl<W: Write> LinePromptComponent<W> {
    pub fn new(write: W, style_sheet: StyleSheet) -> Self {
        Self { write, style_sheet }
    }

    pub fn render_confirm(&mut self, frame: &ConfirmFrame) -> Result<()> {
        self.render_question_line(
            &frame.message,
            frame.maybe_help.as_deref(),
            frame.help_visible,
            &frame.default_display,
            frame.maybe_answer.as_deref(),
        )
    }

    pub fn render_input(&mut self, frame: &InputFrame) -> Result<()> {
        self.render_question_line(
            &frame.message,
            frame.maybe_help.as_deref(),
            frame.help_visible,
            &frame.default_display,
            frame.maybe_answer.as_deref(),
        )
    }

    /// The finished line every prompt paints over its question once an answer is
    /// accepted.
    pub fn render_answer_line(&mut self, message: &str, answer_text: &str) -> Result<()> {
        let sheet = self.style_sheet;
        let writer = &mut self.write;
        queue!(writer, Clear(ClearType::CurrentLine))?;
        queue_styled_text(
            writer,
            &styled(format!("{QUESTION_ICON} "), sheet.question_style),
            sheet.color_enabled,
        )?;
        queue_styled_text(
            writer,
            &styled(format!("{message} "), sheet.message_style),
            sheet.color_enabled,
        )?;
        queue_styled_text(
            writer,
            &styled(answer_text, sheet.answer_style),
            sheet.color_enabled,
        )?;
        queue!(writer, Print("\n"))?;
        writer.flush()
    }

    pub fn render_error_line(&mut self, error_text: &str) -> Result<()> {
        let sheet = self.style_sheet;
        let writer = &mut self.write;
        queue!(writer, Clear(ClearType::CurrentLine))?;
        queue_styled_text(
            writer,
            &styled(format!("{ERROR_ICON} {error_text}"), sheet.error_style),
            sheet.color_enabled,
        )?;
        queue!(writer, Print("\n"))?;
        writer.flush()
    }

    /// Climb back onto the question line after the terminal echoed the user's line.
    pub fn move_to_previous_line(&mut self) -> Result<()> {
        queue!(self.write, MoveToPreviousLine(1))?;
        self.write.flush()
    }

    fn render_question_line(
        &mut self,
        message: &str,
        maybe_help: Option<&str>,
        help_visible: bool,
        default_display: &str,
        maybe_answer: Option<&str>,
    ) -> Result<()> {
        let sheet = self.style_sheet;
        let writer = &mut self.write;

        if help_visible {
            if let Some(help) = maybe_help {
                queue!(writer, Clear(ClearType::CurrentLine))?;
                queue_styled_text(
                    writer,
                    &styled(format!("{HELP_ICON} {help}"), sheet.help_style),
                    sheet.color_enabled,
                )?;
                queue!(writer, Print("\n"))?;
            }
        }

        queue!(writer, Clear(ClearType::CurrentLine))?;
        queue_styled_text(
            writer,
            &styled(format!("{QUESTION_ICON} "), sheet.question_style),
            sheet.color_enabled,
        )?;
        queue_styled_text(
            writer,
            &styled(format!("{message} "), sheet.message_style),
            sheet.color_enabled,
        )?;

        match maybe_answer {
            Some(answer) => {
                queue_styled_text(
                    writer,
                    &styled(answer, sheet.answer_style),
                    sheet.color_enabled,
                )?;
                queue!(writer, Print("\n"))?;
            }
            None => {
                if maybe_help.is_some() && !help_visible {
                    queue_styled_text(
                        writer,
                        &styled(format!("[{HELP_RUNE} for help] "), sheet.hint_style),
                        sheet.color_enabled,
                    )?;
                }
                if !default_display.is_empty() {
                    queue_styled_text(
                        writer,
                        &styled(format!("{default_display} "), sheet.default_value_style),
                        sheet.color_enabled,
                    )?;
                }
            }
        }

        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::TestStringWriter;

    fn monochrome_component() -> LinePromptComponent<TestStringWriter> {
        LinePromptComponent::new(TestStringWriter::new(), StyleSheet::monochrome())
    }

    #[test]
    fn confirm_question_line_shows_hint_and_default() {
        let mut component = monochrome_component();
        let frame = ConfirmFrame::question("Like pie?", Some("pie facts"), false, true);
        component.render_confirm(&frame).unwrap();
        assert_eq!(
            component.write.get_copy_of_buffer(),
            "\u{1b}[2K? Like pie? [? for help] (Y/n) "
        );
    }

    #[test]
    fn confirm_help_render_stacks_help_above_the_question_without_hint() {
        let mut component = monochrome_component();
        let frame = ConfirmFrame::question("Like pie?", Some("pie facts"), true, false);
        component.render_confirm(&frame).unwrap();
        assert_eq!(
            component.write.get_copy_of_buffer(),
            "\u{1b}[2Kⓘ pie facts\n\u{1b}[2K? Like pie? (y/N) "
        );
    }

    #[test]
    fn input_question_line_shows_default_in_parentheses() {
        let mut component = monochrome_component();
        let frame =
            InputFrame::question("Name?", None, false, Some(&serde_json::json!("Bob")));
        component.render_input(&frame).unwrap();
        assert_eq!(
            component.write.get_copy_of_buffer(),
            "\u{1b}[2K? Name? (Bob) "
        );
    }

    #[test]
    fn finished_line_overwrites_the_question() {
        let mut component = monochrome_component();
        component.render_answer_line("Like pie?", "Yes").unwrap();
        assert_eq!(
            component.write.get_copy_of_buffer(),
            "\u{1b}[2K? Like pie? Yes\n"
        );
    }

    #[test]
    fn error_line_is_prefixed_with_the_error_icon() {
        let mut component = monochrome_component();
        component
            .render_error_line("\"maybe\" is not a valid answer, please try again.")
            .unwrap();
        assert_eq!(
            component.write.get_copy_of_buffer(),
            "\u{1b}[2K✘ \"maybe\" is not a valid answer, please try again.\n"
        );
    }
}
