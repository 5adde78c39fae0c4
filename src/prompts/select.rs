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
    components::{ChoiceListComponent, LinePromptComponent, StyleSheet},
    enter_event_loop,
    paginate::DEFAULT_PAGE_SIZE,
    prompts::{input_error, Prompt},
    select_keypress_handler, Answer, AskError, AskResult, Choice, ChoiceSet,
    CrosstermKeyPressReader, EventLoopResult, KeyPressReader, SelectState, SelectionMode,
};

/// Pick exactly one choice from a paginated, filterable list.
///
/// Runs in raw mode. Arrow keys (or `j` / `k` after `Esc`) move focus, printable
/// keys narrow the list, `Enter` accepts the focused choice. While the filter is
/// untouched by navigation, `Enter` accepts the configured default instead.
///
/// ```no_run
/// use r3bl_ask::{Prompt, Select};
///
/// let answer = Select::new()
///     .set_message("Choose a color")
///     .add_display_only_choice("red", false)
///     .add_display_only_choice("green", true)
///     .add_display_only_choice("blue", false)
///     .prompt();
/// ```
pub struct Select<W: Write, R: KeyPressReader> {
    write: W,
    key_press_reader: R,
    message: String,
    maybe_help: Option<String>,
    maybe_filter_message: Option<String>,
    choices: ChoiceSet,
    page_size: usize,
    vim_mode: bool,
    style_sheet: StyleSheet,
}

impl Select<Stdout, CrosstermKeyPressReader> {
    pub fn new() -> Self { Self::with_io(stdout(), CrosstermKeyPressReader) }
}

impl Default for Select<Stdout, CrosstermKeyPressReader> {
    fn default() -> Self { Self::new() }
}

impl<W: Write, R: KeyPressReader> Select<W, R> {
    pub fn with_io(write: W, key_press_reader: R) -> Self {
        Self {
            write,
            key_press_reader,
            message: String::new(),
            maybe_help: None,
            maybe_filter_message: None,
            choices: ChoiceSet::new(),
            page_size: DEFAULT_PAGE_SIZE,
            vim_mode: false,
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

    /// Replace the stock `[Use arrows to move, type to filter]` hint with custom
    /// text.
    pub fn set_filter_message(mut self, filter_message: impl Into<String>) -> Self {
        self.maybe_filter_message = Some(filter_message.into());
        self
    }

    pub fn set_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn set_vim_mode(mut self, vim_mode: bool) -> Self {
        self.vim_mode = vim_mode;
        self
    }

    pub fn with_style_sheet(mut self, style_sheet: StyleSheet) -> Self {
        self.style_sheet = style_sheet;
        self
    }

    /// Append a choice carrying `value` as its answer payload. At most one choice
    /// should be a default; when several are marked, the last one wins.
    pub fn add_choice(
        mut self,
        display: impl Into<String>,
        value: Value,
        is_default: bool,
    ) -> Self {
        self.choices.push(Choice::new(display, value), is_default);
        self
    }

    /// Append a choice whose answer payload is its own display text.
    pub fn add_display_only_choice(mut self, display: impl Into<String>, is_default: bool) -> Self {
        self.choices.push(Choice::display_only(display), is_default);
        self
    }

    fn validate_configuration(&self) -> AskResult<()> {
        if self.choices.is_empty() {
            return Err(AskError::Configuration {
                message: "please provide choices to select from".to_string(),
            });
        }
        if let Some(display) = self.choices.find_duplicate_display() {
            return Err(AskError::Configuration {
                message: format!("duplicate choice display text: {display:?}"),
            });
        }
        Ok(())
    }
}

impl<W: Write, R: KeyPressReader> Prompt for Select<W, R> {
    fn prompt(&mut self) -> AskResult<Answer> {
        self.validate_configuration()?;

        let choices = &self.choices;
        let has_help = self.maybe_help.is_some();
        let mut state = SelectState::for_single_select(choices, self.vim_mode);
        let mut component = ChoiceListComponent::new(
            &mut self.write,
            self.style_sheet,
            choices,
            &self.message,
            self.maybe_help.as_deref(),
            self.maybe_filter_message.as_deref(),
            self.page_size,
            SelectionMode::Single,
        );

        let outcome = enter_event_loop(
            &mut state,
            &mut component,
            |state, key_press| {
                select_keypress_handler(choices, state, SelectionMode::Single, has_help, key_press)
            },
            &mut self.key_press_reader,
        );

        match outcome {
            Ok(EventLoopResult::ExitWithResult(answer)) => Ok(answer),
            Ok(EventLoopResult::ExitWithInterrupt) => Err(AskError::Interrupted),
            Ok(_) => Ok(Answer::None),
            Err(source) => Err(AskError::Input { source }),
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
    use crate::{
        test_fixtures::{TestStringWriter, TestVecKeyPressReader},
        KeyPress,
    };

    fn color_select(
        keys: Vec<KeyPress>,
    ) -> Select<TestStringWriter, TestVecKeyPressReader> {
        Select::with_io(TestStringWriter::new(), TestVecKeyPressReader::new(keys))
            .with_style_sheet(StyleSheet::monochrome())
            .set_message("Choose a color")
            .add_display_only_choice("red", false)
            .add_display_only_choice("green", false)
            .add_display_only_choice("blue", false)
    }

    #[test]
    fn enter_accepts_the_first_choice_when_no_default_is_set() {
        let mut select = color_select(vec![KeyPress::Enter]);
        let answer = select.prompt().unwrap();
        assert_eq!(answer, Answer::Choice(Choice::display_only("red")));
    }

    #[test]
    fn enter_accepts_the_default_choice_even_after_filtering() {
        let mut select = Select::with_io(
            TestStringWriter::new(),
            TestVecKeyPressReader::new(vec![KeyPress::Printable('b'), KeyPress::Enter]),
        )
        .set_message("Choose a color")
        .add_display_only_choice("red", false)
        .add_display_only_choice("green", true)
        .add_display_only_choice("blue", false);
        let answer = select.prompt().unwrap();
        assert_eq!(answer, Answer::Choice(Choice::display_only("green")));
    }

    #[test]
    fn navigation_moves_focus_and_accepts_the_focused_choice() {
        let mut select = color_select(vec![KeyPress::Down, KeyPress::Down, KeyPress::Enter]);
        let answer = select.prompt().unwrap();
        assert_eq!(answer, Answer::Choice(Choice::display_only("blue")));
    }

    #[test]
    fn navigation_clears_the_default_so_the_focused_choice_wins() {
        let mut select = Select::with_io(
            TestStringWriter::new(),
            TestVecKeyPressReader::new(vec![KeyPress::Down, KeyPress::Up, KeyPress::Enter]),
        )
        .set_message("Choose a color")
        .add_display_only_choice("red", false)
        .add_display_only_choice("green", true)
        .add_display_only_choice("blue", false);
        let answer = select.prompt().unwrap();
        assert_eq!(answer, Answer::Choice(Choice::display_only("red")));
    }

    #[test]
    fn filtering_then_enter_accepts_the_first_filtered_choice() {
        let mut select = color_select(vec![
            KeyPress::Printable('b'),
            KeyPress::Printable('l'),
            KeyPress::Enter,
        ]);
        let answer = select.prompt().unwrap();
        assert_eq!(answer, Answer::Choice(Choice::display_only("blue")));
    }

    #[test]
    fn vim_keys_navigate_when_vim_mode_is_on() {
        let mut select = color_select(vec![
            KeyPress::Printable('j'),
            KeyPress::Printable('j'),
            KeyPress::Printable('k'),
            KeyPress::Enter,
        ])
        .set_vim_mode(true);
        let answer = select.prompt().unwrap();
        assert_eq!(answer, Answer::Choice(Choice::display_only("green")));
    }

    #[test]
    fn choice_values_ride_along_with_the_answer() {
        let mut select = Select::with_io(
            TestStringWriter::new(),
            TestVecKeyPressReader::new(vec![KeyPress::Down, KeyPress::Enter]),
        )
        .set_message("Pick an environment")
        .add_choice("staging", json!({"replicas": 2}), false)
        .add_choice("production", json!({"replicas": 12}), false);
        let answer = select.prompt().unwrap();
        assert_eq!(
            answer,
            Answer::Choice(Choice::new("production", json!({"replicas": 12})))
        );
    }

    #[test]
    fn interrupt_surfaces_as_an_error_and_still_releases_the_terminal() {
        let mut select = color_select(vec![KeyPress::Down, KeyPress::Interrupt]);
        let result = select.prompt();
        assert!(matches!(result, Err(AskError::Interrupted)));
        assert_eq!(select.key_press_reader.raw_mode_enter_count, 1);
        assert_eq!(select.key_press_reader.raw_mode_exit_count, 1);
    }

    #[test]
    fn raw_mode_is_scoped_to_the_prompt() {
        let mut select = color_select(vec![KeyPress::Enter]);
        select.prompt().unwrap();
        assert_eq!(select.key_press_reader.raw_mode_enter_count, 1);
        assert_eq!(select.key_press_reader.raw_mode_exit_count, 1);
        let buffer = select.write.get_copy_of_buffer();
        assert!(buffer.contains("\u{1b}[?25l"), "cursor hidden during the prompt");
        assert!(buffer.ends_with("\u{1b}[?25h"), "cursor shown after the prompt");
    }

    #[test]
    fn empty_choice_list_is_a_configuration_error() {
        let mut select = Select::with_io(
            TestStringWriter::new(),
            TestVecKeyPressReader::new(vec![KeyPress::Enter]),
        )
        .set_message("Choose a color");
        let result = select.prompt();
        assert!(matches!(result, Err(AskError::Configuration { .. })));
        assert_eq!(select.key_press_reader.raw_mode_enter_count, 0);
    }

    #[test]
    fn duplicate_display_text_is_a_configuration_error() {
        let mut select = Select::with_io(
            TestStringWriter::new(),
            TestVecKeyPressReader::new(vec![KeyPress::Enter]),
        )
        .set_message("Choose a color")
        .add_display_only_choice("red", false)
        .add_display_only_choice("red", false);
        let result = select.prompt();
        assert!(matches!(result, Err(AskError::Configuration { .. })));
    }

    #[test]
    fn help_keypress_reveals_the_help_line() {
        let mut select = color_select(vec![KeyPress::Printable('?'), KeyPress::Enter])
            .set_help("Colors are display only.");
        select.prompt().unwrap();
        let buffer = select.write.get_copy_of_buffer();
        assert!(buffer.contains("ⓘ Colors are display only."));
    }

    #[test]
    fn custom_filter_message_shows_in_the_header() {
        let mut select = color_select(vec![KeyPress::Enter])
            .set_filter_message("[pick with arrows]");
        select.prompt().unwrap();
        let buffer = select.write.get_copy_of_buffer();
        assert!(buffer.contains("? Choose a color  [pick with arrows]"));
        assert!(!buffer.contains("[Use arrows to move"));
    }

    #[test]
    fn without_help_the_question_mark_filters_instead() {
        let mut select = Select::with_io(
            TestStringWriter::new(),
            TestVecKeyPressReader::new(vec![KeyPress::Printable('?'), KeyPress::Enter]),
        )
        .set_message("Choose an operator")
        .add_display_only_choice("? wildcard", false)
        .add_display_only_choice("* glob", false);
        let answer = select.prompt().unwrap();
        assert_eq!(answer, Answer::Choice(Choice::display_only("? wildcard")));
    }
}
