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

/// Pick any number of choices from a paginated, filterable list.
///
/// Space toggles the focused choice, Enter accepts everything that is checked.
/// Checks are remembered across filter changes, and the answer reports checked
/// choices in the order they were added, not the order they were toggled.
///
/// ```no_run
/// use r3bl_ask::{MultiSelect, Prompt};
///
/// let answer = MultiSelect::new()
///     .set_message("Choose toppings")
///     .add_display_only_choice("cheese", true)
///     .add_display_only_choice("olives", false)
///     .add_display_only_choice("basil", false)
///     .prompt();
/// ```
pub struct MultiSelect<W: Write, R: KeyPressReader> {
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

impl MultiSelect<Stdout, CrosstermKeyPressReader> {
    pub fn new() -> Self { Self::with_io(stdout(), CrosstermKeyPressReader) }
}

impl Default for MultiSelect<Stdout, CrosstermKeyPressReader> {
    fn default() -> Self { Self::new() }
}

impl<W: Write, R: KeyPressReader> MultiSelect<W, R> {
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

    /// Append a choice carrying `value` as its answer payload. `is_default` choices
    /// start out checked.
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

impl<W: Write, R: KeyPressReader> Prompt for MultiSelect<W, R> {
    fn prompt(&mut self) -> AskResult<Answer> {
        self.validate_configuration()?;

        let choices = &self.choices;
        let has_help = self.maybe_help.is_some();
        let mut state = SelectState::for_multi_select(choices, self.vim_mode);
        let mut component = ChoiceListComponent::new(
            &mut self.write,
            self.style_sheet,
            choices,
            &self.message,
            self.maybe_help.as_deref(),
            self.maybe_filter_message.as_deref(),
            self.page_size,
            SelectionMode::Multiple,
        );

        let outcome = enter_event_loop(
            &mut state,
            &mut component,
            |state, key_press| {
                select_keypress_handler(
                    choices,
                    state,
                    SelectionMode::Multiple,
                    has_help,
                    key_press,
                )
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
