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

//! Plain data descriptions of what each prompt paints.
//!
//! A frame is everything a repaint needs, already computed: which rows of the
//! filtered window are visible, which one has focus, which are checked, what the
//! header says. The components in [crate::components] turn frames into styled bytes;
//! nothing in this module touches the terminal, so frame assembly is tested without
//! capturing any output. Building a frame never mutates prompt state, which is what
//! makes repainting idempotent.

use crate::{
    constants::{FILTER_AND_HELP_HINT, FILTER_HINT},
    paginate, value_display_text, ChoiceSet, SelectState,
};

/// The hint shown after the message on list prompts. The "? for more help" suffix
/// appears only while there is help text that is not currently on screen.
pub fn filter_hint(has_help: bool, help_visible: bool) -> &'static str {
    if has_help && !help_visible {
        FILTER_AND_HELP_HINT
    } else {
        FILTER_HINT
    }
}

/// A custom filter message replaces the stock hint entirely, including the help
/// suffix. Callers who set one own the whole bracketed text.
fn hint_text(
    maybe_filter_message: Option<&str>,
    has_help: bool,
    help_visible: bool,
) -> String {
    match maybe_filter_message {
        Some(message) => message.to_string(),
        None => filter_hint(has_help, help_visible).to_string(),
    }
}

/// One visible row of a [Select](crate::Select) prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectFrameRow {
    pub label: String,
    pub is_focused: bool,
}

/// A repaint of a [Select](crate::Select) prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectFrame {
    pub message: String,
    pub maybe_help: Option<String>,
    pub help_visible: bool,
    /// Empty, or the filter text with a leading space.
    pub filter_display: String,
    /// The bracketed hint after the message: [filter_hint], or the prompt's custom
    /// filter message verbatim.
    pub hint: String,
    pub rows: Vec<SelectFrameRow>,
}

impl SelectFrame {
    pub fn live(
        message: &str,
        maybe_help: Option<&str>,
        maybe_filter_message: Option<&str>,
        choices: &ChoiceSet,
        page_size: usize,
        state: &SelectState,
    ) -> Self {
        let filtered = choices.filtered(&state.filter_text);
        let page = paginate(&filtered, page_size, state.focused_index);
        let rows = page
            .visible
            .iter()
            .enumerate()
            .map(|(row_index, choice)| SelectFrameRow {
                label: choice.display.clone(),
                is_focused: row_index == page.focus_local,
            })
            .collect();
        Self {
            message: message.to_string(),
            maybe_help: maybe_help.map(str::to_string),
            help_visible: state.help_visible,
            filter_display: state.filter_display_text(),
            hint: hint_text(maybe_filter_message, maybe_help.is_some(), state.help_visible),
            rows,
        }
    }
}

/// One visible row of a [MultiSelect](crate::MultiSelect) prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectFrameRow {
    pub label: String,
    pub is_focused: bool,
    pub is_checked: bool,
}

/// A repaint of a [MultiSelect](crate::MultiSelect) prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectFrame {
    pub message: String,
    pub maybe_help: Option<String>,
    pub help_visible: bool,
    pub filter_display: String,
    pub hint: String,
    pub rows: Vec<MultiSelectFrameRow>,
}

impl MultiSelectFrame {
    pub fn live(
        message: &str,
        maybe_help: Option<&str>,
        maybe_filter_message: Option<&str>,
        choices: &ChoiceSet,
        page_size: usize,
        state: &SelectState,
    ) -> Self {
        let filtered = choices.filtered(&state.filter_text);
        let page = paginate(&filtered, page_size, state.focused_index);
        let rows = page
            .visible
            .iter()
            .enumerate()
            .map(|(row_index, choice)| MultiSelectFrameRow {
                label: choice.display.clone(),
                is_focused: row_index == page.focus_local,
                is_checked: state.is_checked(&choice.display),
            })
            .collect();
        Self {
            message: message.to_string(),
            maybe_help: maybe_help.map(str::to_string),
            help_visible: state.help_visible,
            filter_display: state.filter_display_text(),
            hint: hint_text(maybe_filter_message, maybe_help.is_some(), state.help_visible),
            rows,
        }
    }
}

/// A repaint of a [Confirm](crate::Confirm) prompt: the question line while waiting
/// for input, or the finished line once `maybe_answer` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmFrame {
    pub message: String,
    pub maybe_help: Option<String>,
    pub help_visible: bool,
    /// `(Y/n)` or `(y/N)`, capitalization showing which answer Enter picks.
    pub default_display: String,
    pub maybe_answer: Option<String>,
}

impl ConfirmFrame {
    pub fn question(
        message: &str,
        maybe_help: Option<&str>,
        help_visible: bool,
        default_value: bool,
    ) -> Self {
        let default_display = if default_value { "(Y/n)" } else { "(y/N)" };
        Self {
            message: message.to_string(),
            maybe_help: maybe_help.map(str::to_string),
            help_visible,
            default_display: default_display.to_string(),
            maybe_answer: None,
        }
    }

    pub fn finished(message: &str, answer_text: &str) -> Self {
        Self {
            message: message.to_string(),
            maybe_help: None,
            help_visible: false,
            default_display: String::new(),
            maybe_answer: Some(answer_text.to_string()),
        }
    }
}

/// A repaint of an [Input](crate::Input) prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFrame {
    pub message: String,
    pub maybe_help: Option<String>,
    pub help_visible: bool,
    /// The default value in parentheses, or empty when there is none.
    pub default_display: String,
    pub maybe_answer: Option<String>,
}

impl InputFrame {
    pub fn question(
        message: &str,
        maybe_help: Option<&str>,
        help_visible: bool,
        maybe_default: Option<&serde_json::Value>,
    ) -> Self {
        let default_display = maybe_default
            .map(|value| format!("({})", value_display_text(value)))
            .unwrap_or_default();
        Self {
            message: message.to_string(),
            maybe_help: maybe_help.map(str::to_string),
            help_visible,
            default_display,
            maybe_answer: None,
        }
    }

    pub fn finished(message: &str, answer_text: &str) -> Self {
        Self {
            message: message.to_string(),
            maybe_help: None,
            help_visible: false,
            default_display: String::new(),
            maybe_answer: Some(answer_text.to_string()),
        }
    }
}
