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

//! The keystroke state machine shared by [Select](crate::Select) and
//! [MultiSelect](crate::MultiSelect).
//!
//! [SelectState] is created when a prompt starts and dropped when it returns, so
//! nothing leaks between prompts. [select_keypress_handler] applies one [KeyPress] to
//! the state and tells the event loop whether to keep going, repaint, or exit with an
//! [Answer]. The handler is pure with respect to the terminal, which is what makes
//! the whole machine testable with scripted keystrokes.

use std::collections::HashMap;

use crate::{constants::HELP_RUNE, Answer, Choice, ChoiceSet, EventLoopResult, KeyPress};

/// Which acceptance rules [select_keypress_handler] applies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectionMode {
    /// Enter accepts the focused choice (or the configured default when the user
    /// never navigated).
    Single,
    /// Space toggles the focused choice, Enter accepts every checked choice.
    Multiple,
}

/// Mutable per session state for one select or multi select prompt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectState {
    /// Index into the *filtered* view of the choices.
    pub focused_index: usize,
    pub filter_text: String,
    /// Multi select only. Keyed by display text, which is why displays must be
    /// unique.
    pub checked_by_display: HashMap<String, bool>,
    /// When on, `j` and `k` also navigate. Esc toggles this.
    pub vim_mode: bool,
    pub help_visible: bool,
    /// Single select only: accept the configured default instead of the focused row.
    /// Starts on, and is cleared only by navigation keys. Filter edits leave it set,
    /// so typing a filter and pressing Enter without ever navigating still accepts
    /// the configured default.
    pub use_default: bool,
}

impl SelectState {
    pub fn for_single_select(choices: &ChoiceSet, vim_mode: bool) -> Self {
        Self {
            focused_index: choices.last_default_index().unwrap_or(0),
            vim_mode,
            use_default: true,
            ..Self::default()
        }
    }

    pub fn for_multi_select(choices: &ChoiceSet, vim_mode: bool) -> Self {
        let mut checked_by_display = HashMap::new();
        for index in choices.default_indices() {
            if let Some(choice) = choices.get(*index) {
                checked_by_display.insert(choice.display.clone(), true);
            }
        }
        Self {
            checked_by_display,
            vim_mode,
            ..Self::default()
        }
    }

    /// Move focus up one row, wrapping from the first row to the last. No-op on an
    /// empty (filtered out) list.
    pub fn focus_previous(&mut self, filtered_len: usize) {
        self.use_default = false;
        if filtered_len == 0 {
            return;
        }
        if self.focused_index == 0 {
            self.focused_index = filtered_len - 1;
        } else {
            self.focused_index -= 1;
        }
    }

    /// Move focus down one row, wrapping from the last row to the first. No-op on an
    /// empty (filtered out) list.
    pub fn focus_next(&mut self, filtered_len: usize) {
        self.use_default = false;
        if filtered_len == 0 {
            return;
        }
        if self.focused_index >= filtered_len - 1 {
            self.focused_index = 0;
        } else {
            self.focused_index += 1;
        }
    }

    pub fn append_to_filter(&mut self, character: char) {
        self.filter_text.push(character);
    }

    pub fn drop_last_filter_char(&mut self) {
        self.filter_text.pop();
    }

    pub fn clear_filter(&mut self) {
        self.filter_text.clear();
    }

    /// After the filter text changes, pull the focus back onto the last row if the
    /// shrunken list left it past the end. An empty list leaves the focus alone.
    pub fn clamp_focus_after_filter_change(&mut self, filtered_len: usize) {
        if filtered_len > 0 && filtered_len <= self.focused_index {
            self.focused_index = filtered_len - 1;
        }
    }

    pub fn is_checked(&self, display: &str) -> bool {
        self.checked_by_display.get(display).copied().unwrap_or(false)
    }

    pub fn toggle_checked(&mut self, display: &str) {
        let entry = self
            .checked_by_display
            .entry(display.to_string())
            .or_insert(false);
        *entry = !*entry;
    }

    /// What the header row shows for the current filter: nothing, or the filter text
    /// with a leading space.
    pub fn filter_display_text(&self) -> String {
        if self.filter_text.is_empty() {
            String::new()
        } else {
            format!(" {}", self.filter_text)
        }
    }
}

/// Apply one keystroke to the state. Terminal keys (Enter, Ctrl+D, Ctrl+C) exit the
/// loop, everything else mutates the state and requests a repaint. Unbound keys do
/// neither.
pub fn select_keypress_handler(
    choices: &ChoiceSet,
    state: &mut SelectState,
    selection_mode: SelectionMode,
    has_help: bool,
    key_press: KeyPress,
) -> EventLoopResult {
    let filtered_len = choices.filtered(&state.filter_text).len();
    let old_filter_text = state.filter_text.clone();

    match key_press {
        KeyPress::Enter | KeyPress::EndOfTransmission => {
            let answer = match selection_mode {
                SelectionMode::Single => accept_single_select(choices, state),
                SelectionMode::Multiple => accept_multi_select(choices, state),
            };
            tracing::debug!(message = "select accepted", answer = ?answer);
            return EventLoopResult::ExitWithResult(answer);
        }
        KeyPress::Interrupt => return EventLoopResult::ExitWithInterrupt,
        KeyPress::Up => state.focus_previous(filtered_len),
        KeyPress::Printable('k') if state.vim_mode => state.focus_previous(filtered_len),
        KeyPress::Down => state.focus_next(filtered_len),
        KeyPress::Printable('j') if state.vim_mode => state.focus_next(filtered_len),
        KeyPress::Space if selection_mode == SelectionMode::Multiple => {
            let filtered = choices.filtered(&state.filter_text);
            if let Some(choice) = filtered.get(state.focused_index).copied() {
                state.toggle_checked(&choice.display);
            }
        }
        KeyPress::Printable(HELP_RUNE) if has_help => {
            state.help_visible = true;
        }
        KeyPress::Esc => state.vim_mode = !state.vim_mode,
        KeyPress::DeleteWord | KeyPress::DeleteLine => state.clear_filter(),
        KeyPress::Backspace | KeyPress::Delete => state.drop_last_filter_char(),
        KeyPress::Space => state.append_to_filter(' '),
        KeyPress::Printable(character) => state.append_to_filter(character),
        KeyPress::Noop => return EventLoopResult::Continue,
    }

    if state.filter_text != old_filter_text {
        let filtered_len = choices.filtered(&state.filter_text).len();
        state.clamp_focus_after_filter_change(filtered_len);
    }

    EventLoopResult::ContinueAndRerender
}

/// Single select acceptance. The default wins when the user never navigated, or when
/// the focus fell off the end of the filtered list; otherwise the focused row wins.
/// With no default and nothing visible there is no answer.
fn accept_single_select(choices: &ChoiceSet, state: &SelectState) -> Answer {
    let filtered = choices.filtered(&state.filter_text);
    if state.use_default || state.focused_index >= filtered.len() {
        if let Some(default_index) = choices.last_default_index() {
            if let Some(choice) = choices.get(default_index) {
                return Answer::Choice(choice.clone());
            }
        }
        return match filtered.first().copied().map(Choice::clone) {
            Some(choice) => Answer::Choice(choice),
            None => Answer::None,
        };
    }
    Answer::Choice(filtered[state.focused_index].clone())
}

/// Multi select acceptance: every checked choice, in the order the choices were
/// added, regardless of the current filter.
fn accept_multi_select(choices: &ChoiceSet, state: &SelectState) -> Answer {
    let checked: Vec<Choice> = choices
        .items()
        .iter()
        .filter(|choice| state.is_checked(&choice.display))
        .cloned()
        .collect();
    Answer::Choices(checked)
}
