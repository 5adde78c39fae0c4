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

//! The [FunctionComponent] that paints [Select](crate::Select) and
//! [MultiSelect](crate::MultiSelect) frames.
//!
//! Every repaint rebuilds the full frame from the current state and paints it over
//! the previous one, clearing each row first. When the new frame is shorter than the
//! previous one (the filter shrank the list, for example) the leftover rows are
//! cleared too, so nothing stale survives a repaint. The cursor is parked back on
//! the first row afterwards, keeping the repaint idempotent: the same state always
//! produces the same bytes.

use std::io::{Result, Write};

use crossterm::{
    cursor::{MoveToColumn, MoveToNextLine, MoveToPreviousLine},
    queue,
    terminal::{Clear, ClearType},
};

use crate::{
    components::style::{queue_styled_text, styled, StyleSheet, StyledText},
    constants::{CHECKED_GLYPH, FOCUSED_GLYPH, HELP_ICON, QUESTION_ICON, UNCHECKED_GLYPH},
    get_terminal_width, ChoiceSet, FunctionComponent, MultiSelectFrame, SelectFrame,
    SelectState, SelectionMode, DEFAULT_PAGE_SIZE,
};

pub struct ChoiceListComponent<'a, W: Write> {
    pub write: W,
    pub style_sheet: StyleSheet,
    pub choices: &'a ChoiceSet,
    pub message: &'a str,
    pub maybe_help: Option<&'a str>,
    pub maybe_filter_message: Option<&'a str>,
    pub page_size: usize,
    pub selection_mode: SelectionMode,
    pub max_display_width: usize,
    last_rendered_height: usize,
}

impl<'a, W: Write> ChoiceListComponent<'a, W> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write: W,
        style_sheet: StyleSheet,
        choices: &'a ChoiceSet,
        message: &'a str,
        maybe_help: Option<&'a str>,
        maybe_filter_message: Option<&'a str>,
        page_size: usize,
        selection_mode: SelectionMode,
    ) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self {
            write,
            style_sheet,
            choices,
            message,
            maybe_help,
            maybe_filter_message,
            page_size,
            selection_mode,
            max_display_width: get_terminal_width(),
            last_rendered_height: 0,
        }
    }
}

impl<W: Write> FunctionComponent<W, SelectState> for ChoiceListComponent<'_, W> {
    fn get_write(&mut self) -> &mut W {
        &mut self.write
    }

    /// Help row (when configured) + header row + one row per visible choice. This is
    /// the tallest the frame can get; a live frame can be shorter when filtering
    /// shrinks the list.
    fn calculate_viewport_height(&self, _state: &SelectState) -> usize {
        let help_rows = usize::from(self.maybe_help.is_some());
        let choice_rows = self.page_size.min(self.choices.len());
        help_rows + 1 + choice_rows
    }

    fn render(&mut self, state: &SelectState) -> Result<()> {
        let lines = match self.selection_mode {
            SelectionMode::Single => {
                let frame = SelectFrame::live(
                    self.message,
                    self.maybe_help,
                    self.maybe_filter_message,
                    self.choices,
                    self.page_size,
                    state,
                );
                single_select_lines(&frame, &self.style_sheet, self.max_display_width)
            }
            SelectionMode::Multiple => {
                let frame = MultiSelectFrame::live(
                    self.message,
                    self.maybe_help,
                    self.maybe_filter_message,
                    self.choices,
                    self.page_size,
                    state,
                );
                multi_select_lines(&frame, &self.style_sheet, self.max_display_width)
            }
        };

        let new_height = lines.len();
        let stale_row_count = self.last_rendered_height.saturating_sub(new_height);
        let color_enabled = self.style_sheet.color_enabled;
        let writer = &mut self.write;

        queue!(writer, MoveToColumn(0))?;
        for line in &lines {
            queue!(writer, Clear(ClearType::CurrentLine))?;
            for styled_text in line {
                queue_styled_text(writer, styled_text, color_enabled)?;
            }
            queue!(writer, MoveToNextLine(1))?;
        }
        // Rows painted by the previous (taller) frame.
        for _ in 0..stale_row_count {
            queue!(writer, Clear(ClearType::CurrentLine), MoveToNextLine(1))?;
        }
        queue!(
            writer,
            MoveToPreviousLine((new_height + stale_row_count) as u16)
        )?;
        writer.flush()?;

        self.last_rendered_height = new_height;
        Ok(())
    }
}

fn header_line(
    message: &str,
    filter_display: &str,
    hint: &str,
    sheet: &StyleSheet,
) -> Vec<StyledText> {
    vec![
        styled(format!("{QUESTION_ICON} "), sheet.question_style),
        styled(message.to_string(), sheet.message_style),
        styled(filter_display.to_string(), sheet.message_style),
        styled(format!("  {hint}"), sheet.hint_style),
    ]
}

fn help_line(help: &str, sheet: &StyleSheet) -> Vec<StyledText> {
    vec![styled(format!("{HELP_ICON} {help}"), sheet.help_style)]
}

fn single_select_lines(
    frame: &SelectFrame,
    sheet: &StyleSheet,
    max_width: usize,
) -> Vec<Vec<StyledText>> {
    let mut lines = vec![];
    if frame.help_visible {
        if let Some(help) = &frame.maybe_help {
            lines.push(help_line(help, sheet));
        }
    }
    lines.push(header_line(
        &frame.message,
        &frame.filter_display,
        &frame.hint,
        sheet,
    ));
    for row in &frame.rows {
        let prefix = if row.is_focused { FOCUSED_GLYPH } else { " " };
        let style = if row.is_focused {
            sheet.focused_style
        } else {
            sheet.normal_style
        };
        let text = clip_string_to_width_with_ellipsis(
            &format!("{prefix} {}", row.label),
            max_width,
        );
        lines.push(vec![styled(text, style)]);
    }
    lines
}

fn multi_select_lines(
    frame: &MultiSelectFrame,
    sheet: &StyleSheet,
    max_width: usize,
) -> Vec<Vec<StyledText>> {
    let mut lines = vec![];
    if frame.help_visible {
        if let Some(help) = &frame.maybe_help {
            lines.push(help_line(help, sheet));
        }
    }
    lines.push(header_line(
        &frame.message,
        &frame.filter_display,
        &frame.hint,
        sheet,
    ));
    for row in &frame.rows {
        let focus_glyph = if row.is_focused { FOCUSED_GLYPH } else { " " };
        let focus_style = if row.is_focused {
            sheet.focused_style
        } else {
            sheet.normal_style
        };
        let (check_glyph, check_style) = if row.is_checked {
            (CHECKED_GLYPH, sheet.checked_style)
        } else {
            (UNCHECKED_GLYPH, sheet.unchecked_style)
        };
        // 4 columns of glyph prefix before the label.
        let label =
            clip_string_to_width_with_ellipsis(&row.label, max_width.saturating_sub(4));
        lines.push(vec![
            styled(format!("{focus_glyph} "), focus_style),
            styled(format!("{check_glyph} "), check_style),
            styled(label, focus_style),
        ]);
    }
    lines
}

/// Clip to `max_width` display columns, replacing the last kept character with `…`
/// when anything was cut.
pub fn clip_string_to_width_with_ellipsis(line: &str, max_width: usize) -> String {
    if line.chars().count() <= max_width {
        return line.to_string();
    }
    let clipped: String = line.chars().take(max_width.saturating_sub(1)).collect();
    format!("{clipped}…")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{test_fixtures::TestStringWriter, Choice};

    fn two_fruits() -> ChoiceSet {
        let mut choices = ChoiceSet::new();
        choices.push(Choice::display_only("apple"), false);
        choices.push(Choice::display_only("banana"), false);
        choices
    }

    #[test]
    fn single_select_render_produces_exactly_the_expected_bytes() {
        let choices = two_fruits();
        let state = SelectState::for_single_select(&choices, false);
        let mut component = ChoiceListComponent::new(
            TestStringWriter::new(),
            StyleSheet::monochrome(),
            &choices,
            "Pick a fruit",
            None,
            None,
            7,
            SelectionMode::Single,
        );

        component.render(&state).unwrap();

        let expected = "\u{1b}[1G\
            \u{1b}[2K? Pick a fruit  [Use arrows to move, type to filter]\u{1b}[1E\
            \u{1b}[2K❯ apple\u{1b}[1E\
            \u{1b}[2K  banana\u{1b}[1E\
            \u{1b}[3F";
        assert_eq!(component.write.get_copy_of_buffer(), expected);
    }

    #[test]
    fn repainting_the_same_state_produces_identical_bytes() {
        let choices = two_fruits();
        let state = SelectState::for_single_select(&choices, false);
        let mut component = ChoiceListComponent::new(
            TestStringWriter::new(),
            StyleSheet::monochrome(),
            &choices,
            "Pick a fruit",
            None,
            None,
            7,
            SelectionMode::Single,
        );

        component.render(&state).unwrap();
        let first = component.write.get_copy_of_buffer();
        component.render(&state).unwrap();
        let both = component.write.get_copy_of_buffer();

        assert_eq!(both.len(), first.len() * 2);
        assert_eq!(&both[first.len()..], first.as_str());
    }

    #[test]
    fn shrinking_frame_clears_the_leftover_rows() {
        let choices = two_fruits();
        let mut state = SelectState::for_single_select(&choices, false);
        let mut component = ChoiceListComponent::new(
            TestStringWriter::new(),
            StyleSheet::monochrome(),
            &choices,
            "Pick a fruit",
            None,
            None,
            7,
            SelectionMode::Single,
        );

        component.render(&state).unwrap();
        let first_len = component.write.get_copy_of_buffer().len();

        // "ban" matches only "banana": 2 rows now instead of 3, so one stale row
        // must be cleared and the cursor must climb 3 rows, not 2.
        state.filter_text = "ban".to_string();
        component.render(&state).unwrap();

        let buffer = component.write.get_copy_of_buffer();
        let second = &buffer[first_len..];
        let expected = "\u{1b}[1G\
            \u{1b}[2K? Pick a fruit ban  [Use arrows to move, type to filter]\u{1b}[1E\
            \u{1b}[2K❯ banana\u{1b}[1E\
            \u{1b}[2K\u{1b}[1E\
            \u{1b}[3F";
        assert_eq!(second, expected);
    }

    #[test]
    fn multi_select_render_shows_check_state_and_focus() {
        let choices = two_fruits();
        let mut state = SelectState::for_multi_select(&choices, false);
        state.toggle_checked("apple");
        let mut component = ChoiceListComponent::new(
            TestStringWriter::new(),
            StyleSheet::monochrome(),
            &choices,
            "Pick fruits",
            None,
            None,
            7,
            SelectionMode::Multiple,
        );

        component.render(&state).unwrap();

        let buffer = component.write.get_copy_of_buffer();
        assert!(buffer.contains("? Pick fruits  [Use arrows to move, type to filter]"));
        assert!(buffer.contains("❯ ◉ apple"));
        assert!(buffer.contains("  ◯ banana"));
    }

    #[test]
    fn help_row_appears_above_the_header_when_visible() {
        let choices = two_fruits();
        let mut state = SelectState::for_single_select(&choices, false);
        let mut component = ChoiceListComponent::new(
            TestStringWriter::new(),
            StyleSheet::monochrome(),
            &choices,
            "Pick a fruit",
            Some("press ? no more"),
            None,
            7,
            SelectionMode::Single,
        );

        component.render(&state).unwrap();
        let before_help = component.write.get_copy_of_buffer();
        assert!(before_help.contains("? for more help]"));
        assert!(!before_help.contains("ⓘ"));

        state.help_visible = true;
        component.render(&state).unwrap();
        let buffer = component.write.get_copy_of_buffer();
        let after_help = &buffer[before_help.len()..];
        assert!(after_help.contains("ⓘ press ? no more"));
        assert!(after_help.contains("[Use arrows to move, type to filter]\u{1b}"));
    }

    #[test]
    fn viewport_height_counts_help_header_and_visible_rows() {
        let choices = two_fruits();
        let state = SelectState::for_single_select(&choices, false);

        let component = ChoiceListComponent::new(
            TestStringWriter::new(),
            StyleSheet::monochrome(),
            &choices,
            "Pick",
            None,
            None,
            7,
            SelectionMode::Single,
        );
        assert_eq!(component.calculate_viewport_height(&state), 3);

        let component = ChoiceListComponent::new(
            TestStringWriter::new(),
            StyleSheet::monochrome(),
            &choices,
            "Pick",
            Some("help"),
            None,
            1,
            SelectionMode::Single,
        );
        assert_eq!(component.calculate_viewport_height(&state), 3);
    }

    #[test]
    fn clipping_replaces_the_tail_with_an_ellipsis() {
        assert_eq!(clip_string_to_width_with_ellipsis("short", 10), "short");
        assert_eq!(clip_string_to_width_with_ellipsis("exactly ten", 11), "exactly ten");
        assert_eq!(
            clip_string_to_width_with_ellipsis("a very long label indeed", 10),
            "a very lo…"
        );
    }
}
