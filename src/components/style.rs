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

//! Styling for prompt output.
//!
//! A [StyleSheet] is passed per prompt; there is no process wide color switch.
//! Turning color off is just [StyleSheet::monochrome], which also makes captured
//! output byte for byte predictable in tests.

use std::io::{Result, Write};

use crossterm::{
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
};

use crate::constants::{HOT_PINK_COLOR, LIGHT_GRAY_COLOR, SEA_FOAM_GREEN_COLOR};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub maybe_fg_color: Option<Color>,
    pub maybe_bg_color: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

/// A run of text painted with a single [Style]. Rows of a frame are rendered as one
/// or more of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub style: Style,
}

pub fn styled(text: impl Into<String>, style: Style) -> StyledText {
    StyledText {
        text: text.into(),
        style,
    }
}

/// One style per visual role a prompt can paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    /// When off, every role is painted as plain text and no escape sequences for
    /// color or attributes are emitted at all.
    pub color_enabled: bool,
    pub question_style: Style,
    pub message_style: Style,
    pub hint_style: Style,
    pub focused_style: Style,
    pub normal_style: Style,
    pub checked_style: Style,
    pub unchecked_style: Style,
    pub help_style: Style,
    pub answer_style: Style,
    pub default_value_style: Style,
    pub error_style: Style,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            color_enabled: true,
            question_style: Style {
                maybe_fg_color: Some(Color::Green),
                bold: true,
                ..Style::default()
            },
            message_style: Style {
                bold: true,
                ..Style::default()
            },
            hint_style: Style {
                maybe_fg_color: Some(Color::Cyan),
                ..Style::default()
            },
            focused_style: Style {
                maybe_fg_color: Some(Color::Cyan),
                bold: true,
                ..Style::default()
            },
            normal_style: Style::default(),
            checked_style: Style {
                maybe_fg_color: Some(Color::Green),
                ..Style::default()
            },
            unchecked_style: Style {
                dim: true,
                ..Style::default()
            },
            help_style: Style {
                maybe_fg_color: Some(Color::Cyan),
                ..Style::default()
            },
            answer_style: Style {
                maybe_fg_color: Some(Color::Cyan),
                ..Style::default()
            },
            default_value_style: Style {
                dim: true,
                ..Style::default()
            },
            error_style: Style {
                maybe_fg_color: Some(Color::Red),
                ..Style::default()
            },
        }
    }
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text output, no escape sequences for color or attributes.
    pub fn monochrome() -> Self {
        Self {
            color_enabled: false,
            question_style: Style::default(),
            message_style: Style::default(),
            hint_style: Style::default(),
            focused_style: Style::default(),
            normal_style: Style::default(),
            checked_style: Style::default(),
            unchecked_style: Style::default(),
            help_style: Style::default(),
            answer_style: Style::default(),
            default_value_style: Style::default(),
            error_style: Style::default(),
        }
    }

    pub fn sea_foam_style() -> Self {
        let accent = Style {
            maybe_fg_color: Some(SEA_FOAM_GREEN_COLOR),
            ..Style::default()
        };
        Self {
            question_style: Style { bold: true, ..accent },
            focused_style: Style { bold: true, ..accent },
            checked_style: accent,
            answer_style: accent,
            hint_style: Style {
                maybe_fg_color: Some(LIGHT_GRAY_COLOR),
                ..Style::default()
            },
            help_style: Style {
                maybe_fg_color: Some(LIGHT_GRAY_COLOR),
                ..Style::default()
            },
            ..Self::default()
        }
    }

    pub fn hot_pink_style() -> Self {
        let accent = Style {
            maybe_fg_color: Some(HOT_PINK_COLOR),
            ..Style::default()
        };
        Self {
            question_style: Style { bold: true, ..accent },
            focused_style: Style { bold: true, ..accent },
            checked_style: accent,
            answer_style: accent,
            hint_style: Style {
                maybe_fg_color: Some(LIGHT_GRAY_COLOR),
                ..Style::default()
            },
            help_style: Style {
                maybe_fg_color: Some(LIGHT_GRAY_COLOR),
                ..Style::default()
            },
            ..Self::default()
        }
    }
}

/// Queue one styled run of text. With color off only the text itself is queued.
pub fn queue_styled_text<W: Write>(
    writer: &mut W,
    styled_text: &StyledText,
    color_enabled: bool,
) -> Result<()> {
    if !color_enabled {
        queue!(writer, Print(&styled_text.text))?;
        return Ok(());
    }
    if let Some(color) = styled_text.style.maybe_fg_color {
        queue!(writer, SetForegroundColor(color))?;
    }
    if let Some(color) = styled_text.style.maybe_bg_color {
        queue!(writer, SetBackgroundColor(color))?;
    }
    if styled_text.style.bold {
        queue!(writer, SetAttribute(Attribute::Bold))?;
    }
    if styled_text.style.dim {
        queue!(writer, SetAttribute(Attribute::Dim))?;
    }
    queue!(
        writer,
        Print(&styled_text.text),
        ResetColor,
        SetAttribute(Attribute::Reset)
    )?;
    Ok(())
}
