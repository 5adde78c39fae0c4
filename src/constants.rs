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

use crossterm::style::Color;

// Colors.
pub const SEA_FOAM_GREEN_COLOR: Color = Color::Rgb {
    r: 87,
    g: 222,
    b: 187,
};
pub const HOT_PINK_COLOR: Color = Color::Rgb {
    r: 255,
    g: 105,
    b: 180,
};
pub const LIGHT_GRAY_COLOR: Color = Color::Rgb {
    r: 94,
    g: 103,
    b: 111,
};

// Glyphs.
pub const QUESTION_ICON: &str = "?";
pub const HELP_ICON: &str = "ⓘ";
pub const ERROR_ICON: &str = "✘";
pub const FOCUSED_GLYPH: &str = "❯";
pub const CHECKED_GLYPH: &str = "◉";
pub const UNCHECKED_GLYPH: &str = "◯";

// Hints shown after the message on select and multi select prompts.
pub const FILTER_HINT: &str = "[Use arrows to move, type to filter]";
pub const FILTER_AND_HELP_HINT: &str = "[Use arrows to move, type to filter, ? for more help]";

/// Typing this character reveals the help text, on prompts that have one.
pub const HELP_RUNE: char = '?';
