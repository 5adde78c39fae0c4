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

//! A single keystroke vocabulary for the full screen prompts, and the capability
//! trait that produces it.
//!
//! [KeyPressReader] is the seam that makes the event loop testable: production code
//! uses [CrosstermKeyPressReader], tests use
//! [TestVecKeyPressReader](crate::TestVecKeyPressReader) which replays a scripted
//! sequence without touching the terminal. Raw mode is part of the same capability so
//! that whoever owns the key source also owns the terminal mode it needs.

use std::io::Result;

use crossterm::{
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};

/// Decoded keystrokes, independent of the backend that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Up,
    Down,
    Enter,
    Esc,
    Space,
    Backspace,
    Delete,
    /// Ctrl+W.
    DeleteWord,
    /// Ctrl+U.
    DeleteLine,
    /// Ctrl+C.
    Interrupt,
    /// Ctrl+D.
    EndOfTransmission,
    Printable(char),
    /// Anything the prompts have no binding for.
    Noop,
}

/// Blocking source of [KeyPress] values, plus control over the terminal mode that
/// key-at-a-time reading requires.
pub trait KeyPressReader {
    fn read_key_press(&mut self) -> Result<KeyPress>;
    fn enter_raw_mode(&mut self) -> Result<()>;
    fn exit_raw_mode(&mut self) -> Result<()>;
}

/// Reads from the real terminal via [crossterm::event::read]. Non key events (mouse,
/// resize, focus, paste) are skipped, as are key release and repeat events on the
/// platforms that report them.
#[derive(Debug, Default)]
pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    fn read_key_press(&mut self) -> Result<KeyPress> {
        loop {
            if let Event::Key(key_event) = crossterm::event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(KeyPress::from(key_event));
                }
            }
        }
    }

    fn enter_raw_mode(&mut self) -> Result<()> {
        enable_raw_mode()
    }

    fn exit_raw_mode(&mut self) -> Result<()> {
        disable_raw_mode()
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(key_event: KeyEvent) -> Self {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('c') => KeyPress::Interrupt,
                KeyCode::Char('d') => KeyPress::EndOfTransmission,
                KeyCode::Char('w') => KeyPress::DeleteWord,
                KeyCode::Char('u') => KeyPress::DeleteLine,
                _ => KeyPress::Noop,
            };
        }
        match key_event.code {
            KeyCode::Up => KeyPress::Up,
            KeyCode::Down => KeyPress::Down,
            KeyCode::Enter => KeyPress::Enter,
            KeyCode::Esc => KeyPress::Esc,
            KeyCode::Backspace => KeyPress::Backspace,
            KeyCode::Delete => KeyPress::Delete,
            KeyCode::Char(' ') => KeyPress::Space,
            KeyCode::Char(character) => KeyPress::Printable(character),
            _ => KeyPress::Noop,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(character: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(character), KeyModifiers::CONTROL)
    }

    #[test]
    fn arrow_and_editing_keys_are_decoded() {
        assert_eq!(KeyPress::from(plain(KeyCode::Up)), KeyPress::Up);
        assert_eq!(KeyPress::from(plain(KeyCode::Down)), KeyPress::Down);
        assert_eq!(KeyPress::from(plain(KeyCode::Enter)), KeyPress::Enter);
        assert_eq!(KeyPress::from(plain(KeyCode::Esc)), KeyPress::Esc);
        assert_eq!(KeyPress::from(plain(KeyCode::Backspace)), KeyPress::Backspace);
        assert_eq!(KeyPress::from(plain(KeyCode::Delete)), KeyPress::Delete);
    }

    #[test]
    fn control_chords_are_decoded() {
        assert_eq!(KeyPress::from(ctrl('c')), KeyPress::Interrupt);
        assert_eq!(KeyPress::from(ctrl('d')), KeyPress::EndOfTransmission);
        assert_eq!(KeyPress::from(ctrl('w')), KeyPress::DeleteWord);
        assert_eq!(KeyPress::from(ctrl('u')), KeyPress::DeleteLine);
        assert_eq!(KeyPress::from(ctrl('x')), KeyPress::Noop);
    }

    #[test]
    fn space_is_its_own_key_and_other_chars_are_printable() {
        assert_eq!(KeyPress::from(plain(KeyCode::Char(' '))), KeyPress::Space);
        assert_eq!(
            KeyPress::from(plain(KeyCode::Char('q'))),
            KeyPress::Printable('q')
        );
        assert_eq!(
            KeyPress::from(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            KeyPress::Printable('Q')
        );
    }

    #[test]
    fn unbound_keys_are_noop() {
        assert_eq!(KeyPress::from(plain(KeyCode::Home)), KeyPress::Noop);
        assert_eq!(KeyPress::from(plain(KeyCode::F(1))), KeyPress::Noop);
        assert_eq!(KeyPress::from(plain(KeyCode::Tab)), KeyPress::Noop);
    }
}
