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

//! Test doubles for the two IO capabilities, usable from this crate's tests and from
//! downstream crates that embed prompts.
//!
//! [TestStringWriter] captures the exact bytes a component paints.
//! [TestVecKeyPressReader] and [TestVecLineReader] replay scripted input without a
//! terminal, and count raw mode transitions so tests can assert the terminal is
//! always handed back.

use std::io::{Result, Write};

use crate::{KeyPress, KeyPressReader, LineRead, LineReader};

/// An in memory [Write] that collects everything written to it as a string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestStringWriter {
    buffer: String,
}

impl TestStringWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_copy_of_buffer(&self) -> String {
        self.buffer.clone()
    }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer.push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Replays a scripted sequence of keystrokes, wrapping around at the end. Raw mode
/// calls only bump counters, so tests never touch the real terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestVecKeyPressReader {
    pub key_press_vec: Vec<KeyPress>,
    pub index: Option<usize>,
    pub raw_mode_enter_count: usize,
    pub raw_mode_exit_count: usize,
}

impl TestVecKeyPressReader {
    pub fn new(key_press_vec: Vec<KeyPress>) -> Self {
        Self {
            key_press_vec,
            index: None,
            raw_mode_enter_count: 0,
            raw_mode_exit_count: 0,
        }
    }
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> Result<KeyPress> {
        // Move to the next scripted key on every call, wrapping at the end.
        let next_index = match self.index {
            Some(index) if index + 1 < self.key_press_vec.len() => index + 1,
            Some(_) => 0,
            None => 0,
        };
        self.index = Some(next_index);
        Ok(self.key_press_vec[next_index])
    }

    fn enter_raw_mode(&mut self) -> Result<()> {
        self.raw_mode_enter_count += 1;
        Ok(())
    }

    fn exit_raw_mode(&mut self) -> Result<()> {
        self.raw_mode_exit_count += 1;
        Ok(())
    }
}

/// Replays a scripted sequence of line reads. A script that runs out behaves like
/// closed stdin and yields [LineRead::Eof].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestVecLineReader {
    pub line_vec: Vec<LineRead>,
    pub index: Option<usize>,
}

impl TestVecLineReader {
    pub fn new(line_vec: Vec<LineRead>) -> Self {
        Self {
            line_vec,
            index: None,
        }
    }

    pub fn from_lines(lines: &[&str]) -> Self {
        Self::new(
            lines
                .iter()
                .map(|line| LineRead::Line(line.to_string()))
                .collect(),
        )
    }
}

impl LineReader for TestVecLineReader {
    fn read_line(&mut self) -> Result<LineRead> {
        let next_index = match self.index {
            Some(index) => index + 1,
            None => 0,
        };
        self.index = Some(next_index);
        match self.line_vec.get(next_index) {
            Some(line_read) => Ok(line_read.clone()),
            None => Ok(LineRead::Eof),
        }
    }
}

pub fn contains_ansi_escape_sequence(text: &str) -> bool {
    text.chars().any(|character| character == '\u{1b}')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn string_writer_accumulates_writes() {
        let mut writer = TestStringWriter::new();
        writer.write_all(b"hello ").unwrap();
        writer.write_all("world ❯".as_bytes()).unwrap();
        assert_eq!(writer.get_copy_of_buffer(), "hello world ❯");
    }

    #[test]
    fn key_press_reader_replays_and_wraps() {
        let mut reader =
            TestVecKeyPressReader::new(vec![KeyPress::Down, KeyPress::Enter]);
        assert_eq!(reader.read_key_press().unwrap(), KeyPress::Down);
        assert_eq!(reader.read_key_press().unwrap(), KeyPress::Enter);
        assert_eq!(reader.read_key_press().unwrap(), KeyPress::Down);
    }

    #[test]
    fn key_press_reader_counts_raw_mode_transitions() {
        let mut reader = TestVecKeyPressReader::new(vec![KeyPress::Enter]);
        reader.enter_raw_mode().unwrap();
        reader.enter_raw_mode().unwrap();
        reader.exit_raw_mode().unwrap();
        assert_eq!(reader.raw_mode_enter_count, 2);
        assert_eq!(reader.raw_mode_exit_count, 1);
    }

    #[test]
    fn line_reader_yields_eof_when_the_script_runs_out() {
        let mut reader = TestVecLineReader::from_lines(&["y"]);
        assert_eq!(
            reader.read_line().unwrap(),
            LineRead::Line("y".to_string())
        );
        assert_eq!(reader.read_line().unwrap(), LineRead::Eof);
        assert_eq!(reader.read_line().unwrap(), LineRead::Eof);
    }

    #[test]
    fn ansi_escape_detection() {
        assert!(contains_ansi_escape_sequence("\u{1b}[2Khello"));
        assert!(!contains_ansi_escape_sequence("hello"));
    }
}
