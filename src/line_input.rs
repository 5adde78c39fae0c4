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

//! Whole line input for [Confirm](crate::Confirm) and [Input](crate::Input) prompts.
//!
//! These prompts never enter raw mode. They leave the terminal in its normal cooked
//! mode and read one line at a time, which keeps them usable in scripts where stdin
//! is a pipe. [LineReader] is the test seam, mirroring
//! [KeyPressReader](crate::KeyPressReader) for the full screen prompts.

use std::io::{BufRead, Result};

/// One read from a [LineReader].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    /// A line of text, without the trailing newline.
    Line(String),
    /// The input source is exhausted.
    Eof,
    /// The user canceled. The stdin backed reader never produces this (in cooked mode
    /// Ctrl+C raises a signal instead), but scripted readers and future raw line
    /// editors do.
    Interrupted,
}

/// Blocking source of lines of user input.
pub trait LineReader {
    fn read_line(&mut self) -> Result<LineRead>;
}

/// Reads lines from the process stdin.
#[derive(Debug, Default)]
pub struct StdinLineReader;

impl LineReader for StdinLineReader {
    fn read_line(&mut self) -> Result<LineRead> {
        let mut buffer = String::new();
        let bytes_read = std::io::stdin().lock().read_line(&mut buffer)?;
        if bytes_read == 0 {
            return Ok(LineRead::Eof);
        }
        let line = buffer.trim_end_matches(['\r', '\n']).to_string();
        Ok(LineRead::Line(line))
    }
}
