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

//! Small terminal queries used by the components and the `ra` binary.

use crossterm::tty::IsTty;

/// Assumed width when the output is not a terminal (tests, pipes).
pub const DEFAULT_WIDTH: usize = 80;

pub fn get_terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((columns, _rows)) if columns > 0 => columns as usize,
        _ => DEFAULT_WIDTH,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinIsPipedResult {
    StdinIsPiped,
    StdinIsNotPiped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdoutIsPipedResult {
    StdoutIsPiped,
    StdoutIsNotPiped,
}

/// Is stdin connected to a pipe (eg: `cat choices.txt | ra select ...`)?
pub fn is_stdin_piped() -> StdinIsPipedResult {
    if !std::io::stdin().is_tty() {
        StdinIsPipedResult::StdinIsPiped
    } else {
        StdinIsPipedResult::StdinIsNotPiped
    }
}

/// Is stdout connected to a pipe (eg: `ra select ... | jq .`)?
pub fn is_stdout_piped() -> StdoutIsPipedResult {
    if !std::io::stdout().is_tty() {
        StdoutIsPipedResult::StdoutIsPiped
    } else {
        StdoutIsPipedResult::StdoutIsNotPiped
    }
}
