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

//! The four prompt types and the trait that lets [ask](crate::ask) drive any of
//! them.

// Attach sources.
pub mod confirm;
pub mod input;
pub mod multi_select;
pub mod select;

// Re-export.
pub use confirm::*;
pub use input::*;
pub use multi_select::*;
pub use select::*;

use crate::{constants::HELP_RUNE, Answer, AskError, AskResult};

/// One interactive question. [prompt](Prompt::prompt) runs the interaction and
/// returns the raw answer; [report_error](Prompt::report_error) paints a rejection
/// from a validator so the question can be asked again; [cleanup](Prompt::cleanup)
/// replaces the question with the final answer line.
pub trait Prompt {
    fn prompt(&mut self) -> AskResult<Answer>;
    fn report_error(&mut self, error_text: &str) -> AskResult<()>;
    fn cleanup(&mut self, answer: &Answer) -> AskResult<()>;
}

/// Is this line exactly the help rune?
pub(crate) fn is_help_line(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some(HELP_RUNE) && chars.next().is_none()
}

pub(crate) fn input_error(source: std::io::Error) -> AskError {
    AskError::Input { source }
}

pub(crate) fn unexpected_eof() -> AskError {
    AskError::Input {
        source: std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_line_is_exactly_one_question_mark() {
        assert!(is_help_line("?"));
        assert!(!is_help_line(""));
        assert!(!is_help_line("??"));
        assert!(!is_help_line("? "));
        assert!(!is_help_line("help"));
    }
}
