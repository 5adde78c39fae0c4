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

//! Fatal errors that a prompt session can produce. A rejected answer from a
//! [validator](crate::Validator) is not an error in this sense, it just causes the
//! question to be asked again.

pub type AskResult<T> = core::result::Result<T, AskError>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AskError {
    /// The prompt was built with settings that can never produce a meaningful answer,
    /// eg: a select prompt with no choices, or two choices with the same display text.
    #[error("invalid prompt configuration: {message}")]
    #[diagnostic(
        code(r3bl_ask::configuration),
        help("Fix the prompt configuration in the calling code; user input never ran.")
    )]
    Configuration { message: String },

    /// The underlying key or line source failed. This is not the same as the user
    /// canceling the prompt, which is reported as [AskError::Interrupted].
    #[error("could not read user input")]
    #[diagnostic(code(r3bl_ask::input))]
    Input {
        #[source]
        source: std::io::Error,
    },

    /// The user pressed Ctrl+C. Callers usually exit quietly when they see this.
    #[error("the prompt was interrupted")]
    #[diagnostic(code(r3bl_ask::interrupted))]
    Interrupted,

    /// The answer was produced and validated, but the caller supplied sink refused it.
    #[error("could not record the answer to '{name}': {message}")]
    #[diagnostic(code(r3bl_ask::answer_write))]
    AnswerWrite { name: String, message: String },
}

/// Returned by [AnswerSink::write_answer](crate::AnswerSink::write_answer)
/// implementations. The orchestration layer attaches the question name and converts
/// this into [AskError::AnswerWrite].
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct AnswerWriteError {
    pub message: String,
}

impl AnswerWriteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
