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

//! What a prompt produces, and where it goes.
//!
//! Each prompt type produces one [Answer] variant: [Confirm](crate::Confirm) a
//! [Answer::Bool], [Input](crate::Input) a [Answer::Text] (or the configured default
//! as [Answer::Value]), [Select](crate::Select) a [Answer::Choice], and
//! [MultiSelect](crate::MultiSelect) a [Answer::Choices]. The orchestration layer
//! converts the answer to a [serde_json::Value] and hands it to the caller supplied
//! [AnswerSink]. [Answers] is the batteries included sink: an in memory map that can
//! be deserialized into a caller struct in one step.

use serde::Serialize;

use crate::{AnswerWriteError, Choice};

/// The result of one completed prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// The prompt finished without producing a value, eg: a select prompt whose
    /// choices were all filtered out and which has no default. Recorded as JSON
    /// `null`.
    None,
    Bool(bool),
    Text(String),
    /// A default value passed through verbatim by an [Input](crate::Input) prompt.
    Value(serde_json::Value),
    Choice(Choice),
    Choices(Vec<Choice>),
}

impl Answer {
    /// The value recorded in the sink. Choices report their configured value, not
    /// their display text.
    pub fn into_value(self) -> serde_json::Value {
        match self {
            Answer::None => serde_json::Value::Null,
            Answer::Bool(flag) => serde_json::Value::Bool(flag),
            Answer::Text(text) => serde_json::Value::String(text),
            Answer::Value(value) => value,
            Answer::Choice(choice) => choice.value,
            Answer::Choices(choices) => serde_json::Value::Array(
                choices.into_iter().map(|choice| choice.value).collect(),
            ),
        }
    }

    /// The human readable form painted on the finished prompt line.
    pub fn to_display_string(&self) -> String {
        match self {
            Answer::None => String::new(),
            Answer::Bool(true) => "Yes".to_string(),
            Answer::Bool(false) => "No".to_string(),
            Answer::Text(text) => text.clone(),
            Answer::Value(value) => value_display_text(value),
            Answer::Choice(choice) => choice.display.clone(),
            Answer::Choices(choices) => choices
                .iter()
                .map(|choice| choice.display.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Display form of a JSON value: strings without their quotes, everything else as
/// compact JSON.
pub fn value_display_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Receives one validated answer per question. Implementations decide what
/// "recording" means: an in memory map, a config file, a database row.
pub trait AnswerSink {
    fn write_answer(
        &mut self,
        name: &str,
        value: serde_json::Value,
    ) -> core::result::Result<(), AnswerWriteError>;
}

/// In memory sink keyed by question name. A repeated name overwrites the earlier
/// answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Answers {
    map: serde_json::Map<String, serde_json::Value>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.map.get(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Deserialize the collected answers into a caller struct, matching question
    /// names to field names.
    pub fn into_typed<T: serde::de::DeserializeOwned>(self) -> serde_json::Result<T> {
        serde_json::from_value(serde_json::Value::Object(self.map))
    }
}

impl AnswerSink for Answers {
    fn write_answer(
        &mut self,
        name: &str,
        value: serde_json::Value,
    ) -> core::result::Result<(), AnswerWriteError> {
        self.map.insert(name.to_string(), value);
        Ok(())
    }
}
