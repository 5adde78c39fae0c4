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

//! The choices offered by [Select](crate::Select) and
//! [MultiSelect](crate::MultiSelect) prompts.
//!
//! Each [Choice] pairs the text shown in the terminal with the value reported to the
//! caller when that choice is accepted. [ChoiceSet] owns the choices in the order they
//! were added, remembers which ones were marked as defaults, and produces filtered
//! views for incremental filtering. Filtering never reorders or copies the choices.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One selectable item: what the user sees, and what the caller gets back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub display: String,
    pub value: serde_json::Value,
}

impl Choice {
    pub fn new(display: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            display: display.into(),
            value,
        }
    }

    /// A choice whose value is its own display text.
    pub fn display_only(display: impl Into<String>) -> Self {
        let display = display.into();
        let value = serde_json::Value::String(display.clone());
        Self { display, value }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

/// Ordered, append only collection of [Choice] values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceSet {
    items: Vec<Choice>,
    /// Indices (into `items`) of the choices that were added with `is_default = true`,
    /// in insertion order.
    default_indices: Vec<usize>,
}

impl ChoiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, choice: Choice, is_default: bool) {
        if is_default {
            self.default_indices.push(self.items.len());
        }
        self.items.push(choice);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Choice] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Choice> {
        self.items.get(index)
    }

    pub fn default_indices(&self) -> &[usize] {
        &self.default_indices
    }

    /// When more than one choice is marked as a default, the last one wins for single
    /// select focus and acceptance.
    pub fn last_default_index(&self) -> Option<usize> {
        self.default_indices.last().copied()
    }

    /// Case insensitive substring filter over the display text. An empty filter
    /// matches everything. Relative order is preserved and nothing is copied.
    pub fn filtered(&self, filter_text: &str) -> Vec<&Choice> {
        if filter_text.is_empty() {
            return self.items.iter().collect();
        }
        let filter_lowercase = filter_text.to_lowercase();
        self.items
            .iter()
            .filter(|choice| choice.display.to_lowercase().contains(&filter_lowercase))
            .collect()
    }

    /// Multi select keys its checked set by display text, so a duplicate display would
    /// silently merge two choices. Returns the first offender, if any.
    pub fn find_duplicate_display(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        for choice in &self.items {
            if !seen.insert(choice.display.as_str()) {
                return Some(&choice.display);
            }
        }
        None
    }
}

/// The values of the given choices, in the same order.
pub fn values_of(choices: &[Choice]) -> Vec<serde_json::Value> {
    choices.iter().map(|choice| choice.value.clone()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn color_choices() -> ChoiceSet {
        let mut choices = ChoiceSet::new();
        choices.push(Choice::new("Red", json!("red")), false);
        choices.push(Choice::new("Dark Red", json!("dark-red")), true);
        choices.push(Choice::new("Green", json!("green")), false);
        choices.push(Choice::new("Blue", json!("blue")), true);
        choices
    }

    #[test]
    fn empty_filter_matches_everything_in_order() {
        let choices = color_choices();
        let filtered = choices.filtered("");
        let displays: Vec<&str> = filtered
            .iter()
            .map(|choice| choice.display.as_str())
            .collect();
        assert_eq!(displays, vec!["Red", "Dark Red", "Green", "Blue"]);
    }

    #[test]
    fn filter_is_case_insensitive_substring_match() {
        let choices = color_choices();
        let filtered = choices.filtered("RED");
        let displays: Vec<&str> = filtered
            .iter()
            .map(|choice| choice.display.as_str())
            .collect();
        assert_eq!(displays, vec!["Red", "Dark Red"]);
    }

    #[test]
    fn filter_with_no_match_yields_empty_view() {
        let choices = color_choices();
        assert_eq!(choices.filtered("magenta").len(), 0);
    }

    #[test]
    fn last_default_wins() {
        let choices = color_choices();
        assert_eq!(choices.default_indices(), &[1, 3]);
        assert_eq!(choices.last_default_index(), Some(3));
    }

    #[test]
    fn duplicate_display_is_reported() {
        let mut choices = ChoiceSet::new();
        choices.push(Choice::display_only("one"), false);
        choices.push(Choice::new("two", json!(2)), false);
        choices.push(Choice::new("one", json!(1)), false);
        assert_eq!(choices.find_duplicate_display(), Some("one"));
    }

    #[test]
    fn unique_displays_pass_the_duplicate_check() {
        let choices = color_choices();
        assert_eq!(choices.find_duplicate_display(), None);
    }

    #[test]
    fn display_only_choice_uses_display_as_value() {
        let choice = Choice::display_only("main");
        assert_eq!(choice.value, json!("main"));
    }

    #[test]
    fn values_of_preserves_order() {
        let choices = color_choices();
        assert_eq!(
            values_of(choices.items()),
            vec![json!("red"), json!("dark-red"), json!("green"), json!("blue")]
        );
    }
}
