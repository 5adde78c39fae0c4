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

//! The blocking read / transition / render loop behind [Select](crate::Select) and
//! [MultiSelect](crate::MultiSelect).
//!
//! The loop owns the terminal session: it enters raw mode and hides the cursor on
//! the way in, and restores both on the way out, exactly once, on every path out of
//! the loop including IO errors. Keystroke semantics live entirely in the
//! `on_keypress` handler; this module only routes.

use std::io::{Result, Write};

use crossterm::{
    cursor::{Hide, Show},
    execute,
};

use crate::{Answer, FunctionComponent, KeyPress, KeyPressReader};

/// What the `on_keypress` handler wants the loop to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum EventLoopResult {
    /// Keep looping without repainting (unbound keys).
    Continue,
    /// Keep looping and repaint the frame.
    ContinueAndRerender,
    /// Leave the loop with an accepted answer.
    ExitWithResult(Answer),
    /// Leave the loop because the user pressed Ctrl+C.
    ExitWithInterrupt,
}

/// Run the session to completion. Returns the `Exit*` variant the handler produced,
/// or the underlying IO error if reading keys or painting failed. Either way the
/// cursor is shown and raw mode is off by the time this returns.
pub fn enter_event_loop<W: Write, S>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult,
    key_press_reader: &mut impl KeyPressReader,
) -> Result<EventLoopResult> {
    key_press_reader.enter_raw_mode()?;

    // A failure anywhere past this point must still reach run_after_event_loop.
    let loop_outcome = run_before_event_loop(state, function_component).and_then(|()| {
        run_event_loop(state, function_component, on_keypress, key_press_reader)
    });
    let restore_outcome = run_after_event_loop(function_component, key_press_reader);

    let event_loop_result = loop_outcome?;
    restore_outcome?;
    Ok(event_loop_result)
}

fn run_before_event_loop<W: Write, S>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
) -> Result<()> {
    execute!(function_component.get_write(), Hide)?;
    function_component.allocate_viewport_height_space(state)?;
    function_component.render(state)
}

fn run_event_loop<W: Write, S>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult,
    key_press_reader: &mut impl KeyPressReader,
) -> Result<EventLoopResult> {
    loop {
        let key_press = key_press_reader.read_key_press()?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "event loop read key press", key_press = ?key_press);
        match on_keypress(state, key_press) {
            EventLoopResult::ContinueAndRerender => function_component.render(state)?,
            EventLoopResult::Continue => {}
            exit @ (EventLoopResult::ExitWithResult(_) | EventLoopResult::ExitWithInterrupt) => {
                function_component.clear_viewport(state)?;
                return Ok(exit);
            }
        }
    }
}

fn run_after_event_loop<W: Write, S>(
    function_component: &mut impl FunctionComponent<W, S>,
    key_press_reader: &mut impl KeyPressReader,
) -> Result<()> {
    execute!(function_component.get_write(), Show)?;
    key_press_reader.exit_raw_mode()
}
