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

//! How the event loop paints.
//!
//! A [FunctionComponent] turns state into a frame of terminal output on every
//! repaint. It owns a writer (`W`) rather than printing to stdout directly, so tests
//! can capture the exact bytes with
//! [TestStringWriter](crate::test_fixtures::TestStringWriter).
//!
//! The viewport protocol: before the first render,
//! [allocate_viewport_height_space](FunctionComponent::allocate_viewport_height_space)
//! reserves enough blank rows for the tallest possible frame (printing newlines
//! scrolls the terminal if the cursor is at the bottom row, cursor movement does
//! not), then parks the cursor on the first reserved row. Every render starts and
//! ends with the cursor parked there, which is what makes repaints land on top of
//! each other instead of scrolling.

use std::io::{Result, Write};

use crossterm::{
    cursor::{MoveToNextLine, MoveToPreviousLine},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

pub trait FunctionComponent<W: Write, S> {
    fn get_write(&mut self) -> &mut W;

    /// The tallest frame this component can paint for its configuration. Used to
    /// reserve rows up front and to wipe them all on exit, so it must never be
    /// smaller than what [render](FunctionComponent::render) actually paints.
    fn calculate_viewport_height(&self, state: &S) -> usize;

    fn render(&mut self, state: &S) -> Result<()>;

    fn allocate_viewport_height_space(&mut self, state: &S) -> Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let writer = self.get_write();
        for _ in 0..viewport_height {
            queue!(writer, Print("\n"))?;
        }
        queue!(writer, MoveToPreviousLine(viewport_height as u16))?;
        writer.flush()?;
        Ok(())
    }

    /// Wipe every reserved row and park the cursor back on the first one.
    fn clear_viewport(&mut self, state: &S) -> Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let writer = self.get_write();
        for _ in 0..viewport_height {
            queue!(writer, Clear(ClearType::CurrentLine), MoveToNextLine(1))?;
        }
        queue!(writer, MoveToPreviousLine(viewport_height as u16))?;
        writer.flush()?;
        Ok(())
    }
}
