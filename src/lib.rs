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

//! # r3bl_ask
//!
//! Ask people questions in the terminal, and get typed answers back.
//!
//! This crate can be used in two ways:
//! 1. As a library. This is useful if you want to add simple interactivity to your
//!    CLI app written in Rust. Compose [Question]s out of the four prompt types
//!    ([Confirm], [Input], [Select], [MultiSelect]), hand them to [ask], and read
//!    the validated answers out of an [Answers] map, or deserialize them straight
//!    into your own struct w/ [Answers::into_typed]. You can see an example of this
//!    in the `demos` folder in the `main_interactive.rs` file. You can run it using
//!    `cargo run --example main_interactive`.
//! 1. As a binary. This is useful if you want to ask a question from a shell
//!    script. The binary target is called `ra`. It runs one prompt per invocation
//!    and prints the answer to `stdout` as JSON.
//!
//! ## How to use it as a library?
//!
//! Every prompt owns the terminal only while it runs, and restores it before
//! returning, no matter how the interaction ends.
//!
//! - [Select] and [MultiSelect] render an inline choice list in raw mode: arrow
//!   keys move (also `j` / `k` when vim mode is on, toggled w/ `Esc`), typing
//!   filters the choices, `Space` checks and unchecks, `Enter` accepts, `Ctrl+C`
//!   interrupts, and `?` reveals the help message when one is configured. A list
//!   that doesn't fit the configured page size scrolls, and the header says where
//!   you are.
//! - [Confirm] and [Input] stay in cooked mode and read whole lines, so they work
//!   over pipes and plain ssh sessions alike.
//!
//! ```no_run
//! use r3bl_ask::{ask, validators, Answers, AskResult, Confirm, Input, Question,
//!                Select};
//! use serde_json::json;
//!
//! fn main() -> AskResult<()> {
//!     let questions = vec![
//!         Question::new("name", Input::new().set_message("What is your name?"))
//!             .with_validator(validators::required),
//!         Question::new(
//!             "color",
//!             Select::new()
//!                 .set_message("Choose a color")
//!                 .add_choice("Red", json!("red"), false)
//!                 .add_choice("Green", json!("green"), true)
//!                 .add_choice("Blue", json!("blue"), false),
//!         ),
//!         Question::new(
//!             "likes_pie",
//!             Confirm::new().set_message("Do you like pie?").set_default(true),
//!         ),
//!     ];
//!
//!     let mut answers = Answers::new();
//!     ask(questions, &mut answers)?;
//!
//!     println!("name: {:?}", answers.get("name"));
//!     Ok(())
//! }
//! ```
//!
//! A [Question] can carry any number of validators and one transformer. A
//! validator that rejects the answer gets its message painted on the prompt and
//! the question is asked again ([validators::required] ships in the box). The
//! transformer rewrites the accepted answer before it is recorded
//! ([transformers::to_lower], [transformers::title_case]).
//!
//! ## How to use it as a binary?
//!
//! You can install the binary using `cargo install r3bl_ask` (from crates.io). Or
//! `cargo install --path .` from source. Once installed, `ra` asks one question
//! per invocation:
//!
//! ```shell
//! ra confirm "Deploy to production?"
//! ra input "Image tag?" --default latest
//! cat regions.txt | ra select "Deploy region?"
//! cat toppings.txt | ra multi-select "Pizza toppings?"
//! ```
//!
//! The `select` and `multi-select` subcommands read their choice list from
//! `stdin`, one choice per line. Here is a list of the different execution paths:
//!
//! - Happy paths:
//!   1. `ra` - prints help.
//!   1. `cat regions.txt | ra select "Deploy region?"` - `stdin` is piped in, and
//!      it prints the selected region to `stdout` as JSON.
//! - Unhappy paths (`stdin` is _not_ piped in and, or `stdout` _is_ piped out):
//!   1. `ra select "Deploy region?"` - expects `stdin` to be piped in, and prints
//!      an error.
//!   1. `cat regions.txt | ra select "Deploy region?" | cat` - does not expect
//!      `stdout` to be piped out (the prompt paints its UI there), and prints an
//!      error.
//!
//! Pass `--enable-logging` to any subcommand to append a trace of the session to
//! `log.txt`. You can use `tail -f log.txt` to watch the logs.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod answer;
pub mod choice;
pub mod components;
pub mod constants;
pub mod error;
pub mod event_loop;
pub mod frame;
pub mod function_component;
pub mod keypress;
pub mod line_input;
pub mod log_support;
pub mod paginate;
pub mod prompts;
pub mod question;
pub mod state;
pub mod term;
pub mod test_fixtures;

// Re-export.
pub use answer::*;
pub use choice::*;
pub use components::*;
pub use constants::*;
pub use error::*;
pub use event_loop::*;
pub use frame::*;
pub use function_component::*;
pub use keypress::*;
pub use line_input::*;
pub use log_support::*;
pub use paginate::*;
pub use prompts::*;
pub use question::*;
pub use state::*;
pub use term::*;
