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

//! `ra` asks one question per invocation and prints the answer to `stdout` as a
//! single JSON value. The `select` and `multi-select` subcommands read their
//! choice list from piped `stdin`, one choice per line. See the crate docs for
//! the full list of execution paths.

use std::io::{stdin, BufRead};

use clap::{Args, CommandFactory, Parser, Subcommand};
use crossterm::style::Stylize;
use r3bl_ask::{ask_one, is_stdin_piped, is_stdout_piped, try_initialize_logging,
               AskError, AskResult, Confirm, Input, MultiSelect, Select,
               StdinIsPipedResult, StdoutIsPipedResult};
use StdinIsPipedResult::*;
use StdoutIsPipedResult::*;

#[derive(Debug, Parser)]
#[command(bin_name = "ra")]
#[command(about = "🙋 Ask questions in your shell scripts, and get the answers back as JSON")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  ra [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "✅ Ask a yes or no question\n💡 Eg: `ra confirm \"Deploy to production?\"`"
    )]
    Confirm {
        #[arg(value_name = "message", help = "The question to ask")]
        message: String,

        #[arg(
            long,
            short = 'd',
            help = "Record `true` when the user just presses Enter"
        )]
        default_yes: bool,

        #[arg(
            value_name = "text",
            long,
            short = 'm',
            help = "Extra help shown when the user answers `?`"
        )]
        help_message: Option<String>,
    },

    #[clap(
        about = "✏️ Ask for a line of text\n💡 Eg: `ra input \"Image tag?\" --default latest`"
    )]
    Input {
        #[arg(value_name = "message", help = "The question to ask")]
        message: String,

        #[arg(
            value_name = "value",
            long,
            short = 'd',
            help = "Answer to record when the user just presses Enter"
        )]
        default: Option<String>,

        #[arg(
            value_name = "text",
            long,
            short = 'm',
            help = "Extra help shown when the user answers `?`"
        )]
        help_message: Option<String>,
    },

    #[clap(
        about = "👉 Pick one of the choices piped in via stdin\n💡 Eg: `cat regions.txt | ra select \"Deploy region?\"`"
    )]
    Select {
        #[arg(value_name = "message", help = "The question to ask")]
        message: String,

        #[arg(
            value_name = "rows",
            long,
            short = 'p',
            help = "Maximum number of choices shown at once"
        )]
        page_size: Option<usize>,

        #[arg(long, short = 'v', help = "Start with vim style `j` / `k` navigation on")]
        vim_mode: bool,

        #[arg(
            value_name = "text",
            long,
            short = 'm',
            help = "Extra help shown when the user presses `?`"
        )]
        help_message: Option<String>,
    },

    #[clap(
        about = "☑️ Pick any number of the choices piped in via stdin\n💡 Eg: `cat toppings.txt | ra multi-select \"Pizza toppings?\"`"
    )]
    MultiSelect {
        #[arg(value_name = "message", help = "The question to ask")]
        message: String,

        #[arg(
            value_name = "rows",
            long,
            short = 'p',
            help = "Maximum number of choices shown at once"
        )]
        page_size: Option<usize>,

        #[arg(long, short = 'v', help = "Start with vim style `j` / `k` navigation on")]
        vim_mode: bool,

        #[arg(
            value_name = "text",
            long,
            short = 'm',
            help = "Extra help shown when the user presses `?`"
        )]
        help_message: Option<String>,
    },
}

fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let result = try_run_command(cli_arg);

    enable_logging.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Stop logging...", result = ?result);
    });

    match result {
        // A canceled prompt is a normal way for the program to end. The prompt has
        // already restored the terminal, so there is nothing to report.
        Err(AskError::Interrupted) => Ok(()),
        other => other.map_err(miette::Report::from),
    }
}

fn try_run_command(cli_arg: CLIArg) -> AskResult<()> {
    let command = CLIArg::command();
    let bin_name = command.get_bin_name().unwrap_or("this command");

    match cli_arg.command {
        CLICommand::Confirm {
            message,
            default_yes,
            help_message,
        } => {
            if let StdoutIsPiped = is_stdout_piped() {
                show_error_do_not_pipe_stdout(bin_name);
                return Ok(());
            }
            let mut prompt = Confirm::new().set_message(message).set_default(default_yes);
            if let Some(help_message) = help_message {
                prompt = prompt.set_help(help_message);
            }
            let answer = ask_one(prompt, None)?;
            println!("{}", answer.into_value());
        }

        CLICommand::Input {
            message,
            default,
            help_message,
        } => {
            if let StdoutIsPiped = is_stdout_piped() {
                show_error_do_not_pipe_stdout(bin_name);
                return Ok(());
            }
            let mut prompt = Input::new().set_message(message);
            if let Some(default) = default {
                prompt = prompt.set_default(default);
            }
            if let Some(help_message) = help_message {
                prompt = prompt.set_help(help_message);
            }
            let answer = ask_one(prompt, None)?;
            println!("{}", answer.into_value());
        }

        CLICommand::Select {
            message,
            page_size,
            vim_mode,
            help_message,
        } => {
            let Some(lines) = try_read_choices_from_stdin(bin_name) else {
                return Ok(());
            };
            let mut prompt = Select::new().set_message(message).set_vim_mode(vim_mode);
            if let Some(page_size) = page_size {
                prompt = prompt.set_page_size(page_size);
            }
            if let Some(help_message) = help_message {
                prompt = prompt.set_help(help_message);
            }
            for line in lines {
                prompt = prompt.add_display_only_choice(line, false);
            }
            let answer = ask_one(prompt, None)?;
            println!("{}", answer.into_value());
        }

        CLICommand::MultiSelect {
            message,
            page_size,
            vim_mode,
            help_message,
        } => {
            let Some(lines) = try_read_choices_from_stdin(bin_name) else {
                return Ok(());
            };
            let mut prompt = MultiSelect::new().set_message(message).set_vim_mode(vim_mode);
            if let Some(page_size) = page_size {
                prompt = prompt.set_page_size(page_size);
            }
            if let Some(help_message) = help_message {
                prompt = prompt.set_help(help_message);
            }
            for line in lines {
                prompt = prompt.add_display_only_choice(line, false);
            }
            let answer = ask_one(prompt, None)?;
            println!("{}", answer.into_value());
        }
    }

    Ok(())
}

/// Drain the piped choice list, or print guidance and return [None] when the
/// process stdio is not wired up the way the select subcommands need.
fn try_read_choices_from_stdin(bin_name: &str) -> Option<Vec<String>> {
    // macos has issues w/ stdin piped in.
    // https://github.com/crossterm-rs/crossterm/issues/396
    if cfg!(target_os = "macos") {
        match (is_stdin_piped(), is_stdout_piped()) {
            (StdinIsPiped, _) => show_error_stdin_pipe_does_not_work_on_macos(),
            (_, StdoutIsPiped) => show_error_do_not_pipe_stdout(bin_name),
            (StdinIsNotPiped, StdoutIsNotPiped) => show_error_need_to_pipe_stdin(bin_name),
        }
        return None;
    }

    match (is_stdin_piped(), is_stdout_piped()) {
        (StdinIsPiped, StdoutIsNotPiped) => {}
        (StdinIsPiped, StdoutIsPiped) => {
            show_error_do_not_pipe_stdout(bin_name);
            return None;
        }
        (StdinIsNotPiped, StdoutIsPiped) => {
            show_error_need_to_pipe_stdin(bin_name);
            show_error_do_not_pipe_stdout(bin_name);
            return None;
        }
        (StdinIsNotPiped, StdoutIsNotPiped) => {
            show_error_need_to_pipe_stdin(bin_name);
            return None;
        }
    }

    let lines = stdin()
        .lock()
        .lines()
        .map_while(Result::ok)
        .collect::<Vec<String>>();

    // Early return, nothing to do. No content found in stdin.
    if lines.is_empty() {
        return None;
    }

    Some(lines)
}

fn show_error_stdin_pipe_does_not_work_on_macos() {
    let msg = "Unfortunately at this time macOS `stdin` pipe does not work on macOS.\
                     \nhttps://github.com/crossterm-rs/crossterm/issues/396"
        .blue()
        .to_string();
    println!("{msg}");
}

fn show_error_need_to_pipe_stdin(bin_name: &str) {
    let msg = format!(
        "Please pipe the choices into {bin_name}, one per line. \
         \n✅ For example: `cat regions.txt | {bin_name} select \"Deploy region?\"`",
    )
    .green()
    .to_string();
    println!("{msg}");
}

fn show_error_do_not_pipe_stdout(bin_name: &str) {
    let msg = format!(
        "Please do *not* pipe the output of {bin_name} to another command. \
         \n❎ For eg, don't do this: `cat regions.txt | {bin_name} select \"Pick\" | cat`",
    )
    .red()
    .to_string();
    println!("{msg}");
}
