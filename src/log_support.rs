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

//! File logging for the prompt machinery.
//!
//! Prompts own the terminal while they run, so log output can never go to the
//! display. Everything is written to a file instead, [DEFAULT_LOG_FILE_NAME] in
//! the current directory.
//!
//! Logging is **DISABLED** by **default**. If you don't call
//! [try_initialize_logging] w/ a value other than [tracing_core::LevelFilter::OFF],
//! nothing is written, no matter how many [tracing::debug!] etc. calls run.

use std::{ffi::OsString, path::PathBuf};

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Install a global `tracing` subscriber that writes to [DEFAULT_LOG_FILE_NAME].
///
/// The format is compact, without timestamps or targets, so the file stays
/// readable when a prompt session logs every keypress.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber
/// is already installed.
pub fn try_initialize_logging(level_filter: LevelFilter) -> miette::Result<()> {
    // Early return if the level filter is off.
    if matches!(level_filter, LevelFilter::OFF) {
        return Ok(());
    }

    let file_appender = try_create_file_appender(DEFAULT_LOG_FILE_NAME)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .with_writer(file_appender)
        .with_filter(level_filter);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .into_diagnostic()
}

/// Note that if you wrap this up in a non blocking writer, it doesn't work. Here's
/// an example of this:
/// `tracing_appender::non_blocking(try_create_file_appender("foo")?)`
fn try_create_file_appender(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let (directory, file_name) = directory_and_file_name(path_str)?;
    Ok(tracing_appender::rolling::never(directory, file_name))
}

/// A bare file name resolves to the current directory, since
/// [std::path::Path::parent] reports an empty parent for it.
fn directory_and_file_name(path_str: &str) -> miette::Result<(PathBuf, OsString)> {
    let path = PathBuf::from(path_str);

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let file_name = path.file_name().map(ToOwned::to_owned).ok_or_else(|| {
        miette::miette!(format!(
            "Can't derive a log file name from {}. It might not exist, or don't have required permissions.",
            path.display()
        ))
    })?;

    Ok((directory, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_level_filter_is_a_no_op() {
        // Must not install a subscriber or touch the filesystem.
        assert!(try_initialize_logging(LevelFilter::OFF).is_ok());
    }

    #[test]
    fn bare_file_name_logs_into_the_current_directory() {
        let (directory, file_name) = directory_and_file_name("log.txt").unwrap();
        assert_eq!(directory, PathBuf::from("."));
        assert_eq!(file_name, OsString::from("log.txt"));
    }

    #[test]
    fn nested_path_keeps_its_parent() {
        let (directory, file_name) = directory_and_file_name("/tmp/logs/app.txt").unwrap();
        assert_eq!(directory, PathBuf::from("/tmp/logs"));
        assert_eq!(file_name, OsString::from("app.txt"));
    }

    #[test]
    fn a_path_without_a_file_name_is_rejected() {
        assert!(directory_and_file_name("..").is_err());
    }

    #[test]
    fn file_appender_creates_the_log_file_eagerly() {
        let dir = std::env::temp_dir().join("r3bl_ask_log_support_test");
        std::fs::create_dir_all(&dir).unwrap();
        let file_path = dir.join("my_temp_log_file.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let appender = try_create_file_appender(&file_path);

        assert!(appender.is_ok());
        assert!(std::path::Path::new(&file_path).exists());

        drop(appender);
        let _unused = std::fs::remove_dir_all(&dir);
    }
}
