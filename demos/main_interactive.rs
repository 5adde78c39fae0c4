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

//! Plan a (pretend) deploy with all four prompt types in one `ask` batch. Run it
//! with `cargo run --example main_interactive`.

use std::io::{stdout, Write};

use crossterm::{
    queue,
    style::{Color, Print},
};
use miette::IntoDiagnostic;
use r3bl_ask::{ask, queue_styled_text, styled, transformers, validators, Answers,
               AskError, Confirm, Input, MultiSelect, Question, Select, Style,
               StyleSheet};
use serde::Deserialize;
use serde_json::json;

/// The typed shape of the collected answers. Field names match question names.
#[derive(Debug, Deserialize)]
struct DeployPlan {
    tag: String,
    region: String,
    flags: Vec<String>,
    proceed: bool,
}

fn main() -> miette::Result<()> {
    print_header("Plan a deploy (Ctrl+C at any point backs out)").into_diagnostic()?;

    let questions = vec![
        Question::new(
            "tag",
            Input::new()
                .set_message("Release tag?")
                .set_default(json!("latest"))
                .set_help("Any image tag that exists in the registry."),
        )
        .with_validator(validators::required)
        .with_transformer(transformers::to_lower),
        Question::new(
            "region",
            Select::new()
                .set_message("Deploy region?")
                .with_style_sheet(StyleSheet::sea_foam_style())
                .add_choice("US East (N. Virginia)", json!("us-east-1"), true)
                .add_choice("EU West (Ireland)", json!("eu-west-1"), false)
                .add_choice("Asia Pacific (Mumbai)", json!("ap-south-1"), false),
        ),
        Question::new(
            "flags",
            MultiSelect::new()
                .set_message("Feature flags to enable?")
                .set_help("Space checks a flag, Enter accepts the checked set.")
                .with_style_sheet(StyleSheet::hot_pink_style())
                .add_display_only_choice("new-dashboard", true)
                .add_display_only_choice("dark-mode", false)
                .add_display_only_choice("beta-search", false),
        ),
        Question::new(
            "proceed",
            Confirm::new()
                .set_message("Proceed with the deploy?")
                .set_default(true),
        ),
    ];

    let mut answers = Answers::new();
    let result = ask(questions, &mut answers);
    if let Err(AskError::Interrupted) = result {
        // A canceled prompt is a normal way for the program to end.
        println!("Deploy planning canceled.");
        return Ok(());
    }
    result?;

    let plan: DeployPlan = answers.into_typed().into_diagnostic()?;
    print_header("Collected plan").into_diagnostic()?;
    println!(
        "Deploy {tag} to {region} with flags {flags:?}: {confirmed}",
        tag = plan.tag,
        region = plan.region,
        flags = plan.flags,
        confirmed = if plan.proceed { "confirmed" } else { "on hold" },
    );
    Ok(())
}

fn print_header(text: &str) -> std::io::Result<()> {
    let header_style = Style {
        maybe_fg_color: Some(Color::Rgb {
            r: 236,
            g: 230,
            b: 230,
        }),
        maybe_bg_color: Some(Color::Rgb { r: 10, g: 109, b: 33 }),
        bold: true,
        ..Style::default()
    };
    let mut out = stdout();
    queue_styled_text(&mut out, &styled(text, header_style), true)?;
    queue!(out, Print("\n"))?;
    out.flush()
}
