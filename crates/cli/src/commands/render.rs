use std::path::Path;
use std::process;

use veneer_core::{render, RenderOutcome};

use super::read_input;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_render(file: Option<&Path>, output: OutputFormat, quiet: bool) {
    let markup = read_input(file, output, quiet);

    match render(&markup) {
        RenderOutcome::Rendered { html } => match output {
            OutputFormat::Text => println!("{}", html),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({ "outcome": "rendered", "html": html })
                );
            }
        },
        RenderOutcome::Failed { message } => {
            report_error(&format!("render failed: {}", message), output, quiet);
            process::exit(1);
        }
    }
}
