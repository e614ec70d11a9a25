use std::path::Path;

use veneer_core::extract_fragment;

use super::read_input;
use crate::OutputFormat;

pub(crate) fn cmd_extract(file: Option<&Path>, output: OutputFormat, quiet: bool) {
    let raw = read_input(file, output, quiet);
    let fragment = extract_fragment(&raw);

    match output {
        OutputFormat::Text => println!("{}", fragment),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "fragment": fragment })
            );
        }
    }
}
