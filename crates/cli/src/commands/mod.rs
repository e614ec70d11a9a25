pub(crate) mod extract;
pub(crate) mod generate;
pub(crate) mod keys;
pub(crate) mod render;

use std::io::Read;
use std::path::Path;
use std::process;

use crate::{report_error, OutputFormat};

/// Read the given file, or stdin when no file was given.
pub(crate) fn read_input(file: Option<&Path>, output: OutputFormat, quiet: bool) -> String {
    match file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                let msg = format!("error reading file '{}': {}", path.display(), e);
                report_error(&msg, output, quiet);
                process::exit(1);
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                report_error(&format!("error reading stdin: {}", e), output, quiet);
                process::exit(1);
            }
            buf
        }
    }
}
