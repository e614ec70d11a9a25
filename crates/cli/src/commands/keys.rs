use std::process;

use veneer_client::{CredentialStore, ProviderKind};

use crate::{report_error, OutputFormat};

fn open_store(output: OutputFormat, quiet: bool) -> CredentialStore {
    match CredentialStore::default_path() {
        Ok(s) => s,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}

pub(crate) fn cmd_set(provider: ProviderKind, key: &str, output: OutputFormat, quiet: bool) {
    let store = open_store(output, quiet);
    if let Err(e) = store.set(provider.credential_key(), key) {
        report_error(&format!("error: {}", e), output, quiet);
        process::exit(1);
    }
    if !quiet {
        match output {
            OutputFormat::Text => println!("stored key for '{}'", provider),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "stored": provider.as_str() }));
            }
        }
    }
}

pub(crate) fn cmd_get(provider: ProviderKind, output: OutputFormat, quiet: bool) {
    let store = open_store(output, quiet);
    match store.get(provider.credential_key()) {
        Ok(Some(key)) => match output {
            OutputFormat::Text => println!("{}", key),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({ "provider": provider.as_str(), "key": key })
                );
            }
        },
        Ok(None) => {
            report_error(
                &format!("error: no key stored for '{}'", provider),
                output,
                quiet,
            );
            process::exit(1);
        }
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}

pub(crate) fn cmd_list(output: OutputFormat, quiet: bool) {
    let store = open_store(output, quiet);
    match store.keys() {
        Ok(keys) => match output {
            OutputFormat::Text => {
                for key in keys {
                    println!("{}", key);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "keys": keys }));
            }
        },
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}
