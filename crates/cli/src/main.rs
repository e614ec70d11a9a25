mod commands;
mod templates;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use veneer_client::{ProviderKind, StyleTag};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Provider selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProviderArg {
    Openai,
    Gemini,
}

impl From<ProviderArg> for ProviderKind {
    fn from(p: ProviderArg) -> Self {
        match p {
            ProviderArg::Openai => ProviderKind::OpenAi,
            ProviderArg::Gemini => ProviderKind::Gemini,
        }
    }
}

/// Style selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Modern,
    Minimal,
    Elegant,
}

impl From<StyleArg> for StyleTag {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Modern => StyleTag::Modern,
            StyleArg::Minimal => StyleTag::Minimal,
            StyleArg::Elegant => StyleTag::Elegant,
        }
    }
}

/// Veneer UI generation toolchain.
#[derive(Parser)]
#[command(name = "veneer", version, about = "Veneer prompt-to-UI preview toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate UI previews for a prompt, one per style
    Generate {
        /// Natural-language description of the UI
        prompt: String,
        /// Generation provider
        #[arg(long, default_value = "openai", value_enum)]
        provider: ProviderArg,
        /// Style preset (repeatable; defaults to all three)
        #[arg(long = "style", value_enum)]
        styles: Vec<StyleArg>,
        /// Model override (defaults to the provider's standard model)
        #[arg(long)]
        model: Option<String>,
        /// Skip the preliminary prompt-analysis call
        #[arg(long)]
        no_analyze: bool,
        /// Directory to write previews into
        #[arg(long, default_value = "previews")]
        out: PathBuf,
    },

    /// Extract the markup fragment from a raw model response
    Extract {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Render a markup fragment to sanitized HTML
    Render {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Manage stored provider credentials
    Keys {
        #[command(subcommand)]
        command: KeyCommands,
    },
}

#[derive(Subcommand)]
enum KeyCommands {
    /// Store an API key for a provider
    Set {
        #[arg(value_enum)]
        provider: ProviderArg,
        key: String,
    },
    /// Print the stored API key for a provider
    Get {
        #[arg(value_enum)]
        provider: ProviderArg,
    },
    /// List which providers have a stored key
    List,
}

fn main() {
    let cli = Cli::parse();
    let output = cli.output;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Generate {
            prompt,
            provider,
            styles,
            model,
            no_analyze,
            out,
        } => {
            let styles: Vec<StyleTag> = if styles.is_empty() {
                StyleTag::all().to_vec()
            } else {
                styles.into_iter().map(StyleTag::from).collect()
            };
            commands::generate::cmd_generate(
                &prompt,
                provider.into(),
                &styles,
                model.as_deref(),
                no_analyze,
                &out,
                output,
                quiet,
            );
        }
        Commands::Extract { file } => {
            commands::extract::cmd_extract(file.as_deref(), output, quiet);
        }
        Commands::Render { file } => {
            commands::render::cmd_render(file.as_deref(), output, quiet);
        }
        Commands::Keys { command } => match command {
            KeyCommands::Set { provider, key } => {
                commands::keys::cmd_set(provider.into(), &key, output, quiet);
            }
            KeyCommands::Get { provider } => {
                commands::keys::cmd_get(provider.into(), output, quiet);
            }
            KeyCommands::List => {
                commands::keys::cmd_list(output, quiet);
            }
        },
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\""));
        }
    }
}
