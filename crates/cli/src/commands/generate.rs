use std::path::Path;
use std::process;
use std::sync::Arc;

use veneer_client::{
    ClientConfig, CredentialStore, GeminiClient, GenerationPipeline, LlmClient, OpenAiClient,
    ProviderKind, StyleTag,
};
use veneer_core::{render, RenderOutcome};

use crate::templates;
use crate::{report_error, OutputFormat};

#[allow(clippy::too_many_arguments)]
pub(crate) fn cmd_generate(
    prompt: &str,
    provider: ProviderKind,
    styles: &[StyleTag],
    model: Option<&str>,
    no_analyze: bool,
    out_dir: &Path,
    output: OutputFormat,
    quiet: bool,
) {
    if prompt.trim().is_empty() {
        report_error("error: prompt is empty", output, quiet);
        process::exit(1);
    }

    // Resolve the credential once, up front; the client holds it from
    // here on and no other code reads the store.
    let store = match CredentialStore::default_path() {
        Ok(s) => s,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    };
    let mut config = match ClientConfig::resolve(provider, &store) {
        Ok(c) => c,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    };
    if let Some(m) = model {
        config = config.with_model(m);
    }

    let client: Arc<dyn LlmClient> = match provider {
        ProviderKind::OpenAi => Arc::new(OpenAiClient::new(config.api_key_or_empty())),
        ProviderKind::Gemini => Arc::new(GeminiClient::new(config.api_key_or_empty())),
    };

    let mut pipeline = GenerationPipeline::new(client, config.model.clone());
    if no_analyze {
        pipeline = pipeline.without_analysis();
    }

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
    let designs = match rt.block_on(pipeline.generate_designs(prompt, styles)) {
        Ok(d) => d,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    };

    if let Err(e) = std::fs::create_dir_all(out_dir) {
        report_error(
            &format!("error creating '{}': {}", out_dir.display(), e),
            output,
            quiet,
        );
        process::exit(1);
    }

    let mut summary = Vec::new();
    for design in &designs {
        // A failed render becomes an inline error box; it never aborts
        // the sibling previews.
        let outcome = render(&design.code);
        let (body, status) = match &outcome {
            RenderOutcome::Rendered { html } => (html.clone(), "rendered".to_string()),
            RenderOutcome::Failed { message } => (
                templates::error_box(message),
                format!("render failed: {}", message),
            ),
        };

        let html_path = out_dir.join(format!("{}.html", design.style));
        let code_path = out_dir.join(format!("{}.txt", design.style));
        let page = templates::preview_page(design.style.as_str(), &body);

        for (path, content) in [(&html_path, &page), (&code_path, &design.code)] {
            if let Err(e) = std::fs::write(path, content) {
                report_error(
                    &format!("error writing '{}': {}", path.display(), e),
                    output,
                    quiet,
                );
                process::exit(1);
            }
        }

        summary.push(serde_json::json!({
            "style": design.style.as_str(),
            "outcome": outcome,
            "code": design.code,
            "preview": html_path.display().to_string(),
        }));

        if !quiet && output == OutputFormat::Text {
            println!("wrote {} ({})", html_path.display(), status);
        }
    }

    if !quiet && output == OutputFormat::Json {
        println!("{}", serde_json::json!({ "designs": summary }));
    }
}
