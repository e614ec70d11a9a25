//! The generation pipeline: analyze (optional), fan out one request per
//! style, extract the markup fragment from each response.
//!
//! Concurrency model: the analyze call completes before the per-style
//! calls it feeds; per-style calls run as spawned tasks and are joined
//! in request order, so the returned designs line up with the requested
//! styles. Nothing is cancelled; a failing style fails the batch.

use std::sync::Arc;

use veneer_core::extract_fragment;

use crate::error::GenerateError;
use crate::provider::{LlmClient, Message};
use crate::style::{analyze_prompt, system_prompt, user_prompt, StyleTag};

/// One generated design variant.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Design {
    pub style: StyleTag,
    /// Extracted markup fragment, ready for the renderer.
    pub code: String,
}

/// Drives one provider client through the analyze/generate flow.
pub struct GenerationPipeline {
    client: Arc<dyn LlmClient>,
    model: String,
    analyze: bool,
}

impl GenerationPipeline {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        GenerationPipeline {
            client,
            model: model.into(),
            analyze: true,
        }
    }

    /// Skip the preliminary analyze call.
    pub fn without_analysis(mut self) -> Self {
        self.analyze = false;
        self
    }

    /// Run the analyze step: one completion extracting industry, purpose,
    /// and audience from the prompt.
    async fn analyze(&self, prompt: &str) -> Result<String, GenerateError> {
        self.client
            .complete(vec![Message::user(analyze_prompt(prompt))], &self.model)
            .await
    }

    /// Generate one design per requested style.
    ///
    /// Results are returned in the same order as `styles`. The raw
    /// response of each call goes through [`extract_fragment`]; semantic
    /// validity is the renderer's concern, not ours.
    pub async fn generate_designs(
        &self,
        prompt: &str,
        styles: &[StyleTag],
    ) -> Result<Vec<Design>, GenerateError> {
        let analysis = if self.analyze {
            Some(self.analyze(prompt).await?)
        } else {
            None
        };

        let mut handles = Vec::with_capacity(styles.len());
        for &style in styles {
            let client = Arc::clone(&self.client);
            let model = self.model.clone();
            let messages = vec![
                Message::system(system_prompt(analysis.as_deref())),
                Message::user(user_prompt(style, prompt, analysis.as_deref())),
            ];
            handles.push((
                style,
                tokio::spawn(async move { client.complete(messages, &model).await }),
            ));
        }

        let mut designs = Vec::with_capacity(handles.len());
        for (style, handle) in handles {
            let raw = match handle.await {
                Ok(result) => result?,
                Err(e) => {
                    crate::diag(&format!("style '{}' task failed: {}", style, e));
                    return Err(GenerateError::Task(e.to_string()));
                }
            };
            designs.push(Design {
                style,
                code: extract_fragment(&raw),
            });
        }
        Ok(designs)
    }
}
