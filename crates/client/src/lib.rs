//! veneer-client: provider clients and the generation pipeline.
//!
//! Sends a prompt (plus a style-specific instruction template) to a
//! hosted generation API and turns the raw responses into extracted
//! markup fragments, one per style. Rendering is `veneer-core`'s job;
//! the surrounding UI chrome is the caller's.
//!
//! # Public API
//!
//! - [`GenerationPipeline`] -- analyze + per-style fan-out
//! - [`LlmClient`] / [`OpenAiClient`] / [`GeminiClient`] -- the provider seam
//! - [`CredentialStore`] / [`ClientConfig`] -- flat credential file,
//!   resolved once at startup
//! - [`PreviewSlot`] -- latest-wins guard for overlapping generations
//! - [`GenerateError`] -- everything the pipeline can fail with

pub mod credentials;
pub mod error;
pub mod generate;
pub mod images;
pub mod provider;
pub mod session;
pub mod style;

pub use credentials::{ClientConfig, CredentialStore};
pub use error::GenerateError;
pub use generate::{Design, GenerationPipeline};
pub use provider::{GeminiClient, LlmClient, Message, OpenAiClient, ProviderKind};
pub use session::PreviewSlot;
pub use style::StyleTag;

/// Minimal diagnostic logging that doesn't require a tracing setup.
/// Goes to stderr so it never mixes with command output.
pub(crate) fn diag(msg: &str) {
    eprintln!("[veneer] {}", msg);
}
