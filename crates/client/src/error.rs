/// All errors the generation pipeline can surface to its caller.
///
/// Render failures are NOT here: they are contained in
/// [`veneer_core::RenderOutcome::Failed`] and displayed inline, never
/// propagated as errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No credential configured for the provider. Raised before any
    /// network call is made.
    #[error("no API key configured for provider '{provider}'")]
    MissingCredential { provider: String },

    /// The provider returned a non-success status. `message` is taken
    /// verbatim from the provider's error payload when available.
    #[error("provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// Transport-level failure (DNS, TLS, connect, read).
    #[error("network error: {0}")]
    Network(String),

    /// The provider's response body did not have the expected shape.
    #[error("unexpected provider response: {0}")]
    Parse(String),

    /// Reading or writing the credential store failed.
    #[error("credential store error: {0}")]
    Store(String),

    /// A spawned generation task failed to join.
    #[error("generation task failed: {0}")]
    Task(String),
}
