//! Flat credential store and the resolved per-provider client config.
//!
//! Credentials live in a small TOML file (one string per provider key).
//! The pipeline never reads the store directly: the CLI resolves a
//! [`ClientConfig`] once at startup and passes it into the client
//! constructor. Environment variables override the file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::provider::ProviderKind;

/// File-backed key/value credential store.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CredentialStore { path: path.into() }
    }

    /// Default location: `$VENEER_CREDENTIALS`, else
    /// `$HOME/.config/veneer/credentials.toml`.
    pub fn default_path() -> Result<Self, GenerateError> {
        if let Ok(p) = std::env::var("VENEER_CREDENTIALS") {
            return Ok(CredentialStore::new(p));
        }
        let home = std::env::var("HOME")
            .map_err(|_| GenerateError::Store("HOME is not set".to_string()))?;
        Ok(CredentialStore::new(
            Path::new(&home).join(".config/veneer/credentials.toml"),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, GenerateError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(GenerateError::Store(format!(
                    "failed to read '{}': {}",
                    self.path.display(),
                    e
                )))
            }
        };
        toml::from_str(&text).map_err(|e| {
            GenerateError::Store(format!("invalid TOML in '{}': {}", self.path.display(), e))
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), GenerateError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GenerateError::Store(format!(
                    "failed to create '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let text = toml::to_string(entries)
            .map_err(|e| GenerateError::Store(format!("failed to serialize store: {}", e)))?;
        std::fs::write(&self.path, text).map_err(|e| {
            GenerateError::Store(format!(
                "failed to write '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, GenerateError> {
        Ok(self.load()?.get(key).cloned())
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), GenerateError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    /// All stored keys (values omitted; this is for listing, not leaking).
    pub fn keys(&self) -> Result<Vec<String>, GenerateError> {
        Ok(self.load()?.keys().cloned().collect())
    }
}

/// Resolved configuration for one provider client, sourced once at
/// startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    pub model: String,
}

impl ClientConfig {
    /// Resolve the credential for `provider`: environment variable
    /// first, then the store. A missing credential is not an error
    /// here -- the client raises [`GenerateError::MissingCredential`]
    /// when asked to make a call.
    pub fn resolve(
        provider: ProviderKind,
        store: &CredentialStore,
    ) -> Result<Self, GenerateError> {
        let api_key = match std::env::var(provider.env_var()) {
            Ok(v) if !v.trim().is_empty() => Some(v),
            _ => store.get(provider.credential_key())?,
        };
        Ok(ClientConfig {
            provider,
            api_key,
            model: provider.default_model().to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_key_or_empty(&self) -> String {
        self.api_key.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("credentials.toml"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("openai_api_key").unwrap(), None);
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn set_then_get_roundtrips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set("openai_api_key", "sk-test").unwrap();
        store.set("gemini_api_key", "g-test").unwrap();
        assert_eq!(
            store.get("openai_api_key").unwrap().as_deref(),
            Some("sk-test")
        );
        assert_eq!(
            store.keys().unwrap(),
            vec!["gemini_api_key".to_string(), "openai_api_key".to_string()]
        );
    }

    #[test]
    fn set_overwrites_existing_value() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set("openai_api_key", "old").unwrap();
        store.set("openai_api_key", "new").unwrap();
        assert_eq!(store.get("openai_api_key").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn invalid_toml_is_a_store_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        let store = CredentialStore::new(&path);
        assert!(matches!(
            store.get("x"),
            Err(GenerateError::Store(_))
        ));
    }

    #[test]
    fn resolve_reads_store_when_env_is_unset() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set("gemini_api_key", "g-123").unwrap();
        // GEMINI_API_KEY is assumed unset in the test environment.
        let config = ClientConfig::resolve(ProviderKind::Gemini, &store).unwrap();
        if std::env::var(ProviderKind::Gemini.env_var()).is_err() {
            assert_eq!(config.api_key.as_deref(), Some("g-123"));
        }
        assert_eq!(config.model, "gemini-1.5-flash");
    }

    #[test]
    fn resolve_with_nothing_configured_has_no_key() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let config = ClientConfig::resolve(ProviderKind::OpenAi, &store).unwrap();
        if std::env::var(ProviderKind::OpenAi.env_var()).is_err() {
            assert_eq!(config.api_key, None);
            assert_eq!(config.api_key_or_empty(), "");
        }
    }
}
