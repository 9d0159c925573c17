// Orchestrator - tries the remote generator, falls back to templates on any failure

use super::client::{ChatCompletionClient, CompletionBackend, CompletionRequest};
use super::config::GeneratorConfig;
use super::error::{GenerationError, OrchestratorError};
use super::fallback::FallbackGenerator;
use super::prompts::compose_instruction;
use super::types::{ArtistProfile, ContentBundle, ContentSource, GeneratedContent};
use std::sync::Arc;

/// Produces a content bundle for an artist, remotely when possible.
///
/// The credential is always passed in by the caller. A bundle comes wholly
/// from one source: a remote result that fails to parse or to pass the shape
/// check is discarded, never merged with template content.
pub struct Orchestrator {
    config: GeneratorConfig,
    backend: Arc<dyn CompletionBackend>,
}

impl Orchestrator {
    /// Create an orchestrator for the given model with default settings
    pub fn new(model: impl Into<String>) -> Result<Self, OrchestratorError> {
        let config = GeneratorConfig {
            model: model.into(),
            ..GeneratorConfig::default()
        };
        Self::with_config(config)
    }

    /// Create an orchestrator talking to the configured endpoint
    pub fn with_config(config: GeneratorConfig) -> Result<Self, OrchestratorError> {
        let client = ChatCompletionClient::new(config.endpoint.clone(), config.timeout())?;
        Ok(Self::with_backend(config, Arc::new(client)))
    }

    /// Create an orchestrator with a custom completion backend
    pub fn with_backend(config: GeneratorConfig, backend: Arc<dyn CompletionBackend>) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a bundle; never fails
    pub async fn generate(
        &self,
        profile: &ArtistProfile,
        credential: Option<&str>,
    ) -> ContentBundle {
        self.generate_with_source(profile, credential).await.bundle
    }

    /// Generate a bundle and report which source produced it
    pub async fn generate_with_source(
        &self,
        profile: &ArtistProfile,
        credential: Option<&str>,
    ) -> GeneratedContent {
        self.generate_remote(profile, credential)
            .await
            .map(|bundle| {
                tracing::info!(artist = %profile.name, "Using remotely generated content");
                GeneratedContent::new(bundle, ContentSource::Remote)
            })
            .unwrap_or_else(|err| {
                match &err {
                    GenerationError::MissingCredential => tracing::info!(
                        artist = %profile.name,
                        "No credential, using template content"
                    ),
                    _ => tracing::warn!(
                        artist = %profile.name,
                        error = %err,
                        "Remote generation failed, using template content"
                    ),
                }
                GeneratedContent::new(FallbackGenerator::generate(profile), ContentSource::Fallback)
            })
    }

    async fn generate_remote(
        &self,
        profile: &ArtistProfile,
        credential: Option<&str>,
    ) -> Result<ContentBundle, GenerationError> {
        let credential = credential
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(GenerationError::MissingCredential)?;

        let request = self.build_request(profile);
        let content = self.backend.complete(&request, credential).await?;

        let bundle: ContentBundle = serde_json::from_str(&content)?;
        bundle.check_shape()?;

        Ok(bundle)
    }

    fn build_request(&self, profile: &ArtistProfile) -> CompletionRequest {
        CompletionRequest::json_instruction(
            self.config.model.clone(),
            compose_instruction(self.config.role, profile),
            self.config.temperature(),
            self.config.max_tokens(),
        )
    }
}
