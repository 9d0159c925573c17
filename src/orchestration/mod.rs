// Content generation - remote chat-completion with deterministic template fallback

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod orchestrator;
pub mod prompts;
pub mod types;

pub use client::{ChatCompletionClient, CompletionBackend, CompletionRequest};
pub use config::GeneratorConfig;
pub use error::{ConfigError, GenerationError, OrchestratorError, ProfileError};
pub use fallback::FallbackGenerator;
pub use orchestrator::Orchestrator;
pub use prompts::MarketingRole;
pub use types::*;
