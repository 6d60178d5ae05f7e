/// LLM Client: the single point of entry for all outbound AI calls in Scholar.
///
/// ARCHITECTURAL RULE: No other module may call a provider API directly.
/// The gateway in `generation` talks to providers only through `Invoker`.
///
/// One attempt per call. Transport failures are returned to the caller,
/// which decides whether to fall back; nothing here retries.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

pub mod chat;
pub mod ollama;
pub mod registry;
pub mod template;

use chat::ChatCompletionsInvoker;
use ollama::OllamaInvoker;
use registry::{ProviderDescriptor, TransportKind};
use template::TemplateInvoker;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("provider '{0}' is missing its credential")]
    MissingCredential(String),

    /// The static template provider never produces text.
    #[error("template provider selected; no model call made")]
    TemplateOnly,
}

/// Sampling knobs for a single call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvokeParams<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub max_tokens: u32,
}

/// A transport capable of turning a prompt into raw model text.
///
/// Implemented once per `TransportKind`; the gateway holds `Arc<dyn Invoker>`
/// so tests can inject scripted doubles.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, prompt: &str, params: &InvokeParams<'_>) -> Result<String, LlmError>;
}

/// Builds the shared HTTP client used by every network transport.
pub fn build_http_client(timeout: Duration) -> Result<Client, LlmError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Picks the transport implementation for a descriptor by its kind.
pub fn build_invoker(
    descriptor: &ProviderDescriptor,
    http: &Client,
) -> Result<Arc<dyn Invoker>, LlmError> {
    let invoker: Arc<dyn Invoker> = match descriptor.transport {
        TransportKind::HostedChat => {
            let api_key = descriptor
                .api_key()
                .ok_or_else(|| LlmError::MissingCredential(descriptor.name.clone()))?;
            Arc::new(ChatCompletionsInvoker::new(
                http.clone(),
                &descriptor.base_url,
                api_key,
            ))
        }
        TransportKind::LocalGenerate => {
            Arc::new(OllamaInvoker::new(http.clone(), &descriptor.base_url))
        }
        TransportKind::StaticTemplate => Arc::new(TemplateInvoker),
    };
    Ok(invoker)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderCredentials;
    use crate::llm_client::registry::ProviderRegistry;

    #[test]
    fn test_build_invoker_for_every_registered_provider() {
        let creds = ProviderCredentials {
            groq_api_key: Some("gsk".to_string()),
            ollama_host: Some("http://localhost:11434".to_string()),
            openai_api_key: Some("sk".to_string()),
            gemini_api_key: Some("gm".to_string()),
            ..Default::default()
        };
        let registry = ProviderRegistry::from_credentials(&creds).unwrap();
        let http = build_http_client(Duration::from_secs(5)).unwrap();

        for descriptor in registry.descriptors() {
            assert!(
                build_invoker(descriptor, &http).is_ok(),
                "no invoker for {}",
                descriptor.name
            );
        }
    }

    #[tokio::test]
    async fn test_template_invoker_never_returns_text() {
        let params = InvokeParams {
            model: "template",
            temperature: 0.7,
            top_p: None,
            max_tokens: 100,
        };
        let result = TemplateInvoker.invoke("anything", &params).await;
        assert!(matches!(result, Err(LlmError::TemplateOnly)));
    }
}
