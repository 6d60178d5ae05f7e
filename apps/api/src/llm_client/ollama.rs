//! Local generate transport for an Ollama host.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_client::{InvokeParams, Invoker, LlmError};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
    eval_count: Option<u32>,
}

/// Posts the literal prompt to `{host}/api/generate`, non-streaming.
pub struct OllamaInvoker {
    client: Client,
    endpoint: String,
}

impl OllamaInvoker {
    pub fn new(client: Client, host: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/generate", host.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl Invoker for OllamaInvoker {
    async fn invoke(&self, prompt: &str, params: &InvokeParams<'_>) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: params.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: params.temperature,
                top_p: params.top_p,
                num_predict: params.max_tokens,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let generated: GenerateResponse = response.json().await?;
        debug!(
            "Ollama generate succeeded: model={}, eval_count={:?}",
            params.model, generated.eval_count
        );

        let text = generated.response.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::spawn_stub;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::time::Duration;

    fn params() -> InvokeParams<'static> {
        InvokeParams {
            model: "llama3.1",
            temperature: 0.8,
            top_p: None,
            max_tokens: 2000,
        }
    }

    fn client() -> Client {
        crate::llm_client::build_http_client(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_invoke_sends_non_streaming_generate() {
        let router = Router::new().route(
            "/api/generate",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["model"], "llama3.1");
                assert_eq!(body["prompt"], "suggest contacts");
                assert_eq!(body["stream"], false);
                assert_eq!(body["options"]["num_predict"], 2000);
                assert!(body["options"].get("top_p").is_none());
                Json(json!({"response": "{\"targetCompanies\": []}", "done": true, "eval_count": 12}))
            }),
        );
        let base = spawn_stub(router).await;

        let invoker = OllamaInvoker::new(client(), &format!("{base}/"));
        let text = invoker.invoke("suggest contacts", &params()).await.unwrap();
        assert_eq!(text, "{\"targetCompanies\": []}");
    }

    #[tokio::test]
    async fn test_server_error_maps_to_api_error() {
        let router = Router::new().route(
            "/api/generate",
            post(|| async { (StatusCode::NOT_FOUND, "model 'llama3.1' not found") }),
        );
        let base = spawn_stub(router).await;

        let invoker = OllamaInvoker::new(client(), &base);
        match invoker.invoke("x", &params()).await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert!(message.contains("not found"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_response_is_empty_content() {
        let router = Router::new().route(
            "/api/generate",
            post(|| async { Json(json!({"response": "   ", "done": true})) }),
        );
        let base = spawn_stub(router).await;

        let invoker = OllamaInvoker::new(client(), &base);
        let result = invoker.invoke("x", &params()).await;
        assert!(matches!(result, Err(LlmError::EmptyContent)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let invoker = OllamaInvoker::new(client(), &format!("http://{addr}"));
        let result = invoker.invoke("x", &params()).await;
        assert!(matches!(result, Err(LlmError::Http(_))));
    }
}
