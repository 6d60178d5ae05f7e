use async_trait::async_trait;

use crate::llm_client::{InvokeParams, Invoker, LlmError};

/// The always-available lowest-priority provider. It performs no I/O; the
/// gateway sees `TemplateOnly` and answers from the fallback generator.
pub struct TemplateInvoker;

#[async_trait]
impl Invoker for TemplateInvoker {
    async fn invoke(&self, _prompt: &str, _params: &InvokeParams<'_>) -> Result<String, LlmError> {
        Err(LlmError::TemplateOnly)
    }
}
