//! AI Provider Gateway: the `generate` entry point used by every handler.
//!
//! Flow: region resolve → build prompt → invoke provider → normalize →
//!       (on any failure) fallback template.
//!
//! `generate` is total: transport and shape errors are absorbed here and the
//! caller always receives a result honouring the task's shape contract. The
//! returned `Generation` says whether a provider or the fallback produced it.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::generation::fallback::fallback_result;
use crate::generation::normalizer::normalize;
use crate::generation::prompt_builder::build_prompt;
use crate::generation::region::RegionProfile;
use crate::generation::task::{GenerationRequest, TaskKind};
use crate::llm_client::registry::{ConfigError, ProviderDescriptor, ProviderRegistry};
use crate::llm_client::{build_http_client, build_invoker, InvokeParams, Invoker, LlmError};

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cause", rename_all = "snake_case")]
pub enum FallbackReason {
    /// Only the static template provider is configured.
    TemplateProvider,
    Transport { provider: String, detail: String },
    Shape { provider: String, detail: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultSource {
    Provider { provider: String, model: String },
    Fallback { reason: FallbackReason },
}

/// A task-shaped result plus where it came from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    pub request_id: Uuid,
    pub task: TaskKind,
    pub result: Value,
    pub source: ResultSource,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Gateway
// ────────────────────────────────────────────────────────────────────────────

struct ProviderSlot {
    descriptor: ProviderDescriptor,
    invoker: Arc<dyn Invoker>,
}

/// Immutable after construction; share it behind an `Arc`.
pub struct Gateway {
    registry: ProviderRegistry,
    /// Providers tried per call, in order. Only the active one unless failover is on.
    chain: Vec<ProviderSlot>,
    failover: bool,
}

impl Gateway {
    /// Builds the registry from configured credentials and one shared HTTP client.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let registry = ProviderRegistry::from_credentials(&config.providers)?;
        let http = build_http_client(Duration::from_secs(config.ai_request_timeout_secs))?;
        Self::new(registry, config.ai_failover, |descriptor| {
            build_invoker(descriptor, &http)
        })
    }

    /// Assembles a gateway over `registry`, asking `make_invoker` for the
    /// transport of each provider that can be called.
    pub fn new<F>(
        registry: ProviderRegistry,
        failover: bool,
        mut make_invoker: F,
    ) -> Result<Self, ConfigError>
    where
        F: FnMut(&ProviderDescriptor) -> Result<Arc<dyn Invoker>, LlmError>,
    {
        let mut selected: Vec<&ProviderDescriptor> = if failover {
            registry.by_priority().filter(|d| !d.is_template()).collect()
        } else {
            vec![registry.active()]
        };
        if selected.is_empty() {
            selected.push(registry.active());
        }

        let mut chain = Vec::with_capacity(selected.len());
        for descriptor in selected {
            chain.push(ProviderSlot {
                descriptor: descriptor.clone(),
                invoker: make_invoker(descriptor)?,
            });
        }

        info!(
            "AI gateway ready: active provider '{}' (priority {}), {} registered, failover={}",
            registry.active().name,
            registry.active().priority,
            registry.descriptors().len(),
            failover
        );

        Ok(Self {
            registry,
            chain,
            failover,
        })
    }

    pub fn active(&self) -> &ProviderDescriptor {
        self.registry.active()
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn failover(&self) -> bool {
        self.failover
    }

    /// Runs one generation. Never fails: degraded calls return the fallback.
    pub async fn generate(&self, request: &GenerationRequest) -> Generation {
        let request_id = Uuid::new_v4();
        let region = RegionProfile::resolve(request.profile.country.as_deref());
        let params = request.task.params();
        let prompt = build_prompt(request, region);

        info!(
            "Generating {} for region {} (request {})",
            request.task.as_str(),
            region.code,
            request_id
        );

        let mut reason = FallbackReason::TemplateProvider;

        for slot in &self.chain {
            let provider = &slot.descriptor.name;
            let model = slot.descriptor.models.for_tier(params.tier);
            let invoke_params = InvokeParams {
                model,
                temperature: params.temperature,
                top_p: params.top_p,
                max_tokens: params.max_tokens,
            };

            match slot.invoker.invoke(&prompt, &invoke_params).await {
                Ok(text) => match normalize(request.task, &text) {
                    Ok(result) => {
                        info!(
                            "Generated {} via {} ({}) (request {})",
                            request.task.as_str(),
                            provider,
                            model,
                            request_id
                        );
                        return Generation {
                            request_id,
                            task: request.task,
                            result,
                            source: ResultSource::Provider {
                                provider: provider.clone(),
                                model: model.to_string(),
                            },
                            generated_at: Utc::now(),
                        };
                    }
                    Err(e) => {
                        warn!(
                            "{} returned unusable {} output (request {}): {e}",
                            provider,
                            request.task.as_str(),
                            request_id
                        );
                        reason = FallbackReason::Shape {
                            provider: provider.clone(),
                            detail: e.to_string(),
                        };
                    }
                },
                Err(LlmError::TemplateOnly) => {
                    debug!("Template provider active; skipping model call (request {request_id})");
                    reason = FallbackReason::TemplateProvider;
                }
                Err(e) => {
                    warn!(
                        "{} call failed for {} (request {}): {e}",
                        provider,
                        request.task.as_str(),
                        request_id
                    );
                    reason = FallbackReason::Transport {
                        provider: provider.clone(),
                        detail: e.to_string(),
                    };
                }
            }
        }

        if reason != FallbackReason::TemplateProvider {
            warn!(
                "Serving fallback {} (request {})",
                request.task.as_str(),
                request_id
            );
        }

        Generation {
            request_id,
            task: request.task,
            result: fallback_result(request, region),
            source: ResultSource::Fallback { reason },
            generated_at: Utc::now(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
