//! Provider registry: turns configured credential slots into ranked descriptors.
//!
//! Slots are inspected in a fixed order and each present slot contributes one
//! descriptor with a hardcoded priority. The static template descriptor is
//! always appended last so the registry is never empty. The active provider is
//! chosen once, at construction, and never re-selected.

use serde::Serialize;
use thiserror::Error;

use crate::config::ProviderCredentials;
use crate::llm_client::LlmError;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// Gemini's OpenAI-compatible surface, so it shares the chat transport.
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const OLLAMA_DEFAULT_MODEL: &str = "llama3.1";

pub const PRIORITY_GROQ: u32 = 100;
pub const PRIORITY_OLLAMA: u32 = 90;
pub const PRIORITY_GEMINI: u32 = 70;
pub const PRIORITY_OPENAI: u32 = 60;
pub const PRIORITY_TEMPLATE: u32 = 0;

pub const TEMPLATE_PROVIDER: &str = "template";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no AI provider descriptors could be resolved")]
    NoProviders,

    #[error("failed to set up provider transport: {0}")]
    Transport(#[from] LlmError),
}

/// Wire protocol family used to reach a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    /// OpenAI-style `/chat/completions`.
    HostedChat,
    /// Ollama-style `/api/generate` on a local host.
    LocalGenerate,
    /// No network; answers come from the fallback generator.
    StaticTemplate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostClass {
    FreeTier,
    Local,
    Paid,
    None,
}

/// Which model of a provider's triple a task wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    Fast,
    Balanced,
    Creative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSet {
    pub fast: String,
    pub balanced: String,
    pub creative: String,
}

impl ModelSet {
    pub fn new(fast: &str, balanced: &str, creative: &str) -> Self {
        Self {
            fast: fast.to_string(),
            balanced: balanced.to_string(),
            creative: creative.to_string(),
        }
    }

    pub fn uniform(model: &str) -> Self {
        Self::new(model, model, model)
    }

    pub fn for_tier(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast,
            ModelTier::Balanced => &self.balanced,
            ModelTier::Creative => &self.creative,
        }
    }
}

/// Immutable description of one provider. Built at startup, never mutated.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDescriptor {
    pub name: String,
    pub transport: TransportKind,
    pub cost_class: CostClass,
    pub priority: u32,
    pub models: ModelSet,
    pub base_url: String,
    #[serde(skip)]
    api_key: Option<String>,
}

impl std::fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("name", &self.name)
            .field("transport", &self.transport)
            .field("cost_class", &self.cost_class)
            .field("priority", &self.priority)
            .field("models", &self.models)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl ProviderDescriptor {
    pub fn hosted(
        name: &str,
        base_url: &str,
        api_key: &str,
        priority: u32,
        cost_class: CostClass,
        models: ModelSet,
    ) -> Self {
        Self {
            name: name.to_string(),
            transport: TransportKind::HostedChat,
            cost_class,
            priority,
            models,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: Some(api_key.to_string()),
        }
    }

    pub fn local(name: &str, host: &str, priority: u32, models: ModelSet) -> Self {
        Self {
            name: name.to_string(),
            transport: TransportKind::LocalGenerate,
            cost_class: CostClass::Local,
            priority,
            models,
            base_url: host.trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    pub fn template() -> Self {
        Self {
            name: TEMPLATE_PROVIDER.to_string(),
            transport: TransportKind::StaticTemplate,
            cost_class: CostClass::None,
            priority: PRIORITY_TEMPLATE,
            models: ModelSet::uniform(TEMPLATE_PROVIDER),
            base_url: String::new(),
            api_key: None,
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn is_template(&self) -> bool {
        self.transport == TransportKind::StaticTemplate
    }
}

/// Descriptors in registration order plus their priority ranking.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    descriptors: Vec<ProviderDescriptor>,
    /// Indices into `descriptors`, highest priority first. Stable, so equal
    /// priorities keep registration order.
    ranked: Vec<usize>,
}

impl ProviderRegistry {
    pub fn new(descriptors: Vec<ProviderDescriptor>) -> Result<Self, ConfigError> {
        if descriptors.is_empty() {
            return Err(ConfigError::NoProviders);
        }

        let mut ranked: Vec<usize> = (0..descriptors.len()).collect();
        ranked.sort_by_key(|&i| std::cmp::Reverse(descriptors[i].priority));

        Ok(Self {
            descriptors,
            ranked,
        })
    }

    /// Inspects each known credential slot in order: Groq, Ollama, OpenAI, Gemini.
    pub fn from_credentials(creds: &ProviderCredentials) -> Result<Self, ConfigError> {
        let mut descriptors = Vec::new();

        if let Some(key) = &creds.groq_api_key {
            descriptors.push(ProviderDescriptor::hosted(
                "groq",
                GROQ_BASE_URL,
                key,
                PRIORITY_GROQ,
                CostClass::FreeTier,
                ModelSet::new(
                    "llama-3.1-8b-instant",
                    "llama-3.1-70b-versatile",
                    "mixtral-8x7b-32768",
                ),
            ));
        }

        if let Some(host) = &creds.ollama_host {
            let model = creds.ollama_model.as_deref().unwrap_or(OLLAMA_DEFAULT_MODEL);
            descriptors.push(ProviderDescriptor::local(
                "ollama",
                host,
                PRIORITY_OLLAMA,
                ModelSet::uniform(model),
            ));
        }

        if let Some(key) = &creds.openai_api_key {
            descriptors.push(ProviderDescriptor::hosted(
                "openai",
                OPENAI_BASE_URL,
                key,
                PRIORITY_OPENAI,
                CostClass::Paid,
                ModelSet::new("gpt-4o-mini", "gpt-4o", "gpt-4o"),
            ));
        }

        if let Some(key) = &creds.gemini_api_key {
            descriptors.push(ProviderDescriptor::hosted(
                "gemini",
                GEMINI_BASE_URL,
                key,
                PRIORITY_GEMINI,
                CostClass::Paid,
                ModelSet::new("gemini-1.5-flash", "gemini-1.5-pro", "gemini-1.5-pro"),
            ));
        }

        descriptors.push(ProviderDescriptor::template());

        Self::new(descriptors)
    }

    /// The provider used for every call in this process.
    pub fn active(&self) -> &ProviderDescriptor {
        &self.descriptors[self.ranked[0]]
    }

    pub fn by_priority(&self) -> impl Iterator<Item = &ProviderDescriptor> {
        self.ranked.iter().map(|&i| &self.descriptors[i])
    }

    pub fn descriptors(&self) -> &[ProviderDescriptor] {
        &self.descriptors
    }
}
