//! Task types, their sampling parameters, shape contracts and request inputs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm_client::registry::ModelTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Resume,
    ProfileOptimization,
    NetworkingSuggestions,
    ConnectionMessage,
}

/// Per-task knobs sent with every provider call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskParams {
    pub tier: ModelTier,
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub max_tokens: u32,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Resume,
        TaskKind::ProfileOptimization,
        TaskKind::NetworkingSuggestions,
        TaskKind::ConnectionMessage,
    ];

    /// Short messages run cold and short; networking ideas run hot.
    pub fn params(self) -> TaskParams {
        match self {
            TaskKind::Resume => TaskParams {
                tier: ModelTier::Balanced,
                temperature: 0.7,
                top_p: Some(0.8),
                max_tokens: 3000,
            },
            TaskKind::ProfileOptimization => TaskParams {
                tier: ModelTier::Balanced,
                temperature: 0.7,
                top_p: None,
                max_tokens: 2500,
            },
            TaskKind::NetworkingSuggestions => TaskParams {
                tier: ModelTier::Creative,
                temperature: 0.8,
                top_p: None,
                max_tokens: 2000,
            },
            TaskKind::ConnectionMessage => TaskParams {
                tier: ModelTier::Fast,
                temperature: 0.6,
                top_p: None,
                max_tokens: 800,
            },
        }
    }

    /// Top-level keys every result for this task must carry.
    pub fn required_keys(self) -> &'static [&'static str] {
        match self {
            TaskKind::Resume => &["contact", "summary"],
            TaskKind::ProfileOptimization => &["profileScore", "headline", "quickWins"],
            TaskKind::NetworkingSuggestions => &["targetCompanies", "connectionMessages"],
            TaskKind::ConnectionMessage => &["messages"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::Resume => "resume",
            TaskKind::ProfileOptimization => "profile_optimization",
            TaskKind::NetworkingSuggestions => "networking_suggestions",
            TaskKind::ConnectionMessage => "connection_message",
        }
    }
}

/// Loosely-typed student profile as sent by the dashboard.
/// Every field is optional; the prompt builder substitutes placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub target_role: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub experience: Option<Value>,
    pub education: Option<Value>,
    pub skills: Option<Value>,
    pub projects: Option<Value>,
}

/// The person a connection message is addressed to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionTarget {
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub target: Option<ConnectionTarget>,
    /// Why the student is reaching out ("alumni", "job referral", ...).
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub task: TaskKind,
    pub profile: ProfileInput,
    pub options: GenerateOptions,
}

impl GenerationRequest {
    pub fn new(task: TaskKind, profile: ProfileInput) -> Self {
        Self {
            task,
            profile,
            options: GenerateOptions::default(),
        }
    }

    pub fn connection_message(
        profile: ProfileInput,
        target: ConnectionTarget,
        context: Option<String>,
    ) -> Self {
        Self {
            task: TaskKind::ConnectionMessage,
            profile,
            options: GenerateOptions {
                target: Some(target),
                context,
            },
        }
    }
}

/// Returns the trimmed value, or `None` when absent or blank.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
