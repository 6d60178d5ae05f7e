use anyhow::{Context, Result};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Credential slots for the AI backends. A slot is present when its
/// environment variable is set to a non-empty value.
#[derive(Clone, Default)]
pub struct ProviderCredentials {
    pub groq_api_key: Option<String>,
    pub ollama_host: Option<String>,
    pub ollama_model: Option<String>,
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("groq_api_key", &self.groq_api_key.as_ref().map(|_| "***"))
            .field("ollama_host", &self.ollama_host)
            .field("ollama_model", &self.ollama_model)
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "***"))
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub frontend_url: String,
    /// Try lower-priority providers before falling back to templates.
    pub ai_failover: bool,
    pub ai_request_timeout_secs: u64,
    pub providers: ProviderCredentials,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            ai_failover: parse_flag(optional_env("AI_FAILOVER").as_deref())
                .context("AI_FAILOVER must be true/false")?,
            ai_request_timeout_secs: parse_timeout_secs(
                optional_env("AI_REQUEST_TIMEOUT_SECS").as_deref(),
            )
            .context("AI_REQUEST_TIMEOUT_SECS must be a positive whole number of seconds")?,
            providers: ProviderCredentials {
                groq_api_key: optional_env("GROQ_API_KEY"),
                ollama_host: optional_env("OLLAMA_HOST"),
                ollama_model: optional_env("OLLAMA_MODEL"),
                openai_api_key: optional_env("OPENAI_API_KEY"),
                gemini_api_key: optional_env("GEMINI_API_KEY"),
            },
        })
    }
}

/// Reads an environment variable, treating empty or whitespace-only values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: Option<&str>) -> Result<bool> {
    match value.map(str::to_ascii_lowercase).as_deref() {
        None => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => anyhow::bail!("unrecognised boolean value '{other}'"),
    }
}

fn parse_timeout_secs(value: Option<&str>) -> Result<u64> {
    match value {
        None => Ok(DEFAULT_REQUEST_TIMEOUT_SECS),
        Some(raw) => match raw.parse::<u64>()? {
            0 => anyhow::bail!("timeout of 0 seconds would fail every provider call"),
            secs => Ok(secs),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_defaults_to_false() {
        assert!(!parse_flag(None).unwrap());
    }

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag(Some("TRUE")).unwrap());
        assert!(parse_flag(Some("1")).unwrap());
        assert!(!parse_flag(Some("off")).unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_garbage() {
        assert!(parse_flag(Some("maybe")).is_err());
    }

    #[test]
    fn test_timeout_defaults_to_120() {
        assert_eq!(parse_timeout_secs(None).unwrap(), 120);
        assert_eq!(parse_timeout_secs(Some("30")).unwrap(), 30);
    }

    #[test]
    fn test_timeout_rejects_zero_and_garbage() {
        assert!(parse_timeout_secs(Some("0")).is_err());
        assert!(parse_timeout_secs(Some("-5")).is_err());
        assert!(parse_timeout_secs(Some("soon")).is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_keys() {
        let creds = ProviderCredentials {
            groq_api_key: Some("gsk_secret".to_string()),
            ..Default::default()
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains("***"));
    }
}
