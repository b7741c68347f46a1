//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads environment variables.

use crate::constants::{DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::{GuideError, GuideResult};
use std::str::FromStr;
use std::time::Duration;

/// Which response producer answers non-emergency submissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProducerMode {
    /// Canned templates, no network.
    #[default]
    Mock,
    /// Remote chat-completion service.
    Live,
}

impl ProducerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProducerMode::Mock => "mock",
            ProducerMode::Live => "live",
        }
    }
}

impl std::fmt::Display for ProducerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProducerMode {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" | "offline" | "demo" => Ok(ProducerMode::Mock),
            "live" | "openai" => Ok(ProducerMode::Live),
            other => Err(GuideError::InvalidConfig(format!(
                "unknown producer mode '{other}' (expected 'mock' or 'live')"
            ))),
        }
    }
}

/// Settings for the remote completion service.
#[derive(Clone, Debug)]
pub struct CompletionConfig {
    api_base: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    timeout: Option<Duration>,
}

impl CompletionConfig {
    /// Create a new `CompletionConfig`.
    ///
    /// A missing API key is accepted here; the remote service rejects the first request instead.
    pub fn new(
        api_base: String,
        api_key: Option<String>,
        model: String,
        temperature: f32,
        timeout: Option<Duration>,
    ) -> GuideResult<Self> {
        let api_base = api_base.trim().trim_end_matches('/').to_string();
        if api_base.is_empty() {
            return Err(GuideError::InvalidConfig("api base cannot be empty".into()));
        }
        if model.trim().is_empty() {
            return Err(GuideError::InvalidConfig("model cannot be empty".into()));
        }
        if !(0.0..=2.0).contains(&temperature) {
            return Err(GuideError::InvalidConfig(format!(
                "temperature must be within 0.0..=2.0, got {temperature}"
            )));
        }

        Ok(Self {
            api_base,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model,
            temperature,
            timeout,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            api_key: None,
            model: DEFAULT_MODEL.into(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    mode: ProducerMode,
    completion: CompletionConfig,
}

impl CoreConfig {
    pub fn new(mode: ProducerMode, completion: CompletionConfig) -> Self {
        Self { mode, completion }
    }

    pub fn mode(&self) -> ProducerMode {
        self.mode
    }

    pub fn completion(&self) -> &CompletionConfig {
        &self.completion
    }
}

/// Normalise an optional environment value: trimmed, with empty treated as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse the producer mode from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`ProducerMode::Mock`].
pub fn producer_mode_from_env_value(value: Option<String>) -> GuideResult<ProducerMode> {
    Ok(non_empty(value)
        .map(|v| v.parse::<ProducerMode>())
        .transpose()?
        .unwrap_or_default())
}

/// Parse the sampling temperature from an optional string value.
pub fn temperature_from_env_value(value: Option<String>) -> GuideResult<f32> {
    non_empty(value)
        .map(|v| {
            v.parse::<f32>().map_err(|e| {
                GuideError::InvalidConfig(format!("temperature '{v}' is not a number: {e}"))
            })
        })
        .transpose()
        .map(|t| t.unwrap_or(DEFAULT_TEMPERATURE))
}

/// Parse an optional request timeout given in whole seconds.
///
/// Absent means no explicit timeout.
pub fn timeout_from_env_value(value: Option<String>) -> GuideResult<Option<Duration>> {
    non_empty(value)
        .map(|v| {
            v.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                GuideError::InvalidConfig(format!("timeout '{v}' is not a whole number: {e}"))
            })
        })
        .transpose()
}

/// Build a [`CoreConfig`] from raw environment values.
///
/// Takes the values as arguments rather than reading the process environment so callers and
/// tests control exactly what is seen.
pub fn core_config_from_env_values(
    mode: Option<String>,
    api_base: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    temperature: Option<String>,
    timeout_secs: Option<String>,
) -> GuideResult<CoreConfig> {
    let completion = CompletionConfig::new(
        non_empty(api_base).unwrap_or_else(|| DEFAULT_API_BASE.into()),
        non_empty(api_key),
        non_empty(model).unwrap_or_else(|| DEFAULT_MODEL.into()),
        temperature_from_env_value(temperature)?,
        timeout_from_env_value(timeout_secs)?,
    )?;

    Ok(CoreConfig::new(
        producer_mode_from_env_value(mode)?,
        completion,
    ))
}

/// Read a [`CoreConfig`] from the process environment.
///
/// Intended to be called exactly once at startup.
pub fn core_config_from_env() -> GuideResult<CoreConfig> {
    core_config_from_env_values(
        std::env::var("MEDGUIDE_MODE").ok(),
        std::env::var("MEDGUIDE_API_BASE").ok(),
        std::env::var("OPENAI_API_KEY").ok(),
        std::env::var("MEDGUIDE_MODEL").ok(),
        std::env::var("MEDGUIDE_TEMPERATURE").ok(),
        std::env::var("MEDGUIDE_REQUEST_TIMEOUT_SECS").ok(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mock_mode() {
        assert_eq!(
            producer_mode_from_env_value(None).expect("default"),
            ProducerMode::Mock
        );
        assert_eq!(
            producer_mode_from_env_value(Some("  ".into())).expect("blank"),
            ProducerMode::Mock
        );
        assert_eq!(
            producer_mode_from_env_value(Some("LIVE".into())).expect("live"),
            ProducerMode::Live
        );
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = producer_mode_from_env_value(Some("remote".into())).expect_err("unknown");
        match err {
            GuideError::InvalidConfig(msg) => assert!(msg.contains("remote")),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn builds_defaults_from_empty_environment() {
        let cfg = core_config_from_env_values(None, None, None, None, None, None).expect("cfg");
        assert_eq!(cfg.mode(), ProducerMode::Mock);
        assert_eq!(cfg.completion().model(), DEFAULT_MODEL);
        assert_eq!(cfg.completion().api_base(), DEFAULT_API_BASE);
        assert_eq!(cfg.completion().temperature(), DEFAULT_TEMPERATURE);
        assert!(cfg.completion().api_key().is_none());
        assert!(cfg.completion().timeout().is_none());
    }

    #[test]
    fn trims_trailing_slash_from_api_base() {
        let cfg = core_config_from_env_values(
            Some("live".into()),
            Some("http://localhost:8080/v1/".into()),
            Some("sk-test".into()),
            Some("local-model".into()),
            Some("0.7".into()),
            Some("15".into()),
        )
        .expect("cfg");
        assert_eq!(cfg.completion().api_base(), "http://localhost:8080/v1");
        assert_eq!(cfg.completion().api_key(), Some("sk-test"));
        assert_eq!(cfg.completion().timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn rejects_bad_temperature() {
        assert!(temperature_from_env_value(Some("warm".into())).is_err());
        let err = core_config_from_env_values(None, None, None, None, Some("3.5".into()), None)
            .expect_err("out of range");
        assert!(matches!(err, GuideError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_bad_timeout() {
        assert!(timeout_from_env_value(Some("soon".into())).is_err());
    }
}
