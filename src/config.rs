use crate::ai::client::DEFAULT_GEMINI_MODEL;
use crate::error::ConfigError;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSourceKind {
    /// Ask the generative model.
    Model,
    /// Return fixed text after a delay.
    Mock,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub timeout: Option<Duration>,
    pub send_delay: Duration,
    pub profile_source: ProfileSourceKind,
    pub profile_delay: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Blank values count as unset.
        let lookup = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = lookup("GEMINI_API_KEY").ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let timeout = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(v) => Some(Duration::from_secs(parse_number("GEMINI_TIMEOUT_SECS", &v)?)),
            None => None,
        };

        let send_delay = Duration::from_millis(match lookup("FOLIO_SEND_DELAY_MS") {
            Some(v) => parse_number("FOLIO_SEND_DELAY_MS", &v)?,
            None => 1000,
        });

        let profile_source = match lookup("FOLIO_PROFILE_SOURCE").as_deref() {
            None | Some("model") => ProfileSourceKind::Model,
            Some("mock") => ProfileSourceKind::Mock,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "FOLIO_PROFILE_SOURCE",
                    value: other.to_string(),
                });
            }
        };

        let profile_delay = Duration::from_millis(match lookup("FOLIO_PROFILE_DELAY_MS") {
            Some(v) => parse_number("FOLIO_PROFILE_DELAY_MS", &v)?,
            None => 1500,
        });

        Ok(Self {
            api_key,
            model,
            timeout,
            send_delay,
            profile_source,
            profile_delay,
        })
    }
}

fn parse_number(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}
