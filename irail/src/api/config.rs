//! Client configuration.

use std::fmt;
use std::str::FromStr;

use crate::format::FORMAT_ID;

/// Default base URL for the iRail API.
pub const DEFAULT_BASE_URL: &str = "https://api.irail.be";

/// Default maximum concurrent requests. iRail allows 3 requests per second.
const DEFAULT_MAX_CONCURRENT: usize = 3;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error returned when parsing an unrecognized option value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {option}: {value:?}")]
pub struct InvalidOption {
    option: &'static str,
    value: String,
}

/// Language used for station names and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Nl,
    Fr,
    De,
}

impl Language {
    /// Code sent as the `lang` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }
}

impl FromStr for Language {
    type Err = InvalidOption;

    /// Case-insensitive, so `"EN"` and `"en"` both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "nl" => Ok(Language::Nl),
            "fr" => Ok(Language::Fr),
            "de" => Ok(Language::De),
            _ => Err(InvalidOption {
                option: "language",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response format, which also selects the decoder.
///
/// Only JSON is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Json,
}

impl Format {
    /// Identifier sent as the `format` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => FORMAT_ID,
        }
    }
}

impl FromStr for Format {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(FORMAT_ID) {
            Ok(Format::Json)
        } else {
            Err(InvalidOption {
                option: "format",
                value: s.to_string(),
            })
        }
    }
}

/// Configuration for the iRail client.
#[derive(Debug, Clone)]
pub struct IrailConfig {
    /// Base URL for the API (defaults to the public iRail API)
    pub base_url: String,
    /// Language for names and messages
    pub language: Language,
    /// Response format
    pub format: Format,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// User-Agent header; iRail asks clients to identify themselves
    pub user_agent: String,
}

impl IrailConfig {
    /// Create a config with the default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: Language::default(),
            format: Format::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            user_agent: concat!("irail-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the response language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the response format.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

impl Default for IrailConfig {
    fn default() -> Self {
        Self::new()
    }
}
