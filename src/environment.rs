use reqwest::Url;
use std::fmt::{Debug, Display, Formatter};
use thiserror::Error;

/// Variable holding the table service base URL.
pub const SERVICE_URL_VAR: &str = "SUPABASE_URL";
/// Variable holding the public (anon) API key.
pub const API_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} is not an http(s) URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Connection details for the hosted table service.
#[derive(Clone, PartialEq, Eq)]
pub struct Environment {
    service_url: Url,
    api_key: String,
}

impl Environment {
    pub fn new(service_url: &str, api_key: &str) -> Result<Self, EnvironmentError> {
        let invalid = || EnvironmentError::InvalidUrl {
            var: SERVICE_URL_VAR,
            value: service_url.to_string(),
        };
        let url = Url::parse(service_url).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if api_key.trim().is_empty() {
            return Err(EnvironmentError::Missing(API_KEY_VAR));
        }
        Ok(Self {
            service_url: url,
            api_key: api_key.to_string(),
        })
    }

    /// Reads both values from the process environment.
    pub fn from_env() -> Result<Self, EnvironmentError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads both values through `lookup`. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnvironmentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(EnvironmentError::Missing(name))
        };
        let service_url = read(SERVICE_URL_VAR)?;
        let api_key = read(API_KEY_VAR)?;
        Self::new(service_url.trim(), api_key.trim())
    }

    /// Base of the REST interface, e.g. `https://xyz.supabase.co/rest/v1`.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.service_url.as_str().trim_end_matches('/'))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Host name, for display.
    pub fn host(&self) -> &str {
        self.service_url.host_str().unwrap_or("unknown host")
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.host())
    }
}

// The key stays out of logs.
impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment {{ URL: {}, key: <redacted> }}", self.service_url)
    }
}
