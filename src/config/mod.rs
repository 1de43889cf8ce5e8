use std::env;
use std::time::Duration;
use anyhow::{Result, Context};
use tracing::{debug, info, warn};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/v1/resume/upload";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Read on its own so logging can start before the rest of the config.
    pub fn from_env() -> Self {
        Self::parse(env::var("LOG_FORMAT").ok().as_deref())
    }

    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("json") => LogFormat::Json,
            Some("pretty") | Some("") | None => LogFormat::Pretty,
            Some(other) => {
                warn!("Unknown LOG_FORMAT {:?} (using default: pretty)", other);
                LogFormat::Pretty
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    /// Transport timeout. `None` leaves the request unbounded.
    pub request_timeout_seconds: Option<u64>,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_seconds: None,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Parses the environment. Call [`Config::validate`] once any overrides
    /// have been applied.
    pub fn from_env() -> Self {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, unvalidated.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("EXTRACTION_ENDPOINT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                info!("EXTRACTION_ENDPOINT not set, using default: {}", DEFAULT_ENDPOINT);
                DEFAULT_ENDPOINT.to_string()
            });

        let request_timeout_seconds = Self::parse_optional_var(&lookup, "REQUEST_TIMEOUT_SECONDS");

        let log_format = LogFormat::parse(lookup("LOG_FORMAT").as_deref());

        let config = Config {
            endpoint,
            request_timeout_seconds,
            log_format,
        };

        debug!("Configuration parsed: {:?}", config);
        config
    }

    fn parse_optional_var<F, T>(lookup: &F, var_name: &str) -> Option<T>
    where
        F: Fn(&str) -> Option<String>,
        T: std::str::FromStr + std::fmt::Debug,
        T::Err: std::fmt::Display,
    {
        let raw = lookup(var_name)?;
        match raw.trim().parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Failed to parse {}: {} (leaving unset)", var_name, e);
                None
            }
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.request_timeout_seconds = Some(seconds);
        self
    }

    /// Command-line values win over the environment.
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Self {
        if let Some(endpoint) = endpoint {
            info!("Endpoint overridden from command line: {}", endpoint);
            self.endpoint = endpoint;
        }
        if timeout_seconds.is_some() {
            self.request_timeout_seconds = timeout_seconds;
        }
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<()> {
        self.check().context("Invalid configuration")?;
        info!("Configuration loaded successfully: {:?}", self);
        Ok(())
    }

    fn check(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint)
            .with_context(|| format!("endpoint is not a valid URL: {}", self.endpoint))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow::anyhow!(
                "endpoint must use http or https, got {}",
                url.scheme()
            ));
        }
        if self.request_timeout_seconds == Some(0) {
            return Err(anyhow::anyhow!("request timeout must be greater than 0"));
        }
        Ok(())
    }
}
