//! # Client Configuration
//!
//! Process-scoped settings shared by every operation of a client: which gateway environment
//! to talk to, the merchant credentials used to authenticate the envelope, and an optional
//! reference id echoed back by the gateway.
use std::{fmt, str::FromStr};

pub const SANDBOX_ENDPOINT: &str = "https://apitest.authorize.net/xml/v1/request.api";
pub const PRODUCTION_ENDPOINT: &str = "https://api.authorize.net/xml/v1/request.api";

pub const ENV_API_LOGIN_ID: &str = "CIM_API_LOGIN_ID";
pub const ENV_TRANSACTION_KEY: &str = "CIM_TRANSACTION_KEY";
pub const ENV_ENVIRONMENT: &str = "CIM_ENVIRONMENT";
pub const ENV_REF_ID: &str = "CIM_REF_ID";
pub const ENV_ENDPOINT: &str = "CIM_ENDPOINT";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable '{0}'")]
    MissingVariable(&'static str),
    #[error("Unknown environment '{0}', expected 'sandbox' or 'production'")]
    UnknownEnvironment(String),
}

/// The gateway endpoint mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_ENDPOINT,
            Environment::Production => PRODUCTION_ENDPOINT,
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" | "test" => Ok(Environment::Sandbox),
            "production" | "live" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => f.write_str("sandbox"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// Merchant account credentials (API login id + transaction key).
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_login_id: String,
    pub transaction_key: String,
}

impl Credentials {
    pub fn new(api_login_id: impl Into<String>, transaction_key: impl Into<String>) -> Self {
        Self {
            api_login_id: api_login_id.into(),
            transaction_key: transaction_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_login_id", &self.api_login_id)
            .field("transaction_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: Environment,
    pub credentials: Credentials,
    /// Overrides the environment's endpoint (local proxies, stub gateways).
    pub endpoint: Option<String>,
    pub ref_id: Option<String>,
}

impl ClientConfig {
    pub fn new(
        environment: Environment,
        api_login_id: impl Into<String>,
        transaction_key: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            credentials: Credentials::new(api_login_id, transaction_key),
            endpoint: None,
            ref_id: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_ref_id(mut self, ref_id: impl Into<String>) -> Self {
        self.ref_id = Some(ref_id.into());
        self
    }

    /// The URL envelopes are posted to.
    pub fn endpoint_url(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.environment.endpoint())
    }

    /// Builds a configuration from settings keyed by their `CIM_*` variable names.
    ///
    /// `CIM_API_LOGIN_ID` and `CIM_TRANSACTION_KEY` are required. `CIM_ENVIRONMENT` defaults to
    /// the sandbox. Blank values count as unset.
    ///
    /// `ClientConfig::from_lookup(|key| std::env::var(key).ok())` reads the process environment.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_empty = |key| lookup(key).filter(|v: &String| !v.trim().is_empty());

        let api_login_id =
            non_empty(ENV_API_LOGIN_ID).ok_or(ConfigError::MissingVariable(ENV_API_LOGIN_ID))?;
        let transaction_key = non_empty(ENV_TRANSACTION_KEY)
            .ok_or(ConfigError::MissingVariable(ENV_TRANSACTION_KEY))?;
        let environment = non_empty(ENV_ENVIRONMENT)
            .map(|v| v.parse::<Environment>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            environment,
            credentials: Credentials::new(api_login_id, transaction_key),
            endpoint: non_empty(ENV_ENDPOINT),
            ref_id: non_empty(ENV_REF_ID),
        })
    }
}
