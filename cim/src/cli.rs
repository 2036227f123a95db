//! # CLI
//!
//! This module defines the command-line interface of `cim` using `clap`.
//!
//! Connection settings are global flags, each with an environment variable fallback, so that
//! credentials never have to appear on the command line.
use anyhow::Context;
use cim_core::{
    ClientConfig, Environment, Operation,
    config::{ENV_API_LOGIN_ID, ENV_ENDPOINT, ENV_ENVIRONMENT, ENV_REF_ID, ENV_TRANSACTION_KEY},
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cim", version, about = "Customer information manager CLI")]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct ConnectionArgs {
    /// Gateway environment: sandbox or production
    #[arg(long, global = true, env = ENV_ENVIRONMENT, default_value = "sandbox", value_parser = parse_environment)]
    pub environment: Environment,

    /// Override the gateway URL (e.g. a local stub or a proxy)
    #[arg(long, global = true, env = ENV_ENDPOINT)]
    pub endpoint: Option<String>,

    /// Merchant reference id echoed back by the gateway
    #[arg(long, global = true, env = ENV_REF_ID)]
    pub ref_id: Option<String>,

    #[arg(long, global = true, env = ENV_API_LOGIN_ID, hide_env_values = true)]
    pub api_login_id: Option<String>,

    #[arg(long, global = true, env = ENV_TRANSACTION_KEY, hide_env_values = true)]
    pub transaction_key: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Call a gateway operation
    ///
    /// The body is validated locally before anything is sent.
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// cim call getCustomerProfile --body '1234'
    /// cim call deleteCustomerPaymentProfile --body '{"customerProfileId": "10", "customerPaymentProfileId": "20"}'
    /// ```
    Call {
        /// Operation name (e.g. getCustomerProfile)
        #[arg(value_parser = parse_operation)]
        operation: Operation,
        /// JSON body of the operation
        #[arg(long, value_parser = parse_body, default_value = "null")]
        body: serde_json::Value,
    },

    /// List every operation name accepted by `call`
    Operations,
}

impl ConnectionArgs {
    /// Builds the client configuration. Credentials are only required to call operations.
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        ClientConfig::from_lookup(|key| self.setting(key)).with_context(|| {
            format!(
                "Pass --api-login-id and --transaction-key, \
                 or set {ENV_API_LOGIN_ID} and {ENV_TRANSACTION_KEY}"
            )
        })
    }

    /// Flags already carry their environment fallback.
    fn setting(&self, key: &str) -> Option<String> {
        match key {
            ENV_ENVIRONMENT => Some(self.environment.to_string()),
            ENV_ENDPOINT => self.endpoint.clone(),
            ENV_REF_ID => self.ref_id.clone(),
            ENV_API_LOGIN_ID => self.api_login_id.clone(),
            ENV_TRANSACTION_KEY => self.transaction_key.clone(),
            _ => None,
        }
    }
}

fn parse_environment(value: &str) -> Result<Environment, String> {
    value.parse().map_err(|e| format!("{e}"))
}

fn parse_operation(value: &str) -> Result<Operation, String> {
    value
        .parse()
        .map_err(|e| format!("{e}. Run `cim operations` to list them"))
}

fn parse_body(value: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(value).map_err(|e| format!("Invalid JSON: {e}"))
}
