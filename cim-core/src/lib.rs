//! # CIM Core
//!
//! `cim-core` is the foundational library powering the `cim` CLI. It provides an operation
//! client for a payment gateway's Customer Information Manager: creating, reading, updating,
//! deleting and validating customer profiles, payment profiles and shipping addresses, and
//! running profile-scoped transactions.
//!
//! ## Key Components
//!
//! * **[`CimClient`]:** The main entry point. One method per remote operation; each method
//!   validates its arguments synchronously, assembles the request body and returns a
//!   [`PendingCall`] that resolves to the remote response when awaited.
//! * **[`entity`]:** The domain records (customer, payment profile, address, transaction...)
//!   and their wire fragment serializer.
//! * **[`transport`]:** The [`Transport`] seam and its HTTP implementation, which wraps a
//!   request body in the authenticated envelope and classifies the remote answer.
//!
//! ## Two failure channels
//!
//! * [`InvalidArgument`]: returned by the operation method itself, before anything is sent.
//! * [`CallError`]: produced by awaiting the [`PendingCall`], either a `RemoteFault` reported
//!   by the gateway or a `TransportFailure`.
//!
//! ```rust,no_run
//! use cim_core::{CimClient, ClientConfig, Environment};
//!
//! # async fn run() -> Result<(), cim_core::Error> {
//! let config = ClientConfig::new(Environment::Sandbox, "login-id", "transaction-key");
//! let client = CimClient::connect(config)?;
//!
//! let profile = client.get_customer_profile("1234")?.await?;
//! println!("{profile}");
//! # Ok(())
//! # }
//! ```
pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod transport;
pub mod xml;

pub use client::{CimClient, DynamicCallError, DynamicRequest, PendingCall};
pub use config::{ClientConfig, ConfigError, Credentials, Environment};
pub use error::{CallError, Error, ErrorKind, InvalidArgument};
pub use transport::{Operation, OperationRequest, Transport, http::HttpTransport};

// Re-exports
pub use serde_json;
