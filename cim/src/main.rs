//! # CIM CLI Entry Point
//!
//! The main executable for the `cim` tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Parses command-line arguments using [`cli::Cli`] and installs logging.
//! 2. **Validation**: Decodes the JSON body and validates it through `cim_core`, before any
//!    network activity.
//! 3. **Execution**: Awaits the validated call against the gateway.
//! 4. **Presentation**: Prints the response record, or a colored error and exits with status 1.

mod cli;
mod formatter;
mod observability;

use anyhow::Context;
use cim_core::{CimClient, DynamicRequest, HttpTransport, Operation};
use clap::Parser;
use cli::{Cli, Commands, ConnectionArgs};
use formatter::{FormattedString, GenericError, OperationList};
use std::process;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    observability::init_logging(observability::LogFormat::from_env());

    match args.command {
        Commands::Call { operation, body } => run_call(args.connection, operation, body).await,
        Commands::Operations => {
            println!("{}", FormattedString::from(OperationList(&Operation::ALL)))
        }
    }
}

fn connect_or_exit(connection: ConnectionArgs) -> CimClient<HttpTransport> {
    let client = connection.client_config().and_then(|config| {
        CimClient::connect(config).context("Failed to initialize the HTTP transport")
    });

    match client {
        Ok(client) => client,
        Err(err) => {
            let err = GenericError("Configuration Error", format!("{err:#}"));
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn run_call(connection: ConnectionArgs, operation: Operation, body: serde_json::Value) {
    let client = connect_or_exit(connection);
    tracing::debug!(operation = operation.name(), "dispatching call");

    let call = match client.dynamic(DynamicRequest { operation, body }) {
        Ok(call) => call,
        Err(err) => {
            tracing::warn!(operation = operation.name(), error = %err, "call rejected locally");
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    };

    match call.await {
        Ok(value) => println!("{}", FormattedString::from(value)),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}
