use cim_core::{CallError, DynamicCallError, Operation};
use colored::*;
use std::fmt::Display;

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

pub struct OperationList(pub &'static [Operation]);

pub struct GenericError<T: Display>(pub &'static str, pub T);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<serde_json::Value> for FormattedString {
    fn from(value: serde_json::Value) -> Self {
        FormattedString(serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()))
    }
}

impl From<CallError> for FormattedString {
    fn from(err: CallError) -> Self {
        let title = match err {
            CallError::RemoteFault { .. } => "Gateway Rejected The Call:",
            CallError::TransportFailure { .. } => "Transport Failure:",
        };
        FormattedString(format!(
            "{} code={} text={:?}",
            title.red().bold(),
            err.code().yellow(),
            err.text()
        ))
    }
}

impl From<DynamicCallError> for FormattedString {
    fn from(err: DynamicCallError) -> Self {
        let title = match err {
            DynamicCallError::InvalidBody(_) => "Invalid Body:",
            DynamicCallError::InvalidArgument(_) => "Invalid Argument:",
        };
        FormattedString(format!("{}\n\n'{}'", title.red().bold(), err))
    }
}

impl<T: Display> From<GenericError<T>> for FormattedString {
    fn from(GenericError(msg, err): GenericError<T>) -> Self {
        FormattedString(format!("{}:\n\n'{}'", msg.red().bold(), err))
    }
}

impl From<OperationList> for FormattedString {
    fn from(OperationList(operations): OperationList) -> Self {
        let mut out = String::new();
        out.push_str("Available Operations:\n");
        for operation in operations {
            out.push_str(&format!("  - {}\n", operation.name().green()));
        }
        FormattedString(out.trim_end().to_string())
    }
}
