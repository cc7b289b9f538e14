//! Provider error types and handling.
//!
//! Every provider operation fails with a [`ProviderError`]. Transport failures
//! pass through untouched; the remaining variants describe what went wrong after
//! the explorer answered.

use crate::{
	services::explorer::transports::TransportError,
	utils::logging::error::{ErrorContext, TraceableError},
};
use std::collections::HashMap;
use thiserror::Error as ThisError;

/// Represents possible errors returned by explorer providers
#[derive(ThisError, Debug)]
pub enum ProviderError {
	/// The underlying request failed (network, DNS, non-2xx)
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The explorer answered but a required field was missing or unreadable
	#[error("Malformed response for {operation}({identifier}): {context}")]
	MalformedResponse {
		operation: String,
		identifier: String,
		context: ErrorContext,
	},

	/// Node selection found no usable candidate
	#[error("No healthy endpoint: {0}")]
	NoHealthyEndpoint(ErrorContext),

	/// The backend offers no equivalent of the requested operation
	#[error("Not implemented: {0}")]
	NotImplemented(ErrorContext),
}

impl ProviderError {
	pub fn malformed_response(
		operation: impl Into<String>,
		identifier: impl Into<String>,
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::MalformedResponse {
			operation: operation.into(),
			identifier: identifier.into(),
			context: ErrorContext::new_with_log(msg, source, metadata),
		}
	}

	pub fn no_healthy_endpoint(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::NoHealthyEndpoint(ErrorContext::new_with_log(msg, source, metadata))
	}

	/// Unsupported operation; not logged since it is a caller decision, not a failure
	pub fn not_implemented(operation: &str, provider: &str) -> Self {
		Self::NotImplemented(ErrorContext::new(
			format!("{} is not supported by {}", operation, provider),
			None,
			Some(HashMap::from([
				("operation".to_string(), operation.to_string()),
				("provider".to_string(), provider.to_string()),
			])),
		))
	}
}

impl TraceableError for ProviderError {
	fn trace_id(&self) -> String {
		match self {
			Self::Transport(err) => err.trace_id(),
			Self::MalformedResponse { context, .. } => context.trace_id.clone(),
			Self::NoHealthyEndpoint(ctx) => ctx.trace_id.clone(),
			Self::NotImplemented(ctx) => ctx.trace_id.clone(),
		}
	}
}
