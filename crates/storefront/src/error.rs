use thiserror::Error;

/// Errors raised while talking to the Storefront API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
	#[error("network error: {0}")]
	Network(String),

	#[error("storefront returned status {status}: {body}")]
	Status { status: u16, body: String },

	#[error("invalid response: {0}")]
	Decode(String),

	#[error("Storefront API errors: {0}")]
	GraphQl(String),

	#[error("no {0} data returned from Storefront API")]
	MissingData(&'static str),

	#[error("{0} not found")]
	NotFound(String),

	#[error("invalid input: {0}")]
	InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

impl StorefrontError {
	/// Returns true for failures that happened before a payload was received.
	pub fn is_transport(&self) -> bool {
		matches!(self, Self::Network(_) | Self::Status { .. })
	}
}
