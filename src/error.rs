use crate::webc;
use derive_more::From;
use value_ext::JsonValueExtError;

pub type Result<T> = core::result::Result<T, Error>;

/// Crate level error.
///
/// - `Configuration` is raised when a facade or a call cannot be set up (never retryable).
/// - `MissingParams` / `InvalidParam` are raised before any network I/O.
/// - `WebCall` wraps the dispatcher errors (transport, non-2xx status, response decode).
#[derive(Debug, From)]
pub enum Error {
	// -- Config
	Configuration {
		cause: String,
	},

	// -- Validation
	MissingParams {
		operation: &'static str,
		params: Vec<&'static str>,
	},
	InvalidParam {
		operation: &'static str,
		param: &'static str,
		cause: String,
	},

	// -- Web Call
	WebCall {
		operation: &'static str,
		webc_error: webc::Error,
	},

	// -- Externals
	#[from]
	JsonValueExt(JsonValueExtError),
	#[from]
	SerdeJson(serde_json::Error),
}

/// Constructors
impl Error {
	pub(crate) fn configuration(cause: impl Into<String>) -> Self {
		Self::Configuration { cause: cause.into() }
	}
}

/// Getters
impl Error {
	/// Returns the webc error if this is a `WebCall` error.
	pub fn webc_error(&self) -> Option<&webc::Error> {
		match self {
			Self::WebCall { webc_error, .. } => Some(webc_error),
			_ => None,
		}
	}

	/// Returns the HTTP status of a remote (non-2xx) failure.
	pub fn status(&self) -> Option<reqwest::StatusCode> {
		match self.webc_error()? {
			webc::Error::ResponseFailedStatus { status, .. } => Some(*status),
			_ => None,
		}
	}
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
