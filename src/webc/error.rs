use derive_more::From;
use reqwest::StatusCode;
use serde_json::Value;
use value_ext::JsonValueExt;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
	/// Non-2xx response. `body` is the parsed JSON error body, or the raw text as a JSON string.
	ResponseFailedStatus {
		status: StatusCode,
		body: Value,
	},

	/// The response body does not match the expected format.
	ResponseFailedDecode {
		content_type: Option<String>,
		cause: String,
	},

	/// Network level failure (DNS, connection, timeout).
	#[from]
	Reqwest(reqwest::Error),
}

/// Getters
impl Error {
	/// The Watson error message, when the error body carries one (`error` or `message` property).
	pub fn remote_message(&self) -> Option<String> {
		let Self::ResponseFailedStatus { body, .. } = self else {
			return None;
		};
		body.x_get::<String>("error")
			.or_else(|_| body.x_get::<String>("message"))
			.ok()
			.or_else(|| body.as_str().map(ToString::to_string))
	}
}

/// Builds the `ResponseFailedStatus` error from a raw error body.
pub(crate) fn failed_status(status: StatusCode, raw_body: String) -> Error {
	let body = serde_json::from_str::<Value>(&raw_body).unwrap_or(Value::String(raw_body));
	Error::ResponseFailedStatus { status, body }
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_failed_status_json_body() {
		let err = failed_status(StatusCode::BAD_REQUEST, r#"{"code":400,"error":"Invalid JSON input"}"#.to_string());
		assert_eq!(err.remote_message().as_deref(), Some("Invalid JSON input"));
	}

	#[test]
	fn test_failed_status_raw_body() {
		let err = failed_status(StatusCode::BAD_GATEWAY, "upstream down".to_string());
		assert_eq!(err.remote_message().as_deref(), Some("upstream down"));
		assert!(matches!(err, Error::ResponseFailedStatus { body: Value::String(_), .. }));
	}
}

// endregion: --- Tests
