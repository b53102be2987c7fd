use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// `AuthData` specifies how a facade authenticates against its Watson service.
///
/// Credentials are sent as HTTP Basic. An API key is sent as the password of the `apikey` user.
#[derive(Clone, Serialize, Deserialize)]
pub enum AuthData {
	/// Username / password pair.
	Basic { username: String, password: String },

	/// API key (sent as `apikey:<key>`).
	ApiKey(String),

	/// Resolve the credentials from environment variables at call time, using this prefix.
	/// e.g., `TONE_ANALYZER` reads `TONE_ANALYZER_APIKEY`, or `TONE_ANALYZER_USERNAME` / `TONE_ANALYZER_PASSWORD`.
	FromEnv(String),

	/// Unauthenticated mode, no `Authorization` header is sent.
	None,
}

/// Constructors
impl AuthData {
	pub fn from_basic(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self::Basic {
			username: username.into(),
			password: password.into(),
		}
	}

	pub fn from_api_key(key: impl Into<String>) -> Self {
		Self::ApiKey(key.into())
	}

	pub fn from_env(env_prefix: impl Into<String>) -> Self {
		Self::FromEnv(env_prefix.into())
	}
}

/// Resolution
impl AuthData {
	/// The username used when an API key is given.
	pub const API_KEY_USERNAME: &str = "apikey";

	/// Resolves to the `(username, password)` pair to send, or `None` for unauthenticated mode.
	pub fn basic_credentials(&self) -> Result<Option<(String, String)>> {
		match self {
			Self::Basic { username, password } => Ok(Some((username.clone(), password.clone()))),
			Self::ApiKey(key) => Ok(Some((Self::API_KEY_USERNAME.to_string(), key.clone()))),
			Self::FromEnv(prefix) => {
				if let Ok(key) = std::env::var(format!("{prefix}_APIKEY")) {
					return Ok(Some((Self::API_KEY_USERNAME.to_string(), key)));
				}
				match (
					std::env::var(format!("{prefix}_USERNAME")),
					std::env::var(format!("{prefix}_PASSWORD")),
				) {
					(Ok(username), Ok(password)) => Ok(Some((username, password))),
					_ => Err(Error::configuration(format!(
						"no credentials found in environment (expected {prefix}_APIKEY or {prefix}_USERNAME/{prefix}_PASSWORD)"
					))),
				}
			}
			Self::None => Ok(None),
		}
	}
}

// region:    --- AuthData Std Impls

// Implement Debug to redact the secrets
impl std::fmt::Debug for AuthData {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Basic { username, .. } => write!(f, "AuthData::Basic({username}, REDACTED)"),
			Self::ApiKey(_) => write!(f, "AuthData::ApiKey(REDACTED)"),
			Self::FromEnv(prefix) => write!(f, "AuthData::FromEnv({prefix})"),
			Self::None => write!(f, "AuthData::None"),
		}
	}
}

// endregion: --- AuthData Std Impls

// region:    --- Tests


// endregion: --- Tests
