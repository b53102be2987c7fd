//! `ServiceOptions` is the construction argument of every facade (e.g., `ToneAnalyzerV3::new(..)`).
//! - `version` is mandatory, everything else falls back on the service defaults.
//! - It is resolved once into an immutable `ServiceConfig`.

use crate::resolver::{AuthData, Endpoint};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
	/// The API version date (`YYYY-MM-DD`), sent as the `version` query parameter on every call.
	pub version: Option<String>,

	/// The base URL of the service. Defaults to the service gateway URL.
	pub endpoint: Option<Endpoint>,

	/// The credentials. Defaults to `AuthData::FromEnv(<SERVICE_ENV_PREFIX>)`.
	pub auth: Option<AuthData>,

	/// Headers sent on every call (call headers take precedence).
	pub headers: Vec<(String, String)>,

	/// Request timeout for every call.
	pub timeout: Option<Duration>,

	/// When true, sends `X-Watson-Learning-Opt-Out: true` so IBM does not log the request data.
	pub learning_opt_out: Option<bool>,
}

/// Chainable Setters
impl ServiceOptions {
	#[must_use]
	pub fn with_version(mut self, version: impl Into<String>) -> Self {
		self.version = Some(version.into());
		self
	}

	#[must_use]
	pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
		self.endpoint = Some(endpoint);
		self
	}

	#[must_use]
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		let base_url: String = base_url.into();
		self.endpoint = Some(Endpoint::from_owned(base_url));
		self
	}

	#[must_use]
	pub fn with_auth(mut self, auth: AuthData) -> Self {
		self.auth = Some(auth);
		self
	}

	/// Shortcut for `with_auth(AuthData::None)`.
	#[must_use]
	pub fn with_unauthenticated(mut self) -> Self {
		self.auth = Some(AuthData::None);
		self
	}

	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	#[must_use]
	pub const fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	#[must_use]
	pub const fn with_learning_opt_out(mut self, value: bool) -> Self {
		self.learning_opt_out = Some(value);
		self
	}
}
