use crate::client::ServiceOptions;
use crate::resolver::{AuthData, Endpoint};
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// Header sent when `ServiceOptions::learning_opt_out` is true.
pub const LEARNING_OPT_OUT_HEADER: &str = "X-Watson-Learning-Opt-Out";

/// The per service constants a facade provides to resolve its `ServiceOptions`.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDefaults {
	pub name: &'static str,
	pub base_url: &'static str,
	pub env_prefix: &'static str,
}

/// The resolved, immutable session configuration of a facade.
/// It is cheap to clone, and shared read-only by concurrent calls.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
	inner: Arc<ServiceConfigInner>,
}

#[derive(Debug)]
struct ServiceConfigInner {
	service_name: &'static str,
	version: String,
	endpoint: Endpoint,
	auth: AuthData,
	default_headers: Vec<(String, String)>,
	timeout: Option<Duration>,
}

/// Constructors
impl ServiceConfig {
	/// Resolves the `options` against the service `defaults`.
	///
	/// Fails with `Error::Configuration` when the version date is absent or not `YYYY-MM-DD`.
	pub fn from_options(options: ServiceOptions, defaults: ServiceDefaults) -> Result<Self> {
		let ServiceOptions {
			version,
			endpoint,
			auth,
			headers,
			timeout,
			learning_opt_out,
		} = options;

		let Some(version) = version else {
			return Err(Error::configuration(format!(
				"{} - argument(s) missing: version",
				defaults.name
			)));
		};
		if !is_version_date(&version) {
			return Err(Error::configuration(format!(
				"{} - version '{version}' must be a date in the YYYY-MM-DD format",
				defaults.name
			)));
		}

		let mut default_headers = headers;
		if learning_opt_out == Some(true) {
			default_headers.push((LEARNING_OPT_OUT_HEADER.to_string(), "true".to_string()));
		}

		Ok(Self {
			inner: Arc::new(ServiceConfigInner {
				service_name: defaults.name,
				version,
				endpoint: endpoint.unwrap_or_else(|| Endpoint::from_static(defaults.base_url)),
				auth: auth.unwrap_or_else(|| AuthData::from_env(defaults.env_prefix)),
				default_headers,
				timeout,
			}),
		})
	}
}

/// Getters
impl ServiceConfig {
	pub fn service_name(&self) -> &'static str {
		self.inner.service_name
	}

	pub fn version(&self) -> &str {
		&self.inner.version
	}

	pub fn endpoint(&self) -> &Endpoint {
		&self.inner.endpoint
	}

	pub fn auth(&self) -> &AuthData {
		&self.inner.auth
	}

	pub fn default_headers(&self) -> &[(String, String)] {
		&self.inner.default_headers
	}

	pub fn timeout(&self) -> Option<Duration> {
		self.inner.timeout
	}
}

// region:    --- Support

fn is_version_date(value: &str) -> bool {
	let bytes = value.as_bytes();
	bytes.len() == 10
		&& bytes.iter().enumerate().all(|(idx, b)| match idx {
			4 | 7 => *b == b'-',
			_ => b.is_ascii_digit(),
		})
}

// endregion: --- Support

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	const DEFAULTS: ServiceDefaults = ServiceDefaults {
		name: "test_service",
		base_url: "https://example.com/api",
		env_prefix: "TEST_SERVICE",
	};

	#[test]
	fn test_config_missing_version() {
		let res = ServiceConfig::from_options(ServiceOptions::default(), DEFAULTS);
		assert!(matches!(res, Err(Error::Configuration { .. })));
	}

	#[test]
	fn test_config_bad_version() {
		let res = ServiceConfig::from_options(ServiceOptions::default().with_version("2017/09/21"), DEFAULTS);
		assert!(matches!(res, Err(Error::Configuration { .. })));
	}

	#[test]
	fn test_config_defaults() {
		let config = ServiceConfig::from_options(ServiceOptions::default().with_version("2017-09-21"), DEFAULTS).unwrap();
		assert_eq!(config.version(), "2017-09-21");
		assert_eq!(config.endpoint().base_url(), "https://example.com/api");
		assert!(matches!(config.auth(), AuthData::FromEnv(prefix) if prefix == "TEST_SERVICE"));
		assert!(config.default_headers().is_empty());
	}

	#[test]
	fn test_config_learning_opt_out() {
		let options = ServiceOptions::default()
			.with_version("2017-09-21")
			.with_header("X-Custom", "1")
			.with_learning_opt_out(true);
		let config = ServiceConfig::from_options(options, DEFAULTS).unwrap();
		assert_eq!(
			config.default_headers(),
			&[
				("X-Custom".to_string(), "1".to_string()),
				(LEARNING_OPT_OUT_HEADER.to_string(), "true".to_string())
			]
		);
	}
}

// endregion: --- Tests
