use crate::Result;
use crate::client::{ServiceConfig, ServiceDefaults, ServiceOptions};
use crate::webc::WebClient;

/// What every facade holds: its immutable `ServiceConfig` and the shared `WebClient`.
/// Concurrent calls only read from it.
#[derive(Debug, Clone)]
pub struct ServiceSession {
	config: ServiceConfig,
	web_client: WebClient,
}

/// Constructors
impl ServiceSession {
	/// Fails with `Error::Configuration` if the options have no (valid) version date.
	pub fn new(options: ServiceOptions, defaults: ServiceDefaults) -> Result<Self> {
		let config = ServiceConfig::from_options(options, defaults)?;
		let web_client = WebClient::from_config(&config)?;
		Ok(Self { config, web_client })
	}

	/// Replaces the `WebClient` (e.g., to share one reqwest client across facades).
	#[must_use]
	pub fn with_web_client(mut self, web_client: WebClient) -> Self {
		self.web_client = web_client;
		self
	}
}

/// Getters
impl ServiceSession {
	pub fn config(&self) -> &ServiceConfig {
		&self.config
	}

	pub fn web_client(&self) -> &WebClient {
		&self.web_client
	}
}
