//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

// region:    --- Modules

mod mock_server;

pub use mock_server::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// endregion: --- Modules

// region:    --- Common Options

use watson::ServiceOptions;
use watson::resolver::AuthData;

/// Options pointing at the mock server, with basic credentials.
pub fn common_options(base_url: &str, version: &str) -> ServiceOptions {
	init_tracing();
	ServiceOptions::default()
		.with_version(version)
		.with_base_url(base_url)
		.with_auth(AuthData::from_basic("user", "pass"))
}

/// Installs a fmt subscriber once (honors `RUST_LOG`).
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

// endregion: --- Common Options
