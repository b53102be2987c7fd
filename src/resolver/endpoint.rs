use crate::{Error, Result};
use std::sync::Arc;

/// The base URL of a Watson service (e.g., `https://gateway.watsonplatform.net/tone-analyzer/api`).
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}

	/// Joins the base URL with an already substituted path (which starts with `/`).
	/// A trailing `/` on the base URL is not doubled.
	pub fn join(&self, path: &str) -> Result<String> {
		let base = self.inner.trim_end_matches('/');
		if !(base.starts_with("http://") || base.starts_with("https://")) {
			return Err(Error::configuration(format!(
				"endpoint base url '{base}' must start with http:// or https://"
			)));
		}
		Ok(format!("{base}{path}"))
	}
}

// region:    --- Tests


// endregion: --- Tests
