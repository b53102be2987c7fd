use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// The successful result of a facade call: the decoded body along with the raw response status and headers.
///
/// Failures (validation, transport, non-2xx status, decode) are the `Err` arm of the call `Result`.
#[derive(Debug, Clone)]
pub struct ServiceResponse<T> {
	pub body: T,
	pub status: StatusCode,
	pub headers: HeaderMap,
}

impl<T> ServiceResponse<T> {
	pub fn into_body(self) -> T {
		self.body
	}

	/// Returns the header value as `&str` if present and valid ASCII.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|v| v.to_str().ok())
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ServiceResponse<U> {
		ServiceResponse {
			body: f(self.body),
			status: self.status,
			headers: self.headers,
		}
	}
}
