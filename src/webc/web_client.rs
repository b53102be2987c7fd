use crate::call::{CallDescriptor, FormField, ResponseFormat, merge_headers};
use crate::client::{ServiceConfig, ServiceResponse};
use crate::webc::error::failed_status;
use crate::webc::{Error as WebcError, Result as WebcResult, WebStream};
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("watson-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Delimiter of the line mode `WebStream` (used for `text/csv` responses).
const LINE_DELIMITER: &str = "\n";

/// The shared dispatcher. Cheap to clone (the inner `reqwest::Client` is reference counted),
/// and safe to use from concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

/// Constructors
impl WebClient {
	/// Builds the underlying reqwest client, applying the config timeout if any.
	pub fn from_config(config: &ServiceConfig) -> Result<Self> {
		let mut builder = reqwest::Client::builder();
		if let Some(timeout) = config.timeout() {
			builder = builder.timeout(timeout);
		}
		let reqwest_client = builder
			.build()
			.map_err(|err| Error::configuration(format!("cannot build http client: {err}")))?;
		Ok(Self { reqwest_client })
	}

	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		Self { reqwest_client }
	}
}

/// Dispatch
impl WebClient {
	/// Completion mode: sends the call and buffers the full response.
	/// Non-2xx statuses are returned as `webc::Error::ResponseFailedStatus`.
	pub async fn dispatch(&self, config: &ServiceConfig, call: CallDescriptor) -> Result<WebResponse> {
		let operation = call.operation;
		let builder = self.new_request_builder(config, call)?;
		send(builder).await.map_err(|webc_error| Error::WebCall { operation, webc_error })
	}

	/// Completion mode, decoding the response body as JSON into `T`.
	pub async fn dispatch_json<T: DeserializeOwned>(
		&self,
		config: &ServiceConfig,
		call: CallDescriptor,
	) -> Result<ServiceResponse<T>> {
		let operation = call.operation;
		let web_response = self.dispatch(config, call).await?;
		web_response.into_json().map_err(|webc_error| Error::WebCall { operation, webc_error })
	}

	/// Completion mode, decoding the response body as UTF-8 text.
	pub async fn dispatch_text(&self, config: &ServiceConfig, call: CallDescriptor) -> Result<ServiceResponse<String>> {
		let operation = call.operation;
		let web_response = self.dispatch(config, call).await?;
		web_response.into_text().map_err(|webc_error| Error::WebCall { operation, webc_error })
	}

	/// Completion mode, returning the raw response bytes.
	pub async fn dispatch_bytes(&self, config: &ServiceConfig, call: CallDescriptor) -> Result<ServiceResponse<Bytes>> {
		Ok(self.dispatch(config, call).await?.into_bytes())
	}

	/// Streaming mode: returns a `WebStream` which sends the request on first poll.
	/// `text/csv` calls are streamed line by line, everything else as raw chunks.
	pub fn dispatch_stream(&self, config: &ServiceConfig, call: CallDescriptor) -> Result<WebStream> {
		let response_format = call.response_format;
		let builder = self.new_request_builder(config, call)?;
		let web_stream = match response_format {
			ResponseFormat::Csv => WebStream::new_with_delimiter(builder, LINE_DELIMITER),
			ResponseFormat::Json | ResponseFormat::Binary => WebStream::new_raw(builder),
		};
		Ok(web_stream)
	}
}

/// Request building
impl WebClient {
	/// Serializes the call into a reqwest `RequestBuilder`:
	/// - url: `base_url + path` with placeholders substituted, `version` first in the query string.
	/// - headers: `User-Agent`/`Accept`, then the config default headers, then the call headers.
	/// - body: multipart form, JSON (when `Content-Type` is JSON), or the verbatim text.
	pub fn new_request_builder(&self, config: &ServiceConfig, call: CallDescriptor) -> Result<RequestBuilder> {
		let url = call.resolve_url(config.endpoint(), &[("version", config.version())])?;
		let is_json_content = call.is_json_content();

		let CallDescriptor {
			operation,
			method,
			headers: call_headers,
			body,
			form,
			response_format,
			..
		} = call;

		if body.is_some() && form.is_some() {
			return Err(Error::configuration(format!(
				"{operation} - a call cannot have both a body and form fields"
			)));
		}

		// -- Headers
		let base_headers = vec![
			("User-Agent".to_string(), USER_AGENT.to_string()),
			("Accept".to_string(), response_format.accept().to_string()),
		];
		let mut headers = merge_headers(&merge_headers(&base_headers, config.default_headers()), &call_headers);
		if form.is_some() {
			// reqwest sets the multipart content type with its boundary
			headers.retain(|(name, _)| !name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()));
		}
		let header_map = to_header_map(operation, &headers)?;

		tracing::debug!("{operation} - {method} {}", url.split('?').next().unwrap_or_default());

		let mut builder = self.reqwest_client.request(method.into(), &url).headers(header_map);

		// -- Auth
		if let Some((username, password)) = config.auth().basic_credentials()? {
			builder = builder.basic_auth(username, Some(password));
		}

		// -- Body
		if let Some(form) = form {
			builder = builder.multipart(to_multipart(operation, form)?);
		} else if let Some(body) = body {
			builder = if is_json_content {
				builder.json(&body)
			} else {
				match body {
					serde_json::Value::String(text) => builder.body(text),
					other => builder.body(other.to_string()),
				}
			};
		}

		Ok(builder)
	}
}

// region:    --- WebResponse

#[derive(Debug)]
pub struct WebResponse {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl WebResponse {
	pub fn content_type(&self) -> Option<&str> {
		self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
	}

	/// An empty (or blank) body decodes as JSON `null` (e.g., the `202 Accepted` of the delete operations).
	pub fn into_json<T: DeserializeOwned>(self) -> WebcResult<ServiceResponse<T>> {
		let decoded = if self.body.trim_ascii().is_empty() {
			serde_json::from_value::<T>(serde_json::Value::Null)
		} else {
			serde_json::from_slice::<T>(&self.body)
		};
		let body = decoded.map_err(|err| WebcError::ResponseFailedDecode {
			content_type: self.content_type().map(ToString::to_string),
			cause: err.to_string(),
		})?;
		Ok(ServiceResponse {
			body,
			status: self.status,
			headers: self.headers,
		})
	}

	pub fn into_text(self) -> WebcResult<ServiceResponse<String>> {
		let content_type = self.content_type().map(ToString::to_string);
		let body = String::from_utf8(self.body.to_vec()).map_err(|err| WebcError::ResponseFailedDecode {
			content_type,
			cause: err.to_string(),
		})?;
		Ok(ServiceResponse {
			body,
			status: self.status,
			headers: self.headers,
		})
	}

	pub fn into_bytes(self) -> ServiceResponse<Bytes> {
		ServiceResponse {
			body: self.body,
			status: self.status,
			headers: self.headers,
		}
	}
}

// endregion: --- WebResponse

// region:    --- Support

async fn send(builder: RequestBuilder) -> WebcResult<WebResponse> {
	let response = builder.send().await?;
	let status = response.status();
	let headers = response.headers().clone();
	let body = response.bytes().await?;

	if !status.is_success() {
		tracing::warn!("watson call failed with status {status}");
		return Err(failed_status(status, String::from_utf8_lossy(&body).into_owned()));
	}

	Ok(WebResponse { status, headers, body })
}

fn to_header_map(operation: &'static str, headers: &[(String, String)]) -> Result<HeaderMap> {
	let mut header_map = HeaderMap::with_capacity(headers.len());
	for (name, value) in headers {
		let header_name = HeaderName::from_bytes(name.as_bytes())
			.map_err(|err| Error::configuration(format!("{operation} - invalid header name '{name}': {err}")))?;
		let header_value = HeaderValue::from_str(value)
			.map_err(|err| Error::configuration(format!("{operation} - invalid value for header '{name}': {err}")))?;
		header_map.insert(header_name, header_value);
	}
	Ok(header_map)
}

fn to_multipart(operation: &'static str, fields: Vec<(String, FormField)>) -> Result<Form> {
	let mut form = Form::new();
	for (name, field) in fields {
		tracing::trace!("{operation} - form field '{name}'");
		form = match field {
			FormField::Text(text) => form.text(name, text),
			FormField::File(file) => {
				let content_type = file.content_type_or_default().to_string();
				let mut part = Part::bytes(file.data.to_vec()).mime_str(&content_type).map_err(|err| {
					Error::configuration(format!("{operation} - invalid content type '{content_type}': {err}"))
				})?;
				if let Some(filename) = file.filename {
					part = part.file_name(filename);
				}
				form.part(name, part)
			}
		};
	}
	Ok(form)
}

// endregion: --- Support

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use crate::call::HttpMethod;
	use crate::client::{ServiceDefaults, ServiceOptions};
	use crate::resolver::AuthData;
	use serde_json::json;

	const DEFAULTS: ServiceDefaults = ServiceDefaults {
		name: "test_service",
		base_url: "https://example.com/api",
		env_prefix: "TEST_SERVICE",
	};

	fn config() -> ServiceConfig {
		let options = ServiceOptions::default()
			.with_version("2017-09-21")
			.with_auth(AuthData::from_basic("user", "pwd"))
			.with_header("X-Default", "d")
			.with_header("Accept-Language", "en");
		ServiceConfig::from_options(options, DEFAULTS).unwrap()
	}

	#[test]
	fn test_request_json_body() {
		let call = CallDescriptor::new("op", HttpMethod::Post, "/v3/tone")
			.with_header("Content-Type", "application/json")
			.with_header("accept-language", "fr")
			.with_body(json!({"text": "hello"}));
		let request = WebClient::default().new_request_builder(&config(), call).unwrap().build().unwrap();

		assert_eq!(request.url().as_str(), "https://example.com/api/v3/tone?version=2017-09-21");
		assert_eq!(request.method(), reqwest::Method::POST);
		assert_eq!(request.headers()["accept-language"], "fr");
		assert_eq!(request.headers()["x-default"], "d");
		assert_eq!(request.headers()["accept"], "application/json");
		assert!(request.headers()["authorization"].to_str().unwrap().starts_with("Basic "));
		let body = request.body().and_then(|b| b.as_bytes()).unwrap();
		assert_eq!(serde_json::from_slice::<serde_json::Value>(body).unwrap(), json!({"text": "hello"}));
	}

	#[test]
	fn test_request_text_body_verbatim() {
		let call = CallDescriptor::new("op", HttpMethod::Post, "/v3/tone")
			.with_header("Content-Type", "text/plain")
			.with_body("I am \"happy\"");
		let request = WebClient::default().new_request_builder(&config(), call).unwrap().build().unwrap();
		let body = request.body().and_then(|b| b.as_bytes()).unwrap();
		assert_eq!(body, b"I am \"happy\"");
		assert_eq!(request.headers()["content-type"], "text/plain");
	}

	#[test]
	fn test_request_csv_accept() {
		let call = CallDescriptor::new("op", HttpMethod::Post, "/v3/profile").with_response_format(ResponseFormat::Csv);
		let request = WebClient::default().new_request_builder(&config(), call).unwrap().build().unwrap();
		assert_eq!(request.headers()["accept"], "text/csv");
	}

	#[test]
	fn test_request_missing_path_param() {
		let call = CallDescriptor::new("op", HttpMethod::Get, "/v3/classifiers/{classifier_id}");
		let res = WebClient::default().new_request_builder(&config(), call);
		assert!(matches!(res, Err(Error::Configuration { .. })));
	}

	#[test]
	fn test_request_unauthenticated() {
		let options = ServiceOptions::default().with_version("2017-09-21").with_unauthenticated();
		let config = ServiceConfig::from_options(options, DEFAULTS).unwrap();
		let call = CallDescriptor::new("op", HttpMethod::Get, "/v3/classifiers");
		let request = WebClient::default().new_request_builder(&config, call).unwrap().build().unwrap();
		assert!(request.headers().get("authorization").is_none());
	}

	#[test]
	fn test_into_json_decode_error() {
		let web_response = WebResponse {
			status: StatusCode::OK,
			headers: HeaderMap::new(),
			body: Bytes::from_static(b"not json"),
		};
		let res = web_response.into_json::<serde_json::Value>();
		assert!(matches!(res, Err(WebcError::ResponseFailedDecode { .. })));
	}

	#[test]
	fn test_into_json_empty_body() {
		let web_response = WebResponse {
			status: StatusCode::ACCEPTED,
			headers: HeaderMap::new(),
			body: Bytes::from_static(b" \n"),
		};
		let res = web_response.into_json::<serde_json::Value>().unwrap();
		assert_eq!(res.status, StatusCode::ACCEPTED);
		assert_eq!(res.body, serde_json::Value::Null);
	}
}

// endregion: --- Tests
