//! `CallDescriptor` is built fresh for each facade call and consumed by the `WebClient`.
//!
//! Optional values go through the `..._opt` setters so that an absent parameter is never
//! sent as an empty or null value (the Watson APIs distinguish "not provided" from "empty").

use crate::resolver::Endpoint;
use crate::{Error, Result};
use bytes::Bytes;
use derive_more::Display;
use serde_json::Value;
use std::fmt::Display;

// region:    --- HttpMethod

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
pub enum HttpMethod {
	#[display("GET")]
	Get,
	#[display("POST")]
	Post,
	#[display("PUT")]
	Put,
	#[display("DELETE")]
	Delete,
}

impl From<HttpMethod> for reqwest::Method {
	fn from(method: HttpMethod) -> Self {
		match method {
			HttpMethod::Get => Self::GET,
			HttpMethod::Post => Self::POST,
			HttpMethod::Put => Self::PUT,
			HttpMethod::Delete => Self::DELETE,
		}
	}
}

// endregion: --- HttpMethod

// region:    --- ResponseFormat

/// How the response body is expected to be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
	/// `Accept: application/json`, body decoded as JSON.
	Json,
	/// `Accept: text/csv`, body returned as text.
	Csv,
	/// `Accept: application/octet-stream`, body returned as bytes.
	Binary,
}

impl ResponseFormat {
	pub const fn accept(&self) -> &'static str {
		match self {
			Self::Json => "application/json",
			Self::Csv => "text/csv",
			Self::Binary => "application/octet-stream",
		}
	}
}

// endregion: --- ResponseFormat

// region:    --- FormField

/// A binary part of a `multipart/form-data` body.
#[derive(Debug, Clone)]
pub struct FileAttachment {
	pub data: Bytes,
	pub filename: Option<String>,
	pub content_type: Option<String>,
}

impl FileAttachment {
	pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

	pub fn new(data: impl Into<Bytes>) -> Self {
		Self {
			data: data.into(),
			filename: None,
			content_type: None,
		}
	}

	#[must_use]
	pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
		self.filename = Some(filename.into());
		self
	}

	#[must_use]
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}

	pub fn content_type_or_default(&self) -> &str {
		self.content_type.as_deref().unwrap_or(Self::DEFAULT_CONTENT_TYPE)
	}
}

/// One named part of a `multipart/form-data` body.
#[derive(Debug, Clone)]
pub enum FormField {
	Text(String),
	File(FileAttachment),
}

// endregion: --- FormField

// region:    --- CallDescriptor

#[derive(Debug, Clone)]
pub struct CallDescriptor {
	/// The facade operation name, for errors and logs (e.g., `tone_analyzer.tone`).
	pub operation: &'static str,
	pub method: HttpMethod,
	/// The path template, with `{name}` placeholders (e.g., `/v3/classifiers/{classifier_id}`).
	pub path: &'static str,
	pub path_params: Vec<(&'static str, String)>,
	pub query: Vec<(String, String)>,
	pub headers: Vec<(String, String)>,
	/// Serialized as JSON when the `Content-Type` header is JSON, sent verbatim otherwise.
	pub body: Option<Value>,
	pub form: Option<Vec<(String, FormField)>>,
	pub response_format: ResponseFormat,
}

/// Constructors
impl CallDescriptor {
	pub fn new(operation: &'static str, method: HttpMethod, path: &'static str) -> Self {
		Self {
			operation,
			method,
			path,
			path_params: Vec::new(),
			query: Vec::new(),
			headers: Vec::new(),
			body: None,
			form: None,
			response_format: ResponseFormat::Json,
		}
	}
}

/// Chainable Setters
impl CallDescriptor {
	#[must_use]
	pub fn with_path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.path_params.push((name, value.into()));
		self
	}

	#[must_use]
	pub fn with_query(mut self, name: impl Into<String>, value: impl Display) -> Self {
		self.query.push((name.into(), value.to_string()));
		self
	}

	/// Adds the query parameter only when `value` is `Some`.
	#[must_use]
	pub fn with_query_opt(self, name: impl Into<String>, value: Option<impl Display>) -> Self {
		match value {
			Some(value) => self.with_query(name, value),
			None => self,
		}
	}

	/// Adds a comma joined query parameter, only when `values` is `Some`.
	#[must_use]
	pub fn with_query_list_opt<T: Display>(self, name: impl Into<String>, values: Option<&[T]>) -> Self {
		self.with_query_opt(name, values.map(join_comma))
	}

	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Display) -> Self {
		self.headers.push((name.into(), value.to_string()));
		self
	}

	/// Adds the header only when `value` is `Some`.
	#[must_use]
	pub fn with_header_opt(self, name: impl Into<String>, value: Option<impl Display>) -> Self {
		match value {
			Some(value) => self.with_header(name, value),
			None => self,
		}
	}

	#[must_use]
	pub fn with_body(mut self, body: impl Into<Value>) -> Self {
		self.body = Some(body.into());
		self
	}

	#[must_use]
	pub fn with_form_text_opt(self, name: impl Into<String>, value: Option<impl Display>) -> Self {
		match value {
			Some(value) => self.with_form_field(name, FormField::Text(value.to_string())),
			None => self,
		}
	}

	#[must_use]
	pub fn with_form_list_opt<T: Display>(self, name: impl Into<String>, values: Option<&[T]>) -> Self {
		self.with_form_text_opt(name, values.map(join_comma))
	}

	#[must_use]
	pub fn with_form_file_opt(self, name: impl Into<String>, file: Option<FileAttachment>) -> Self {
		match file {
			Some(file) => self.with_form_field(name, FormField::File(file)),
			None => self,
		}
	}

	#[must_use]
	pub fn with_form_field(mut self, name: impl Into<String>, field: FormField) -> Self {
		self.form.get_or_insert_with(Vec::new).push((name.into(), field));
		self
	}

	#[must_use]
	pub const fn with_response_format(mut self, response_format: ResponseFormat) -> Self {
		self.response_format = response_format;
		self
	}
}

/// Getters
impl CallDescriptor {
	/// Returns the value of the header `name` (case insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.rev()
			.find(|(k, _)| k.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}

	/// True if the call `Content-Type` header is JSON (`application/json`, with or without parameters).
	pub fn is_json_content(&self) -> bool {
		self.header("Content-Type")
			.is_some_and(|ct| ct.split(';').next().is_some_and(|m| m.trim().eq_ignore_ascii_case("application/json")))
	}
}

/// Url building
impl CallDescriptor {
	/// Substitutes every `{name}` placeholder of the path template with its percent-encoded path param.
	///
	/// Fails with `Error::Configuration` if a placeholder has no corresponding path param.
	pub fn resolve_path(&self) -> Result<String> {
		let mut resolved = String::with_capacity(self.path.len());
		let mut rest = self.path;

		while let Some(start) = rest.find('{') {
			resolved.push_str(&rest[..start]);
			let after = &rest[start + 1..];
			let Some(end) = after.find('}') else {
				return Err(Error::configuration(format!(
					"{} - unterminated placeholder in path '{}'",
					self.operation, self.path
				)));
			};
			let name = &after[..end];
			let Some((_, value)) = self.path_params.iter().find(|(k, _)| *k == name) else {
				return Err(Error::configuration(format!(
					"{} - no value for path placeholder '{{{name}}}'",
					self.operation
				)));
			};
			resolved.push_str(&urlencoding::encode(value));
			rest = &after[end + 1..];
		}
		resolved.push_str(rest);

		Ok(resolved)
	}

	/// Builds the full URL: `base_url + path + ?query`, with `leading_query` pairs (e.g., `version`) first.
	pub fn resolve_url(&self, endpoint: &Endpoint, leading_query: &[(&str, &str)]) -> Result<String> {
		let mut url = endpoint.join(&self.resolve_path()?)?;

		let pairs = leading_query
			.iter()
			.map(|(k, v)| (*k, *v))
			.chain(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
		let query_string = pairs
			.map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
			.collect::<Vec<_>>()
			.join("&");

		if !query_string.is_empty() {
			url.push('?');
			url.push_str(&query_string);
		}

		Ok(url)
	}
}

// endregion: --- CallDescriptor

// region:    --- Support

fn join_comma<T: Display>(values: &[T]) -> String {
	values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

/// Merges the default headers with the call headers. Call headers take precedence (case insensitive).
pub fn merge_headers(defaults: &[(String, String)], call_headers: &[(String, String)]) -> Vec<(String, String)> {
	let mut merged: Vec<(String, String)> = Vec::with_capacity(defaults.len() + call_headers.len());
	for (name, value) in defaults.iter().chain(call_headers.iter()) {
		merged.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
		merged.push((name.clone(), value.clone()));
	}
	merged
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
