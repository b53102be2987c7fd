use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The media types accepted by the content submission endpoints (`profile`, `tone`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
	#[serde(rename = "application/json")]
	Json,
	#[serde(rename = "text/plain")]
	Plain,
	#[serde(rename = "text/html")]
	Html,
}

impl MediaType {
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Json => "application/json",
			Self::Plain => "text/plain",
			Self::Html => "text/html",
		}
	}
}

/// The `Content-Type` of a submitted content, with an optional `charset` parameter
/// (e.g., `text/plain;charset=utf-8`).
///
/// Parsing rejects any media type outside of `MediaType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ContentType {
	media_type: MediaType,
	charset: Option<String>,
}

/// Constructors
impl ContentType {
	pub const fn new(media_type: MediaType) -> Self {
		Self {
			media_type,
			charset: None,
		}
	}

	pub const fn json() -> Self {
		Self::new(MediaType::Json)
	}

	pub const fn plain() -> Self {
		Self::new(MediaType::Plain)
	}

	pub const fn html() -> Self {
		Self::new(MediaType::Html)
	}

	#[must_use]
	pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
		self.charset = Some(charset.into());
		self
	}
}

/// Getters
impl ContentType {
	pub const fn media_type(&self) -> MediaType {
		self.media_type
	}

	pub fn charset(&self) -> Option<&str> {
		self.charset.as_deref()
	}

	pub fn is_json(&self) -> bool {
		self.media_type == MediaType::Json
	}
}

impl From<MediaType> for ContentType {
	fn from(media_type: MediaType) -> Self {
		Self::new(media_type)
	}
}

impl fmt::Display for ContentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.charset {
			Some(charset) => write!(f, "{};charset={charset}", self.media_type.as_str()),
			None => f.write_str(self.media_type.as_str()),
		}
	}
}

impl FromStr for ContentType {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self> {
		let mut parts = value.split(';').map(str::trim);
		let media = parts.next().unwrap_or_default().to_ascii_lowercase();
		let media_type = match media.as_str() {
			"application/json" => MediaType::Json,
			"text/plain" => MediaType::Plain,
			"text/html" => MediaType::Html,
			_ => {
				return Err(Error::InvalidParam {
					operation: "content_type",
					param: "content_type",
					cause: format!("unsupported content type '{value}'"),
				});
			}
		};

		let mut charset = None;
		for param in parts {
			match param.split_once('=') {
				Some((name, val)) if name.trim().eq_ignore_ascii_case("charset") => {
					charset = Some(val.trim().to_string());
				}
				_ => {
					return Err(Error::InvalidParam {
						operation: "content_type",
						param: "content_type",
						cause: format!("unsupported content type parameter '{param}'"),
					});
				}
			}
		}

		Ok(Self { media_type, charset })
	}
}

impl From<ContentType> for String {
	fn from(content_type: ContentType) -> Self {
		content_type.to_string()
	}
}

impl TryFrom<String> for ContentType {
	type Error = Error;

	fn try_from(value: String) -> Result<Self> {
		value.parse()
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_content_type_parse_with_charset() {
		let ct: ContentType = "text/plain; charset=utf-8".parse().unwrap();
		assert_eq!(ct.media_type(), MediaType::Plain);
		assert_eq!(ct.charset(), Some("utf-8"));
		assert_eq!(ct.to_string(), "text/plain;charset=utf-8");
	}

	#[test]
	fn test_content_type_parse_rejects_unknown() {
		assert!("text/csv".parse::<ContentType>().is_err());
		assert!("text/plain;boundary=x".parse::<ContentType>().is_err());
	}

	#[test]
	fn test_content_type_json() {
		assert!(ContentType::json().is_json());
		assert_eq!(ContentType::json().to_string(), "application/json");
	}
}

// endregion: --- Tests
