//! Closed language sets for the `Content-Language` / `Accept-Language` headers.
//! Each service accepts a different subset, hence one enum per subset.

use crate::{Error, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// `Accept-Language` of Personality Insights and Tone Analyzer responses.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcceptLanguage {
	#[display("ar")]
	#[serde(rename = "ar")]
	Arabic,
	#[display("de")]
	#[serde(rename = "de")]
	German,
	#[display("en")]
	#[serde(rename = "en")]
	English,
	#[display("es")]
	#[serde(rename = "es")]
	Spanish,
	#[display("fr")]
	#[serde(rename = "fr")]
	French,
	#[display("it")]
	#[serde(rename = "it")]
	Italian,
	#[display("ja")]
	#[serde(rename = "ja")]
	Japanese,
	#[display("ko")]
	#[serde(rename = "ko")]
	Korean,
	#[display("pt-br")]
	#[serde(rename = "pt-br")]
	BrazilianPortuguese,
	#[display("zh-cn")]
	#[serde(rename = "zh-cn")]
	SimplifiedChinese,
	#[display("zh-tw")]
	#[serde(rename = "zh-tw")]
	TraditionalChinese,
}

impl AcceptLanguage {
	pub const ALL: &[Self] = &[
		Self::Arabic,
		Self::German,
		Self::English,
		Self::Spanish,
		Self::French,
		Self::Italian,
		Self::Japanese,
		Self::Korean,
		Self::BrazilianPortuguese,
		Self::SimplifiedChinese,
		Self::TraditionalChinese,
	];
}

/// `Content-Language` of a Personality Insights profile input.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileContentLanguage {
	#[display("ar")]
	#[serde(rename = "ar")]
	Arabic,
	#[display("en")]
	#[serde(rename = "en")]
	English,
	#[display("es")]
	#[serde(rename = "es")]
	Spanish,
	#[display("ja")]
	#[serde(rename = "ja")]
	Japanese,
	#[display("ko")]
	#[serde(rename = "ko")]
	Korean,
}

impl ProfileContentLanguage {
	pub const ALL: &[Self] = &[Self::Arabic, Self::English, Self::Spanish, Self::Japanese, Self::Korean];
}

/// `Content-Language` of a Tone Analyzer input.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToneContentLanguage {
	#[display("en")]
	#[serde(rename = "en")]
	English,
	#[display("fr")]
	#[serde(rename = "fr")]
	French,
}

impl ToneContentLanguage {
	pub const ALL: &[Self] = &[Self::English, Self::French];
}

/// `Accept-Language` of Visual Recognition class names.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassifyLanguage {
	#[display("en")]
	#[serde(rename = "en")]
	English,
	#[display("ar")]
	#[serde(rename = "ar")]
	Arabic,
	#[display("de")]
	#[serde(rename = "de")]
	German,
	#[display("es")]
	#[serde(rename = "es")]
	Spanish,
	#[display("it")]
	#[serde(rename = "it")]
	Italian,
	#[display("ja")]
	#[serde(rename = "ja")]
	Japanese,
	#[display("ko")]
	#[serde(rename = "ko")]
	Korean,
}

impl ClassifyLanguage {
	pub const ALL: &[Self] = &[
		Self::English,
		Self::Arabic,
		Self::German,
		Self::Spanish,
		Self::Italian,
		Self::Japanese,
		Self::Korean,
	];
}

// region:    --- FromStr

fn parse_language<T: Copy + ToString>(all: &[T], value: &str) -> Result<T> {
	let lower = value.trim().to_ascii_lowercase();
	all.iter().copied().find(|lang| lang.to_string() == lower).ok_or_else(|| Error::InvalidParam {
		operation: "language",
		param: "language",
		cause: format!("unsupported language '{value}'"),
	})
}

impl FromStr for AcceptLanguage {
	type Err = Error;
	fn from_str(value: &str) -> Result<Self> {
		parse_language(Self::ALL, value)
	}
}

impl FromStr for ProfileContentLanguage {
	type Err = Error;
	fn from_str(value: &str) -> Result<Self> {
		parse_language(Self::ALL, value)
	}
}

impl FromStr for ToneContentLanguage {
	type Err = Error;
	fn from_str(value: &str) -> Result<Self> {
		parse_language(Self::ALL, value)
	}
}

impl FromStr for ClassifyLanguage {
	type Err = Error;
	fn from_str(value: &str) -> Result<Self> {
		parse_language(Self::ALL, value)
	}
}

// endregion: --- FromStr

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_language_parse() {
		assert_eq!("pt-BR".parse::<AcceptLanguage>().unwrap(), AcceptLanguage::BrazilianPortuguese);
		assert_eq!("fr".parse::<ToneContentLanguage>().unwrap(), ToneContentLanguage::French);
		assert!("de".parse::<ToneContentLanguage>().is_err());
		assert!("fr".parse::<ClassifyLanguage>().is_err());
	}

	#[test]
	fn test_language_serde_matches_display() {
		for lang in AcceptLanguage::ALL {
			let json = serde_json::to_value(lang).unwrap();
			assert_eq!(json.as_str(), Some(lang.to_string().as_str()));
		}
	}
}

// endregion: --- Tests
