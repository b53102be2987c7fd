//! Parameters and results of the Tone Analyzer operations.

use crate::call::{AcceptLanguage, ContentType, ToneContentLanguage};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

// region:    --- Tone Params

/// The text to analyze.
/// - `Json` is sent as `{"text": ...}` and requires an `application/json` content type.
/// - `Text` is sent verbatim for `text/plain` and `text/html`, and wrapped as `{"text": ...}` for `application/json`.
#[derive(Debug, Clone, From, Serialize)]
#[serde(untagged)]
pub enum ToneInput {
	#[from]
	Json(ToneInputJson),
	#[from]
	Text(String),
}

impl From<&str> for ToneInput {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneInputJson {
	pub text: String,
}

impl ToneInputJson {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToneCategory {
	#[display("emotion")]
	#[serde(rename = "emotion")]
	Emotion,
	#[display("language")]
	#[serde(rename = "language")]
	Language,
	#[display("social")]
	#[serde(rename = "social")]
	Social,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToneParams {
	/// Required.
	pub tone_input: Option<ToneInput>,
	/// Required.
	pub content_type: Option<ContentType>,
	/// When false, sentence level analysis is skipped (default true).
	pub sentences: Option<bool>,
	/// Restricts the analysis to these categories (default all).
	pub tones: Option<Vec<ToneCategory>>,
	pub content_language: Option<ToneContentLanguage>,
	pub accept_language: Option<AcceptLanguage>,
}

/// Chainable Setters
impl ToneParams {
	#[must_use]
	pub fn with_tone_input(mut self, tone_input: impl Into<ToneInput>) -> Self {
		self.tone_input = Some(tone_input.into());
		self
	}

	#[must_use]
	pub fn with_content_type(mut self, content_type: impl Into<ContentType>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}

	#[must_use]
	pub const fn with_sentences(mut self, sentences: bool) -> Self {
		self.sentences = Some(sentences);
		self
	}

	#[must_use]
	pub fn with_tones(mut self, tones: Vec<ToneCategory>) -> Self {
		self.tones = Some(tones);
		self
	}

	#[must_use]
	pub const fn with_content_language(mut self, language: ToneContentLanguage) -> Self {
		self.content_language = Some(language);
		self
	}

	#[must_use]
	pub const fn with_accept_language(mut self, language: AcceptLanguage) -> Self {
		self.accept_language = Some(language);
		self
	}
}

// endregion: --- Tone Params

// region:    --- Tone Chat Params

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
	pub text: String,
	pub user: Option<String>,
}

impl Utterance {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			user: None,
		}
	}

	#[must_use]
	pub fn with_user(mut self, user: impl Into<String>) -> Self {
		self.user = Some(user.into());
		self
	}
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToneChatParams {
	/// Required.
	pub utterances: Option<Vec<Utterance>>,
	pub content_language: Option<ToneContentLanguage>,
	pub accept_language: Option<AcceptLanguage>,
}

/// Chainable Setters
impl ToneChatParams {
	#[must_use]
	pub fn with_utterances(mut self, utterances: Vec<Utterance>) -> Self {
		self.utterances = Some(utterances);
		self
	}

	#[must_use]
	pub const fn with_content_language(mut self, language: ToneContentLanguage) -> Self {
		self.content_language = Some(language);
		self
	}

	#[must_use]
	pub const fn with_accept_language(mut self, language: AcceptLanguage) -> Self {
		self.accept_language = Some(language);
		self
	}
}

// endregion: --- Tone Chat Params

// region:    --- Results

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneAnalysis {
	pub document_tone: DocumentAnalysis,
	pub sentences_tone: Option<Vec<SentenceAnalysis>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
	pub tones: Option<Vec<ToneScore>>,
	/// Only returned for older API versions (before `2017-09-21`).
	pub tone_categories: Option<Vec<ToneCategoryScores>>,
	pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceAnalysis {
	pub sentence_id: i64,
	pub text: String,
	pub tones: Option<Vec<ToneScore>>,
	pub tone_categories: Option<Vec<ToneCategoryScores>>,
	pub input_from: Option<i64>,
	pub input_to: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneScore {
	pub score: f64,
	pub tone_id: String,
	pub tone_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneCategoryScores {
	pub tones: Vec<ToneScore>,
	pub category_id: String,
	pub category_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtteranceAnalyses {
	pub utterances_tone: Vec<UtteranceAnalysis>,
	pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtteranceAnalysis {
	pub utterance_id: i64,
	pub utterance_text: String,
	pub tones: Vec<ToneScore>,
	pub error: Option<String>,
}

// endregion: --- Results
