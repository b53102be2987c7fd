use crate::call::{AcceptLanguage, ContentType, ProfileContentLanguage};
use derive_more::From;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

// region:    --- Profile Params

/// The input of a profile.
/// - `Items` requires an `application/json` content type.
/// - `Text` is sent verbatim for `text/plain` and `text/html`. With `application/json`, it must be a JSON `Content` document.
#[derive(Debug, Clone, From, Serialize)]
#[serde(untagged)]
pub enum ProfileContent {
	#[from]
	Items(Content),
	#[from]
	Text(String),
}

impl From<&str> for ProfileContent {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<Vec<ContentItem>> for ProfileContent {
	fn from(content_items: Vec<ContentItem>) -> Self {
		Self::Items(Content { content_items })
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
	#[serde(rename = "contentItems")]
	pub content_items: Vec<ContentItem>,
}

/// One input item (e.g., a tweet or an email) of a JSON content.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentItem {
	pub content: String,
	pub id: Option<String>,
	/// Milliseconds since the UNIX Epoch.
	pub created: Option<i64>,
	pub updated: Option<i64>,
	/// `text/plain` or `text/html`.
	pub contenttype: Option<String>,
	pub language: Option<ProfileContentLanguage>,
	pub parentid: Option<String>,
	pub reply: Option<bool>,
	pub forward: Option<bool>,
}

impl ContentItem {
	pub fn new(content: impl Into<String>) -> Self {
		Self {
			content: content.into(),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	#[must_use]
	pub const fn with_language(mut self, language: ProfileContentLanguage) -> Self {
		self.language = Some(language);
		self
	}
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileParams {
	/// Required.
	pub content: Option<ProfileContent>,
	/// Required. The type of `content` (`Accept` of the response is set by the operation).
	pub content_type: Option<ContentType>,
	pub content_language: Option<ProfileContentLanguage>,
	pub accept_language: Option<AcceptLanguage>,
	/// Include the raw (not normalized) scores.
	pub raw_scores: Option<bool>,
	/// Include the column headers (for `profile_csv`).
	pub csv_headers: Option<bool>,
	pub consumption_preferences: Option<bool>,
}

/// Chainable Setters
impl ProfileParams {
	#[must_use]
	pub fn with_content(mut self, content: impl Into<ProfileContent>) -> Self {
		self.content = Some(content.into());
		self
	}

	#[must_use]
	pub fn with_content_type(mut self, content_type: impl Into<ContentType>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}

	#[must_use]
	pub const fn with_content_language(mut self, language: ProfileContentLanguage) -> Self {
		self.content_language = Some(language);
		self
	}

	#[must_use]
	pub const fn with_accept_language(mut self, language: AcceptLanguage) -> Self {
		self.accept_language = Some(language);
		self
	}

	#[must_use]
	pub const fn with_raw_scores(mut self, value: bool) -> Self {
		self.raw_scores = Some(value);
		self
	}

	#[must_use]
	pub const fn with_csv_headers(mut self, value: bool) -> Self {
		self.csv_headers = Some(value);
		self
	}

	#[must_use]
	pub const fn with_consumption_preferences(mut self, value: bool) -> Self {
		self.consumption_preferences = Some(value);
		self
	}
}

// endregion: --- Profile Params

// region:    --- Profile

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
	pub processed_language: String,
	pub word_count: i64,
	pub word_count_message: Option<String>,
	/// The Big Five personality characteristics.
	pub personality: Vec<Trait>,
	pub needs: Vec<Trait>,
	pub values: Vec<Trait>,
	/// Temporal behavior, only for timestamped JSON content.
	pub behavior: Option<Vec<Behavior>>,
	pub consumption_preferences: Option<Vec<ConsumptionPreferencesCategory>>,
	#[serde(default)]
	pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trait {
	pub trait_id: String,
	pub name: String,
	pub category: String,
	pub percentile: f64,
	pub raw_score: Option<f64>,
	pub significant: Option<bool>,
	pub children: Option<Vec<Trait>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Behavior {
	pub trait_id: String,
	pub name: String,
	pub category: String,
	pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionPreferencesCategory {
	pub consumption_preference_category_id: String,
	pub name: String,
	pub consumption_preferences: Vec<ConsumptionPreferences>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionPreferences {
	pub consumption_preference_id: String,
	pub name: String,
	pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
	pub warning_id: String,
	pub message: String,
}

// endregion: --- Profile
