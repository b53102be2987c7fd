use super::{Profile, ProfileContent, ProfileParams};
use crate::call::{CallDescriptor, HttpMethod, Operation, ResponseFormat};
use crate::client::{ServiceDefaults, ServiceOptions, ServiceResponse};
use crate::services::ServiceSession;
use crate::webc::{WebClient, WebStream};
use crate::{Error, Result, ServiceConfig};
use serde_json::Value;

const PROFILE: Operation = Operation {
	name: "personality_insights.profile",
	method: HttpMethod::Post,
	path: "/v3/profile",
	required: &["content", "content_type"],
};

const PROFILE_CSV: Operation = Operation {
	name: "personality_insights.profile_csv",
	..PROFILE
};

#[derive(Debug, Clone)]
pub struct PersonalityInsightsV3 {
	session: ServiceSession,
}

impl PersonalityInsightsV3 {
	pub const DEFAULTS: ServiceDefaults = ServiceDefaults {
		name: "personality_insights",
		base_url: "https://gateway.watsonplatform.net/personality-insights/api",
		env_prefix: "PERSONALITY_INSIGHTS",
	};

	/// The latest API version date known to this client.
	pub const LATEST_VERSION: &str = "2017-10-13";

	/// Fails with `Error::Configuration` if `options` has no version date.
	pub fn new(options: ServiceOptions) -> Result<Self> {
		let session = ServiceSession::new(options, Self::DEFAULTS)?;
		Ok(Self { session })
	}

	#[must_use]
	pub fn with_web_client(mut self, web_client: WebClient) -> Self {
		self.session = self.session.with_web_client(web_client);
		self
	}

	pub fn config(&self) -> &ServiceConfig {
		self.session.config()
	}
}

/// Operations
impl PersonalityInsightsV3 {
	/// Generates a personality profile (JSON) for the author of the input text.
	pub async fn profile(&self, params: ProfileParams) -> Result<ServiceResponse<Profile>> {
		let call = Self::new_profile_call(PROFILE, params)?;
		self.session.web_client().dispatch_json(self.session.config(), call).await
	}

	/// Generates a personality profile as CSV text.
	/// The response is always requested as `text/csv`, whatever the `content_type` of the input.
	pub async fn profile_csv(&self, params: ProfileParams) -> Result<ServiceResponse<String>> {
		let call = Self::new_profile_call(PROFILE_CSV, params)?.with_response_format(ResponseFormat::Csv);
		self.session.web_client().dispatch_text(self.session.config(), call).await
	}

	/// Streaming variant of `profile_csv`, each stream item is one CSV row.
	pub fn profile_csv_stream(&self, params: ProfileParams) -> Result<WebStream> {
		let call = Self::new_profile_call(PROFILE_CSV, params)?.with_response_format(ResponseFormat::Csv);
		self.session.web_client().dispatch_stream(self.session.config(), call)
	}
}

// region:    --- Support

impl PersonalityInsightsV3 {
	fn new_profile_call(operation: Operation, params: ProfileParams) -> Result<CallDescriptor> {
		operation.validate(&params)?;
		let ProfileParams {
			content,
			content_type,
			content_language,
			accept_language,
			raw_scores,
			csv_headers,
			consumption_preferences,
		} = params;

		// -- Required (validated above)
		let (Some(content), Some(content_type)) = (content, content_type) else {
			return Err(Error::MissingParams {
				operation: operation.name,
				params: operation.required.to_vec(),
			});
		};

		let body: Value = match (content, content_type.is_json()) {
			(ProfileContent::Items(content), true) => serde_json::to_value(content)?,
			(ProfileContent::Text(text), true) => {
				serde_json::from_str(&text).map_err(|err| Error::InvalidParam {
					operation: operation.name,
					param: "content",
					cause: format!("content is not valid JSON for 'application/json': {err}"),
				})?
			}
			(ProfileContent::Text(text), false) => Value::String(text),
			(ProfileContent::Items(_), false) => {
				return Err(Error::InvalidParam {
					operation: operation.name,
					param: "content",
					cause: format!("content items cannot be sent as '{content_type}'"),
				});
			}
		};

		let call = operation
			.new_call()
			.with_query_opt("raw_scores", raw_scores)
			.with_query_opt("csv_headers", csv_headers)
			.with_query_opt("consumption_preferences", consumption_preferences)
			.with_header("Content-Type", &content_type)
			.with_header_opt("Content-Language", content_language)
			.with_header_opt("Accept-Language", accept_language)
			.with_body(body);

		Ok(call)
	}
}

// endregion: --- Support

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use crate::call::{AcceptLanguage, ContentType};
	use crate::services::personality_insights::ContentItem;

	#[test]
	fn test_profile_call_text() {
		let params = ProfileParams::default()
			.with_content("Call me Ishmael.")
			.with_content_type(ContentType::plain().with_charset("utf-8"))
			.with_raw_scores(true)
			.with_accept_language(AcceptLanguage::French);
		let call = PersonalityInsightsV3::new_profile_call(PROFILE, params).unwrap();

		assert_eq!(call.query, vec![("raw_scores".to_string(), "true".to_string())]);
		assert_eq!(call.header("content-type"), Some("text/plain;charset=utf-8"));
		assert_eq!(call.header("Accept-Language"), Some("fr"));
		assert_eq!(call.header("Content-Language"), None);
		assert_eq!(call.body, Some(Value::String("Call me Ishmael.".to_string())));
		assert!(!call.is_json_content());
	}

	#[test]
	fn test_profile_call_items() {
		let params = ProfileParams::default()
			.with_content(vec![ContentItem::new("hello").with_id("1")])
			.with_content_type(ContentType::json());
		let call = PersonalityInsightsV3::new_profile_call(PROFILE, params).unwrap();
		assert!(call.is_json_content());
		assert_eq!(
			call.body,
			Some(serde_json::json!({"contentItems": [{"content": "hello", "id": "1"}]}))
		);
	}

	#[test]
	fn test_profile_call_invalid_json_text() {
		let params = ProfileParams::default()
			.with_content("not json")
			.with_content_type(ContentType::json());
		let res = PersonalityInsightsV3::new_profile_call(PROFILE, params);
		assert!(matches!(res, Err(Error::InvalidParam { param: "content", .. })));
	}

	#[test]
	fn test_profile_call_missing() {
		let res = PersonalityInsightsV3::new_profile_call(PROFILE, ProfileParams::default());
		match res {
			Err(Error::MissingParams { params, .. }) => assert_eq!(params, vec!["content", "content_type"]),
			other => panic!("unexpected {other:?}"),
		}
	}
}

// endregion: --- Tests
