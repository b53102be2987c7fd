use super::{ToneAnalysis, ToneChatParams, ToneInput, ToneParams, UtteranceAnalyses};
use crate::call::{HttpMethod, Operation};
use crate::client::{ServiceDefaults, ServiceOptions, ServiceResponse};
use crate::services::ServiceSession;
use crate::webc::WebClient;
use crate::{Error, Result, ServiceConfig};
use serde_json::{Value, json};
use value_ext::JsonValueExt;

const TONE: Operation = Operation {
	name: "tone_analyzer.tone",
	method: HttpMethod::Post,
	path: "/v3/tone",
	required: &["tone_input", "content_type"],
};

const TONE_CHAT: Operation = Operation {
	name: "tone_analyzer.tone_chat",
	method: HttpMethod::Post,
	path: "/v3/tone_chat",
	required: &["utterances"],
};

#[derive(Debug, Clone)]
pub struct ToneAnalyzerV3 {
	session: ServiceSession,
}

impl ToneAnalyzerV3 {
	pub const DEFAULTS: ServiceDefaults = ServiceDefaults {
		name: "tone_analyzer",
		base_url: "https://gateway.watsonplatform.net/tone-analyzer/api",
		env_prefix: "TONE_ANALYZER",
	};

	/// The latest API version date known to this client.
	pub const LATEST_VERSION: &str = "2017-09-21";

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
impl ToneAnalyzerV3 {
	/// Analyzes the emotional, language and social tones of a text (document and sentence level).
	pub async fn tone(&self, params: ToneParams) -> Result<ServiceResponse<ToneAnalysis>> {
		TONE.validate(&params)?;
		let ToneParams {
			tone_input,
			content_type,
			sentences,
			tones,
			content_language,
			accept_language,
		} = params;

		// -- Required (validated above)
		let (Some(tone_input), Some(content_type)) = (tone_input, content_type) else {
			return Err(Error::MissingParams {
				operation: TONE.name,
				params: TONE.required.to_vec(),
			});
		};

		let body: Value = match (tone_input, content_type.is_json()) {
			(ToneInput::Json(input), true) => serde_json::to_value(input)?,
			(ToneInput::Text(text), true) => {
				let mut body = json!({});
				body.x_insert("text", text)?;
				body
			}
			(ToneInput::Text(text), false) => Value::String(text),
			(ToneInput::Json(_), false) => {
				return Err(Error::InvalidParam {
					operation: TONE.name,
					param: "tone_input",
					cause: format!("a JSON tone input cannot be sent as '{content_type}'"),
				});
			}
		};

		let call = TONE
			.new_call()
			.with_query_opt("sentences", sentences)
			.with_query_list_opt("tones", tones.as_deref())
			.with_header("Content-Type", &content_type)
			.with_header_opt("Content-Language", content_language)
			.with_header_opt("Accept-Language", accept_language)
			.with_body(body);

		self.session.web_client().dispatch_json(self.session.config(), call).await
	}

	/// Analyzes the tones of customer service and customer support conversations.
	pub async fn tone_chat(&self, params: ToneChatParams) -> Result<ServiceResponse<UtteranceAnalyses>> {
		TONE_CHAT.validate(&params)?;
		let ToneChatParams {
			utterances,
			content_language,
			accept_language,
		} = params;

		let call = TONE_CHAT
			.new_call()
			.with_header("Content-Type", "application/json")
			.with_header_opt("Content-Language", content_language)
			.with_header_opt("Accept-Language", accept_language)
			.with_body(json!({ "utterances": utterances }));

		self.session.web_client().dispatch_json(self.session.config(), call).await
	}
}

// region:    --- Tests


// endregion: --- Tests
