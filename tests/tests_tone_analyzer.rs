mod support;

use crate::support::{MockResponse, MockServer, Result, common_options};
use axum::http::StatusCode;
use serde_json::json;
use watson::Error;
use watson::call::{AcceptLanguage, ContentType};
use watson::services::ToneAnalyzerV3;
use watson::services::tone_analyzer::{ToneCategory, ToneChatParams, ToneInputJson, ToneParams, Utterance};

fn tone_response() -> serde_json::Value {
	json!({
		"document_tone": {
			"tones": [{"score": 0.88, "tone_id": "joy", "tone_name": "Joy"}]
		},
		"sentences_tone": [
			{"sentence_id": 0, "text": "I am happy.", "tones": [{"score": 0.88, "tone_id": "joy", "tone_name": "Joy"}]}
		]
	})
}

#[tokio::test]
async fn test_tone_plain_text_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start(|_| MockResponse::json(tone_response())).await?;
	let service = ToneAnalyzerV3::new(common_options(&server.base_url, "2017-09-21"))?;
	let params = ToneParams::default()
		.with_tone_input("I am happy.")
		.with_content_type(ContentType::plain().with_charset("utf-8"))
		.with_tones(vec![ToneCategory::Emotion, ToneCategory::Social])
		.with_accept_language(AcceptLanguage::French);

	// -- Exec
	let res = service.tone(params).await?;

	// -- Check response
	assert_eq!(res.status, StatusCode::OK);
	let tones = res.body.document_tone.tones.as_deref().unwrap_or_default();
	assert_eq!(tones[0].tone_id, "joy");
	assert_eq!(res.body.sentences_tone.as_ref().map(Vec::len), Some(1));

	// -- Check request
	let req = server.single_request();
	assert_eq!(req.method, axum::http::Method::POST);
	assert_eq!(req.path, "/api/v3/tone");
	assert_eq!(
		req.query_pairs(),
		vec![
			("version".to_string(), "2017-09-21".to_string()),
			("tones".to_string(), "emotion,social".to_string()),
		]
	);
	assert_eq!(req.header("content-type"), Some("text/plain;charset=utf-8"));
	assert_eq!(req.header("accept-language"), Some("fr"));
	assert_eq!(req.header("content-language"), None);
	assert_eq!(req.header("accept"), Some("application/json"));
	assert_eq!(req.body_text(), "I am happy.");

	Ok(())
}

#[tokio::test]
async fn test_tone_json_input_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start(|_| MockResponse::json(tone_response())).await?;
	let service = ToneAnalyzerV3::new(common_options(&server.base_url, "2017-09-21"))?;
	let params = ToneParams::default()
		.with_tone_input(ToneInputJson::new("I am happy."))
		.with_content_type(ContentType::json())
		.with_sentences(false);

	// -- Exec
	service.tone(params).await?;

	// -- Check
	let req = server.single_request();
	assert_eq!(req.query_value("sentences").as_deref(), Some("false"));
	assert_eq!(req.query_value("tones"), None);
	assert_eq!(req.header("content-type"), Some("application/json"));
	assert_eq!(req.body_json(), json!({"text": "I am happy."}));

	Ok(())
}

#[tokio::test]
async fn test_tone_missing_params_no_request() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start(|_| MockResponse::json(tone_response())).await?;
	let service = ToneAnalyzerV3::new(common_options(&server.base_url, "2017-09-21"))?;

	// -- Exec
	let res = service.tone(ToneParams::default().with_tone_input("hi")).await;

	// -- Check
	match res {
		Err(Error::MissingParams { operation, params }) => {
			assert_eq!(operation, "tone_analyzer.tone");
			assert_eq!(params, vec!["content_type"]);
		}
		other => panic!("expected MissingParams, got {other:?}"),
	}
	assert!(server.requests().is_empty());

	Ok(())
}

#[tokio::test]
async fn test_tone_chat_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start(|_| {
		MockResponse::json(json!({
			"utterances_tone": [
				{"utterance_id": 0, "utterance_text": "Hello", "tones": [{"score": 0.6, "tone_id": "polite", "tone_name": "Polite"}]}
			]
		}))
	})
	.await?;
	let service = ToneAnalyzerV3::new(common_options(&server.base_url, "2017-09-21"))?;
	let params = ToneChatParams::default().with_utterances(vec![
		Utterance::new("Hello").with_user("customer"),
		Utterance::new("How can I help?"),
	]);

	// -- Exec
	let res = service.tone_chat(params).await?;

	// -- Check
	assert_eq!(res.body.utterances_tone.len(), 1);
	let req = server.single_request();
	assert_eq!(req.path, "/api/v3/tone_chat");
	assert_eq!(
		req.body_json(),
		json!({"utterances": [{"text": "Hello", "user": "customer"}, {"text": "How can I help?"}]})
	);

	Ok(())
}

#[tokio::test]
async fn test_tone_failed_status() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start(|_| {
		MockResponse::json(json!({"code": 400, "error": "No text given"})).with_status(StatusCode::BAD_REQUEST)
	})
	.await?;
	let service = ToneAnalyzerV3::new(common_options(&server.base_url, "2017-09-21"))?;
	let params = ToneParams::default()
		.with_tone_input("")
		.with_content_type(ContentType::plain());

	// -- Exec
	let err = match service.tone(params).await {
		Err(err) => err,
		Ok(res) => panic!("expected an error, got {res:?}"),
	};

	// -- Check
	assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
	let webc_error = err.webc_error().ok_or("should be a web call error")?;
	assert_eq!(webc_error.remote_message().as_deref(), Some("No text given"));
	assert_eq!(server.requests().len(), 1);

	Ok(())
}
