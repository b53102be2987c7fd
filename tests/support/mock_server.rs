//! In-process HTTP server recording every request it receives.

use super::Result;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub method: Method,
	pub path: String,
	pub query: Option<String>,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl RecordedRequest {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|v| v.to_str().ok())
	}

	/// The decoded query pairs, in order.
	pub fn query_pairs(&self) -> Vec<(String, String)> {
		let Some(query) = self.query.as_deref() else {
			return Vec::new();
		};
		query
			.split('&')
			.filter(|pair| !pair.is_empty())
			.map(|pair| {
				let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
				(decode(k), decode(v))
			})
			.collect()
	}

	pub fn query_value(&self, name: &str) -> Option<String> {
		self.query_pairs().into_iter().find(|(k, _)| k == name).map(|(_, v)| v)
	}

	pub fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}

	pub fn body_json(&self) -> serde_json::Value {
		serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
	}
}

#[derive(Debug, Clone)]
pub struct MockResponse {
	pub status: StatusCode,
	pub content_type: &'static str,
	pub body: String,
}

impl MockResponse {
	pub fn json(body: serde_json::Value) -> Self {
		Self {
			status: StatusCode::OK,
			content_type: "application/json",
			body: body.to_string(),
		}
	}

	pub fn text(content_type: &'static str, body: impl Into<String>) -> Self {
		Self {
			status: StatusCode::OK,
			content_type,
			body: body.into(),
		}
	}

	pub fn with_status(mut self, status: StatusCode) -> Self {
		self.status = status;
		self
	}
}

type Responder = dyn Fn(&RecordedRequest) -> MockResponse + Send + Sync;

#[derive(Clone)]
struct MockState {
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
	responder: Arc<Responder>,
}

pub struct MockServer {
	pub base_url: String,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
	/// Starts the server on an ephemeral port. `responder` builds the response of each request.
	pub async fn start(responder: impl Fn(&RecordedRequest) -> MockResponse + Send + Sync + 'static) -> Result<Self> {
		let requests = Arc::new(Mutex::new(Vec::new()));
		let state = MockState {
			requests: requests.clone(),
			responder: Arc::new(responder),
		};
		let app = Router::new().fallback(handle).with_state(state);

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Ok(Self {
			base_url: format!("http://{addr}/api"),
			requests,
		})
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().map(|reqs| reqs.clone()).unwrap_or_default()
	}

	pub fn single_request(&self) -> RecordedRequest {
		let requests = self.requests();
		assert_eq!(requests.len(), 1, "expected exactly one request");
		requests.into_iter().next().unwrap()
	}
}

async fn handle(State(state): State<MockState>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
	let recorded = RecordedRequest {
		method,
		path: uri.path().to_string(),
		query: uri.query().map(ToString::to_string),
		headers,
		body,
	};
	let MockResponse {
		status,
		content_type,
		body,
	} = (state.responder)(&recorded);
	if let Ok(mut requests) = state.requests.lock() {
		requests.push(recorded);
	}
	(status, [("content-type", content_type)], body).into_response()
}

fn decode(value: &str) -> String {
	urlencoding::decode(&value.replace('+', " ")).map(|v| v.into_owned()).unwrap_or_else(|_| value.to_string())
}
