use super::{
	ClassifiedImages,
	Classifier,
	ClassifierIdParams,
	Classifiers,
	ClassifyParams,
	CreateClassifierParams,
	DeleteUserDataParams,
	DetectFacesParams,
	DetectedFaces,
	ListClassifiersParams,
	UpdateClassifierParams,
};
use crate::call::{CallDescriptor, FileAttachment, HttpMethod, Operation, ResponseFormat};
use crate::client::{ServiceDefaults, ServiceOptions, ServiceResponse};
use crate::services::ServiceSession;
use crate::webc::{WebClient, WebStream};
use crate::{Error, Result, ServiceConfig};
use bytes::Bytes;
use serde_json::Value;

const CLASSIFY: Operation = Operation {
	name: "visual_recognition.classify",
	method: HttpMethod::Post,
	path: "/v3/classify",
	required: &[],
};

const DETECT_FACES: Operation = Operation {
	name: "visual_recognition.detect_faces",
	method: HttpMethod::Post,
	path: "/v3/detect_faces",
	required: &[],
};

const CREATE_CLASSIFIER: Operation = Operation {
	name: "visual_recognition.create_classifier",
	method: HttpMethod::Post,
	path: "/v3/classifiers",
	required: &["name"],
};

const DELETE_CLASSIFIER: Operation = Operation {
	name: "visual_recognition.delete_classifier",
	method: HttpMethod::Delete,
	path: "/v3/classifiers/{classifier_id}",
	required: &["classifier_id"],
};

const GET_CLASSIFIER: Operation = Operation {
	name: "visual_recognition.get_classifier",
	method: HttpMethod::Get,
	path: "/v3/classifiers/{classifier_id}",
	required: &["classifier_id"],
};

const LIST_CLASSIFIERS: Operation = Operation {
	name: "visual_recognition.list_classifiers",
	method: HttpMethod::Get,
	path: "/v3/classifiers",
	required: &[],
};

const UPDATE_CLASSIFIER: Operation = Operation {
	name: "visual_recognition.update_classifier",
	method: HttpMethod::Post,
	path: "/v3/classifiers/{classifier_id}",
	required: &["classifier_id"],
};

const GET_CORE_ML_MODEL: Operation = Operation {
	name: "visual_recognition.get_core_ml_model",
	method: HttpMethod::Get,
	path: "/v3/classifiers/{classifier_id}/core_ml_model",
	required: &["classifier_id"],
};

const DELETE_USER_DATA: Operation = Operation {
	name: "visual_recognition.delete_user_data",
	method: HttpMethod::Delete,
	path: "/v3/user_data",
	required: &["customer_id"],
};

#[derive(Debug, Clone)]
pub struct VisualRecognitionV3 {
	session: ServiceSession,
}

impl VisualRecognitionV3 {
	pub const DEFAULTS: ServiceDefaults = ServiceDefaults {
		name: "visual_recognition",
		base_url: "https://gateway.watsonplatform.net/visual-recognition/api",
		env_prefix: "VISUAL_RECOGNITION",
	};

	/// The latest API version date known to this client.
	pub const LATEST_VERSION: &str = "2018-03-19";

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

/// Operations - Classify & Detect
impl VisualRecognitionV3 {
	/// Classifies an uploaded image (or .zip of images), or the image at `url`.
	pub async fn classify(&self, params: ClassifyParams) -> Result<ServiceResponse<ClassifiedImages>> {
		let call = Self::new_classify_call(params)?;
		self.session.web_client().dispatch_json(self.session.config(), call).await
	}

	/// Detects the faces of an uploaded image (or .zip of images), or of the image at `url`.
	pub async fn detect_faces(&self, params: DetectFacesParams) -> Result<ServiceResponse<DetectedFaces>> {
		DETECT_FACES.validate(&params)?;
		let DetectFacesParams { images_file, url } = params;

		let call = DETECT_FACES
			.new_call()
			.with_form_file_opt("images_file", images_file)
			.with_form_text_opt("url", url);

		self.session.web_client().dispatch_json(self.session.config(), call).await
	}
}

/// Operations - Custom classifiers
impl VisualRecognitionV3 {
	/// Trains a new custom classifier from positive (and optionally negative) example .zip files.
	pub async fn create_classifier(&self, params: CreateClassifierParams) -> Result<ServiceResponse<Classifier>> {
		CREATE_CLASSIFIER.validate(&params)?;
		let CreateClassifierParams {
			name,
			positive_examples,
			negative_examples,
		} = params;

		if positive_examples.is_empty() {
			return Err(Error::MissingParams {
				operation: CREATE_CLASSIFIER.name,
				params: vec!["positive_examples"],
			});
		}

		let call = CREATE_CLASSIFIER.new_call().with_form_text_opt("name", name);
		let call = with_examples(CREATE_CLASSIFIER, call, positive_examples, negative_examples)?;

		self.session.web_client().dispatch_json(self.session.config(), call).await
	}

	pub async fn delete_classifier(&self, params: ClassifierIdParams) -> Result<ServiceResponse<Value>> {
		let call = Self::new_classifier_id_call(DELETE_CLASSIFIER, params)?;
		self.session.web_client().dispatch_json(self.session.config(), call).await
	}

	pub async fn get_classifier(&self, params: ClassifierIdParams) -> Result<ServiceResponse<Classifier>> {
		let call = Self::new_classifier_id_call(GET_CLASSIFIER, params)?;
		self.session.web_client().dispatch_json(self.session.config(), call).await
	}

	pub async fn list_classifiers(&self, params: ListClassifiersParams) -> Result<ServiceResponse<Classifiers>> {
		LIST_CLASSIFIERS.validate(&params)?;
		let call = LIST_CLASSIFIERS.new_call().with_query_opt("verbose", params.verbose);
		self.session.web_client().dispatch_json(self.session.config(), call).await
	}

	/// Retrains a custom classifier with new classes or new examples of existing classes.
	pub async fn update_classifier(&self, params: UpdateClassifierParams) -> Result<ServiceResponse<Classifier>> {
		UPDATE_CLASSIFIER.validate(&params)?;
		let UpdateClassifierParams {
			classifier_id,
			positive_examples,
			negative_examples,
		} = params;

		let classifier_id = non_blank_classifier_id(UPDATE_CLASSIFIER, classifier_id)?;
		let call = UPDATE_CLASSIFIER.new_call().with_path_param("classifier_id", classifier_id);
		let call = with_examples(UPDATE_CLASSIFIER, call, positive_examples, negative_examples)?;

		self.session.web_client().dispatch_json(self.session.config(), call).await
	}

	/// Downloads the Core ML model (`.mlmodel`) of a custom classifier.
	pub async fn get_core_ml_model(&self, params: ClassifierIdParams) -> Result<ServiceResponse<Bytes>> {
		let call = Self::new_classifier_id_call(GET_CORE_ML_MODEL, params)?.with_response_format(ResponseFormat::Binary);
		self.session.web_client().dispatch_bytes(self.session.config(), call).await
	}

	/// Streaming variant of `get_core_ml_model`, the model bytes are yielded as they are received.
	pub fn get_core_ml_model_stream(&self, params: ClassifierIdParams) -> Result<WebStream> {
		let call = Self::new_classifier_id_call(GET_CORE_ML_MODEL, params)?.with_response_format(ResponseFormat::Binary);
		self.session.web_client().dispatch_stream(self.session.config(), call)
	}
}

/// Operations - User data
impl VisualRecognitionV3 {
	/// Deletes all the data associated with a customer ID.
	pub async fn delete_user_data(&self, params: DeleteUserDataParams) -> Result<ServiceResponse<Value>> {
		DELETE_USER_DATA.validate(&params)?;
		let call = DELETE_USER_DATA
			.new_call()
			.with_query_opt("customer_id", params.customer_id);
		self.session.web_client().dispatch_json(self.session.config(), call).await
	}
}

// region:    --- Support

impl VisualRecognitionV3 {
	fn new_classify_call(params: ClassifyParams) -> Result<CallDescriptor> {
		CLASSIFY.validate(&params)?;
		let ClassifyParams {
			images_file,
			accept_language,
			url,
			threshold,
			owners,
			classifier_ids,
		} = params;

		let call = CLASSIFY
			.new_call()
			.with_header_opt("Accept-Language", accept_language)
			.with_form_file_opt("images_file", images_file)
			.with_form_text_opt("url", url)
			.with_form_text_opt("threshold", threshold)
			.with_form_list_opt("owners", owners.as_deref())
			.with_form_list_opt("classifier_ids", classifier_ids.as_deref());

		Ok(call)
	}

	fn new_classifier_id_call(operation: Operation, params: ClassifierIdParams) -> Result<CallDescriptor> {
		operation.validate(&params)?;
		let classifier_id = non_blank_classifier_id(operation, params.classifier_id)?;
		Ok(operation.new_call().with_path_param("classifier_id", classifier_id))
	}
}

/// A blank id would resolve to `/v3/classifiers/`, which is another operation.
fn non_blank_classifier_id(operation: Operation, classifier_id: Option<String>) -> Result<String> {
	match classifier_id {
		Some(classifier_id) if !classifier_id.trim().is_empty() => Ok(classifier_id),
		_ => Err(Error::InvalidParam {
			operation: operation.name,
			param: "classifier_id",
			cause: "classifier id cannot be blank".to_string(),
		}),
	}
}

/// Adds the `<class>_positive_examples` and `negative_examples` form parts.
fn with_examples(
	operation: Operation,
	mut call: CallDescriptor,
	positive_examples: Vec<(String, FileAttachment)>,
	negative_examples: Option<FileAttachment>,
) -> Result<CallDescriptor> {
	for (class_name, zip_file) in positive_examples {
		if class_name.trim().is_empty() {
			return Err(Error::InvalidParam {
				operation: operation.name,
				param: "positive_examples",
				cause: "class name cannot be empty".to_string(),
			});
		}
		call = call.with_form_file_opt(format!("{class_name}_positive_examples"), Some(zip_file));
	}
	Ok(call.with_form_file_opt("negative_examples", negative_examples))
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
