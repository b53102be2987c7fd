//! Parameters and results of the Visual Recognition operations.
//!
//! File attachments are not part of the params mapping used for the required params check
//! (`#[serde(skip)]`), the operations check them on their own. Absent values of every params
//! struct serialize as `null`, which the check treats as missing.

use crate::call::{ClassifyLanguage, FileAttachment};
use serde::{Deserialize, Serialize};

// region:    --- Classify Params

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassifyParams {
	/// An image file (.jpg, .png) or a .zip file with images.
	#[serde(skip)]
	pub images_file: Option<FileAttachment>,
	pub accept_language: Option<ClassifyLanguage>,
	/// The URL of an image (.jpg, .png).
	pub url: Option<String>,
	/// The minimum score a class must have to be returned (0.0 to 1.0).
	pub threshold: Option<f32>,
	/// `IBM` and/or `me`.
	pub owners: Option<Vec<String>>,
	/// e.g., `default`, `food`, `explicit`, or custom classifier ids.
	pub classifier_ids: Option<Vec<String>>,
}

/// Chainable Setters
impl ClassifyParams {
	#[must_use]
	pub fn with_images_file(mut self, images_file: FileAttachment) -> Self {
		self.images_file = Some(images_file);
		self
	}

	#[must_use]
	pub const fn with_accept_language(mut self, language: ClassifyLanguage) -> Self {
		self.accept_language = Some(language);
		self
	}

	#[must_use]
	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	#[must_use]
	pub const fn with_threshold(mut self, threshold: f32) -> Self {
		self.threshold = Some(threshold);
		self
	}

	#[must_use]
	pub fn with_owners(mut self, owners: Vec<String>) -> Self {
		self.owners = Some(owners);
		self
	}

	#[must_use]
	pub fn with_classifier_ids(mut self, classifier_ids: Vec<String>) -> Self {
		self.classifier_ids = Some(classifier_ids);
		self
	}
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DetectFacesParams {
	#[serde(skip)]
	pub images_file: Option<FileAttachment>,
	pub url: Option<String>,
}

/// Chainable Setters
impl DetectFacesParams {
	#[must_use]
	pub fn with_images_file(mut self, images_file: FileAttachment) -> Self {
		self.images_file = Some(images_file);
		self
	}

	#[must_use]
	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}
}

// endregion: --- Classify Params

// region:    --- Classifier Params

/// Create (and update) a custom classifier.
/// Each positive example is a .zip of images of one class, sent as the `<class>_positive_examples` form part.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateClassifierParams {
	/// Required.
	pub name: Option<String>,
	/// Required (at least one class).
	#[serde(skip)]
	pub positive_examples: Vec<(String, FileAttachment)>,
	#[serde(skip)]
	pub negative_examples: Option<FileAttachment>,
}

/// Chainable Setters
impl CreateClassifierParams {
	#[must_use]
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	#[must_use]
	pub fn with_positive_examples(mut self, class_name: impl Into<String>, zip_file: FileAttachment) -> Self {
		self.positive_examples.push((class_name.into(), zip_file));
		self
	}

	#[must_use]
	pub fn with_negative_examples(mut self, zip_file: FileAttachment) -> Self {
		self.negative_examples = Some(zip_file);
		self
	}
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateClassifierParams {
	/// Required.
	pub classifier_id: Option<String>,
	#[serde(skip)]
	pub positive_examples: Vec<(String, FileAttachment)>,
	#[serde(skip)]
	pub negative_examples: Option<FileAttachment>,
}

/// Chainable Setters
impl UpdateClassifierParams {
	#[must_use]
	pub fn with_classifier_id(mut self, classifier_id: impl Into<String>) -> Self {
		self.classifier_id = Some(classifier_id.into());
		self
	}

	#[must_use]
	pub fn with_positive_examples(mut self, class_name: impl Into<String>, zip_file: FileAttachment) -> Self {
		self.positive_examples.push((class_name.into(), zip_file));
		self
	}

	#[must_use]
	pub fn with_negative_examples(mut self, zip_file: FileAttachment) -> Self {
		self.negative_examples = Some(zip_file);
		self
	}
}

/// Params of `get_classifier`, `delete_classifier` and `get_core_ml_model`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassifierIdParams {
	/// Required.
	pub classifier_id: Option<String>,
}

impl ClassifierIdParams {
	pub fn new(classifier_id: impl Into<String>) -> Self {
		Self {
			classifier_id: Some(classifier_id.into()),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListClassifiersParams {
	/// Return the full classifier details.
	pub verbose: Option<bool>,
}

impl ListClassifiersParams {
	#[must_use]
	pub const fn with_verbose(mut self, verbose: bool) -> Self {
		self.verbose = Some(verbose);
		self
	}
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteUserDataParams {
	/// Required. The customer ID the data was tagged with (`X-Watson-Metadata: customer_id=...`).
	pub customer_id: Option<String>,
}

impl DeleteUserDataParams {
	pub fn new(customer_id: impl Into<String>) -> Self {
		Self {
			customer_id: Some(customer_id.into()),
		}
	}
}

// endregion: --- Classifier Params

// region:    --- Classify Results

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedImages {
	pub custom_classes: Option<i64>,
	pub images_processed: Option<i64>,
	pub images: Vec<ClassifiedImage>,
	pub warnings: Option<Vec<WarningInfo>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedImage {
	pub source_url: Option<String>,
	pub resolved_url: Option<String>,
	/// The image file name (for uploaded images).
	pub image: Option<String>,
	pub error: Option<ErrorInfo>,
	#[serde(default)]
	pub classifiers: Vec<ClassifierResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierResult {
	pub name: String,
	pub classifier_id: String,
	pub classes: Vec<ClassResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassResult {
	#[serde(rename = "class")]
	pub class_name: String,
	pub score: f64,
	pub type_hierarchy: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedFaces {
	pub images_processed: Option<i64>,
	pub images: Vec<ImageWithFaces>,
	pub warnings: Option<Vec<WarningInfo>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageWithFaces {
	#[serde(default)]
	pub faces: Vec<Face>,
	pub image: Option<String>,
	pub source_url: Option<String>,
	pub resolved_url: Option<String>,
	pub error: Option<ErrorInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
	pub age: Option<FaceAge>,
	pub gender: Option<FaceGender>,
	pub face_location: Option<FaceLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceAge {
	pub min: Option<i64>,
	pub max: Option<i64>,
	pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceGender {
	/// `MALE` or `FEMALE`.
	pub gender: String,
	pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceLocation {
	pub width: f64,
	pub height: f64,
	pub left: f64,
	pub top: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
	pub code: i64,
	pub description: String,
	pub error_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningInfo {
	pub warning_id: String,
	pub description: String,
}

// endregion: --- Classify Results

// region:    --- Classifier Results

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifier {
	pub classifier_id: String,
	pub name: String,
	pub owner: Option<String>,
	/// `ready`, `training`, `retraining` or `failed`.
	pub status: Option<String>,
	pub core_ml_enabled: Option<bool>,
	pub explanation: Option<String>,
	pub created: Option<String>,
	pub classes: Option<Vec<ClassifierClass>>,
	pub retrained: Option<String>,
	pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierClass {
	#[serde(rename = "class")]
	pub class_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifiers {
	pub classifiers: Vec<Classifier>,
}

// endregion: --- Classifier Results
