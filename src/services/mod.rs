//! The Watson service facades. Each facade exposes one method per remote operation.

// region:    --- Modules

mod service_session;

pub mod personality_insights;
pub mod tone_analyzer;
pub mod visual_recognition;

pub use personality_insights::PersonalityInsightsV3;
pub use service_session::*;
pub use tone_analyzer::ToneAnalyzerV3;
pub use visual_recognition::VisualRecognitionV3;

// endregion: --- Modules
