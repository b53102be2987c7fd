//! Client library for the IBM Watson Personality Insights, Visual Recognition and Tone Analyzer services.
//!
//! Each service is exposed as a facade (e.g., `ToneAnalyzerV3`) holding an immutable `ServiceConfig`.
//! Every facade method validates its required parameters, builds a `CallDescriptor`,
//! and hands it to the shared `WebClient` dispatcher.

// region:    --- Modules

mod error;
mod support;

pub mod call;
pub mod client;
pub mod resolver;
pub mod services;
pub mod webc;

pub use client::*;
pub use error::{Error, Result};
pub use support::missing_params;

// endregion: --- Modules
