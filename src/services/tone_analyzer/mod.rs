//! Tone Analyzer v3: emotional, language and social tones of texts and customer engagement utterances.

// region:    --- Modules

mod service_impl;
mod types;

pub use service_impl::*;
pub use types::*;

// endregion: --- Modules
