//! Visual Recognition v3: image classification (default and custom classifiers) and face detection.

// region:    --- Modules

mod service_impl;
mod types;

pub use service_impl::*;
pub use types::*;

// endregion: --- Modules
