//! Session level configuration shared by every call of a facade, and the response envelope.

// region:    --- Modules

mod service_config;
mod service_options;
mod service_response;

pub use service_config::*;
pub use service_options::*;
pub use service_response::*;

// endregion: --- Modules
