//! Personality Insights v3: personality characteristics (Big Five, Needs, Values) inferred from written text.

// region:    --- Modules

mod service_impl;
mod types;

pub use service_impl::*;
pub use types::*;

// endregion: --- Modules
