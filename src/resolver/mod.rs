//! The resolver module holds the constructs to locate a Watson service (`Endpoint`)
//! and authenticate against it (`AuthData`).

// region:    --- Modules

mod auth_data;
mod endpoint;

pub use auth_data::*;
pub use endpoint::*;

// endregion: --- Modules
