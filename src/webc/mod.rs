//! The webc module turns a `CallDescriptor` into an actual HTTP exchange.
//! - `WebClient::dispatch` is the completion mode (one buffered `WebResponse`).
//! - `WebClient::dispatch_stream` is the streaming mode (`WebStream`).

// region:    --- Modules

mod error;
mod web_client;
mod web_stream;

pub use error::{Error, Result};
pub use web_client::*;
pub use web_stream::*;

// endregion: --- Modules
