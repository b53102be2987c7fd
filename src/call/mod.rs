//! The call module contains the in-memory representation of one HTTP request (`CallDescriptor`)
//! before the `WebClient` serializes and sends it, as well as the closed value sets shared by the facades.

// region:    --- Modules

mod call_descriptor;
mod content_type;
mod language;
mod operation;

pub use call_descriptor::*;
pub use content_type::*;
pub use language::*;
pub use operation::*;

// endregion: --- Modules
