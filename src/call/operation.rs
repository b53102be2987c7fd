use crate::call::{CallDescriptor, HttpMethod};
use crate::Result;
use crate::support::validate_params;
use serde::Serialize;

/// The fixed shape of one remote operation of a facade.
/// Each facade declares its operations as constants, and each facade method
/// validates against `required` before building its `CallDescriptor` from `new_call()`.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
	/// `<service>.<operation>`, e.g., `tone_analyzer.tone`.
	pub name: &'static str,
	pub method: HttpMethod,
	pub path: &'static str,
	pub required: &'static [&'static str],
}

impl Operation {
	/// Fails with `Error::MissingParams` (and no network I/O) if any of the `required` params is absent.
	pub fn validate<P: Serialize>(&self, params: &P) -> Result<()> {
		validate_params(self.name, params, self.required)
	}

	pub fn new_call(&self) -> CallDescriptor {
		CallDescriptor::new(self.name, self.method, self.path)
	}
}
