//! Parameter validation shared by all the service facades.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Returns the `required` keys that are absent (or `null`) in the `params` mapping,
/// in the order of `required`.
///
/// - `false`, `0`, and `""` are valid provided values.
/// - If `params` is not a JSON object (e.g., `Value::Null`), it is treated as an empty mapping.
pub fn missing_params(params: &Value, required: &[&'static str]) -> Vec<&'static str> {
	let map = params.as_object();
	required
		.iter()
		.filter(|key| map.and_then(|m| m.get(**key)).is_none_or(Value::is_null))
		.copied()
		.collect()
}

/// Serializes the typed params into their mapping form and fails with `Error::MissingParams`
/// if any of the `required` keys is missing.
pub(crate) fn validate_params<P: Serialize>(
	operation: &'static str,
	params: &P,
	required: &[&'static str],
) -> Result<()> {
	let value = serde_json::to_value(params)?;
	let missing = missing_params(&value, required);
	if missing.is_empty() {
		Ok(())
	} else {
		tracing::debug!("{operation} - missing required params {missing:?}");
		Err(Error::MissingParams {
			operation,
			params: missing,
		})
	}
}

// region:    --- Tests


// endregion: --- Tests
