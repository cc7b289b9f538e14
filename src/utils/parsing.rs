//! Parsing utilities
//!
//! Helpers for CLI arguments and for the loosely typed numeric fields explorer
//! backends return (numbers in one API version, strings in another).

use byte_unit::Byte;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Parses a string argument into a `u64` value representing a file size.
///
/// Accepts human-readable formats like "1GB", "500MB", "1024KB", etc.
/// Returns an error if the format is invalid.
pub fn parse_string_to_bytes_size(s: &str) -> Result<u64, String> {
	match Byte::from_str(s) {
		Ok(byte) => Ok(byte.as_u64()),
		Err(e) => Err(format!("Invalid size format: '{}'. Error: {}", s, e)),
	}
}

/// Normalizes a string by trimming whitespace and converting to lowercase.
pub fn normalize_string(input: &str) -> String {
	input.trim().to_lowercase()
}

/// Deserializes a `u64` that may arrive either as a JSON number or a numeric string.
pub fn deserialize_u64_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
	D: Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::Number(n) => n
			.as_u64()
			.ok_or_else(|| de::Error::custom(format!("invalid unsigned integer '{}'", n))),
		Value::String(s) => s
			.trim()
			.parse::<u64>()
			.map_err(|_| de::Error::custom(format!("invalid unsigned integer '{}'", s))),
		other => Err(de::Error::custom(format!(
			"expected a number or a numeric string, got {}",
			other
		))),
	}
}
