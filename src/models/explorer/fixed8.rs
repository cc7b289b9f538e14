//! Fixed-point asset amounts.
//!
//! Every monetary value that comes out of an explorer passes through [`Fixed8`],
//! an exact decimal with eight fractional digits. JSON numbers are converted from
//! the text the explorer sent rather than through binary floating point, so
//! `0.123` stays `0.123` and `1000000000.12345678` keeps all of its digits.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{
	fmt,
	iter::Sum,
	ops::{Add, AddAssign, Neg, Sub, SubAssign},
	str::FromStr,
};
use thiserror::Error;

/// Number of fractional digits carried by a [`Fixed8`]
pub const FIXED8_DECIMALS: u32 = 8;

/// Error returned when a value cannot be read as a fixed-point amount
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid fixed-point amount '{0}'")]
pub struct ParseFixed8Error(pub String);

/// Exact decimal amount with eight fractional digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed8(Decimal);

impl Fixed8 {
	pub const ZERO: Fixed8 = Fixed8(Decimal::ZERO);

	/// Wraps a decimal, rounding half away from zero to eight places
	pub fn new(value: Decimal) -> Self {
		Self(value.round_dp_with_strategy(FIXED8_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
	}

	/// Reads an amount from a JSON number or numeric string
	pub fn from_json(value: &serde_json::Value) -> Result<Self, ParseFixed8Error> {
		match value {
			serde_json::Value::Number(n) => n.to_string().parse(),
			serde_json::Value::String(s) => s.parse(),
			other => Err(ParseFixed8Error(other.to_string())),
		}
	}

	pub fn to_decimal(self) -> Decimal {
		self.0
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	pub fn is_negative(&self) -> bool {
		self.0.is_sign_negative() && !self.0.is_zero()
	}
}

impl FromStr for Fixed8 {
	type Err = ParseFixed8Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		Decimal::from_str(trimmed)
			.or_else(|_| Decimal::from_scientific(trimmed))
			.map(Fixed8::new)
			.map_err(|_| ParseFixed8Error(s.to_string()))
	}
}

impl From<i64> for Fixed8 {
	fn from(value: i64) -> Self {
		Self(Decimal::from(value))
	}
}

impl From<u64> for Fixed8 {
	fn from(value: u64) -> Self {
		Self(Decimal::from(value))
	}
}

impl From<Decimal> for Fixed8 {
	fn from(value: Decimal) -> Self {
		Self::new(value)
	}
}

impl fmt::Display for Fixed8 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.normalize())
	}
}

impl Add for Fixed8 {
	type Output = Fixed8;

	fn add(self, rhs: Fixed8) -> Fixed8 {
		Fixed8(self.0 + rhs.0)
	}
}

impl Sub for Fixed8 {
	type Output = Fixed8;

	fn sub(self, rhs: Fixed8) -> Fixed8 {
		Fixed8(self.0 - rhs.0)
	}
}

impl AddAssign for Fixed8 {
	fn add_assign(&mut self, rhs: Fixed8) {
		self.0 += rhs.0;
	}
}

impl SubAssign for Fixed8 {
	fn sub_assign(&mut self, rhs: Fixed8) {
		self.0 -= rhs.0;
	}
}

impl Neg for Fixed8 {
	type Output = Fixed8;

	fn neg(self) -> Fixed8 {
		Fixed8(-self.0)
	}
}

impl Sum for Fixed8 {
	fn sum<I: Iterator<Item = Fixed8>>(iter: I) -> Fixed8 {
		iter.fold(Fixed8::ZERO, Add::add)
	}
}

impl<'a> Sum<&'a Fixed8> for Fixed8 {
	fn sum<I: Iterator<Item = &'a Fixed8>>(iter: I) -> Fixed8 {
		iter.copied().sum()
	}
}

impl Serialize for Fixed8 {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

impl<'de> Deserialize<'de> for Fixed8 {
	/// Reads the number through `serde_json::Value`, whose numbers keep their
	/// source text (`arbitrary_precision`), so no digit goes through `f64`.
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = serde_json::Value::deserialize(deserializer)?;
		Fixed8::from_json(&value).map_err(de::Error::custom)
	}
}
