//! Canonical explorer records.
//!
//! Every backend response is transformed into these types, so callers never see
//! a backend-specific shape.

mod abstracts;
mod asset;
mod balance;
mod claims;
mod fixed8;
mod node;
mod transaction;

pub use abstracts::{AbstractEntry, AddressAbstracts};
pub use asset::{
	asset_symbol, is_native_asset, GAS_ASSET_ID, GAS_SYMBOL, NATIVE_ASSETS, NEO_ASSET_ID,
	NEO_SYMBOL,
};
pub use balance::{AssetBalance, Balance, Coin};
pub use claims::{ClaimItem, Claims};
pub use fixed8::{Fixed8, ParseFixed8Error, FIXED8_DECIMALS};
pub use node::RpcNode;
pub use transaction::{PastTransaction, Script, Transaction, TransactionInput, TransactionOutput};
