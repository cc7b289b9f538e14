//! Native asset identifiers.
//!
//! The platform has two first-class assets tracked with per-output unspent
//! detail. Every other fungible asset is a token and is tracked as a scalar
//! balance only.

/// Symbol of the governing native asset
pub const NEO_SYMBOL: &str = "NEO";
/// Symbol of the utility native asset
pub const GAS_SYMBOL: &str = "GAS";

/// Asset id of NEO (without the `0x` prefix)
pub const NEO_ASSET_ID: &str = "c56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b";
/// Asset id of GAS (without the `0x` prefix)
pub const GAS_ASSET_ID: &str = "602c79718b16e442de58778e148d0b1084e3b2dffd5de6b7b16cee7969282de7";

/// Symbols of the native assets, in the order they are reported
pub const NATIVE_ASSETS: [&str; 2] = [NEO_SYMBOL, GAS_SYMBOL];

/// Returns true if `symbol` names one of the native assets
pub fn is_native_asset(symbol: &str) -> bool {
	NATIVE_ASSETS.contains(&symbol)
}

/// Resolves an asset id or symbol to the symbol used in canonical records.
///
/// Known native asset ids (with or without `0x`) map to their symbol; anything
/// else is returned unchanged.
pub fn asset_symbol(asset: &str) -> String {
	let id = asset.strip_prefix("0x").unwrap_or(asset).to_lowercase();
	match id.as_str() {
		NEO_ASSET_ID => NEO_SYMBOL.to_string(),
		GAS_ASSET_ID => GAS_SYMBOL.to_string(),
		_ => asset.to_string(),
	}
}
