//! Asset types loaded through the `AssetServer`.

/// Card dataset document and the card/benefit records it contains.
///
/// Deserialised by the JSON asset loader; missing, null or wrongly typed
/// optional fields resolve to display defaults rather than load errors.
pub mod card_dataset;

/// Forgiving `deserialize_with` helpers for upstream card data.
pub mod lenient;
