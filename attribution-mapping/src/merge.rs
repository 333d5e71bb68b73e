//! Custom-property pass-through for track events.

use attribution_types::Properties;

/// Property keys never copied through the custom-property merge. A rule
/// either consumes them under a vendor key or their raw form collides with
/// vendor semantics.
pub const RESERVED_KEYWORDS: [&str; 13] = [
    "query",
    "price",
    "product_id",
    "category",
    "currency",
    "products",
    "quantity",
    "total",
    "revenue",
    "order_id",
    "share_message",
    "creative",
    "rating",
];

/// Returns true if `key` is in [`RESERVED_KEYWORDS`].
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYWORDS.contains(&key)
}

/// Appends every non-empty, non-reserved key of `properties` to `output`.
///
/// Keys a rule already wrote are left alone.
pub fn merge_custom_properties(output: &mut Properties, properties: &Properties) {
    for (key, value) in properties {
        if key.is_empty() || is_reserved(key) || output.contains_key(key) {
            continue;
        }
        output.insert(key.clone(), value.clone());
    }
}
