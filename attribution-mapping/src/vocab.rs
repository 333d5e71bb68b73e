//! The attribution vendor's event and parameter vocabulary.

// ---- Event names ----

pub const EVENT_SEARCH: &str = "af_search";
pub const EVENT_CONTENT_VIEW: &str = "af_content_view";
pub const EVENT_LIST_VIEW: &str = "af_list_view";
pub const EVENT_ADD_TO_WISHLIST: &str = "af_add_to_wishlist";
pub const EVENT_ADD_TO_CART: &str = "af_add_to_cart";
pub const EVENT_INITIATED_CHECKOUT: &str = "af_initiated_checkout";
pub const EVENT_PURCHASE: &str = "af_purchase";
pub const EVENT_FIRST_PURCHASE: &str = "first_purchase";
pub const EVENT_AD_VIEW: &str = "af_ad_view";
pub const EVENT_AD_CLICK: &str = "af_ad_click";
pub const EVENT_ADD_PAYMENT_INFO: &str = "af_add_payment_info";
pub const EVENT_SHARE: &str = "af_share";
pub const EVENT_RATE: &str = "af_rate";
/// Not part of the vendor's predefined set; sent as a plain custom event.
pub const EVENT_REMOVE_FROM_CART: &str = "remove_from_cart";

// ---- Parameter keys ----

pub const PARAM_SEARCH_STRING: &str = "af_search_string";
pub const PARAM_PRICE: &str = "af_price";
/// Scalar for single-product events, list for checkout / purchase.
pub const PARAM_CONTENT_ID: &str = "af_content_id";
/// Scalar for single-product events, list for checkout / purchase.
pub const PARAM_CONTENT_TYPE: &str = "af_content_type";
pub const PARAM_CURRENCY: &str = "af_currency";
/// Scalar for single-product events, list for checkout / purchase.
pub const PARAM_QUANTITY: &str = "af_quantity";
pub const PARAM_CONTENT_LIST: &str = "af_content_list";
pub const PARAM_RECEIPT_ID: &str = "af_receipt_id";
pub const PARAM_ORDER_ID: &str = "af_order_id";
pub const PARAM_REVENUE: &str = "af_revenue";
pub const PARAM_DESCRIPTION: &str = "af_description";
pub const PARAM_RATING_VALUE: &str = "af_rating_value";
/// Legacy literal key for the ad revenue type.
pub const PARAM_ADREV_AD_TYPE: &str = "af_adrev_ad_type";
/// Current SDK key for the ad revenue type.
pub const PARAM_AD_REVENUE_AD_TYPE: &str = "af_ad_revenue_ad_type";

// ---- Screen names ----

pub const SCREEN_EVENT: &str = "screen";
pub const SCREEN_EVENT_UNNAMED: &str = "Viewed Screen";

/// Rich screen event name for a named screen.
pub fn viewed_screen(name: &str) -> String {
    format!("Viewed {name} Screen")
}
