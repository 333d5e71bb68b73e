//! The track-event rule table.
//!
//! Each recognized ecommerce event is one [`EcommerceEvent`] variant owning
//! its output name and field extractor. Anything else falls through to
//! [`MappingRule::Custom`], which only renames the event.
//!
//! Extractors never fail: a missing field, or one of the wrong type, is left
//! out of the output.

use crate::merge::merge_custom_properties;
use crate::vocab::*;
use attribution_types::{Properties, PropertiesExt};
use serde_json::Value;

/// A track event after mapping: the vendor event name and its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedEvent {
    pub name: String,
    pub parameters: Properties,
}

/// The canonical ecommerce events with a dedicated mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcommerceEvent {
    ProductsSearched,
    ProductViewed,
    ProductListViewed,
    ProductAddedToWishlist,
    ProductAdded,
    ProductRemoved,
    CheckoutStarted,
    OrderCompleted,
    FirstPurchase,
    PromotionViewed,
    PromotionClicked,
    PaymentInfoEntered,
    ProductShared,
    CartShared,
    ProductReviewed,
}

impl EcommerceEvent {
    /// Every variant, in table order.
    pub const ALL: [Self; 15] = [
        Self::ProductsSearched,
        Self::ProductViewed,
        Self::ProductListViewed,
        Self::ProductAddedToWishlist,
        Self::ProductAdded,
        Self::ProductRemoved,
        Self::CheckoutStarted,
        Self::OrderCompleted,
        Self::FirstPurchase,
        Self::PromotionViewed,
        Self::PromotionClicked,
        Self::PaymentInfoEntered,
        Self::ProductShared,
        Self::CartShared,
        Self::ProductReviewed,
    ];

    /// Looks up a canonical event name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.canonical_name() == name)
    }

    /// The canonical (upstream) event name.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::ProductsSearched => "Products Searched",
            Self::ProductViewed => "Product Viewed",
            Self::ProductListViewed => "Product List Viewed",
            Self::ProductAddedToWishlist => "Product Added to Wishlist",
            Self::ProductAdded => "Product Added",
            Self::ProductRemoved => "Product Removed",
            Self::CheckoutStarted => "Checkout Started",
            Self::OrderCompleted => "Order Completed",
            Self::FirstPurchase => "first_purchase",
            Self::PromotionViewed => "Promotion Viewed",
            Self::PromotionClicked => "Promotion Clicked",
            Self::PaymentInfoEntered => "Payment Info Entered",
            Self::ProductShared => "Product Shared",
            Self::CartShared => "Cart Shared",
            Self::ProductReviewed => "Product Reviewed",
        }
    }

    /// The vendor event name this event is logged under.
    pub fn output_name(self) -> &'static str {
        match self {
            Self::ProductsSearched => EVENT_SEARCH,
            Self::ProductViewed => EVENT_CONTENT_VIEW,
            Self::ProductListViewed => EVENT_LIST_VIEW,
            Self::ProductAddedToWishlist => EVENT_ADD_TO_WISHLIST,
            Self::ProductAdded => EVENT_ADD_TO_CART,
            Self::ProductRemoved => EVENT_REMOVE_FROM_CART,
            Self::CheckoutStarted => EVENT_INITIATED_CHECKOUT,
            Self::OrderCompleted => EVENT_PURCHASE,
            Self::FirstPurchase => EVENT_FIRST_PURCHASE,
            Self::PromotionViewed => EVENT_AD_VIEW,
            Self::PromotionClicked => EVENT_AD_CLICK,
            Self::PaymentInfoEntered => EVENT_ADD_PAYMENT_INFO,
            Self::ProductShared | Self::CartShared => EVENT_SHARE,
            Self::ProductReviewed => EVENT_RATE,
        }
    }

    /// Extracts the recognized fields into vendor parameters. Custom
    /// properties are not included.
    pub fn extract(self, properties: &Properties) -> Properties {
        let mut params = Properties::new();
        match self {
            Self::ProductsSearched => {
                copy_str(properties, "query", &mut params, PARAM_SEARCH_STRING);
            }
            Self::ProductViewed | Self::ProductAddedToWishlist | Self::ProductAdded => {
                add_product_fields(properties, &mut params);
            }
            Self::ProductListViewed => add_product_list_fields(properties, &mut params),
            Self::CheckoutStarted | Self::OrderCompleted | Self::FirstPurchase => {
                add_checkout_fields(properties, &mut params);
            }
            Self::PromotionViewed | Self::PromotionClicked => {
                add_promotion_fields(properties, &mut params);
            }
            Self::PaymentInfoEntered => {}
            Self::ProductShared | Self::CartShared => {
                copy_str(properties, "share_message", &mut params, PARAM_DESCRIPTION);
            }
            Self::ProductReviewed => {
                copy_str(properties, "product_id", &mut params, PARAM_CONTENT_ID);
                copy_value(properties, "rating", &mut params, PARAM_RATING_VALUE);
            }
            Self::ProductRemoved => {
                copy_str(properties, "product_id", &mut params, PARAM_CONTENT_ID);
                copy_str(properties, "category", &mut params, PARAM_CONTENT_TYPE);
            }
        }
        params
    }
}

/// A rule selected for a track event name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingRule {
    Ecommerce(EcommerceEvent),
    /// Any unrecognized event: renamed, custom properties only.
    Custom,
}

impl MappingRule {
    /// Selects the rule for a canonical track event name.
    pub fn for_event(name: &str) -> Self {
        EcommerceEvent::from_name(name).map_or(Self::Custom, Self::Ecommerce)
    }

    /// The vendor event name for an event routed to this rule.
    pub fn output_name(self, name: &str) -> String {
        match self {
            Self::Ecommerce(event) => event.output_name().to_string(),
            Self::Custom => custom_event_name(name),
        }
    }

    /// Runs extraction and the custom-property merge.
    pub fn apply(self, name: &str, properties: &Properties) -> MappedEvent {
        let mut parameters = match self {
            Self::Ecommerce(event) => event.extract(properties),
            Self::Custom => Properties::new(),
        };
        merge_custom_properties(&mut parameters, properties);
        MappedEvent {
            name: self.output_name(name),
            parameters,
        }
    }
}

/// Vendor name for an unrecognized event: lower-cased, spaces replaced by
/// underscores.
pub fn custom_event_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

// ---- Extractors ----

fn copy_str(from: &Properties, key: &str, to: &mut Properties, out_key: &str) {
    if let Some(s) = from.str_value(key) {
        to.insert(out_key.to_string(), Value::from(s));
    }
}

fn copy_value(from: &Properties, key: &str, to: &mut Properties, out_key: &str) {
    if let Some(v) = from.value(key) {
        to.insert(out_key.to_string(), v.clone());
    }
}

fn add_product_fields(properties: &Properties, params: &mut Properties) {
    copy_value(properties, "price", params, PARAM_PRICE);
    copy_str(properties, "product_id", params, PARAM_CONTENT_ID);
    copy_str(properties, "category", params, PARAM_CONTENT_TYPE);
    copy_str(properties, "currency", params, PARAM_CURRENCY);
    copy_value(properties, "quantity", params, PARAM_QUANTITY);
}

// Entries without a string product_id are skipped; nothing else is required.
fn add_product_list_fields(properties: &Properties, params: &mut Properties) {
    copy_str(properties, "category", params, PARAM_CONTENT_TYPE);

    let Some(products) = properties.object_list("products") else {
        return;
    };
    let ids: Vec<Value> = products
        .iter()
        .filter_map(|p| p.str_value("product_id"))
        .map(Value::from)
        .collect();
    if !ids.is_empty() {
        params.insert(PARAM_CONTENT_LIST.to_string(), Value::Array(ids));
    }
}

// Unlike the list view, an entry only counts when product_id, category and
// quantity are all present; partial entries are dropped from all three lists.
fn add_checkout_fields(properties: &Properties, params: &mut Properties) {
    copy_value(properties, "total", params, PARAM_PRICE);

    if let Some(products) = properties.object_list("products") {
        let mut ids = Vec::new();
        let mut categories = Vec::new();
        let mut quantities = Vec::new();

        for product in products {
            if let (Some(id), Some(category), Some(quantity)) = (
                product.str_value("product_id"),
                product.str_value("category"),
                product.value("quantity"),
            ) {
                ids.push(Value::from(id));
                categories.push(Value::from(category));
                quantities.push(quantity.clone());
            }
        }

        if !ids.is_empty() {
            params.insert(PARAM_CONTENT_ID.to_string(), Value::Array(ids));
            params.insert(PARAM_CONTENT_TYPE.to_string(), Value::Array(categories));
            params.insert(PARAM_QUANTITY.to_string(), Value::Array(quantities));
        }
    }

    copy_str(properties, "currency", params, PARAM_CURRENCY);
    if let Some(order_id) = properties.str_value("order_id") {
        params.insert(PARAM_RECEIPT_ID.to_string(), Value::from(order_id));
        params.insert(PARAM_ORDER_ID.to_string(), Value::from(order_id));
    }
    copy_value(properties, "revenue", params, PARAM_REVENUE);
}

// The creative goes out under both ad-revenue-type keys.
fn add_promotion_fields(properties: &Properties, params: &mut Properties) {
    if let Some(creative) = properties.value("creative") {
        params.insert(PARAM_ADREV_AD_TYPE.to_string(), creative.clone());
        params.insert(PARAM_AD_REVENUE_AD_TYPE.to_string(), creative.clone());
    }
    copy_str(properties, "currency", params, PARAM_CURRENCY);
}
