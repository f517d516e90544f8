//! Product payloads returned by the `products` endpoints.
//!
//! Only fields the client relies on are typed. Unknown fields are ignored on
//! deserialization; relations whose shape depends on the `with` expression
//! (attributes, categories, price range) are kept as raw JSON.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A price in the smallest currency unit (e.g. cents).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Price including tax.
    pub with_tax: i64,

    /// Price excluding tax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub without_tax: Option<i64>,

    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// Stock information for a variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    /// Units available.
    pub quantity: i64,

    /// Whether the variant can be sold when out of stock.
    #[serde(default)]
    pub is_sellable_without_stock: bool,
}

/// An image of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Content hash used to build the image URL.
    pub hash: String,

    /// Image attributes (e.g. `primaryImage`), when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// The variant id.
    pub id: u64,

    /// Variant attributes, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,

    /// Variant advanced attributes, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_attributes: Option<serde_json::Value>,

    /// Current price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    /// Lowest price in the prior 30 days, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest_prior_price: Option<serde_json::Value>,

    /// Stock information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<Stock>,

    /// When the variant was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    /// When the variant was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// A product from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The product id.
    pub id: u64,

    /// Whether the product is active in the shop.
    #[serde(default)]
    pub is_active: bool,

    /// Whether every variant is sold out.
    #[serde(default)]
    pub is_sold_out: bool,

    /// Whether the product is flagged as new.
    #[serde(default)]
    pub is_new: bool,

    /// When the product was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    /// When the product was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,

    /// Attributes, when requested via `with`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,

    /// Advanced attributes, when requested via `with`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_attributes: Option<serde_json::Value>,

    /// Images.
    #[serde(default)]
    pub images: Vec<ProductImage>,

    /// Variants, when requested via `with`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,

    /// Category paths, when requested via `with`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<serde_json::Value>,

    /// Min/max price across variants, when requested via `with`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<serde_json::Value>,
}

/// Page information of a search response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Number of entities on the current page.
    pub current: u32,
    /// Total number of matching entities.
    pub total: u32,
    /// Page size.
    pub per_page: u32,
    /// Current page number.
    pub page: u32,
    /// First page number.
    pub first: u32,
    /// Previous page number.
    pub prev: u32,
    /// Next page number.
    pub next: u32,
    /// Last page number.
    pub last: u32,
}

/// Response of the products search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductsSearchResponse {
    /// Matching products.
    pub entities: Vec<Product>,
    /// Page information.
    pub pagination: Pagination,
}
