//! `GET products`.

use std::fmt;

use crate::clients::{BapiCall, HttpMethod, QueryParams};
use crate::endpoints::with::ProductWith;
use crate::models::ProductsSearchResponse;

/// Filters narrowing a product search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductsSearchFilters {
    /// Only products in this category. Sent as `filters[category]`.
    pub category_id: Option<u64>,
    /// Free text search. Sent as `filters[term]`.
    pub term: Option<String>,
    /// Lower price bound in the smallest currency unit. Sent as `filters[minPrice]`.
    pub min_price: Option<u64>,
    /// Upper price bound in the smallest currency unit. Sent as `filters[maxPrice]`.
    pub max_price: Option<u64>,
}

/// Page selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Page size. Sent as `perPage`.
    pub per_page: Option<u32>,
    /// Page number. Sent as `page`.
    pub page: Option<u32>,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// Ordering of search results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// Sort field (e.g. `price`, `new`). Sent as `sort`.
    pub by: Option<String>,
    /// Sort direction. Sent as `sortDir`.
    pub direction: Option<SortDirection>,
    /// Scoring model (e.g. `category_scores`). Sent as `sortScore`.
    pub score: Option<String>,
    /// Channel the scores belong to. Sent as `sortChannel`.
    pub channel: Option<String>,
}

/// Parameters for searching products.
///
/// # Example
///
/// ```rust
/// use bapi_client::endpoints::{
///     create_products_search_endpoint_request, PageOptions, ProductsSearchFilters,
///     ProductsSearchParameters, SortOptions,
/// };
///
/// let call = create_products_search_endpoint_request(&ProductsSearchParameters {
///     filters: Some(ProductsSearchFilters { category_id: Some(20201), ..Default::default() }),
///     pagination: Some(PageOptions { per_page: Some(2), page: None }),
///     sort: Some(SortOptions {
///         score: Some("category_scores".into()),
///         channel: Some("etkp".into()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// });
///
/// assert_eq!(
///     call.params().to_query_string(),
///     "filters%5Bcategory%5D=20201&sortScore=category_scores&sortChannel=etkp&perPage=2"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductsSearchParameters {
    /// Filters.
    pub filters: Option<ProductsSearchFilters>,
    /// Page selection.
    pub pagination: Option<PageOptions>,
    /// Ordering.
    pub sort: Option<SortOptions>,
    /// Relations to embed in each product.
    pub with: Option<ProductWith>,
    /// Promotion key for promotional prices.
    pub price_promotion_key: Option<String>,
    /// Also return products that are sellable for free.
    pub include_sellable_for_free: bool,
}

/// Builds the call for searching products.
///
/// Every parameter whose option (or parent option) is absent is left out.
#[must_use]
pub fn create_products_search_endpoint_request(
    parameters: &ProductsSearchParameters,
) -> BapiCall<ProductsSearchResponse> {
    let mut params = QueryParams::new();

    if let Some(filters) = &parameters.filters {
        params.insert_opt("filters[category]", filters.category_id);
        params.insert_opt("filters[term]", filters.term.clone());
        params.insert_opt("filters[minPrice]", filters.min_price);
        params.insert_opt("filters[maxPrice]", filters.max_price);
    }

    if let Some(sort) = &parameters.sort {
        params.insert_opt("sort", sort.by.clone());
        params.insert_opt("sortDir", sort.direction.map(|d| d.to_string()));
        params.insert_opt("sortScore", sort.score.clone());
        params.insert_opt("sortChannel", sort.channel.clone());
    }

    if let Some(pagination) = &parameters.pagination {
        params.insert_opt("perPage", pagination.per_page);
        params.insert_opt("page", pagination.page);
    }

    if parameters.price_promotion_key.is_none() {
        params.insert_opt(
            "with",
            parameters.with.as_ref().map(ProductWith::to_query_value),
        );
    }
    params.insert_opt("pricePromotionKey", parameters.price_promotion_key.clone());

    if parameters.include_sellable_for_free {
        params.insert("includeSellableForFree", true);
    }

    BapiCall::builder(HttpMethod::Get, "products")
        .params(params)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ParamValue;
    use crate::endpoints::with::CategorySelection;

    #[test]
    fn test_empty_search_has_no_params() {
        let call = create_products_search_endpoint_request(&ProductsSearchParameters::default());

        assert_eq!(call.endpoint(), "products");
        assert_eq!(call.method(), HttpMethod::Get);
        assert!(call.params().is_empty());
    }

    #[test]
    fn test_empty_parent_objects_emit_nothing() {
        let call = create_products_search_endpoint_request(&ProductsSearchParameters {
            filters: Some(ProductsSearchFilters::default()),
            pagination: Some(PageOptions::default()),
            sort: Some(SortOptions::default()),
            ..Default::default()
        });

        assert!(call.params().is_empty());
    }

    #[test]
    fn test_all_supported_params_in_order() {
        let call = create_products_search_endpoint_request(&ProductsSearchParameters {
            filters: Some(ProductsSearchFilters {
                category_id: Some(20201),
                term: Some("shirt".to_string()),
                min_price: Some(1000),
                max_price: Some(5000),
            }),
            pagination: Some(PageOptions {
                per_page: Some(24),
                page: Some(3),
            }),
            sort: Some(SortOptions {
                by: Some("price".to_string()),
                direction: Some(SortDirection::Desc),
                score: Some("category_scores".to_string()),
                channel: Some("etkp".to_string()),
            }),
            with: Some(ProductWith::new().categories(CategorySelection::All)),
            price_promotion_key: None,
            include_sellable_for_free: true,
        });

        assert_eq!(
            call.params().keys().collect::<Vec<_>>(),
            vec![
                "filters[category]",
                "filters[term]",
                "filters[minPrice]",
                "filters[maxPrice]",
                "sort",
                "sortDir",
                "sortScore",
                "sortChannel",
                "perPage",
                "page",
                "with",
                "includeSellableForFree",
            ]
        );
        assert_eq!(
            call.params().get("sortDir"),
            Some(&ParamValue::String("desc".to_string()))
        );
        assert_eq!(
            call.params().get("with"),
            Some(&ParamValue::String(
                "images.attributes:legacy(false),categories:properties()".to_string()
            ))
        );
    }

    #[test]
    fn test_promotion_key_drops_with() {
        let call = create_products_search_endpoint_request(&ProductsSearchParameters {
            with: Some(ProductWith::new()),
            price_promotion_key: Some("summer".to_string()),
            ..Default::default()
        });

        assert!(!call.params().contains_key("with"));
        assert!(call.params().contains_key("pricePromotionKey"));
    }
}
