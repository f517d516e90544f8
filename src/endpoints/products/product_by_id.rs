//! `GET products/{id}`.

use crate::clients::{BapiCall, HttpMethod, QueryParams};
use crate::endpoints::with::ProductWith;
use crate::models::Product;

/// Parameters for fetching a single product.
///
/// # Example
///
/// ```rust
/// use bapi_client::endpoints::{
///     create_product_by_id_endpoint_request, AttributeSelection, ProductByIdParameters, ProductWith,
/// };
///
/// let call = create_product_by_id_endpoint_request(
///     &ProductByIdParameters::new(123).with(ProductWith::new().attributes(AttributeSelection::All)),
/// );
///
/// assert_eq!(call.endpoint(), "products/123");
/// assert_eq!(
///     call.params().to_query_string(),
///     "with=attributes%2Cimages.attributes%3Alegacy%28false%29"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductByIdParameters {
    /// The product id.
    pub product_id: u64,
    /// Relations to embed.
    pub with: Option<ProductWith>,
    /// Promotion key for promotional prices.
    pub price_promotion_key: Option<String>,
    /// Also return products that are sellable for free.
    pub include_sellable_for_free: bool,
}

impl ProductByIdParameters {
    /// Creates parameters for the given product id.
    #[must_use]
    pub const fn new(product_id: u64) -> Self {
        Self {
            product_id,
            with: None,
            price_promotion_key: None,
            include_sellable_for_free: false,
        }
    }

    /// Sets the relations to embed.
    #[must_use]
    pub fn with(mut self, with: ProductWith) -> Self {
        self.with = Some(with);
        self
    }

    /// Sets the price promotion key.
    #[must_use]
    pub fn price_promotion_key(mut self, key: impl Into<String>) -> Self {
        self.price_promotion_key = Some(key.into());
        self
    }

    /// Includes products that are sellable for free.
    #[must_use]
    pub const fn include_sellable_for_free(mut self, include: bool) -> Self {
        self.include_sellable_for_free = include;
        self
    }
}

/// Builds the call for fetching one product.
///
/// `with` is only sent when requested and no price promotion key is set; a
/// promotion key request never carries an include expression.
#[must_use]
pub fn create_product_by_id_endpoint_request(
    parameters: &ProductByIdParameters,
) -> BapiCall<Product> {
    let mut params = QueryParams::new();

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

    BapiCall::builder(HttpMethod::Get, format!("products/{}", parameters.product_id))
        .params(params)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ParamValue;
    use crate::endpoints::with::AttributeSelection;

    #[test]
    fn test_endpoint_and_method_are_fixed() {
        for id in [1, 123, 9_999_999] {
            let call = create_product_by_id_endpoint_request(&ProductByIdParameters::new(id));
            assert_eq!(call.endpoint(), format!("products/{id}"));
            assert_eq!(call.method(), HttpMethod::Get);
        }
    }

    #[test]
    fn test_no_options_means_no_params() {
        let call = create_product_by_id_endpoint_request(&ProductByIdParameters::new(123));
        assert!(call.params().is_empty());
    }

    #[test]
    fn test_promotion_key_drops_requested_with() {
        let call = create_product_by_id_endpoint_request(
            &ProductByIdParameters::new(123)
                .with(ProductWith::new().attributes(AttributeSelection::All))
                .price_promotion_key("abc123"),
        );

        assert!(!call.params().contains_key("with"));
        assert_eq!(
            call.params().get("pricePromotionKey"),
            Some(&ParamValue::String("abc123".to_string()))
        );
    }

    #[test]
    fn test_sellable_for_free_false_is_omitted() {
        let call = create_product_by_id_endpoint_request(
            &ProductByIdParameters::new(123).include_sellable_for_free(false),
        );
        assert!(!call.params().contains_key("includeSellableForFree"));
    }

    #[test]
    fn test_param_order() {
        let call = create_product_by_id_endpoint_request(
            &ProductByIdParameters::new(5)
                .include_sellable_for_free(true)
                .with(ProductWith::new()),
        );

        assert_eq!(
            call.params().keys().collect::<Vec<_>>(),
            vec!["with", "includeSellableForFree"]
        );
    }
}
