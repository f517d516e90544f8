//! Product endpoints.
//!
//! The request builders are pure functions; [`ProductsEndpoint`] pairs them
//! with a [`BapiClient`] for one-line calls.

mod product_by_id;
mod search;

pub use product_by_id::{create_product_by_id_endpoint_request, ProductByIdParameters};
pub use search::{
    create_products_search_endpoint_request, PageOptions, ProductsSearchFilters,
    ProductsSearchParameters, SortDirection, SortOptions,
};

use crate::clients::{BapiClient, BapiError, BapiResponse};
use crate::models::{Product, ProductsSearchResponse};

/// Product calls bound to a client. Obtained from [`BapiClient::products`].
///
/// # Example
///
/// ```rust,ignore
/// use bapi_client::endpoints::ProductByIdParameters;
///
/// let product = client
///     .products()
///     .get_by_id(&ProductByIdParameters::new(123))
///     .await?
///     .data;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ProductsEndpoint<'a> {
    client: &'a BapiClient,
}

impl<'a> ProductsEndpoint<'a> {
    pub(crate) const fn new(client: &'a BapiClient) -> Self {
        Self { client }
    }

    /// Fetches a single product.
    ///
    /// # Errors
    ///
    /// Returns [`BapiError`] if the call fails or the body is not a product.
    pub async fn get_by_id(
        &self,
        parameters: &ProductByIdParameters,
    ) -> Result<BapiResponse<Product>, BapiError> {
        self.client
            .execute(&create_product_by_id_endpoint_request(parameters))
            .await
    }

    /// Searches products.
    ///
    /// # Errors
    ///
    /// Returns [`BapiError`] if the call fails or the body is not a search response.
    pub async fn query(
        &self,
        parameters: &ProductsSearchParameters,
    ) -> Result<BapiResponse<ProductsSearchResponse>, BapiError> {
        self.client
            .execute(&create_products_search_endpoint_request(parameters))
            .await
    }
}
