//! Request builders for BAPI operations.
//!
//! Each builder turns typed parameters into an immutable
//! [`BapiCall`](crate::clients::BapiCall). Builders are pure: they perform no
//! I/O and never fail.

pub mod products;
mod with;

pub use products::{
    create_product_by_id_endpoint_request, create_products_search_endpoint_request, PageOptions,
    ProductByIdParameters, ProductsEndpoint, ProductsSearchFilters, ProductsSearchParameters,
    SortDirection, SortOptions,
};
pub use with::{
    AttributeSelection, CategoryProperties, CategorySelection, ProductWith, VariantSelection,
    VariantWith, BASE_IMAGE_EXPRESSION,
};
