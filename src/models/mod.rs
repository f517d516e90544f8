//! Typed response payloads.

mod product;

pub use product::{
    Pagination, Price, Product, ProductImage, ProductsSearchResponse, Stock, Variant,
};
