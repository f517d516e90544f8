//! # BAPI Client
//!
//! A typed Rust client for the BAPI product-catalog API.
//!
//! ## Overview
//!
//! The crate is split into two layers that compose linearly:
//!
//! - **Request builders** ([`endpoints`]): pure functions turning typed
//!   parameters into an immutable [`BapiCall`] (endpoint, method, ordered
//!   query parameters). The product builders also serialize the nested `with`
//!   include expression (e.g. `attributes,images.attributes:legacy(false)`).
//! - **Executor** ([`BapiClient::execute`], [`execute`]): sends a call for a
//!   [`BapiConfig`], handling shop id placement, headers, authentication,
//!   status acceptance and response validation.
//!
//! ## Quick Start
//!
//! ```rust
//! use bapi_client::{BapiAuthentication, BapiConfig, BaseUrl, ShopId};
//! use bapi_client::endpoints::{
//!     create_product_by_id_endpoint_request, CategorySelection, ProductByIdParameters, ProductWith,
//! };
//!
//! let config = BapiConfig::builder()
//!     .base_url(BaseUrl::new("https://api-cloud.example.com/v1/").unwrap())
//!     .shop_id(ShopId::new(139).unwrap())
//!     .auth(BapiAuthentication::token("my-token"))
//!     .build()
//!     .unwrap();
//!
//! let call = create_product_by_id_endpoint_request(
//!     &ProductByIdParameters::new(123).with(ProductWith::new().categories(CategorySelection::All)),
//! );
//! assert_eq!(call.endpoint(), "products/123");
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use bapi_client::BapiClient;
//! use bapi_client::endpoints::ProductsSearchParameters;
//!
//! let client = BapiClient::new(config)?;
//! let response = client.products().query(&ProductsSearchParameters::default()).await?;
//! println!("{} products", response.data.pagination.total);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: every call carries its own configuration
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **No hidden retries**: every failure surfaces to the caller
//! - **Thread-safe**: clients, configs and calls are `Send + Sync`

pub mod auth;
pub mod clients;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use auth::BapiAuthentication;
pub use clients::{
    execute, BapiCall, BapiClient, BapiError, BapiResponse, HttpMethod, ParamValue, QueryParams,
    TransportError, ValidationError,
};
pub use config::{
    BapiConfig, BapiConfigBuilder, BaseUrl, ExecutionEnvironment, ShopId, ShopIdPlacement,
};
pub use error::ConfigError;
