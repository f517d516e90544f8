//! HTTP layer of the BAPI client.
//!
//! # Overview
//!
//! - [`BapiCall`]: an immutable description of one call (endpoint, method, params, body, validator)
//! - [`QueryParams`] / [`ParamValue`]: insertion-ordered query parameters
//! - [`BapiClient`]: executes calls against a [`BapiConfig`](crate::BapiConfig)
//! - [`execute`]: one-off execution without keeping a client around
//! - [`BapiResponse`]: status, headers, final URL and deserialized body
//! - [`BapiError`]: transport, validation and configuration failures
//!
//! # Example
//!
//! ```rust,ignore
//! use bapi_client::clients::{BapiCall, BapiClient, HttpMethod};
//!
//! let call: BapiCall<serde_json::Value> = BapiCall::builder(HttpMethod::Get, "products")
//!     .param("perPage", 2)
//!     .response_validator(|body| body.get("entities").is_some())
//!     .build();
//!
//! let response = client.execute(&call).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;

pub use errors::{BapiError, TransportError, ValidationError};
pub use http_client::{execute, BapiClient, SHOP_ID_HEADER_NAME, SHOP_ID_QUERY_PARAM};
pub use http_request::{BapiCall, BapiCallBuilder, HttpMethod, ResponseValidator};
pub use http_response::BapiResponse;
pub use query::{params_string, ParamValue, QueryParams};
