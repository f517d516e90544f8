//! Authentication types for the BAPI client.
//!
//! - [`BapiAuthentication`]: token or HTTP basic credentials for a call

mod credentials;

pub use credentials::{BapiAuthentication, ACCESS_TOKEN_HEADER_NAME, AUTHORIZATION_HEADER_NAME};
