//! Credentials accepted by the BAPI.
//!
//! The API accepts either an access token sent in the `X-Access-Token` header
//! or HTTP basic authentication. A single call uses at most one of them.
//!
//! # Security
//!
//! [`BapiAuthentication`] implements a custom [`Debug`] that masks secrets, so
//! configurations can be logged without leaking credentials.
//!
//! # Example
//!
//! ```rust
//! use bapi_client::BapiAuthentication;
//!
//! let token = BapiAuthentication::token("my-token");
//! assert_eq!(token.header_name(), "X-Access-Token");
//! assert_eq!(token.header_value(), "my-token");
//!
//! let basic = BapiAuthentication::basic("user", "pass");
//! assert_eq!(basic.header_name(), "Authorization");
//! assert_eq!(basic.header_value(), "Basic dXNlcjpwYXNz");
//!
//! assert!(!format!("{:?}", token).contains("my-token"));
//! ```

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// HTTP header name for token authentication.
pub const ACCESS_TOKEN_HEADER_NAME: &str = "X-Access-Token";

/// HTTP header name for basic authentication.
pub const AUTHORIZATION_HEADER_NAME: &str = "Authorization";

/// Authentication for BAPI calls.
#[derive(Clone, PartialEq, Eq)]
pub enum BapiAuthentication {
    /// Access token, sent verbatim in the `X-Access-Token` header.
    Token(String),

    /// HTTP basic authentication.
    Basic {
        /// The user name.
        username: String,
        /// The password.
        password: String,
    },
}

impl BapiAuthentication {
    /// Creates token authentication.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Creates basic authentication.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the HTTP header name this credential is sent in.
    ///
    /// - [`Token`](Self::Token): `X-Access-Token`
    /// - [`Basic`](Self::Basic): `Authorization`
    #[must_use]
    pub const fn header_name(&self) -> &'static str {
        match self {
            Self::Token(_) => ACCESS_TOKEN_HEADER_NAME,
            Self::Basic { .. } => AUTHORIZATION_HEADER_NAME,
        }
    }

    /// Returns the header value for this credential.
    ///
    /// Basic credentials are encoded as `Basic base64(username:password)`.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Token(token) => token.clone(),
            Self::Basic { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
            }
        }
    }
}

impl fmt::Debug for BapiAuthentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("BapiAuthentication::Token(*****)"),
            Self::Basic { username, .. } => f
                .debug_struct("BapiAuthentication::Basic")
                .field("username", username)
                .field("password", &"*****")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_uses_access_token_header() {
        let auth = BapiAuthentication::token("abc");
        assert_eq!(auth.header_name(), "X-Access-Token");
        assert_eq!(auth.header_value(), "abc");
    }

    #[test]
    fn test_basic_encodes_credentials() {
        let auth = BapiAuthentication::basic("aladdin", "opensesame");
        assert_eq!(auth.header_name(), "Authorization");
        assert_eq!(auth.header_value(), "Basic YWxhZGRpbjpvcGVuc2VzYW1l");
    }

    #[test]
    fn test_debug_masks_token_value() {
        let auth = BapiAuthentication::token("super-secret-token");
        let debug_output = format!("{auth:?}");

        assert_eq!(debug_output, "BapiAuthentication::Token(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_debug_masks_password_but_shows_username() {
        let auth = BapiAuthentication::basic("shop-admin", "hunter2");
        let debug_output = format!("{auth:?}");

        assert!(debug_output.contains("shop-admin"));
        assert!(debug_output.contains("*****"));
        assert!(!debug_output.contains("hunter2"));
    }
}
