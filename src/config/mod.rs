//! Connection configuration for the BAPI client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BapiConfig`]: Everything needed to execute a call (location, shop, auth, headers)
//! - [`BapiConfigBuilder`]: A builder for constructing [`BapiConfig`] instances
//! - [`BaseUrl`]: A validated BAPI location
//! - [`ShopId`]: A validated shop (tenant) id
//! - [`ShopIdPlacement`]: Whether the shop id travels as a query param or header
//! - [`ExecutionEnvironment`]: Server or browser-like execution context
//!
//! # Example
//!
//! ```rust
//! use bapi_client::{BapiAuthentication, BapiConfig, BaseUrl, ShopId, ShopIdPlacement};
//!
//! let config = BapiConfig::builder()
//!     .base_url(BaseUrl::new("https://api-cloud.example.com/v1/").unwrap())
//!     .shop_id(ShopId::new(139).unwrap())
//!     .shop_id_placement(ShopIdPlacement::Header)
//!     .auth(BapiAuthentication::token("my-token"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop_id().get(), 139);
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, ShopId};

use reqwest::header::{HeaderName, HeaderValue};

use crate::auth::BapiAuthentication;
use crate::error::ConfigError;

/// Where the shop id is sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShopIdPlacement {
    /// As the `X-Shop-Id` request header.
    Header,
    /// As the trailing `shopId` query parameter.
    #[default]
    Query,
}

/// The context the client runs in.
///
/// Browsers manage `accept-encoding` themselves and refuse to let scripts set
/// it, so only [`Server`](Self::Server) puts it in the client's default
/// header map. On native targets reqwest's `gzip`/`deflate` support
/// negotiates compression for every request either way, so this setting does
/// not change what goes on the wire there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionEnvironment {
    /// A server or CLI process. Sends `accept-encoding: gzip, deflate`.
    #[default]
    Server,
    /// A browser-like host (e.g. WebAssembly in a page).
    Browser,
}

/// Connection context for BAPI calls.
///
/// # Thread Safety
///
/// `BapiConfig` is `Clone`, `Send`, and `Sync`, so one configuration can back
/// any number of concurrent calls.
#[derive(Clone, Debug)]
pub struct BapiConfig {
    base_url: BaseUrl,
    shop_id: ShopId,
    shop_id_placement: ShopIdPlacement,
    auth: Option<BapiAuthentication>,
    extra_headers: Vec<(String, String)>,
    environment: ExecutionEnvironment,
    accept_all_response_codes: bool,
}

impl BapiConfig {
    /// Creates a new builder for constructing a `BapiConfig`.
    #[must_use]
    pub fn builder() -> BapiConfigBuilder {
        BapiConfigBuilder::new()
    }

    /// Returns the base URL endpoints are appended to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the shop id.
    #[must_use]
    pub const fn shop_id(&self) -> ShopId {
        self.shop_id
    }

    /// Returns where the shop id is sent.
    #[must_use]
    pub const fn shop_id_placement(&self) -> ShopIdPlacement {
        self.shop_id_placement
    }

    /// Returns the credentials, if configured.
    #[must_use]
    pub const fn auth(&self) -> Option<&BapiAuthentication> {
        self.auth.as_ref()
    }

    /// Returns the caller-supplied headers in the order they were added.
    #[must_use]
    pub fn extra_headers(&self) -> &[(String, String)] {
        &self.extra_headers
    }

    /// Returns the execution environment.
    #[must_use]
    pub const fn environment(&self) -> ExecutionEnvironment {
        self.environment
    }

    /// Returns whether every status code is treated as success.
    #[must_use]
    pub const fn accept_all_response_codes(&self) -> bool {
        self.accept_all_response_codes
    }
}

// Verify BapiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BapiConfig>();
};

/// Parses a raw header pair, rejecting names or values that HTTP cannot carry.
pub(crate) fn parse_header(
    name: &str,
    value: &str,
) -> Result<(HeaderName, HeaderValue), ConfigError> {
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok((header_name, header_value))
}

/// Builder for constructing [`BapiConfig`] instances.
///
/// Required fields are `base_url` and `shop_id`.
///
/// # Defaults
///
/// - `shop_id_placement`: [`ShopIdPlacement::Query`]
/// - `auth`: `None`
/// - `extra_headers`: empty
/// - `environment`: [`ExecutionEnvironment::Server`]
/// - `accept_all_response_codes`: `false`
#[derive(Debug, Default)]
pub struct BapiConfigBuilder {
    base_url: Option<BaseUrl>,
    shop_id: Option<ShopId>,
    shop_id_placement: Option<ShopIdPlacement>,
    auth: Option<BapiAuthentication>,
    extra_headers: Vec<(String, String)>,
    environment: Option<ExecutionEnvironment>,
    accept_all_response_codes: bool,
}

impl BapiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the shop id (required).
    #[must_use]
    pub const fn shop_id(mut self, shop_id: ShopId) -> Self {
        self.shop_id = Some(shop_id);
        self
    }

    /// Sets where the shop id is sent.
    #[must_use]
    pub const fn shop_id_placement(mut self, placement: ShopIdPlacement) -> Self {
        self.shop_id_placement = Some(placement);
        self
    }

    /// Sets the credentials.
    #[must_use]
    pub fn auth(mut self, auth: BapiAuthentication) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Adds a header sent with every call. Later values for the same name win.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    /// Adds several headers at once.
    #[must_use]
    pub fn extra_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extra_headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the execution environment.
    #[must_use]
    pub const fn environment(mut self, environment: ExecutionEnvironment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Treats every status code as success; the caller inspects `status_code` itself.
    #[must_use]
    pub const fn accept_all_response_codes(mut self, accept: bool) -> Self {
        self.accept_all_response_codes = accept;
        self
    }

    /// Builds the [`BapiConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or `shop_id`
    /// are not set, and [`ConfigError::InvalidHeader`] if an extra header or the
    /// credential cannot be sent as an HTTP header.
    pub fn build(self) -> Result<BapiConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let shop_id = self
            .shop_id
            .ok_or(ConfigError::MissingRequiredField { field: "shop_id" })?;

        for (name, value) in &self.extra_headers {
            parse_header(name, value)?;
        }
        if let Some(auth) = &self.auth {
            parse_header(auth.header_name(), &auth.header_value())?;
        }

        Ok(BapiConfig {
            base_url,
            shop_id,
            shop_id_placement: self.shop_id_placement.unwrap_or_default(),
            auth: self.auth,
            extra_headers: self.extra_headers,
            environment: self.environment.unwrap_or_default(),
            accept_all_response_codes: self.accept_all_response_codes,
        })
    }
}
