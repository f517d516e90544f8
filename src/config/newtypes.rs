//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around raw values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated BAPI location.
///
/// The base URL is the prefix every endpoint path is appended to, verbatim.
/// It must be an absolute `http` or `https` URL with a host. A trailing slash
/// is kept as given, so `https://api.example.com/v1/` plus `products` yields
/// `https://api.example.com/v1/products`.
///
/// # Example
///
/// ```rust
/// use bapi_client::BaseUrl;
///
/// let url = BaseUrl::new("https://api-cloud.example.com/v1/").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api-cloud.example.com");
/// assert_eq!(url.join("products/123"), "https://api-cloud.example.com/v1/products/123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] if the URL is blank, or
    /// [`ConfigError::InvalidBaseUrl`] if it has no `http`/`https` scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        if url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Appends an endpoint path to the base URL without inserting separators.
    #[must_use]
    pub fn join(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.url)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated shop (tenant) id.
///
/// Every BAPI call is scoped to a shop. The id is sent either as the `shopId`
/// query parameter or the `X-Shop-Id` header, see
/// [`ShopIdPlacement`](crate::config::ShopIdPlacement).
///
/// # Example
///
/// ```rust
/// use bapi_client::ShopId;
///
/// let shop = ShopId::new(139).unwrap();
/// assert_eq!(shop.get(), 139);
/// assert_eq!(shop.to_string(), "139");
/// assert!(ShopId::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShopId(u64);

impl ShopId {
    /// Creates a new validated shop id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopId`] if the id is zero.
    pub fn new(id: u64) -> Result<Self, ConfigError> {
        if id == 0 {
            return Err(ConfigError::InvalidShopId);
        }
        Ok(Self(id))
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ShopId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for ShopId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Self::new(id).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_rejects_empty_string() {
        assert!(matches!(BaseUrl::new(""), Err(ConfigError::EmptyBaseUrl)));
        assert!(matches!(BaseUrl::new("   "), Err(ConfigError::EmptyBaseUrl)));
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("https://api.example.com/v1/").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "api.example.com");

        // With port
        let url = BaseUrl::new("http://localhost:8080/").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        // No scheme
        assert!(BaseUrl::new("api.example.com/v1/").is_err());

        // Empty host
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https:///v1").is_err());

        // Unsupported scheme
        assert!(matches!(
            BaseUrl::new("ftp://api.example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_join_is_plain_concatenation() {
        let url = BaseUrl::new("https://api.example.com/v1/").unwrap();
        assert_eq!(url.join("products"), "https://api.example.com/v1/products");

        let url = BaseUrl::new("https://api.example.com/v1").unwrap();
        assert_eq!(url.join("products"), "https://api.example.com/v1products");
    }

    #[test]
    fn test_base_url_trims_whitespace() {
        let url = BaseUrl::new("  https://api.example.com/  ").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com/");
    }

    #[test]
    fn test_shop_id_rejects_zero() {
        assert!(matches!(ShopId::new(0), Err(ConfigError::InvalidShopId)));
        assert_eq!(ShopId::new(1).unwrap().get(), 1);
    }

    #[test]
    fn test_shop_id_serde() {
        let shop = ShopId::new(139).unwrap();
        assert_eq!(serde_json::to_string(&shop).unwrap(), "139");

        let restored: ShopId = serde_json::from_str("139").unwrap();
        assert_eq!(restored, shop);

        assert!(serde_json::from_str::<ShopId>("0").is_err());
    }
}
