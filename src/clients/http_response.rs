//! Response envelope returned by the BAPI client.

use std::collections::HashMap;

/// A successful (or accepted) response from the BAPI.
///
/// Header names are lowercased. When a header appears more than once, the
/// values are joined with `", "`.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use bapi_client::BapiResponse;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), "req-1".to_string());
///
/// let response = BapiResponse {
///     status_code: 200,
///     headers,
///     url: "https://api.example.com/v1/products?shopId=139".to_string(),
///     data: serde_json::json!({"entities": []}),
/// };
///
/// assert!(response.is_ok());
/// assert_eq!(response.header("X-Request-Id"), Some("req-1"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BapiResponse<T> {
    /// The HTTP status code.
    pub status_code: u16,
    /// Response headers with lowercased names.
    pub headers: HashMap<String, String>,
    /// The final resolved request URL.
    pub url: String,
    /// The deserialized body.
    pub data: T,
}

impl<T> BapiResponse<T> {
    /// Returns `true` for 2xx status codes.
    ///
    /// Only meaningful when `accept_all_response_codes` is enabled; otherwise
    /// non-2xx responses never reach the caller.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status_code >= 200 && self.status_code <= 299
    }

    /// Looks up a header case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Maps the body, keeping status, headers and URL.
    pub fn map<U, F>(self, f: F) -> BapiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        BapiResponse {
            status_code: self.status_code,
            headers: self.headers,
            url: self.url,
            data: f(self.data),
        }
    }
}

/// Flattens reqwest headers into lowercased single-valued entries.
pub(crate) fn flatten_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut result: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = String::from_utf8_lossy(value.as_bytes());
        result
            .entry(key)
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    result
}
