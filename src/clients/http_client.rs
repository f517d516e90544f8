//! HTTP execution of BAPI calls.
//!
//! This module provides [`BapiClient`], which turns a [`BapiCall`] into one
//! HTTP round trip, and the [`execute`] shortcut for one-off calls.

use std::time::Instant;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::clients::errors::{BapiError, TransportError, ValidationError};
use crate::clients::http_request::{BapiCall, HttpMethod};
use crate::clients::http_response::{flatten_headers, BapiResponse};
use crate::clients::query::{params_string, QueryParams};
use crate::config::{parse_header, BapiConfig, ExecutionEnvironment, ShopIdPlacement};
use crate::endpoints::ProductsEndpoint;
use crate::error::ConfigError;

/// Header carrying the shop id when [`ShopIdPlacement::Header`] is configured.
pub const SHOP_ID_HEADER_NAME: &str = "X-Shop-Id";

/// Query parameter carrying the shop id when [`ShopIdPlacement::Query`] is configured.
pub const SHOP_ID_QUERY_PARAM: &str = "shopId";

/// Client for executing BAPI calls.
///
/// The client handles:
/// - Shop id placement (query parameter or `X-Shop-Id` header)
/// - URL construction with ordered, bracket-notation query strings
/// - Default headers, caller headers, and authentication
/// - Status acceptance and response validation
///
/// Failed calls are never retried.
///
/// # Thread Safety
///
/// `BapiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bapi_client::{BapiClient, BapiConfig, BaseUrl, ShopId};
/// use bapi_client::endpoints::{create_product_by_id_endpoint_request, ProductByIdParameters};
///
/// let config = BapiConfig::builder()
///     .base_url(BaseUrl::new("https://api-cloud.example.com/v1/")?)
///     .shop_id(ShopId::new(139)?)
///     .build()?;
/// let client = BapiClient::new(config)?;
///
/// let call = create_product_by_id_endpoint_request(&ProductByIdParameters::new(123));
/// let response = client.execute(&call).await?;
/// println!("{} -> {}", response.url, response.data.id);
/// ```
#[derive(Debug)]
pub struct BapiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Connection context.
    config: BapiConfig,
    /// Headers sent with every call.
    default_headers: HeaderMap,
}

// Verify BapiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BapiClient>();
};

impl BapiClient {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BapiError::Config`] if a configured header cannot be sent, or
    /// [`BapiError::Transport`] if the HTTP client cannot be initialized
    /// (e.g. TLS backend failure).
    pub fn new(config: BapiConfig) -> Result<Self, BapiError> {
        let default_headers = compose_headers(&config)?;
        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            config,
            default_headers,
        })
    }

    /// Returns the connection context.
    #[must_use]
    pub const fn config(&self) -> &BapiConfig {
        &self.config
    }

    /// Returns the headers sent with every call.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Returns product calls bound to this client.
    #[must_use]
    pub const fn products(&self) -> ProductsEndpoint<'_> {
        ProductsEndpoint::new(self)
    }

    /// Returns the full URL a call is sent to, shop id included.
    #[must_use]
    pub fn url_for<T>(&self, call: &BapiCall<T>) -> String {
        let params = self.effective_params(call.params());
        format!(
            "{}{}",
            self.config.base_url().join(call.endpoint()),
            params_string(&params)
        )
    }

    fn effective_params(&self, params: &QueryParams) -> QueryParams {
        let mut params = params.clone();
        if self.config.shop_id_placement() == ShopIdPlacement::Query {
            params.insert(SHOP_ID_QUERY_PARAM, self.config.shop_id().get());
        }
        params
    }

    /// Executes a call.
    ///
    /// This method handles:
    /// - URL construction (see [`url_for`](Self::url_for))
    /// - Sending `data` as a JSON body for `POST` and `PATCH`
    /// - Rejecting non-2xx statuses unless `accept_all_response_codes` is set
    /// - Running the call's response validator
    /// - Deserializing the body into `T` (an empty body is read as `null`,
    ///   a non-JSON body as a JSON string)
    ///
    /// # Errors
    ///
    /// Returns [`BapiError::Transport`] for network failures and rejected
    /// status codes, and [`BapiError::Validation`] when the body is rejected
    /// by the validator or does not deserialize into `T`.
    pub async fn execute<T>(&self, call: &BapiCall<T>) -> Result<BapiResponse<T>, BapiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(call);
        let method = match call.method() {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
        };

        tracing::debug!(method = %call.method(), url = %url, "Sending BAPI request");

        let mut req_builder = self
            .client
            .request(method, &url)
            .headers(self.default_headers.clone());
        if let Some(body) = call.body() {
            req_builder = req_builder.json(body);
        }

        let started = Instant::now();
        let res = req_builder.send().await.map_err(TransportError::from)?;

        let status_code = res.status().as_u16();
        let final_url = res.url().to_string();
        let headers = flatten_headers(res.headers());
        let body_text = res.text().await.map_err(TransportError::from)?;

        tracing::debug!(
            status = status_code,
            elapsed_ms = %started.elapsed().as_millis(),
            url = %final_url,
            "Received BAPI response"
        );

        let accepted = (200..=299).contains(&status_code);
        if !accepted {
            if !self.config.accept_all_response_codes() {
                return Err(TransportError::status(status_code, body_text).into());
            }
            tracing::warn!(
                status = status_code,
                url = %final_url,
                "Accepting non-2xx BAPI response"
            );
        }

        let body = parse_body(body_text);

        if let Some(validator) = call.response_validator() {
            if !validator.validate(&body) {
                return Err(ValidationError::Rejected.into());
            }
        }

        let data = serde_json::from_value(body).map_err(ValidationError::from)?;

        Ok(BapiResponse {
            status_code,
            headers,
            url: final_url,
            data,
        })
    }
}

/// Reads a response body as JSON.
///
/// An empty body is `null`. A body that is not JSON (an HTML error page, for
/// example) is kept as a JSON string, so `BapiCall<Value>` callers still get
/// the status code while typed calls fail when deserializing into `T`.
fn parse_body(body_text: String) -> serde_json::Value {
    if body_text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(&body_text).unwrap_or(serde_json::Value::String(body_text))
}

/// Executes a single call with a throwaway client.
///
/// Prefer a long-lived [`BapiClient`] when issuing many calls.
///
/// # Errors
///
/// See [`BapiClient::new`] and [`BapiClient::execute`].
pub async fn execute<T>(
    config: &BapiConfig,
    call: &BapiCall<T>,
) -> Result<BapiResponse<T>, BapiError>
where
    T: DeserializeOwned,
{
    BapiClient::new(config.clone())?.execute(call).await
}

/// Builds the headers sent with every call.
///
/// Later entries replace earlier ones with the same (case-insensitive) name:
/// defaults, then `X-Shop-Id`, then caller headers, then authentication.
fn compose_headers(config: &BapiConfig) -> Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if config.environment() == ExecutionEnvironment::Server {
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
    }

    if config.shop_id_placement() == ShopIdPlacement::Header {
        headers.insert(
            HeaderName::from_static("x-shop-id"),
            HeaderValue::from(config.shop_id().get()),
        );
    }

    for (name, value) in config.extra_headers() {
        let (name, value) = parse_header(name, value)?;
        headers.insert(name, value);
    }

    if let Some(auth) = config.auth() {
        let (name, mut value) = parse_header(auth.header_name(), &auth.header_value())?;
        value.set_sensitive(true);
        headers.insert(name, value);
    }

    Ok(headers)
}
