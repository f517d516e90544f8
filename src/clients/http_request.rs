//! Request descriptors for the BAPI client.
//!
//! A [`BapiCall`] describes one HTTP call before it is executed: the
//! endpoint path, the method, the query parameters, an optional body and an
//! optional response validator. Request builders in [`crate::endpoints`]
//! produce them; [`BapiClient::execute`](crate::BapiClient::execute) runs them.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::clients::query::{ParamValue, QueryParams};

/// HTTP methods used by the BAPI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET. Never carries a body.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PATCH.
    Patch,
}

impl HttpMethod {
    /// Returns `true` if requests with this method send their `data` as a body.
    #[must_use]
    pub const fn sends_body(self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Patch => write!(f, "PATCH"),
        }
    }
}

/// A predicate over the parsed JSON body of a response.
///
/// When it returns `false` the call fails with
/// [`ValidationError::Rejected`](crate::clients::ValidationError::Rejected).
#[derive(Clone)]
pub struct ResponseValidator(Arc<dyn Fn(&serde_json::Value) -> bool + Send + Sync>);

impl ResponseValidator {
    /// Wraps a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&serde_json::Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Runs the predicate against a response body.
    #[must_use]
    pub fn validate(&self, body: &serde_json::Value) -> bool {
        (self.0)(body)
    }
}

impl fmt::Debug for ResponseValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResponseValidator(..)")
    }
}

impl PartialEq for ResponseValidator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A description of one BAPI call.
///
/// `T` is the type the successful response body deserializes into. The
/// descriptor is immutable once built; use [`BapiCall::builder`] to create one.
///
/// # Example
///
/// ```rust
/// use bapi_client::clients::{BapiCall, HttpMethod};
///
/// let call: BapiCall<serde_json::Value> = BapiCall::builder(HttpMethod::Get, "products/123")
///     .param("with", "attributes")
///     .build();
///
/// assert_eq!(call.endpoint(), "products/123");
/// assert_eq!(call.method(), HttpMethod::Get);
/// assert!(call.params().contains_key("with"));
/// ```
pub struct BapiCall<T> {
    endpoint: String,
    method: HttpMethod,
    params: QueryParams,
    data: Option<serde_json::Value>,
    response_validator: Option<ResponseValidator>,
    response: PhantomData<fn() -> T>,
}

impl<T> BapiCall<T> {
    /// Creates a new builder for a call with the given method and endpoint.
    #[must_use]
    pub fn builder(method: HttpMethod, endpoint: impl Into<String>) -> BapiCallBuilder<T> {
        BapiCallBuilder::new(method, endpoint)
    }

    /// Returns the endpoint path, relative to the base URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Returns the request data, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }

    /// Returns the data that will actually be sent. `GET` never sends a body.
    #[must_use]
    pub fn body(&self) -> Option<&serde_json::Value> {
        if self.method.sends_body() {
            self.data.as_ref()
        } else {
            None
        }
    }

    /// Returns the response validator, if any.
    #[must_use]
    pub const fn response_validator(&self) -> Option<&ResponseValidator> {
        self.response_validator.as_ref()
    }
}

impl<T> Clone for BapiCall<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            method: self.method,
            params: self.params.clone(),
            data: self.data.clone(),
            response_validator: self.response_validator.clone(),
            response: PhantomData,
        }
    }
}

impl<T> fmt::Debug for BapiCall<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BapiCall")
            .field("endpoint", &self.endpoint)
            .field("method", &self.method)
            .field("params", &self.params)
            .field("data", &self.data)
            .field("response_validator", &self.response_validator)
            .finish()
    }
}

impl<T> PartialEq for BapiCall<T> {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
            && self.method == other.method
            && self.params == other.params
            && self.data == other.data
            && self.response_validator == other.response_validator
    }
}

/// Builder for constructing [`BapiCall`] instances.
pub struct BapiCallBuilder<T> {
    call: BapiCall<T>,
}

impl<T> BapiCallBuilder<T> {
    fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            call: BapiCall {
                endpoint: endpoint.into(),
                method,
                params: QueryParams::new(),
                data: None,
                response_validator: None,
                response: PhantomData,
            },
        }
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.call.params.insert(key, value);
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn params(mut self, params: QueryParams) -> Self {
        self.call.params = params;
        self
    }

    /// Sets the request data. Only `POST` and `PATCH` send it.
    #[must_use]
    pub fn data(mut self, data: impl Into<serde_json::Value>) -> Self {
        self.call.data = Some(data.into());
        self
    }

    /// Sets a predicate the parsed response body must satisfy.
    #[must_use]
    pub fn response_validator<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&serde_json::Value) -> bool + Send + Sync + 'static,
    {
        self.call.response_validator = Some(ResponseValidator::new(predicate));
        self
    }

    /// Finishes the descriptor.
    #[must_use]
    pub fn build(self) -> BapiCall<T> {
        self.call
    }
}

impl<T> fmt::Debug for BapiCallBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BapiCallBuilder")
            .field("call", &self.call)
            .finish()
    }
}

// Verify BapiCall is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BapiCall<serde_json::Value>>();
};
