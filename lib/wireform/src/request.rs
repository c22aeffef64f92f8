//! HTTP request building.
//!
//! Use [`Request::builder`] to construct requests with headers, query
//! parameters, and bodies. The builder produces everything the transport
//! needs and nothing it owns: encoded body bytes plus header additions.
//!
//! # Example
//!
//! ```
//! use wireform::{Method, Request};
//! use bytes::Bytes;
//!
//! let request = Request::<Bytes>::builder(Method::Get, "https://api.example.com".parse().unwrap())
//!     .header("Accept", "application/json")
//!     .query("page", "1")
//!     .build();
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::multipart::Form;
use crate::url_ext::UrlQueryExt;
use crate::{ContentType, Method, QueryEncoder};

/// An HTTP request with method, URL, headers, and optional body.
#[derive(Debug, Clone)]
pub struct Request<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> Request<B> {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder<B> {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, Option<B>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> RequestBuilder<B> {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Appends a query parameter to the URL.
    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(name, value);
        self
    }

    /// Appends multiple query parameters to the URL.
    #[must_use]
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.url.append_query_pairs(pairs);
        self
    }

    /// Replaces the URL's whole query component with the given pairs.
    #[must_use]
    pub fn replace_query_pairs(
        mut self,
        pairs: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.url.replace_query_pairs(pairs);
        self
    }

    /// Encodes `params` with `encoder` and appends the pairs to the
    /// URL's query.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder rejects `params`.
    pub fn query_encoded<T: serde::Serialize>(
        mut self,
        params: &T,
        encoder: &QueryEncoder,
    ) -> crate::Result<Self> {
        self.url.append_encoded_query(params, encoder)?;
        Ok(self)
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request<B> {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl RequestBuilder<Bytes> {
    /// Set a JSON body.
    ///
    /// Adds `Content-Type: application/json` and a `Content-Length`
    /// header matching the encoded byte count.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize>(self, value: &T) -> crate::Result<Self> {
        let body = crate::to_json(value)?;
        Ok(self
            .header("Content-Type", ContentType::Json.as_str())
            .header("Content-Length", body.len().to_string())
            .body(body))
    }

    /// Set a form-urlencoded body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn form<T: serde::Serialize>(self, value: &T) -> crate::Result<Self> {
        let body = crate::to_form(value)?;
        Ok(self
            .header("Content-Type", ContentType::FormUrlEncoded.as_str())
            .body(body))
    }

    /// Set a multipart/form-data body.
    ///
    /// Adds `Content-Type: multipart/form-data;boundary="…"` carrying
    /// the form's boundary, and a `Content-Length` header matching the
    /// encoded byte count. The boundary in the header and the boundary
    /// in the body are always equal.
    ///
    /// # Errors
    ///
    /// Returns an error if the form has no fields or a referenced file
    /// cannot be read.
    pub fn multipart(self, form: Form) -> crate::Result<Self> {
        let (content_type, body) = form.into_body()?;
        Ok(self
            .header("Content-Type", content_type)
            .header("Content-Length", body.len().to_string())
            .body(body))
    }
}
