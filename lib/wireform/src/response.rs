//! HTTP response containers.
//!
//! [`Response`] wraps what the transport hands back — a raw status code
//! (possibly absent), a header map, and body bytes — and classifies the
//! status exactly once, at construction. [`DownloadResponse`] is the
//! same for downloads, with an on-disk file location in place of an
//! in-memory body.
//!
//! # Example
//!
//! ```ignore
//! let user: User = response.json()?;
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::{ResponseStatus, StatusError};

/// HTTP response with classified status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: Option<ResponseStatus>,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response, classifying the status code.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        Self::from_parts(Some(status), headers, body)
    }

    /// Creates a response from a possibly-absent status code.
    #[must_use]
    pub fn from_parts(status: Option<u16>, headers: HashMap<String, String>, body: B) -> Self {
        Self {
            status: status.map(ResponseStatus::from_code),
            headers,
            body,
        }
    }

    /// The classified status, if a status code was present.
    #[must_use]
    pub const fn status(&self) -> Option<ResponseStatus> {
        self.status
    }

    /// The raw numeric status code, if present.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.status.map(|status| status.code())
    }

    /// The error value for client- or server-error statuses.
    #[must_use]
    pub fn error(&self) -> Option<StatusError> {
        self.status.and_then(|status| status.error())
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Option<ResponseStatus>, HashMap<String, String>, B) {
        (self.status, self.headers, self.body)
    }

    /// Status is a named successful response.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_some_and(|status| status.is_success())
    }

    /// Status is a named redirection message.
    #[must_use]
    pub fn is_redirection(&self) -> bool {
        self.status.is_some_and(|status| status.is_redirection())
    }

    /// Status is a named client error.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status.is_some_and(|status| status.is_client_error())
    }

    /// Status is a named server error.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status.is_some_and(|status| status.is_server_error())
    }

    /// Transform the body with a function.
    pub fn map_body<F, B2>(self, f: F) -> Response<B2>
    where
        F: FnOnce(B) -> B2,
    {
        Response {
            status: self.status,
            headers: self.headers,
            body: f(self.body),
        }
    }
}

impl Response<Bytes> {
    /// Deserialize the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn json<T: serde::de::DeserializeOwned>(self) -> crate::Result<T> {
        crate::from_json(&self.body)
    }

    /// Get the response body as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid UTF-8.
    pub fn text(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }
}

/// Download-completion response: classified status, headers, and the
/// location the transport wrote the content to, instead of an in-memory
/// body.
#[derive(Debug, Clone)]
pub struct DownloadResponse {
    status: Option<ResponseStatus>,
    headers: HashMap<String, String>,
    file_path: Option<PathBuf>,
}

impl DownloadResponse {
    /// Creates a new download response, classifying the status code.
    #[must_use]
    pub fn new(
        status: Option<u16>,
        headers: HashMap<String, String>,
        file_path: Option<PathBuf>,
    ) -> Self {
        Self {
            status: status.map(ResponseStatus::from_code),
            headers,
            file_path,
        }
    }

    /// The classified status, if a status code was present.
    #[must_use]
    pub const fn status(&self) -> Option<ResponseStatus> {
        self.status
    }

    /// The error value for client- or server-error statuses.
    #[must_use]
    pub fn error(&self) -> Option<StatusError> {
        self.status.and_then(|status| status.error())
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Where the downloaded content lives, if the transport reported it.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientError, Successful};

    #[test]
    fn response_basic() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response = Response::new(200, headers, Bytes::from(r#"{"id":1}"#));

        assert_eq!(response.status_code(), Some(200));
        assert_eq!(response.status().expect("status"), Successful::Ok);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert!(response.is_success());
        assert!(!response.is_client_error());
        assert!(!response.is_server_error());
        assert!(response.error().is_none());
    }

    #[test]
    fn response_classifies_once_at_construction() {
        let response = Response::new(404, HashMap::new(), Bytes::new());
        assert!(response.is_client_error());
        assert_eq!(response.status().expect("status"), ClientError::NotFound);

        let err = response.error().expect("error");
        assert_eq!(err.code(), 404);
    }

    #[test]
    fn response_without_status_code() {
        let response = Response::from_parts(None, HashMap::new(), Bytes::new());
        assert!(response.status().is_none());
        assert!(response.status_code().is_none());
        assert!(!response.is_success());
        assert!(response.error().is_none());
    }

    #[test]
    fn response_undefined_status_has_no_error() {
        let response = Response::new(799, HashMap::new(), Bytes::new());
        assert!(response.status().expect("status").is_undefined());
        assert!(response.error().is_none());
    }

    #[test]
    fn response_status_checks() {
        let response = Response::new(301, HashMap::new(), Bytes::new());
        assert!(response.is_redirection());

        let response = Response::new(500, HashMap::new(), Bytes::new());
        assert!(response.is_server_error());
    }

    #[test]
    fn response_json() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            id: u64,
            name: String,
        }

        let body = Bytes::from(r#"{"id":1,"name":"test"}"#);
        let response = Response::new(200, HashMap::new(), body);

        let user: User = response.json().expect("deserialize");
        assert_eq!(
            user,
            User {
                id: 1,
                name: "test".to_string()
            }
        );
    }

    #[test]
    fn response_text() {
        let body = Bytes::from("Hello, World!");
        let response = Response::new(200, HashMap::new(), body);

        let text = response.text().expect("text");
        assert_eq!(text, "Hello, World!");
    }

    #[test]
    fn response_map_body() {
        let response = Response::new(200, HashMap::new(), Bytes::from("test"));
        let mapped = response.map_body(|b| b.len());

        assert_eq!(mapped.status_code(), Some(200));
        assert_eq!(*mapped.body(), 4);
    }

    #[test]
    fn download_response() {
        let response = DownloadResponse::new(
            Some(200),
            HashMap::new(),
            Some(PathBuf::from("/tmp/report.pdf")),
        );
        assert_eq!(response.status().expect("status"), Successful::Ok);
        assert_eq!(response.file_path(), Some(Path::new("/tmp/report.pdf")));
        assert!(response.error().is_none());
    }

    #[test]
    fn download_response_error_status() {
        let response = DownloadResponse::new(Some(503), HashMap::new(), None);
        let err = response.error().expect("error");
        assert_eq!(err.code(), 503);
        assert!(response.file_path().is_none());
    }
}
