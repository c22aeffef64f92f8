//! Core types for building HTTP requests and classifying HTTP responses.
//!
//! wireform is an HTTP client *support* library: it encodes structured
//! data into wire formats and classifies what comes back, and leaves the
//! transport (sockets, pooling, TLS, timeouts) to the host client.
//!
//! - [`QueryEncoder`] - Flatten keyed structures into query parameter pairs
//! - [`ArrayEncoding`] / [`BoolEncoding`] - Query rendering strategies
//! - [`Form`] and [`Part`] - multipart/form-data body construction
//! - [`ResponseStatus`] - Closed-taxonomy status code classification
//! - [`Request`] and [`RequestBuilder`] - HTTP request containers
//! - [`Response`] and [`DownloadResponse`] - HTTP response containers
//! - [`Method`] - HTTP method enum
//! - [`Error`] and [`Result`] - Error handling
//! - [`UrlQueryExt`] - Query helpers on [`url::Url`]

mod body;
mod error;
mod method;
mod multipart;
pub mod prelude;
mod query;
mod request;
mod response;
mod status;
mod url_ext;

pub use body::{ContentType, from_json, to_form, to_json};
pub use error::{Error, Result};
pub use method::Method;
pub use multipart::{Form, Part};
pub use query::{ArrayEncoding, BoolEncoding, QueryEncoder};
pub use request::{Request, RequestBuilder};
pub use response::{DownloadResponse, Response};
pub use status::{
    ClientError, Informational, Redirection, ResponseStatus, ServerError, StatusError, Successful,
};
pub use url_ext::UrlQueryExt;
