//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use wireform::prelude::*;
//! ```

pub use crate::{
    ArrayEncoding, BoolEncoding, ContentType, Error, Form, Method, Part, QueryEncoder, Request,
    RequestBuilder, Response, ResponseStatus, Result, StatusError, UrlQueryExt, from_json, to_form,
    to_json,
};
