//! Query parameter encoding.
//!
//! [`QueryEncoder`] flattens a keyed structure into an ordered list of
//! `(name, value)` pairs ready to hand to a URL's query serializer.
//! Arrays and one level of nested maps are expanded; how array keys and
//! booleans are rendered is controlled by [`ArrayEncoding`] and
//! [`BoolEncoding`].
//!
//! # Example
//!
//! ```
//! use wireform::{ArrayEncoding, BoolEncoding, QueryEncoder};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Search {
//!     q: String,
//!     tags: Vec<String>,
//! }
//!
//! let search = Search {
//!     q: "rust".to_string(),
//!     tags: vec!["http".to_string(), "client".to_string()],
//! };
//!
//! let encoder = QueryEncoder::new(ArrayEncoding::Brackets, BoolEncoding::Literal);
//! let pairs = encoder.encode(&search).expect("encode");
//! assert_eq!(
//!     pairs,
//!     vec![
//!         ("q".to_string(), "rust".to_string()),
//!         ("tags[]".to_string(), "http".to_string()),
//!         ("tags[]".to_string(), "client".to_string()),
//!     ]
//! );
//! ```

use serde_json::{Map, Value};

use crate::{Error, Result};

/// How array elements are keyed in the query string.
///
/// Pure function of `(key, index)`; holds no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArrayEncoding {
    /// `key[]` for every element. Keys repeat, matching repeated-key
    /// query semantics.
    Brackets,
    /// `key` unchanged for every element.
    #[default]
    NoBrackets,
    /// `key[0]`, `key[1]`, … one key per index.
    IndexInBrackets,
}

impl ArrayEncoding {
    /// Render the query key for the element at `index`.
    #[must_use]
    pub fn encode(&self, key: &str, index: usize) -> String {
        match self {
            Self::Brackets => format!("{key}[]"),
            Self::NoBrackets => key.to_string(),
            Self::IndexInBrackets => format!("{key}[{index}]"),
        }
    }
}

/// How booleans are rendered in the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoolEncoding {
    /// `1` / `0`.
    Numeric,
    /// `true` / `false`.
    #[default]
    Literal,
}

impl BoolEncoding {
    /// Render a boolean value.
    #[must_use]
    pub const fn encode(&self, value: bool) -> &'static str {
        match (self, value) {
            (Self::Numeric, true) => "1",
            (Self::Numeric, false) => "0",
            (Self::Literal, true) => "true",
            (Self::Literal, false) => "false",
        }
    }
}

/// Encoder from keyed structures to flat query parameter pairs.
///
/// The encoder expands exactly one level of nesting: array elements go
/// through the configured [`ArrayEncoding`], nested map entries become
/// `key[inner]` pairs. Anything nested deeper is rendered as its
/// compact JSON text rather than expanded further.
///
/// Reserved-character escaping is *not* performed here; produced names
/// and values are handed verbatim to the URL-component layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEncoder {
    array_encoding: ArrayEncoding,
    bool_encoding: BoolEncoding,
}

impl QueryEncoder {
    /// Creates an encoder with the given strategies.
    #[must_use]
    pub const fn new(array_encoding: ArrayEncoding, bool_encoding: BoolEncoding) -> Self {
        Self {
            array_encoding,
            bool_encoding,
        }
    }

    /// Sets the array encoding strategy.
    #[must_use]
    pub const fn with_array_encoding(mut self, array_encoding: ArrayEncoding) -> Self {
        self.array_encoding = array_encoding;
        self
    }

    /// Sets the boolean encoding strategy.
    #[must_use]
    pub const fn with_bool_encoding(mut self, bool_encoding: BoolEncoding) -> Self {
        self.bool_encoding = bool_encoding;
        self
    }

    /// Encode any serializable value as query parameter pairs.
    ///
    /// The value is first converted to a keyed map; top-level keys come
    /// out in a deterministic (sorted) order, array and nested-map
    /// expansion follows source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not serialize to a key/value
    /// structure, or if it contains a value with no query representation
    /// (e.g. `null`).
    pub fn encode<T: serde::Serialize>(&self, params: &T) -> Result<Vec<(String, String)>> {
        let value = serde_json::to_value(params)?;
        let Value::Object(map) = value else {
            return Err(Error::unsupported_query_value(
                "<root>",
                "expected a key/value structure",
            ));
        };
        self.encode_map(&map)
    }

    /// Encode an already-converted keyed map as query parameter pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the map contains a value with no query
    /// representation (e.g. `null`).
    pub fn encode_map(&self, map: &Map<String, Value>) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::new();
        for (key, value) in map {
            match value {
                Value::Array(items) => {
                    for (index, item) in items.iter().enumerate() {
                        let name = self.array_encoding.encode(key, index);
                        pairs.push((name, self.encode_value(key, item)?));
                    }
                }
                Value::Object(nested) => {
                    for (nested_key, item) in nested {
                        let name = format!("{key}[{nested_key}]");
                        pairs.push((name, self.encode_value(key, item)?));
                    }
                }
                scalar => {
                    pairs.push((key.clone(), self.encode_value(key, scalar)?));
                }
            }
        }
        tracing::trace!(pairs = pairs.len(), "encoded query parameters");
        Ok(pairs)
    }

    /// Render a single value as query parameter text.
    fn encode_value(&self, key: &str, value: &Value) -> Result<String> {
        match value {
            Value::Bool(boolean) => Ok(self.bool_encoding.encode(*boolean).to_string()),
            Value::Number(number) => Ok(number.to_string()),
            Value::String(text) => Ok(text.clone()),
            Value::Null => Err(Error::unsupported_query_value(
                key,
                "null has no query representation",
            )),
            // One level down already: render the rest as literal JSON text.
            nested => Ok(nested.to_string()),
        }
    }
}
