//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Form URL-encoded content type (`application/x-www-form-urlencoded`).
    FormUrlEncoded,
    /// Plain text content type (`text/plain`).
    PlainText,
    /// Binary content type (`application/octet-stream`).
    OctetStream,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::PlainText => "text/plain",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use wireform::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User { name: String }
///
/// let user = User { name: "Alice".to_string() };
/// let bytes = to_json(&user).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"name":"Alice"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Serialize a value to form URL-encoded bytes.
///
/// Uses `serde_html_form` which supports `Vec<T>` for repeated form fields
/// (e.g., `tags=a&tags=b&tags=c`).
///
/// # Errors
///
/// Returns an error if form serialization fails.
pub fn to_form<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_html_form::to_string(value)
        .map(|s| Bytes::from(s.into_bytes()))
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` to provide detailed error messages that
/// include the exact path to the field that failed to deserialize.
///
/// # Errors
///
/// Returns an error if JSON deserialization fails, with the error message
/// including the path to the problematic field (e.g., "user.address.city").
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_as_str() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(
            ContentType::FormUrlEncoded.as_str(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(ContentType::PlainText.as_str(), "text/plain");
        assert_eq!(
            ContentType::OctetStream.as_str(),
            "application/octet-stream"
        );
    }

    #[test]
    fn content_type_display() {
        assert_eq!(ContentType::Json.to_string(), "application/json");
    }

    #[test]
    fn to_json_serialize() {
        #[derive(serde::Serialize)]
        struct User {
            name: String,
            age: u32,
        }

        let user = User {
            name: "Alice".to_string(),
            age: 30,
        };

        let bytes = to_json(&user).expect("serialize");
        assert_eq!(bytes.as_ref(), br#"{"name":"Alice","age":30}"#);
    }

    #[test]
    fn to_form_serialize() {
        #[derive(serde::Serialize)]
        struct Login {
            username: String,
            password: String,
        }

        let login = Login {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };

        let bytes = to_form(&login).expect("serialize");
        assert_eq!(bytes.as_ref(), b"username=alice&password=secret");
    }

    #[test]
    fn to_form_with_vec() {
        #[derive(serde::Serialize)]
        struct TaggedItem {
            name: String,
            tags: Vec<String>,
        }

        let item = TaggedItem {
            name: "test".to_string(),
            tags: vec!["rust".to_string(), "http".to_string()],
        };

        let bytes = to_form(&item).expect("serialize");
        let result = String::from_utf8(bytes.to_vec()).expect("utf8");
        // serde_html_form supports repeated params for Vec<T>
        assert!(result.contains("name=test"));
        assert!(result.contains("tags=rust"));
        assert!(result.contains("tags=http"));
    }

    #[test]
    fn from_json_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            name: String,
            age: u32,
        }

        let bytes = br#"{"name":"Alice","age":30}"#;
        let user: User = from_json(bytes).expect("deserialize");

        assert_eq!(
            user,
            User {
                name: "Alice".to_string(),
                age: 30,
            }
        );
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Address {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct User {
            #[allow(dead_code)]
            address: Address,
        }

        // Missing 'city' field inside 'address'
        let bytes = br#"{"address":{}}"#;
        let result: Result<User> = from_json(bytes);

        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(
            msg.contains("address"),
            "Expected path 'address' in error: {msg}"
        );
        assert!(
            msg.contains("city"),
            "Expected field 'city' mentioned in error: {msg}"
        );
    }
}
