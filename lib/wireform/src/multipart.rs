//! Multipart form data body construction.
//!
//! [`Form`] serializes an ordered sequence of [`Part`]s into the exact
//! `multipart/form-data` byte layout, delimited by a boundary token.
//!
//! # Example
//!
//! ```
//! use wireform::{Form, Part};
//!
//! let form = Form::new()
//!     .text("name", "John Doe")
//!     .part(Part::file_data("avatar", "photo.jpg", vec![0xFF, 0xD8, 0xFF]));
//!
//! let (_content_type, _body) = form.into_body().expect("encode");
//! ```

use std::path::PathBuf;

use bytes::{BufMut, Bytes, BytesMut};

use crate::{Error, Result};

/// A single field in a multipart form.
///
/// Each case carries the field name, an optional `Content-Type`, an
/// optional `Content-Transfer-Encoding`, and its payload. Parts are
/// immutable once handed to a [`Form`].
#[derive(Debug, Clone)]
pub enum Part {
    /// Inline UTF-8 text.
    Text {
        /// Field name.
        name: String,
        /// Text payload.
        value: String,
        /// Optional `Content-Type` header value.
        content_type: Option<String>,
        /// Optional `Content-Transfer-Encoding` header value.
        content_transfer_encoding: Option<String>,
    },
    /// Inline bytes, no filename.
    Bytes {
        /// Field name.
        name: String,
        /// Byte payload, copied verbatim.
        data: Bytes,
        /// Optional `Content-Type` header value.
        content_type: Option<String>,
        /// Optional `Content-Transfer-Encoding` header value.
        content_transfer_encoding: Option<String>,
    },
    /// Inline bytes presented as a file.
    FileData {
        /// Field name.
        name: String,
        /// File name advertised in the `Content-Disposition` header.
        filename: String,
        /// Byte payload, copied verbatim.
        data: Bytes,
        /// Optional `Content-Type` header value.
        content_type: Option<String>,
        /// Optional `Content-Transfer-Encoding` header value.
        content_transfer_encoding: Option<String>,
    },
    /// File contents read from disk at encode time.
    ///
    /// Once resolved, encodes exactly like [`Part::FileData`]. The read
    /// is blocking; callers on a cooperative scheduler should move the
    /// encode off their main execution context.
    File {
        /// Field name.
        name: String,
        /// File name advertised in the `Content-Disposition` header.
        filename: String,
        /// Path the payload is read from.
        path: PathBuf,
        /// Optional `Content-Type` header value.
        content_type: Option<String>,
        /// Optional `Content-Transfer-Encoding` header value.
        content_transfer_encoding: Option<String>,
    },
}

impl Part {
    /// Create a text part.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
            content_type: None,
            content_transfer_encoding: None,
        }
    }

    /// Create a binary part without a filename.
    #[must_use]
    pub fn bytes(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self::Bytes {
            name: name.into(),
            data: data.into(),
            content_type: None,
            content_transfer_encoding: None,
        }
    }

    /// Create a file part from in-memory bytes.
    #[must_use]
    pub fn file_data(
        name: impl Into<String>,
        filename: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::FileData {
            name: name.into(),
            filename: filename.into(),
            data: data.into(),
            content_type: None,
            content_transfer_encoding: None,
        }
    }

    /// Create a file part whose content is read from `path` at encode time.
    #[must_use]
    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::File {
            name: name.into(),
            filename: filename.into(),
            path: path.into(),
            content_type: None,
            content_transfer_encoding: None,
        }
    }

    /// Set the `Content-Type` for this part.
    #[must_use]
    pub fn with_content_type(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Text { content_type, .. }
            | Self::Bytes { content_type, .. }
            | Self::FileData { content_type, .. }
            | Self::File { content_type, .. } => *content_type = Some(value.into()),
        }
        self
    }

    /// Set the `Content-Transfer-Encoding` for this part.
    #[must_use]
    pub fn with_content_transfer_encoding(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Text {
                content_transfer_encoding,
                ..
            }
            | Self::Bytes {
                content_transfer_encoding,
                ..
            }
            | Self::FileData {
                content_transfer_encoding,
                ..
            }
            | Self::File {
                content_transfer_encoding,
                ..
            } => *content_transfer_encoding = Some(value.into()),
        }
        self
    }

    /// Get the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. }
            | Self::Bytes { name, .. }
            | Self::FileData { name, .. }
            | Self::File { name, .. } => name,
        }
    }

    /// Get the filename, if this part carries one.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Text { .. } | Self::Bytes { .. } => None,
            Self::FileData { filename, .. } | Self::File { filename, .. } => Some(filename),
        }
    }

    /// Get the `Content-Type`, if set.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::Text { content_type, .. }
            | Self::Bytes { content_type, .. }
            | Self::FileData { content_type, .. }
            | Self::File { content_type, .. } => content_type.as_deref(),
        }
    }

    /// Get the `Content-Transfer-Encoding`, if set.
    #[must_use]
    pub fn content_transfer_encoding(&self) -> Option<&str> {
        match self {
            Self::Text {
                content_transfer_encoding,
                ..
            }
            | Self::Bytes {
                content_transfer_encoding,
                ..
            }
            | Self::FileData {
                content_transfer_encoding,
                ..
            }
            | Self::File {
                content_transfer_encoding,
                ..
            } => content_transfer_encoding.as_deref(),
        }
    }
}

/// A multipart form: an ordered sequence of parts and a boundary token.
///
/// The boundary must not appear inside any part's payload; that is the
/// caller's responsibility — payloads are never scanned or escaped.
#[derive(Debug, Clone)]
pub struct Form {
    boundary: String,
    parts: Vec<Part>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Create a new empty form with a freshly generated random boundary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            boundary: generate_boundary(),
            parts: Vec::new(),
        }
    }

    /// Create a new empty form with a custom boundary.
    #[must_use]
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            parts: Vec::new(),
        }
    }

    /// Add a part to the form.
    #[must_use]
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Add a text field to the form.
    #[must_use]
    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.part(Part::text(name, value))
    }

    /// Add a file field from in-memory bytes.
    #[must_use]
    pub fn file_data(
        self,
        name: impl Into<String>,
        filename: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        self.part(Part::file_data(name, filename, data))
    }

    /// Add a file field read from disk at encode time.
    #[must_use]
    pub fn file(
        self,
        name: impl Into<String>,
        filename: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        self.part(Part::file(name, filename, path))
    }

    /// Get the boundary token.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Get the parts in this form.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Get the `Content-Type` header value for this form.
    ///
    /// The boundary here and the boundary in the body must be equal.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data;boundary=\"{}\"", self.boundary)
    }

    /// Encode the form into the multipart body bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFormFields`] when the form has no parts, or a
    /// file read error when a [`Part::File`] cannot be resolved.
    pub fn encode(&self) -> Result<Bytes> {
        if self.parts.is_empty() {
            return Err(Error::NoFormFields);
        }

        tracing::debug!(
            parts = self.parts.len(),
            boundary = %self.boundary,
            "encoding multipart form"
        );

        let mut buf = BytesMut::new();
        for part in &self.parts {
            self.put_part(&mut buf, part)?;
        }

        // Closing line
        buf.put_slice(b"--");
        buf.put_slice(self.boundary.as_bytes());
        buf.put_slice(b"--\r\n");

        Ok(buf.freeze())
    }

    /// Encode the form into a body.
    ///
    /// Returns a tuple of (content-type header value, body bytes).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Form::encode`].
    pub fn into_body(self) -> Result<(String, Bytes)> {
        let content_type = self.content_type();
        let body = self.encode()?;
        Ok((content_type, body))
    }

    fn put_part(&self, buf: &mut BytesMut, part: &Part) -> Result<()> {
        buf.put_slice(b"--");
        buf.put_slice(self.boundary.as_bytes());
        buf.put_slice(b"\r\n");

        match part {
            Part::Text {
                name,
                value,
                content_type,
                content_transfer_encoding,
            } => {
                put_field_headers(
                    buf,
                    name,
                    None,
                    content_type.as_deref(),
                    content_transfer_encoding.as_deref(),
                );
                buf.put_slice(value.as_bytes());
            }
            Part::Bytes {
                name,
                data,
                content_type,
                content_transfer_encoding,
            } => {
                put_field_headers(
                    buf,
                    name,
                    None,
                    content_type.as_deref(),
                    content_transfer_encoding.as_deref(),
                );
                buf.put_slice(data);
            }
            Part::FileData {
                name,
                filename,
                data,
                content_type,
                content_transfer_encoding,
            } => {
                put_field_headers(
                    buf,
                    name,
                    Some(filename),
                    content_type.as_deref(),
                    content_transfer_encoding.as_deref(),
                );
                buf.put_slice(data);
            }
            Part::File {
                name,
                filename,
                path,
                content_type,
                content_transfer_encoding,
            } => {
                tracing::debug!(path = %path.display(), "reading multipart file content");
                let data = std::fs::read(path)?;
                put_field_headers(
                    buf,
                    name,
                    Some(filename),
                    content_type.as_deref(),
                    content_transfer_encoding.as_deref(),
                );
                buf.put_slice(&data);
            }
        }

        buf.put_slice(b"\r\n");
        Ok(())
    }
}

/// Write the field header block: `Content-Disposition` first, then the
/// optional `Content-Type` and `Content-Transfer-Encoding` lines, then
/// the blank separator line. Omitted headers produce no line at all.
fn put_field_headers(
    buf: &mut BytesMut,
    name: &str,
    filename: Option<&str>,
    content_type: Option<&str>,
    content_transfer_encoding: Option<&str>,
) {
    buf.put_slice(b"Content-Disposition: form-data; name=\"");
    buf.put_slice(name.as_bytes());
    buf.put_slice(b"\"");
    if let Some(filename) = filename {
        buf.put_slice(b"; filename=\"");
        buf.put_slice(filename.as_bytes());
        buf.put_slice(b"\"");
    }
    buf.put_slice(b"\r\n");

    if let Some(content_type) = content_type {
        buf.put_slice(b"Content-Type: ");
        buf.put_slice(content_type.as_bytes());
        buf.put_slice(b"\r\n");
    }

    if let Some(content_transfer_encoding) = content_transfer_encoding {
        buf.put_slice(b"Content-Transfer-Encoding: ");
        buf.put_slice(content_transfer_encoding.as_bytes());
        buf.put_slice(b"\r\n");
    }

    buf.put_slice(b"\r\n");
}

/// Generate a random boundary token: a lower-cased UUID v4.
fn generate_boundary() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_text() {
        let part = Part::text("field", "value");
        assert_eq!(part.name(), "field");
        assert!(part.filename().is_none());
        assert!(part.content_type().is_none());
        assert!(part.content_transfer_encoding().is_none());
    }

    #[test]
    fn part_modifiers() {
        let part = Part::bytes("data", vec![1, 2, 3])
            .with_content_type("application/octet-stream")
            .with_content_transfer_encoding("binary");
        assert_eq!(part.content_type(), Some("application/octet-stream"));
        assert_eq!(part.content_transfer_encoding(), Some("binary"));
    }

    #[test]
    fn empty_form_fails() {
        let err = Form::with_boundary("B").encode().expect_err("no fields");
        assert!(err.is_no_form_fields());
    }

    #[test]
    fn single_text_item_exact_layout() {
        let body = Form::with_boundary("B").text("f", "v").encode().expect("encode");
        assert_eq!(
            body.as_ref(),
            b"--B\r\nContent-Disposition: form-data; name=\"f\"\r\n\r\nv\r\n--B--\r\n"
        );
    }

    #[test]
    fn file_data_with_content_type_header_order() {
        let part = Part::file_data("upload", "photo.jpg", vec![0xFF, 0xD8])
            .with_content_type("image/jpeg");
        let body = Form::with_boundary("B").part(part).encode().expect("encode");

        let mut expected = Vec::new();
        expected.extend_from_slice(
            b"--B\r\n\
              Content-Disposition: form-data; name=\"upload\"; filename=\"photo.jpg\"\r\n\
              Content-Type: image/jpeg\r\n\
              \r\n",
        );
        expected.extend_from_slice(&[0xFF, 0xD8]);
        expected.extend_from_slice(b"\r\n--B--\r\n");

        assert_eq!(body.as_ref(), expected.as_slice());
    }

    #[test]
    fn content_transfer_encoding_after_content_type() {
        let part = Part::text("payload", "AAAA")
            .with_content_type("application/octet-stream")
            .with_content_transfer_encoding("base64");
        let body = Form::with_boundary("B").part(part).encode().expect("encode");

        assert_eq!(
            body.as_ref(),
            b"--B\r\n\
              Content-Disposition: form-data; name=\"payload\"\r\n\
              Content-Type: application/octet-stream\r\n\
              Content-Transfer-Encoding: base64\r\n\
              \r\n\
              AAAA\r\n\
              --B--\r\n"
                .as_slice()
        );
    }

    #[test]
    fn multiple_items_in_sequence_order() {
        let body = Form::with_boundary("boundary")
            .text("field1", "value1")
            .file_data("field2", "example.txt", "value2")
            .encode()
            .expect("encode");

        assert_eq!(
            body.as_ref(),
            b"--boundary\r\n\
              Content-Disposition: form-data; name=\"field1\"\r\n\
              \r\n\
              value1\r\n\
              --boundary\r\n\
              Content-Disposition: form-data; name=\"field2\"; filename=\"example.txt\"\r\n\
              \r\n\
              value2\r\n\
              --boundary--\r\n"
                .as_slice()
        );
    }

    #[test]
    fn file_and_file_data_converge() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, [0x00, 0xFF, 0x7F]).expect("write");

        let from_disk = Form::with_boundary("B")
            .file("blob", "blob.bin", &path)
            .encode()
            .expect("encode");
        let from_memory = Form::with_boundary("B")
            .file_data("blob", "blob.bin", vec![0x00, 0xFF, 0x7F])
            .encode()
            .expect("encode");

        assert_eq!(from_disk, from_memory);
    }

    #[test]
    fn missing_file_propagates_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("does-not-exist.bin");

        let err = Form::with_boundary("B")
            .file("blob", "blob.bin", &path)
            .encode()
            .expect_err("read must fail");
        assert!(err.is_file_read());
    }

    #[test]
    fn default_boundary_is_random_and_lowercase() {
        let first = Form::new();
        let second = Form::new();
        assert_ne!(first.boundary(), second.boundary());
        assert!(!first.boundary().is_empty());
        assert_eq!(first.boundary(), first.boundary().to_lowercase());
    }

    #[test]
    fn form_content_type() {
        let form = Form::with_boundary("b123");
        insta::assert_snapshot!(form.content_type(), @r#"multipart/form-data;boundary="b123""#);
    }

    #[test]
    fn into_body_pairs_header_with_bytes() {
        let (content_type, body) = Form::with_boundary("xyz")
            .text("a", "1")
            .into_body()
            .expect("encode");
        assert_eq!(content_type, "multipart/form-data;boundary=\"xyz\"");
        assert!(body.starts_with(b"--xyz\r\n"));
        assert!(body.ends_with(b"--xyz--\r\n"));
    }
}
