//! Multipart/form-data body encoding
//!
//! Builds the exact byte layout expected by file-upload endpoints: each
//! field wrapped in `--{boundary}` and a `Content-Disposition` header,
//! payloads terminated by CRLF, and a single closing `--{boundary}--`
//! marker. Field order in the output matches insertion order.

use bytes::{BufMut, Bytes, BytesMut};

/// A single named field of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartField {
    /// Plain text field
    Text {
        /// Form field name
        name: String,
        /// Field value, written verbatim
        value: String,
    },
    /// Binary file field
    File {
        /// Form field name
        name: String,
        /// File name reported to the server
        filename: String,
        /// MIME type of the payload
        content_type: String,
        /// Raw payload, copied verbatim
        bytes: Bytes,
    },
}

/// An ordered multipart/form-data body with a caller-chosen boundary
///
/// The boundary must not occur inside any field name, value, or payload;
/// the encoder does not scan for collisions. Callers pick a boundary with
/// enough entropy (a UUID) that a collision is negligible.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    boundary: String,
    fields: Vec<MultipartField>,
}

impl MultipartBody {
    /// Create an empty body with the given boundary
    pub fn new(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            fields: Vec::new(),
        }
    }

    /// Append a text field
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(MultipartField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a binary file field
    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        self.fields.push(MultipartField::File {
            name: name.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        });
        self
    }

    /// The boundary this body was created with
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// The fields in insertion order
    pub fn fields(&self) -> &[MultipartField] {
        &self.fields
    }

    /// Value for the `Content-Type` header of the enclosing request
    pub fn content_type_header(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encode the body into its wire representation
    ///
    /// Encoding never fails. Binary payloads are copied without any
    /// transformation.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::new();

        for field in &self.fields {
            buf.put_slice(format!("--{}\r\n", self.boundary).as_bytes());

            match field {
                MultipartField::Text { name, value } => {
                    buf.put_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    buf.put_slice(value.as_bytes());
                }
                MultipartField::File {
                    name,
                    filename,
                    content_type,
                    bytes,
                } => {
                    buf.put_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
                        )
                        .as_bytes(),
                    );
                    buf.put_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
                    buf.put_slice(bytes);
                }
            }

            buf.put_slice(b"\r\n");
        }

        buf.put_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        buf.freeze()
    }
}
