//! Content decoding error types.

use thiserror::Error;

/// Errors that can occur while decoding fetched file content to text.
#[derive(Debug, Error)]
pub enum ContentDecodeError {
    /// Payload is not valid base64.
    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not valid UTF-8.
    #[error("content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The API reported an encoding the scanner cannot decode.
    #[error("unsupported content encoding '{0}'")]
    UnsupportedEncoding(String),
}
