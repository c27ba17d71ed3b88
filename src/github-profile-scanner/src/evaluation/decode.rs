//! Decoding of fetched file content.

use super::ContentDecodeError;
use crate::provider::{ContentEncoding, FileContent};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Decodes fetched content to text.
///
/// Base64 payloads are wrapped across lines by the API, so ASCII whitespace
/// is stripped before decoding.
///
/// # Errors
///
/// Returns [`ContentDecodeError`] if the payload cannot be decoded or is not
/// valid UTF-8.
pub fn decode_content(content: &FileContent) -> Result<String, ContentDecodeError> {
    match &content.encoding {
        ContentEncoding::Plain => Ok(content.payload.clone()),
        ContentEncoding::Base64 => {
            let compact: Vec<u8> = content
                .payload
                .bytes()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            let bytes = STANDARD.decode(compact)?;
            Ok(String::from_utf8(bytes)?)
        }
        ContentEncoding::Other(encoding) => {
            Err(ContentDecodeError::UnsupportedEncoding(encoding.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wrapped_base64() {
        // "# Title\n![logo](logo.png)\n" split the way the API wraps lines
        let content = FileContent::base64("IyBUaXRsZQohW2xvZ29d\nKGxvZ28ucG5nKQo=\n");

        let text = decode_content(&content).unwrap();
        assert_eq!(text, "# Title\n![logo](logo.png)\n");
    }

    #[test]
    fn passes_plain_content_through() {
        let text = decode_content(&FileContent::plain("hello")).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn rejects_invalid_base64() {
        let result = decode_content(&FileContent::base64("not base64!!"));
        assert!(matches!(result, Err(ContentDecodeError::Base64(_))));
    }

    #[test]
    fn rejects_invalid_utf8() {
        // 0xff 0xfe
        let result = decode_content(&FileContent::base64("//4="));
        assert!(matches!(result, Err(ContentDecodeError::Utf8(_))));
    }

    #[test]
    fn rejects_unknown_encoding() {
        let content = FileContent {
            encoding: ContentEncoding::Other("none".to_string()),
            payload: String::new(),
        };
        let result = decode_content(&content);
        assert!(matches!(
            result,
            Err(ContentDecodeError::UnsupportedEncoding(e)) if e == "none"
        ));
    }
}
