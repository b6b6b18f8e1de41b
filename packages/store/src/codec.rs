//! Payload codecs: how an asset's bytes are stored as text in the table.

use std::borrow::Cow;
use std::io::{self, Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use assetfs_core::DecodeError;

/// Converts between an asset's bytes and the text stored in the table.
///
/// The table calls [`PayloadCodec::decode`] at most once per record; the
/// generator calls [`PayloadCodec::encode`] when building the table.
pub trait PayloadCodec: Send + Sync {
    /// Recover the asset's bytes from stored text.
    fn decode(&self, payload: &str) -> Result<Bytes, DecodeError>;

    /// Turn asset bytes into text suitable for a string literal.
    fn encode(&self, data: &[u8]) -> io::Result<String>;
}

/// gzip-compressed bytes, base64 encoded with the standard padded alphabet.
///
/// Line breaks inside the payload are ignored, so wrapped literals decode the
/// same as single-line ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct GzipBase64Codec {
    level: Option<u32>,
}

impl GzipBase64Codec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific gzip compression level (0-9) when encoding.
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Some(level.min(9)),
        }
    }

    fn compression(&self) -> Compression {
        self.level.map(Compression::new).unwrap_or_else(Compression::best)
    }
}

impl PayloadCodec for GzipBase64Codec {
    fn decode(&self, payload: &str) -> Result<Bytes, DecodeError> {
        let text: Cow<'_, str> = if payload.contains(['\n', '\r']) {
            Cow::Owned(payload.chars().filter(|c| *c != '\n' && *c != '\r').collect())
        } else {
            Cow::Borrowed(payload)
        };

        let compressed = STANDARD
            .decode(text.as_bytes())
            .map_err(|e| DecodeError::Base64 {
                message: e.to_string(),
            })?;

        let mut out = Vec::new();
        GzDecoder::new(compressed.as_slice())
            .read_to_end(&mut out)
            .map_err(|e| DecodeError::Gzip {
                message: e.to_string(),
            })?;

        Ok(Bytes::from(out))
    }

    fn encode(&self, data: &[u8]) -> io::Result<String> {
        let mut encoder = GzEncoder::new(Vec::new(), self.compression());
        encoder.write_all(data)?;
        let compressed = encoder.finish()?;
        Ok(STANDARD.encode(compressed))
    }
}

// Blanket implementations for smart pointers

impl<T: PayloadCodec + ?Sized> PayloadCodec for Box<T> {
    fn decode(&self, payload: &str) -> Result<Bytes, DecodeError> {
        self.as_ref().decode(payload)
    }

    fn encode(&self, data: &[u8]) -> io::Result<String> {
        self.as_ref().encode(data)
    }
}

impl<T: PayloadCodec + ?Sized> PayloadCodec for std::sync::Arc<T> {
    fn decode(&self, payload: &str) -> Result<Bytes, DecodeError> {
        self.as_ref().decode(payload)
    }

    fn encode(&self, data: &[u8]) -> io::Result<String> {
        self.as_ref().encode(data)
    }
}
