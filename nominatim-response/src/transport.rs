//! Adapter for decoding `reqwest` responses.

use crate::config::DecoderConfig;
use crate::decoder::ResponseDecoder;
use crate::error::{DecodeError, DecodeResult};
use crate::response::BufferedResponse;
use bytes::{Bytes, BytesMut};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

impl BufferedResponse {
    /// Buffer a `reqwest` response so it can be decoded synchronously.
    ///
    /// Error statuses are captured without reading the body. Dropping the
    /// `reqwest` response hands the connection back to its pool.
    pub async fn from_reqwest(response: Response, config: &DecoderConfig) -> DecodeResult<Self> {
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default();

        if config.is_error_status(status.as_u16()) {
            return Ok(Self::empty(status.as_u16(), reason));
        }

        let body = match config.max_body_bytes {
            Some(limit) => read_limited(response, limit).await?,
            None => response.bytes().await?,
        };

        debug!(status = status.as_u16(), len = body.len(), "Buffered response body");
        Ok(Self::new(status.as_u16(), reason, body))
    }
}

/// Read a body chunk by chunk, failing once it grows past `limit`.
async fn read_limited(mut response: Response, limit: usize) -> DecodeResult<Bytes> {
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            return Err(DecodeError::BodyTooLarge { limit });
        }
    }

    let mut buf = BytesMut::new();
    while let Some(chunk) = response.chunk().await? {
        if buf.len() + chunk.len() > limit {
            return Err(DecodeError::BodyTooLarge { limit });
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf.freeze())
}

impl<T: DeserializeOwned> ResponseDecoder<T> {
    /// Buffer and decode a `reqwest` response.
    pub async fn decode_reqwest(&self, response: Response) -> DecodeResult<T> {
        let buffered = BufferedResponse::from_reqwest(response, self.config()).await?;
        self.decode(buffered)
    }
}
