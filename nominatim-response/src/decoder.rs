//! Status checking and JSON decoding of HTTP responses.

use crate::config::DecoderConfig;
use crate::error::{DecodeError, DecodeResult};
use crate::response::{HttpResponse, ResponseBody};
use serde::de::DeserializeOwned;
use std::any::type_name;
use std::fmt;
use std::io::{self, BufRead, BufReader, Read};
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Decodes HTTP responses into values of type `T`.
///
/// A status at or above [`DecoderConfig::error_status`] fails with
/// [`DecodeError::HttpStatus`] without touching the body. Anything else is
/// parsed as UTF-8 JSON. Either way the body is released exactly once
/// before `decode` returns.
pub struct ResponseDecoder<T> {
    config: DecoderConfig,
    _target: PhantomData<fn() -> T>,
}

impl<T> ResponseDecoder<T> {
    /// Create a decoder with the default config.
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    /// Create a decoder with a custom config.
    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            config,
            _target: PhantomData,
        }
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }
}

impl<T: DeserializeOwned> ResponseDecoder<T> {
    /// Check the status and decode the body of `response`.
    pub fn decode<R: HttpResponse>(&self, response: R) -> DecodeResult<T> {
        let status = response.status();

        if self.config.is_error_status(status) {
            let reason = response.reason_phrase().to_string();
            debug!(status, reason = %reason, "Rejecting response by status");

            let body = BodyGuard::new(response.into_body());
            return settle(Err(DecodeError::HttpStatus { status, reason }), body.release());
        }

        debug!(status, shape = type_name::<T>(), "Decoding JSON response");

        let mut body = BodyGuard::new(response.into_body());
        let parsed = {
            let mut reader = BufReader::new(&mut body);

            // An empty body reads as JSON `null`, so `Option<_>` targets decode to `None`.
            let empty = matches!(reader.fill_buf(), Ok(buf) if buf.is_empty());
            if empty {
                serde_json::from_value(serde_json::Value::Null)
            } else {
                serde_json::from_reader(reader)
            }
        }
        .map_err(DecodeError::from);
        if let Err(ref e) = parsed {
            debug!(status, shape = type_name::<T>(), error = %e, "Failed to decode response");
        }

        settle(parsed, body.release())
    }
}

impl<T> Default for ResponseDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ResponseDecoder<T> {
    fn clone(&self) -> Self {
        Self::with_config(self.config.clone())
    }
}

impl<T> fmt::Debug for ResponseDecoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseDecoder")
            .field("target", &type_name::<T>())
            .field("config", &self.config)
            .finish()
    }
}

/// Decode `response` into `T` with the default config.
pub fn decode<T, R>(response: R) -> DecodeResult<T>
where
    T: DeserializeOwned,
    R: HttpResponse,
{
    ResponseDecoder::<T>::new().decode(response)
}

/// Combine the decode outcome with the result of releasing the body.
///
/// A release failure only surfaces when nothing else failed.
fn settle<T>(outcome: DecodeResult<T>, released: io::Result<()>) -> DecodeResult<T> {
    match (outcome, released) {
        (outcome, Ok(())) => outcome,
        (Ok(_), Err(e)) => Err(DecodeError::ResourceRelease(e)),
        (Err(primary), Err(e)) => {
            warn!(error = %e, primary = %primary, "Ignoring body release failure");
            Err(primary)
        }
    }
}

/// Owns a body until it is released, releasing it on drop otherwise.
struct BodyGuard<B: ResponseBody> {
    body: Option<B>,
}

impl<B: ResponseBody> BodyGuard<B> {
    fn new(body: B) -> Self {
        Self { body: Some(body) }
    }

    fn release(mut self) -> io::Result<()> {
        match self.body.take() {
            Some(body) => body.release(),
            None => Ok(()),
        }
    }
}

impl<B: ResponseBody> Read for BodyGuard<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.body.as_mut() {
            Some(body) => body.read(buf),
            None => Ok(0),
        }
    }
}

impl<B: ResponseBody> Drop for BodyGuard<B> {
    fn drop(&mut self) {
        // Only reached with a body still held when unwinding.
        if let Some(body) = self.body.take() {
            if let Err(e) = body.release() {
                warn!(error = %e, "Failed to release response body during unwind");
            }
        }
    }
}
