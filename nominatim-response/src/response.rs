//! Transport-facing response abstractions.
//!
//! The decoder never talks to an HTTP client directly. Anything that can
//! report a status line and hand over its body as a [`ResponseBody`] can be
//! decoded, which keeps the decoder usable with blocking transports, test
//! doubles, and the buffered `reqwest` adapter alike.

use bytes::Bytes;
use std::io::{self, Cursor, Read};

/// A readable response body that must be handed back to its transport.
pub trait ResponseBody: Read {
    /// Close the stream and let the transport reclaim the connection.
    ///
    /// Consumes the body, so a body can be released at most once.
    fn release(self) -> io::Result<()>;
}

/// A completed HTTP exchange, as seen by the decoder.
pub trait HttpResponse {
    /// Body stream type.
    type Body: ResponseBody;

    /// Numeric status code.
    fn status(&self) -> u16;

    /// Reason phrase from the status line.
    fn reason_phrase(&self) -> &str;

    /// Take ownership of the body stream.
    fn into_body(self) -> Self::Body;
}

/// A response whose body is already held in memory.
#[derive(Debug, Clone)]
pub struct BufferedResponse {
    status: u16,
    reason: String,
    body: Bytes,
}

impl BufferedResponse {
    /// Create a buffered response.
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Create a response with no body.
    pub fn empty(status: u16, reason: impl Into<String>) -> Self {
        Self::new(status, reason, Bytes::new())
    }

    /// Get the buffered body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl HttpResponse for BufferedResponse {
    type Body = BufferedBody;

    fn status(&self) -> u16 {
        self.status
    }

    fn reason_phrase(&self) -> &str {
        &self.reason
    }

    fn into_body(self) -> BufferedBody {
        BufferedBody {
            inner: Cursor::new(self.body),
        }
    }
}

/// Body stream over an in-memory buffer.
#[derive(Debug)]
pub struct BufferedBody {
    inner: Cursor<Bytes>,
}

impl Read for BufferedBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl ResponseBody for BufferedBody {
    fn release(self) -> io::Result<()> {
        // Nothing is held open; dropping the buffer is enough.
        Ok(())
    }
}
