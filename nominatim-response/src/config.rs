//! Decoder configuration.

/// Configuration for response decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// First status code treated as a failure.
    pub error_status: u16,
    /// Upper bound for buffered bodies, in bytes.
    pub max_body_bytes: Option<usize>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            error_status: 400,
            max_body_bytes: None,
        }
    }
}

impl DecoderConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first status code treated as a failure.
    pub fn error_status(mut self, status: u16) -> Self {
        self.error_status = status;
        self
    }

    /// Limit the size of buffered bodies.
    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = Some(limit);
        self
    }

    /// Remove the body size limit.
    pub fn unbounded(mut self) -> Self {
        self.max_body_bytes = None;
        self
    }

    /// Check whether a status code is a failure under this config.
    pub fn is_error_status(&self, status: u16) -> bool {
        status >= self.error_status
    }
}
