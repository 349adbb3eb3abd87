//! # nominatim-response
//!
//! JSON response decoding for the Nominatim geocoding client.
//!
//! Every request the client sends comes back through the same path: check
//! the status line, parse the body as JSON into the expected type, and hand
//! the body back to the transport whatever happened.
//!
//! ## Core Concepts
//!
//! - **[`ResponseDecoder`]**: Decode responses into a target type
//! - **[`HttpResponse`]** / **[`ResponseBody`]**: The transport seam
//! - **[`BufferedResponse`]**: In-memory response, also built from `reqwest`
//! - **[`DecoderConfig`]**: Error status threshold and body size limit
//! - **[`DecodeError`]**: Status, JSON, release and transport failures
//!
//! ## Example
//!
//! ```ignore
//! use nominatim_response::{ResponseDecoder, DecodeError};
//!
//! #[derive(serde::Deserialize)]
//! struct Address {
//!     display_name: String,
//!     lat: String,
//!     lon: String,
//! }
//!
//! let decoder = ResponseDecoder::<Vec<Address>>::new();
//! let response = reqwest::get("https://nominatim.openstreetmap.org/search?q=rennes&format=json").await?;
//!
//! match decoder.decode_reqwest(response).await {
//!     Ok(addresses) => println!("{} results", addresses.len()),
//!     Err(DecodeError::HttpStatus { status, reason }) => eprintln!("{status} {reason}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod response;
#[cfg(feature = "reqwest")]
pub mod transport;

// Re-exports
pub use config::DecoderConfig;
pub use decoder::{decode, ResponseDecoder};
pub use error::{DecodeError, DecodeResult};
pub use response::{BufferedBody, BufferedResponse, HttpResponse, ResponseBody};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        decode, BufferedResponse, DecodeError, DecodeResult, DecoderConfig, HttpResponse,
        ResponseBody, ResponseDecoder,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let decoder = ResponseDecoder::<serde_json::Value>::with_config(DecoderConfig::new());
        assert_eq!(decoder.config().error_status, 400);
    }

    #[test]
    fn test_decode_value() {
        let response = BufferedResponse::new(200, "OK", r#"{"lat":48.85,"lon":2.35}"#);
        let value: serde_json::Value = decode(response).unwrap();
        assert_eq!(value["lat"], 48.85);
        assert_eq!(value["lon"], 2.35);
    }
}
