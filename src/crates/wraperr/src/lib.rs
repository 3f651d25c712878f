//! Error annotation helpers
//!
//! This crate wraps an existing error with a context message, a captured
//! call-site frame, or both, while keeping the original error reachable
//! through `source()`.
//!
//! # Modules
//!
//! - `error` - Annotation types, builders and the `ResultExt` trait
//! - `frame` - Call-site capture
//! - `render` - Verbose, multi-line rendering of an annotated chain
//! - `config` - Rendering options loaded from defaults, JSON or environment
//! - `logging` - Emit an annotated error as a single `tracing` event
//!
//! # Example
//!
//! ```rust
//! use wraperr::{cause, wrap, wrapf};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("EOF")]
//! struct Eof;
//!
//! let read = wrap(Some(Eof), "read error");
//! let client = wrapf!(read, "client {} error", 7).unwrap();
//!
//! assert_eq!(client.to_string(), "client 7 error: read error: EOF");
//! assert!(cause(Some(&client)).unwrap().is::<Eof>());
//! ```

pub mod config;
pub mod error;
pub mod frame;
pub mod logging;
pub mod render;

mod macros;

pub use config::RenderOptions;
pub use error::{
    cause, chain, chain_length, frames, root_cause, with_message, with_stack, wrap, BoxError,
    Chain, ResultExt, WithMessage, WithStack,
};
pub use frame::Frame;
pub use render::{render, FormatError, Formatted, Printer, Verbose};

use thiserror::Error;

/// Errors raised while loading rendering configuration
///
/// Annotation builders never fail; this is the only fallible surface of the
/// crate.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable holds bytes that are not UTF-8
    #[error("Environment variable {key} contains invalid UTF-8")]
    NotUnicode {
        /// Variable name
        key: String,
    },

    /// Environment variable could not be parsed into the target type
    #[error("Failed to parse environment variable {key}: {reason}")]
    Parse {
        /// Variable name
        key: String,
        /// Parser error message
        reason: String,
    },

    /// Environment variable is not a recognised boolean
    #[error("Invalid boolean value for {key}: {value}")]
    InvalidBool {
        /// Variable name
        key: String,
        /// Rejected value
        value: String,
    },

    /// Options parsed but are not usable
    #[error("Invalid render options: {0}")]
    Invalid(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[doc(hidden)]
pub mod __private {
    pub use crate::error::{attach_message, wrap_at};
}
