//! Error types for document building and serialization.
//!
//! Every failure the crate can produce is a variant of [`Error`]. These are
//! programming-contract violations, raised synchronously at the offending
//! call and never recovered internally.
//!
//! ## Error Categories
//!
//! - **Configuration**: unknown key-transform names passed to `key_format`
//! - **Argument shape**: non-mapping sources given to `merge`/`attributes`,
//!   or transform arguments of the wrong type
//! - **Lookup**: a source key missing in `attributes`, or a root key missing
//!   from the finished document
//! - **Encoding**: failures surfaced by the JSON/YAML encoders
//!
//! ## Examples
//!
//! ```rust
//! use spindle::{DocumentBuilder, Error};
//!
//! let mut builder = DocumentBuilder::new();
//! let result = builder.merge(42);
//! assert!(matches!(result, Err(Error::ExpectedMapping(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced while building or serializing a
/// document.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// One or more key-transform names are absent from the registry.
    /// The message enumerates every offending name.
    #[error("unsupported key format transforms: {}", .0.join(", "))]
    UnsupportedTransforms(Vec<String>),

    /// A key transform received arguments of the wrong shape.
    #[error("invalid arguments for key transform `{transform}`: {message}")]
    TransformArgs { transform: String, message: String },

    /// `merge` or `attributes` was given a source that is not a mapping.
    #[error("expected a mapping, found {0}")]
    ExpectedMapping(&'static str),

    /// `attributes` asked for a key the source object does not have.
    #[error("key `{0}` not found on source object")]
    MissingKey(String),

    /// A root key was configured but is absent from the document.
    #[error("root key `{0}` is not present in the document")]
    MissingRoot(String),

    /// JSON encoding failed.
    #[error("JSON encoding failed: {0}")]
    Json(String),

    /// YAML encoding failed.
    #[error("YAML encoding failed: {0}")]
    Yaml(String),

    /// Custom error surfaced through the serde error traits.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a transform-argument error for a named transform step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::Error;
    ///
    /// let err = Error::transform_args("camelize", "uppercase_first_letter must be a boolean");
    /// assert!(err.to_string().contains("camelize"));
    /// ```
    pub fn transform_args(transform: &str, message: impl fmt::Display) -> Self {
        Error::TransformArgs {
            transform: transform.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
