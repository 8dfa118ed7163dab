//! Configuration options for JSON output.
//!
//! This module provides [`JsonOptions`], which selects compact or pretty
//! JSON and the indent width used when pretty-printing.
//!
//! YAML output has no counterpart here: `serde_yaml` exposes no formatting
//! configuration, so [`DocumentBuilder::to_yaml`](crate::DocumentBuilder::to_yaml)
//! takes no options.
//!
//! ## Examples
//!
//! ```rust
//! use spindle::{DocumentBuilder, JsonOptions};
//!
//! let mut builder = DocumentBuilder::new();
//! builder.attribute("name", "Ramen");
//!
//! let compact = builder.to_json().unwrap();
//! assert_eq!(compact, r#"{"name":"Ramen"}"#);
//!
//! let wide = builder
//!     .to_json_with_options(JsonOptions::pretty().with_indent(4))
//!     .unwrap();
//! assert!(wide.contains("    \"name\""));
//! ```

/// Configuration options for JSON serialization.
///
/// # Examples
///
/// ```rust
/// use spindle::JsonOptions;
///
/// // Default compact output
/// let options = JsonOptions::new();
///
/// // Pretty-printed with 2-space indentation
/// let options = JsonOptions::pretty();
///
/// // Pretty-printed with a custom indent width
/// let options = JsonOptions::pretty().with_indent(4);
/// ```
#[derive(Clone, Debug)]
pub struct JsonOptions {
    pub indent: usize,
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            indent: 2,
            pretty: false,
        }
    }
}

impl JsonOptions {
    /// Creates default options (compact output).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::JsonOptions;
    ///
    /// let options = JsonOptions::new();
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::JsonOptions;
    ///
    /// let options = JsonOptions::pretty();
    /// assert!(options.pretty);
    /// assert_eq!(options.indent, 2);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        JsonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
