//! The document builder: scoped assembly of ordered key-value trees.
//!
//! [`DocumentBuilder`] owns one ordered mapping under construction. Nested
//! structure is built through scoped closures ([`DocumentBuilder::node`],
//! [`DocumentBuilder::nodes`], [`DocumentBuilder::each`]): each scope runs
//! against a fresh child builder and, on normal completion, its mapping is
//! captured into the parent. A scope that returns an error commits nothing.
//!
//! Once assembled, [`DocumentBuilder::to_json`] and
//! [`DocumentBuilder::to_yaml`] run the configured key-formatting pipeline
//! over the tree and hand it to the encoder, preserving key insertion order.
//!
//! ## Examples
//!
//! ```rust
//! use spindle::DocumentBuilder;
//!
//! let mut builder = DocumentBuilder::new();
//! builder.attribute("name", "Ramen");
//! builder.node("broth", |broth| {
//!     broth.attribute("base", "Pork");
//!     broth.attribute("simmer_hours", 12);
//!     Ok(())
//! })?;
//!
//! let json = builder.to_json()?;
//! assert_eq!(json, r#"{"name":"Ramen","broth":{"base":"Pork","simmer_hours":12}}"#);
//! # Ok::<(), spindle::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::format::{KeyFormat, KeyFormatter, Registry};
use crate::map::Map;
use crate::options::JsonOptions;
use crate::ser::to_value;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// A fluent builder for one ordered key-value document.
///
/// Values are written through [`attribute`](Self::attribute) and friends;
/// nested structure through the scoped methods. The builder serializes to
/// JSON or YAML once assembly is done.
///
/// # Examples
///
/// ```rust
/// use spindle::DocumentBuilder;
///
/// let mut builder = DocumentBuilder::new();
/// builder.attribute("name", "Tonkotsu Ramen");
/// builder.attribute("spicy", false);
///
/// assert_eq!(builder.to_json()?, r#"{"name":"Tonkotsu Ramen","spicy":false}"#);
/// # Ok::<(), spindle::Error>(())
/// ```
#[derive(Default)]
pub struct DocumentBuilder {
    data: Map,
    root: Option<String>,
    formatter: Option<KeyFormatter>,
}

impl DocumentBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with the output-unwrap key preset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::DocumentBuilder;
    ///
    /// let mut builder = DocumentBuilder::with_root("items");
    /// builder.attribute("items", vec![1, 2]);
    /// assert_eq!(builder.to_json()?, "[1,2]");
    /// # Ok::<(), spindle::Error>(())
    /// ```
    #[must_use]
    pub fn with_root(key: impl Into<String>) -> Self {
        DocumentBuilder {
            root: Some(key.into()),
            ..Self::default()
        }
    }

    /// Sets the output-unwrap key: serialization will present only the value
    /// stored under `key` instead of the whole mapping. The last call wins.
    pub fn root(&mut self, key: impl Into<String>) {
        self.root = Some(key.into());
    }

    /// Opens a scoped child context and captures it at `key`.
    ///
    /// A fresh child builder is passed to the closure; when the closure
    /// returns `Ok`, the child's entire mapping becomes the value at `key`
    /// in this builder. When the closure returns an error, nothing is
    /// captured and the error propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::DocumentBuilder;
    ///
    /// let mut builder = DocumentBuilder::new();
    /// builder.node("ingredient", |ingredient| {
    ///     ingredient.attribute("name", "Ramen Noodles");
    ///     Ok(())
    /// })?;
    /// # Ok::<(), spindle::Error>(())
    /// ```
    pub fn node<F>(&mut self, key: impl Into<String>, build: F) -> Result<()>
    where
        F: FnOnce(&mut DocumentBuilder) -> Result<()>,
    {
        let mut child = DocumentBuilder::new();
        build(&mut child)?;
        self.data.insert(key.into(), Value::Object(child.data));
        Ok(())
    }

    /// Opens a scoped child context and appends it to an external sequence.
    ///
    /// Like [`node`](Self::node), but on success the child's mapping is
    /// pushed onto `list` instead of stored at a key. Usually reached
    /// through [`NodeList::push`].
    pub fn add_node<F>(list: &mut Vec<Value>, build: F) -> Result<()>
    where
        F: FnOnce(&mut DocumentBuilder) -> Result<()>,
    {
        let mut child = DocumentBuilder::new();
        build(&mut child)?;
        list.push(Value::Object(child.data));
        Ok(())
    }

    /// Creates a list of nodes at `key`, built through repeated scoped
    /// appends.
    ///
    /// An empty sequence is stored at `key` immediately, so zero
    /// [`NodeList::push`] calls still leave an empty list in the output
    /// (not an absent key). Each push appends directly to the sequence
    /// already held by this builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::DocumentBuilder;
    ///
    /// let ingredients = ["Noodles", "Pork", "Eggs", "Miso"];
    ///
    /// let mut builder = DocumentBuilder::new();
    /// builder.nodes("ingredients", |list| {
    ///     for ingredient in ingredients {
    ///         list.push(|item| {
    ///             item.attribute("name", ingredient);
    ///             Ok(())
    ///         })?;
    ///     }
    ///     Ok(())
    /// })?;
    /// # Ok::<(), spindle::Error>(())
    /// ```
    pub fn nodes<F>(&mut self, key: impl Into<String>, build: F) -> Result<()>
    where
        F: FnOnce(&mut NodeList<'_>) -> Result<()>,
    {
        let slot = self.data.slot(key.into(), Value::Array(Vec::new()));
        match slot {
            Value::Array(items) => build(&mut NodeList { items }),
            _ => unreachable!("slot was just written as an array"),
        }
    }

    /// Iterates over `items`, building one node per item into a list at
    /// `key`.
    ///
    /// The sequence is created empty up front and each successfully built
    /// child is appended to it in input order, so partial progress is
    /// visible after every iteration and zero items yields an empty list.
    /// An error from the closure stops iteration; items captured before it
    /// stay.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::DocumentBuilder;
    ///
    /// let ingredients = [("Noodles", "Main"), ("Pork", "Protein")];
    ///
    /// let mut builder = DocumentBuilder::new();
    /// builder.each("ingredients", ingredients, |item, (name, kind)| {
    ///     item.attribute("name", name);
    ///     item.attribute("type", kind);
    ///     Ok(())
    /// })?;
    /// # Ok::<(), spindle::Error>(())
    /// ```
    pub fn each<I, T, F>(&mut self, key: impl Into<String>, items: I, mut build: F) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut DocumentBuilder, T) -> Result<()>,
    {
        let slot = self.data.slot(key.into(), Value::Array(Vec::new()));
        let out = match slot {
            Value::Array(list) => list,
            _ => unreachable!("slot was just written as an array"),
        };
        for item in items {
            let mut child = DocumentBuilder::new();
            build(&mut child, item)?;
            out.push(Value::Object(child.data));
        }
        Ok(())
    }

    /// Sets `key` to `value`, overwriting in place if the key exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::DocumentBuilder;
    ///
    /// let mut builder = DocumentBuilder::new();
    /// builder.attribute("name", "Ramen Noodles");
    /// builder.attribute("servings", 2);
    /// ```
    pub fn attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Copies the named keys from a source object into this builder, in
    /// order.
    ///
    /// The source may be anything serializable to a mapping — a
    /// `#[derive(Serialize)]` struct (fields) or a string-keyed map (keys)
    /// are reached the same way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use spindle::DocumentBuilder;
    ///
    /// #[derive(Serialize)]
    /// struct Dish { name: String, origin: String, secret: String }
    ///
    /// let ramen = Dish {
    ///     name: "Ramen".into(),
    ///     origin: "Japan".into(),
    ///     secret: "msg".into(),
    /// };
    ///
    /// let mut builder = DocumentBuilder::new();
    /// builder.attributes(&ramen, &["name", "origin"])?;
    /// assert_eq!(builder.to_json()?, r#"{"name":"Ramen","origin":"Japan"}"#);
    /// # Ok::<(), spindle::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::ExpectedMapping`] if the source does not serialize to a
    /// mapping; [`Error::MissingKey`] if a requested key is absent.
    pub fn attributes<T>(&mut self, source: &T, keys: &[&str]) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let source = to_value(source)?;
        let map = match source {
            Value::Object(map) => map,
            other => return Err(Error::ExpectedMapping(other.kind())),
        };
        for &key in keys {
            match map.get(key) {
                Some(value) => self.attribute(key, value.clone()),
                None => return Err(Error::MissingKey(key.to_string())),
            }
        }
        Ok(())
    }

    /// Shallow-copies all pairs from a serializable mapping into this
    /// builder, overwriting existing keys (which keep their original
    /// position).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::{value, DocumentBuilder};
    ///
    /// let mut builder = DocumentBuilder::new();
    /// builder.attribute("rating", 3);
    /// builder.merge(value!({ "rating": 4.5, "spiciness": "Medium" }))?;
    /// assert_eq!(builder.to_json()?, r#"{"rating":4.5,"spiciness":"Medium"}"#);
    /// # Ok::<(), spindle::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::ExpectedMapping`] if the source does not serialize to a
    /// mapping.
    pub fn merge<T: Serialize>(&mut self, source: T) -> Result<()> {
        match to_value(&source)? {
            Value::Object(map) => {
                self.data.extend(map);
                Ok(())
            }
            other => Err(Error::ExpectedMapping(other.kind())),
        }
    }

    /// Shallow-copies all pairs from another builder's mapping into this
    /// one, with the same overwrite semantics as [`merge`](Self::merge).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::DocumentBuilder;
    ///
    /// let mut footer = DocumentBuilder::new();
    /// footer.attribute("origin", "Japan");
    ///
    /// let mut builder = DocumentBuilder::new();
    /// builder.attribute("name", "Ramen");
    /// builder.partial(&footer);
    /// assert_eq!(builder.to_json()?, r#"{"name":"Ramen","origin":"Japan"}"#);
    /// # Ok::<(), spindle::Error>(())
    /// ```
    pub fn partial(&mut self, other: &DocumentBuilder) {
        for (key, value) in other.data.iter() {
            self.data.insert(key.clone(), value.clone());
        }
    }

    /// Sets `key` to `value` only when the condition holds.
    ///
    /// A `bool` condition gates directly; a [`Condition::test`] predicate
    /// is evaluated against the value. A false condition leaves the key
    /// untouched — it is not set to null.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::{Condition, DocumentBuilder};
    ///
    /// let mut builder = DocumentBuilder::new();
    /// builder.when("origin", "Japan", true);
    /// builder.when("age", 15, Condition::test(|v| v.as_i64().unwrap_or(0) > 18));
    /// assert_eq!(builder.to_json()?, r#"{"origin":"Japan"}"#);
    /// # Ok::<(), spindle::Error>(())
    /// ```
    pub fn when(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
        condition: impl Into<Condition>,
    ) {
        let value = value.into();
        let set = match condition.into() {
            Condition::Bool(b) => b,
            Condition::Test(predicate) => predicate(&value),
        };
        if set {
            self.data.insert(key.into(), value);
        }
    }

    /// Validates a [`KeyFormat`] against the default transform registry and
    /// installs it, replacing any prior pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::{DocumentBuilder, KeyFormat, StepArgs};
    ///
    /// let mut builder = DocumentBuilder::new();
    /// builder.attribute("pizza_name", "Margherita");
    /// builder.key_format(
    ///     KeyFormat::new().step(
    ///         "camelize",
    ///         StepArgs::named([("uppercase_first_letter", false)]),
    ///     ),
    /// )?;
    /// assert_eq!(builder.to_json()?, r#"{"pizzaName":"Margherita"}"#);
    /// # Ok::<(), spindle::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedTransforms`] listing every unknown step name.
    pub fn key_format(&mut self, format: KeyFormat) -> Result<()> {
        self.key_format_with(&Registry::new(), format)
    }

    /// Like [`key_format`](Self::key_format), validating against a
    /// caller-supplied registry instead of the default catalog.
    pub fn key_format_with(&mut self, registry: &Registry, format: KeyFormat) -> Result<()> {
        self.formatter = Some(registry.compile(&format)?);
        Ok(())
    }

    /// Returns the document as a [`Value`]: the full mapping, or — when a
    /// root key is set — only the value stored under it.
    ///
    /// # Errors
    ///
    /// [`Error::MissingRoot`] when a root key is set but absent from the
    /// mapping.
    pub fn data(&self) -> Result<Value> {
        match &self.root {
            Some(root) => self
                .data
                .get(root)
                .cloned()
                .ok_or_else(|| Error::MissingRoot(root.clone())),
            None => Ok(Value::Object(self.data.clone())),
        }
    }

    fn output_tree(&self) -> Result<Value> {
        let data = self.data()?;
        match &self.formatter {
            Some(formatter) => formatter.format_tree(&data),
            None => Ok(data),
        }
    }

    /// Serializes the document to a compact JSON string, applying the
    /// key-formatting pipeline first.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::MissingRoot`], key-formatting errors, and encoder
    /// failures.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn to_json(&self) -> Result<String> {
        self.to_json_with_options(JsonOptions::new())
    }

    /// Serializes the document to pretty-printed JSON (2-space indent).
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn to_json_pretty(&self) -> Result<String> {
        self.to_json_with_options(JsonOptions::pretty())
    }

    /// Serializes the document to JSON with custom [`JsonOptions`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::{DocumentBuilder, JsonOptions};
    ///
    /// let mut builder = DocumentBuilder::new();
    /// builder.attribute("name", "Ramen");
    /// let json = builder.to_json_with_options(JsonOptions::pretty().with_indent(4))?;
    /// assert_eq!(json, "{\n    \"name\": \"Ramen\"\n}");
    /// # Ok::<(), spindle::Error>(())
    /// ```
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn to_json_with_options(&self, options: JsonOptions) -> Result<String> {
        let tree = self.output_tree()?;
        if options.pretty {
            let indent = vec![b' '; options.indent];
            let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
            let mut buf = Vec::new();
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            tree.serialize(&mut ser)?;
            String::from_utf8(buf).map_err(Error::custom)
        } else {
            Ok(serde_json::to_string(&tree)?)
        }
    }

    /// Serializes the document to a YAML string, applying the key-formatting
    /// pipeline first. Key insertion order is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::DocumentBuilder;
    ///
    /// let mut builder = DocumentBuilder::new();
    /// builder.attribute("name", "Ramen");
    /// builder.attribute("origin", "Japan");
    /// assert_eq!(builder.to_yaml()?, "name: Ramen\norigin: Japan\n");
    /// # Ok::<(), spindle::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates [`Error::MissingRoot`], key-formatting errors, and encoder
    /// failures.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn to_yaml(&self) -> Result<String> {
        let tree = self.output_tree()?;
        Ok(serde_yaml::to_string(&tree)?)
    }
}

impl fmt::Debug for DocumentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentBuilder")
            .field("data", &self.data)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Handle to a list of nodes under construction; see
/// [`DocumentBuilder::nodes`].
///
/// Each [`push`](Self::push) opens one scoped child context and appends its
/// mapping directly to the sequence stored in the parent builder.
pub struct NodeList<'a> {
    items: &'a mut Vec<Value>,
}

impl NodeList<'_> {
    /// Builds one node and appends it to the list.
    ///
    /// The closure runs against a fresh child builder; on `Ok` the child's
    /// mapping is appended, on `Err` nothing is and the error propagates.
    pub fn push<F>(&mut self, build: F) -> Result<()>
    where
        F: FnOnce(&mut DocumentBuilder) -> Result<()>,
    {
        DocumentBuilder::add_node(self.items, build)
    }

    /// Number of nodes appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A condition for [`DocumentBuilder::when`]: a plain boolean or a predicate
/// over the candidate value.
///
/// # Examples
///
/// ```rust
/// use spindle::{Condition, Value};
///
/// let adult = Condition::test(|v: &Value| v.as_i64().unwrap_or(0) > 18);
/// let always: Condition = true.into();
/// ```
pub enum Condition {
    Bool(bool),
    Test(Box<dyn Fn(&Value) -> bool>),
}

impl Condition {
    /// Wraps a predicate over the candidate value.
    #[must_use]
    pub fn test<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + 'static,
    {
        Condition::Test(Box::new(predicate))
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Condition::Bool(value)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Condition::Test(_) => f.write_str("Test(..)"),
        }
    }
}
