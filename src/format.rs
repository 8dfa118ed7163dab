//! Key formatting: configurable renaming of every key in a document tree.
//!
//! A [`KeyFormat`] is an ordered list of named transform steps with per-step
//! arguments. Compiling it against a [`Registry`] validates every name
//! eagerly and yields a [`KeyFormatter`], which rewrites keys one at a time
//! ([`KeyFormatter::format_key`]) or across a whole tree
//! ([`KeyFormatter::format_tree`]). Steps apply in configuration order, each
//! consuming the previous step's output.
//!
//! ## Examples
//!
//! ```rust
//! use spindle::{KeyFormat, Registry, StepArgs};
//!
//! let format = KeyFormat::new()
//!     .step("dasherize", StepArgs::None)
//!     .step("camelize", StepArgs::named([("uppercase_first_letter", true)]));
//!
//! let formatter = Registry::new().compile(&format).unwrap();
//! assert_eq!(formatter.format_key("order_number").unwrap(), "Order-number");
//! ```

use crate::error::{Error, Result};
use crate::map::Map;
use crate::transforms;
use crate::value::Value;
use indexmap::IndexMap;

/// A key transform: takes the key and the configured step arguments, returns
/// the rewritten key.
pub type TransformFn = fn(&str, &StepArgs) -> Result<String>;

/// Arguments configured for one transform step.
///
/// The argument form dictates how the transform is invoked: [`StepArgs::None`]
/// passes only the key, [`StepArgs::Positional`] adds positional values, and
/// [`StepArgs::Named`] adds named values.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum StepArgs {
    #[default]
    None,
    Positional(Vec<Value>),
    Named(Map),
}

impl StepArgs {
    /// Builds positional arguments from any values convertible to [`Value`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::StepArgs;
    ///
    /// let args = StepArgs::positional([true]);
    /// assert!(args.get("uppercase_first_letter", 0).is_some());
    /// ```
    pub fn positional<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        StepArgs::Positional(values.into_iter().map(Into::into).collect())
    }

    /// Builds named arguments from `(name, value)` pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spindle::StepArgs;
    ///
    /// let args = StepArgs::named([("uppercase_first_letter", false)]);
    /// assert!(args.get("uppercase_first_letter", 0).is_some());
    /// ```
    pub fn named<I, K, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        StepArgs::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Looks up an argument by name (for named args) or position (for
    /// positional args). Returns `None` when unset.
    #[must_use]
    pub fn get(&self, name: &str, index: usize) -> Option<&Value> {
        match self {
            StepArgs::None => None,
            StepArgs::Positional(values) => values.get(index),
            StepArgs::Named(map) => map.get(name),
        }
    }
}

/// An ordered key-formatting configuration: transform names plus arguments.
///
/// Purely declarative; nothing is validated until the format is compiled
/// against a [`Registry`] (which [`DocumentBuilder::key_format`] does for
/// you).
///
/// [`DocumentBuilder::key_format`]: crate::DocumentBuilder::key_format
///
/// # Examples
///
/// ```rust
/// use spindle::{KeyFormat, StepArgs};
///
/// let format = KeyFormat::new()
///     .step("underscore", StepArgs::None);
/// assert_eq!(format.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyFormat {
    steps: Vec<(String, StepArgs)>,
}

impl KeyFormat {
    /// Creates an empty format (the identity pipeline).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one transform step. Steps run in the order they were added.
    #[must_use]
    pub fn step(mut self, name: impl Into<String>, args: StepArgs) -> Self {
        self.steps.push((name.into(), args));
        self
    }

    /// Returns the number of configured steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no steps are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates over the configured `(name, args)` steps in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StepArgs)> {
        self.steps.iter().map(|(name, args)| (name.as_str(), args))
    }
}

/// The registry of named key transforms.
///
/// [`Registry::new`] starts with the default catalog (`camelize`,
/// `underscore`, `dasherize`, `humanize`, `titleize`); custom transforms can
/// be added with [`Registry::register`].
///
/// # Examples
///
/// ```rust
/// use spindle::{Registry, StepArgs};
///
/// let mut registry = Registry::new();
/// registry.register("shout", |key, _args| Ok(key.to_uppercase()));
/// assert!(registry.contains("shout"));
/// assert!(registry.contains("camelize"));
/// ```
#[derive(Clone, Debug)]
pub struct Registry {
    transforms: IndexMap<String, TransformFn>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Registry {
            transforms: IndexMap::new(),
        };
        registry.register("camelize", transforms::camelize);
        registry.register("underscore", transforms::underscore);
        registry.register("dasherize", transforms::dasherize);
        registry.register("humanize", transforms::humanize);
        registry.register("titleize", transforms::titleize);
        registry
    }
}

impl Registry {
    /// Creates a registry holding the default transform catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with no transforms at all.
    #[must_use]
    pub fn empty() -> Self {
        Registry {
            transforms: IndexMap::new(),
        }
    }

    /// Registers a transform under `name`, replacing any existing one.
    pub fn register(&mut self, name: impl Into<String>, transform: TransformFn) {
        self.transforms.insert(name.into(), transform);
    }

    /// Returns `true` if a transform with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Validates a [`KeyFormat`] and compiles it into a [`KeyFormatter`].
    ///
    /// Every step name is checked before any key is processed; unknown names
    /// fail with [`Error::UnsupportedTransforms`] listing all of them at
    /// once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedTransforms`] when any step names a
    /// transform absent from this registry.
    pub fn compile(&self, format: &KeyFormat) -> Result<KeyFormatter> {
        let unsupported: Vec<String> = format
            .iter()
            .filter(|(name, _)| !self.contains(name))
            .map(|(name, _)| name.to_string())
            .collect();
        if !unsupported.is_empty() {
            return Err(Error::UnsupportedTransforms(unsupported));
        }

        let steps = format
            .iter()
            .map(|(name, args)| Step {
                func: self.transforms[name],
                args: args.clone(),
            })
            .collect();
        Ok(KeyFormatter { steps })
    }
}

#[derive(Clone, Debug)]
struct Step {
    func: TransformFn,
    args: StepArgs,
}

/// A compiled, validated key-formatting pipeline.
///
/// Produced by [`Registry::compile`]; applies its steps in configured order.
/// An empty pipeline is the identity function.
#[derive(Clone, Debug, Default)]
pub struct KeyFormatter {
    steps: Vec<Step>,
}

impl KeyFormatter {
    /// Rewrites a single key by running every configured step in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransformArgs`] when a step's configured arguments
    /// have the wrong shape for its transform.
    pub fn format_key(&self, key: &str) -> Result<String> {
        let mut key = key.to_string();
        for step in &self.steps {
            key = (step.func)(&key, &step.args)?;
        }
        Ok(key)
    }

    /// Rewrites every key of a document tree, at every nesting depth.
    ///
    /// Mappings get their keys rewritten in visit order and their values
    /// walked recursively; sequences are walked element-wise; scalars pass
    /// through untouched.
    pub fn format_tree(&self, value: &Value) -> Result<Value> {
        match value {
            Value::Object(map) => {
                let mut formatted = Map::with_capacity(map.len());
                for (key, value) in map.iter() {
                    formatted.insert(self.format_key(key)?, self.format_tree(value)?);
                }
                Ok(Value::Object(formatted))
            }
            Value::Array(items) => {
                let formatted = items
                    .iter()
                    .map(|item| self.format_tree(item))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Array(formatted))
            }
            scalar => Ok(scalar.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pipeline_is_identity() {
        let formatter = Registry::new().compile(&KeyFormat::new()).unwrap();
        assert_eq!(formatter.format_key("pizza_name").unwrap(), "pizza_name");
    }

    #[test]
    fn test_unknown_names_reported_together() {
        let format = KeyFormat::new()
            .step("capitalize", StepArgs::None)
            .step("underscore", StepArgs::None)
            .step("reverse", StepArgs::None);

        let err = Registry::new().compile(&format).unwrap_err();
        match err {
            Error::UnsupportedTransforms(names) => {
                assert_eq!(names, vec!["capitalize".to_string(), "reverse".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_steps_apply_in_order() {
        let format = KeyFormat::new()
            .step("dasherize", StepArgs::None)
            .step("camelize", StepArgs::named([("uppercase_first_letter", true)]));
        let formatter = Registry::new().compile(&format).unwrap();

        // dasherize first turns the underscore into a dash, which camelize
        // then leaves alone
        assert_eq!(formatter.format_key("order_number").unwrap(), "Order-number");
    }

    #[test]
    fn test_empty_registry_rejects_everything() {
        let format = KeyFormat::new().step("camelize", StepArgs::None);
        let err = Registry::empty().compile(&format).unwrap_err();
        assert!(matches!(err, Error::UnsupportedTransforms(_)));
    }

    #[test]
    fn test_custom_transform() {
        let mut registry = Registry::new();
        registry.register("shout", |key, _args| Ok(key.to_uppercase()));

        let format = KeyFormat::new().step("shout", StepArgs::None);
        let formatter = registry.compile(&format).unwrap();
        assert_eq!(formatter.format_key("quiet").unwrap(), "QUIET");
    }

    #[test]
    fn test_format_tree_recurses_and_skips_scalars() {
        let formatter = Registry::new()
            .compile(&KeyFormat::new().step("underscore", StepArgs::None))
            .unwrap();

        let tree = crate::value!({
            "pizzaName": "Margherita",
            "crustInfo": { "crustType": "Thin" },
            "orderHistory": [{ "orderNumber": 1 }]
        });

        let formatted = formatter.format_tree(&tree).unwrap();
        let obj = formatted.as_object().unwrap();
        assert_eq!(
            obj.get("pizza_name").and_then(|v| v.as_str()),
            Some("Margherita")
        );
        let crust = obj.get("crust_info").and_then(|v| v.as_object()).unwrap();
        assert_eq!(crust.get("crust_type").and_then(|v| v.as_str()), Some("Thin"));
        let history = obj.get("order_history").and_then(|v| v.as_array()).unwrap();
        let order = history[0].as_object().unwrap();
        assert_eq!(order.get("order_number").and_then(|v| v.as_i64()), Some(1));
    }
}
