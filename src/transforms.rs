//! The default catalog of key transforms.
//!
//! These are the named functions the default [`Registry`](crate::Registry)
//! ships with. Semantics follow the conventional inflection rules, which is
//! what makes the steps compose order-sensitively: `camelize` treats only
//! underscores as word separators, so running `dasherize` first protects a
//! boundary from it (`order_number` → `order-number` → `Order-number`).
//!
//! Each transform receives the key plus its configured [`StepArgs`] and
//! returns the rewritten key.

use crate::error::{Error, Result};
use crate::format::StepArgs;
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|_)(.)").unwrap());
static HUMP_ACRONYM: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static HUMP_LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());
static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w").unwrap());

/// Removes underscores, uppercasing the letter that follows each one.
///
/// The `uppercase_first_letter` argument (named, or first positional)
/// controls the leading letter; it defaults to `true`. Only underscores are
/// treated as word separators.
///
/// # Examples
///
/// ```rust
/// use spindle::{transforms, StepArgs};
///
/// let lower = StepArgs::named([("uppercase_first_letter", false)]);
/// assert_eq!(transforms::camelize("pizza_name", &lower).unwrap(), "pizzaName");
/// assert_eq!(transforms::camelize("pizza_name", &StepArgs::None).unwrap(), "PizzaName");
/// ```
pub fn camelize(key: &str, args: &StepArgs) -> Result<String> {
    let uppercase_first = match args.get("uppercase_first_letter", 0) {
        None => true,
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            return Err(Error::transform_args(
                "camelize",
                format!(
                    "uppercase_first_letter must be a boolean, found {}",
                    other.kind()
                ),
            ))
        }
    };

    let camelized = upper_camelize(key);
    if uppercase_first {
        return Ok(camelized);
    }
    let mut chars = key.chars();
    match chars.next() {
        None => Ok(String::new()),
        Some(first) => {
            let mut out: String = first.to_lowercase().collect();
            out.extend(camelized.chars().skip(1));
            Ok(out)
        }
    }
}

fn upper_camelize(key: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(key, |caps: &regex::Captures<'_>| caps[1].to_uppercase())
        .into_owned()
}

/// Breaks camel-case humps with underscores, converts dashes to underscores,
/// and lowercases.
///
/// # Examples
///
/// ```rust
/// use spindle::{transforms, StepArgs};
///
/// assert_eq!(transforms::underscore("crustType", &StepArgs::None).unwrap(), "crust_type");
/// assert_eq!(transforms::underscore("HTTPResponse", &StepArgs::None).unwrap(), "http_response");
/// ```
pub fn underscore(key: &str, _args: &StepArgs) -> Result<String> {
    let s = HUMP_ACRONYM.replace_all(key, "${1}_${2}");
    let s = HUMP_LOWER_UPPER.replace_all(&s, "${1}_${2}");
    Ok(s.replace('-', "_").to_lowercase())
}

/// Replaces underscores with dashes.
///
/// # Examples
///
/// ```rust
/// use spindle::{transforms, StepArgs};
///
/// assert_eq!(transforms::dasherize("order_number", &StepArgs::None).unwrap(), "order-number");
/// ```
pub fn dasherize(key: &str, _args: &StepArgs) -> Result<String> {
    Ok(key.replace('_', "-"))
}

/// Strips a trailing `_id`, converts underscores to spaces, lowercases, and
/// capitalizes the first word.
///
/// # Examples
///
/// ```rust
/// use spindle::{transforms, StepArgs};
///
/// assert_eq!(transforms::humanize("employee_salary", &StepArgs::None).unwrap(), "Employee salary");
/// assert_eq!(transforms::humanize("author_id", &StepArgs::None).unwrap(), "Author");
/// ```
pub fn humanize(key: &str, _args: &StepArgs) -> Result<String> {
    let s = key
        .strip_suffix("_id")
        .unwrap_or(key)
        .replace('_', " ")
        .to_lowercase();
    let mut chars = s.chars();
    match chars.next() {
        None => Ok(String::new()),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            Ok(out)
        }
    }
}

/// Capitalizes every word: `underscore` + `humanize`, then an uppercase
/// letter at each word start.
///
/// # Examples
///
/// ```rust
/// use spindle::{transforms, StepArgs};
///
/// assert_eq!(
///     transforms::titleize("man_from_the_boondocks", &StepArgs::None).unwrap(),
///     "Man From The Boondocks"
/// );
/// ```
pub fn titleize(key: &str, args: &StepArgs) -> Result<String> {
    let human = humanize(&underscore(key, args)?, args)?;
    Ok(WORD_START
        .replace_all(&human, |caps: &regex::Captures<'_>| caps[0].to_uppercase())
        .into_owned())
}
