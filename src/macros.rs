/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Handy for attribute values and `merge` sources:
///
/// ```rust
/// use spindle::value;
///
/// let extra = value!({
///     "rating": 4.5,
///     "tags": ["noodles", "pork"],
///     "archived": null
/// });
/// assert!(extra.is_object());
/// ```
///
/// Arbitrary expressions fall back to [`to_value`](crate::to_value); values
/// that cannot be serialized become `Value::Null`.
#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    }};
}
