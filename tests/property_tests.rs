//! Property-based tests for the builder's serialization guarantees: values
//! round-trip through JSON unchanged, list construction preserves length and
//! order, and key insertion order survives into the output text.

use proptest::prelude::*;
use spindle::{value, DocumentBuilder};

fn decode(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("builder emitted invalid JSON")
}

proptest! {
    #[test]
    fn prop_attribute_i64_roundtrip(n in any::<i64>()) {
        let mut builder = DocumentBuilder::new();
        builder.attribute("value", n);

        let data = decode(&builder.to_json().unwrap());
        prop_assert_eq!(data["value"].as_i64(), Some(n));
    }

    #[test]
    fn prop_attribute_bool_roundtrip(b in any::<bool>()) {
        let mut builder = DocumentBuilder::new();
        builder.attribute("value", b);

        let data = decode(&builder.to_json().unwrap());
        prop_assert_eq!(data["value"].as_bool(), Some(b));
    }

    #[test]
    fn prop_attribute_string_roundtrip(s in ".*") {
        let mut builder = DocumentBuilder::new();
        builder.attribute("value", s.as_str());

        let data = decode(&builder.to_json().unwrap());
        prop_assert_eq!(data["value"].as_str(), Some(s.as_str()));
    }

    #[test]
    fn prop_attribute_vec_roundtrip(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let mut builder = DocumentBuilder::new();
        builder.attribute("value", v.clone());

        let data = decode(&builder.to_json().unwrap());
        let decoded: Vec<i32> = data["value"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n.as_i64().unwrap() as i32)
            .collect();
        prop_assert_eq!(decoded, v);
    }

    #[test]
    fn prop_each_preserves_length_and_order(names in prop::collection::vec("[a-z]{1,8}", 0..16)) {
        let mut builder = DocumentBuilder::new();
        builder
            .each("items", names.clone(), |item, name| {
                item.attribute("name", name);
                Ok(())
            })
            .unwrap();

        let data = decode(&builder.to_json().unwrap());
        let items = data["items"].as_array().unwrap();
        prop_assert_eq!(items.len(), names.len());
        for (item, name) in items.iter().zip(&names) {
            prop_assert_eq!(item["name"].as_str(), Some(name.as_str()));
        }
    }

    #[test]
    fn prop_when_false_never_sets(n in any::<i64>()) {
        let mut builder = DocumentBuilder::new();
        builder.when("value", n, false);
        prop_assert_eq!(builder.to_json().unwrap(), "{}");
    }

    #[test]
    fn prop_when_true_always_sets(n in any::<i64>()) {
        let mut builder = DocumentBuilder::new();
        builder.when("value", n, true);

        let data = decode(&builder.to_json().unwrap());
        prop_assert_eq!(data["value"].as_i64(), Some(n));
    }

    #[test]
    fn prop_merge_overwrites(first in any::<i64>(), second in any::<i64>(), extra in any::<i64>()) {
        let mut builder = DocumentBuilder::new();
        builder.attribute("a", first);
        builder.merge(value!({ "a": second, "b": extra })).unwrap();

        let data = decode(&builder.to_json().unwrap());
        prop_assert_eq!(data["a"].as_i64(), Some(second));
        prop_assert_eq!(data["b"].as_i64(), Some(extra));
    }

    #[test]
    fn prop_insertion_order_survives_serialization(
        keys in prop::collection::vec("[a-z]{1,6}", 1..12),
        start in any::<i64>(),
    ) {
        // first occurrence wins the position, later duplicates only
        // overwrite the value
        let mut seen = Vec::new();
        for key in &keys {
            if !seen.contains(key) {
                seen.push(key.clone());
            }
        }

        let mut builder = DocumentBuilder::new();
        for (i, key) in seen.iter().enumerate() {
            builder.attribute(key.as_str(), start.wrapping_add(i as i64));
        }

        let expected = format!(
            "{{{}}}",
            seen.iter()
                .enumerate()
                .map(|(i, key)| format!("\"{}\":{}", key, start.wrapping_add(i as i64)))
                .collect::<Vec<_>>()
                .join(",")
        );
        prop_assert_eq!(builder.to_json().unwrap(), expected);
    }
}
