use spindle::{DocumentBuilder, Error, KeyFormat, Registry, StepArgs};

fn decode(json: &str) -> serde_json::Value {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_camelize_with_lowercase_first_letter() {
    let mut builder = DocumentBuilder::new();
    builder.attribute("pizza_name", "Margherita");
    builder
        .key_format(KeyFormat::new().step(
            "camelize",
            StepArgs::named([("uppercase_first_letter", false)]),
        ))
        .unwrap();

    let data = decode(&builder.to_json().unwrap());
    assert_eq!(data["pizzaName"], "Margherita");
    assert!(data.get("pizza_name").is_none());
}

#[test]
fn test_underscore() {
    let mut builder = DocumentBuilder::new();
    builder.attribute("crustType", "Thin");
    builder
        .key_format(KeyFormat::new().step("underscore", StepArgs::None))
        .unwrap();

    let data = decode(&builder.to_json().unwrap());
    assert_eq!(data["crust_type"], "Thin");
}

#[test]
fn test_steps_compose_in_configured_order() {
    let mut builder = DocumentBuilder::new();
    builder.attribute("order_number", 123);
    builder
        .key_format(
            KeyFormat::new()
                .step("dasherize", StepArgs::None)
                .step(
                    "camelize",
                    StepArgs::named([("uppercase_first_letter", true)]),
                ),
        )
        .unwrap();

    // dasherize runs first, so camelize sees order-number and only
    // capitalizes the first letter
    let data = decode(&builder.to_json().unwrap());
    assert_eq!(data["Order-number"], 123);
}

#[test]
fn test_unsupported_transform_errors_at_configuration() {
    let mut builder = DocumentBuilder::new();
    let err = builder
        .key_format(KeyFormat::new().step("capitalize", StepArgs::None))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedTransforms(names) if names == vec!["capitalize".to_string()]
    ));
}

#[test]
fn test_unsupported_transforms_all_listed() {
    let mut builder = DocumentBuilder::new();
    let err = builder
        .key_format(
            KeyFormat::new()
                .step("capitalize", StepArgs::None)
                .step("underscore", StepArgs::None)
                .step("reverse", StepArgs::None),
        )
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("capitalize"));
    assert!(message.contains("reverse"));
    assert!(!message.contains("underscore"));
}

#[test]
fn test_empty_format_is_identity() {
    let mut builder = DocumentBuilder::new();
    builder.attribute("pizza_name", "Margherita");
    builder.key_format(KeyFormat::new()).unwrap();

    let data = decode(&builder.to_json().unwrap());
    assert_eq!(data["pizza_name"], "Margherita");
}

#[test]
fn test_formatting_reaches_every_depth() {
    let mut builder = DocumentBuilder::new();
    builder.attribute("pizza_name", "Margherita");
    builder
        .node("crust_info", |crust| {
            crust.attribute("crust_type", "Thin");
            Ok(())
        })
        .unwrap();
    builder
        .each("order_history", [1, 2], |order, n| {
            order.attribute("order_number", n);
            Ok(())
        })
        .unwrap();
    builder
        .key_format(KeyFormat::new().step(
            "camelize",
            StepArgs::named([("uppercase_first_letter", false)]),
        ))
        .unwrap();

    let data = decode(&builder.to_json().unwrap());
    assert_eq!(data["pizzaName"], "Margherita");
    assert_eq!(data["crustInfo"]["crustType"], "Thin");
    assert_eq!(data["orderHistory"][0]["orderNumber"], 1);
    assert_eq!(data["orderHistory"][1]["orderNumber"], 2);
}

#[test]
fn test_values_are_left_untouched() {
    let mut builder = DocumentBuilder::new();
    builder.attribute("dish_name", "tonkotsu_ramen");
    builder
        .key_format(KeyFormat::new().step(
            "camelize",
            StepArgs::named([("uppercase_first_letter", false)]),
        ))
        .unwrap();

    let data = decode(&builder.to_json().unwrap());
    // only the key is rewritten, never the value
    assert_eq!(data["dishName"], "tonkotsu_ramen");
}

#[test]
fn test_formatting_applies_to_yaml() {
    let mut builder = DocumentBuilder::new();
    builder.attribute("pizza_name", "Margherita");
    builder.attribute("crust_type", "Thin");
    builder
        .key_format(KeyFormat::new().step(
            "camelize",
            StepArgs::named([("uppercase_first_letter", false)]),
        ))
        .unwrap();

    assert_eq!(
        builder.to_yaml().unwrap(),
        "pizzaName: Margherita\ncrustType: Thin\n"
    );
}

#[test]
fn test_custom_registry_transform() {
    let mut registry = Registry::new();
    registry.register("shout", |key, _args| Ok(key.to_uppercase()));

    let mut builder = DocumentBuilder::new();
    builder.attribute("quiet_key", 1);
    builder
        .key_format_with(&registry, KeyFormat::new().step("shout", StepArgs::None))
        .unwrap();

    let data = decode(&builder.to_json().unwrap());
    assert_eq!(data["QUIET_KEY"], 1);
}

#[test]
fn test_reconfiguration_replaces_prior_pipeline() {
    let mut builder = DocumentBuilder::new();
    builder.attribute("pizza_name", "Margherita");
    builder
        .key_format(KeyFormat::new().step("dasherize", StepArgs::None))
        .unwrap();
    builder
        .key_format(KeyFormat::new().step("underscore", StepArgs::None))
        .unwrap();

    // only the latest configuration applies
    let data = decode(&builder.to_json().unwrap());
    assert_eq!(data["pizza_name"], "Margherita");
}

#[test]
fn test_bad_transform_argument_surfaces_at_serialization() {
    let mut builder = DocumentBuilder::new();
    builder.attribute("pizza_name", "Margherita");
    builder
        .key_format(KeyFormat::new().step(
            "camelize",
            StepArgs::named([("uppercase_first_letter", "yes")]),
        ))
        .unwrap();

    assert!(matches!(
        builder.to_json(),
        Err(Error::TransformArgs { transform, .. }) if transform == "camelize"
    ));
}

#[test]
fn test_root_unwrap_combines_with_formatting() {
    let mut builder = DocumentBuilder::new();
    builder.root("dish_info");
    builder
        .node("dish_info", |dish| {
            dish.attribute("dish_name", "Ramen");
            Ok(())
        })
        .unwrap();
    builder
        .key_format(KeyFormat::new().step(
            "camelize",
            StepArgs::named([("uppercase_first_letter", false)]),
        ))
        .unwrap();

    // formatting applies to the unwrapped subtree
    assert_eq!(builder.to_json().unwrap(), r#"{"dishName":"Ramen"}"#);
}
