//! Rewriting every key in a document with the key-formatting pipeline.
//!
//! Run with: cargo run --example key_formatting

use spindle::{DocumentBuilder, KeyFormat, Registry, StepArgs};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // snake_case keys in, camelCase keys out
    let mut builder = DocumentBuilder::new();
    builder.attribute("pizza_name", "Margherita");
    builder.node("crust_info", |crust| {
        crust.attribute("crust_type", "Thin");
        Ok(())
    })?;
    builder.key_format(KeyFormat::new().step(
        "camelize",
        StepArgs::named([("uppercase_first_letter", false)]),
    ))?;
    println!("camelized:\n{}\n", builder.to_json_pretty()?);

    // steps compose in order: dasherize first protects the boundary from
    // camelize
    let mut builder = DocumentBuilder::new();
    builder.attribute("order_number", 123);
    builder.key_format(
        KeyFormat::new()
            .step("dasherize", StepArgs::None)
            .step(
                "camelize",
                StepArgs::named([("uppercase_first_letter", true)]),
            ),
    )?;
    println!("dasherize + camelize:\n{}\n", builder.to_json()?);

    // custom transforms plug into the registry
    let mut registry = Registry::new();
    registry.register("shout", |key, _args| Ok(key.to_uppercase()));

    let mut builder = DocumentBuilder::new();
    builder.attribute("quiet_key", "loud now");
    builder.key_format_with(&registry, KeyFormat::new().step("shout", StepArgs::None))?;
    println!("custom transform:\n{}", builder.to_json()?);

    Ok(())
}
