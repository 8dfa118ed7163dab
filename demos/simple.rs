//! Basic document building with JSON and YAML output.
//!
//! Run with: cargo run --example simple

use spindle::{DocumentBuilder, JsonOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut builder = DocumentBuilder::new();
    builder.attribute("name", "Tonkotsu Ramen");
    builder.attribute("origin", "Japan");
    builder.node("broth", |broth| {
        broth.attribute("base", "Pork");
        broth.attribute("simmer_hours", 12);
        Ok(())
    })?;
    builder.when("award_winning", true, true);
    builder.when("discontinued", true, false);

    println!("Compact JSON:\n{}\n", builder.to_json()?);
    println!(
        "Pretty JSON:\n{}\n",
        builder.to_json_with_options(JsonOptions::pretty().with_indent(4))?
    );
    println!("YAML:\n{}", builder.to_yaml()?);

    Ok(())
}
