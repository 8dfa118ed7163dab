//! List building with `nodes` and `each`.
//!
//! Run with: cargo run --example nested_nodes

use spindle::DocumentBuilder;
use std::error::Error;

struct Ingredient {
    name: &'static str,
    kind: &'static str,
}

fn main() -> Result<(), Box<dyn Error>> {
    let ingredients = [
        Ingredient { name: "Noodles", kind: "Main" },
        Ingredient { name: "Pork", kind: "Protein" },
        Ingredient { name: "Eggs", kind: "Topping" },
        Ingredient { name: "Miso", kind: "Flavoring" },
    ];

    // each: one node per item, in input order
    let mut builder = DocumentBuilder::new();
    builder.attribute("name", "Ramen");
    builder.each("ingredients", &ingredients, |item, ingredient| {
        item.attribute("name", ingredient.name);
        item.attribute("type", ingredient.kind);
        Ok(())
    })?;
    println!("each:\n{}\n", builder.to_json_pretty()?);

    // nodes: explicit scoped appends, with full control per item
    let mut builder = DocumentBuilder::new();
    builder.nodes("steps", |list| {
        list.push(|step| {
            step.attribute("action", "boil noodles");
            step.attribute("minutes", 3);
            Ok(())
        })?;
        list.push(|step| {
            step.attribute("action", "assemble bowl");
            step.attribute("minutes", 2);
            Ok(())
        })?;
        Ok(())
    })?;
    println!("nodes:\n{}", builder.to_yaml()?);

    Ok(())
}
