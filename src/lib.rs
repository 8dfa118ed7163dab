//! # spindle
//!
//! A fluent, declarative builder for constructing nested key-value documents
//! and serializing them to JSON or YAML.
//!
//! ## Why a builder?
//!
//! Assembling structured output — API responses, config documents, fixtures —
//! usually means hand-nesting maps and vectors. Spindle replaces that with a
//! scoped assembly model: open a nested context, write attributes into it,
//! and the context's contents are captured into the parent when the scope
//! completes. Insertion order is preserved end to end, and the whole tree can
//! be run through a configurable key-naming pipeline before emission.
//!
//! ## Key Features
//!
//! - **Scoped nesting**: [`node`], [`nodes`], and [`each`] build nested
//!   structure through closures; a scope that fails commits nothing
//! - **Ordered output**: keys serialize in the order they were written,
//!   backed by an insertion-ordered map
//! - **Conditional and bulk assignment**: [`when`] gates attributes on
//!   booleans or predicates; [`attributes`]/[`merge`]/[`partial`] copy from
//!   serializable sources and other builders
//! - **Key formatting**: an ordered pipeline of named transforms
//!   (`camelize`, `underscore`, `dasherize`, ...) rewrites every key in the
//!   tree at serialization time
//! - **Two output formats**: JSON (compact or pretty) and YAML, both
//!   order-preserving
//!
//! [`node`]: DocumentBuilder::node
//! [`nodes`]: DocumentBuilder::nodes
//! [`each`]: DocumentBuilder::each
//! [`when`]: DocumentBuilder::when
//! [`attributes`]: DocumentBuilder::attributes
//! [`merge`]: DocumentBuilder::merge
//! [`partial`]: DocumentBuilder::partial
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! spindle = "0.1"
//! ```
//!
//! ### Building a document
//!
//! ```rust
//! use spindle::DocumentBuilder;
//!
//! let ingredients = [
//!     ("Noodles", "Main"),
//!     ("Pork", "Protein"),
//!     ("Eggs", "Topping"),
//! ];
//!
//! let mut builder = DocumentBuilder::new();
//! builder.attribute("name", "Tonkotsu Ramen");
//! builder.each("ingredients", ingredients, |item, (name, kind)| {
//!     item.attribute("name", name);
//!     item.attribute("type", kind);
//!     Ok(())
//! })?;
//!
//! let yaml = builder.to_yaml()?;
//! assert!(yaml.starts_with("name: Tonkotsu Ramen\n"));
//! # Ok::<(), spindle::Error>(())
//! ```
//!
//! ### Key formatting
//!
//! ```rust
//! use spindle::{DocumentBuilder, KeyFormat, StepArgs};
//!
//! let mut builder = DocumentBuilder::new();
//! builder.attribute("pizza_name", "Margherita");
//! builder.key_format(KeyFormat::new().step(
//!     "camelize",
//!     StepArgs::named([("uppercase_first_letter", false)]),
//! ))?;
//!
//! assert_eq!(builder.to_json()?, r#"{"pizzaName":"Margherita"}"#);
//! # Ok::<(), spindle::Error>(())
//! ```
//!
//! ### Root unwrap
//!
//! ```rust
//! use spindle::{value, DocumentBuilder};
//!
//! let mut builder = DocumentBuilder::new();
//! builder.root("ingredients");
//! builder.merge(value!({
//!     "name": "Ramen",
//!     "ingredients": ["Noodles", "Pork"]
//! }))?;
//!
//! assert_eq!(builder.to_json()?, r#"["Noodles","Pork"]"#);
//! # Ok::<(), spindle::Error>(())
//! ```
//!
//! ## Scope semantics
//!
//! Every scoped method hands its closure a fresh child builder. Capture into
//! the parent happens only when the closure returns `Ok`; an `Err` propagates
//! and leaves the parent without the failed node. For list scopes
//! ([`nodes`], [`each`]) the empty list itself is stored up front, so zero
//! items still serialize as `[]` rather than an absent key.
//!
//! ## Concurrency
//!
//! All operations are synchronous in-memory mutations behind `&mut self`;
//! nothing is shared, nothing blocks, and no I/O happens until the final
//! encode call.
//!
//! ## Demos
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`simple.rs`** - attributes, nesting, and both output formats
//! - **`nested_nodes.rs`** - list building with `nodes` and `each`
//! - **`key_formatting.rs`** - the key-naming pipeline
//!
//! Run any demo with: `cargo run --example <name>`

pub mod builder;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod transforms;
pub mod value;

pub use builder::{Condition, DocumentBuilder, NodeList};
pub use error::{Error, Result};
pub use format::{KeyFormat, KeyFormatter, Registry, StepArgs, TransformFn};
pub use map::Map;
pub use options::JsonOptions;
pub use ser::{to_value, ValueSerializer};
pub use value::{Number, Value};
