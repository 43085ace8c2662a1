//! Structural shape comparison for tree-shaped data.
//!
//! `shapecheck` compares a *test* value (the reference shape) against a
//! *state* value (the observed data) and reports whether the state has the
//! same structure, along with a diagnostic for the first divergence. Values
//! themselves are never compared: `1` matches `"one"`, and a timestamp
//! matches a number.
//!
//! ```text
//! parse(yaml) / parse_json(json) / Value::from(serde_json::Value) → Value
//! compare(test, state) → Comparison { passes, err }
//! check(test, state)   → Result<(), Mismatch>
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//!
//! let test = json!({
//!     "cities": [{"name": "San Francisco", "nicknames": ["SF"], "id": 0}],
//!     "people": [{"name": "Reid", "hometown": 1}]
//! });
//! let state = json!({
//!     "cities": [
//!         {"name": "Sun Valley", "nicknames": [], "id": 0},
//!         {"name": "Orlando", "nicknames": ["O-town"], "id": 1}
//!     ],
//!     "people": []
//! });
//!
//! let result = shapecheck::compare_json(&test, &state);
//! assert!(result.passes, "{:?}", result.err);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `yaml`  | yes     | YAML input via [`serde-saphyr`](https://docs.rs/serde-saphyr). Enables [`parse::parse`] and [`compare_documents`]. |

pub mod compare;
pub mod enums;
pub mod error;
pub mod parse;
pub mod render;
pub mod types;

pub use enums::*;
pub use error::*;
pub use types::*;

pub use compare::{check, compare};
#[cfg(feature = "yaml")]
pub use parse::parse;
pub use parse::parse_json;

/// Compares two `serde_json` trees.
///
/// JSON has no opaque values, so every leaf is a null, boolean, number or
/// string.
pub fn compare_json(test: &serde_json::Value, state: &serde_json::Value) -> Comparison {
    compare(&Value::from(test.clone()), &Value::from(state.clone()))
}

/// Convenience entry point composing parse → parse → compare.
///
/// Both documents are YAML (or JSON).
///
/// # Errors
///
/// Returns the first [`ParseError`], test document first.
///
/// # Example
///
/// ```rust
/// let test = "city: SF\ntags: [a, b]\n";
/// let state = "city: LA\n";
///
/// let result = shapecheck::compare_documents(test, state).expect("valid documents");
/// assert!(!result.passes);
/// assert!(result.err.unwrap().contains("\"tags\""));
/// ```
#[cfg(feature = "yaml")]
pub fn compare_documents(test: &str, state: &str) -> Result<Comparison, ParseError> {
    let test = parse::parse(test)?;
    let state = parse::parse(state)?;
    Ok(compare(&test, &state))
}
