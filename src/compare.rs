//! Structural comparison of a test tree against a state tree.
//!
//! The test's shape decides what is checked:
//!
//! - a leaf test accepts any leaf state, whatever its type or value;
//! - a sequence test declares its first element as the prototype every other
//!   element, in the test and in the state, must match;
//! - a dictionary test requires the exact same key set in the state, with
//!   each value matching recursively.
//!
//! Only the first mismatch is reported, in depth-first test order.

use crate::enums::{Kind, MismatchKind};
use crate::error::Mismatch;
use crate::render::render;
use crate::types::{Comparison, Dictionary, Value};
use std::fmt;
use tracing::{debug, trace};

/// Compares `state` against the shape of `test`.
///
/// ```rust
/// use serde_json::json;
/// use shapecheck::{Value, compare};
///
/// let test = Value::from(json!({"city": "SF", "tags": ["a", "b"]}));
/// let state = Value::from(json!({"city": "LA", "tags": ["x"]}));
/// assert!(compare(&test, &state).passes);
/// ```
pub fn compare(test: &Value, state: &Value) -> Comparison {
    check(test, state).into()
}

/// Like [`compare`], but returns the structured [`Mismatch`] on failure.
pub fn check(test: &Value, state: &Value) -> Result<(), Mismatch> {
    let mut walk = Walk { path: Vec::new() };
    let result = walk.compare(test, state);
    if let Err(ref mismatch) = result {
        debug!(path = %mismatch.path, kind = ?mismatch.kind, "shape mismatch");
    }
    result
}

// ─── Paths ──────────────────────────────────────────────────────────────────

enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

struct PathDisplay<'p, 'a>(&'p [Segment<'a>]);

impl fmt::Display for PathDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self.0 {
            match segment {
                Segment::Key(key) if is_plain_key(key) => write!(f, ".{}", key)?,
                Segment::Key(key) => write!(f, "[{:?}]", key)?,
                Segment::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

// ─── Walk ───────────────────────────────────────────────────────────────────

struct Walk<'a> {
    path: Vec<Segment<'a>>,
}

impl<'a> Walk<'a> {
    fn path(&self) -> PathDisplay<'_, 'a> {
        PathDisplay(&self.path)
    }

    fn mismatch(&self, kind: MismatchKind, message: String) -> Mismatch {
        Mismatch {
            kind,
            path: self.path().to_string(),
            message,
        }
    }

    fn shape_mismatch(&self, expected: Kind, test: &Value, state: &Value) -> Mismatch {
        self.mismatch(
            MismatchKind::for_expected(expected),
            format!(
                "test ({}) is {} but state ({}) is not",
                render(test),
                expected.describe(),
                render(state)
            ),
        )
    }

    /// Dispatches on the test's kind only; the state's kind is checked by
    /// each strategy.
    fn compare(&mut self, test: &'a Value, state: &'a Value) -> Result<(), Mismatch> {
        trace!(path = %self.path(), kind = %test.kind(), "compare");
        match test {
            Value::Dictionary(test_map) => self.compare_dictionary(test, test_map, state),
            Value::Sequence(test_items) => self.compare_sequence(test, test_items, state),
            Value::Leaf(_) => self.compare_leaf(test, state),
        }
    }

    fn compare_leaf(&mut self, test: &'a Value, state: &'a Value) -> Result<(), Mismatch> {
        if state.is_leaf() {
            Ok(())
        } else {
            Err(self.shape_mismatch(Kind::Leaf, test, state))
        }
    }

    fn compare_sequence(
        &mut self,
        test: &'a Value,
        test_items: &'a [Value],
        state: &'a Value,
    ) -> Result<(), Mismatch> {
        let Value::Sequence(state_items) = state else {
            return Err(self.shape_mismatch(Kind::Sequence, test, state));
        };

        // No sample on either side means no constraint.
        let Some(prototype) = test_items.first() else {
            return Ok(());
        };
        if state_items.is_empty() {
            return Ok(());
        }

        // The test must agree with itself before the state is judged.
        self.match_prototype(prototype, test_items, 1)?;
        self.match_prototype(prototype, state_items, 0)
    }

    /// Checks `items[start..]` against `prototype`, recording each element's
    /// own index in the path.
    fn match_prototype(
        &mut self,
        prototype: &'a Value,
        items: &'a [Value],
        start: usize,
    ) -> Result<(), Mismatch> {
        for (index, item) in items.iter().enumerate().skip(start) {
            self.path.push(Segment::Index(index));
            self.compare(prototype, item)?;
            self.path.pop();
        }
        Ok(())
    }

    /// Eliminates the test's keys one at a time, in insertion order, then
    /// requires that nothing is left over in the state.
    fn compare_dictionary(
        &mut self,
        test: &'a Value,
        test_map: &'a Dictionary,
        state: &'a Value,
    ) -> Result<(), Mismatch> {
        let Value::Dictionary(state_map) = state else {
            return Err(self.shape_mismatch(Kind::Dictionary, test, state));
        };

        for (key, test_value) in test_map {
            let Some(state_value) = state_map.get(key) else {
                return Err(self.mismatch(
                    MismatchKind::MissingFromState,
                    format!("test has key ({:?}) that's missing from state", key),
                ));
            };
            self.path.push(Segment::Key(key.as_str()));
            self.compare(test_value, state_value)?;
            self.path.pop();
        }

        // Every test key is in the state, so equal sizes mean equal key sets.
        if state_map.len() > test_map.len()
            && let Some(extra) = state_map.keys().find(|k| !test_map.contains_key(*k))
        {
            return Err(self.mismatch(
                MismatchKind::MissingFromTest,
                format!("state has key ({:?}) that's missing from test", extra),
            ));
        }

        Ok(())
    }
}
