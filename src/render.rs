//! [`Value`] → text rendering for diagnostics.
//!
//! The output is JSON-like but not JSON: absent values render as `absent` and
//! opaque leaves as `<TypeName repr>`. It is meant for people, not parsers.

use crate::types::{Leaf, Value};

/// Longest rendering, in characters, that [`render`] returns before truncating.
pub const MAX_RENDER_LEN: usize = 120;

/// Render a value for use in a diagnostic, truncated to [`MAX_RENDER_LEN`]
/// characters with a trailing `…`.
///
/// Rendering stops early once the limit is passed, so huge subtrees are not
/// walked in full.
pub fn render(value: &Value) -> String {
    let mut renderer = Renderer {
        out: String::new(),
        limit: Some(MAX_RENDER_LEN),
    };
    renderer.value(value);
    renderer.finish()
}

/// Render without a length limit. Backs `Display for Value`.
pub(crate) fn render_full(value: &Value) -> String {
    let mut renderer = Renderer {
        out: String::new(),
        limit: None,
    };
    renderer.value(value);
    renderer.finish()
}

struct Renderer {
    out: String,
    limit: Option<usize>,
}

impl Renderer {
    fn exhausted(&self) -> bool {
        self.limit.is_some_and(|limit| self.out.chars().count() > limit)
    }

    fn value(&mut self, value: &Value) {
        if self.exhausted() {
            return;
        }
        match value {
            Value::Leaf(leaf) => self.leaf(leaf),
            Value::Sequence(items) => {
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if self.exhausted() {
                        break;
                    }
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.value(item);
                }
                self.out.push(']');
            }
            Value::Dictionary(map) => {
                self.out.push('{');
                for (i, (key, child)) in map.iter().enumerate() {
                    if self.exhausted() {
                        break;
                    }
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.quoted(key);
                    self.out.push_str(": ");
                    self.value(child);
                }
                self.out.push('}');
            }
        }
    }

    fn leaf(&mut self, leaf: &Leaf) {
        match leaf {
            Leaf::Absent => self.out.push_str("absent"),
            Leaf::Null => self.out.push_str("null"),
            Leaf::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Leaf::Number(n) => self.out.push_str(&n.to_string()),
            Leaf::String(s) => self.quoted(s),
            Leaf::Opaque(o) => {
                self.out.push('<');
                self.out.push_str(&o.type_name);
                self.out.push(' ');
                self.out.push_str(&o.repr);
                self.out.push('>');
            }
        }
    }

    fn quoted(&mut self, s: &str) {
        self.out.push_str(&format!("{s:?}"));
    }

    fn finish(self) -> String {
        match self.limit {
            Some(limit) if self.out.chars().count() > limit => {
                let mut truncated: String = self.out.chars().take(limit).collect();
                truncated.push('…');
                truncated
            }
            _ => self.out,
        }
    }
}
