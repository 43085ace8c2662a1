use serde::{Deserialize, Serialize};
use std::fmt;

/// The three categories every [`Value`](crate::Value) falls into.
///
/// Classification is exhaustive and mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Leaf,
    Sequence,
    Dictionary,
}

impl Kind {
    /// Article-prefixed noun used in diagnostics ("a leaf", "an ...").
    pub fn describe(self) -> &'static str {
        match self {
            Kind::Leaf => "a leaf",
            Kind::Sequence => "a sequence",
            Kind::Dictionary => "a dictionary",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Leaf => write!(f, "leaf"),
            Kind::Sequence => write!(f, "sequence"),
            Kind::Dictionary => write!(f, "dictionary"),
        }
    }
}

/// Category of a reported mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// Test is a leaf, state is a sequence or dictionary.
    NotALeaf,
    /// Test is a sequence, state is not.
    NotASequence,
    /// Test is a dictionary, state is not.
    NotADictionary,
    /// Test has a key the state lacks.
    MissingFromState,
    /// State has a key the test lacks.
    MissingFromTest,
}

impl MismatchKind {
    /// The shape mismatch raised when state does not match a test of `kind`.
    pub fn for_expected(kind: Kind) -> Self {
        match kind {
            Kind::Leaf => MismatchKind::NotALeaf,
            Kind::Sequence => MismatchKind::NotASequence,
            Kind::Dictionary => MismatchKind::NotADictionary,
        }
    }

    pub fn is_shape(self) -> bool {
        matches!(
            self,
            MismatchKind::NotALeaf | MismatchKind::NotASequence | MismatchKind::NotADictionary
        )
    }
}
