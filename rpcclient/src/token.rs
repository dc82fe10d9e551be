//! Navigation over an already tokenized JSON document.
use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Object,
    Array,
    String,
    /// Numbers, booleans and `null`.
    Primitive,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Object => "object",
            TokenKind::Array => "array",
            TokenKind::String => "string",
            TokenKind::Primitive => "primitive",
        };
        write!(f, "{name}")
    }
}

/// A node of a parsed JSON tree.
///
/// The converters only walk the tree through this interface, so any
/// tokenizer can feed them as long as it can answer these questions.
pub trait JsonToken {
    fn kind(&self) -> TokenKind;

    /// Child of an object by name, `None` if absent or if this is not an object.
    fn member(&self, name: &str) -> Option<&Self>;

    /// Children of an array in document order, empty for non arrays.
    fn elements(&self) -> Box<dyn Iterator<Item = &Self> + '_>;

    /// Number of direct children.
    fn size(&self) -> usize;

    /// Text of a string or primitive token, without quotes.
    fn raw(&self) -> Option<Cow<'_, str>>;

    fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }
}

impl JsonToken for Value {
    fn kind(&self) -> TokenKind {
        match self {
            Value::Object(_) => TokenKind::Object,
            Value::Array(_) => TokenKind::Array,
            Value::String(_) => TokenKind::String,
            Value::Null | Value::Bool(_) | Value::Number(_) => TokenKind::Primitive,
        }
    }

    fn member(&self, name: &str) -> Option<&Self> {
        self.as_object().and_then(|obj| obj.get(name))
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
        match self {
            Value::Array(arr) => Box::new(arr.iter()),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn size(&self) -> usize {
        match self {
            Value::Object(obj) => obj.len(),
            Value::Array(arr) => arr.len(),
            _ => 0,
        }
    }

    fn raw(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Null => Some(Cow::Borrowed("null")),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Object(_) | Value::Array(_) => None,
        }
    }
}
