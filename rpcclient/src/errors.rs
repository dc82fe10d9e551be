use std::{error, fmt};

use crate::json_rpc2::RpcError;
use crate::token::TokenKind;

/// A decoding error
#[derive(Debug)]
pub enum Error {
    /// A required member is absent
    MissingField(&'static str),
    /// A member is present with the wrong token kind
    WrongKind {
        field: &'static str,
        expected: TokenKind,
        found: TokenKind,
    },
    /// One member of a pair is present without the other
    UnpairedField {
        present: &'static str,
        missing: &'static str,
    },
    /// The payload of a member can not be decoded
    Primitive { field: &'static str, reason: String },
    /// A channel inside a peer `channels` array failed to convert.
    ///
    /// The server guarantees well formed channel objects, so this is a
    /// broken precondition rather than a malformed response.
    Invariant { index: usize, source: Box<Error> },
    /// Json error
    Json(serde_json::Error),
    /// Error response
    Rpc(RpcError),
    /// Response has neither error nor result
    NoErrorOrResult,
}

impl Error {
    pub(crate) fn wrong_kind(field: &'static str, expected: TokenKind, found: TokenKind) -> Self {
        Error::WrongKind {
            field,
            expected,
            found,
        }
    }

    pub(crate) fn primitive(field: &'static str, reason: impl fmt::Display) -> Self {
        Error::Primitive {
            field,
            reason: format!("{reason}"),
        }
    }

    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Error::Invariant { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

impl From<RpcError> for Error {
    fn from(e: RpcError) -> Error {
        Error::Rpc(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MissingField(field) => write!(f, "missing field `{field}`"),
            Error::WrongKind {
                field,
                expected,
                found,
            } => write!(f, "field `{field}` must be {expected}, found {found}"),
            Error::UnpairedField { present, missing } => {
                write!(f, "field `{present}` is present but `{missing}` is not")
            }
            Error::Primitive { field, ref reason } => {
                write!(f, "field `{field}` can not be decoded: {reason}")
            }
            Error::Invariant { index, ref source } => {
                write!(f, "channel at index {index} violates the listpeers contract: {source}")
            }
            Error::Json(ref e) => write!(f, "JSON decode error: {e}"),
            Error::Rpc(ref r) => write!(f, "RPC error response: {r:?}"),
            Error::NoErrorOrResult => write!(f, "Malformed RPC response"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Json(ref e) => Some(e),
            Error::Invariant { ref source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
