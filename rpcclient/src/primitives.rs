//! Decoders from a single token payload to a scalar.
use std::str::FromStr;

use rpcclient_common::hex;
use rpcclient_common::types::{AmountMsat, NodeId, Secret, ShortChannelId, Txid};

use crate::errors::Error;
use crate::token::{JsonToken, TokenKind};

/// Member `field` of `tok`, failing if absent.
pub fn required<'a, T: JsonToken>(tok: &'a T, field: &'static str) -> Result<&'a T, Error> {
    tok.member(field).ok_or_else(|| {
        log::debug!("missing required field `{field}`");
        Error::MissingField(field)
    })
}

pub fn expect_kind<T: JsonToken>(
    tok: &T,
    field: &'static str,
    kind: TokenKind,
) -> Result<(), Error> {
    if tok.is_kind(kind) {
        return Ok(());
    }
    log::debug!("field `{field}` is a {} instead of a {kind}", tok.kind());
    Err(Error::wrong_kind(field, kind, tok.kind()))
}

/// Member `field` of `tok`, failing if absent or not of `kind`.
pub fn required_kind<'a, T: JsonToken>(
    tok: &'a T,
    field: &'static str,
    kind: TokenKind,
) -> Result<&'a T, Error> {
    let member = required(tok, field)?;
    expect_kind(member, field, kind)?;
    Ok(member)
}

/// Member `field` of `tok` if present, failing only if present with another kind.
pub fn optional_kind<'a, T: JsonToken>(
    tok: &'a T,
    field: &'static str,
    kind: TokenKind,
) -> Result<Option<&'a T>, Error> {
    let Some(member) = tok.member(field) else {
        return Ok(None);
    };
    expect_kind(member, field, kind)?;
    Ok(Some(member))
}

fn raw<T: JsonToken>(tok: &T, field: &'static str) -> Result<String, Error> {
    match tok.raw() {
        Some(raw) => Ok(raw.into_owned()),
        None => Err(Error::primitive(field, format!("a {} has no scalar value", tok.kind()))),
    }
}

fn parse<T: JsonToken, U>(tok: &T, field: &'static str) -> Result<U, Error>
where
    U: FromStr,
    U::Err: std::fmt::Display,
{
    let raw = raw(tok, field)?;
    U::from_str(&raw).map_err(|err| {
        log::debug!("field `{field}` with value `{raw}` is invalid: {err}");
        Error::primitive(field, err)
    })
}

pub fn json_to_bool<T: JsonToken>(tok: &T, field: &'static str) -> Result<bool, Error> {
    match raw(tok, field)?.as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::primitive(field, format!("`{other}` is not a boolean"))),
    }
}

pub fn json_to_int<T: JsonToken>(tok: &T, field: &'static str) -> Result<i32, Error> {
    parse(tok, field)
}

pub fn json_to_number<T: JsonToken>(tok: &T, field: &'static str) -> Result<u32, Error> {
    parse(tok, field)
}

pub fn json_to_msat<T: JsonToken>(tok: &T, field: &'static str) -> Result<AmountMsat, Error> {
    parse(tok, field)
}

pub fn json_to_node_id<T: JsonToken>(tok: &T, field: &'static str) -> Result<NodeId, Error> {
    parse(tok, field)
}

pub fn json_to_short_channel_id<T: JsonToken>(
    tok: &T,
    field: &'static str,
) -> Result<ShortChannelId, Error> {
    parse(tok, field)
}

pub fn json_to_txid<T: JsonToken>(tok: &T, field: &'static str) -> Result<Txid, Error> {
    parse(tok, field)
}

pub fn json_to_secret<T: JsonToken>(tok: &T, field: &'static str) -> Result<Secret, Error> {
    parse(tok, field)
}

pub fn json_tok_bin_from_hex<T: JsonToken>(tok: &T, field: &'static str) -> Result<Vec<u8>, Error> {
    let raw = raw(tok, field)?;
    hex::decode(&raw).map_err(|err| Error::primitive(field, err))
}

pub fn json_strdup<T: JsonToken>(tok: &T, field: &'static str) -> Result<String, Error> {
    raw(tok, field)
}
