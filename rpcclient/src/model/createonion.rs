//! `createonion` response model.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rpcclient_common::types::Secret;

use crate::errors::Error;
use crate::primitives::*;
use crate::token::{JsonToken, TokenKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateOnionResponse {
    pub onion: Vec<u8>,
    /// One secret for each hop, in route order.
    pub shared_secrets: Vec<Secret>,
}

impl FromStr for CreateOnionResponse {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let doc: serde_json::Value = serde_json::from_str(s)?;
        json_to_createonion_response(&doc)
    }
}

/// Convert the result of a `createonion` call.
pub fn json_to_createonion_response<T: JsonToken>(toks: &T) -> Result<CreateOnionResponse, Error> {
    let oniontok = required(toks, "onion")?;
    let secretstok = required(toks, "shared_secrets")?;

    expect_kind(oniontok, "onion", TokenKind::String)?;
    expect_kind(secretstok, "shared_secrets", TokenKind::Array)?;

    let onion = json_tok_bin_from_hex(oniontok, "onion")?;
    let mut shared_secrets = Vec::with_capacity(secretstok.size());
    for cursectok in secretstok.elements() {
        expect_kind(cursectok, "shared_secrets", TokenKind::String)?;
        shared_secrets.push(json_to_secret(cursectok, "shared_secrets")?);
    }
    log::trace!(
        "onion of {} bytes with {} shared secrets",
        onion.len(),
        shared_secrets.len()
    );
    Ok(CreateOnionResponse {
        onion,
        shared_secrets,
    })
}
