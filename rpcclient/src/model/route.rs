//! Route model, as returned by `getroute`.
use serde::{Deserialize, Serialize};

use rpcclient_common::conf::RouteStylePolicy;
use rpcclient_common::secp256k1::PublicKey;
use rpcclient_common::types::{AmountMsat, NodeId, ShortChannelId};

use crate::errors::Error;
use crate::primitives::*;
use crate::token::{JsonToken, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteHopStyle {
    Legacy = 1,
    Tlv = 2,
}

impl RouteHopStyle {
    fn from_token<T: JsonToken>(tok: &T, policy: RouteStylePolicy) -> Result<Self, Error> {
        let style = if tok.is_kind(TokenKind::String) {
            tok.raw()
        } else {
            None
        };
        match (style.as_deref(), policy) {
            (Some("legacy"), _) => Ok(RouteHopStyle::Legacy),
            (_, RouteStylePolicy::Lenient) | (Some("tlv"), RouteStylePolicy::Strict) => {
                Ok(RouteHopStyle::Tlv)
            }
            (other, RouteStylePolicy::Strict) => {
                log::debug!("unknown route hop style {:?}", other);
                Err(Error::primitive(
                    "style",
                    format!("{other:?} is neither `legacy` nor `tlv`"),
                ))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteHop {
    pub channel_id: ShortChannelId,
    pub direction: i32,
    pub node_id: NodeId,
    pub amount: AmountMsat,
    pub delay: u32,
    /// Not filled by the conversion.
    pub blinding: Option<PublicKey>,
    pub style: RouteHopStyle,
}

fn json_to_route_hop<T: JsonToken>(toks: &T, policy: RouteStylePolicy) -> Result<RouteHop, Error> {
    let idtok = required(toks, "id")?;
    let channeltok = required(toks, "channel")?;
    let directiontok = required(toks, "direction")?;
    let amounttok = required(toks, "amount_msat")?;
    let delaytok = required(toks, "delay")?;
    let styletok = required(toks, "style")?;

    Ok(RouteHop {
        node_id: json_to_node_id(idtok, "id")?,
        channel_id: json_to_short_channel_id(channeltok, "channel")?,
        direction: json_to_int(directiontok, "direction")?,
        amount: json_to_msat(amounttok, "amount_msat")?,
        delay: json_to_number(delaytok, "delay")?,
        blinding: None,
        style: RouteHopStyle::from_token(styletok, policy)?,
    })
}

/// Convert the `route` array of a `getroute` call.
pub fn json_to_route<T: JsonToken>(toks: &T) -> Result<Vec<RouteHop>, Error> {
    json_to_route_with_policy(RouteStylePolicy::Lenient, toks)
}

pub fn json_to_route_with_policy<T: JsonToken>(
    policy: RouteStylePolicy,
    toks: &T,
) -> Result<Vec<RouteHop>, Error> {
    expect_kind(toks, "route", TokenKind::Array)?;

    let mut hops = Vec::with_capacity(toks.size());
    for (i, rtok) in toks.elements().enumerate() {
        let hop = json_to_route_hop(rtok, policy).inspect_err(|err| {
            log::debug!("hop {i} of the route can not be decoded: {err}");
        })?;
        hops.push(hop);
    }
    Ok(hops)
}

/// Parse a JSON route array and convert it.
pub fn route_from_str(s: &str) -> Result<Vec<RouteHop>, Error> {
    let doc: serde_json::Value = serde_json::from_str(s)?;
    json_to_route(&doc)
}
