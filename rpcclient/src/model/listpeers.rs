//! `listpeers` response model.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rpcclient_common::types::{AmountMsat, NodeId, ShortChannelId, Txid};

use crate::errors::Error;
use crate::primitives::*;
use crate::token::{JsonToken, TokenKind};

/// Position of a channel inside the gossip graph, known only once the
/// funding transaction is confirmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDirection {
    pub scid: ShortChannelId,
    pub direction: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListPeersChannel {
    pub private: bool,
    pub funding_txid: Txid,
    pub state: String,
    pub short_channel: Option<ChannelDirection>,
    pub total_msat: AmountMsat,
    pub spendable_msat: AmountMsat,
}

impl ListPeersChannel {
    pub fn scid(&self) -> Option<ShortChannelId> {
        self.short_channel.map(|chan| chan.scid)
    }

    pub fn direction(&self) -> Option<i32> {
        self.short_channel.map(|chan| chan.direction)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListPeersPeer {
    pub id: NodeId,
    pub connected: bool,
    pub netaddr: Vec<String>,
    pub features: Option<Vec<u8>>,
    pub channels: Vec<ListPeersChannel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPeersResult {
    pub peers: Vec<ListPeersPeer>,
}

impl FromStr for ListPeersResult {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let doc: serde_json::Value = serde_json::from_str(s)?;
        json_to_listpeers_result(&doc)
    }
}

pub(crate) fn json_to_listpeers_channel<T: JsonToken>(tok: &T) -> Result<ListPeersChannel, Error> {
    let privtok = required_kind(tok, "private", TokenKind::Primitive)?;
    let statetok = required_kind(tok, "state", TokenKind::String)?;
    let ftxidtok = required_kind(tok, "funding_txid", TokenKind::String)?;
    let scidtok = optional_kind(tok, "short_channel_id", TokenKind::String)?;
    let dirtok = optional_kind(tok, "direction", TokenKind::Primitive)?;
    let tmsattok = required_kind(tok, "total_msat", TokenKind::String)?;
    let smsattok = required_kind(tok, "spendable_msat", TokenKind::String)?;

    let short_channel = match (scidtok, dirtok) {
        (Some(scidtok), Some(dirtok)) => Some(ChannelDirection {
            scid: json_to_short_channel_id(scidtok, "short_channel_id")?,
            direction: json_to_int(dirtok, "direction")?,
        }),
        (None, None) => None,
        (Some(_), None) => {
            log::debug!("`short_channel_id` without `direction`");
            return Err(Error::UnpairedField {
                present: "short_channel_id",
                missing: "direction",
            });
        }
        (None, Some(_)) => {
            log::debug!("`direction` without `short_channel_id`");
            return Err(Error::UnpairedField {
                present: "direction",
                missing: "short_channel_id",
            });
        }
    };

    Ok(ListPeersChannel {
        private: json_to_bool(privtok, "private")?,
        state: json_strdup(statetok, "state")?,
        funding_txid: json_to_txid(ftxidtok, "funding_txid")?,
        short_channel,
        total_msat: json_to_msat(tmsattok, "total_msat")?,
        spendable_msat: json_to_msat(smsattok, "spendable_msat")?,
    })
}

pub(crate) fn json_to_listpeers_peer<T: JsonToken>(tok: &T) -> Result<ListPeersPeer, Error> {
    // Preliminary sanity checks.
    let idtok = required_kind(tok, "id", TokenKind::String)?;
    let conntok = required_kind(tok, "connected", TokenKind::Primitive)?;
    let netaddrtok = optional_kind(tok, "netaddr", TokenKind::Array)?;
    let featurestok = optional_kind(tok, "features", TokenKind::String)?;
    let channelstok = required_kind(tok, "channels", TokenKind::Array)?;

    let id = json_to_node_id(idtok, "id")?;
    let connected = json_to_bool(conntok, "connected")?;

    let mut netaddr = Vec::with_capacity(netaddrtok.map_or(0, |tok| tok.size()));
    if let Some(netaddrtok) = netaddrtok {
        for addr in netaddrtok.elements() {
            expect_kind(addr, "netaddr", TokenKind::String)?;
            netaddr.push(json_strdup(addr, "netaddr")?);
        }
    }

    let features = featurestok
        .map(|tok| json_tok_bin_from_hex(tok, "features"))
        .transpose()?;

    let mut channels = Vec::with_capacity(channelstok.size());
    for (index, chantok) in channelstok.elements().enumerate() {
        let chan = json_to_listpeers_channel(chantok).map_err(|err| {
            log::error!("peer {id} has a malformed channel at index {index}: {err}");
            Error::Invariant {
                index,
                source: Box::new(err),
            }
        })?;
        channels.push(chan);
    }

    log::trace!(
        "peer {id} decoded with {} channels and {} addresses",
        channels.len(),
        netaddr.len()
    );
    Ok(ListPeersPeer {
        id,
        connected,
        netaddr,
        features,
        channels,
    })
}

/// Convert the result of a `listpeers` call.
///
/// The first peer that fails to convert aborts the whole result.
pub fn json_to_listpeers_result<T: JsonToken>(tok: &T) -> Result<ListPeersResult, Error> {
    let peerstok = required_kind(tok, "peers", TokenKind::Array)?;

    let mut peers = Vec::with_capacity(peerstok.size());
    for peertok in peerstok.elements() {
        peers.push(json_to_listpeers_peer(peertok)?);
    }
    Ok(ListPeersResult { peers })
}
