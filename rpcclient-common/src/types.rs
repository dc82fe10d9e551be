//! Scalar types shared by the RPC client models.
use std::fmt;
use std::str::FromStr;

use bitcoin::hashes::hex::FromHex;
use bitcoin::secp256k1::PublicKey;
use lightning::util::scid_utils;
use serde::{Deserialize, Serialize};

pub type NodeId = PublicKey;
pub type Txid = bitcoin::Txid;

/// Short channel id in its packed form, displayed as `BLOCKxTXxOUT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortChannelId(pub u64);

impl ShortChannelId {
    pub fn block(&self) -> u32 {
        (self.0 >> 40) as u32
    }

    pub fn tx_index(&self) -> u32 {
        ((self.0 >> 16) & 0xff_ffff) as u32
    }

    pub fn vout(&self) -> u16 {
        (self.0 & 0xffff) as u16
    }
}

impl FromStr for ShortChannelId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split('x')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    anyhow::bail!("invalid short channel id `{s}`: `{part}` is not a number");
                }
                u64::from_str(part)
                    .map_err(|err| anyhow::anyhow!("invalid short channel id `{s}`: {err}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let [block, tx_index, vout] = parts[..] else {
            anyhow::bail!("short channel id `{s}` must have the form BLOCKxTXxOUT");
        };
        let scid = scid_utils::scid_from_parts(block, tx_index, vout)
            .map_err(|err| anyhow::anyhow!("short channel id `{s}` out of range: {err:?}"))?;
        Ok(Self(scid))
    }
}

impl fmt::Display for ShortChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.block(), self.tx_index(), self.vout())
    }
}

/// Amount in millisatoshi.
///
/// Core Lightning transports these as `"1000msat"`; a bare decimal
/// string is accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AmountMsat(pub u64);

impl AmountMsat {
    pub fn msat(&self) -> u64 {
        self.0
    }
}

impl FromStr for AmountMsat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_suffix("msat").unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            anyhow::bail!("invalid msat amount `{s}`");
        }
        let msat = u64::from_str(digits).map_err(|err| anyhow::anyhow!("{err}"))?;
        Ok(Self(msat))
    }
}

impl fmt::Display for AmountMsat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}msat", self.0)
    }
}

/// Per hop shared secret produced while building an onion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Secret(pub [u8; 32]);

impl Secret {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for Secret {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 32] =
            FromHex::from_hex(s).map_err(|err| anyhow::anyhow!("invalid secret `{s}`: {err}"))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
