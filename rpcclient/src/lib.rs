//! Typed decoding of Core Lightning JSON RPC responses.
//!
//! Converters walk an already tokenized document through [`token::JsonToken`]
//! and either build the whole model or fail with an [`errors::Error`].
pub mod errors;
pub mod json_rpc2;
pub mod model;
pub mod primitives;
pub mod token;

use rpcclient_common::conf::RpcClientConf;

pub use errors::Error;
pub use model::*;
pub use token::{JsonToken, TokenKind};

/// Decoder bound to a client configuration.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    conf: RpcClientConf,
}

impl Decoder {
    pub fn new(conf: RpcClientConf) -> Self {
        Self { conf }
    }

    pub fn conf(&self) -> &RpcClientConf {
        &self.conf
    }

    pub fn listpeers<T: JsonToken>(&self, tok: &T) -> Result<ListPeersResult, Error> {
        json_to_listpeers_result(tok)
    }

    pub fn createonion<T: JsonToken>(&self, tok: &T) -> Result<CreateOnionResponse, Error> {
        json_to_createonion_response(tok)
    }

    pub fn route<T: JsonToken>(&self, tok: &T) -> Result<Vec<RouteHop>, Error> {
        json_to_route_with_policy(self.conf.route_style, tok)
    }
}
