use std::str::FromStr;

use ntest::timeout;
use serde_json::{json, Value};

use rpcclient::json_rpc2::Response;
use rpcclient::{
    json_to_createonion_response, json_to_listpeers_result, json_to_route, CreateOnionResponse,
    Decoder, Error, ListPeersResult, RouteHopStyle,
};
use rpcclient_common::conf::{RouteStylePolicy, RpcClientConf};
use rpcclient_common::types::AmountMsat;

use crate::init;

const ALICE: &str = "02eec7245d6b7d2ccb30380bfbe2a3648cd7a942653f5aa340edcea1f283686619";
const BOB: &str = "0324653eac434488002cc06bbfb7f10fe18991e35f9fe4302dbea6d2353dc0ab1c";
const CAROL: &str = "027f31ebc5462c1fdce1b737ecff52d37d75dea43ce11c74d25aa297165faa2007";
const FUNDING: &str = "b4e8b5a3f1a8c7d6e5f4a3b2c1d0e9f8a7b6c5d4e3f2a1b0c9d8e7f6a5b4c3d2";

fn listpeers() -> Value {
    json!({
        "peers": [
            {
                "id": ALICE,
                "connected": true,
                "netaddr": ["127.0.0.1:19735"],
                "features": "08a0000a0269a2",
                "channels": [
                    {
                        "state": "CHANNELD_NORMAL",
                        "scratch_txid": FUNDING,
                        "owner": "channeld",
                        "short_channel_id": "103x1x0",
                        "direction": 0,
                        "channel_id": "d2c3b4a5f6e7d8c9b0a1f2e3d4c5b6a7f8e9d0c1b2a3f4e5d6c7a8f1a3b5e8b4",
                        "funding_txid": FUNDING,
                        "private": false,
                        "opener": "local",
                        "total_msat": "1000000000msat",
                        "spendable_msat": "967000000msat",
                        "htlcs": []
                    },
                    {
                        "state": "CHANNELD_AWAITING_LOCKIN",
                        "funding_txid": FUNDING,
                        "private": true,
                        "total_msat": "50000000msat",
                        "spendable_msat": "0msat"
                    }
                ]
            },
            {
                "id": BOB,
                "connected": false,
                "channels": []
            }
        ]
    })
}

#[test]
#[timeout(9000)]
fn listpeers_preserves_order() {
    init();
    let result = json_to_listpeers_result(&listpeers()).unwrap();
    log::info!("listpeers decoded: {:?}", result);

    assert_eq!(result.peers.len(), 2);
    let alice = &result.peers[0];
    assert_eq!(alice.id.to_string(), ALICE);
    assert!(alice.connected);
    assert_eq!(alice.netaddr, vec!["127.0.0.1:19735"]);
    assert!(alice.features.is_some());
    assert_eq!(alice.channels.len(), 2);
    assert_eq!(alice.channels[0].state, "CHANNELD_NORMAL");
    assert_eq!(alice.channels[0].scid().unwrap().to_string(), "103x1x0");
    assert_eq!(alice.channels[0].direction(), Some(0));
    assert_eq!(alice.channels[1].state, "CHANNELD_AWAITING_LOCKIN");
    assert!(alice.channels[1].private);
    assert!(alice.channels[1].short_channel.is_none());
    assert_eq!(alice.channels[1].spendable_msat, AmountMsat(0));

    let bob = &result.peers[1];
    assert_eq!(bob.id.to_string(), BOB);
    assert!(!bob.connected);
    assert!(bob.netaddr.is_empty());
    assert!(bob.channels.is_empty());
}

#[test]
#[timeout(9000)]
fn listpeers_missing_total_msat_fails_everything() {
    init();
    let mut doc = listpeers();
    doc["peers"][0]["channels"][1]
        .as_object_mut()
        .unwrap()
        .remove("total_msat");
    let err = json_to_listpeers_result(&doc).unwrap_err();
    log::info!("expected failure: {err}");
    assert!(err.is_invariant_violation());
    assert!(matches!(err, Error::Invariant { index: 1, .. }));
}

#[test]
#[timeout(9000)]
fn listpeers_single_peer_without_channels() {
    init();
    let raw = format!(r#"{{"peers":[{{"id":"{ALICE}","connected":true,"channels":[]}}]}}"#);
    let result = ListPeersResult::from_str(&raw).unwrap();
    assert_eq!(result.peers.len(), 1);
    assert!(result.peers[0].channels.is_empty());
    assert!(result.peers[0].netaddr.is_empty());
}

#[test]
#[timeout(9000)]
fn listpeers_from_rpc_envelope() {
    init();
    let raw = json!({
        "jsonrpc": "2.0",
        "id": "rpcclient/listpeers/1",
        "result": listpeers(),
    })
    .to_string();
    let result = Response::<Value>::decode_with(&raw, |tok| json_to_listpeers_result(tok)).unwrap();
    assert_eq!(result.peers.len(), 2);

    let raw = r#"{"jsonrpc":"2.0","id":2,"error":{"code":-32602,"message":"Unknown peer"}}"#;
    let err = Response::<Value>::decode_with(raw, |tok| json_to_listpeers_result(tok)).unwrap_err();
    assert!(matches!(err, Error::Rpc(ref rpc) if rpc.code == -32602), "{err}");
}

#[test]
#[timeout(9000)]
fn createonion_secret_count_matches_array() {
    init();
    let secrets: Vec<String> = (0..5u8).map(|i| format!("{i:02x}").repeat(32)).collect();
    let doc = json!({"onion": "0002eec7245d", "shared_secrets": &secrets});
    let resp = json_to_createonion_response(&doc).unwrap();
    assert_eq!(resp.onion, vec![0x00, 0x02, 0xee, 0xc7, 0x24, 0x5d]);
    assert_eq!(resp.shared_secrets.len(), 5);
    for (i, secret) in resp.shared_secrets.iter().enumerate() {
        assert_eq!(secret.to_string(), secrets[i]);
    }

    let raw = r#"{"onion":"deadbeef"}"#;
    assert!(matches!(
        CreateOnionResponse::from_str(raw),
        Err(Error::MissingField("shared_secrets"))
    ));
}

#[test]
#[timeout(9000)]
fn getroute_hops() {
    init();
    let route = json!([
        {
            "id": BOB,
            "channel": "103x1x0",
            "direction": 1,
            "amount_msat": "1002000msat",
            "delay": 21,
            "style": "tlv"
        },
        {
            "id": CAROL,
            "channel": "105x3x1",
            "direction": 0,
            "amount_msat": "1000000msat",
            "delay": 9,
            "style": "legacy"
        }
    ]);
    let hops = json_to_route(&route).unwrap();
    assert_eq!(hops.len(), 2);
    assert_eq!(hops[0].node_id.to_string(), BOB);
    assert_eq!(hops[0].style, RouteHopStyle::Tlv);
    assert_eq!(hops[1].node_id.to_string(), CAROL);
    assert_eq!(hops[1].amount, AmountMsat(1_000_000));
    assert_eq!(hops[1].style, RouteHopStyle::Legacy);

    let mut conf = RpcClientConf::default();
    conf.route_style = RouteStylePolicy::Strict;
    let decoder = Decoder::new(conf);
    assert_eq!(decoder.route(&route).unwrap(), hops);

    assert!(json_to_route(&json!({"route": route})).is_err());
}
