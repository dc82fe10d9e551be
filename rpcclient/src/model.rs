mod createonion;
mod listpeers;
mod route;

pub use createonion::{json_to_createonion_response, CreateOnionResponse};
pub use listpeers::{
    json_to_listpeers_result, ChannelDirection, ListPeersChannel, ListPeersPeer, ListPeersResult,
};
pub use route::{json_to_route, json_to_route_with_policy, route_from_str, RouteHop, RouteHopStyle};
