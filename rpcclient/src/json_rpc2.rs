//! JSON RPC 2.0 response envelope.
use serde::Deserialize;
use serde_json::Value;

use crate::errors::Error;

/// Envelope of a Core Lightning reply; exactly one of `result` and `error` is set.
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
    #[serde(default)]
    pub id: Value,
}

impl<T> Response<T> {
    pub fn into_result(self) -> Result<T, Error> {
        match (self.result, self.error) {
            (_, Some(err)) => Err(Error::Rpc(err)),
            (Some(result), None) => Ok(result),
            (None, None) => Err(Error::NoErrorOrResult),
        }
    }
}

impl Response<Value> {
    /// Parse a raw reply and hand its `result` to `convert`.
    pub fn decode_with<U, F>(raw: &str, convert: F) -> Result<U, Error>
    where
        F: FnOnce(&Value) -> Result<U, Error>,
    {
        let resp: Response<Value> = serde_json::from_str(raw)?;
        log::trace!("reply to request {}", resp.id);
        let result = resp.into_result()?;
        convert(&result)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<Value>,
}
