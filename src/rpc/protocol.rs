//! Wire format for the binary RPC binding.
//!
//! Each message is one length-delimited frame (4-byte big-endian length prefix)
//! whose body is MessagePack with named fields. Requests carry a client-chosen id
//! that the server echoes back; id 0 is reserved for replies to frames that could
//! not be decoded.

use bytes::Bytes;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio_util::codec::LengthDelimitedCodec;

use crate::error::AppError;
use crate::model::FoobarPayload;
use crate::response::Envelope;

pub const MAX_FRAME_BYTES: usize = 1024 * 1024;

/// Id used when the request id is unknown.
pub const UNKNOWN_REQUEST_ID: u64 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RpcCall {
    Fetch,
    GetById { id: i64 },
    Store { foobar: FoobarPayload },
    /// Target id is taken from `foobar.id`.
    Update { foobar: FoobarPayload },
    Delete { id: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub id: u64,
    pub call: RpcCall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub id: u64,
    pub envelope: Envelope,
}

pub fn codec() -> LengthDelimitedCodec {
    LengthDelimitedCodec::builder()
        .max_frame_length(MAX_FRAME_BYTES)
        .new_codec()
}

pub fn encode<T: Serialize>(msg: &T) -> Result<Bytes, AppError> {
    rmp_serde::to_vec_named(msg)
        .map(Bytes::from)
        .map_err(|e| AppError::Rpc(format!("encode: {}", e)))
}

pub fn decode<T: DeserializeOwned>(frame: &[u8]) -> Result<T, AppError> {
    rmp_serde::from_slice(frame).map_err(|e| AppError::Rpc(format!("decode: {}", e)))
}
