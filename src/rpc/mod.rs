//! Binary RPC binding: the foobar operations over length-delimited MessagePack frames.

pub mod client;
pub mod protocol;
pub mod server;

pub use client::RpcClient;
pub use protocol::{RpcCall, RpcRequest, RpcResponse};
pub use server::{dispatch, serve, Acceptor};
