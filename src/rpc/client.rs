//! Minimal RPC client. One request in flight at a time per connection.

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio_util::codec::{Framed, LengthDelimitedCodec};

use crate::error::AppError;
use crate::model::FoobarPayload;
use crate::response::Envelope;
use crate::rpc::protocol::{codec, decode, encode, RpcCall, RpcRequest, RpcResponse};

pub struct RpcClient {
    framed: Framed<TcpStream, LengthDelimitedCodec>,
    last_id: u64,
}

impl RpcClient {
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self, AppError> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self {
            framed: Framed::new(stream, codec()),
            last_id: 0,
        })
    }

    pub async fn call(&mut self, call: RpcCall) -> Result<Envelope, AppError> {
        self.last_id += 1;
        let id = self.last_id;
        self.framed.send(encode(&RpcRequest { id, call })?).await?;
        let frame = self
            .framed
            .next()
            .await
            .ok_or_else(|| AppError::Rpc("connection closed".into()))??;
        let response: RpcResponse = decode(&frame)?;
        if response.id != id {
            return Err(AppError::Rpc(format!(
                "response id {} does not match request id {}",
                response.id, id
            )));
        }
        Ok(response.envelope)
    }

    pub async fn fetch(&mut self) -> Result<Envelope, AppError> {
        self.call(RpcCall::Fetch).await
    }

    pub async fn get_by_id(&mut self, id: i64) -> Result<Envelope, AppError> {
        self.call(RpcCall::GetById { id }).await
    }

    pub async fn store(&mut self, foobar: FoobarPayload) -> Result<Envelope, AppError> {
        self.call(RpcCall::Store { foobar }).await
    }

    pub async fn update(&mut self, foobar: FoobarPayload) -> Result<Envelope, AppError> {
        self.call(RpcCall::Update { foobar }).await
    }

    pub async fn delete(&mut self, id: i64) -> Result<Envelope, AppError> {
        self.call(RpcCall::Delete { id }).await
    }
}
