//! RPC listener: one task per connection, requests answered in arrival order.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::Framed;

use crate::error::AppError;
use crate::handlers::{bind_failed, FoobarHandler};
use crate::response::{Envelope, Verb};
use crate::rpc::protocol::{codec, decode, encode, RpcCall, RpcRequest, RpcResponse, UNKNOWN_REQUEST_ID};

/// Pause after a failed accept, e.g. while the process is out of file descriptors.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Source of inbound RPC connections.
#[async_trait]
pub trait Acceptor: Send {
    async fn accept(&mut self) -> io::Result<(TcpStream, SocketAddr)>;
}

#[async_trait]
impl Acceptor for TcpListener {
    async fn accept(&mut self) -> io::Result<(TcpStream, SocketAddr)> {
        TcpListener::accept(self).await
    }
}

/// Accept connections forever. A failed accept is logged and retried after a short pause.
pub async fn serve<A: Acceptor>(mut listener: A, handler: FoobarHandler) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!(error = %e, "rpc accept failed");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        tracing::debug!(%peer, "rpc connection accepted");
        let handler = handler.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, handler).await {
                tracing::warn!(%peer, error = %e, "rpc connection ended with error");
            }
        });
    }
}

async fn handle_connection(stream: TcpStream, handler: FoobarHandler) -> Result<(), AppError> {
    let mut framed = Framed::new(stream, codec());
    while let Some(frame) = framed.next().await {
        let frame = frame?;
        let response = match decode::<RpcRequest>(&frame) {
            Ok(request) => RpcResponse {
                id: request.id,
                envelope: dispatch(&handler, request.call).await,
            },
            Err(e) => {
                tracing::debug!(error = %e, "undecodable rpc frame");
                RpcResponse {
                    id: UNKNOWN_REQUEST_ID,
                    envelope: Envelope::new(
                        StatusCode::BAD_REQUEST.as_u16(),
                        "rpc request could not be decoded",
                        e.to_string(),
                    ),
                }
            }
        };
        framed.send(encode(&response)?).await?;
    }
    Ok(())
}

pub async fn dispatch(handler: &FoobarHandler, call: RpcCall) -> Envelope {
    match call {
        RpcCall::Fetch => handler.fetch().await,
        RpcCall::GetById { id } => handler.get_by_id(id).await,
        RpcCall::Store { foobar } => handler.store(foobar).await,
        RpcCall::Update { foobar } => match foobar.id {
            Some(id) => handler.update(id, foobar).await,
            None => bind_failed(Verb::Patch, "id is required"),
        },
        RpcCall::Delete { id } => handler.delete(id).await,
    }
}
