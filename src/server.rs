//! Bootstrap: connect, migrate, wire state, then serve HTTP and RPC side by side.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::AppError;
use crate::handlers::FoobarHandler;
use crate::migration::apply_migrations;
use crate::routes::app;
use crate::rpc;
use crate::state::AppState;
use crate::store;

/// Run until both listeners stop. Connection and migration failures are returned;
/// a listener failure is logged and the other transport keeps serving.
pub async fn run(config: Config) -> Result<(), AppError> {
    let pool = store::connect(&config.database).await?;
    apply_migrations(&pool, config.database.driver).await?;
    let state = AppState::new(pool);

    let http_addr = SocketAddr::from(([0, 0, 0, 0], config.server.http_port));
    let rpc_addr = SocketAddr::from(([0, 0, 0, 0], config.server.rpc_port));
    let rpc_handler = state.foobars.clone();
    tokio::join!(serve_http(http_addr, state), serve_rpc(rpc_addr, rpc_handler));
    Ok(())
}

async fn serve_http(addr: SocketAddr, state: AppState) {
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "http listener setup failed");
            return;
        }
    };
    tracing::info!(%addr, "http listening");
    if let Err(e) = axum::serve(listener, app(state)).await {
        tracing::error!(error = %e, "http server stopped");
    }
}

async fn serve_rpc(addr: SocketAddr, handler: FoobarHandler) {
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "rpc listener setup failed");
            return;
        }
    };
    tracing::info!(%addr, "rpc listening");
    rpc::serve(listener, handler).await;
}
