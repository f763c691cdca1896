//! Foobar service: CRUD over one resource, served over HTTP and a binary RPC transport.
//!
//! Layering is handler → usecase → repository. Both transports share one
//! [`FoobarHandler`] and answer with the same [`Envelope`].

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod migration;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod rpc;
pub mod server;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Config, DatabaseConfig, DbDriver, ServerConfig};
pub use error::{AppError, ConfigError, FieldError};
pub use handlers::FoobarHandler;
pub use migration::apply_migrations;
pub use model::{Foobar, FoobarPayload};
pub use repository::{FoobarRepository, SqlFoobarRepository};
pub use response::{generate_message, Envelope, Verb};
pub use routes::app;
pub use rpc::RpcClient;
pub use service::{FoobarService, FoobarUsecase, RequestValidator};
pub use state::AppState;
