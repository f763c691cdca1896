//! Shared application state, built once at bootstrap and cloned into every binding.

use std::sync::Arc;

use sqlx::AnyPool;

use crate::handlers::FoobarHandler;
use crate::repository::SqlFoobarRepository;
use crate::service::{FoobarService, FoobarUsecase};

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    pub foobars: FoobarHandler,
}

impl AppState {
    /// Wire the default gateway and pass-through façade over `pool`.
    pub fn new(pool: AnyPool) -> Self {
        let repo = Arc::new(SqlFoobarRepository::new(pool.clone()));
        let usecase: Arc<dyn FoobarUsecase> = Arc::new(FoobarService::new(repo));
        Self::with_usecase(pool, usecase)
    }

    pub fn with_usecase(pool: AnyPool, usecase: Arc<dyn FoobarUsecase>) -> Self {
        Self {
            pool,
            foobars: FoobarHandler::new(usecase),
        }
    }
}
