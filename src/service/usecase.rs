//! Business logic façade over the persistence gateway.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppError;
use crate::model::{Foobar, FoobarPayload};
use crate::repository::FoobarRepository;

/// Capability set the handlers depend on. Caching or auditing variants slot in here.
#[async_trait]
pub trait FoobarUsecase: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Foobar>, AppError>;
    async fn get_by_id(&self, id: i64) -> Result<Foobar, AppError>;
    async fn store(&self, payload: &FoobarPayload) -> Result<Foobar, AppError>;
    async fn update(&self, foobar: &Foobar) -> Result<Foobar, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// Pass-through implementation: every call goes straight to the repository.
#[derive(Clone)]
pub struct FoobarService {
    repo: Arc<dyn FoobarRepository>,
}

impl FoobarService {
    pub fn new(repo: Arc<dyn FoobarRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl FoobarUsecase for FoobarService {
    async fn fetch(&self) -> Result<Vec<Foobar>, AppError> {
        self.repo.fetch().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Foobar, AppError> {
        self.repo.get_by_id(id).await
    }

    async fn store(&self, payload: &FoobarPayload) -> Result<Foobar, AppError> {
        self.repo.create(payload).await
    }

    async fn update(&self, foobar: &Foobar) -> Result<Foobar, AppError> {
        self.repo.update(foobar).await
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
