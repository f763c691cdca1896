//! Foobar façade and payload validation.

mod usecase;
mod validation;
pub use usecase::{FoobarService, FoobarUsecase};
pub use validation::{FieldRule, RequestValidator, FOOBAR_RULES};
