//! Application services layered over the repository traits.

use thiserror::Error;

use crate::domain::DomainError;
use crate::repository::RepositoryError;

pub mod account;
pub mod saved_school;
pub mod search;
pub mod university;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("{0} not found")]
    NotFound(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Turns a zero affected-row count into [`ServiceError::NotFound`].
fn require_affected(affected: usize, what: &str) -> ServiceResult<()> {
    if affected == 0 {
        return Err(ServiceError::NotFound(what.to_string()));
    }
    Ok(())
}
