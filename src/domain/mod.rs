//! Domain types shared by the repository, services and console layers.

use thiserror::Error;

pub mod account;
pub mod saved_school;
pub mod sentinel;
pub mod university;

/// Validation failures raised while building domain values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("'{0}' is not a valid university name; names must be non-empty and in all caps")]
    InvalidName(String),
    #[error("{field} '{value}' must be in all caps")]
    NotUpperCase { field: &'static str, value: String },
    #[error("{field} {value} is not within [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },
    #[error("{field} '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("'{0}' is not a valid username")]
    InvalidUsername(String),
    #[error("unknown account kind '{0}'")]
    InvalidAccountKind(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
