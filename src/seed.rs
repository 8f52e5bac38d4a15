//! JSON catalog import.
//!
//! A seed file holds `{ "universities": [...], "accounts": [...] }`.
//! University entries use the storage encoding, so `-1` marks unknown
//! values and omitted fields default to unknown. `webpage_url` and
//! `image_url` are optional strings.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::DomainError;
use crate::domain::account::{Account, AccountKind};
use crate::domain::university::University;
use crate::models::university::NewUniversity;
use crate::repository::{
    AccountReader, AccountWriter, RepositoryError, RepositoryResult, UniversityReader,
    UniversityWriter,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed seed file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid seed record: {0}")]
    Domain(#[from] DomainError),
}

#[derive(Debug, Default, Deserialize)]
struct RawSeed {
    #[serde(default)]
    universities: Vec<SeedUniversity>,
    #[serde(default)]
    accounts: Vec<SeedAccount>,
}

#[derive(Debug, Deserialize)]
struct SeedUniversity {
    #[serde(flatten)]
    record: NewUniversity,
    #[serde(default)]
    emphases: Vec<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct SeedAccount {
    username: String,
    password: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    admin: bool,
    #[serde(default = "default_active")]
    active: bool,
}

/// Validated contents of a seed file.
#[derive(Debug, Default)]
pub struct Seed {
    pub universities: Vec<University>,
    pub accounts: Vec<Account>,
}

/// What [`apply_seed`] inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedStats {
    pub universities: usize,
    pub accounts: usize,
}

pub fn load_seed(path: impl AsRef<Path>) -> Result<Seed, SeedError> {
    let content = fs::read_to_string(path)?;
    parse_seed(&content)
}

pub fn parse_seed(content: &str) -> Result<Seed, SeedError> {
    let raw: RawSeed = serde_json::from_str(content)?;

    let universities = raw
        .universities
        .into_iter()
        .map(|entry| entry.record.into_domain(entry.emphases))
        .collect::<Result<Vec<_>, _>>()?;

    let accounts = raw
        .accounts
        .into_iter()
        .map(|entry| {
            let kind = if entry.admin {
                AccountKind::Admin
            } else {
                AccountKind::User
            };
            let mut account = Account::new(
                &entry.username,
                &entry.password,
                &entry.first_name,
                &entry.last_name,
                kind,
            )?;
            account.active = entry.active;
            Ok(account)
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(Seed {
        universities,
        accounts,
    })
}

/// Inserts every seed record that is not already stored. Existing records
/// are left untouched.
pub fn apply_seed<R>(repo: &R, seed: &Seed) -> RepositoryResult<SeedStats>
where
    R: UniversityReader + UniversityWriter + AccountReader + AccountWriter,
{
    let mut stats = SeedStats::default();

    for university in &seed.universities {
        match repo.get_university(university.name()) {
            Ok(_) => continue,
            Err(RepositoryError::NotFound) => {}
            Err(e) => return Err(e),
        }
        stats.universities += repo.create_university(university)?;
    }

    for account in &seed.accounts {
        match repo.get_account(account.username()) {
            Ok(_) => continue,
            Err(RepositoryError::NotFound) => {}
            Err(e) => return Err(e),
        }
        stats.accounts += repo.create_account(account)?;
    }

    log::info!(
        "Seed imported {} universities and {} accounts",
        stats.universities,
        stats.accounts
    );

    Ok(stats)
}
