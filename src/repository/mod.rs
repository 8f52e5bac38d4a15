use std::collections::BTreeMap;

use crate::db::{DbConnection, DbPool};
use crate::domain::account::Account;
use crate::domain::saved_school::SavedSchool;
use crate::domain::university::University;

pub mod account;
pub mod errors;
pub mod saved_school;
pub mod university;

pub use errors::{RepositoryError, RepositoryResult};

/// Diesel-backed repository for every table in the catalog database.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read access to the university catalog.
///
/// `list_universities` returns a fresh snapshot of the whole catalog on every
/// call, in a stable order.
pub trait UniversityReader {
    fn list_universities(&self) -> RepositoryResult<Vec<University>>;
    fn get_university(&self, name: &str) -> RepositoryResult<University>;
    fn list_emphases(&self) -> RepositoryResult<Vec<String>>;
}

pub trait UniversityWriter {
    fn create_university(&self, university: &University) -> RepositoryResult<usize>;
    fn update_university(&self, university: &University) -> RepositoryResult<usize>;
    fn delete_university(&self, name: &str) -> RepositoryResult<usize>;
    fn add_emphasis(&self, name: &str, emphasis: &str) -> RepositoryResult<usize>;
    fn remove_emphasis(&self, name: &str, emphasis: &str) -> RepositoryResult<usize>;
}

pub trait AccountReader {
    fn get_account(&self, username: &str) -> RepositoryResult<Account>;
    fn list_accounts(&self) -> RepositoryResult<Vec<Account>>;
}

pub trait AccountWriter {
    fn create_account(&self, account: &Account) -> RepositoryResult<usize>;
    fn update_account(&self, account: &Account) -> RepositoryResult<usize>;
    fn set_account_active(&self, username: &str, active: bool) -> RepositoryResult<usize>;
    fn delete_account(&self, username: &str) -> RepositoryResult<usize>;
}

pub trait SavedSchoolReader {
    fn list_saved_schools(&self, username: &str) -> RepositoryResult<Vec<SavedSchool>>;
    fn saved_school_map(&self) -> RepositoryResult<BTreeMap<String, Vec<String>>>;
}

pub trait SavedSchoolWriter {
    /// Returns `false` when the school was already saved for this user.
    fn save_school(&self, username: &str, school_name: &str) -> RepositoryResult<bool>;
    fn remove_saved_school(&self, username: &str, school_name: &str) -> RepositoryResult<usize>;
}

impl<T: UniversityReader + ?Sized> UniversityReader for &T {
    fn list_universities(&self) -> RepositoryResult<Vec<University>> {
        (**self).list_universities()
    }

    fn get_university(&self, name: &str) -> RepositoryResult<University> {
        (**self).get_university(name)
    }

    fn list_emphases(&self) -> RepositoryResult<Vec<String>> {
        (**self).list_emphases()
    }
}
