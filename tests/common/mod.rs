//! Helpers for integration tests.

#![allow(dead_code)]

use tempfile::TempDir;

use choose_my_college::db::{DbPool, establish_connection_pool};
use choose_my_college::domain::account::{Account, AccountKind};
use choose_my_college::domain::university::University;
use choose_my_college::repository::{AccountWriter, DieselRepository, UniversityWriter};

/// Temporary database used in integration tests. The file is removed with
/// the directory when the value is dropped.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir.");
        let path = dir.path().join("cmc.db");
        let url = path.to_str().expect("Temp path is not UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        TestDb { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

pub fn university(
    name: &str,
    state: &str,
    location: &str,
    control: &str,
    num_students: u32,
) -> University {
    let mut university = University::new(name).expect("valid name");
    university.set_state(Some(state)).expect("valid state");
    university.set_location(Some(location)).expect("valid location");
    university.set_control(Some(control)).expect("valid control");
    university.set_num_students(Some(num_students));
    university
}

/// Target of the similarity scenarios.
pub fn augsburg() -> University {
    let mut university = university("AUGSBURG", "MINNESOTA", "URBAN", "PRIVATE", 10000);
    university.set_sat_verbal(Some(500.0)).expect("valid sat");
    university.set_sat_math(Some(500.0)).expect("valid sat");
    university.set_percent_admitted(Some(80.0)).expect("valid rate");
    university.set_scale_academics(Some(3)).expect("valid scale");
    university.add_emphasis("BUSINESS");
    university
}

/// Same location, control and state as [`augsburg`] with a close size.
pub fn st_olaf() -> University {
    let mut university = university("ST OLAF", "MINNESOTA", "URBAN", "PRIVATE", 11000);
    university.set_sat_verbal(Some(600.0)).expect("valid sat");
    university.set_sat_math(Some(600.0)).expect("valid sat");
    university.set_percent_admitted(Some(50.0)).expect("valid rate");
    university.set_scale_academics(Some(5)).expect("valid scale");
    university
}

/// Shares nothing with [`augsburg`].
pub fn yale() -> University {
    let mut university = university("YALE", "CONNECTICUT", "SMALL-CITY", "PRIVATE-NONPROFIT", 5000);
    university.set_sat_verbal(Some(750.0)).expect("valid sat");
    university.set_sat_math(Some(750.0)).expect("valid sat");
    university.set_percent_admitted(Some(10.0)).expect("valid rate");
    university.set_scale_academics(Some(5)).expect("valid scale");
    university
}

pub fn juser() -> Account {
    Account::new("juser", "user", "John", "User", AccountKind::User).expect("valid account")
}

pub fn nadmin() -> Account {
    Account::new("nadmin", "admin", "Noreen", "Admin", AccountKind::Admin).expect("valid account")
}

/// Database holding the three scenario universities and both accounts.
pub fn seeded() -> TestDb {
    let db = TestDb::new();
    let repo = db.repo();
    for university in [augsburg(), st_olaf(), yale()] {
        repo.create_university(&university).expect("insert university");
    }
    repo.create_account(&juser()).expect("insert account");
    repo.create_account(&nadmin()).expect("insert account");
    db
}
