use diesel::prelude::*;

use crate::domain::DomainResult;
use crate::domain::account::{Account as DomainAccount, AccountKind};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub kind: String,
    pub active: bool,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::accounts)]
pub struct NewAccount<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub kind: &'a str,
    pub active: bool,
}

impl<'a> From<&'a DomainAccount> for NewAccount<'a> {
    fn from(account: &'a DomainAccount) -> Self {
        Self {
            username: account.username(),
            password: &account.password,
            first_name: &account.first_name,
            last_name: &account.last_name,
            kind: account.kind.code(),
            active: account.active,
        }
    }
}

impl TryFrom<Account> for DomainAccount {
    type Error = crate::domain::DomainError;

    fn try_from(row: Account) -> DomainResult<Self> {
        let kind = AccountKind::from_code(&row.kind)?;
        let mut account = DomainAccount::new(
            &row.username,
            &row.password,
            &row.first_name,
            &row.last_name,
            kind,
        )?;
        account.active = row.active;
        Ok(account)
    }
}
