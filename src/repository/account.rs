use diesel::prelude::*;

use crate::domain::account::Account;
use crate::models::account::{Account as DbAccount, NewAccount};
use crate::repository::{
    AccountReader, AccountWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl AccountReader for DieselRepository {
    fn get_account(&self, username: &str) -> RepositoryResult<Account> {
        use crate::schema::accounts;

        let mut conn = self.conn()?;

        let result = accounts::table
            .filter(accounts::username.eq(username))
            .select(DbAccount::as_select())
            .first(&mut conn)?;

        Account::try_from(result).map_err(|err| RepositoryError::ValidationError(err.to_string()))
    }

    fn list_accounts(&self) -> RepositoryResult<Vec<Account>> {
        use crate::schema::accounts;

        let mut conn = self.conn()?;

        let result = accounts::table
            .order(accounts::id.asc())
            .select(DbAccount::as_select())
            .load(&mut conn)?;

        result
            .into_iter()
            .map(Account::try_from)
            .collect::<Result<Vec<Account>, _>>()
            .map_err(|err| RepositoryError::ValidationError(err.to_string()))
    }
}

impl AccountWriter for DieselRepository {
    fn create_account(&self, account: &Account) -> RepositoryResult<usize> {
        use crate::schema::accounts;

        let mut conn = self.conn()?;

        let inserted = diesel::insert_into(accounts::table)
            .values(NewAccount::from(account))
            .execute(&mut conn)?;

        Ok(inserted)
    }

    fn update_account(&self, account: &Account) -> RepositoryResult<usize> {
        use crate::schema::accounts;

        let mut conn = self.conn()?;

        let affected =
            diesel::update(accounts::table.filter(accounts::username.eq(account.username())))
                .set(NewAccount::from(account))
                .execute(&mut conn)?;

        Ok(affected)
    }

    fn set_account_active(&self, username: &str, active: bool) -> RepositoryResult<usize> {
        use crate::schema::accounts;

        let mut conn = self.conn()?;

        let affected = diesel::update(accounts::table.filter(accounts::username.eq(username)))
            .set(accounts::active.eq(active))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_account(&self, username: &str) -> RepositoryResult<usize> {
        use crate::schema::{accounts, saved_schools};

        let mut conn = self.conn()?;

        let deleted = conn.transaction(|conn| {
            diesel::delete(saved_schools::table.filter(saved_schools::username.eq(username)))
                .execute(conn)?;

            diesel::delete(accounts::table.filter(accounts::username.eq(username))).execute(conn)
        })?;

        Ok(deleted)
    }
}
