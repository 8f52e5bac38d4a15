use crate::domain::account::Account;
use crate::repository::{AccountReader, AccountWriter, RepositoryError};
use crate::services::{ServiceResult, require_affected};

/// Login and administrator account management.
pub struct AccountService<R> {
    repo: R,
}

impl<R> AccountService<R>
where
    R: AccountReader + AccountWriter,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the account only when it exists, is active and the password
    /// matches. Every other outcome is `Ok(None)`.
    pub fn login(&self, username: &str, password: &str) -> ServiceResult<Option<Account>> {
        let account = match self.repo.get_account(username) {
            Ok(account) => account,
            Err(RepositoryError::NotFound) => {
                log::warn!("Login attempt for unknown user {username}");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if !account.active {
            log::warn!("Login attempt for deactivated user {username}");
            return Ok(None);
        }
        if !account.authenticate(password) {
            log::warn!("Wrong password for user {username}");
            return Ok(None);
        }

        log::info!("User {username} logged in");
        Ok(Some(account))
    }

    pub fn account(&self, username: &str) -> ServiceResult<Option<Account>> {
        match self.repo.get_account(username) {
            Ok(account) => Ok(Some(account)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list_accounts(&self) -> ServiceResult<Vec<Account>> {
        Ok(self.repo.list_accounts()?)
    }

    /// Fails with a repository conflict when the username is taken.
    pub fn add_account(&self, account: &Account) -> ServiceResult<()> {
        self.repo.create_account(account)?;
        log::info!("Added account {}", account.username());
        Ok(())
    }

    pub fn edit_account(&self, account: &Account) -> ServiceResult<()> {
        let affected = self.repo.update_account(account)?;
        require_affected(affected, account.username())
    }

    /// Deletes the account together with its saved schools.
    pub fn remove_account(&self, username: &str) -> ServiceResult<()> {
        let affected = self.repo.delete_account(username)?;
        require_affected(affected, username)?;
        log::info!("Removed account {username}");
        Ok(())
    }

    pub fn deactivate_account(&self, username: &str) -> ServiceResult<()> {
        let affected = self.repo.set_account_active(username, false)?;
        require_affected(affected, username)?;
        log::info!("Deactivated account {username}");
        Ok(())
    }

    pub fn reactivate_account(&self, username: &str) -> ServiceResult<()> {
        let affected = self.repo.set_account_active(username, true)?;
        require_affected(affected, username)
    }
}
