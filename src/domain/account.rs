use std::fmt;

use serde::Deserialize;

use crate::domain::{DomainError, DomainResult};

/// Distinguishes regular users from administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    User,
    Admin,
}

impl AccountKind {
    /// Single-character code stored in the `accounts.kind` column.
    pub fn code(self) -> &'static str {
        match self {
            AccountKind::User => "u",
            AccountKind::Admin => "a",
        }
    }

    pub fn from_code(code: &str) -> DomainResult<Self> {
        match code {
            "u" => Ok(AccountKind::User),
            "a" => Ok(AccountKind::Admin),
            other => Err(DomainError::InvalidAccountKind(other.to_string())),
        }
    }
}

/// A login for either a regular user or an administrator.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub kind: AccountKind,
    pub active: bool,
}

impl Account {
    /// Builds a new, active account. Usernames are the storage key and may
    /// not be blank or contain whitespace.
    pub fn new(
        username: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
        kind: AccountKind,
    ) -> DomainResult<Self> {
        if username.is_empty() || username.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidUsername(username.to_string()));
        }

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            kind,
            active: true,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_admin(&self) -> bool {
        self.kind == AccountKind::Admin
    }

    pub fn authenticate(&self, password: &str) -> bool {
        self.password == password
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Username: {}, Name: {} {}",
            self.username, self.first_name, self.last_name
        )?;
        if self.is_admin() {
            write!(f, " (Admin)")?;
        }
        if !self.active {
            write!(f, " [inactive]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accounts_start_active() {
        let account = Account::new("juser", "user", "John", "User", AccountKind::User)
            .expect("valid account");

        assert!(account.active);
        assert!(!account.is_admin());
        assert!(account.authenticate("user"));
        assert!(!account.authenticate("User"));
    }

    #[test]
    fn usernames_cannot_contain_whitespace() {
        assert!(Account::new("j user", "pw", "J", "U", AccountKind::User).is_err());
        assert!(Account::new("", "pw", "J", "U", AccountKind::User).is_err());
    }

    #[test]
    fn kind_codes_round_trip() {
        assert_eq!(AccountKind::from_code("a"), Ok(AccountKind::Admin));
        assert_eq!(AccountKind::from_code(AccountKind::User.code()), Ok(AccountKind::User));
        assert!(AccountKind::from_code("x").is_err());
    }

    #[test]
    fn display_marks_administrators() {
        let admin = Account::new("nadmin", "admin", "Noreen", "Admin", AccountKind::Admin)
            .expect("valid account");

        assert_eq!(admin.to_string(), "Username: nadmin, Name: Noreen Admin (Admin)");
    }
}
