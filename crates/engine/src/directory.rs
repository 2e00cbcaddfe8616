//! User lookup and persistence.
//!
//! The engine never touches storage directly; it goes through a
//! [`Directory`]. [`MemoryDirectory`] keeps everything in a map and is what
//! the engine uses when no other directory is configured.

use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{EngineError, ResultEngine, Wallet};

/// A registered user and the wallet they own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub wallet: Wallet,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            wallet: Wallet::new(),
        }
    }
}

pub trait Directory: std::fmt::Debug {
    /// Looks up an account by exact username.
    fn find(&self, username: &str) -> ResultEngine<Option<Account>>;

    /// Stores the credentials and the wallet of a new account.
    fn insert(&self, account: &Account) -> ResultEngine<()>;

    /// Durably stores the wallet of an existing account.
    fn persist(&self, account: &Account) -> ResultEngine<()>;

    /// Every known username.
    fn usernames(&self) -> ResultEngine<Vec<String>>;
}

#[derive(Debug, Default)]
pub struct MemoryDirectory {
    accounts: RwLock<BTreeMap<String, Account>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ResultEngine<RwLockReadGuard<'_, BTreeMap<String, Account>>> {
        self.accounts
            .read()
            .map_err(|_| EngineError::Storage("memory directory lock poisoned".to_string()))
    }

    fn write(&self) -> ResultEngine<RwLockWriteGuard<'_, BTreeMap<String, Account>>> {
        self.accounts
            .write()
            .map_err(|_| EngineError::Storage("memory directory lock poisoned".to_string()))
    }
}

impl Directory for MemoryDirectory {
    fn find(&self, username: &str) -> ResultEngine<Option<Account>> {
        Ok(self.read()?.get(username).cloned())
    }

    fn insert(&self, account: &Account) -> ResultEngine<()> {
        self.write()?
            .insert(account.username.clone(), account.clone());
        Ok(())
    }

    fn persist(&self, account: &Account) -> ResultEngine<()> {
        let mut accounts = self.write()?;
        let stored = accounts
            .get_mut(&account.username)
            .ok_or_else(|| EngineError::UserNotFound(account.username.clone()))?;
        stored.wallet = account.wallet.clone();
        Ok(())
    }

    fn usernames(&self) -> ResultEngine<Vec<String>> {
        Ok(self.read()?.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_returns_inserted_account() {
        let directory = MemoryDirectory::new();
        directory.insert(&Account::new("alice", "secret")).unwrap();

        let found = directory.find("alice").unwrap().unwrap();
        assert_eq!(found.password, "secret");
        assert!(found.wallet.is_empty());
        assert!(directory.find("bob").unwrap().is_none());
    }

    #[test]
    fn persist_requires_existing_account() {
        let directory = MemoryDirectory::new();
        let err = directory.persist(&Account::new("ghost", "x")).unwrap_err();
        assert_eq!(err, EngineError::UserNotFound("ghost".to_string()));
    }

    #[test]
    fn usernames_are_sorted() {
        let directory = MemoryDirectory::new();
        directory.insert(&Account::new("bob", "1")).unwrap();
        directory.insert(&Account::new("alice", "2")).unwrap();
        assert_eq!(directory.usernames().unwrap(), vec!["alice", "bob"]);
    }
}
