//! JSON file storage for the ledger.
//!
//! Layout under the data directory:
//!
//! - `users.json`: `{"<username>": "<password>"}`
//! - `wallets/<username>.wallet.json`: one wallet document per user

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use engine::{Account, Directory, ResultEngine};

pub use error::{Result, StorageError};
pub use files::{export_wallet, import_wallet};

mod error;
mod files;

const USERS_FILE: &str = "users.json";
const WALLETS_DIR: &str = "wallets";
const WALLET_SUFFIX: &str = ".wallet.json";

/// A [`Directory`] backed by JSON files.
#[derive(Debug, Clone)]
pub struct JsonDirectory {
    root: PathBuf,
}

impl JsonDirectory {
    /// Opens (and creates, if needed) the data directory at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let wallets = root.join(WALLETS_DIR);
        fs::create_dir_all(&wallets).map_err(|source| StorageError::Io {
            path: wallets.clone(),
            source,
        })?;
        tracing::debug!(root = %root.display(), "json directory opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn users_path(&self) -> PathBuf {
        self.root.join(USERS_FILE)
    }

    fn wallet_path(&self, username: &str) -> Result<PathBuf> {
        if username.is_empty()
            || username == "."
            || username == ".."
            || username.contains(['/', '\\'])
        {
            return Err(StorageError::InvalidUsername(username.to_string()));
        }
        Ok(self
            .root
            .join(WALLETS_DIR)
            .join(format!("{username}{WALLET_SUFFIX}")))
    }

    fn load_users(&self) -> Result<BTreeMap<String, String>> {
        let path = self.users_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StorageError::Json { path, source })
    }

    fn save_users(&self, users: &BTreeMap<String, String>) -> Result<()> {
        let path = self.users_path();
        let json = serde_json::to_string_pretty(users).map_err(|source| StorageError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| StorageError::Io { path, source })
    }
}

impl Directory for JsonDirectory {
    fn find(&self, username: &str) -> ResultEngine<Option<Account>> {
        let users = self.load_users()?;
        let Some(password) = users.get(username) else {
            return Ok(None);
        };
        let wallet = files::load_wallet_or_default(&self.wallet_path(username)?)?;
        Ok(Some(Account {
            username: username.to_string(),
            password: password.clone(),
            wallet,
        }))
    }

    fn insert(&self, account: &Account) -> ResultEngine<()> {
        let wallet_path = self.wallet_path(&account.username)?;
        let mut users = self.load_users()?;
        users.insert(account.username.clone(), account.password.clone());
        self.save_users(&users)?;
        export_wallet(&wallet_path, &account.wallet)?;
        tracing::debug!(user = %account.username, "account stored");
        Ok(())
    }

    fn persist(&self, account: &Account) -> ResultEngine<()> {
        export_wallet(&self.wallet_path(&account.username)?, &account.wallet)?;
        Ok(())
    }

    fn usernames(&self) -> ResultEngine<Vec<String>> {
        Ok(self.load_users()?.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use engine::{Engine, EngineError, MoneyCents};

    use super::*;

    fn scratch_dir() -> PathBuf {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../target/test_dirs")
            .join(uuid::Uuid::new_v4().to_string());
        fs::create_dir_all(&root).unwrap();
        root
    }

    #[test]
    fn insert_creates_users_and_wallet_files() {
        let root = scratch_dir();
        let directory = JsonDirectory::open(&root).unwrap();
        directory.insert(&Account::new("test", "pass")).unwrap();

        assert!(root.join("users.json").exists());
        assert!(root.join("wallets/test.wallet.json").exists());
        let users: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(root.join("users.json")).unwrap()).unwrap();
        assert_eq!(users.get("test").map(String::as_str), Some("pass"));
    }

    #[test]
    fn find_loads_wallet_and_misses_unknown_users() {
        let directory = JsonDirectory::open(scratch_dir()).unwrap();
        let engine = Engine::builder().directory(directory.clone()).build();
        engine.register("test", "pass").unwrap();
        let mut session = engine.login("test", "pass").unwrap();
        engine
            .set_budget(&mut session, "food", MoneyCents::from_major(4_000))
            .unwrap();
        engine.logout(session).unwrap();

        let found = directory.find("test").unwrap().unwrap();
        assert_eq!(found.username, "test");
        assert_eq!(found.wallet.budget("food"), MoneyCents::from_major(4_000));
        assert!(directory.find("nonexistent").unwrap().is_none());
    }

    #[test]
    fn usernames_lists_every_registered_user() {
        let directory = JsonDirectory::open(scratch_dir()).unwrap();
        directory.insert(&Account::new("u1", "p1")).unwrap();
        directory.insert(&Account::new("u2", "p2")).unwrap();
        assert_eq!(directory.usernames().unwrap(), vec!["u1", "u2"]);
    }

    #[test]
    fn transfer_persists_recipient_file() {
        let root = scratch_dir();
        let engine = Engine::builder()
            .directory(JsonDirectory::open(&root).unwrap())
            .build();
        engine.register("alice", "a").unwrap();
        engine.register("bob", "b").unwrap();
        let mut alice = engine.login("alice", "a").unwrap();

        engine
            .transfer(&mut alice, "bob", MoneyCents::from_major(100))
            .unwrap();

        let bob = import_wallet(&root.join("wallets/bob.wallet.json")).unwrap();
        assert_eq!(bob.total_income(), MoneyCents::from_major(100));
        // The sender is only written when the session is saved.
        let stored_alice = import_wallet(&root.join("wallets/alice.wallet.json")).unwrap();
        assert!(stored_alice.transactions().is_empty());
    }

    #[test]
    fn export_then_import_restores_the_wallet() {
        let root = scratch_dir();
        let engine = Engine::builder().build();
        engine.register("alice", "a").unwrap();
        let mut session = engine.login("alice", "a").unwrap();
        engine
            .income(&mut session, "salary", MoneyCents::new(123_45))
            .unwrap();
        engine
            .set_budget(&mut session, "food", MoneyCents::from_major(50))
            .unwrap();

        let path = root.join("exports/alice.json");
        export_wallet(&path, session.wallet()).unwrap();
        let restored = import_wallet(&path).unwrap();
        assert_eq!(&restored, session.wallet());

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["transactions"][0]["type"], "INCOME");
        assert_eq!(doc["budgets"]["food"], 50.0);
    }

    #[test]
    fn path_like_usernames_are_rejected() {
        let directory = JsonDirectory::open(scratch_dir()).unwrap();
        let err = directory.insert(&Account::new("../evil", "x")).unwrap_err();
        assert!(matches!(err, EngineError::Storage(_)));
    }
}
