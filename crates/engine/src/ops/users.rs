use crate::{Account, EngineError, ResultEngine, Session, util::normalize_credential};

use super::Engine;

impl Engine {
    /// Creates an account with an empty wallet.
    pub fn register(&self, username: &str, password: &str) -> ResultEngine<()> {
        let username = normalize_credential(username, "username")?;
        let password = normalize_credential(password, "password")?;
        if self.directory.find(&username)?.is_some() {
            return Err(EngineError::ExistingUser(username));
        }
        self.directory.insert(&Account::new(username.as_str(), password))?;
        tracing::info!(user = %username, "user registered");
        Ok(())
    }

    /// Checks the credentials and opens a session on the stored wallet.
    pub fn login(&self, username: &str, password: &str) -> ResultEngine<Session> {
        let account = self
            .directory
            .find(username)?
            .ok_or_else(|| EngineError::UserNotFound(username.to_string()))?;
        if account.password != password {
            return Err(EngineError::InvalidCredentials("invalid password".to_string()));
        }
        tracing::info!(user = username, "logged in");
        Ok(Session::new(account))
    }

    /// Persists the session wallet.
    pub fn save(&self, session: &Session) -> ResultEngine<()> {
        tracing::debug!(user = session.username(), "saving session wallet");
        self.directory.persist(session.account())
    }

    /// Persists the session wallet and ends the session.
    pub fn logout(&self, session: Session) -> ResultEngine<()> {
        self.save(&session)?;
        tracing::info!(user = session.username(), "logged out");
        Ok(())
    }

    /// Persists every known account. The active session's working copy
    /// replaces the stored wallet of its user. Returns the number of accounts
    /// written.
    pub fn save_all(&self, active: Option<&Session>) -> ResultEngine<usize> {
        let mut saved = 0;
        for username in self.directory.usernames()? {
            match active {
                Some(session) if session.username() == username => self.save(session)?,
                _ => {
                    let Some(account) = self.directory.find(&username)? else {
                        continue;
                    };
                    self.directory.persist(&account)?;
                }
            }
            saved += 1;
        }
        tracing::debug!(saved, "saved all accounts");
        Ok(saved)
    }
}
