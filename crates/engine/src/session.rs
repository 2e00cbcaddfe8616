//! The logged-in user's context.

use crate::{Account, Wallet};

/// Context handed to every ledger operation in place of a global "current
/// user". Holds the working copy of the user's wallet; it reaches storage
/// only through [`Engine::logout`](crate::Engine::logout) and
/// [`Engine::save_all`](crate::Engine::save_all).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    account: Account,
}

impl Session {
    pub(crate) fn new(account: Account) -> Self {
        Self { account }
    }

    pub fn username(&self) -> &str {
        &self.account.username
    }

    pub fn wallet(&self) -> &Wallet {
        &self.account.wallet
    }

    pub(crate) fn wallet_mut(&mut self) -> &mut Wallet {
        &mut self.account.wallet
    }

    pub(crate) fn account(&self) -> &Account {
        &self.account
    }
}
