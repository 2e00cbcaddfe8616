use crate::{
    Directory, MemoryDirectory, Notification, ResultEngine, Transaction, Wallet, notifications,
};

mod ledger;
mod transfer;
mod users;

pub use transfer::TRANSFER_CATEGORY;

/// The ledger engine.
///
/// Stateless between calls apart from the [`Directory`] it resolves users
/// through: every ledger operation receives the [`Session`](crate::Session)
/// it works on.
#[derive(Debug)]
pub struct Engine {
    directory: Box<dyn Directory>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn directory(&self) -> &dyn Directory {
        self.directory.as_ref()
    }
}

/// Appends `tx` and runs the notification policy against the new state.
/// Nothing is appended when the wallet totals would overflow.
fn append(wallet: &mut Wallet, tx: Transaction) -> ResultEngine<Vec<Notification>> {
    wallet.ensure_room(&tx)?;
    wallet.push(tx.clone());
    Ok(notifications::after_record(wallet, &tx))
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    directory: Option<Box<dyn Directory>>,
}

impl EngineBuilder {
    /// Pass the directory used to resolve and persist users. Defaults to a
    /// [`MemoryDirectory`].
    pub fn directory(mut self, directory: impl Directory + 'static) -> EngineBuilder {
        self.directory = Some(Box::new(directory));
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            directory: self
                .directory
                .unwrap_or_else(|| Box::new(MemoryDirectory::new())),
        }
    }
}
