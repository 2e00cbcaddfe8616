pub use directory::{Account, Directory, MemoryDirectory};
pub use error::EngineError;
pub use money::MoneyCents;
pub use notifications::{Level, Notification};
pub use ops::{Engine, EngineBuilder, TRANSFER_CATEGORY};
pub use session::Session;
pub use statistics::{ALL_CATEGORIES, Breakdown, CategoryRow, Summary};
pub use transactions::{Transaction, TransactionKind};
pub use wallets::Wallet;

mod directory;
mod error;
mod money;
mod notifications;
mod ops;
mod session;
mod statistics;
mod transactions;
mod util;
mod wallets;

pub type ResultEngine<T> = Result<T, EngineError>;
