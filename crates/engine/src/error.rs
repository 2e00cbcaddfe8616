//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] and [`InvalidCategory`] thrown by input validation,
//!   before anything is mutated.
//! - [`RecipientNotFound`] and [`SelfTransfer`] thrown when a transfer target
//!   cannot be used.
//! - [`TransferIncomplete`] thrown when the sender has already been debited
//!   but crediting or persisting the recipient failed.
//! - [`UserNotFound`], [`ExistingUser`] and [`InvalidCredentials`] thrown by
//!   account handling.
//! - [`Storage`] thrown when a [`Directory`] fails.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidCategory`]: EngineError::InvalidCategory
//!  [`RecipientNotFound`]: EngineError::RecipientNotFound
//!  [`SelfTransfer`]: EngineError::SelfTransfer
//!  [`TransferIncomplete`]: EngineError::TransferIncomplete
//!  [`UserNotFound`]: EngineError::UserNotFound
//!  [`ExistingUser`]: EngineError::ExistingUser
//!  [`InvalidCredentials`]: EngineError::InvalidCredentials
//!  [`Storage`]: EngineError::Storage
//!  [`Directory`]: super::directory::Directory
use thiserror::Error;

use crate::MoneyCents;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
    #[error("Recipient not found: {0}")]
    RecipientNotFound(String),
    #[error("Cannot transfer to yourself: {0}")]
    SelfTransfer(String),
    #[error(
        "Transfer of {amount} to {recipient} is incomplete: sender was debited but {reason}"
    )]
    TransferIncomplete {
        recipient: String,
        amount: MoneyCents,
        reason: String,
    },
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("User already exists: {0}")]
    ExistingUser(String),
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("Storage failure: {0}")]
    Storage(String),
}
