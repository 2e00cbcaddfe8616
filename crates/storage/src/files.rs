//! Wallet files: reading and writing the `{transactions, budgets}` document,
//! both for the per-user store and for export/import.

use std::{fs, path::Path};

use engine::Wallet;
use serde_json::Value;

use crate::error::{Result, StorageError};

/// Writes `wallet` to `path` as pretty-printed JSON, creating parent
/// directories as needed.
pub fn export_wallet(path: &Path, wallet: &Wallet) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StorageError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(wallet).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wallet written");
    Ok(())
}

/// Reads a wallet document from `path`.
///
/// `null` or missing `transactions`/`budgets` read as empty. Every record is
/// checked against the wallet invariants.
pub fn import_wallet(path: &Path) -> Result<Wallet> {
    let raw = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut value: Value = serde_json::from_str(&raw).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if let Value::Object(map) = &mut value {
        map.retain(|_, field| !field.is_null());
    }
    let wallet: Wallet = serde_json::from_value(value).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    wallet
        .validate()
        .map_err(|err| StorageError::InvalidWallet {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    Ok(wallet)
}

/// Like [`import_wallet`], but a missing file is an empty wallet.
pub(crate) fn load_wallet_or_default(path: &Path) -> Result<Wallet> {
    if !path.exists() {
        return Ok(Wallet::new());
    }
    import_wallet(path)
}
