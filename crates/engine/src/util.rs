//! Internal helpers for input validation.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every entry point (recording, budgets, transfers, imports)
//! enforces the same invariants.

use crate::{EngineError, MoneyCents, ResultEngine};

/// Amounts must be strictly positive; direction is carried by the kind.
pub(crate) fn validate_amount(amount: MoneyCents) -> ResultEngine<()> {
    if !amount.is_positive() {
        return Err(EngineError::InvalidAmount(
            "amount must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Returns the trimmed category, rejecting empty names.
pub(crate) fn validate_category(category: &str) -> ResultEngine<String> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidCategory(
            "category cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Returns the trimmed value, rejecting empty usernames/passwords.
pub(crate) fn normalize_credential(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidCredentials(format!(
            "{label} cannot be empty"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_must_be_positive() {
        assert!(validate_amount(MoneyCents::new(1)).is_ok());
        assert!(validate_amount(MoneyCents::ZERO).is_err());
        assert!(validate_amount(MoneyCents::new(-500)).is_err());
    }

    #[test]
    fn category_is_trimmed() {
        assert_eq!(validate_category("  food ").unwrap(), "food");
        assert!(validate_category("").is_err());
    }
}
