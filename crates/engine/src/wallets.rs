//! The module contains `Wallet` struct and its implementation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    EngineError, MoneyCents, ResultEngine, Transaction, TransactionKind,
    util::validate_category,
};

/// A wallet.
///
/// A wallet holds one user's transaction history and the spending ceiling of
/// each budgeted category. It has no behavior beyond storage and lookup: the
/// [`Engine`](crate::Engine) is the only thing that appends to it.
///
/// The serialized form is the wallet file shape:
/// `{"transactions": [...], "budgets": {"food": 4000.0}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// Insertion ordered, append only.
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    budgets: BTreeMap<String, MoneyCents>,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &BTreeMap<String, MoneyCents> {
        &self.budgets
    }

    /// The budget of `category`, or zero when none is set.
    pub fn budget(&self, category: &str) -> MoneyCents {
        self.budget_limit(category).unwrap_or(MoneyCents::ZERO)
    }

    /// The budget of `category`, `None` when the category is unbudgeted.
    pub fn budget_limit(&self, category: &str) -> Option<MoneyCents> {
        self.budgets.get(category).copied()
    }

    pub fn has_budget(&self, category: &str) -> bool {
        self.budgets.contains_key(category)
    }

    /// Every category that appears in a transaction or carries a budget.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.transactions
            .iter()
            .map(Transaction::category)
            .chain(self.budgets.keys().map(String::as_str))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty()
    }

    /// Checks a wallet that did not come from the engine (e.g. read from a
    /// file): positive amounts, non-empty categories, non-negative budgets,
    /// and income/expense totals that fit in [`MoneyCents`].
    pub fn validate(&self) -> ResultEngine<()> {
        for tx in &self.transactions {
            tx.validate()?;
        }
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            if self.checked_total(kind).is_none() {
                return Err(total_overflow(kind));
            }
        }
        for (category, limit) in &self.budgets {
            validate_category(category)?;
            if limit.is_negative() {
                return Err(EngineError::InvalidAmount(format!(
                    "budget for '{category}' cannot be negative"
                )));
            }
        }
        Ok(())
    }

    /// Fails when appending `tx` would overflow the total of its kind.
    ///
    /// Every per-category sum, budget remainder and balance is bounded by
    /// these totals, so keeping them in range keeps all statistics in range.
    pub(crate) fn ensure_room(&self, tx: &Transaction) -> ResultEngine<()> {
        self.checked_total(tx.kind())
            .and_then(|total| total.checked_add(tx.amount()))
            .map(|_| ())
            .ok_or_else(|| total_overflow(tx.kind()))
    }

    fn checked_total(&self, kind: TransactionKind) -> Option<MoneyCents> {
        self.transactions
            .iter()
            .filter(|tx| tx.kind() == kind)
            .try_fold(MoneyCents::ZERO, |total, tx| total.checked_add(tx.amount()))
    }

    pub(crate) fn push(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    pub(crate) fn set_budget(&mut self, category: String, limit: MoneyCents) {
        self.budgets.insert(category, limit);
    }

    /// Replaces both collections wholesale.
    pub(crate) fn replace(&mut self, other: Wallet) {
        *self = other;
    }
}

fn total_overflow(kind: TransactionKind) -> EngineError {
    EngineError::InvalidAmount(format!(
        "{} total of the wallet would overflow",
        kind.as_str()
    ))
}
