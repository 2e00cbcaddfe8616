//! Transaction primitives.
//!
//! A `Transaction` is an immutable record of money coming into or going out
//! of a wallet. The direction lives in [`TransactionKind`]; the amount is
//! always strictly positive.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{
    MoneyCents, ResultEngine,
    util::{validate_amount, validate_category},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// Equality is structural over kind, category, amount and timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: String,
    amount: MoneyCents,
    #[serde(rename = "date")]
    occurred_at: NaiveDateTime,
}

impl Transaction {
    /// Builds a transaction, rejecting non-positive amounts and empty
    /// categories.
    pub fn new(
        kind: TransactionKind,
        category: &str,
        amount: MoneyCents,
        occurred_at: NaiveDateTime,
    ) -> ResultEngine<Self> {
        validate_amount(amount)?;
        let category = validate_category(category)?;
        Ok(Self {
            kind,
            category,
            amount,
            occurred_at,
        })
    }

    /// Same as [`Transaction::new`], stamped with the current local time.
    pub fn now(kind: TransactionKind, category: &str, amount: MoneyCents) -> ResultEngine<Self> {
        Self::new(kind, category, amount, Local::now().naive_local())
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> MoneyCents {
        self.amount
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Re-checks the invariants on a record that bypassed [`Transaction::new`]
    /// (e.g. one deserialized from a file).
    pub(crate) fn validate(&self) -> ResultEngine<()> {
        validate_amount(self.amount)?;
        validate_category(&self.category)?;
        Ok(())
    }
}
