//! Advisory events emitted after ledger mutations and statistics queries.
//!
//! Notifications never block an operation and never roll anything back: they
//! are returned to the caller, which decides how to show them.

use std::fmt;

use crate::{MoneyCents, Transaction, Wallet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Warning,
    Alert,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("Warning"),
            Self::Alert => f.write_str("Alert"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// Remaining budget dropped below 80% of the limit.
    BudgetWarning { category: String },
    /// Expenses went past the limit.
    BudgetExceeded { category: String },
    ZeroBalance,
    ExpensesExceedIncome,
    /// A requested category appears in neither transactions nor budgets.
    UnknownCategory { category: String },
}

impl Notification {
    pub fn level(&self) -> Level {
        match self {
            Self::BudgetWarning { .. } | Self::ZeroBalance | Self::UnknownCategory { .. } => {
                Level::Warning
            }
            Self::BudgetExceeded { .. } | Self::ExpensesExceedIncome => Level::Alert,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = self.level();
        match self {
            Self::BudgetWarning { category } => {
                write!(f, "{level}: 80% of budget for '{category}' used!")
            }
            Self::BudgetExceeded { category } => {
                write!(f, "{level}: Budget exceeded for '{category}'!")
            }
            Self::ZeroBalance => write!(f, "{level}: Balance is zero!"),
            Self::ExpensesExceedIncome => write!(f, "{level}: Expenses exceed income!"),
            Self::UnknownCategory { category } => write!(
                f,
                "{level}: Category '{category}' not found in transactions or budgets."
            ),
        }
    }
}

/// Evaluates the notification policy for `tx`, which must already be the
/// last transaction appended to `wallet`.
///
/// 1. expense in a category with a positive budget: warn when the remaining
///    budget is below 80% of the limit, alert when it is negative;
/// 2. warn when income minus expenses is exactly zero;
/// 3. alert when expenses exceed income.
pub(crate) fn after_record(wallet: &Wallet, tx: &Transaction) -> Vec<Notification> {
    let mut out = Vec::new();

    if tx.is_expense() {
        let budget = wallet.budget(tx.category());
        if budget.is_positive() {
            let remaining = wallet.budget_remaining(tx.category());
            // remaining < 0.8 * budget, widened so large budgets cannot overflow.
            if i128::from(remaining.cents()) * 10 < i128::from(budget.cents()) * 8 {
                out.push(Notification::BudgetWarning {
                    category: tx.category().to_string(),
                });
            }
            if remaining.is_negative() {
                out.push(Notification::BudgetExceeded {
                    category: tx.category().to_string(),
                });
            }
        }
    }

    out.extend(balance_alerts(wallet));
    out
}

/// Rules 2 and 3 of the policy.
fn balance_alerts(wallet: &Wallet) -> Vec<Notification> {
    let balance = wallet.balance();
    let mut out = Vec::new();
    if balance == MoneyCents::ZERO {
        out.push(Notification::ZeroBalance);
    }
    if balance.is_negative() {
        out.push(Notification::ExpensesExceedIncome);
    }
    out
}
