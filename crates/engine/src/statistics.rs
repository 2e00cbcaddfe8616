//! Aggregate queries over a [`Wallet`].
//!
//! Nothing here is cached: every figure is recomputed from the transaction
//! sequence on each call.

use std::collections::{BTreeMap, BTreeSet};

use crate::{MoneyCents, Notification, TransactionKind, Wallet};

/// Pass to the `*_by_category` queries to get every category.
pub const ALL_CATEGORIES: &[&str] = &[];

/// Per-category sums of one transaction kind.
///
/// Categories without transactions of that kind are absent, never zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub totals: BTreeMap<String, MoneyCents>,
    /// `UnknownCategory` diagnostics for requested categories found in
    /// neither transactions nor budgets.
    pub notifications: Vec<Notification>,
}

impl Breakdown {
    pub fn get(&self, category: &str) -> Option<MoneyCents> {
        self.totals.get(category).copied()
    }

    pub fn get_or_zero(&self, category: &str) -> MoneyCents {
        self.get(category).unwrap_or(MoneyCents::ZERO)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// One line of the statistics table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: String,
    pub income: MoneyCents,
    pub expense: MoneyCents,
    /// `None` when no budget is set for the category.
    pub budget: Option<MoneyCents>,
    pub remaining: MoneyCents,
}

/// Everything the `stats` command shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub total_income: MoneyCents,
    pub total_expenses: MoneyCents,
    pub rows: Vec<CategoryRow>,
    pub notifications: Vec<Notification>,
}

impl Wallet {
    pub fn total_income(&self) -> MoneyCents {
        self.total_of(TransactionKind::Income)
    }

    pub fn total_expenses(&self) -> MoneyCents {
        self.total_of(TransactionKind::Expense)
    }

    /// Income minus expenses.
    pub fn balance(&self) -> MoneyCents {
        self.total_income() - self.total_expenses()
    }

    pub fn income_by_category<S: AsRef<str>>(&self, categories: &[S]) -> Breakdown {
        self.breakdown(TransactionKind::Income, categories)
    }

    pub fn expenses_by_category<S: AsRef<str>>(&self, categories: &[S]) -> Breakdown {
        self.breakdown(TransactionKind::Expense, categories)
    }

    /// Budget minus spending in `category`. An unbudgeted category has a zero
    /// ceiling, so any spending in it makes this negative.
    pub fn budget_remaining(&self, category: &str) -> MoneyCents {
        let spent: MoneyCents = self
            .transactions()
            .iter()
            .filter(|tx| tx.is_expense() && tx.category() == category)
            .map(|tx| tx.amount())
            .sum();
        self.budget(category) - spent
    }

    pub fn is_budget_exceeded(&self, category: &str) -> bool {
        self.budget_remaining(category).is_negative()
    }

    /// Totals plus one row per category present in the income or expense
    /// breakdown (restricted to `categories` when non-empty).
    pub fn summary<S: AsRef<str>>(&self, categories: &[S]) -> Summary {
        let income = self.income_by_category(categories);
        let expenses = self.expenses_by_category(categories);

        let names: BTreeSet<&String> = income.totals.keys().chain(expenses.totals.keys()).collect();
        let rows = names
            .into_iter()
            .map(|category| CategoryRow {
                category: category.clone(),
                income: income.get_or_zero(category),
                expense: expenses.get_or_zero(category),
                budget: self.budget_limit(category),
                remaining: self.budget_remaining(category),
            })
            .collect();

        // Both breakdowns report the same unknown categories; keep one copy.
        let mut notes = income.notifications;
        for note in expenses.notifications {
            if !notes.contains(&note) {
                notes.push(note);
            }
        }
        if self.balance().is_negative() {
            notes.push(Notification::ExpensesExceedIncome);
        }

        Summary {
            total_income: self.total_income(),
            total_expenses: self.total_expenses(),
            rows,
            notifications: notes,
        }
    }

    fn total_of(&self, kind: TransactionKind) -> MoneyCents {
        self.transactions()
            .iter()
            .filter(|tx| tx.kind() == kind)
            .map(|tx| tx.amount())
            .sum()
    }

    fn breakdown<S: AsRef<str>>(&self, kind: TransactionKind, categories: &[S]) -> Breakdown {
        let mut totals: BTreeMap<String, MoneyCents> = BTreeMap::new();
        for tx in self.transactions().iter().filter(|tx| tx.kind() == kind) {
            *totals.entry(tx.category().to_string()).or_default() += tx.amount();
        }

        if categories.is_empty() {
            return Breakdown {
                totals,
                notifications: Vec::new(),
            };
        }

        let mut notifications = Vec::new();
        for category in categories.iter().map(AsRef::as_ref) {
            if !totals.contains_key(category) && !self.has_budget(category) {
                tracing::debug!(category, "category not found in transactions or budgets");
                let note = Notification::UnknownCategory {
                    category: category.to_string(),
                };
                if !notifications.contains(&note) {
                    notifications.push(note);
                }
            }
        }
        totals.retain(|name, _| categories.iter().any(|c| c.as_ref() == name.as_str()));

        Breakdown {
            totals,
            notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transaction;

    fn wallet() -> Wallet {
        let mut wallet = Wallet::new();
        for (kind, category, amount) in [
            (TransactionKind::Income, "salary", 50_000),
            (TransactionKind::Income, "bonus", 10_000),
            (TransactionKind::Expense, "food", 1_000),
            (TransactionKind::Expense, "transport", 500),
            (TransactionKind::Expense, "food", 300),
        ] {
            wallet.push(Transaction::now(kind, category, MoneyCents::from_major(amount)).unwrap());
        }
        wallet.set_budget("food".to_string(), MoneyCents::from_major(4_000));
        wallet
    }

    #[test]
    fn empty_wallet_totals_are_zero() {
        let wallet = Wallet::new();
        assert_eq!(wallet.total_income(), MoneyCents::ZERO);
        assert_eq!(wallet.total_expenses(), MoneyCents::ZERO);
        assert!(wallet.income_by_category(ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn totals_sum_by_kind() {
        let wallet = wallet();
        assert_eq!(wallet.total_income(), MoneyCents::from_major(60_000));
        assert_eq!(wallet.total_expenses(), MoneyCents::from_major(1_800));
        assert_eq!(wallet.balance(), MoneyCents::from_major(58_200));
    }

    #[test]
    fn full_breakdown_lists_every_category_of_the_kind() {
        let expenses = wallet().expenses_by_category(ALL_CATEGORIES);
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses.get("food"), Some(MoneyCents::from_major(1_300)));
        assert_eq!(expenses.get("transport"), Some(MoneyCents::from_major(500)));
        assert_eq!(expenses.get("salary"), None);
        assert!(expenses.notifications.is_empty());
    }

    #[test]
    fn filtered_breakdown_omits_instead_of_zero_filling() {
        let wallet = wallet();
        let income = wallet.income_by_category(&["salary", "food"]);
        assert_eq!(income.len(), 1);
        assert_eq!(income.get("salary"), Some(MoneyCents::from_major(50_000)));
        assert_eq!(income.get("food"), None);
        // "food" has a budget, so it is not reported as unknown.
        assert!(income.notifications.is_empty());
    }

    #[test]
    fn unknown_category_is_reported_but_not_fatal() {
        let expenses = wallet().expenses_by_category(&["food", "unknown"]);
        assert_eq!(expenses.get("food"), Some(MoneyCents::from_major(1_300)));
        assert_eq!(
            expenses.notifications,
            vec![Notification::UnknownCategory {
                category: "unknown".to_string()
            }]
        );
    }

    #[test]
    fn budget_remaining_uses_zero_for_unbudgeted() {
        let wallet = wallet();
        assert_eq!(wallet.budget_remaining("food"), MoneyCents::from_major(2_700));
        assert_eq!(wallet.budget_remaining("transport"), MoneyCents::from_major(-500));
        assert_eq!(wallet.budget_remaining("nothing"), MoneyCents::ZERO);
        assert!(!wallet.is_budget_exceeded("food"));
        assert!(wallet.is_budget_exceeded("transport"));
        assert!(!wallet.is_budget_exceeded("nothing"));
    }

    #[test]
    fn summary_rows_cover_income_and_expense_categories() {
        let summary = wallet().summary(ALL_CATEGORIES);
        let names: Vec<&str> = summary.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["bonus", "food", "salary", "transport"]);

        let food = &summary.rows[1];
        assert_eq!(food.expense, MoneyCents::from_major(1_300));
        assert_eq!(food.budget, Some(MoneyCents::from_major(4_000)));
        assert_eq!(food.remaining, MoneyCents::from_major(2_700));
        assert_eq!(summary.rows[0].budget, None);
        assert!(summary.notifications.is_empty());
    }

    #[test]
    fn summary_reports_unknown_category_once_and_overspending() {
        let mut wallet = Wallet::new();
        wallet.push(
            Transaction::now(TransactionKind::Expense, "rent", MoneyCents::from_major(10)).unwrap(),
        );
        let summary = wallet.summary(&["ghost"]);
        assert!(summary.rows.is_empty());
        assert_eq!(
            summary.notifications,
            vec![
                Notification::UnknownCategory {
                    category: "ghost".to_string()
                },
                Notification::ExpensesExceedIncome,
            ]
        );
    }
}
