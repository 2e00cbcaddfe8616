use crate::{
    EngineError, MoneyCents, Notification, ResultEngine, Session, Transaction, TransactionKind,
    Wallet,
    util::{validate_amount, validate_category},
};

use super::{Engine, append};

impl Engine {
    /// Records an income and returns the notifications it triggered.
    pub fn income(
        &self,
        session: &mut Session,
        category: &str,
        amount: MoneyCents,
    ) -> ResultEngine<Vec<Notification>> {
        self.record(session, TransactionKind::Income, category, amount)
    }

    /// Records an expense and returns the notifications it triggered.
    pub fn expense(
        &self,
        session: &mut Session,
        category: &str,
        amount: MoneyCents,
    ) -> ResultEngine<Vec<Notification>> {
        self.record(session, TransactionKind::Expense, category, amount)
    }

    /// Validates, appends a transaction stamped with the current time and
    /// evaluates the notification policy. Nothing is appended on error.
    pub fn record(
        &self,
        session: &mut Session,
        kind: TransactionKind,
        category: &str,
        amount: MoneyCents,
    ) -> ResultEngine<Vec<Notification>> {
        let tx = Transaction::now(kind, category, amount)?;
        tracing::debug!(
            user = session.username(),
            kind = kind.as_str(),
            category = tx.category(),
            %amount,
            "recording transaction"
        );
        append(session.wallet_mut(), tx)
    }

    /// Sets or overwrites the budget of `category`; last write wins.
    pub fn set_budget(
        &self,
        session: &mut Session,
        category: &str,
        amount: MoneyCents,
    ) -> ResultEngine<()> {
        if amount.is_negative() {
            return Err(EngineError::InvalidAmount(
                "budget cannot be negative".to_string(),
            ));
        }
        validate_amount(amount)?;
        let category = validate_category(category)?;
        tracing::debug!(user = session.username(), %category, %amount, "setting budget");
        session.wallet_mut().set_budget(category, amount);
        Ok(())
    }

    /// Replaces the session wallet wholesale with `wallet`, after checking
    /// every record against the wallet invariants.
    pub fn import(&self, session: &mut Session, wallet: Wallet) -> ResultEngine<()> {
        if let Err(err) = wallet.validate() {
            tracing::warn!(user = session.username(), "rejected wallet import: {err}");
            return Err(err);
        }
        tracing::info!(
            user = session.username(),
            transactions = wallet.transactions().len(),
            budgets = wallet.budgets().len(),
            "wallet imported"
        );
        session.wallet_mut().replace(wallet);
        Ok(())
    }
}
