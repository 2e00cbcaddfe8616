use crate::{
    EngineError, MoneyCents, Notification, ResultEngine, Session, Transaction, TransactionKind,
    util::validate_amount,
};

use super::{Engine, append};

/// Category of both halves of a transfer.
pub const TRANSFER_CATEGORY: &str = "Transfer";

impl Engine {
    /// Moves `amount` from the session user to `recipient`.
    ///
    /// Steps, in this order:
    /// 1. resolve `recipient` through the directory;
    /// 2. record an expense `"Transfer"` on the sender (notification policy
    ///    runs, its result is returned);
    /// 3. record an income `"Transfer"` on the recipient;
    /// 4. persist the recipient. The sender is persisted later, with the
    ///    session.
    ///
    /// The steps are not atomic. If step 4 fails the sender stays debited and
    /// [`EngineError::TransferIncomplete`] is returned.
    pub fn transfer(
        &self,
        session: &mut Session,
        recipient: &str,
        amount: MoneyCents,
    ) -> ResultEngine<Vec<Notification>> {
        validate_amount(amount)?;
        if recipient == session.username() {
            return Err(EngineError::SelfTransfer(recipient.to_string()));
        }

        let mut to = self
            .directory
            .find(recipient)?
            .ok_or_else(|| EngineError::RecipientNotFound(recipient.to_string()))?;

        // Both halves are built and checked up front so nothing can fail
        // between the debit and the credit except the directory.
        let debit = Transaction::now(TransactionKind::Expense, TRANSFER_CATEGORY, amount)?;
        let credit = Transaction::now(TransactionKind::Income, TRANSFER_CATEGORY, amount)?;

        to.wallet.ensure_room(&credit)?;
        let notes = append(session.wallet_mut(), debit)?;
        to.wallet.push(credit);

        if let Err(err) = self.directory.persist(&to) {
            tracing::error!(
                from = session.username(),
                to = recipient,
                %amount,
                "transfer left incomplete: {err}"
            );
            return Err(EngineError::TransferIncomplete {
                recipient: recipient.to_string(),
                amount,
                reason: err.to_string(),
            });
        }

        tracing::info!(from = session.username(), to = recipient, %amount, "transfer sent");
        Ok(notes)
    }
}
