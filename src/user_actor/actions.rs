use rust_decimal::Decimal;

/// Wallet operations applied inside the user store, so the balance check and
/// the write happen in one step.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Subtracts the amount; fails without touching the balance if it would go negative.
    Debit(Decimal),
    /// Adds the amount back, e.g. to undo a debit.
    Credit(Decimal),
}
