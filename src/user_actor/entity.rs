use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserId, UserPatch};
use super::actions::UserAction;
use super::error::UserError;

fn require(field: &str, value: &str) -> Result<(), UserError> {
    if value.trim().is_empty() {
        return Err(UserError::InvalidData(format!("{field} must not be blank")));
    }
    Ok(())
}

fn require_non_negative(field: &str, amount: Decimal) -> Result<(), UserError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(UserError::InvalidData(format!("{field} must not be negative, got {amount}")));
    }
    Ok(())
}

impl Entity for User {
    const KIND: &'static str = "user";

    type Id = UserId;
    type CreatePayload = UserCreate;
    type Patch = UserPatch;
    type Action = UserAction;
    /// Balance after the action
    type ActionResult = Decimal;
    type Error = UserError;

    fn id(&self) -> &UserId { &self.id }

    fn validate(payload: &UserCreate) -> Result<(), UserError> {
        require("email", &payload.email)?;
        require("username", &payload.username)?;
        require("password", &payload.password)?;
        require_non_negative("wallet balance", payload.wallet_balance)
    }

    fn from_create(id: UserId, payload: UserCreate) -> Result<Self, UserError> {
        Ok(Self {
            id,
            email: payload.email,
            password: payload.password,
            username: payload.username,
            wallet_balance: payload.wallet_balance,
        })
    }

    fn not_found(id: UserId) -> UserError {
        UserError::NotFound(id)
    }

    /// Updates the wallet balance when one is given.
    ///
    /// # Errors
    /// Rejects a negative balance and leaves the user unchanged.
    fn on_update(&mut self, patch: UserPatch) -> Result<(), UserError> {
        if let Some(balance) = patch.wallet_balance {
            require_non_negative("wallet balance", balance)?;
            self.wallet_balance = balance;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: UserAction) -> Result<Decimal, UserError> {
        match action {
            UserAction::Debit(amount) => {
                require_non_negative("debit amount", amount)?;
                if self.wallet_balance < amount {
                    return Err(UserError::InsufficientFunds {
                        required: amount,
                        available: self.wallet_balance,
                    });
                }
                self.wallet_balance -= amount;
                Ok(self.wallet_balance)
            }
            UserAction::Credit(amount) => {
                require_non_negative("credit amount", amount)?;
                self.wallet_balance = self.wallet_balance.checked_add(amount).ok_or(
                    UserError::BalanceOverflow {
                        amount,
                        balance: self.wallet_balance,
                    },
                )?;
                Ok(self.wallet_balance)
            }
        }
    }
}
