use rust_decimal::Decimal;

use crate::domain::AccountError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Closed, // terminal, only balance queries allowed
}

/// A single bank account. Deposits and withdrawals are only accepted while
/// the account is active; every rejected call leaves it unchanged.
#[derive(Debug)]
pub struct Account {
    id: String,
    balance: Decimal,
    status: AccountStatus,
}

impl Account {
    pub fn new(id: impl Into<String>, initial_balance: Decimal) -> Result<Self, AccountError> {
        if initial_balance < Decimal::ZERO {
            return Err(AccountError::NegativeInitialBalance);
        }

        Ok(Self {
            id: id.into(),
            balance: initial_balance,
            status: AccountStatus::Active,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Adds `amount` and returns the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        self.ensure_active()?;

        if amount < Decimal::ZERO {
            return Err(AccountError::NegativeDeposit);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow)?;

        Ok(self.balance)
    }

    /// Removes `amount` and returns the new balance. Withdrawing the whole
    /// balance is allowed, overdrawing is not.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        self.ensure_active()?;

        if amount < Decimal::ZERO {
            return Err(AccountError::NegativeWithdrawal);
        }

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;

        Ok(self.balance)
    }

    pub fn close(&mut self) -> Result<(), AccountError> {
        self.ensure_active()?;
        self.status = AccountStatus::Closed;
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), AccountError> {
        match self.status {
            AccountStatus::Active => Ok(()),
            AccountStatus::Closed => Err(AccountError::AccountClosed),
        }
    }
}
