use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("{0}")]
    Ingestion(String),

    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Reasons an account refuses an operation. A rejected operation leaves the
/// account untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("Invalid deposit. Can't deposit a negative amount!")]
    NegativeDeposit,

    #[error("Invalid withdrawal. Can't withdraw a negative amount!")]
    NegativeWithdrawal,

    #[error(
        "Insufficient funds! Requested {:.2}, available {:.2}",
        .requested.round_dp(2),
        .available.round_dp(2)
    )]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("The account is closed!")]
    AccountClosed,

    #[error("Invalid initial balance. Can't open an account with a negative balance!")]
    NegativeInitialBalance,

    #[error("Deposit would overflow the account balance")]
    BalanceOverflow,
}
