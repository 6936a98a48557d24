use rust_decimal::Decimal;

/// One operation requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    Balance,
    Close,
    Exit,
}

/// What a successfully applied command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened { id: String, balance: Decimal },
    Deposited { amount: Decimal, balance: Decimal },
    Withdrew { amount: Decimal, balance: Decimal },
    Balance { balance: Decimal },
    Closed,
    Exit,
}

fn cents(value: &Decimal) -> Decimal {
    value.round_dp(2)
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Opened { id, balance } => {
                write!(f, "Bank Account Created: #{} with balance {:.2}", id, cents(balance))
            }
            Outcome::Deposited { amount, balance } => {
                write!(f, "Deposited {:.2}. New balance: {:.2}", cents(amount), cents(balance))
            }
            Outcome::Withdrew { amount, balance } => {
                write!(f, "Withdrew {:.2}. New balance: {:.2}", cents(amount), cents(balance))
            }
            Outcome::Balance { balance } => write!(f, "Current balance: {:.2}", cents(balance)),
            Outcome::Closed => write!(f, "Your account has been closed successfully!"),
            Outcome::Exit => write!(f, "Ending program"),
        }
    }
}
