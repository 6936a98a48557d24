use crate::domain::{
    Account, Command, Error, Outcome,
    traits::{CommandStream, Output, RejectionSink},
};

use futures::StreamExt;

/// Drives one account from a stream of commands until the stream ends or the
/// user exits. Rejections never stop the loop.
#[derive(Debug)]
pub struct Session<I, O, R>
where
    I: CommandStream,
    O: Output,
    R: RejectionSink,
{
    input: I,
    output: O,
    rejections: R,
}

impl<I, O, R> Session<I, O, R>
where
    I: CommandStream,
    O: Output,
    R: RejectionSink,
{
    pub fn new(input: I, output: O, rejections: R) -> Self {
        Self {
            input,
            output,
            rejections,
        }
    }

    pub async fn process(&mut self, account: &mut Account) -> Result<(), Error> {
        let mut commands = self.input.stream();

        while let Some(command) = commands.next().await {
            let outcome = command.and_then(|command| Self::apply(account, command));

            match outcome {
                Ok(outcome) => {
                    self.output.report(&outcome);
                    self.output.flush();
                    if outcome == Outcome::Exit {
                        break;
                    }
                }
                Err(e) => {
                    tracing::info!(account = account.id(), error = %e, "operation rejected");
                    self.rejections.report(&e);
                }
            }
        }

        Ok(())
    }

    fn apply(account: &mut Account, command: Command) -> Result<Outcome, Error> {
        tracing::debug!(account = account.id(), ?command, status = ?account.status(), "applying command");

        let outcome = match command {
            Command::Deposit { amount } => Outcome::Deposited {
                amount,
                balance: account.deposit(amount)?,
            },
            Command::Withdraw { amount } => Outcome::Withdrew {
                amount,
                balance: account.withdraw(amount)?,
            },
            Command::Balance => Outcome::Balance {
                balance: account.balance(),
            },
            Command::Close => {
                account.close()?;
                Outcome::Closed
            }
            Command::Exit => Outcome::Exit,
        };

        Ok(outcome)
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (I, O, R) {
        (self.input, self.output, self.rejections)
    }
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;

    use futures::stream::{self, Stream};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::AccountError;
    use crate::ingestion::ConsoleInput;

    struct ScriptedInput(Option<Vec<Result<Command, Error>>>);

    impl CommandStream for ScriptedInput {
        type CmdStream = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

        fn stream(&mut self) -> Self::CmdStream {
            Box::pin(stream::iter(self.0.take().unwrap_or_default()))
        }
    }

    #[derive(Default)]
    struct RecordingOutput(Vec<Outcome>);

    impl Output for RecordingOutput {
        fn report(&mut self, outcome: &Outcome) {
            self.0.push(outcome.clone());
        }

        fn flush(&mut self) {}
    }

    #[derive(Default)]
    struct RecordingRejections(Vec<String>);

    impl RejectionSink for RecordingRejections {
        fn report(&mut self, error: &Error) {
            self.0.push(error.to_string());
        }
    }

    async fn run(
        balance: Decimal,
        commands: Vec<Result<Command, Error>>,
    ) -> (Account, Vec<Outcome>, Vec<String>) {
        let mut account = Account::new("123456", balance).unwrap();
        let mut session = Session::new(
            ScriptedInput(Some(commands)),
            RecordingOutput::default(),
            RecordingRejections::default(),
        );
        session.process(&mut account).await.unwrap();

        let (_, output, rejections) = session.into_parts();
        (account, output.0, rejections.0)
    }

    #[tokio::test]
    async fn deposit_then_balance() {
        let (account, outcomes, rejections) = run(
            dec!(100.0),
            vec![
                Ok(Command::Deposit { amount: dec!(50) }),
                Ok(Command::Balance),
            ],
        )
        .await;

        assert_eq!(account.balance(), dec!(150.0));
        assert_eq!(
            outcomes,
            vec![
                Outcome::Deposited {
                    amount: dec!(50),
                    balance: dec!(150.0)
                },
                Outcome::Balance {
                    balance: dec!(150.0)
                },
            ]
        );
        assert!(rejections.is_empty());
    }

    #[tokio::test]
    async fn rejections_are_reported_and_loop_continues() {
        let (account, outcomes, rejections) = run(
            dec!(100.0),
            vec![
                Ok(Command::Withdraw { amount: dec!(150) }),
                Ok(Command::Deposit { amount: dec!(-10) }),
                Err(Error::Ingestion("Choice is invalid.".to_string())),
                Ok(Command::Balance),
            ],
        )
        .await;

        assert_eq!(account.balance(), dec!(100.0));
        assert_eq!(
            outcomes,
            vec![Outcome::Balance {
                balance: dec!(100.0)
            }]
        );
        assert_eq!(
            rejections,
            vec![
                AccountError::InsufficientFunds {
                    requested: dec!(150),
                    available: dec!(100.0)
                }
                .to_string(),
                AccountError::NegativeDeposit.to_string(),
                "Choice is invalid.".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn closed_account_only_answers_balance() {
        let (account, outcomes, rejections) = run(
            dec!(100.0),
            vec![
                Ok(Command::Close),
                Ok(Command::Deposit { amount: dec!(10) }),
                Ok(Command::Close),
                Ok(Command::Balance),
            ],
        )
        .await;

        assert!(!account.is_active());
        assert_eq!(
            outcomes,
            vec![
                Outcome::Closed,
                Outcome::Balance {
                    balance: dec!(100.0)
                }
            ]
        );
        assert_eq!(
            rejections,
            vec!["The account is closed!", "The account is closed!"]
        );
    }

    #[tokio::test]
    async fn exit_stops_processing() {
        let (account, outcomes, _) = run(
            dec!(0.0),
            vec![
                Ok(Command::Withdraw {
                    amount: Decimal::ZERO,
                }),
                Ok(Command::Exit),
                Ok(Command::Deposit { amount: dec!(10) }),
            ],
        )
        .await;

        assert_eq!(account.balance(), Decimal::ZERO);
        assert_eq!(
            outcomes,
            vec![
                Outcome::Withdrew {
                    amount: Decimal::ZERO,
                    balance: Decimal::ZERO
                },
                Outcome::Exit
            ]
        );
    }

    #[tokio::test]
    async fn sub_cent_amounts_from_the_console_are_validated_unrounded() {
        let input = ConsoleInput::new(
            std::io::Cursor::new(b"1\n-0.00001\n2\n100.00004\n3\n".to_vec()),
            Vec::new(),
        );
        let mut account = Account::new("X", dec!(100)).unwrap();
        let mut session = Session::new(
            input,
            RecordingOutput::default(),
            RecordingRejections::default(),
        );
        session.process(&mut account).await.unwrap();

        let (_, output, rejections) = session.into_parts();
        assert_eq!(account.balance(), dec!(100));
        assert_eq!(
            output.0,
            vec![Outcome::Balance {
                balance: dec!(100)
            }]
        );
        assert_eq!(
            rejections.0,
            vec![
                AccountError::NegativeDeposit.to_string(),
                AccountError::InsufficientFunds {
                    requested: dec!(100.00004),
                    available: dec!(100)
                }
                .to_string(),
            ]
        );
    }
}
