use std::io::{BufRead, Read, Write};
use std::pin::Pin;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Amount, Command, CommandStream, Error};

type BoxedCommands = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

const MENU: &str = "\
Welcome to the Bank Account Management System!
Choose an option to deposit, withdraw, check balance, close account, or exit.
1. Deposit
2. Withdraw
3. Check Balance
4. Close Account
5. Exit Program
";

/// Interactive menu over a line-oriented reader. Prompts go to `prompt`,
/// selections and amounts are read from `input`.
pub struct ConsoleInput<R: BufRead, W: Write> {
    prompter: Option<Prompter<R, W>>,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self {
            prompter: Some(Prompter {
                input,
                prompt,
                done: false,
            }),
        }
    }

    /// Asks for the opening balance. Must be called before `stream`.
    pub fn read_initial_balance(&mut self) -> Result<Decimal, Error> {
        let prompter = self
            .prompter
            .as_mut()
            .ok_or_else(|| Error::Ingestion("Console input already consumed".to_string()))?;

        prompter.say("Enter initial balance: ")?;
        match prompter.read_line()? {
            Some(line) => Ok(line.parse::<Amount>()?.value()),
            None => Err(Error::Ingestion(
                "No initial balance was provided".to_string(),
            )),
        }
    }
}

struct Prompter<R: BufRead, W: Write> {
    input: R,
    prompt: W,
    done: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn say(&mut self, text: &str) -> Result<(), Error> {
        self.prompt.write_all(text.as_bytes())?;
        self.prompt.flush()?;
        Ok(())
    }

    // None on end of input
    fn read_line(&mut self) -> Result<Option<String>, Error> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_amount(&mut self, prompt: &str) -> Result<Option<Decimal>, Error> {
        self.say(prompt)?;
        match self.read_line()? {
            Some(line) => Ok(Some(line.parse::<Amount>()?.value())),
            None => Ok(None),
        }
    }

    fn next_command(&mut self) -> Result<Option<Command>, Error> {
        self.say(MENU)?;

        let Some(choice) = self.read_line()? else {
            return Ok(None);
        };

        let command = match choice.parse::<u8>() {
            Ok(1) => match self.read_amount("Enter deposit amount\n")? {
                Some(amount) => Command::Deposit { amount },
                None => return Ok(None),
            },
            Ok(2) => match self.read_amount("Enter your withdraw amount\n")? {
                Some(amount) => Command::Withdraw { amount },
                None => return Ok(None),
            },
            Ok(3) => Command::Balance,
            Ok(4) => Command::Close,
            Ok(5) => Command::Exit,
            _ => return Err(Error::Ingestion("Choice is invalid.".to_string())),
        };

        Ok(Some(command))
    }
}

impl<R: BufRead, W: Write> Iterator for Prompter<R, W> {
    type Item = Result<Command, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_command() {
            Ok(Some(command)) => Some(Ok(command)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(Error::IO(e)) => {
                // a broken terminal will not recover, stop after reporting it
                self.done = true;
                Some(Err(Error::IO(e)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl<R, W> CommandStream for ConsoleInput<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    type CmdStream = BoxedCommands;

    fn stream(&mut self) -> Self::CmdStream {
        match self.prompter.take() {
            Some(prompter) => Box::pin(stream::iter(prompter)),
            None => Box::pin(stream::empty::<Result<Command, Error>>()),
        }
    }
}

/// Batch mode: replays a CSV file of `action,amount` rows.
pub struct CsvScript<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvScript<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    action: String,
    amount: Option<Amount>,
}

impl TryFrom<CsvRow> for Command {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let command = match (row.action.trim().to_ascii_lowercase().as_str(), row.amount) {
            ("deposit", Some(amount)) => Command::Deposit {
                amount: amount.value(),
            },
            ("withdraw" | "withdrawal", Some(amount)) => Command::Withdraw {
                amount: amount.value(),
            },
            ("deposit" | "withdraw" | "withdrawal", None) => {
                return Err(Error::Ingestion(format!(
                    "Missing amount for {}",
                    row.action
                )));
            }
            ("balance", None) => Command::Balance,
            ("close", None) => Command::Close,
            ("exit", None) => Command::Exit,
            (other, _) => {
                return Err(Error::Ingestion(format!("Invalid action: {}", other)));
            }
        };

        Ok(command)
    }
}

impl<R: Read + Send + 'static> CommandStream for CsvScript<R> {
    type CmdStream = BoxedCommands;

    fn stream(&mut self) -> Self::CmdStream {
        let reader = match self.reader.take() {
            Some(r) => r,
            None => return Box::pin(stream::empty::<Result<Command, Error>>()),
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Command::try_from(row),
                Err(e) => Err(Error::Ingestion(format!("Invalid script row: {}", e))),
            });

        Box::pin(stream::iter(iter))
    }
}
