pub mod account;
pub mod amount;
pub mod command;
pub mod error;
pub mod traits;

pub use account::Account;
pub use amount::Amount;
pub use command::{Command, Outcome};
pub use error::{AccountError, Error};
pub use traits::{CommandStream, Output, RejectionSink};
