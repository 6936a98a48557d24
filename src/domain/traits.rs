use futures::Stream;

use crate::domain::{Command, Error, Outcome};

pub trait CommandStream {
    type CmdStream: Stream<Item = Result<Command, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::CmdStream;
}

/// Receives every operation the session could not carry out.
pub trait RejectionSink {
    fn report(&mut self, error: &Error);
}

pub trait Output {
    fn report(&mut self, outcome: &Outcome);
    fn flush(&mut self);
}
