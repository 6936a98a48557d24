use crate::domain::{Error, RejectionSink};

#[derive(Default, Debug)]
pub struct StdErrRejections {}

impl RejectionSink for StdErrRejections {
    fn report(&mut self, error: &Error) {
        eprintln!("Error: {}", error);
    }
}
