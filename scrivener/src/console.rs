use scrivener_client::{Outcome, ResultSink};

/// Renders to the terminal: notices on stderr, results on stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ResultSink for ConsoleSink {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }

    fn display(&self, text: &str) {
        println!("{text}");
    }
}

/// Process exit status for a submission outcome
pub const fn exit_status(outcome: &Outcome) -> u8 {
    match outcome {
        Outcome::Succeeded(_) => 0,
        Outcome::Failed(_) => 1,
        Outcome::Rejected(_) => 2,
    }
}
