use std::io::{self, BufRead, Write};

use chrono::Local;
use tracing::{debug, warn};

use crate::confidence::confidence;
use crate::error::QueryError;
use crate::network::Predictor;
use crate::session::command::Command;
use crate::session::history::{History, HistoryEntry};
use crate::session::render;

/// What a successfully handled line asks the loop to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Exit,
    ShowHelp,
    ShowHistory,
    Answered(HistoryEntry),
}

/// An interactive session over a trained model. Owns the query history.
pub struct Session<P> {
    model: P,
    history: History,
}

impl<P: Predictor> Session<P> {
    pub fn new(model: P) -> Session<P> {
        Session { model, history: History::new() }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Interprets one line of input. Only `Outcome::Answered` touches the
    /// history, and only after a finite prediction was obtained.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, QueryError> {
        match Command::parse(line)? {
            Command::Exit => Ok(Outcome::Exit),
            Command::Help => Ok(Outcome::ShowHelp),
            Command::History => Ok(Outcome::ShowHistory),
            Command::Add { lhs, rhs } => self.answer(lhs, rhs).map(Outcome::Answered),
        }
    }

    fn answer(&mut self, lhs: f64, rhs: f64) -> Result<HistoryEntry, QueryError> {
        let predicted = self.model.predict(lhs, rhs);
        if !predicted.is_finite() {
            return Err(QueryError::NonFinitePrediction { lhs, rhs, predicted });
        }

        let actual = lhs + rhs;
        if !actual.is_finite() {
            return Err(QueryError::SumOverflow { lhs, rhs });
        }
        let score = confidence(predicted, actual);
        debug!(lhs, rhs, predicted, actual, confidence = score, "query answered");

        let entry = HistoryEntry::new(Local::now(), lhs, rhs, predicted, score);
        Ok(self.history.record(entry).clone())
    }

    /// Runs the read-eval-print loop until `exit`/`quit` or end of input.
    ///
    /// Query errors are reported on `output` and never end the loop; only a
    /// failure to read or write the terminal does.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        render::banner(&mut output)?;
        render::help(&mut output)?;

        let mut line = String::new();
        loop {
            render::prompt(&mut output)?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input, closing session");
                writeln!(output)?;
                render::farewell(&mut output)?;
                break;
            }

            match self.handle_line(&line) {
                Ok(Outcome::Exit) => {
                    render::farewell(&mut output)?;
                    break;
                }
                Ok(Outcome::ShowHelp) => render::help(&mut output)?,
                Ok(Outcome::ShowHistory) => render::history(&mut output, &self.history)?,
                Ok(Outcome::Answered(entry)) => render::answer(&mut output, &entry)?,
                Err(err) => {
                    if err.is_input_error() {
                        debug!(error = %err, "rejected input");
                    } else {
                        warn!(error = %err, "query failed");
                    }
                    render::query_error(&mut output, &err)?;
                }
            }
        }

        output.flush()
    }
}
