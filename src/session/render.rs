//! Everything the user sees. Writers are generic so the session can be
//! driven against in-memory buffers.

use std::io::{self, Write};

use console::{style, StyledObject};

use crate::confidence::ConfidenceBand;
use crate::error::QueryError;
use crate::session::history::{History, HistoryEntry};
use crate::train::epoch_stats::EpochStats;

const TIME_FORMAT: &str = "%H:%M:%S";

pub const NO_HISTORY: &str = "No calculations in history";
pub const USAGE: &str = "Please enter exactly two numbers separated by space";
pub const INVALID_INPUT: &str = "Invalid input. Please enter two numbers or a valid command";
pub const FAREWELL: &str = "Goodbye!";

/// Operands keep a decimal point (`3.0`) and switch to exponent notation for
/// very large or very small magnitudes (`1.5e308`).
fn operand(value: f64) -> String {
    format!("{value:?}")
}

/// Two decimals, or exponent notation once fixed-point would run to dozens
/// of digits.
fn amount(value: f64) -> String {
    if value.abs() >= 1e16 {
        format!("{value:.2e}")
    } else {
        format!("{value:.2}")
    }
}

fn confidence_text(confidence: f64) -> String {
    format!("({confidence:.1}% confidence)")
}

fn banded(confidence: f64) -> StyledObject<String> {
    let text = confidence_text(confidence);
    match ConfidenceBand::from_confidence(confidence) {
        ConfidenceBand::High => style(text).green(),
        ConfidenceBand::Medium => style(text).yellow(),
        ConfidenceBand::Low => style(text).red(),
    }
}

// ---------------------------------------------------------------------------
// Training
// ---------------------------------------------------------------------------

pub fn training_started<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", style("Training the model...").yellow())
}

pub fn epoch<W: Write>(out: &mut W, stats: &EpochStats) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        style(format!(
            "Epoch {}/{} - loss: {:.6}",
            stats.epoch, stats.total_epochs, stats.train_loss
        ))
        .cyan()
    )
}

pub fn training_complete<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", style("Training complete!").green())
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", style("AI Calculator Chat Interface").green())?;
    writeln!(out, "{}", style("-------------------------------").blue())
}

pub fn help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", style("Available commands:").cyan())?;
    for (command, description) in [
        ("[num1] [num2]", "Add two numbers (0-100 works best)"),
        ("history", "Show calculation history"),
        ("help", "Show this help message"),
        ("exit", "Quit the program"),
    ] {
        writeln!(out, "  {} - {}", style(format!("{command:<13}")).yellow(), description)?;
    }
    Ok(())
}

pub fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\n{}", style("You: ").white())?;
    out.flush()
}

pub fn answer<W: Write>(out: &mut W, entry: &HistoryEntry) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        style(format!(
            "AI: {} + {} = {}",
            operand(entry.num1()),
            operand(entry.num2()),
            amount(entry.predicted_sum())
        ))
        .green(),
        banded(entry.confidence())
    )
}

pub fn history<W: Write>(out: &mut W, history: &History) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "{}", style(NO_HISTORY).red());
    }

    writeln!(out, "\n{}", style("Calculation History:").cyan())?;
    for (i, entry) in history.iter().enumerate() {
        writeln!(
            out,
            "{}. [{}] {} + {} = {} {}",
            i + 1,
            entry.timestamp().format(TIME_FORMAT),
            operand(entry.num1()),
            operand(entry.num2()),
            amount(entry.predicted_sum()),
            style(confidence_text(entry.confidence())).magenta()
        )?;
    }
    Ok(())
}

pub fn query_error<W: Write>(out: &mut W, err: &QueryError) -> io::Result<()> {
    let message = match err {
        QueryError::InvalidNumber { .. } => INVALID_INPUT.to_string(),
        QueryError::WrongArity { .. } => USAGE.to_string(),
        other => format!("An error occurred: {other}"),
    };
    writeln!(out, "{}", style(message).red())
}

pub fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", style(FAREWELL).yellow())
}
