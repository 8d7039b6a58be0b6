use crate::error::QueryError;

/// A parsed REPL line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Exit,
    Help,
    History,
    Add { lhs: f64, rhs: f64 },
}

impl Command {
    /// Keywords match case-insensitively after trimming. Anything else must be
    /// exactly two whitespace-separated numbers; every token is parsed before
    /// the count is checked, so `"abc 4 5"` is an invalid number rather than
    /// a wrong count.
    pub fn parse(line: &str) -> Result<Command, QueryError> {
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "exit" | "quit" => return Ok(Command::Exit),
            "help" => return Ok(Command::Help),
            "history" => return Ok(Command::History),
            _ => {}
        }

        let numbers = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| QueryError::InvalidNumber {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, QueryError>>()?;

        match numbers[..] {
            [lhs, rhs] => Ok(Command::Add { lhs, rhs }),
            _ => Err(QueryError::WrongArity { count: numbers.len() }),
        }
    }
}
