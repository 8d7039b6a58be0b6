pub mod command;
pub mod history;
pub mod render;
pub mod repl;

pub use command::Command;
pub use history::{History, HistoryEntry};
pub use repl::{Outcome, Session};
