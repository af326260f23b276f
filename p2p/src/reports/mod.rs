//! Report data structures for commands.
//!
//! Operations build reports, then render them to an Output target.

mod convert;
mod output;

pub use convert::{ConvertReport, ConvertResult};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
