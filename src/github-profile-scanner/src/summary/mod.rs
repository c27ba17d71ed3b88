//! Account tally and summary types.

mod line;
mod tally;

pub use line::SummaryLine;
pub use tally::AccountTally;
