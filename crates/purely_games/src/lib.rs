//! Matches, configuration and the narrated demo built on `purely_tictactoe`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod demo;
pub mod tally;

pub use config::{ConfigError, MatchConfig};
pub use demo::DemoError;
pub use tally::{MatchReport, Tally, run_match};
