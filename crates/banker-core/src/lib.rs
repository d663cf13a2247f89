//! Banker's algorithm core: allocation states, input parsing, the safety check and replay.

pub mod domain;
pub mod error;
pub mod validation;
pub mod config;
pub mod input;
pub mod safety;
pub mod replay;
pub mod report;

pub use domain::*;
pub use error::*;
pub use validation::*;
pub use self::config::*;
pub use input::*;
pub use safety::*;
pub use replay::*;
pub use report::*;

#[cfg(test)]
mod tests_safety;
#[cfg(test)]
mod tests_config;
