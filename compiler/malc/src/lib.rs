//! The mal driver.
//!
//! Ties the reader, evaluator and printer together:
//!
//! - [`Session`]: an interpreter plus the read-eval-print step over text
//! - [`Problem`]: anything that can go wrong while doing that
//! - [`parse_args`]: command-line parsing for the `mal` binary
//! - [`init_tracing`]: opt-in log output, controlled by `MAL_LOG`

mod cli;
mod problem;
mod session;
mod tracing_setup;

pub use cli::{parse_args, Command, RunOptions, UsageError, USAGE};
pub use problem::Problem;
pub use session::Session;
pub use tracing_setup::init_tracing;
