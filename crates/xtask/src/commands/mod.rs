//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod report;
mod validate;

pub use report::Report;
pub use validate::Validate;
