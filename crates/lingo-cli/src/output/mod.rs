//! Output formatting for CLI commands.

pub mod table;
