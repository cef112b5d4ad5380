//! CLI subcommand implementations.

mod resolve;
mod verify;

pub use resolve::{run_resolve, ResolveArgs};
pub use verify::{run_verify, VerifyArgs};
