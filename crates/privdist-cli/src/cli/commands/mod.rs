//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod inject_version;
mod resolve;
mod rewrite;

pub use check::run_check;
pub use completions::run_completions;
pub use inject_version::run_inject_version;
pub use resolve::run_resolve;
pub use rewrite::{run_rewrite, TransportArgs};
