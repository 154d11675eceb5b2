//! CLI command handlers. Each mode is in its own file.

mod download;
mod print;

pub use download::run_download;
pub use print::run_print;
