pub mod config;
pub mod logging;

pub mod dirs;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod html;
pub mod materialize;
pub mod storage;

pub use error::PuzzleError;
