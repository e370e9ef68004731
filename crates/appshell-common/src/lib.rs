pub mod config;
pub mod error;
pub mod logging;

pub use error::{Result, ShellError};
