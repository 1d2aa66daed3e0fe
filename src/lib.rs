pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod worker;

pub use batch::chunker::{self, split, split_items};
pub use batch::output::{self, extension_for, format_batch};
pub use batch::prepare::{self, parse_items, prepare};
pub use batch::types::*;
pub use error::{ConfigError, ExecutionError};
