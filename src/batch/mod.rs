pub mod chunker;
pub mod manifest;
pub mod output;
pub mod prepare;
pub mod types;
