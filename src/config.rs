use crate::batch::types::{
    DedupeMode, DelimiterMode, OutputDelimiter, OutputTemplate, PreparationConfig, SplitConfig,
    SplitMode, ValidationMode,
};
use crate::cli::Cli;
use clap::Parser;
use std::path::PathBuf;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub delimiter: DelimiterMode,
    pub dedupe: DedupeMode,
    pub validate: ValidationMode,
    pub pattern: Option<String>,
    pub mode: SplitMode,
    pub size: i64,
    pub template: OutputTemplate,
    pub join: OutputDelimiter,
    pub batch: Option<usize>,
    pub stdout: bool,
    pub no_clipboard: bool,
    pub write: Option<PathBuf>,
    pub export: Option<PathBuf>,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Self {
        Self::from(Cli::parse())
    }

    pub fn preparation(&self) -> PreparationConfig {
        PreparationConfig {
            delimiter: self.delimiter,
            dedupe_mode: self.dedupe,
            validation_mode: self.validate,
            custom_pattern: self.pattern.clone(),
        }
    }

    pub fn split(&self) -> SplitConfig {
        SplitConfig::new(self.mode, self.size)
    }

    /// `None` and `-` both mean stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            delimiter: cli.delimiter,
            dedupe: cli.dedupe,
            validate: cli.validate,
            pattern: cli.pattern,
            mode: cli.mode,
            size: cli.size,
            template: cli.template,
            join: cli.join,
            batch: cli.batch,
            stdout: cli.stdout,
            no_clipboard: cli.no_clipboard,
            write: cli.write,
            export: cli.export,
        }
    }
}
