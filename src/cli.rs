use crate::batch::types::{
    DedupeMode, DelimiterMode, OutputDelimiter, OutputTemplate, SplitMode, ValidationMode,
};
use crate::constants::DEFAULT_SPLIT_VALUE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "splitbox")]
#[command(
    about = "Clean, dedupe and validate a delimited list, split it into batches, \
             then print, copy or export each batch."
)]
pub struct Cli {
    /// Input file; reads stdin when omitted or "-".
    pub input: Option<PathBuf>,

    /// How to cut the input into items.
    #[arg(short = 'd', long = "delimiter", value_enum, default_value_t = DelimiterMode::Auto)]
    pub delimiter: DelimiterMode,

    /// Drop repeated items.
    #[arg(long = "dedupe", value_enum, default_value_t = DedupeMode::None)]
    pub dedupe: DedupeMode,

    /// Drop items that fail this check.
    #[arg(long = "validate", value_enum, default_value_t = ValidationMode::None)]
    pub validate: ValidationMode,

    /// Regular expression used with `--validate custom-regex`.
    #[arg(long = "pattern")]
    pub pattern: Option<String>,

    /// Batch sizing strategy.
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = SplitMode::ItemsPerGroup)]
    pub mode: SplitMode,

    /// Items per batch, number of batches, or max characters per batch, per `--mode`.
    #[arg(short = 's', long = "size", default_value_t = DEFAULT_SPLIT_VALUE, allow_negative_numbers = true)]
    pub size: i64,

    /// Output template for rendered batches.
    #[arg(short = 't', long = "template", value_enum, default_value_t = OutputTemplate::Plain)]
    pub template: OutputTemplate,

    /// Join delimiter for the plain template.
    #[arg(long = "join", value_enum, default_value_t = OutputDelimiter::Newline)]
    pub join: OutputDelimiter,

    /// Which batch (0-based) to print, copy, or write.
    #[arg(short = 'k', long = "batch")]
    pub batch: Option<usize>,

    /// Print batches to stdout.
    #[arg(short = 'o', long = "stdout")]
    pub stdout: bool,

    /// Do not copy to clipboard.
    #[arg(short = 'n', long = "no-clipboard")]
    pub no_clipboard: bool,

    /// Write the selected batch to this file.
    #[arg(short = 'w', long = "write")]
    pub write: Option<PathBuf>,

    /// Pack every batch plus manifest.json into a .tar.gz archive.
    /// A directory gets a timestamped archive inside it.
    #[arg(short = 'e', long = "export")]
    pub export: Option<PathBuf>,
}
