use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How raw input is cut into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DelimiterMode {
    Newline,
    Comma,
    Tab,
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DedupeMode {
    #[default]
    None,
    CaseSensitive,
    CaseInsensitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    None,
    Alphanumeric,
    Email,
    CustomRegex,
}

/// Settings for one preparation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparationConfig {
    pub delimiter: DelimiterMode,
    pub dedupe_mode: DedupeMode,
    pub validation_mode: ValidationMode,
    pub custom_pattern: Option<String>,
}

/// Counters collected while preparing items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparationStats {
    pub raw_token_count: usize,
    pub empty_removed: usize,
    pub invalid_removed: usize,
    pub duplicates_removed: usize,
    /// First few rejected tokens, verbatim, in encounter order.
    pub invalid_examples: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedItems {
    pub items: Vec<String>,
    pub stats: PreparationStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    #[default]
    ItemsPerGroup,
    TargetGroupCount,
    MaxCharsPerGroup,
}

/// Sizing strategy plus its bound. `value` must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    pub mode: SplitMode,
    pub value: i64,
}

impl SplitConfig {
    pub fn new(
        mode: SplitMode,
        value: i64,
    ) -> Self {
        Self { mode, value }
    }
}

/// One contiguous batch of prepared items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub index: usize,
    pub items: Vec<String>,
    pub label: String,
}

impl Group {
    pub fn new(
        index: usize,
        items: Vec<String>,
    ) -> Self {
        let label = format!("Batch {} ({} items)", index + 1, items.len());
        Self {
            index,
            items,
            label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputTemplate {
    #[default]
    Plain,
    SqlIn,
    QuotedCsv,
    JsonArray,
}

/// Join separator for the plain template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputDelimiter {
    #[default]
    Newline,
    Comma,
    Tab,
}

impl OutputDelimiter {
    pub fn separator(self) -> &'static str {
        match self {
            OutputDelimiter::Newline => "\n",
            OutputDelimiter::Comma => ",",
            OutputDelimiter::Tab => "\t",
        }
    }
}
