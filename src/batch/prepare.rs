// Item preparation: tokenize, trim, validate, dedupe
use crate::batch::types::{
    DedupeMode, DelimiterMode, PreparationConfig, PreparationStats, PreparedItems, ValidationMode,
};
use crate::constants::MAX_INVALID_EXAMPLES;
use crate::error::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static NEWLINE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").unwrap());
static COMMA_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n|,").unwrap());
static TAB_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n|\t").unwrap());
static ANY_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n|,|\t").unwrap());

static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Compiled form of a `ValidationMode`.
#[derive(Debug, Clone)]
pub enum Validator {
    AcceptAll,
    Pattern(Regex),
}

impl Validator {
    /// Resolves the validation mode up front so a bad custom pattern fails
    /// before any token is looked at.
    pub fn from_config(config: &PreparationConfig) -> Result<Self, ConfigError> {
        match config.validation_mode {
            ValidationMode::None => Ok(Validator::AcceptAll),
            ValidationMode::Alphanumeric => Ok(Validator::Pattern((*ALPHANUMERIC).clone())),
            ValidationMode::Email => Ok(Validator::Pattern((*EMAIL).clone())),
            ValidationMode::CustomRegex => {
                let pattern = config
                    .custom_pattern
                    .as_deref()
                    .filter(|p| !p.is_empty())
                    .ok_or(ConfigError::MissingPattern)?;
                Ok(Validator::Pattern(Regex::new(pattern)?))
            }
        }
    }

    #[inline]
    pub fn accepts(
        &self,
        token: &str,
    ) -> bool {
        match self {
            Validator::AcceptAll => true,
            Validator::Pattern(re) => re.is_match(token),
        }
    }
}

fn splitter_for(
    raw: &str,
    delimiter: DelimiterMode,
) -> &'static Regex {
    match delimiter {
        DelimiterMode::Newline => &*NEWLINE_SPLIT,
        DelimiterMode::Comma => &*COMMA_SPLIT,
        DelimiterMode::Tab => &*TAB_SPLIT,
        // Input with no separator at all stays on the newline rule.
        DelimiterMode::Auto => {
            if raw.contains(['\n', '\t', ',']) {
                &*ANY_SPLIT
            } else {
                &*NEWLINE_SPLIT
            }
        }
    }
}

/// Trims whitespace and byte-order marks from both ends.
fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Splits raw input into untrimmed tokens.
pub fn tokenize(
    raw: &str,
    delimiter: DelimiterMode,
) -> Vec<&str> {
    splitter_for(raw, delimiter).split(raw).collect()
}

/// Tokenizes and trims, dropping empty tokens.
pub fn parse_items(
    raw: &str,
    delimiter: DelimiterMode,
) -> Vec<String> {
    tokenize(raw, delimiter)
        .into_iter()
        .map(trim_token)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turns raw text into the cleaned, validated, deduplicated item list.
pub fn prepare(
    raw: &str,
    config: &PreparationConfig,
) -> Result<PreparedItems, ConfigError> {
    let validator = Validator::from_config(config)?;
    let tokens = tokenize(raw, config.delimiter);
    let mut stats = PreparationStats {
        raw_token_count: tokens.len(),
        ..Default::default()
    };

    let mut valid = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = trim_token(token);
        if token.is_empty() {
            stats.empty_removed += 1;
            continue;
        }
        if !validator.accepts(token) {
            stats.invalid_removed += 1;
            if stats.invalid_examples.len() < MAX_INVALID_EXAMPLES {
                stats.invalid_examples.push(token.to_string());
            }
            continue;
        }
        valid.push(token);
    }

    let items = match config.dedupe_mode {
        DedupeMode::None => valid.into_iter().map(str::to_string).collect(),
        mode => {
            let mut seen = HashSet::with_capacity(valid.len());
            let mut kept = Vec::with_capacity(valid.len());
            for token in valid {
                let key = match mode {
                    DedupeMode::CaseInsensitive => token.to_lowercase(),
                    _ => token.to_string(),
                };
                if seen.insert(key) {
                    kept.push(token.to_string());
                } else {
                    stats.duplicates_removed += 1;
                }
            }
            kept
        }
    };

    tracing::debug!(
        raw = stats.raw_token_count,
        kept = items.len(),
        "prepared items"
    );
    Ok(PreparedItems { items, stats })
}
