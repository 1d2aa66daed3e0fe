// Batch builder: order-preserving partition of prepared items
use crate::batch::prepare;
use crate::batch::types::{DelimiterMode, Group, PreparationConfig, SplitConfig, SplitMode};
use crate::error::ConfigError;

/// Options for `split_items`, the one-call prepare-and-split path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    pub mode: SplitMode,
    pub delimiter: DelimiterMode,
    pub value: i64,
}

/// Partitions `items` into ordered groups according to `config`.
pub fn split(
    items: &[String],
    config: &SplitConfig,
) -> Result<Vec<Group>, ConfigError> {
    if config.value < 1 {
        return Err(ConfigError::InvalidSplitValue);
    }
    let value = usize::try_from(config.value).map_err(|_| ConfigError::InvalidSplitValue)?;
    let runs = match config.mode {
        SplitMode::ItemsPerGroup => fixed_runs(items, value),
        SplitMode::TargetGroupCount => balanced_runs(items, value),
        SplitMode::MaxCharsPerGroup => packed_runs(items, value),
    };
    Ok(runs
        .into_iter()
        .enumerate()
        .map(|(index, run)| Group::new(index, run.to_vec()))
        .collect())
}

/// Prepares raw input with the given delimiter (no validation, no dedupe)
/// and splits it.
pub fn split_items(
    raw: &str,
    options: &SplitOptions,
) -> Result<Vec<Group>, ConfigError> {
    let config = PreparationConfig {
        delimiter: options.delimiter,
        ..Default::default()
    };
    let prepared = prepare::prepare(raw, &config)?;
    split(
        &prepared.items,
        &SplitConfig::new(options.mode, options.value),
    )
}

fn fixed_runs(
    items: &[String],
    size: usize,
) -> Vec<&[String]> {
    items.chunks(size).collect()
}

fn balanced_runs(
    items: &[String],
    target: usize,
) -> Vec<&[String]> {
    let count = target.min(items.len());
    if count == 0 {
        return Vec::new();
    }
    let base = items.len() / count;
    let extra = items.len() % count;
    let mut runs = Vec::with_capacity(count);
    let mut start = 0usize;
    for i in 0..count {
        let len = base + usize::from(i < extra);
        runs.push(&items[start..start + len]);
        start += len;
    }
    runs
}

// Greedy scan; an item longer than the bound gets a group of its own.
// Lengths are UTF-16 code units.
fn packed_runs(
    items: &[String],
    max_chars: usize,
) -> Vec<&[String]> {
    let mut runs = Vec::new();
    let mut start = 0usize;
    let mut current_len = 0usize;
    for (i, item) in items.iter().enumerate() {
        let len = item.encode_utf16().count();
        if i == start {
            current_len = len;
            continue;
        }
        if current_len + 1 + len <= max_chars {
            current_len += 1 + len;
        } else {
            runs.push(&items[start..i]);
            start = i;
            current_len = len;
        }
    }
    if start < items.len() {
        runs.push(&items[start..]);
    }
    runs
}
