use crate::batch::output::format_batch;
use crate::batch::types::{Group, OutputDelimiter, OutputTemplate, PreparationStats};
use crate::config::Config;
use crate::worker::{ExecutionHost, SplitOutcome, SplitRequest};
use anyhow::{Context, Result, anyhow};
use std::io::Read;
use std::path::Path;

/// Pipeline for reading input, splitting it off-thread, and rendering batches.
#[derive(Default)]
pub struct Pipeline {
    raw_input: String,
    outcome: Option<SplitOutcome>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw_input(
        &mut self,
        raw: impl Into<String>,
    ) {
        self.raw_input = raw.into();
        self.outcome = None;
    }

    /// Read the whole input document from a file, or stdin when `path` is `None`.
    pub fn read_input(
        &mut self,
        path: Option<&Path>,
    ) -> Result<()> {
        let raw = match path {
            Some(p) => std::fs::read_to_string(p)
                .with_context(|| format!("reading input {}", p.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                buf
            }
        };
        self.set_raw_input(raw);
        Ok(())
    }

    /// Submit the current input to the execution host and keep the outcome.
    pub async fn split(
        &mut self,
        host: &ExecutionHost,
        config: &Config,
    ) -> Result<()> {
        let request = SplitRequest::new(
            self.raw_input.as_str(),
            &config.preparation(),
            &config.split(),
        );
        let outcome = host.run(&request).await?;
        tracing::debug!(batches = outcome.groups.len(), "split finished");
        self.outcome = Some(outcome);
        Ok(())
    }

    pub fn groups(&self) -> &[Group] {
        self.outcome
            .as_ref()
            .map(|o| o.groups.as_slice())
            .unwrap_or_default()
    }

    pub fn stats(&self) -> Option<&PreparationStats> {
        self.outcome.as_ref().map(|o| &o.stats)
    }

    pub fn total_items(&self) -> usize {
        self.groups().iter().map(|g| g.items.len()).sum()
    }

    pub fn group(
        &self,
        idx: usize,
    ) -> Result<&Group> {
        let groups = self.groups();
        groups.get(idx).ok_or_else(|| {
            anyhow!(
                "batch index {} out of range ({} batches available)",
                idx,
                groups.len()
            )
        })
    }

    pub fn render(
        &self,
        idx: usize,
        template: OutputTemplate,
        delimiter: OutputDelimiter,
    ) -> Result<String> {
        Ok(format_batch(&self.group(idx)?.items, template, delimiter))
    }

    /// One-line result summary, plus the invalid examples when there are any.
    pub fn summary(&self) -> String {
        let Some(stats) = self.stats() else {
            return String::from("no split has run");
        };
        let mut s = format!(
            "OK {} items in {} batches ({} empty, {} invalid, {} duplicates removed)",
            self.total_items(),
            self.groups().len(),
            stats.empty_removed,
            stats.invalid_removed,
            stats.duplicates_removed
        );
        if !stats.invalid_examples.is_empty() {
            s.push_str("\ninvalid examples: ");
            s.push_str(&stats.invalid_examples.join(", "));
        }
        s
    }
}
