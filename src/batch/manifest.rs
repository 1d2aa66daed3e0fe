use crate::batch::output::batch_filename;
use crate::batch::types::{Group, OutputDelimiter, OutputTemplate};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// 1-based batch number.
    pub batch: usize,
    pub item_count: usize,
    pub filename: String,
}

/// Index record written next to exported batch files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchManifest {
    pub created_at: String,
    pub batch_count: usize,
    pub total_items: usize,
    pub template: OutputTemplate,
    pub delimiter: OutputDelimiter,
    pub entries: Vec<ManifestEntry>,
}

impl BatchManifest {
    pub fn build(
        groups: &[Group],
        template: OutputTemplate,
        delimiter: OutputDelimiter,
    ) -> Self {
        let entries = groups
            .iter()
            .map(|g| ManifestEntry {
                batch: g.index + 1,
                item_count: g.items.len(),
                filename: batch_filename(g, template),
            })
            .collect();
        Self {
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            batch_count: groups.len(),
            total_items: groups.iter().map(|g| g.items.len()).sum(),
            template,
            delimiter,
            entries,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_every_batch() {
        let groups = vec![
            Group::new(0, vec!["a".into(), "b".into()]),
            Group::new(1, vec!["c".into()]),
        ];
        let manifest = BatchManifest::build(&groups, OutputTemplate::QuotedCsv, OutputDelimiter::Tab);
        assert_eq!(manifest.batch_count, 2);
        assert_eq!(manifest.total_items, 3);
        assert_eq!(manifest.entries[1].batch, 2);
        assert_eq!(manifest.entries[1].filename, "batch-2.csv");

        let json: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(json["template"], "quoted_csv");
        assert_eq!(json["delimiter"], "tab");
        assert_eq!(json["entries"][0]["itemCount"], 2);
        assert!(json["createdAt"].as_str().unwrap().ends_with('Z'));
    }
}
