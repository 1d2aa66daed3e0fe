use crate::batch::types::{Group, OutputDelimiter, OutputTemplate};

fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Renders one batch with the chosen template. The delimiter only affects
/// `OutputTemplate::Plain`.
pub fn format_batch(
    items: &[String],
    template: OutputTemplate,
    delimiter: OutputDelimiter,
) -> String {
    match template {
        OutputTemplate::Plain => items.join(delimiter.separator()),
        OutputTemplate::SqlIn => {
            let literals: Vec<String> = items.iter().map(|v| sql_literal(v)).collect();
            format!("({})", literals.join(", "))
        }
        OutputTemplate::QuotedCsv => items
            .iter()
            .map(|v| csv_field(v))
            .collect::<Vec<_>>()
            .join(","),
        // Serializing a slice of strings cannot fail.
        OutputTemplate::JsonArray => serde_json::to_string_pretty(items).unwrap_or_default(),
    }
}

/// File extension matching each template's output.
pub fn extension_for(template: OutputTemplate) -> &'static str {
    match template {
        OutputTemplate::Plain => "txt",
        OutputTemplate::SqlIn => "sql",
        OutputTemplate::QuotedCsv => "csv",
        OutputTemplate::JsonArray => "json",
    }
}

pub fn batch_filename(
    group: &Group,
    template: OutputTemplate,
) -> String {
    format!("batch-{}.{}", group.index + 1, extension_for(template))
}
