//! Output formatting utilities.

use colored::Colorize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use kudu_analytics::ResultStore;

use crate::cli::OutputFormat;

/// Decimal places shown in table output.
const TABLE_PRECISION: usize = 8;

/// A key-value pair for display.
#[derive(Debug, Clone, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a row from a result.
    pub fn from_scalar(key: &str, value: f64) -> Self {
        Self {
            key: key.to_string(),
            value: format!("{value:.prec$}", prec = TABLE_PRECISION),
        }
    }
}

/// Prints a result store as a titled table or as a JSON object.
pub fn print_results(title: &str, store: &ResultStore, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(title);
            print_table(&rows(store));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(store)?),
    }
    Ok(())
}

fn rows(store: &ResultStore) -> Vec<KeyValue> {
    store
        .iter()
        .map(|(key, value)| KeyValue::from_scalar(key, value))
        .collect()
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .with(Modify::new(Columns::last()).with(Alignment::right()))
        .to_string();

    println!("{table}");
}

/// Prints a header for a section.
fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_keep_store_order() {
        let mut store = ResultStore::new();
        store.add("roundedAip", 101.234_56).unwrap();
        store.add("roundedClean", 99.5).unwrap();

        let rows = rows(&store);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "roundedAip");
        assert_eq!(rows[0].value, "101.23456000");
        assert_eq!(rows[1].value, "99.50000000");
    }
}
