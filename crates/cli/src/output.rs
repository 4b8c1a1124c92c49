//! Output formatting for CLI

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use maxarea_common::{Container, Outcome};

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Result: N` / `Error: message`, as shown on the web page
    #[default]
    Plain,
    /// Table including the winning pair of lines
    Table,
    /// JSON format
    Json,
}

/// Trait for items that can be displayed in a table
pub trait TableDisplay {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

impl TableDisplay for Container {
    fn headers() -> Vec<&'static str> {
        vec!["Area", "Left", "Right", "Height", "Width"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.area.to_string(),
            self.left.to_string(),
            self.right.to_string(),
            self.height.to_string(),
            self.width.to_string(),
        ]
    }
}

/// Render an outcome in the requested format.
///
/// Failures, and single-line inputs with no pair, fall back to the plain text
/// in table mode.
pub fn render_outcome(outcome: &Outcome, format: OutputFormat) -> String {
    match (format, outcome) {
        (OutputFormat::Json, _) => serde_json::to_string_pretty(outcome).unwrap_or_default(),
        (
            OutputFormat::Table,
            Outcome::Success {
                container: Some(container),
                ..
            },
        ) => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);

            table.set_header(Container::headers());
            table.add_row(container.row());

            table.to_string()
        }
        _ => outcome.text(),
    }
}
