/*!
 * Reporting functionality for git-flatten
 *
 * Renders a summary of a finished run as a console table using the tabled
 * library.
 */

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::flattener::FlattenStatistics;

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for flatten runs
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a byte count with human-readable units
    fn format_size(&self, size: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;

        if size >= MB {
            format!("{:.2} MB", size as f64 / MB as f64)
        } else if size >= KB {
            format!("{:.2} KB", size as f64 / KB as f64)
        } else {
            format!("{} bytes", size)
        }
    }

    /// Generate a report string for the given statistics
    pub fn generate_report(&self, output_file: &str, stats: &FlattenStatistics) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.create_summary_table(output_file, stats),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, output_file: &str, stats: &FlattenStatistics) {
        println!("\n{}", self.generate_report(output_file, stats));
    }

    fn create_summary_table(&self, output_file: &str, stats: &FlattenStatistics) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "Output File",
                value: output_file.to_string(),
            },
            SummaryRow {
                key: "Process Time",
                value: format!("{:.4?}", stats.duration),
            },
            SummaryRow {
                key: "Tracked Files",
                value: stats.files_listed.to_string(),
            },
            SummaryRow {
                key: "Text Files",
                value: stats.text_files.to_string(),
            },
            SummaryRow {
                key: "Text Content",
                value: self.format_size(stats.text_bytes),
            },
            SummaryRow {
                key: "Binary Files",
                value: stats.binary_files.to_string(),
            },
            SummaryRow {
                key: "Unreadable Files",
                value: stats.unreadable_files.to_string(),
            },
            SummaryRow {
                key: "Skipped Paths",
                value: stats.skipped_files.to_string(),
            },
            SummaryRow {
                key: "Output Size",
                value: self.format_size(stats.bytes_written),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }
}
