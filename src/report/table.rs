//! Comparative statement table: column selection, cell formatting, text and CSV output

use serde::Serialize;
use std::io::Write;

use super::format::{format_currency, format_pct};
use super::layout::{row_label, RowKind, RowStyle, STATEMENT_ROWS};
use crate::baseline::Baseline;
use crate::error::Result;
use crate::scenario::{ScenarioKind, ScenarioSet};

/// Which historical columns are visible; the 2025 columns always are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewOptions {
    pub show_2023: bool,
    pub show_2024: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_2023: true,
            show_2024: true,
        }
    }
}

impl ViewOptions {
    /// Displayed scenarios in column order
    pub fn columns(&self) -> Vec<ScenarioKind> {
        let mut cols = Vec::with_capacity(4);
        if self.show_2023 {
            cols.push(ScenarioKind::Actual2023);
        }
        if self.show_2024 {
            cols.push(ScenarioKind::Actual2024);
        }
        cols.push(ScenarioKind::Original2025);
        cols.push(ScenarioKind::Finalized2025);
        cols
    }
}

/// One formatted table row
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub label: String,
    pub kind: RowKind,
    pub style: RowStyle,
    pub css: &'static str,
    /// Raw values per column; `None` for spacer rows
    pub values: Vec<Option<f64>>,
    /// Formatted cells per column; empty strings for spacer rows
    pub cells: Vec<String>,
}

/// The full comparative statement
#[derive(Debug, Clone, Serialize)]
pub struct StatementTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl StatementTable {
    pub fn build(set: &ScenarioSet, baseline: &Baseline, view: &ViewOptions) -> Self {
        let kinds = view.columns();
        let statements: Vec<_> = kinds.iter().map(|k| set.statement(*k)).collect();

        let rows = STATEMENT_ROWS
            .iter()
            .map(|&row| {
                let style = RowStyle::for_row(row);
                let values: Vec<Option<f64>> = statements
                    .iter()
                    .map(|s| match row {
                        RowKind::Value(item) => Some(s.value(item)),
                        RowKind::Spacer => None,
                    })
                    .collect();
                let cells = values.iter().map(|v| format_cell(row, *v)).collect();

                TableRow {
                    label: row_label(row, baseline),
                    kind: row,
                    style,
                    css: style.css(),
                    values,
                    cells,
                }
            })
            .collect();

        Self {
            title: "Comparative Financial Statement (Values in USD)".to_string(),
            columns: kinds.iter().map(|k| k.label().to_string()).collect(),
            rows,
        }
    }

    /// Fixed-width text rendering; row highlights when `color` is set and the
    /// terminal accepts colour
    pub fn render_text(&self, color: bool) -> String {
        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0)
            .max("Line Item".len());
        let col_width = self
            .columns
            .iter()
            .map(|c| c.len())
            .chain(self.rows.iter().flat_map(|r| r.cells.iter().map(|c| c.len())))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');

        let mut header = format!("{:<width$}", "Line Item", width = label_width);
        for col in &self.columns {
            header.push_str(&format!("  {:>width$}", col, width = col_width));
        }
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(header.len()));
        out.push('\n');

        for row in &self.rows {
            let mut line = format!("{:<width$}", row.label, width = label_width);
            for cell in &row.cells {
                line.push_str(&format!("  {:>width$}", cell, width = col_width));
            }
            if color && row.style != RowStyle::Plain {
                out.push_str(&row.style.paint(&line));
            } else {
                out.push_str(line.trim_end());
            }
            out.push('\n');
        }
        out
    }

    /// Formatted table as CSV (header `Line Item` plus one column per scenario)
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["Line Item".to_string()];
        header.extend(self.columns.iter().cloned());
        wtr.write_record(&header)?;

        for row in &self.rows {
            let mut record = vec![row.label.clone()];
            record.extend(row.cells.iter().cloned());
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn format_cell(row: RowKind, value: Option<f64>) -> String {
    match (row, value) {
        (RowKind::Value(item), Some(v)) if item.is_percentage() => format_pct(v),
        (RowKind::Value(_), Some(v)) => format_currency(v),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{Adjustments, ScenarioRunner};

    fn table(view: ViewOptions) -> StatementTable {
        let runner = ScenarioRunner::new();
        let set = runner.run(&Adjustments::default()).unwrap();
        StatementTable::build(&set, runner.baseline(), &view)
    }

    #[test]
    fn test_column_selection() {
        let all = ViewOptions::default().columns();
        assert_eq!(all.len(), 4);

        let view = ViewOptions { show_2023: false, show_2024: true };
        assert_eq!(
            view.columns(),
            vec![ScenarioKind::Actual2024, ScenarioKind::Original2025, ScenarioKind::Finalized2025]
        );

        let t = table(ViewOptions { show_2023: false, show_2024: false });
        assert_eq!(t.columns, vec!["2025 Original", "2025 Finalized"]);
        assert!(t.rows.iter().all(|r| r.cells.len() == 2));
    }

    #[test]
    fn test_cell_formatting() {
        let t = table(ViewOptions::default());
        assert_eq!(t.rows.len(), 24);

        let revenue = &t.rows[0];
        assert_eq!(revenue.cells, vec!["$1,080,000", "$1,200,000", "$1,200,000", "$1,200,000"]);

        let gp_pct = &t.rows[9];
        assert_eq!(gp_pct.label, "Gross Profit %");
        assert_eq!(gp_pct.cells[3], "40.00%");

        let spacer = &t.rows[1];
        assert!(spacer.cells.iter().all(String::is_empty));
        assert!(spacer.values.iter().all(Option::is_none));

        let tax = &t.rows[20];
        assert_eq!(tax.cells[0], "$0");
        assert_eq!(tax.cells[3], "$12,410");
    }

    #[test]
    fn test_render_text_plain_and_colored() {
        let t = table(ViewOptions::default());
        let plain = t.render_text(false);
        assert!(plain.starts_with("Comparative Financial Statement"));
        assert!(plain.contains("2025 Finalized"));
        assert!(plain.contains("Management Salaries"));
        assert!(!plain.contains('\x1b'));

        // test harness stdout is not a TTY
        colored::control::set_override(true);
        let colored = t.render_text(true);
        let gross_profit = colored
            .lines()
            .find(|l| l.contains("Gross Profit") && !l.contains('%'))
            .unwrap();
        assert!(gross_profit.starts_with("\x1b["));
        assert!(gross_profit.ends_with("\x1b[0m"));
        // plain rows stay unstyled
        let tax = colored.lines().find(|l| l.starts_with("Corporate Tax")).unwrap();
        assert!(!tax.contains('\x1b'));
        assert_eq!(colored.lines().count(), plain.lines().count());
    }

    #[test]
    fn test_write_csv() {
        let t = table(ViewOptions { show_2023: false, show_2024: false });
        let mut buf = Vec::new();
        t.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Line Item,2025 Original,2025 Finalized"));
        assert_eq!(lines.next(), Some("Revenue,\"$1,200,000\",\"$1,200,000\""));
        assert_eq!(text.lines().count(), 25);
    }
}
