//! Statement row layout, labels and highlight rules
//!
//! Spacer rows exist only here; the engine's `Statement` is purely numeric.

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::baseline::Baseline;
use crate::projection::{LineItem, Statement};

/// A row of the rendered statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    Value(LineItem),
    /// Blank row for visual spacing
    Spacer,
}

use LineItem::*;
use RowKind::{Spacer, Value};

/// Fixed row order of the statement (24 rows, 6 spacers)
pub const STATEMENT_ROWS: [RowKind; 24] = [
    Value(Revenue),
    Spacer,
    Value(Supplier(0)),
    Value(Supplier(1)),
    Value(Supplier(2)),
    Value(Supplier(3)),
    Value(TotalCogs),
    Spacer,
    Value(GrossProfit),
    Value(GrossProfitPct),
    Spacer,
    Value(Opex(0)),
    Value(Opex(1)),
    Value(Opex(2)),
    Value(Opex(3)),
    Value(Opex(4)),
    Value(Opex(5)),
    Spacer,
    Value(Ebitda),
    Spacer,
    Value(CorporateTax),
    Spacer,
    Value(NetProfit),
    Value(NetProfitPct),
];

/// Display label for a row; supplier names are indented two spaces
pub fn row_label(row: RowKind, baseline: &Baseline) -> String {
    let item = match row {
        Spacer => return String::new(),
        Value(item) => item,
    };
    debug_assert!(item.index_in_range(), "line item index out of range: {:?}", item);
    match item {
        Revenue => "Revenue".to_string(),
        Supplier(i) => format!("  {}", baseline.supplier_names.get(i).map(String::as_str).unwrap_or("")),
        TotalCogs => "Total COGS".to_string(),
        GrossProfit => "Gross Profit".to_string(),
        GrossProfitPct => "Gross Profit %".to_string(),
        Opex(i) => baseline.opex_names.get(i).cloned().unwrap_or_default(),
        TotalOpex => "Total OPEX".to_string(),
        Ebitda => "EBITDA".to_string(),
        CorporateTax => "Corporate Tax".to_string(),
        NetProfit => "Net Profit".to_string(),
        NetProfitPct => "Net Profit %".to_string(),
    }
}

/// Row-level highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowStyle {
    Plain,
    /// Supplier detail lines
    Muted,
    /// Gross Profit
    Headline,
    /// EBITDA and Net Profit
    Subtotal,
    /// Percentage rows
    Ratio,
}

impl RowStyle {
    pub fn for_row(row: RowKind) -> Self {
        match row {
            Spacer => RowStyle::Plain,
            Value(Supplier(_)) => RowStyle::Muted,
            Value(GrossProfit) => RowStyle::Headline,
            Value(GrossProfitPct) | Value(NetProfitPct) => RowStyle::Ratio,
            Value(Ebitda) | Value(NetProfit) => RowStyle::Subtotal,
            Value(_) => RowStyle::Plain,
        }
    }

    /// CSS declaration for HTML front ends
    pub fn css(&self) -> &'static str {
        match self {
            RowStyle::Plain => "",
            RowStyle::Muted => "background-color: #000000; color: #6c757d; font-style: italic",
            RowStyle::Headline => "background-color: #1e3d59; color: white; font-weight: bold",
            RowStyle::Subtotal => "background-color: #214469; color: white; font-weight: bold",
            RowStyle::Ratio => "background-color: #e3f2fd; color: #1565c0; font-weight: bold",
        }
    }

    /// Terminal styling; honours `NO_COLOR`, TTY detection and `colored::control` overrides
    pub fn paint(&self, text: &str) -> String {
        match self {
            RowStyle::Plain => text.to_string(),
            RowStyle::Muted => text.italic().truecolor(108, 117, 125).to_string(),
            RowStyle::Headline => text.bold().bright_white().on_truecolor(30, 61, 89).to_string(),
            RowStyle::Subtotal => text.bold().bright_white().on_truecolor(33, 68, 105).to_string(),
            RowStyle::Ratio => text
                .bold()
                .truecolor(21, 101, 192)
                .on_truecolor(227, 242, 253)
                .to_string(),
        }
    }
}

impl Statement {
    /// Positional column aligned with `STATEMENT_ROWS`; `None` at spacers
    pub fn to_column(&self) -> Vec<Option<f64>> {
        STATEMENT_ROWS
            .iter()
            .map(|row| match row {
                Value(item) => Some(self.value(*item)),
                Spacer => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    #[test]
    fn test_layout_shape() {
        let spacers: Vec<usize> = STATEMENT_ROWS
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == Spacer)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(STATEMENT_ROWS.len(), 24);
        assert_eq!(spacers, vec![1, 7, 10, 17, 19, 21]);
    }

    #[test]
    fn test_to_column_alignment() {
        let s = project(
            1_200_000.0,
            [180_000.0; 4],
            [60_000.0, 35_000.0, 85_000.0, 25_000.0, 20_000.0, 15_000.0],
            false,
        );
        let col = s.to_column();

        assert_eq!(col.len(), 24);
        assert_eq!(col[0], Some(1_200_000.0));
        assert_eq!(col[1], None);
        assert_eq!(col[6], Some(720_000.0));
        assert_eq!(col[8], Some(480_000.0));
        assert_eq!(col[11], Some(60_000.0));
        assert_eq!(col[16], Some(15_000.0));
        assert_eq!(col[18], Some(240_000.0));
        assert_eq!(col[20], Some(s.corporate_tax));
        assert_eq!(col[22], Some(s.net_profit));
        assert_eq!(col[23], Some(s.net_profit_pct));
        assert_eq!(col.iter().filter(|v| v.is_none()).count(), 6);
    }

    #[test]
    fn test_labels() {
        let b = Baseline::default_2024();
        let labels: Vec<String> = STATEMENT_ROWS.iter().map(|r| row_label(*r, &b)).collect();
        assert_eq!(labels[0], "Revenue");
        assert_eq!(labels[2], "  Supplier 1");
        assert_eq!(labels[9], "Gross Profit %");
        assert_eq!(labels[15], "Project Subscription Cost");
        assert_eq!(labels[20], "Corporate Tax");
        assert_eq!(labels[1], "");
    }

    #[test]
    fn test_row_styles() {
        assert_eq!(RowStyle::for_row(Value(Supplier(3))), RowStyle::Muted);
        assert_eq!(RowStyle::for_row(Value(GrossProfit)), RowStyle::Headline);
        assert_eq!(RowStyle::for_row(Value(NetProfit)), RowStyle::Subtotal);
        assert_eq!(RowStyle::for_row(Value(NetProfitPct)), RowStyle::Ratio);
        assert_eq!(RowStyle::for_row(Value(CorporateTax)), RowStyle::Plain);
        assert_eq!(RowStyle::for_row(Spacer), RowStyle::Plain);
        assert!(RowStyle::Plain.css().is_empty());
        assert_eq!(RowStyle::Plain.paint("EBITDA"), "EBITDA");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "line item index out of range")]
    fn test_label_rejects_unknown_supplier() {
        row_label(Value(Supplier(4)), &Baseline::default_2024());
    }
}
