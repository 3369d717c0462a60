//! Profitability trend chart: grouped amount bars plus margin lines on a secondary axis

use serde::Serialize;

use super::format::{format_currency, format_pct};
use crate::projection::{LineItem, Statement};
use crate::scenario::{ScenarioKind, ScenarioSet};

/// Bars on the primary (USD) axis
const BAR_SERIES: [(&str, LineItem, &str); 3] = [
    ("Revenue", LineItem::Revenue, "#003f5c"),
    ("Total COGS", LineItem::TotalCogs, "#bc5090"),
    ("Total OPEX", LineItem::TotalOpex, "#ffa600"),
];

/// Lines on the secondary (%) axis
const LINE_SERIES: [(&str, LineItem, &str); 2] = [
    ("Gross Profit %", LineItem::GrossProfitPct, "#1e88e5"),
    ("Net Profit %", LineItem::NetProfitPct, "#43a047"),
];

#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: String,
    /// Fixed range, if any
    pub range: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub title: String,
    pub x_title: String,
    /// One category per displayed scenario
    pub categories: Vec<String>,
    pub bars: Vec<Series>,
    pub lines: Vec<Series>,
    pub primary_axis: Axis,
    pub secondary_axis: Axis,
}

/// Total OPEX as shown on the chart: the gap between gross profit and EBITDA
fn chart_value(statement: &Statement, item: LineItem) -> f64 {
    match item {
        LineItem::TotalOpex => statement.gross_profit - statement.ebitda,
        other => statement.value(other),
    }
}

fn series(spec: &[(&str, LineItem, &str)], statements: &[&Statement]) -> Vec<Series> {
    spec.iter()
        .map(|(name, item, color)| Series {
            name: name.to_string(),
            color: color.to_string(),
            values: statements.iter().map(|s| chart_value(s, *item)).collect(),
        })
        .collect()
}

impl ChartData {
    pub fn build(set: &ScenarioSet, columns: &[ScenarioKind]) -> Self {
        let statements: Vec<&Statement> = columns.iter().map(|k| set.statement(*k)).collect();

        Self {
            title: "Profitability Trend Analysis".to_string(),
            x_title: "Year / Plan".to_string(),
            categories: columns.iter().map(|k| k.label().to_string()).collect(),
            bars: series(&BAR_SERIES, &statements),
            lines: series(&LINE_SERIES, &statements),
            primary_axis: Axis {
                title: "Amount (USD)".to_string(),
                range: None,
            },
            secondary_axis: Axis {
                title: "Percentage (%)".to_string(),
                range: Some((0.0, 50.0)),
            },
        }
    }

    /// Horizontal bar rendering; bars scaled to the largest amount
    pub fn render_text(&self, width: usize) -> String {
        let max = self
            .bars
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0_f64, f64::max);
        let name_width = self
            .bars
            .iter()
            .chain(&self.lines)
            .map(|s| s.name.len())
            .max()
            .unwrap_or(0);

        let mut out = format!("{}\n", self.title);
        for (i, category) in self.categories.iter().enumerate() {
            out.push_str(&format!("{}\n", category));
            for bar in &self.bars {
                let value = bar.values.get(i).copied().unwrap_or(0.0);
                out.push_str(&format!(
                    "  {:<nw$} {} {}\n",
                    bar.name,
                    bar_glyphs(value, max, width),
                    format_currency(value),
                    nw = name_width,
                ));
            }
            for line in &self.lines {
                let value = line.values.get(i).copied().unwrap_or(0.0);
                out.push_str(&format!("  {:<nw$} {}\n", line.name, format_pct(value), nw = name_width));
            }
        }
        out
    }
}

fn bar_glyphs(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * width as f64).round() as usize;
    "█".repeat(len.min(width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::report::ViewOptions;
    use crate::scenario::{Adjustments, ScenarioRunner};

    #[test]
    fn test_series_values() {
        let runner = ScenarioRunner::new();
        let set = runner.run(&Adjustments::default()).unwrap();
        let chart = ChartData::build(&set, &ViewOptions::default().columns());

        assert_eq!(chart.categories.len(), 4);
        assert_eq!(chart.bars[0].name, "Revenue");
        assert_eq!(chart.bars[1].values[1], 720_000.0);
        assert_eq!(chart.bars[2].name, "Total OPEX");
        assert_eq!(chart.bars[2].values[3], 240_000.0);
        assert_abs_diff_eq!(chart.lines[0].values[3], 40.0, epsilon = 1e-9);
        assert_eq!(chart.secondary_axis.range, Some((0.0, 50.0)));
    }

    #[test]
    fn test_render_scaling() {
        let runner = ScenarioRunner::new();
        let set = runner.run(&Adjustments::default()).unwrap();
        let chart = ChartData::build(&set, &[ScenarioKind::Original2025]);
        let text = chart.render_text(10);

        // Revenue is the largest bar, COGS is 60% of it
        assert!(text.contains(&format!("{} $1,200,000", "█".repeat(10))));
        assert!(text.contains(&format!("{} $720,000", "█".repeat(6))));
        assert!(text.contains("40.00%"));
    }

    #[test]
    fn test_bar_glyphs_edge_cases() {
        assert_eq!(bar_glyphs(-5.0, 10.0, 10), "");
        assert_eq!(bar_glyphs(5.0, 0.0, 10), "");
        assert_eq!(bar_glyphs(5.0, 10.0, 10).chars().count(), 5);
    }
}
