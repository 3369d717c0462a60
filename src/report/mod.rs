//! Presentation of a scenario set: statement table, trend chart and key metrics
//!
//! Everything here is derived from a `ScenarioSet`; no figures are computed
//! beyond formatting, the chart's OPEX bar and the metric deltas.

mod format;
mod layout;
mod table;
mod chart;
mod metrics;

pub use format::{format_currency, format_currency_card, format_pct, format_delta};
pub use layout::{RowKind, RowStyle, STATEMENT_ROWS, row_label};
pub use table::{StatementTable, TableRow, ViewOptions};
pub use chart::{ChartData, Series, Axis};
pub use metrics::{KeyMetrics, MetricCard, delta_pct};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::baseline::Baseline;
use crate::scenario::{Adjustments, ScenarioSet};

/// Width of the longest chart bar in the text rendering
pub const CHART_WIDTH: usize = 40;

/// Everything the dashboard shows for one recomputation
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub adjustments: Adjustments,
    pub view: ViewOptions,
    pub table: StatementTable,
    pub chart: ChartData,
    pub metrics: KeyMetrics,
}

impl Dashboard {
    pub fn build(set: &ScenarioSet, baseline: &Baseline, view: ViewOptions) -> Self {
        Self {
            generated_at: Utc::now(),
            adjustments: set.adjustments.clone(),
            view,
            table: StatementTable::build(set, baseline, &view),
            chart: ChartData::build(set, &view.columns()),
            metrics: KeyMetrics::build(set),
        }
    }

    /// Table, chart and metric cards as terminal text
    pub fn render_text(&self, color: bool) -> String {
        let mut out = String::new();
        out.push_str("Yearly Financials: Actuals vs. Finalization\n\n");
        out.push_str(&self.table.render_text(color));
        out.push('\n');
        out.push_str(&self.chart.render_text(CHART_WIDTH));
        out.push('\n');
        out.push_str(&self.metrics.render_text());
        out
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
