//! Key metric cards: 2025 Finalized against 2025 Original

use serde::Serialize;

use super::format::{format_currency_card, format_delta, format_pct};
use crate::scenario::{ScenarioKind, ScenarioSet};

const COLOR_BLUE: &str = "#1565c0";
const COLOR_GREEN: &str = "#43a047";
const COLOR_RED: &str = "#d81b60";
const COLOR_GREY: &str = "#6c757d";

#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub label_color: String,
    pub value: String,
    /// Percent change; `None` when the original value is zero
    pub delta: Option<f64>,
    pub delta_text: String,
    pub delta_color: String,
}

impl MetricCard {
    fn new(label: &str, label_color: &str, value: String, delta: Option<f64>) -> Self {
        let delta_text = format_delta(delta);
        let delta_color = if delta.is_none() {
            COLOR_GREY
        } else if delta_text.contains('+') {
            COLOR_GREEN
        } else {
            COLOR_RED
        };
        Self {
            label: label.to_string(),
            label_color: label_color.to_string(),
            value,
            delta,
            delta_text,
            delta_color: delta_color.to_string(),
        }
    }
}

/// `(final / original - 1) * 100`, undefined for a zero original
pub fn delta_pct(final_value: f64, original: f64) -> Option<f64> {
    if original == 0.0 {
        return None;
    }
    let delta = (final_value / original - 1.0) * 100.0;
    delta.is_finite().then_some(delta)
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyMetrics {
    pub title: String,
    pub cards: Vec<MetricCard>,
}

impl KeyMetrics {
    pub fn build(set: &ScenarioSet) -> Self {
        let fin = set.statement(ScenarioKind::Finalized2025);
        let org = set.statement(ScenarioKind::Original2025);

        let cards = vec![
            MetricCard::new(
                "Revenue",
                COLOR_BLUE,
                format_currency_card(fin.revenue),
                Some(set.adjustments.revenue_pct as f64),
            ),
            MetricCard::new(
                "Net Profit",
                COLOR_GREEN,
                format_currency_card(fin.net_profit),
                delta_pct(fin.net_profit, org.net_profit),
            ),
            MetricCard::new(
                "Net Profit Margin",
                COLOR_GREEN,
                format_pct(fin.net_profit_pct),
                delta_pct(fin.net_profit_pct, org.net_profit_pct),
            ),
            MetricCard::new(
                "Corporate Tax",
                COLOR_RED,
                format_currency_card(fin.corporate_tax),
                delta_pct(fin.corporate_tax, org.corporate_tax),
            ),
        ];

        Self {
            title: "2025 Finalized Key Metrics".to_string(),
            cards,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n", self.title);
        for card in &self.cards {
            out.push_str(&format!(
                "  {:<18} {:>14}  {}\n",
                card.label, card.value, card.delta_text
            ));
        }
        out
    }
}
