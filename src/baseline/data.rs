//! Baseline line items: revenue, per-supplier COGS and the named OPEX lines

use serde::{Deserialize, Serialize};

use crate::projection::ScenarioInput;

/// Number of supplier (COGS) lines
pub const SUPPLIER_COUNT: usize = 4;

/// Number of operating expense lines
pub const OPEX_COUNT: usize = 6;

/// One year of placeholder figures with the names shown in the statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Annual revenue (USD)
    pub revenue: f64,

    /// Supplier display names, in statement order
    pub supplier_names: [String; SUPPLIER_COUNT],

    /// Cost per supplier (USD)
    pub supplier_costs: [f64; SUPPLIER_COUNT],

    /// OPEX category names, in statement order
    pub opex_names: [String; OPEX_COUNT],

    /// Cost per OPEX category (USD)
    pub opex_costs: [f64; OPEX_COUNT],
}

impl Baseline {
    /// The hard-coded 2024 figures
    pub fn default_2024() -> Self {
        Self {
            revenue: 1_200_000.0,
            supplier_names: [
                "Supplier 1".to_string(),
                "Supplier 2".to_string(),
                "Supplier 3".to_string(),
                "Supplier 4".to_string(),
            ],
            supplier_costs: [180_000.0; SUPPLIER_COUNT],
            opex_names: [
                "Sales and Branding Expenses".to_string(),
                "Licenses/Subscriptions".to_string(),
                "Management Salaries".to_string(),
                "Legal and Professional Charges".to_string(),
                "Project Subscription Cost".to_string(),
                "Other Admin Expenses".to_string(),
            ],
            opex_costs: [60_000.0, 35_000.0, 85_000.0, 25_000.0, 20_000.0, 15_000.0],
        }
    }

    /// Copy with revenue and every cost line multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            revenue: self.revenue * factor,
            supplier_costs: self.supplier_costs.map(|c| c * factor),
            opex_costs: self.opex_costs.map(|c| c * factor),
            ..self.clone()
        }
    }

    /// Engine input for these figures
    pub fn to_input(&self, is_baseline_year: bool) -> ScenarioInput {
        ScenarioInput {
            revenue: self.revenue,
            supplier_costs: self.supplier_costs,
            opex_costs: self.opex_costs,
            is_baseline_year,
        }
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::default_2024()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_2024_totals() {
        let b = Baseline::default_2024();
        assert_eq!(b.supplier_costs.iter().sum::<f64>(), 720_000.0);
        assert_eq!(b.opex_costs.iter().sum::<f64>(), 240_000.0);
        assert_eq!(b.opex_names[2], "Management Salaries");
    }

    #[test]
    fn test_scaled_keeps_names() {
        let b = Baseline::default_2024().scaled(0.9);
        assert_relative_eq!(b.revenue, 1_080_000.0, max_relative = 1e-12);
        assert_relative_eq!(b.supplier_costs[0], 162_000.0, max_relative = 1e-12);
        assert_relative_eq!(b.opex_costs[2], 76_500.0, max_relative = 1e-12);
        assert_eq!(b.supplier_names[3], "Supplier 4");
    }
}
