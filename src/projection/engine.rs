//! Core projection: revenue and cost lines to subtotals, tax and net profit

use serde::{Deserialize, Serialize};

use super::statement::Statement;
use super::{DEFAULT_CORPORATE_TAX_RATE, DEFAULT_LOCAL_PER_USD, DEFAULT_TAX_THRESHOLD_LOCAL};
use crate::baseline::{OPEX_COUNT, SUPPLIER_COUNT};

/// Inputs for one scenario column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Revenue (USD)
    pub revenue: f64,

    /// Cost per supplier (USD); negative values are not rejected
    pub supplier_costs: [f64; SUPPLIER_COUNT],

    /// Cost per OPEX category (USD)
    pub opex_costs: [f64; OPEX_COUNT],

    /// Historical actual: tax already realized, not recomputed
    pub is_baseline_year: bool,
}

/// Tax parameters for a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Rate applied to EBITDA above the threshold
    pub tax_rate: f64,

    /// Threshold in local currency
    pub tax_threshold_local: f64,

    /// Local currency units per USD, used to convert the threshold
    pub local_per_usd: f64,
}

impl ProjectionConfig {
    /// Tax-free threshold in USD (≈ 102,110.28 with the defaults)
    pub fn tax_threshold_usd(&self) -> f64 {
        self.tax_threshold_local / self.local_per_usd
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_CORPORATE_TAX_RATE,
            tax_threshold_local: DEFAULT_TAX_THRESHOLD_LOCAL,
            local_per_usd: DEFAULT_LOCAL_PER_USD,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Compute every line item for one scenario
    pub fn project(&self, input: &ScenarioInput) -> Statement {
        let revenue = input.revenue;

        let total_cogs: f64 = input.supplier_costs.iter().sum();
        let gross_profit = revenue - total_cogs;
        let gross_profit_pct = pct_of_revenue(gross_profit, revenue);

        let total_opex: f64 = input.opex_costs.iter().sum();
        let ebitda = gross_profit - total_opex;

        let corporate_tax = self.corporate_tax(ebitda, input.is_baseline_year);
        let net_profit = ebitda - corporate_tax;
        let net_profit_pct = pct_of_revenue(net_profit, revenue);

        Statement {
            revenue,
            supplier_costs: input.supplier_costs,
            total_cogs,
            gross_profit,
            gross_profit_pct,
            opex_costs: input.opex_costs,
            total_opex,
            ebitda,
            corporate_tax,
            net_profit,
            net_profit_pct,
        }
    }

    /// Flat tax on EBITDA above the threshold; zero for baseline years
    fn corporate_tax(&self, ebitda: f64, is_baseline_year: bool) -> f64 {
        if is_baseline_year {
            return 0.0;
        }
        (ebitda - self.config.tax_threshold_usd()).max(0.0) * self.config.tax_rate
    }
}

/// Share of revenue in percent; 0 when revenue is 0
fn pct_of_revenue(amount: f64, revenue: f64) -> f64 {
    if revenue != 0.0 {
        amount / revenue * 100.0
    } else {
        0.0
    }
}

/// Project with the default tax parameters
pub fn project(
    revenue: f64,
    supplier_costs: [f64; SUPPLIER_COUNT],
    opex_costs: [f64; OPEX_COUNT],
    is_baseline_year: bool,
) -> Statement {
    ProjectionEngine::default().project(&ScenarioInput {
        revenue,
        supplier_costs,
        opex_costs,
        is_baseline_year,
    })
}
