//! Projection engine: scenario inputs to P&L line items

mod engine;
mod statement;

pub use engine::{ProjectionEngine, ProjectionConfig, ScenarioInput, project};
pub use statement::{Statement, LineItem};

// ============================================================================
// Corporate Tax Defaults
// ============================================================================
// Flat rate on EBITDA above a threshold set in local currency (AED) and
// converted to USD at the pegged rate. No brackets, no loss carryforward.

/// Corporate tax rate applied above the threshold (9%)
pub const DEFAULT_CORPORATE_TAX_RATE: f64 = 0.09;

/// Tax-free profit threshold in local currency (AED 375,000)
pub const DEFAULT_TAX_THRESHOLD_LOCAL: f64 = 375_000.0;

/// Local currency units per USD
pub const DEFAULT_LOCAL_PER_USD: f64 = 3.6725;
