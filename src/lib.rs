//! Financial Review - yearly P&L projection for actuals vs. a finalized plan
//!
//! This library provides:
//! - Projection of revenue and cost lines into subtotals, corporate tax and net profit
//! - Derivation of the 2023/2024 actual and 2025 original/finalized scenarios
//! - Percentage adjustments for the finalized plan, validated to the slider range
//! - Statement table, trend chart data and key metric cards for display

pub mod error;
pub mod baseline;
pub mod projection;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::ReviewError;
pub use baseline::Baseline;
pub use projection::{ProjectionEngine, ProjectionConfig, ScenarioInput, Statement, LineItem};
pub use scenario::{Adjustments, ScenarioKind, ScenarioRunner, ScenarioSet};
pub use report::{Dashboard, ViewOptions};
