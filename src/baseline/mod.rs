//! Baseline (2024) figures every scenario is derived from

mod data;
pub mod loader;

pub use data::{Baseline, SUPPLIER_COUNT, OPEX_COUNT};
pub use loader::{load_baseline, load_baseline_from_reader};
