//! Scenario derivation and the runner that recomputes all four columns
//!
//! Every recomputation takes the baseline plus an immutable set of
//! percentage adjustments and evaluates all scenarios from scratch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::baseline::{Baseline, OPEX_COUNT, SUPPLIER_COUNT};
use crate::error::{ReviewError, Result};
use crate::projection::{ProjectionConfig, ProjectionEngine, ScenarioInput, Statement};

/// Smallest allowed adjustment, in percent
pub const ADJUSTMENT_MIN_PCT: i32 = -30;

/// Largest allowed adjustment, in percent
pub const ADJUSTMENT_MAX_PCT: i32 = 50;

/// Prior actual year expressed as a share of the baseline year
pub const PRIOR_YEAR_SCALE: f64 = 0.9;

/// The four statement columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    Actual2023,
    Actual2024,
    Original2025,
    Finalized2025,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::Actual2023,
        ScenarioKind::Actual2024,
        ScenarioKind::Original2025,
        ScenarioKind::Finalized2025,
    ];

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        match self {
            ScenarioKind::Actual2023 => 0,
            ScenarioKind::Actual2024 => 1,
            ScenarioKind::Original2025 => 2,
            ScenarioKind::Finalized2025 => 3,
        }
    }

    /// Column header
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::Actual2023 => "2023 Actual",
            ScenarioKind::Actual2024 => "2024 Actual",
            ScenarioKind::Original2025 => "2025 Original",
            ScenarioKind::Finalized2025 => "2025 Finalized",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage adjustments applied to the 2025 Finalized scenario
///
/// Whole percents, e.g. `10` means +10%.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    pub revenue_pct: i32,
    pub supplier_pct: [i32; SUPPLIER_COUNT],
    pub opex_pct: [i32; OPEX_COUNT],
}

impl Adjustments {
    /// Build from variable-length lists (CLI input); counts must match exactly
    pub fn from_lists(revenue_pct: i32, supplier_pct: &[i32], opex_pct: &[i32]) -> Result<Self> {
        let supplier_pct: [i32; SUPPLIER_COUNT] =
            supplier_pct.try_into().map_err(|_| ReviewError::AdjustmentCount {
                group: "supplier",
                expected: SUPPLIER_COUNT,
                actual: supplier_pct.len(),
            })?;
        let opex_pct: [i32; OPEX_COUNT] =
            opex_pct.try_into().map_err(|_| ReviewError::AdjustmentCount {
                group: "opex",
                expected: OPEX_COUNT,
                actual: opex_pct.len(),
            })?;

        Ok(Self {
            revenue_pct,
            supplier_pct,
            opex_pct,
        })
    }

    /// Read adjustments from a JSON file; missing fields default to 0
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// True when nothing is adjusted
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    /// Check every adjustment lies within the slider range
    pub fn validate(&self, baseline: &Baseline) -> Result<()> {
        check_range("Revenue", self.revenue_pct)?;
        for (name, &pct) in baseline.supplier_names.iter().zip(&self.supplier_pct) {
            check_range(name, pct)?;
        }
        for (name, &pct) in baseline.opex_names.iter().zip(&self.opex_pct) {
            check_range(name, pct)?;
        }
        Ok(())
    }

    /// Baseline scaled line by line: `base * (1 + pct)`
    pub fn apply(&self, baseline: &Baseline) -> ScenarioInput {
        let mut supplier_costs = baseline.supplier_costs;
        for (cost, &pct) in supplier_costs.iter_mut().zip(&self.supplier_pct) {
            *cost *= factor(pct);
        }
        let mut opex_costs = baseline.opex_costs;
        for (cost, &pct) in opex_costs.iter_mut().zip(&self.opex_pct) {
            *cost *= factor(pct);
        }

        ScenarioInput {
            revenue: baseline.revenue * factor(self.revenue_pct),
            supplier_costs,
            opex_costs,
            is_baseline_year: false,
        }
    }
}

fn check_range(item: &str, value: i32) -> Result<()> {
    if (ADJUSTMENT_MIN_PCT..=ADJUSTMENT_MAX_PCT).contains(&value) {
        Ok(())
    } else {
        Err(ReviewError::AdjustmentOutOfRange {
            item: item.to_string(),
            value,
            min: ADJUSTMENT_MIN_PCT,
            max: ADJUSTMENT_MAX_PCT,
        })
    }
}

/// Multiplier for a whole-percent adjustment
pub fn factor(pct: i32) -> f64 {
    1.0 + pct as f64 / 100.0
}

/// One evaluated scenario column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub kind: ScenarioKind,
    pub input: ScenarioInput,
    pub statement: Statement,
}

/// All four scenarios from one recomputation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    /// Ordered as `ScenarioKind::ALL`
    pub results: [ScenarioResult; 4],

    /// Adjustments the Finalized column was built from
    pub adjustments: Adjustments,
}

impl ScenarioSet {
    pub fn get(&self, kind: ScenarioKind) -> &ScenarioResult {
        &self.results[kind.index()]
    }

    pub fn statement(&self, kind: ScenarioKind) -> &Statement {
        &self.get(kind).statement
    }
}

/// Baseline plus engine, ready to recompute on every adjustment change
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    baseline: Baseline,
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Runner over the built-in 2024 baseline with default tax parameters
    pub fn new() -> Self {
        Self::with_baseline(Baseline::default_2024())
    }

    pub fn with_baseline(baseline: Baseline) -> Self {
        Self {
            baseline,
            engine: ProjectionEngine::default(),
        }
    }

    /// Replace the tax parameters
    pub fn with_config(mut self, config: ProjectionConfig) -> Self {
        self.engine = ProjectionEngine::new(config);
        self
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Engine input for a scenario
    pub fn input(&self, kind: ScenarioKind, adjustments: &Adjustments) -> ScenarioInput {
        match kind {
            ScenarioKind::Actual2023 => self.baseline.scaled(PRIOR_YEAR_SCALE).to_input(true),
            ScenarioKind::Actual2024 | ScenarioKind::Original2025 => self.baseline.to_input(false),
            ScenarioKind::Finalized2025 => adjustments.apply(&self.baseline),
        }
    }

    /// Validate the adjustments and evaluate all four scenarios
    pub fn run(&self, adjustments: &Adjustments) -> Result<ScenarioSet> {
        adjustments.validate(&self.baseline)?;
        Ok(self.run_unchecked(adjustments))
    }

    /// Evaluate without range checks (used by the sensitivity grid)
    pub fn run_unchecked(&self, adjustments: &Adjustments) -> ScenarioSet {
        let results = ScenarioKind::ALL.map(|kind| {
            let input = self.input(kind, adjustments);
            if input.supplier_costs.iter().chain(&input.opex_costs).any(|&c| c < 0.0) {
                log::warn!("{}: negative cost line in input", kind);
            }
            let statement = self.engine.project(&input);
            log::debug!(
                "{}: revenue={:.2} ebitda={:.2} tax={:.2} net={:.2}",
                kind,
                statement.revenue,
                statement.ebitda,
                statement.corporate_tax,
                statement.net_profit,
            );
            ScenarioResult { kind, input, statement }
        });

        ScenarioSet {
            results,
            adjustments: adjustments.clone(),
        }
    }

    /// Only the Finalized statement, for callers sweeping many adjustments
    pub fn project_finalized(&self, adjustments: &Adjustments) -> Statement {
        self.engine.project(&adjustments.apply(&self.baseline))
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
