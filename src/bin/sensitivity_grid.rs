//! Sweep revenue and cost adjustments over the full slider range
//!
//! Every (revenue %, cost %) pair projects the 2025 Finalized scenario with the
//! cost change applied uniformly to all supplier and OPEX lines. Output is one
//! CSV row per grid point.
//!
//! Usage: sensitivity_grid [--step N] [--output PATH] [--baseline PATH]

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use financial_review::{
    baseline::load_baseline,
    scenario::{ADJUSTMENT_MAX_PCT, ADJUSTMENT_MIN_PCT},
    Adjustments, Baseline, ScenarioRunner,
};

#[derive(Parser)]
#[command(name = "sensitivity_grid")]
struct Args {
    /// Grid step in whole percent
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(1..=80))]
    step: i32,

    /// Output CSV path
    #[arg(long, default_value = "sensitivity_grid.csv")]
    output: PathBuf,

    /// Baseline CSV; built-in 2024 figures otherwise
    #[arg(long)]
    baseline: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct GridRow {
    revenue_pct: i32,
    cost_pct: i32,
    revenue: f64,
    ebitda: f64,
    corporate_tax: f64,
    net_profit: f64,
    net_profit_pct: f64,
}

fn grid_points(step: i32) -> Vec<i32> {
    (ADJUSTMENT_MIN_PCT..=ADJUSTMENT_MAX_PCT).step_by(step as usize).collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let baseline = match &args.baseline {
        Some(path) => load_baseline(path)
            .with_context(|| format!("loading baseline from {}", path.display()))?,
        None => Baseline::default_2024(),
    };
    let runner = ScenarioRunner::with_baseline(baseline);

    let points = grid_points(args.step);
    let pairs: Vec<(i32, i32)> = points
        .iter()
        .flat_map(|&r| points.iter().map(move |&c| (r, c)))
        .collect();

    let start = Instant::now();
    println!("Projecting {} grid points...", pairs.len());

    // Run projections in parallel
    let rows: Vec<GridRow> = pairs
        .par_iter()
        .map(|&(revenue_pct, cost_pct)| {
            let adjustments = Adjustments {
                revenue_pct,
                supplier_pct: [cost_pct; 4],
                opex_pct: [cost_pct; 6],
            };
            let s = runner.project_finalized(&adjustments);
            GridRow {
                revenue_pct,
                cost_pct,
                revenue: s.revenue,
                ebitda: s.ebitda,
                corporate_tax: s.corporate_tax,
                net_profit: s.net_profit,
                net_profit_pct: s.net_profit_pct,
            }
        })
        .collect();

    println!("Projections complete in {:?}", start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let best = rows
        .iter()
        .max_by(|a, b| a.net_profit.total_cmp(&b.net_profit));
    if let Some(best) = best {
        println!(
            "Best net profit ${:.2} at revenue {:+}% / cost {:+}%",
            best.net_profit, best.revenue_pct, best.cost_pct
        );
    }
    println!("Grid written to: {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_points_cover_range() {
        let pts = grid_points(5);
        assert_eq!(pts.first(), Some(&-30));
        assert_eq!(pts.last(), Some(&50));
        assert_eq!(pts.len(), 17);
        assert_eq!(grid_points(1).len(), 81);
    }
}
