//! Financial Review CLI
//!
//! Renders the comparative P&L statement, trend chart and key metrics for the
//! 2025 finalized plan under the given percentage adjustments.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;

use financial_review::{
    baseline::load_baseline,
    Adjustments, Baseline, Dashboard, ScenarioRunner, ViewOptions,
};

#[derive(Parser)]
#[command(name = "financial-review")]
#[command(about = "Yearly financials: actuals vs. finalization")]
struct Cli {
    /// Revenue change for 2025 Finalized, whole percent in [-30, 50]
    #[arg(long, env = "REVIEW_REVENUE_PCT", allow_negative_numbers = true)]
    revenue_pct: Option<i32>,

    /// Per-supplier cost changes, four comma-separated percents
    #[arg(long, env = "REVIEW_SUPPLIER_PCT", value_delimiter = ',', allow_hyphen_values = true)]
    supplier_pct: Option<Vec<i32>>,

    /// Per-OPEX-line cost changes, six comma-separated percents
    #[arg(long, env = "REVIEW_OPEX_PCT", value_delimiter = ',', allow_hyphen_values = true)]
    opex_pct: Option<Vec<i32>>,

    /// JSON file with adjustments; flags take precedence
    #[arg(long)]
    adjustments: Option<PathBuf>,

    /// Baseline CSV (category,name,amount); built-in 2024 figures otherwise
    #[arg(long)]
    baseline: Option<PathBuf>,

    /// Hide the 2023 Actual column
    #[arg(long)]
    hide_2023: bool,

    /// Hide the 2024 Actual column
    #[arg(long)]
    hide_2024: bool,

    /// Print the dashboard as JSON
    #[arg(long)]
    json: bool,

    /// Also write the formatted statement table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Disable row highlighting (also honours NO_COLOR)
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn resolve_adjustments(&self) -> Result<Adjustments> {
        let base = match &self.adjustments {
            Some(path) => Adjustments::from_json_path(path)
                .with_context(|| format!("reading adjustments from {}", path.display()))?,
            None => Adjustments::default(),
        };

        let supplier_pct = self.supplier_pct.clone().unwrap_or_else(|| base.supplier_pct.to_vec());
        let opex_pct = self.opex_pct.clone().unwrap_or_else(|| base.opex_pct.to_vec());
        let revenue_pct = self.revenue_pct.unwrap_or(base.revenue_pct);

        Ok(Adjustments::from_lists(revenue_pct, &supplier_pct, &opex_pct)?)
    }

    fn view(&self) -> ViewOptions {
        ViewOptions {
            show_2023: !self.hide_2023,
            show_2024: !self.hide_2024,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let baseline = match &cli.baseline {
        Some(path) => load_baseline(path)
            .with_context(|| format!("loading baseline from {}", path.display()))?,
        None => Baseline::default_2024(),
    };
    let adjustments = cli.resolve_adjustments()?;
    log::info!("Adjustments: {:?}", adjustments);

    let runner = ScenarioRunner::with_baseline(baseline);
    let set = runner.run(&adjustments)?;
    let dashboard = Dashboard::build(&set, runner.baseline(), cli.view());

    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        dashboard.table.write_csv(file)?;
        log::info!("Statement written to {}", path.display());
    }

    if cli.json {
        println!("{}", dashboard.to_json()?);
    } else {
        print!("{}", dashboard.render_text(!cli.no_color));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_list_values() {
        let cli = Cli::try_parse_from([
            "financial-review",
            "--revenue-pct",
            "-10",
            "--supplier-pct",
            "-10,0,0,0",
            "--opex-pct",
            "-5,0,0,0,0,-30",
        ])
        .unwrap();
        assert_eq!(cli.revenue_pct, Some(-10));
        assert_eq!(cli.supplier_pct, Some(vec![-10, 0, 0, 0]));
        assert_eq!(cli.opex_pct, Some(vec![-5, 0, 0, 0, 0, -30]));

        let adj = cli.resolve_adjustments().unwrap();
        assert_eq!(adj.supplier_pct, [-10, 0, 0, 0]);
        assert_eq!(adj.opex_pct[5], -30);
    }

    #[test]
    fn test_flags_override_adjustments_file() {
        let path = std::env::temp_dir().join(format!("review-adjustments-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"revenue_pct": 20, "supplier_pct": [5, 5, 5, 5]}"#).unwrap();

        let cli = Cli::try_parse_from([
            "financial-review",
            "--adjustments",
            path.to_str().unwrap(),
            "--revenue-pct",
            "-10",
        ])
        .unwrap();
        let adj = cli.resolve_adjustments().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(adj.revenue_pct, -10);
        assert_eq!(adj.supplier_pct, [5, 5, 5, 5]);
        assert_eq!(adj.opex_pct, [0; 6]);
    }

    #[test]
    fn test_wrong_list_length_rejected() {
        let cli = Cli::try_parse_from(["financial-review", "--supplier-pct", "-10,0"]).unwrap();
        assert!(cli.resolve_adjustments().is_err());
    }
}
