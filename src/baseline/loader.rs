//! Load baseline figures from a CSV file
//!
//! Expected columns: `category,name,amount` where category is one of
//! `revenue`, `supplier` or `opex`. Supplier and OPEX rows keep file order.

use super::{Baseline, OPEX_COUNT, SUPPLIER_COUNT};
use crate::error::{ReviewError, Result};
use csv::Reader;
use std::path::Path;

/// Default location of the baseline file when one is used
pub const DEFAULT_BASELINE_PATH: &str = "data/baseline_2024.csv";

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    category: String,
    name: String,
    amount: f64,
}

/// Rows grouped by category, before the counts are checked
#[derive(Default)]
struct Collected {
    revenue: Option<f64>,
    suppliers: Vec<(String, f64)>,
    opex: Vec<(String, f64)>,
}

impl Collected {
    fn push(&mut self, row: CsvRow) -> Result<()> {
        match row.category.trim().to_ascii_lowercase().as_str() {
            "revenue" => {
                if self.revenue.is_some() {
                    return Err(ReviewError::Baseline("more than one revenue row".into()));
                }
                self.revenue = Some(row.amount);
            }
            "supplier" => self.suppliers.push((row.name, row.amount)),
            "opex" => self.opex.push((row.name, row.amount)),
            other => {
                return Err(ReviewError::Baseline(format!("unknown category: {}", other)));
            }
        }
        Ok(())
    }

    fn into_baseline(self) -> Result<Baseline> {
        let revenue = self
            .revenue
            .ok_or_else(|| ReviewError::Baseline("missing revenue row".into()))?;
        let (supplier_names, supplier_costs) = split_lines::<SUPPLIER_COUNT>("supplier", self.suppliers)?;
        let (opex_names, opex_costs) = split_lines::<OPEX_COUNT>("opex", self.opex)?;

        Ok(Baseline {
            revenue,
            supplier_names,
            supplier_costs,
            opex_names,
            opex_costs,
        })
    }
}

fn split_lines<const N: usize>(
    category: &str,
    lines: Vec<(String, f64)>,
) -> Result<([String; N], [f64; N])> {
    if lines.len() != N {
        return Err(ReviewError::Baseline(format!(
            "expected {} {} rows, found {}",
            N,
            category,
            lines.len()
        )));
    }

    let (names, amounts): (Vec<String>, Vec<f64>) = lines.into_iter().unzip();
    let names: [String; N] = names
        .try_into()
        .map_err(|_| ReviewError::Baseline(format!("bad {} rows", category)))?;
    let amounts: [f64; N] = amounts
        .try_into()
        .map_err(|_| ReviewError::Baseline(format!("bad {} rows", category)))?;
    Ok((names, amounts))
}

/// Load a baseline from a CSV file
pub fn load_baseline<P: AsRef<Path>>(path: P) -> Result<Baseline> {
    let path = path.as_ref();
    log::info!("Loading baseline from {}", path.display());
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load a baseline from any reader (e.g., string buffer)
pub fn load_baseline_from_reader<R: std::io::Read>(reader: R) -> Result<Baseline> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Baseline> {
    let mut collected = Collected::default();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        collected.push(row)?;
    }
    collected.into_baseline()
}

impl Baseline {
    /// Load from the default location (data/baseline_2024.csv)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(DEFAULT_BASELINE_PATH))
    }

    /// Load from a specific file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        load_baseline(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
category,name,amount
revenue,Revenue,1200000
supplier,Supplier 1,180000
supplier,Supplier 2,180000
supplier,Supplier 3,180000
supplier,Supplier 4,180000
opex,Sales and Branding Expenses,60000
opex,Licenses/Subscriptions,35000
opex,Management Salaries,85000
opex,Legal and Professional Charges,25000
opex,Project Subscription Cost,20000
opex,Other Admin Expenses,15000
";

    #[test]
    fn test_load_matches_default() {
        let baseline = load_baseline_from_reader(SAMPLE.as_bytes()).expect("sample should load");
        assert_eq!(baseline, Baseline::default_2024());
    }

    #[test]
    fn test_default_file_matches_in_memory() {
        let baseline = Baseline::from_csv().expect("data/baseline_2024.csv should load");
        assert_eq!(baseline, Baseline::default_2024());
    }

    #[test]
    fn test_missing_opex_row() {
        let truncated: String = SAMPLE.lines().take(11).collect::<Vec<_>>().join("\n");
        let err = load_baseline_from_reader(truncated.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("expected 6 opex rows, found 5"), "{}", err);
    }

    #[test]
    fn test_unknown_category() {
        let csv = "category,name,amount\nrevenue,Revenue,10\ndepreciation,Plant,5\n";
        let err = load_baseline_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ReviewError::Baseline(_)));
    }

    #[test]
    fn test_bad_amount_is_csv_error() {
        let csv = "category,name,amount\nrevenue,Revenue,lots\n";
        let err = load_baseline_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ReviewError::Csv(_)));
    }
}
