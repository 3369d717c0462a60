//! Projection output: the computed P&L line items for one scenario

use serde::{Deserialize, Serialize};

use crate::baseline::{OPEX_COUNT, SUPPLIER_COUNT};

/// A single numeric line of the statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineItem {
    Revenue,
    /// Supplier cost, 0-based index
    Supplier(usize),
    TotalCogs,
    GrossProfit,
    GrossProfitPct,
    /// OPEX category cost, 0-based index
    Opex(usize),
    /// Not shown as a table row; derived for the chart
    TotalOpex,
    Ebitda,
    CorporateTax,
    NetProfit,
    NetProfitPct,
}

impl LineItem {
    /// Supplier and OPEX indices must address an existing line
    pub fn index_in_range(&self) -> bool {
        match self {
            LineItem::Supplier(i) => *i < SUPPLIER_COUNT,
            LineItem::Opex(i) => *i < OPEX_COUNT,
            _ => true,
        }
    }

    /// Percentage lines are ratios to revenue, everything else is USD
    pub fn is_percentage(&self) -> bool {
        matches!(self, LineItem::GrossProfitPct | LineItem::NetProfitPct)
    }
}

/// Complete statement for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub revenue: f64,
    pub supplier_costs: [f64; SUPPLIER_COUNT],
    pub total_cogs: f64,
    pub gross_profit: f64,
    /// Gross profit as % of revenue (0 when revenue is 0)
    pub gross_profit_pct: f64,
    pub opex_costs: [f64; OPEX_COUNT],
    pub total_opex: f64,
    pub ebitda: f64,
    pub corporate_tax: f64,
    pub net_profit: f64,
    /// Net profit as % of revenue (0 when revenue is 0)
    pub net_profit_pct: f64,
}

impl Statement {
    /// Value of a line item
    pub fn value(&self, item: LineItem) -> f64 {
        debug_assert!(item.index_in_range(), "line item index out of range: {:?}", item);
        match item {
            LineItem::Revenue => self.revenue,
            LineItem::Supplier(i) => self.supplier_costs.get(i).copied().unwrap_or(0.0),
            LineItem::TotalCogs => self.total_cogs,
            LineItem::GrossProfit => self.gross_profit,
            LineItem::GrossProfitPct => self.gross_profit_pct,
            LineItem::Opex(i) => self.opex_costs.get(i).copied().unwrap_or(0.0),
            LineItem::TotalOpex => self.total_opex,
            LineItem::Ebitda => self.ebitda,
            LineItem::CorporateTax => self.corporate_tax,
            LineItem::NetProfit => self.net_profit,
            LineItem::NetProfitPct => self.net_profit_pct,
        }
    }
}
