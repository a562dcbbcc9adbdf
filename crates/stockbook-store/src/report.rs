//! # Revenue Reporting
//!
//! Aggregates line-item revenue from the invoice history, grouped by
//! product code and filtered by calendar day or by month.
//!
//! ## Aggregation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Revenue Reporting                              │
//! │                                                                     │
//! │  invoices ──filter by day/month──► line items                       │
//! │                                        │                            │
//! │                                        ▼                            │
//! │                       HashMap<code, Money> (+= per line)            │
//! │                                        │                            │
//! │                 ┌──────────────────────┴──────────────────┐         │
//! │                 ▼                                         ▼         │
//! │        sorted_revenue(order)                    top_products(rank)  │
//! │        (code, Money) pairs,                     RevenueRow with     │
//! │        revenue then code                        names from catalog  │
//! │                                                                     │
//! │  "as of" is ALWAYS an explicit argument — reports never read the    │
//! │  system clock, so any month is reproducible in tests.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//! HashMap iteration order is unspecified, so every ranked output is
//! sorted by revenue with the product code as tiebreaker.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stockbook_core::error::StoreResult;
use stockbook_core::{Invoice, Money, ValidationError};

use crate::store::Store;

// =============================================================================
// Report Types
// =============================================================================

/// Sort direction for revenue listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Lowest revenue first.
    Ascending,
    /// Highest revenue first.
    Descending,
}

/// Which end of the revenue ranking a report shows.
///
/// Independent of [`SortOrder`] on purpose: "Top 5" always means the five
/// HIGHEST earners regardless of how a caller likes lists sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ranking {
    /// Highest-revenue products first.
    Top,
    /// Lowest-revenue products first.
    Bottom,
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ranking::Top => write!(f, "Top"),
            Ranking::Bottom => write!(f, "Bottom"),
        }
    }
}

/// One row of a ranked revenue report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRow {
    pub code: String,
    pub name: String,
    pub revenue: Money,
}

// =============================================================================
// Reporting Operations
// =============================================================================

impl Store {
    /// Revenue per product code across invoices dated exactly `date`.
    pub fn revenue_by_product(&self, date: NaiveDate) -> HashMap<String, Money> {
        let result = accumulate(self.invoices(), |invoice| invoice.date == date);
        debug!(date = %date, products = result.len(), "Computed daily revenue");
        result
    }

    /// Revenue per product code across invoices in the given month and year.
    ///
    /// `month` must be 1-12.
    pub fn revenue_by_store(&self, month: u32, year: i32) -> StoreResult<HashMap<String, Money>> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::OutOfRange {
                field: "month".to_string(),
                min: 1,
                max: 12,
            }
            .into());
        }

        let result = accumulate(self.invoices(), |invoice| {
            invoice.date.month() == month && invoice.date.year() == year
        });
        debug!(month, year, products = result.len(), "Computed monthly revenue");
        Ok(result)
    }

    /// Revenue for `as_of`'s month, sorted per `order`.
    ///
    /// Ties sort by product code so the output is deterministic.
    pub fn sorted_revenue(&self, order: SortOrder, as_of: NaiveDate) -> Vec<(String, Money)> {
        let revenue = accumulate(self.invoices(), |invoice| {
            invoice.date.month() == as_of.month() && invoice.date.year() == as_of.year()
        });

        let mut entries: Vec<(String, Money)> = revenue.into_iter().collect();
        entries.sort_by(|a, b| match order {
            SortOrder::Ascending => a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)),
            SortOrder::Descending => b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)),
        });
        entries
    }

    /// The first `count` products from one end of the current-month
    /// revenue ranking, with names resolved from the catalog.
    ///
    /// A ranked code whose product has since been deleted still consumes
    /// its rank slot but produces no row.
    pub fn top_products(&self, ranking: Ranking, count: usize, as_of: NaiveDate) -> Vec<RevenueRow> {
        let order = match ranking {
            Ranking::Top => SortOrder::Descending,
            Ranking::Bottom => SortOrder::Ascending,
        };

        self.sorted_revenue(order, as_of)
            .into_iter()
            .take(count)
            .filter_map(|(code, revenue)| {
                self.get_product(&code).map(|product| RevenueRow {
                    code,
                    name: product.name.clone(),
                    revenue,
                })
            })
            .collect()
    }
}

/// Sums line revenue per product code across the invoices that pass `keep`.
fn accumulate<F>(invoices: &[Invoice], keep: F) -> HashMap<String, Money>
where
    F: Fn(&Invoice) -> bool,
{
    let mut revenue: HashMap<String, Money> = HashMap::new();
    for invoice in invoices.iter().filter(|i| keep(i)) {
        for line in &invoice.lines {
            *revenue.entry(line.product_code.clone()).or_default() += line.total();
        }
    }
    revenue
}

// =============================================================================
// Unit Tests
// =============================================================================
