//! # Table Rendering
//!
//! Plain-text tables for the catalog and the ranked revenue reports.
//!
//! Renderers build and return a `String`; they never print. The terminal
//! app owns stdout, which keeps every layout assertable in tests.
//!
//! ## Layout
//! ```text
//! Product List:
//! ------------------------------------------------------------------------------------------
//! Code       Name                 Selling    Purchase   Quantity   Production      Expiration
//! ------------------------------------------------------------------------------------------
//! MILK-1L    Whole Milk 1L        $12.50     $9.00      40         2025-05-01      2025-06-20
//! ------------------------------------------------------------------------------------------
//! ```

use stockbook_core::{Product, DATE_FORMAT};

use crate::report::RevenueRow;

/// Message used when the catalog has nothing to show.
const NO_PRODUCTS_MESSAGE: &str = "No products available.";

/// Message used when a revenue report has no rows.
const NO_DATA_MESSAGE: &str = "No data available.";

/// Column rule widths match the widest row of each table.
const PRODUCT_RULE_WIDTH: usize = 90;
const REVENUE_RULE_WIDTH: usize = 45;

// =============================================================================
// Product Table
// =============================================================================

/// Renders the product catalog as a fixed-width table.
///
/// Column widths are 10/20/10/10/10/15/15. Prices render through `Money`
/// (`$X.YY`), dates as `YYYY-MM-DD`. An empty catalog renders as a single
/// "no products" line.
pub fn render_product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("{NO_PRODUCTS_MESSAGE}\n");
    }

    let rule = "-".repeat(PRODUCT_RULE_WIDTH);
    let mut out = String::new();

    out.push_str("Product List:\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<10} {:<20} {:<10} {:<10} {:<10} {:<15} {:<15}\n",
        "Code", "Name", "Selling", "Purchase", "Quantity", "Production", "Expiration"
    ));
    out.push_str(&rule);
    out.push('\n');

    for product in products {
        out.push_str(&format!(
            "{:<10} {:<20} {:<10} {:<10} {:<10} {:<15} {:<15}\n",
            product.code,
            product.name,
            product.selling_price().to_string(),
            product.purchase_price().to_string(),
            product.quantity,
            product.production_date.format(DATE_FORMAT).to_string(),
            product.expiration_date.format(DATE_FORMAT).to_string(),
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

// =============================================================================
// Revenue Table
// =============================================================================

/// Renders a ranked revenue report under the given title
/// (e.g. `"Top 5 Products:"`).
///
/// Column widths are 10/20/15. Empty input renders as a single
/// "no data" line.
pub fn render_revenue_table(title: &str, rows: &[RevenueRow]) -> String {
    if rows.is_empty() {
        return format!("{NO_DATA_MESSAGE}\n");
    }

    let rule = "-".repeat(REVENUE_RULE_WIDTH);
    let mut out = String::new();

    out.push_str(title);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<10} {:<20} {:<15}\n",
        "Code", "Name", "Total Revenue"
    ));
    out.push_str(&rule);
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:<10} {:<20} {:<15}\n",
            row.code,
            row.name,
            row.revenue.to_string(),
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockbook_core::Money;

    fn test_product() -> Product {
        Product {
            code: "MILK-1L".to_string(),
            name: "Whole Milk 1L".to_string(),
            selling_price_cents: 1250,
            purchase_price_cents: 900,
            quantity: 40,
            production_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
        }
    }

    #[test]
    fn test_empty_product_table() {
        assert_eq!(render_product_table(&[]), "No products available.\n");
    }

    #[test]
    fn test_product_table_layout() {
        let table = render_product_table(&[test_product()]);

        assert!(table.starts_with("Product List:\n"));
        assert!(table.contains(&"-".repeat(90)));
        assert!(table.contains("Code"));
        assert!(table.contains("Expiration"));
        // Row values render through Money and the date format
        assert!(table.contains("MILK-1L"));
        assert!(table.contains("$12.50"));
        assert!(table.contains("$9.00"));
        assert!(table.contains("2025-06-20"));
        // Fixed-width: the name column pads to 20
        assert!(table.contains("MILK-1L    Whole Milk 1L        $12.50"));
    }

    #[test]
    fn test_empty_revenue_table() {
        assert_eq!(
            render_revenue_table("Top 5 Products:", &[]),
            "No data available.\n"
        );
    }

    #[test]
    fn test_revenue_table_layout() {
        let rows = vec![RevenueRow {
            code: "P1".to_string(),
            name: "Whole Milk".to_string(),
            revenue: Money::from_cents(10_000),
        }];
        let table = render_revenue_table("Top 5 Products:", &rows);

        assert!(table.starts_with("Top 5 Products:\n"));
        assert!(table.contains(&"-".repeat(45)));
        assert!(table.contains("Total Revenue"));
        assert!(table.contains("P1         Whole Milk           $100.00"));
    }
}
