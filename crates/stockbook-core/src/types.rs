//! # Domain Types
//!
//! Core domain types used throughout Stockbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │    Invoice      │   │    LineItem     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  code (unique)  │   │  code           │   │  product_code   │   │
//! │  │  name           │   │  date           │   │  quantity       │   │
//! │  │  selling_price  │   │  lines ─────────┼──►│  total_cents    │   │
//! │  │  purchase_price │   └─────────────────┘   └─────────────────┘   │
//! │  │  quantity       │                                               │
//! │  │  prod/exp dates │   ┌─────────────────┐                         │
//! │  └─────────────────┘   │  ProductChange  │  one enum variant per   │
//! │                        │  (update enum)  │  updatable field        │
//! │                        └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Shape For Invoice Contents
//! An invoice carries exactly one representation of what was sold: the
//! ordered `lines` sequence. Availability validation and stock deduction
//! both read it, so they can never disagree about an invoice's contents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::error::ValidationError;
use crate::validation::{
    parse_date, parse_money, parse_quantity, validate_name, validate_price_cents, ValidationResult,
};

// =============================================================================
// Product
// =============================================================================

/// A sellable catalog item identified by a unique `code`.
///
/// Uniqueness of `code` is enforced by the store aggregate, not here;
/// a `Product` value on its own is just a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier, unique within a store's catalog.
    pub code: String,

    /// Display name shown in tables and reports.
    pub name: String,

    /// Selling price in cents. Mutable: markdowns and updates rewrite it.
    pub selling_price_cents: i64,

    /// Purchase (cost) price in cents.
    pub purchase_price_cents: i64,

    /// Units currently in stock. Expected >= 0; invoice validation keeps
    /// it there, construction does not.
    pub quantity: i64,

    /// When the product was produced.
    pub production_date: NaiveDate,

    /// When the product expires. Drives the markdown policy.
    pub expiration_date: NaiveDate,
}

impl Product {
    /// Creates a product from textual dates in the fixed `YYYY-MM-DD` format.
    ///
    /// Fails with [`ValidationError::InvalidFormat`] when either date does
    /// not match. Callers holding already-parsed `NaiveDate` values can
    /// build the struct directly; every field is public.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::Product;
    ///
    /// let product = Product::new(
    ///     "MILK-1L", "Whole Milk 1L", 1250, 900, 40,
    ///     "2025-05-01", "2025-06-01",
    /// ).unwrap();
    ///
    /// assert_eq!(product.quantity, 40);
    /// assert!(Product::new("X", "Y", 1, 1, 1, "05/01/2025", "2025-06-01").is_err());
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        selling_price_cents: i64,
        purchase_price_cents: i64,
        quantity: i64,
        production_date: &str,
        expiration_date: &str,
    ) -> ValidationResult<Self> {
        Ok(Product {
            code: code.into(),
            name: name.into(),
            selling_price_cents,
            purchase_price_cents,
            quantity,
            production_date: parse_date("production_date", production_date)?,
            expiration_date: parse_date("expiration_date", expiration_date)?,
        })
    }

    /// Returns the selling price as Money.
    #[inline]
    pub fn selling_price(&self) -> Money {
        Money::from_cents(self.selling_price_cents)
    }

    /// Returns the purchase price as Money.
    #[inline]
    pub fn purchase_price(&self) -> Money {
        Money::from_cents(self.purchase_price_cents)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product-quantity-revenue entry within an invoice.
///
/// `total_cents` is a snapshot of the line's revenue at sale time; it is
/// NOT re-derived from the catalog price, which may change later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Code of the product sold.
    pub product_code: String,

    /// Units sold.
    pub quantity: i64,

    /// Revenue for this line in cents (frozen at sale time).
    pub total_cents: i64,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(product_code: impl Into<String>, quantity: i64, total_cents: i64) -> Self {
        LineItem {
            product_code: product_code.into(),
            quantity,
            total_cents,
        }
    }

    /// Returns the line revenue as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A dated record of products sold and their sale revenue.
///
/// Never mutated or deleted after the store accepts it; revenue reports
/// treat the invoice history as append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice identifier.
    pub code: String,

    /// Calendar day of the sale. Reports group by this.
    pub date: NaiveDate,

    /// Ordered line items. The single source of truth for both
    /// availability validation and stock deduction.
    pub lines: Vec<LineItem>,
}

impl Invoice {
    /// Creates an empty invoice from textual date in `YYYY-MM-DD` format.
    ///
    /// Fails with [`ValidationError::InvalidFormat`] on a date mismatch.
    pub fn new(code: impl Into<String>, date: &str) -> ValidationResult<Self> {
        Ok(Invoice {
            code: code.into(),
            date: parse_date("invoice_date", date)?,
            lines: Vec::new(),
        })
    }

    /// Builder-style: attaches line items to the invoice.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::{Invoice, LineItem};
    ///
    /// let invoice = Invoice::new("INV-001", "2025-06-01")
    ///     .unwrap()
    ///     .with_lines(vec![LineItem::new("P1", 3, 3750)]);
    ///
    /// assert_eq!(invoice.lines.len(), 1);
    /// ```
    pub fn with_lines(mut self, lines: Vec<LineItem>) -> Self {
        self.lines = lines;
        self
    }

    /// Sums line revenue across the whole invoice.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.total())
    }
}

// =============================================================================
// Product Change
// =============================================================================

/// One typed change to an updatable product field.
///
/// ## Why An Enum?
/// A free-form field-name/value map would push "does this field exist"
/// and "is this value the right type" checks into the update loop, where
/// a bad entry could land after good entries were already applied. The
/// enum moves both checks to [`ProductChange::parse`], so a change batch
/// either parses completely or touches nothing.
///
/// `code` is deliberately NOT updatable: it is the identity the store
/// indexes by. Renaming a product's code would silently break the
/// unique-code invariant and the merge-on-add behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProductChange {
    Name(String),
    SellingPrice(i64),
    PurchasePrice(i64),
    Quantity(i64),
    ProductionDate(NaiveDate),
    ExpirationDate(NaiveDate),
}

impl ProductChange {
    /// Parses a textual field-name/value pair into a typed change.
    ///
    /// Unknown field names fail with [`ValidationError::UnknownField`];
    /// ill-typed values fail with the matching validation error. Nothing
    /// is applied until every pair in a batch has parsed.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::ProductChange;
    ///
    /// let change = ProductChange::parse("selling_price", "12.50").unwrap();
    /// assert_eq!(change, ProductChange::SellingPrice(1250));
    ///
    /// assert!(ProductChange::parse("bogus_field", "1").is_err());
    /// ```
    pub fn parse(field: &str, value: &str) -> ValidationResult<Self> {
        match field {
            "name" => {
                validate_name(value)?;
                Ok(ProductChange::Name(value.trim().to_string()))
            }
            "selling_price" => {
                let cents = parse_money("selling_price", value)?;
                validate_price_cents(cents)?;
                Ok(ProductChange::SellingPrice(cents))
            }
            "purchase_price" => {
                let cents = parse_money("purchase_price", value)?;
                validate_price_cents(cents)?;
                Ok(ProductChange::PurchasePrice(cents))
            }
            "quantity" => Ok(ProductChange::Quantity(parse_quantity("quantity", value)?)),
            "production_date" => Ok(ProductChange::ProductionDate(parse_date(
                "production_date",
                value,
            )?)),
            "expiration_date" => Ok(ProductChange::ExpirationDate(parse_date(
                "expiration_date",
                value,
            )?)),
            other => Err(ValidationError::UnknownField {
                field: other.to_string(),
            }),
        }
    }

    /// Applies the change to a product.
    pub fn apply(&self, product: &mut Product) {
        match self {
            ProductChange::Name(name) => product.name = name.clone(),
            ProductChange::SellingPrice(cents) => product.selling_price_cents = *cents,
            ProductChange::PurchasePrice(cents) => product.purchase_price_cents = *cents,
            ProductChange::Quantity(qty) => product.quantity = *qty,
            ProductChange::ProductionDate(date) => product.production_date = *date,
            ProductChange::ExpirationDate(date) => product.expiration_date = *date,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new_parses_dates() {
        let product = Product::new(
            "MILK-1L",
            "Whole Milk 1L",
            1250,
            900,
            40,
            "2025-05-01",
            "2025-06-01",
        )
        .unwrap();

        assert_eq!(product.code, "MILK-1L");
        assert_eq!(
            product.production_date,
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
        );
        assert_eq!(
            product.expiration_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert_eq!(product.selling_price(), Money::from_cents(1250));
        assert_eq!(product.purchase_price(), Money::from_cents(900));
    }

    #[test]
    fn test_product_new_rejects_bad_dates() {
        let err = Product::new("P1", "X", 1, 1, 1, "05/01/2025", "2025-06-01").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));

        let err = Product::new("P1", "X", 1, 1, 1, "2025-05-01", "June 1st").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn test_invoice_total_sums_lines() {
        let invoice = Invoice::new("INV-001", "2025-06-01")
            .unwrap()
            .with_lines(vec![
                LineItem::new("P1", 3, 3750),
                LineItem::new("P2", 1, 500),
            ]);

        assert_eq!(invoice.total(), Money::from_cents(4250));
        assert_eq!(invoice.lines[0].total(), Money::from_cents(3750));
    }

    #[test]
    fn test_invoice_rejects_bad_date() {
        assert!(Invoice::new("INV-001", "yesterday").is_err());
    }

    #[test]
    fn test_product_change_parse_known_fields() {
        assert_eq!(
            ProductChange::parse("name", "Skim Milk 1L").unwrap(),
            ProductChange::Name("Skim Milk 1L".to_string())
        );
        assert_eq!(
            ProductChange::parse("selling_price", "12.50").unwrap(),
            ProductChange::SellingPrice(1250)
        );
        assert_eq!(
            ProductChange::parse("quantity", "15").unwrap(),
            ProductChange::Quantity(15)
        );
        assert_eq!(
            ProductChange::parse("expiration_date", "2025-07-01").unwrap(),
            ProductChange::ExpirationDate(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
        );
    }

    #[test]
    fn test_product_change_rejects_unknown_field() {
        let err = ProductChange::parse("bogus_field", "1").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { field } if field == "bogus_field"));

        // code is identity, not an updatable field
        let err = ProductChange::parse("code", "P2").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { .. }));
    }

    #[test]
    fn test_product_change_rejects_bad_values() {
        assert!(ProductChange::parse("selling_price", "expensive").is_err());
        assert!(ProductChange::parse("quantity", "a few").is_err());
        assert!(ProductChange::parse("production_date", "01-05-2025").is_err());
        assert!(ProductChange::parse("name", "").is_err());
    }

    #[test]
    fn test_product_change_apply() {
        let mut product = Product::new("P1", "Old", 1000, 800, 5, "2025-05-01", "2025-06-01")
            .unwrap();

        ProductChange::Name("New".to_string()).apply(&mut product);
        ProductChange::SellingPrice(1500).apply(&mut product);
        ProductChange::Quantity(9).apply(&mut product);

        assert_eq!(product.name, "New");
        assert_eq!(product.selling_price_cents, 1500);
        assert_eq!(product.quantity, 9);
        // Untouched fields stay put
        assert_eq!(product.purchase_price_cents, 800);
    }
}
