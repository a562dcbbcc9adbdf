//! # Store Aggregate
//!
//! The in-memory catalog and invoice history, plus all mutating operations.
//!
//! ## Catalog Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Store internals                               │
//! │                                                                     │
//! │   products: Vec<Product>        index: HashMap<code, position>      │
//! │   ┌──────────────────────┐      ┌──────────────────────┐            │
//! │   │ 0: MILK-1L           │◄─────│ "MILK-1L"  → 0       │            │
//! │   │ 1: BREAD-W           │◄─────│ "BREAD-W"  → 1       │            │
//! │   │ 2: EGGS-12           │◄─────│ "EGGS-12"  → 2       │            │
//! │   └──────────────────────┘      └──────────────────────┘            │
//! │                                                                     │
//! │   The Vec preserves insertion order for list-style reports;         │
//! │   the index gives O(1) lookup by code. Deletion repairs the         │
//! │   positions of everything that shifted.                             │
//! │                                                                     │
//! │   invoices: Vec<Invoice>   append-only history, read by reports     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invoice Acceptance Is Atomic
//! `add_invoice` validates every line before touching anything. Either the
//! whole invoice is accepted (all stock deducted, invoice appended) or the
//! store is untouched. There is no partial deduction to roll back.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use stockbook_core::error::{StoreError, StoreResult};
use stockbook_core::validation::validate_quantity;
use stockbook_core::{Invoice, Product, ProductChange, ValidationError};

// =============================================================================
// Operation Outcomes
// =============================================================================

/// Result of [`Store::add_product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AddOutcome {
    /// The code was new; the product was appended to the catalog.
    Added,
    /// A product with the same code existed; quantities were summed and
    /// price/date fields overwritten.
    Merged,
}

/// Result of [`Store::update_product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UpdateOutcome {
    /// All changes were applied.
    Updated,
    /// No product with the given code; nothing changed. Reported as a
    /// value rather than an error so callers can message it.
    NotFound,
}

/// Result of [`Store::delete_product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DeleteOutcome {
    /// The product was removed from the catalog.
    Removed,
    /// No product with the given code; nothing changed.
    NotFound,
}

// =============================================================================
// Store
// =============================================================================

/// The inventory and sales aggregate: one catalog, one invoice history.
///
/// ## Invariants
/// - Product codes are unique within the catalog (adding an existing code
///   merges instead of duplicating)
/// - `index` maps every catalog code to its current `products` position
/// - `invoices` only ever grows, and only with fully-validated invoices
#[derive(Debug, Default)]
pub struct Store {
    /// Catalog in insertion order.
    products: Vec<Product>,

    /// Code → position in `products`.
    index: HashMap<String, usize>,

    /// Accepted invoices, append-only.
    invoices: Vec<Invoice>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store::default()
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Mutable catalog access for the markdown pass. Positions never
    /// change through this path, so the index stays valid.
    pub(crate) fn products_mut(&mut self) -> &mut [Product] {
        &mut self.products
    }

    /// All accepted invoices in acceptance order.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Looks up a product by code.
    pub fn get_product(&self, code: &str) -> Option<&Product> {
        self.index.get(code).map(|&pos| &self.products[pos])
    }

    /// Number of products in the catalog.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Checks whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // =========================================================================
    // Product Operations
    // =========================================================================

    /// Adds a product, or merges it into an existing entry with the same code.
    ///
    /// ## Merge Semantics
    /// When the code already exists, the incoming quantity is ADDED to the
    /// existing quantity (a restock), while prices and dates are overwritten
    /// (the new batch's data wins). The original `code` and `name` are kept.
    ///
    /// ## Example
    /// ```text
    /// Catalog: MILK-1L qty 10, selling $12.50
    ///      │
    ///      ▼
    /// add_product(MILK-1L qty 5, selling $11.00)
    ///      │
    ///      ▼
    /// Catalog: MILK-1L qty 15, selling $11.00   → AddOutcome::Merged
    /// ```
    pub fn add_product(&mut self, product: Product) -> AddOutcome {
        if let Some(&pos) = self.index.get(&product.code) {
            let existing = &mut self.products[pos];
            existing.quantity += product.quantity;
            existing.selling_price_cents = product.selling_price_cents;
            existing.purchase_price_cents = product.purchase_price_cents;
            existing.production_date = product.production_date;
            existing.expiration_date = product.expiration_date;

            debug!(code = %product.code, quantity = existing.quantity, "Merged product");
            return AddOutcome::Merged;
        }

        debug!(code = %product.code, quantity = product.quantity, "Inserting product");
        self.index.insert(product.code.clone(), self.products.len());
        self.products.push(product);
        AddOutcome::Added
    }

    /// Searches products by name.
    ///
    /// - `None` returns the whole catalog in insertion order
    /// - an empty (or all-whitespace) keyword is rejected
    /// - otherwise returns products whose name contains the keyword,
    ///   case-insensitively, order preserved
    pub fn search_products(&self, keyword: Option<&str>) -> StoreResult<Vec<&Product>> {
        let keyword = match keyword {
            None => return Ok(self.products.iter().collect()),
            Some(k) => k.trim(),
        };

        if keyword.is_empty() {
            return Err(ValidationError::Required {
                field: "keyword".to_string(),
            }
            .into());
        }

        let needle = keyword.to_lowercase();
        let results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect();

        debug!(keyword = %keyword, count = results.len(), "Search returned products");
        Ok(results)
    }

    /// Applies a batch of typed changes to a product.
    ///
    /// The batch must be non-empty. Because each [`ProductChange`] was
    /// already parsed and validated, application cannot fail midway: the
    /// product ends up with either every change or (when absent) none.
    pub fn update_product(
        &mut self,
        code: &str,
        changes: &[ProductChange],
    ) -> StoreResult<UpdateOutcome> {
        if changes.is_empty() {
            return Err(ValidationError::Required {
                field: "changes".to_string(),
            }
            .into());
        }

        let Some(&pos) = self.index.get(code) else {
            debug!(code = %code, "Update target not found");
            return Ok(UpdateOutcome::NotFound);
        };

        let product = &mut self.products[pos];
        for change in changes {
            change.apply(product);
        }

        debug!(code = %code, changes = changes.len(), "Updated product");
        Ok(UpdateOutcome::Updated)
    }

    /// Removes a product from the catalog.
    ///
    /// Every product that sat after the removed one shifts down a slot,
    /// so their index entries are repaired before returning.
    pub fn delete_product(&mut self, code: &str) -> DeleteOutcome {
        let Some(pos) = self.index.remove(code) else {
            debug!(code = %code, "Delete target not found");
            return DeleteOutcome::NotFound;
        };

        self.products.remove(pos);
        for (i, product) in self.products.iter().enumerate().skip(pos) {
            self.index.insert(product.code.clone(), i);
        }

        debug!(code = %code, remaining = self.products.len(), "Deleted product");
        DeleteOutcome::Removed
    }

    // =========================================================================
    // Invoice Operations
    // =========================================================================

    /// Checks that `quantity` units of the coded product could be sold now.
    ///
    /// ## Failure Order
    /// 1. `quantity <= 0` → validation error
    /// 2. unknown code → [`StoreError::ProductNotFound`]
    /// 3. more than stock → [`StoreError::InsufficientStock`]
    pub fn check_availability(&self, code: &str, quantity: i64) -> StoreResult<()> {
        validate_quantity(quantity)?;

        let product = self
            .get_product(code)
            .ok_or_else(|| StoreError::not_found(code))?;

        if quantity > product.quantity {
            return Err(StoreError::insufficient_stock(
                code,
                product.quantity,
                quantity,
            ));
        }

        Ok(())
    }

    /// Runs the availability check for every line of an invoice,
    /// propagating the first failure.
    ///
    /// Lines referencing the same product are checked against their
    /// RUNNING total, so duplicate-code lines cannot jointly overdraw
    /// stock that each line alone would fit in.
    pub fn validate_invoice(&self, invoice: &Invoice) -> StoreResult<()> {
        let mut requested: HashMap<&str, i64> = HashMap::new();

        for line in &invoice.lines {
            validate_quantity(line.quantity)?;

            let total = requested.entry(line.product_code.as_str()).or_insert(0);
            *total += line.quantity;
            self.check_availability(&line.product_code, *total)?;
        }
        Ok(())
    }

    /// Accepts an invoice: deducts stock for every line and appends it to
    /// the history.
    ///
    /// ## Atomicity
    /// ```text
    /// add_invoice(invoice)
    ///      │
    ///      ▼
    /// validate EVERY line ──── any failure ───► Err, store untouched
    ///      │
    ///      ▼ all lines pass
    /// deduct stock for every line
    ///      │
    ///      ▼
    /// append invoice to history ───► Ok(())
    /// ```
    /// No partial deduction can ever be observed. Failures are returned,
    /// not printed; messaging is the caller's concern.
    pub fn add_invoice(&mut self, invoice: Invoice) -> StoreResult<()> {
        if let Err(e) = self.validate_invoice(&invoice) {
            warn!(invoice = %invoice.code, error = %e, "Rejecting invoice");
            return Err(e);
        }

        // Every line validated above, so every lookup below succeeds.
        for line in &invoice.lines {
            if let Some(&pos) = self.index.get(&line.product_code) {
                self.products[pos].quantity -= line.quantity;
            }
        }

        info!(
            invoice = %invoice.code,
            lines = invoice.lines.len(),
            total = %invoice.total(),
            "Accepted invoice"
        );
        self.invoices.push(invoice);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockbook_core::LineItem;

    fn test_product(code: &str, name: &str, qty: i64) -> Product {
        Product {
            code: code.to_string(),
            name: name.to_string(),
            selling_price_cents: 1250,
            purchase_price_cents: 900,
            quantity: qty,
            production_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
        }
    }

    fn invoice(code: &str, lines: Vec<LineItem>) -> Invoice {
        Invoice {
            code: code.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            lines,
        }
    }

    #[test]
    fn test_add_new_product_grows_catalog() {
        let mut store = Store::new();

        let outcome = store.add_product(test_product("P1", "Whole Milk", 10));

        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(store.product_count(), 1);
        assert_eq!(store.get_product("P1").unwrap().quantity, 10);
    }

    #[test]
    fn test_add_existing_code_merges() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));

        let mut restock = test_product("P1", "Renamed Milk", 5);
        restock.selling_price_cents = 1100;
        restock.expiration_date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();

        let outcome = store.add_product(restock);

        assert_eq!(outcome, AddOutcome::Merged);
        assert_eq!(store.product_count(), 1);

        let merged = store.get_product("P1").unwrap();
        assert_eq!(merged.quantity, 15); // 10 + 5
        assert_eq!(merged.selling_price_cents, 1100); // overwritten
        assert_eq!(
            merged.expiration_date,
            NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
        );
        assert_eq!(merged.name, "Whole Milk"); // original name kept
    }

    #[test]
    fn test_search_none_returns_all_in_order() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));
        store.add_product(test_product("P2", "Bread", 20));

        let all = store.search_products(None).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].code, "P1");
        assert_eq!(all[1].code, "P2");
    }

    #[test]
    fn test_search_empty_keyword_rejected() {
        let store = Store::new();
        let err = store.search_products(Some("")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Required { .. })
        ));
        assert!(store.search_products(Some("   ")).is_err());
    }

    #[test]
    fn test_search_is_case_insensitive_and_order_preserving() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));
        store.add_product(test_product("P2", "Bread", 20));
        store.add_product(test_product("P3", "Skim MILK", 5));

        let hits = store.search_products(Some("milk")).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].code, "P1");
        assert_eq!(hits[1].code, "P3");
    }

    #[test]
    fn test_update_product_applies_all_changes() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));

        let changes = vec![
            ProductChange::SellingPrice(1500),
            ProductChange::Quantity(42),
        ];
        let outcome = store.update_product("P1", &changes).unwrap();

        assert_eq!(outcome, UpdateOutcome::Updated);
        let product = store.get_product("P1").unwrap();
        assert_eq!(product.selling_price_cents, 1500);
        assert_eq!(product.quantity, 42);
    }

    #[test]
    fn test_update_product_empty_batch_rejected() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));

        assert!(store.update_product("P1", &[]).is_err());
        // Rejected before lookup, so the product is untouched
        assert_eq!(store.get_product("P1").unwrap().quantity, 10);
    }

    #[test]
    fn test_update_product_absent_code_is_not_found() {
        let mut store = Store::new();
        let outcome = store
            .update_product("P9", &[ProductChange::Quantity(1)])
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::NotFound);
    }

    #[test]
    fn test_delete_product_repairs_index() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));
        store.add_product(test_product("P2", "Bread", 20));
        store.add_product(test_product("P3", "Eggs", 30));

        assert_eq!(store.delete_product("P2"), DeleteOutcome::Removed);

        assert_eq!(store.product_count(), 2);
        assert!(store.get_product("P2").is_none());
        // Survivors still resolve through the repaired index
        assert_eq!(store.get_product("P1").unwrap().quantity, 10);
        assert_eq!(store.get_product("P3").unwrap().quantity, 30);
    }

    #[test]
    fn test_delete_absent_code_is_not_found() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));

        assert_eq!(store.delete_product("P9"), DeleteOutcome::NotFound);
        assert_eq!(store.product_count(), 1);
    }

    #[test]
    fn test_check_availability_failure_order() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));

        // Non-positive quantity rejected even for unknown codes
        assert!(matches!(
            store.check_availability("P9", 0).unwrap_err(),
            StoreError::Validation(ValidationError::MustBePositive { .. })
        ));

        assert!(matches!(
            store.check_availability("P9", 1).unwrap_err(),
            StoreError::ProductNotFound(_)
        ));

        assert!(matches!(
            store.check_availability("P1", 11).unwrap_err(),
            StoreError::InsufficientStock {
                available: 10,
                requested: 11,
                ..
            }
        ));

        assert!(store.check_availability("P1", 10).is_ok());
    }

    #[test]
    fn test_add_invoice_deducts_stock_and_appends() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));

        let result = store.add_invoice(invoice("INV-001", vec![LineItem::new("P1", 3, 3750)]));

        assert!(result.is_ok());
        assert_eq!(store.invoices().len(), 1);
        assert_eq!(store.get_product("P1").unwrap().quantity, 7);
    }

    #[test]
    fn test_add_invoice_insufficient_stock_touches_nothing() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));
        store.add_product(test_product("P2", "Bread", 2));

        // First line is satisfiable; the second is not. Nothing may change.
        let result = store.add_invoice(invoice(
            "INV-002",
            vec![LineItem::new("P1", 3, 3750), LineItem::new("P2", 5, 1000)],
        ));

        assert!(matches!(
            result.unwrap_err(),
            StoreError::InsufficientStock { .. }
        ));
        assert_eq!(store.invoices().len(), 0);
        assert_eq!(store.get_product("P1").unwrap().quantity, 10);
        assert_eq!(store.get_product("P2").unwrap().quantity, 2);
    }

    #[test]
    fn test_add_invoice_duplicate_code_lines_checked_against_running_total() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));

        // Each line alone fits in stock; together they ask for 12 of 10.
        // Accepting this would drive the quantity negative.
        let result = store.add_invoice(invoice(
            "INV-010",
            vec![LineItem::new("P1", 6, 7500), LineItem::new("P1", 6, 7500)],
        ));

        assert!(matches!(
            result.unwrap_err(),
            StoreError::InsufficientStock {
                available: 10,
                requested: 12,
                ..
            }
        ));
        assert_eq!(store.invoices().len(), 0);
        assert_eq!(store.get_product("P1").unwrap().quantity, 10);
    }

    #[test]
    fn test_add_invoice_duplicate_code_lines_within_stock_accepted() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));

        let result = store.add_invoice(invoice(
            "INV-011",
            vec![LineItem::new("P1", 6, 7500), LineItem::new("P1", 4, 5000)],
        ));

        assert!(result.is_ok());
        assert_eq!(store.get_product("P1").unwrap().quantity, 0);
    }

    #[test]
    fn test_add_invoice_unknown_product_touches_nothing() {
        let mut store = Store::new();
        store.add_product(test_product("P1", "Whole Milk", 10));

        let result = store.add_invoice(invoice(
            "INV-003",
            vec![LineItem::new("P1", 3, 3750), LineItem::new("P9", 1, 500)],
        ));

        assert!(matches!(
            result.unwrap_err(),
            StoreError::ProductNotFound(_)
        ));
        assert_eq!(store.invoices().len(), 0);
        assert_eq!(store.get_product("P1").unwrap().quantity, 10);
    }
}
