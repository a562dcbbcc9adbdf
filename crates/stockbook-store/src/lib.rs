//! # stockbook-store: The Store Aggregate
//!
//! Owns the product catalog and invoice history, and every operation that
//! keeps them consistent.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockbook Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    apps/terminal                              │ │
//! │  │     owns stdout and the clock; prints rendered tables         │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │             ★ stockbook-store (THIS CRATE) ★                  │ │
//! │  │                                                               │ │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌────────────┐     │ │
//! │  │   │  store  │  │ report  │  │ pricing  │  │  display   │     │ │
//! │  │   │ catalog │  │ revenue │  │ markdown │  │   tables   │     │ │
//! │  │   │ invoices│  │ rankings│  │  policy  │  │ (String)   │     │ │
//! │  │   └─────────┘  └─────────┘  └──────────┘  └────────────┘     │ │
//! │  │                                                               │ │
//! │  │   MUTATION + TRACING LIVE HERE • CLOCK IS ALWAYS AN ARGUMENT  │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │                    stockbook-core                             │ │
//! │  │     pure domain types, money, validation, errors              │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Policy
//! Every operation RETURNS its failures; nothing here prints or swallows
//! errors. The terminal app decides which errors become user messages.
//!
//! ## Example Usage
//! ```rust
//! use stockbook_core::{Invoice, LineItem, Product};
//! use stockbook_store::Store;
//!
//! let mut store = Store::new();
//! store.add_product(
//!     Product::new("P1", "Whole Milk 1L", 1250, 900, 10, "2025-05-01", "2025-06-20").unwrap(),
//! );
//!
//! let invoice = Invoice::new("INV-001", "2025-06-01")
//!     .unwrap()
//!     .with_lines(vec![LineItem::new("P1", 3, 3750)]);
//! store.add_invoice(invoice).unwrap();
//!
//! assert_eq!(store.get_product("P1").unwrap().quantity, 7);
//! ```

pub mod display;
pub mod pricing;
pub mod report;
pub mod store;

pub use display::{render_product_table, render_revenue_table};
pub use pricing::{
    Markdown, EXPIRING_RETAIN_BPS, NEAR_EXPIRY_RETAIN_BPS, NEAR_EXPIRY_THRESHOLD_DAYS,
};
pub use report::{Ranking, RevenueRow, SortOrder};
pub use store::{AddOutcome, DeleteOutcome, Store, UpdateOutcome};
