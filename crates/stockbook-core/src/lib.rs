//! # stockbook-core: Pure Domain Logic for Stockbook
//!
//! This crate is the **heart** of Stockbook. It contains the domain types and
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockbook Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    apps/terminal                              │ │
//! │  │     seeds a catalog, prints tables, owns stdout and clock     │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │                    stockbook-store                            │ │
//! │  │     Store aggregate: stock, invoices, reports, markdowns      │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              ★ stockbook-core (THIS CRATE) ★                  │ │
//! │  │                                                               │ │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌────────────┐     │ │
//! │  │   │  types  │  │  money  │  │  error   │  │ validation │     │ │
//! │  │   │ Product │  │  Money  │  │ StoreErr │  │   rules    │     │ │
//! │  │   │ Invoice │  │ bps math│  │ Valid.Err│  │  parsers   │     │ │
//! │  │   └─────────┘  └─────────┘  └──────────┘  └────────────┘     │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO CLOCK • NO LOGGING • PURE FUNCTIONS             │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Invoice, LineItem, ProductChange)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and text parsing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No Clock**: "today" is always an explicit argument, never `now()`
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stockbook_core::{Money, Product};
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(1250); // $12.50
//!
//! // Parse dates from the fixed YYYY-MM-DD format
//! let product = Product::new("MILK-1L", "Whole Milk 1L", 1250, 900, 40,
//!     "2025-05-01", "2025-06-01").unwrap();
//!
//! assert_eq!(product.selling_price(), price);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockbook_core::Money` instead of
// `use stockbook_core::money::Money`

pub use error::{StoreError, StoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use validation::ValidationResult;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Calendar date format accepted and produced at every text boundary.
///
/// ## Why a constant?
/// Product and invoice dates arrive as text (`"2025-06-01"`), and reports
/// render dates back to text. Pinning the strftime pattern in one place keeps
/// parsing and rendering in agreement.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum length of a product or invoice code.
pub const MAX_CODE_LEN: usize = 50;

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 200;
