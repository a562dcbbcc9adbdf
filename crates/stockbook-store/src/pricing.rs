//! # Near-Expiry Pricing Policy
//!
//! Marks down the selling price of products approaching their expiration
//! date so stock moves before it has to be thrown away.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Markdown Schedule                                 │
//! │                                                                     │
//! │  days until expiration        selling price                         │
//! │  ─────────────────────        ─────────────────────────────         │
//! │  more than 21                 unchanged                             │
//! │  exactly 21                   × 0.765  (retain 7650 bps)            │
//! │  fewer than 21 (or expired)   × 0.431  (retain 4310 bps)            │
//! │                                                                     │
//! │  The pass COMPOUNDS: running it again re-applies the factor to      │
//! │  the already-marked-down price. Callers control cadence through     │
//! │  the explicit `today` argument (this module never reads a clock).   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use stockbook_core::Money;

use crate::store::Store;

// =============================================================================
// Policy Constants
// =============================================================================

/// Days-to-expiry at which the first markdown triggers.
pub const NEAR_EXPIRY_THRESHOLD_DAYS: i64 = 21;

/// Fraction of the price retained exactly at the threshold (76.5%).
pub const NEAR_EXPIRY_RETAIN_BPS: u32 = 7_650;

/// Fraction retained once inside the threshold, including after
/// expiration (43.1%).
pub const EXPIRING_RETAIN_BPS: u32 = 4_310;

// =============================================================================
// Markdown Record
// =============================================================================

/// One price adjustment made by a markdown pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Markdown {
    pub code: String,
    /// Whole days between the pass date and the expiration date.
    /// Negative when the product is already expired.
    pub days_left: i64,
    pub old_price: Money,
    pub new_price: Money,
}

// =============================================================================
// Markdown Pass
// =============================================================================

impl Store {
    /// Walks the catalog and marks down every near-expiry product,
    /// returning one [`Markdown`] record per adjusted price.
    ///
    /// `today` is the date the pass runs "as of"; the store never reads
    /// the system clock.
    pub fn apply_near_expiry_markdowns(&mut self, today: NaiveDate) -> Vec<Markdown> {
        let mut markdowns = Vec::new();

        for product in self.products_mut() {
            let days_left = (product.expiration_date - today).num_days();

            let retain_bps = if days_left == NEAR_EXPIRY_THRESHOLD_DAYS {
                NEAR_EXPIRY_RETAIN_BPS
            } else if days_left < NEAR_EXPIRY_THRESHOLD_DAYS {
                EXPIRING_RETAIN_BPS
            } else {
                continue;
            };

            let old_price = product.selling_price();
            let new_price = old_price.apply_retention_bps(retain_bps);
            product.selling_price_cents = new_price.cents();

            info!(
                code = %product.code,
                days_left,
                old_price = %old_price,
                new_price = %new_price,
                "Applied near-expiry markdown"
            );
            markdowns.push(Markdown {
                code: product.code.clone(),
                days_left,
                old_price,
                new_price,
            });
        }

        markdowns
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
