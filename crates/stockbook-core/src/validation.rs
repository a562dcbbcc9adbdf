//! # Validation Module
//!
//! Input validation and text parsing for Stockbook.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: The type system                                           │
//! │  ├── Dates are NaiveDate, money is Money, quantities are i64        │
//! │  └── "wrong type" arguments cannot be constructed                   │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE — text boundaries and value rules             │
//! │  ├── Date text must match YYYY-MM-DD                                │
//! │  ├── Codes/names must be non-empty and bounded                      │
//! │  └── Quantities must be positive, prices non-negative               │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: The store aggregate                                       │
//! │  └── Cross-entity rules (unique codes, sufficient stock)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockbook_core::validation::{parse_date, validate_quantity};
//!
//! let date = parse_date("expiration_date", "2025-06-01").unwrap();
//! assert_eq!(date.to_string(), "2025-06-01");
//!
//! validate_quantity(5).unwrap();
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::{DATE_FORMAT, MAX_CODE_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product or invoice code.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 50 characters
///
/// ## Example
/// ```rust
/// use stockbook_core::validation::validate_code;
///
/// assert!(validate_code("MILK-1L").is_ok());
/// assert!(validate_code("").is_err());
/// assert!(validate_code(&"A".repeat(100)).is_err());
/// ```
pub fn validate_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be positive (> 0); zero-unit sales are rejected
///
/// ## User Workflow
/// ```text
/// Invoice line (code: "P1", quantity: 5)
///      │
///      ▼
/// validate_quantity(5) ← THIS FUNCTION
///      │
///      ├── qty <= 0? → Error: "quantity must be positive"
///      │
///      └── OK → Proceed with stock check
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Text Parsers
// =============================================================================

/// Parses calendar-date text in the fixed `YYYY-MM-DD` format.
///
/// `field` names the date being parsed so the error message points at the
/// right input (e.g. `"production_date"`).
///
/// ## Example
/// ```rust
/// use stockbook_core::validation::parse_date;
///
/// assert!(parse_date("invoice_date", "2025-06-01").is_ok());
/// assert!(parse_date("invoice_date", "06/01/2025").is_err());
/// assert!(parse_date("invoice_date", "2025-13-40").is_err());
/// ```
pub fn parse_date(field: &str, text: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        }
    })
}

/// Parses money text into cents.
///
/// Accepts an optional leading `$`, whole dollars (`"12"`) or dollars with
/// exactly two decimal places (`"12.50"`). Negative amounts are rejected;
/// prices never go below zero.
///
/// ## Example
/// ```rust
/// use stockbook_core::validation::parse_money;
///
/// assert_eq!(parse_money("selling_price", "12.50").unwrap(), 1250);
/// assert_eq!(parse_money("selling_price", "$7").unwrap(), 700);
/// assert!(parse_money("selling_price", "12.5").is_err());
/// assert!(parse_money("selling_price", "-1.00").is_err());
/// ```
pub fn parse_money(field: &str, text: &str) -> ValidationResult<i64> {
    let invalid = || ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "expected a dollar amount like 12.50".to_string(),
    };

    let text = text.trim().trim_start_matches('$');

    if text.starts_with('-') {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    let (dollars_text, cents_text) = match text.split_once('.') {
        Some((d, c)) => (d, Some(c)),
        None => (text, None),
    };

    let dollars: i64 = dollars_text.parse().map_err(|_| invalid())?;

    // Exactly two digits: a bare i64 parse would also accept signed
    // fragments like "-5" or "+5".
    let cents: i64 = match cents_text {
        Some(c) if c.len() == 2 && c.bytes().all(|b| b.is_ascii_digit()) => {
            c.parse().map_err(|_| invalid())?
        }
        Some(_) => return Err(invalid()),
        None => 0,
    };

    Ok(dollars * 100 + cents)
}

/// Parses integer quantity text.
pub fn parse_quantity(field: &str, text: &str) -> ValidationResult<i64> {
    text.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected an integer".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_code() {
        assert!(validate_code("MILK-1L").is_ok());
        assert!(validate_code("P1").is_ok());

        assert!(validate_code("").is_err());
        assert!(validate_code("   ").is_err());
        assert!(validate_code(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Whole Milk 1L").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("d", "2025-06-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        // Leading/trailing whitespace is tolerated
        assert!(parse_date("d", " 2025-06-01 ").is_ok());

        assert!(parse_date("d", "06/01/2025").is_err());
        assert!(parse_date("d", "2025-13-40").is_err());
        assert!(parse_date("d", "not a date").is_err());
        assert!(parse_date("d", "").is_err());
    }

    #[test]
    fn test_parse_date_error_names_field() {
        let err = parse_date("expiration_date", "nope").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expiration_date has invalid format: expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("p", "12.50").unwrap(), 1250);
        assert_eq!(parse_money("p", "$12.50").unwrap(), 1250);
        assert_eq!(parse_money("p", "7").unwrap(), 700);
        assert_eq!(parse_money("p", "0.99").unwrap(), 99);

        assert!(parse_money("p", "12.5").is_err());
        assert!(parse_money("p", "12.505").is_err());
        // Cents fragments must be two DIGITS, not anything i64 parses
        assert!(parse_money("p", "12.-5").is_err());
        assert!(parse_money("p", "1.+5").is_err());
        assert!(parse_money("p", "abc").is_err());
        assert!(parse_money("p", "-1.00").is_err());
        assert!(parse_money("p", "-0.50").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("q", "15").unwrap(), 15);
        assert_eq!(parse_quantity("q", " -3 ").unwrap(), -3);
        assert!(parse_quantity("q", "3.5").is_err());
        assert!(parse_quantity("q", "many").is_err());
    }
}
