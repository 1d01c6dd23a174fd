//! # Validation Module
//!
//! Form validation for the layer that sits in front of the store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell / command input                                        │
//! │  ├── Argument parsing (clap)                                           │
//! │  └── THIS MODULE: required fields, price parsing, email shape          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Admin store                                                  │
//! │  └── No checks at all. Every mutation is total; unknown ids no-op.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grill_core::validation::{parse_price, validate_customer_name};
//!
//! assert_eq!(parse_price("28,90").unwrap().cents(), 2890);
//! assert!(validate_customer_name("   ").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 100;
const MAX_ADDRESS_LEN: usize = 200;

/// Highest price a form accepts: R$ 99.999,99.
pub const MAX_PRICE: Money = Money::from_cents(9_999_999);

/// Highest quantity a single cart line can hold.
pub const MAX_CART_QUANTITY: i64 = 999;

// =============================================================================
// Text Validators
// =============================================================================

/// Trims `value` and rejects it when blank or longer than `max` characters.
///
/// Returns the trimmed value.
pub fn validate_required(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

/// The "Seu nome" field of the checkout form.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    validate_required("name", name, MAX_NAME_LEN)
}

/// The "Endereço de entrega" field of the checkout form.
pub fn validate_address(address: &str) -> ValidationResult<String> {
    validate_required("address", address, MAX_ADDRESS_LEN)
}

/// Name of a menu item or user.
pub fn validate_display_name(name: &str) -> ValidationResult<String> {
    validate_required("name", name, MAX_NAME_LEN)
}

/// Checks the rough shape `local@domain.tld`.
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = validate_required("email", email, MAX_NAME_LEN)?;

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "expected name@domain".to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || email.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }

    Ok(email)
}

/// WhatsApp destination: country code + number, digits only.
pub fn validate_whatsapp_phone(phone: &str) -> ValidationResult<String> {
    let phone = validate_required("phone", phone, 15)?;

    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain digits only".to_string(),
        });
    }

    if phone.len() < 10 {
        return Err(ValidationError::OutOfRange {
            field: "phone length".to_string(),
            min: 10,
            max: 15,
        });
    }

    Ok(phone)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a price typed into a form.
///
/// ## Rules
/// - Accepts `28.90`, `28,90`, `28`, `28.9` and an optional `R$` prefix
/// - At most two decimal places
/// - Must not be negative (zero is allowed) or above [`MAX_PRICE`]
///
/// ```rust
/// use grill_core::validation::parse_price;
///
/// assert_eq!(parse_price("R$ 7,9").unwrap().cents(), 790);
/// assert!(parse_price("abc").is_err());
/// assert!(parse_price("-1").is_err());
/// assert!(parse_price("1.999").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let raw = input.trim();
    let raw = raw.strip_prefix("R$").unwrap_or(raw).trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    if raw.starts_with('-') {
        return Err(price_out_of_range());
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: reason.to_string(),
    };

    let normalized = raw.replace(',', ".");
    let (whole, frac) = match normalized.split_once('.') {
        Some((w, f)) => (w, f),
        None => (normalized.as_str(), ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("not a number"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("not a number"));
    }
    if frac.len() > 2 {
        return Err(invalid("at most two decimal places"));
    }

    let reais: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| price_out_of_range())?
    };
    let centavos: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| invalid("not a number"))? * 10,
        _ => frac.parse().map_err(|_| invalid("not a number"))?,
    };

    let price = reais
        .checked_mul(100)
        .and_then(|c| c.checked_add(centavos))
        .map(Money::from_cents)
        .ok_or_else(price_out_of_range)?;

    validate_price(price)
}

/// Rejects prices below zero or above [`MAX_PRICE`].
pub fn validate_price(price: Money) -> ValidationResult<Money> {
    if price.is_negative() || price > MAX_PRICE {
        return Err(price_out_of_range());
    }
    Ok(price)
}

fn price_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "price (centavos)".to_string(),
        min: 0,
        max: MAX_PRICE.cents(),
    }
}

/// Quantity typed into the cart drawer.
///
/// Zero and below are allowed (they remove the line); anything above
/// [`MAX_CART_QUANTITY`] is rejected.
pub fn validate_cart_quantity(quantity: i64) -> ValidationResult<i64> {
    if quantity > MAX_CART_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_CART_QUANTITY,
        });
    }
    Ok(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
