//! Store settings page commands.

use tracing::{debug, info};

use grill_core::validation::validate_price;
use grill_core::{StorePatch, StoreSettings};

use crate::error::ApiError;
use crate::state::AdminState;

pub fn get_store(admin: &AdminState) -> StoreSettings {
    debug!("get_store command");
    admin.with_store(|s| s.settings().clone())
}

/// Merges `patch` into the settings and returns the result.
///
/// A blank store name and an out-of-range delivery fee are rejected; hours
/// and phone are stored as given.
pub fn edit_store(admin: &AdminState, patch: StorePatch) -> Result<StoreSettings, ApiError> {
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(ApiError::validation("name is required"));
    }
    if let Some(fee) = patch.delivery_fee {
        validate_price(fee)?;
    }
    if patch.is_empty() {
        return Ok(get_store(admin));
    }

    let settings = admin.with_store_mut(|s| {
        s.update_store(&patch);
        s.settings().clone()
    });
    info!(store = %settings.name, open = settings.is_open, "Store settings saved");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grill_core::Money;

    #[test]
    fn test_edit_merges_given_fields() {
        let admin = AdminState::demo();

        let settings = edit_store(
            &admin,
            StorePatch::new().is_open(false).delivery_fee(Money::from_cents(990)),
        )
        .unwrap();

        assert!(!settings.is_open);
        assert_eq!(settings.delivery_fee.to_string(), "R$ 9,90");
        assert_eq!(settings.instagram, "@grillpointburgers");
        assert_eq!(get_store(&admin), settings);
    }

    #[test]
    fn test_blank_name_rejected() {
        let admin = AdminState::demo();
        assert!(edit_store(&admin, StorePatch::new().name("  ")).is_err());
        assert_eq!(get_store(&admin).name, "Grill Point Burgers");
    }

    #[test]
    fn test_fee_out_of_range_rejected() {
        let admin = AdminState::demo();
        let err = edit_store(&admin, StorePatch::new().delivery_fee(Money::from_cents(i64::MAX))).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
        assert_eq!(get_store(&admin).delivery_fee, Money::from_cents(690));
    }
}
