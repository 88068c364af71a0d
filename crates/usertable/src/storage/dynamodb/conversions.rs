//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and users.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use usertable_core::storage::RepositoryError;
use usertable_core::user::{Phone, User};

use super::keys::{FIRST_NAME, LAST_NAME, MEMBERSHIP_EXPIRED, ORGANIZATION_ID, PHONE, USER_ID};

/// Convert a User to DynamoDB item.
pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(USER_ID.to_string(), AttributeValue::S(user.user_id.clone()));
    item.insert(
        ORGANIZATION_ID.to_string(),
        AttributeValue::S(user.organization_id.clone()),
    );
    item.insert(
        FIRST_NAME.to_string(),
        AttributeValue::S(user.first_name.clone()),
    );
    item.insert(
        LAST_NAME.to_string(),
        AttributeValue::S(user.last_name.clone()),
    );
    item.insert(PHONE.to_string(), AttributeValue::N(user.phone.as_str().to_string()));

    if let Some(expired) = user.membership_expired {
        item.insert(MEMBERSHIP_EXPIRED.to_string(), AttributeValue::Bool(expired));
    }

    item
}

/// Convert a DynamoDB item to User.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> Result<User, RepositoryError> {
    Ok(User {
        user_id: get_string(item, USER_ID)?,
        organization_id: get_string(item, ORGANIZATION_ID)?,
        first_name: get_string(item, FIRST_NAME)?,
        last_name: get_string(item, LAST_NAME)?,
        phone: get_phone(item, PHONE)?,
        membership_expired: get_optional_bool(item, MEMBERSHIP_EXPIRED),
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required number attribute as a phone.
///
/// Any DynamoDB number is accepted, signed and fractional ones included.
fn get_phone(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Phone, RepositoryError> {
    let n = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;
    Phone::parse(n)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

/// Get an optional boolean attribute.
fn get_optional_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Option<bool> {
    item.get(key).and_then(|v| v.as_bool().ok()).copied()
}
