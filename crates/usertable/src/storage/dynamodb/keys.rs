//! DynamoDB attribute names and key helpers.
//!
//! The Users table has a single hash key, `userId`. Pure functions, no I/O.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use usertable_core::storage::ContinuationToken;

// ============================================================================
// Attribute names
// ============================================================================

pub const USER_ID: &str = "userId";
pub const ORGANIZATION_ID: &str = "organizationId";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const PHONE: &str = "phone";
pub const MEMBERSHIP_EXPIRED: &str = "membershipExpired";

// ============================================================================
// Keys
// ============================================================================

/// Generate the primary key of a user item.
pub fn user_key(user_id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(USER_ID.to_string(), AttributeValue::S(user_id.to_string()))])
}

/// Convert a continuation token into an `ExclusiveStartKey`.
pub fn exclusive_start_key(token: &ContinuationToken) -> HashMap<String, AttributeValue> {
    user_key(token.last_user_id())
}

/// Convert a `LastEvaluatedKey` into a continuation token.
///
/// An absent or empty key means the scan is exhausted.
pub fn continuation_token(
    last_evaluated_key: Option<&HashMap<String, AttributeValue>>,
) -> Option<ContinuationToken> {
    last_evaluated_key
        .and_then(|key| key.get(USER_ID))
        .and_then(|value| value.as_s().ok())
        .map(ContinuationToken::new)
}
