//! DynamoDB expression builders.
//!
//! Pure functions that turn partial updates and scan filters into expression
//! strings with their attribute name and value placeholders.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use usertable_core::storage::ScanFilter;
use usertable_core::user::UserChanges;

use super::keys::{FIRST_NAME, LAST_NAME, MEMBERSHIP_EXPIRED, ORGANIZATION_ID, PHONE, USER_ID};

/// An expression with its placeholder maps.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// An `UpdateItem` expression guarded by an existence condition.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub update: String,
    pub condition: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Build a `SET` expression touching only the provided fields.
///
/// Returns `None` when there is nothing to change. The condition makes the
/// update fail on a missing key instead of creating a partial item.
pub fn update_expression(changes: &UserChanges) -> Option<UpdateExpression> {
    let mut assignments = Vec::new();
    let mut names = HashMap::new();
    let mut values = HashMap::new();

    let mut set = |attribute: &str, value: AttributeValue| {
        assignments.push(format!("#{attribute} = :{attribute}"));
        names.insert(format!("#{attribute}"), attribute.to_string());
        values.insert(format!(":{attribute}"), value);
    };

    if let Some(first_name) = &changes.first_name {
        set(FIRST_NAME, AttributeValue::S(first_name.clone()));
    }
    if let Some(last_name) = &changes.last_name {
        set(LAST_NAME, AttributeValue::S(last_name.clone()));
    }
    if let Some(phone) = &changes.phone {
        set(PHONE, AttributeValue::N(phone.as_str().to_string()));
    }
    if let Some(expired) = changes.membership_expired {
        set(MEMBERSHIP_EXPIRED, AttributeValue::Bool(expired));
    }

    if assignments.is_empty() {
        return None;
    }

    names.insert(format!("#{USER_ID}"), USER_ID.to_string());

    Some(UpdateExpression {
        update: format!("SET {}", assignments.join(", ")),
        condition: format!("attribute_exists(#{USER_ID})"),
        names,
        values,
    })
}

/// Build a `FilterExpression` for a scan. `ScanFilter::All` needs none.
pub fn filter_expression(filter: &ScanFilter) -> Option<Expression> {
    match filter {
        ScanFilter::All => None,
        ScanFilter::Organization(organization_id) => Some(Expression {
            expression: format!("#{ORGANIZATION_ID} = :{ORGANIZATION_ID}"),
            names: HashMap::from([(format!("#{ORGANIZATION_ID}"), ORGANIZATION_ID.to_string())]),
            values: HashMap::from([(
                format!(":{ORGANIZATION_ID}"),
                AttributeValue::S(organization_id.clone()),
            )]),
        }),
        ScanFilter::UserIdPrefix(prefix) => Some(Expression {
            expression: format!("begins_with(#{USER_ID}, :prefix)"),
            names: HashMap::from([(format!("#{USER_ID}"), USER_ID.to_string())]),
            values: HashMap::from([(":prefix".to_string(), AttributeValue::S(prefix.clone()))]),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usertable_core::user::Phone;

    #[test]
    fn test_empty_changes_build_nothing() {
        assert!(update_expression(&UserChanges::new()).is_none());
    }

    #[test]
    fn test_update_touches_only_provided_fields() {
        let changes = UserChanges::new()
            .with_first_name("Ada")
            .with_phone(Phone::parse("-4.2").unwrap());

        let expr = update_expression(&changes).unwrap();

        assert_eq!(expr.update, "SET #firstName = :firstName, #phone = :phone");
        assert_eq!(expr.condition, "attribute_exists(#userId)");
        assert_eq!(expr.names.len(), 3);
        assert_eq!(expr.names.get("#userId").unwrap(), "userId");
        assert_eq!(
            expr.values.get(":firstName").unwrap().as_s().unwrap(),
            "Ada"
        );
        assert_eq!(expr.values.get(":phone").unwrap().as_n().unwrap(), "-4.2");
        assert!(!expr.values.contains_key(":lastName"));
    }

    #[test]
    fn test_update_membership_expired() {
        let expr = update_expression(&UserChanges::membership_expired(true)).unwrap();

        assert_eq!(expr.update, "SET #membershipExpired = :membershipExpired");
        assert!(expr
            .values
            .get(":membershipExpired")
            .unwrap()
            .as_bool()
            .unwrap());
    }

    #[test]
    fn test_update_all_fields_in_stable_order() {
        let changes = UserChanges {
            first_name: Some("A".to_string()),
            last_name: Some("B".to_string()),
            phone: Some(Phone::from(1_u64)),
            membership_expired: Some(false),
        };

        let expr = update_expression(&changes).unwrap();

        assert_eq!(
            expr.update,
            "SET #firstName = :firstName, #lastName = :lastName, #phone = :phone, \
             #membershipExpired = :membershipExpired"
        );
        assert_eq!(expr.values.len(), 4);
    }

    #[test]
    fn test_scan_all_has_no_filter() {
        assert!(filter_expression(&ScanFilter::All).is_none());
    }

    #[test]
    fn test_organization_filter() {
        let expr = filter_expression(&ScanFilter::Organization("org-1".to_string())).unwrap();

        assert_eq!(expr.expression, "#organizationId = :organizationId");
        assert_eq!(expr.names.get("#organizationId").unwrap(), "organizationId");
        assert_eq!(
            expr.values.get(":organizationId").unwrap().as_s().unwrap(),
            "org-1"
        );
    }

    #[test]
    fn test_pending_prefix_filter() {
        let expr = filter_expression(&ScanFilter::pending()).unwrap();

        assert_eq!(expr.expression, "begins_with(#userId, :prefix)");
        assert_eq!(
            expr.values.get(":prefix").unwrap().as_s().unwrap(),
            "PENDING#"
        );
    }
}
