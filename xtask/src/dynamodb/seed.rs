//! Seed command implementation.

use std::collections::HashSet;

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::{PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;
use rand::Rng;
use usertable::storage::dynamodb::user_to_item;
use usertable_core::user::{pending_user_id, User};
use uuid::Uuid;

/// Maximum items per BatchWriteItem request.
const BATCH_SIZE: usize = 25;

/// Length of generated invitation codes.
const CODE_LENGTH: usize = 6;

const FIRST_NAMES: [&str; 12] = [
    "Ada", "Alan", "Barbara", "Charles", "Donald", "Edsger", "Frances", "Grace", "John",
    "Katherine", "Margaret", "Radia",
];

const LAST_NAMES: [&str; 12] = [
    "Allen", "Babbage", "Dijkstra", "Hamilton", "Hopper", "Johnson", "Knuth", "Liskov",
    "Lovelace", "McCarthy", "Perlman", "Turing",
];

/// Generate demo users.
///
/// Every organization gets `users_per_org` active users. `invitations`
/// pending users are spread over the organizations, each with a distinct
/// random code.
pub fn generate_seed_users<R: Rng + ?Sized>(
    rng: &mut R,
    organizations: u32,
    users_per_org: u32,
    invitations: u32,
) -> Vec<User> {
    let organization_ids: Vec<String> = (0..organizations)
        .map(|_| format!("org-{}", Uuid::new_v4().simple()))
        .collect();

    let mut users = Vec::new();

    for organization_id in &organization_ids {
        for _ in 0..users_per_org {
            let mut user = random_user(rng, Uuid::new_v4().to_string(), organization_id);
            if rng.random_bool(0.2) {
                user.membership_expired = Some(true);
            }
            users.push(user);
        }
    }

    if organization_ids.is_empty() {
        return users;
    }

    let mut codes = HashSet::new();
    for i in 0..invitations as usize {
        let organization_id = &organization_ids[i % organization_ids.len()];
        let code = loop {
            let code = invitation_code(rng);
            if codes.insert(code.clone()) {
                break code;
            }
        };
        users.push(random_user(rng, pending_user_id(&code), organization_id));
    }

    users
}

fn random_user<R: Rng + ?Sized>(rng: &mut R, user_id: String, organization_id: &str) -> User {
    let first_name = FIRST_NAMES.choose(rng).copied().unwrap_or("Ada");
    let last_name = LAST_NAMES.choose(rng).copied().unwrap_or("Lovelace");
    let phone = rng.random_range(5_550_000..5_560_000);
    User::new(user_id, organization_id, first_name, last_name, phone)
}

/// A random lowercase alphanumeric invitation code.
pub fn invitation_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
        .collect()
}

/// Insert users into DynamoDB.
pub async fn seed_users(client: &Client, table_name: &str, users: &[User]) -> Result<usize> {
    let mut inserted = 0;

    for chunk in users.chunks(BATCH_SIZE) {
        let write_requests = chunk
            .iter()
            .map(|user| {
                let put = PutRequest::builder()
                    .set_item(Some(user_to_item(user)))
                    .build()
                    .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
                Ok(WriteRequest::builder().put_request(put).build())
            })
            .collect::<Result<Vec<_>>>()?;

        let output = client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        let unprocessed: usize = output
            .unprocessed_items()
            .map(|items| items.values().map(Vec::len).sum())
            .unwrap_or_default();
        if unprocessed > 0 {
            return Err(DynamodbError::UnprocessedItems { count: unprocessed });
        }

        inserted += chunk.len();
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_requested_population() {
        let mut rng = StdRng::seed_from_u64(7);

        let users = generate_seed_users(&mut rng, 3, 4, 5);

        assert_eq!(users.len(), 17);
        assert_eq!(users.iter().filter(|u| u.is_pending()).count(), 5);

        let organizations: HashSet<&str> =
            users.iter().map(|u| u.organization_id.as_str()).collect();
        assert_eq!(organizations.len(), 3);
    }

    #[test]
    fn test_invitation_codes_are_distinct() {
        let mut rng = StdRng::seed_from_u64(42);

        let users = generate_seed_users(&mut rng, 2, 0, 50);

        let codes: HashSet<&str> = users.iter().filter_map(|u| u.invitation_code()).collect();
        assert_eq!(codes.len(), 50);
    }

    #[test]
    fn test_invitation_code_shape() {
        let mut rng = StdRng::seed_from_u64(1);

        let code = invitation_code(&mut rng);

        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_no_organizations_means_no_invitations() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate_seed_users(&mut rng, 0, 5, 5).is_empty());
    }
}
