//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the `UserStore`
//! trait using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod expressions;
mod keys;
mod repository;

pub use conversions::{item_to_user, user_to_item};
pub use repository::DynamoDbUserStore;
