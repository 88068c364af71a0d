//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `UserStore` trait
//! defined in `usertable_core::storage`. Backends are compiled in via feature
//! flags and picked at runtime with `--backend`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory` (default): ordered in-memory backend, used for demos and tests
//!
//! # Examples
//!
//! Build with DynamoDB only:
//! ```bash
//! cargo build -p usertable --no-default-features --features dynamodb
//! ```

#[cfg(not(any(feature = "dynamodb", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p usertable --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbUserStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryUserStore;
