//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the `UserStore` trait
//! that keeps users in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. It follows
//! the same paging contract as DynamoDB, which makes it the test double for
//! everything built on top of the store.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryUserStore;
//!
//! let store = InMemoryUserStore::new().with_page_limit(2);
//! // Use store for testing...
//! ```

mod repository;

pub use repository::InMemoryUserStore;
