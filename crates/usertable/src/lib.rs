//! usertable - a repository façade over the DynamoDB "Users" table.
//!
//! The binary in `main.rs` wires the pieces together: [`config`] and [`cli`]
//! decide which [`storage`] backend to build, and [`users::UsersRepository`]
//! runs the requested operation against it.

pub mod cli;
pub mod config;
#[cfg(feature = "inmemory")]
pub mod mock_data;
pub mod output;
pub mod storage;
pub mod users;
