//! Core types and storage contracts for usertable.
//!
//! Everything in this crate is free of I/O: domain types, key rules, pure
//! invitation matching, the [`storage::UserStore`] trait implemented by the
//! storage backends, and the pagination loops that run on top of it.

pub mod storage;
pub mod user;
