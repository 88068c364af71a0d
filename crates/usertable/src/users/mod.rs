//! The Users repository façade.
//!
//! Thin operations over a [`UserStore`](usertable_core::storage::UserStore):
//! each one shapes its arguments, talks to the store, logs the outcome and
//! returns either data or a typed outcome. Store errors are logged and
//! returned as values.

mod outcome;
mod repository;

pub use outcome::{ActivationOutcome, BulkDeleteOutcome, UpdateOutcome};
pub use repository::UsersRepository;
