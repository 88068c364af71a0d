mod error;
pub mod pagination;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use pagination::{count_all, scan_all};
pub use traits::UserStore;
pub use types::{ContinuationToken, CountPage, ScanFilter, ScanPage, ScanRequest};
