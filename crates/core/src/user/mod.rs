mod error;
mod invitation;
pub mod keys;
mod phone;
mod types;

pub use error::UserKeyError;
pub use invitation::find_pending_by_code;
pub use keys::{pending_user_id, UserKey, PENDING_PREFIX};
pub use phone::Phone;
pub use types::{User, UserChanges};
