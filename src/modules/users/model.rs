//! Identity record models.
//!
//! Re-exported from the `wgedu-models` crate.

pub use wgedu_models::users::{User, UserWithPassword};
