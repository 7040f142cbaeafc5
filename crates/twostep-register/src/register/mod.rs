//! Key registration: sub-modules.

pub mod types;
pub mod secret;
pub mod uri;
pub mod registration;

// Re-export top-level items for convenience.
pub use registration::{create_registration, create_registration_with_defaults};
pub use types::*;
