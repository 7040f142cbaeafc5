//! One-time password engine: sub-modules.

pub mod types;
pub mod guard;
pub mod base32;
pub mod core;

// Re-export top-level items for convenience.
pub use types::*;
