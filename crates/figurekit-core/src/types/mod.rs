//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`ids`]: Opaque identities for figures and listeners
//! - [`aliases`]: Shorthands for the shared-state types used across crates

pub mod aliases;
pub mod ids;

pub use aliases::*;
pub use ids::*;
