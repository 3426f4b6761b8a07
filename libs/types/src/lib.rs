//! Types library for the reading analytics platform
//!
//! This library provides the core type definitions shared between the
//! analytics service and its collaborators (catalog, presentation layer),
//! ensuring type safety and deterministic behavior.
//!
//! # Modules
//! - `ids`: Unique identifiers (BookId, ChapterId, SessionId)
//! - `session`: Client-reported reading session types
//! - `analytics`: Per-book analytics snapshot types
//! - `errors`: Error taxonomy

// Public modules
pub mod analytics;
pub mod errors;
pub mod ids;
pub mod session;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::analytics::*;
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::session::*;
}
