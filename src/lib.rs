//! Navigation-stack state management.
//!
//! A [`Router`] owns an ordered [`RouteStack`] of route values and keeps an
//! opaque [`NavigationPath`] in lockstep with it. The host UI framework reads
//! the path after each mutation to drive on-screen transitions; tests and
//! debug views read the typed stack directly. Any `Clone + PartialEq` value
//! can serve as a route.

pub mod path;
pub mod router;

// Re-export common types for convenience
pub use path::{NavigationPath, PathElement};
pub use router::{RouteStack, Router};
