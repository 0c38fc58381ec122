//! Router module.
//!
//! `Router` is the navigation facade; `RouteStack` holds the canonical route
//! sequence it mutates.

pub mod facade;
pub mod stack;

pub use facade::Router;
pub use stack::RouteStack;
