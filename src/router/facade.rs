//! The navigation facade: one struct owning the stack and its path mirror.

use tracing::{debug, warn};

use crate::path::NavigationPath;
use crate::router::stack::RouteStack;

/// A router that manages a navigation stack and its opaque path mirror.
///
/// The typed stack is the single source of truth; the path is updated inside
/// the same operation, so the two are never observably out of step. Popping an
/// empty stack and popping to a route that was never pushed are defined as
/// no-ops, not errors: downstream callers rely on that, so neither case
/// returns a failure or changes state. Both emit a `tracing` warning for
/// diagnosis.
///
/// The router is single-threaded by design. There is no internal locking;
/// confine it to one logical execution context (the UI event loop) and hand it
/// to descendant components by explicit injection, never through a global.
///
/// # Example
/// ```
/// use navstack::Router;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Route { Home, Profile(String) }
///
/// let mut router = Router::new();
/// router.navigate(Route::Home);
/// router.navigate(Route::Profile("u1".into()));
/// assert_eq!(router.current(), Some(&Route::Profile("u1".into())));
/// router.pop_to(&Route::Home);
/// assert_eq!(router.current_routes(), &[Route::Home]);
/// ```
#[derive(Debug, Clone)]
pub struct Router<R: Clone + PartialEq> {
    stack: RouteStack<R>,
    path: NavigationPath,
}

impl<R: Clone + PartialEq> Router<R> {
    /// Create a router with an empty stack and an empty path.
    pub fn new() -> Self {
        Self {
            stack: RouteStack::new(),
            path: NavigationPath::new(),
        }
    }

    /// Push `route` onto the stack and append one element to the path.
    ///
    /// Always succeeds; the count grows by exactly one. Duplicates of routes
    /// already on the stack are allowed.
    pub fn navigate(&mut self, route: R) {
        self.stack.push(route);
        self.path.push();
        debug!(depth = self.stack.len(), "navigate");
        self.check_lockstep();
    }

    /// Remove the top route and the last path element.
    ///
    /// No-op if the stack is empty.
    pub fn pop(&mut self) {
        if self.stack.pop().is_none() {
            warn!("pop ignored: navigation stack is empty");
            return;
        }
        self.path.remove_last(1);
        debug!(depth = self.stack.len(), "pop");
        self.check_lockstep();
    }

    /// Remove every route and path element in one step.
    ///
    /// No-op if already empty.
    pub fn pop_to_root(&mut self) {
        let removed = self.stack.len();
        self.stack.clear();
        self.path.remove_last(removed);
        debug!(removed, "pop_to_root");
        self.check_lockstep();
    }

    /// Truncate the stack so the first occurrence of `route` becomes the top.
    ///
    /// The scan starts at the root, so with duplicates the occurrence closest
    /// to the root wins and any later duplicates are discarded. No-op if
    /// `route` is not on the stack.
    pub fn pop_to(&mut self, route: &R) {
        let Some(index) = self.stack.first_index_of(route) else {
            warn!("pop_to ignored: route is not on the stack");
            return;
        };
        let removed = self.stack.len() - index - 1;
        self.stack.truncate_to(index + 1);
        self.path.remove_last(removed);
        debug!(removed, depth = self.stack.len(), "pop_to");
        self.check_lockstep();
    }

    /// The routes currently on the stack, root first.
    pub fn current_routes(&self) -> &[R] {
        self.stack.routes()
    }

    /// The current top route, if any.
    pub fn current(&self) -> Option<&R> {
        self.stack.top()
    }

    /// Read-only view of the path mirror for the host layer.
    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    /// Number of routes on the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn check_lockstep(&self) {
        debug_assert_eq!(self.stack.len(), self.path.len());
    }
}

impl<R: Clone + PartialEq> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}
