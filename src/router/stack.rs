//! The canonical ordered route sequence.

/// Ordered navigation history, the single source of truth for the router.
///
/// Index 0 is the root (first-ever pushed route), the highest index is the
/// current top. Duplicate route values may appear at different indices.
/// Mutators are crate-private; the public surface is read-only.
#[derive(Debug, Clone, Default)]
pub struct RouteStack<R> {
    routes: Vec<R>,
}

impl<R> RouteStack<R> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route at the top.
    pub(crate) fn push(&mut self, route: R) {
        self.routes.push(route);
    }

    /// Remove and return the top route, if any.
    pub(crate) fn pop(&mut self) -> Option<R> {
        self.routes.pop()
    }

    /// Keep only the first `len` routes.
    pub(crate) fn truncate_to(&mut self, len: usize) {
        self.routes.truncate(len);
    }

    /// Remove all routes.
    pub(crate) fn clear(&mut self) {
        self.routes.clear();
    }

    /// The routes in insertion order, root first.
    pub fn routes(&self) -> &[R] {
        &self.routes
    }

    /// The current top route, if any.
    pub fn top(&self) -> Option<&R> {
        self.routes.last()
    }

    /// Number of routes on the stack.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<R: PartialEq> RouteStack<R> {
    /// Index of the first occurrence of `route`, scanning from the root.
    pub fn first_index_of(&self, route: &R) -> Option<usize> {
        self.routes.iter().position(|r| r == route)
    }
}
