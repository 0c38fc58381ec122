//! Opaque path mirror of the route stack.
//!
//! The host UI framework reads the path after every router mutation to drive
//! on-screen transitions. It never writes it: the mutators are crate-private
//! and only [`Router`](crate::Router) calls them.

/// An opaque token standing for one pushed screen in the path.
///
/// Tokens carry a path-local id that is never reused within the same path, so
/// a host can key per-screen transition state on them: the tokens of a
/// surviving prefix are unchanged by any truncation, and every append mints a
/// fresh one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathElement(u64);

impl std::fmt::Debug for PathElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PathElement({})", self.0)
    }
}

/// The platform-facing mirror of the route stack.
///
/// Append/truncate-only; its element count always equals the stack count of
/// the owning router. The public surface is read-only.
#[derive(Debug, Clone, Default)]
pub struct NavigationPath {
    elements: Vec<PathElement>,
    next_id: u64,
}

impl NavigationPath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one element, minting a fresh token.
    pub(crate) fn push(&mut self) -> PathElement {
        let element = PathElement(self.next_id);
        self.next_id += 1;
        self.elements.push(element);
        element
    }

    /// Remove the last `n` elements. Saturates at empty.
    pub(crate) fn remove_last(&mut self, n: usize) {
        let keep = self.elements.len().saturating_sub(n);
        self.elements.truncate(keep);
    }

    /// The elements currently in the path, root first.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Iterate the elements, root first.
    pub fn iter(&self) -> std::slice::Iter<'_, PathElement> {
        self.elements.iter()
    }

    /// Number of elements in the path.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a NavigationPath {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_mints_fresh_tokens() {
        let mut path = NavigationPath::new();
        let a = path.push();
        let b = path.push();
        assert_ne!(a, b);
        assert_eq!(path.elements(), &[a, b]);
    }

    #[test]
    fn test_remove_last_keeps_prefix_tokens() {
        let mut path = NavigationPath::new();
        let a = path.push();
        let b = path.push();
        path.push();
        path.remove_last(1);
        assert_eq!(path.elements(), &[a, b]);
    }

    #[test]
    fn test_tokens_never_reused_after_truncation() {
        let mut path = NavigationPath::new();
        path.push();
        let b = path.push();
        path.remove_last(1);
        let c = path.push();
        assert_ne!(b, c);
    }

    #[test]
    fn test_remove_last_saturates() {
        let mut path = NavigationPath::new();
        path.push();
        path.remove_last(5);
        assert!(path.is_empty());
        path.remove_last(1);
        assert!(path.is_empty());
    }
}
