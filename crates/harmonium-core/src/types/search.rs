//! Search pagination types.

use serde::{Deserialize, Serialize};

/// One page of category search results plus the opaque continuation
/// token for the next page. The token is a capability handed back to the
/// backend verbatim; it is never parsed or inspected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchPage<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Continuation token. `None` means no further page.
    pub continuation: Option<String>,
}

impl<T> SearchPage<T> {
    pub const fn new(items: Vec<T>, continuation: Option<String>) -> Self {
        Self {
            items,
            continuation,
        }
    }

    /// An empty, exhausted page.
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            continuation: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for SearchPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page() {
        let page: SearchPage<String> = SearchPage::empty();
        assert!(page.is_empty());
        assert!(page.continuation.is_none());
    }
}
