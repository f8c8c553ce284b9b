//! Iteration over a cause chain.

use std::error::Error;

/// Iterator over an error and its transitive causes, outermost first.
///
/// Follows `Error::source` links, so traversal crosses between
/// structured and opaque errors transparently.
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(head: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StructuredError;

    #[derive(Debug, PartialEq)]
    enum Kind {
        Read,
        Parse,
    }

    #[test]
    fn chain_yields_outermost_first() {
        let base = StructuredError::new(Kind::Read, "read failed");
        let err = StructuredError::wrap(Kind::Parse, "parse failed", base);

        // Each layer renders itself plus everything beneath it.
        let rendered: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(rendered, vec!["parse failed: read failed", "read failed"]);
    }

    #[test]
    fn chain_on_leaf_yields_single_entry() {
        let err = StructuredError::new(Kind::Read, "read failed");
        assert_eq!(err.chain().count(), 1);
    }

    #[test]
    fn chain_crosses_into_opaque_causes() {
        let io = std::io::Error::other("disk offline");
        let err = StructuredError::wrap(Kind::Read, "read failed", Box::new(io));

        let last = err.chain().last().expect("chain is never empty");
        assert_eq!(last.to_string(), "disk offline");
    }
}
