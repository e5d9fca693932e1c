use super::Metadata;

/// Capabilities an error type must expose to carry error codes
///
/// A node may have a metadata store, a single cause, and (for composite
/// errors) an ordered list of component errors. All three are optional;
/// the defaults describe a leaf error without a cause.
pub trait ErrorNode {
    /// The node's metadata store, or `None` if this error type has none
    fn metadata(&self) -> Option<&Metadata>;

    /// Mutable access to the node's metadata store
    fn metadata_mut(&mut self) -> Option<&mut Metadata>;

    /// The single error that caused this one
    fn cause(&self) -> Option<&dyn ErrorNode> {
        None
    }

    /// Component errors, in order. `Some` only for composite errors.
    fn components(&self) -> Option<Vec<&dyn ErrorNode>> {
        None
    }
}

/// Outgoing links of a node, as seen by the vector walk
pub(crate) enum Children<'a> {
    None,
    Cause(&'a dyn ErrorNode),
    Components(Vec<&'a dyn ErrorNode>),
}

impl<'a> Children<'a> {
    /// A non-empty component list wins over the cause link.
    pub(crate) fn of<N>(node: &'a N) -> Self
    where
        N: ErrorNode + ?Sized,
    {
        match node.components() {
            Some(components) if !components.is_empty() => Children::Components(components),
            _ => match node.cause() {
                Some(cause) => Children::Cause(cause),
                None => Children::None,
            },
        }
    }

    pub(crate) fn into_vec(self) -> Vec<&'a dyn ErrorNode> {
        match self {
            Children::None => Vec::new(),
            Children::Cause(cause) => vec![cause],
            Children::Components(components) => components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf;

    impl ErrorNode for Leaf {
        fn metadata(&self) -> Option<&Metadata> {
            None
        }

        fn metadata_mut(&mut self) -> Option<&mut Metadata> {
            None
        }
    }

    struct Both {
        cause: Leaf,
        components: Vec<Leaf>,
    }

    impl ErrorNode for Both {
        fn metadata(&self) -> Option<&Metadata> {
            None
        }

        fn metadata_mut(&mut self) -> Option<&mut Metadata> {
            None
        }

        fn cause(&self) -> Option<&dyn ErrorNode> {
            Some(&self.cause)
        }

        fn components(&self) -> Option<Vec<&dyn ErrorNode>> {
            Some(self.components.iter().map(|c| c as &dyn ErrorNode).collect())
        }
    }

    #[test]
    fn test_leaf_has_no_children() {
        assert!(matches!(Children::of(&Leaf), Children::None));
    }

    #[test]
    fn test_components_take_precedence_over_cause() {
        let node = Both {
            cause: Leaf,
            components: vec![Leaf, Leaf],
        };
        match Children::of(&node) {
            Children::Components(c) => assert_eq!(c.len(), 2),
            _ => panic!("expected components"),
        }
    }

    #[test]
    fn test_empty_components_fall_back_to_cause() {
        let node = Both {
            cause: Leaf,
            components: Vec::new(),
        };
        assert!(matches!(Children::of(&node), Children::Cause(_)));
        assert_eq!(Children::of(&node).into_vec().len(), 1);
    }
}
