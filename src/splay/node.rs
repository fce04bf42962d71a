pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Storage for a single key/value pair.
///
/// Keys are stored immutably in the [`Node`]; a node owns its two child
/// subtrees outright, so detaching or reattaching a subtree is a move of
/// the owning slot and nothing else.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}
