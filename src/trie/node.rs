use super::{Bytes, Iter, Key, NIBBLES, Node, Trie};
use smallvec::{SmallVec, smallvec};
use std::any::type_name;

#[inline]
fn nibbles(byte: u8) -> (usize, usize) {
    const _: () = assert!(NIBBLES == 1 << 4, "A byte must split into two nibble indices");
    ((byte >> 4) as usize, (byte & 0x0F) as usize)
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Node {
            value: None,
            children: Default::default(),
        }
    }
}

// Keys may be arbitrarily long, so nothing below a node may be torn down recursively.
impl<V> Drop for Node<V> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let children: Vec<u8> = self.bytes().map(|(byte, _)| byte).collect();
        f.debug_struct(type_name::<Node<V>>())
            .field("value", &self.value)
            .field("children", &children.escape_ascii().to_string())
            .finish()
    }
}

impl<V> Node<V> {
    pub fn new() -> Self {
        Node::default()
    }

    /// Returns the child reached by consuming `byte`, if one was ever created.
    #[must_use]
    pub fn child(&self, byte: u8) -> Option<&Node<V>> {
        let (high, low) = nibbles(byte);
        self.children[high].as_ref()?[low].as_deref()
    }

    pub fn child_mut(&mut self, byte: u8) -> Option<&mut Node<V>> {
        let (high, low) = nibbles(byte);
        self.children[high].as_mut()?[low].as_deref_mut()
    }

    fn child_or_insert(&mut self, byte: u8) -> &mut Node<V> {
        let (high, low) = nibbles(byte);
        self.children[high].get_or_insert_with(Default::default)[low]
            .get_or_insert_with(Default::default)
    }

    /// Returns an iterator over the children of this node, in ascending byte order.
    pub fn bytes(&self) -> Bytes<'_, V> {
        Bytes::new(self)
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    pub(super) fn branch(&self, high: usize) -> Option<&super::Branch<V>> {
        self.children[high].as_deref()
    }

    fn detach_children(&mut self, pending: &mut Vec<Box<Node<V>>>) {
        for branch in self.children.iter_mut().filter_map(Option::take) {
            pending.extend((*branch).into_iter().flatten());
        }
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Trie::new()
    }
}

impl<V: Clone> Clone for Trie<V> {
    fn clone(&self) -> Self {
        let mut trie = Trie::new();
        if self.root.is_some() {
            trie.init();
        }
        self.for_each(|key, value| {
            trie.insert(key, value.clone());
        });
        trie
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, value)| (key.escape_ascii().to_string(), value)))
            .finish()
    }
}

impl<V: PartialEq> PartialEq for Trie<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for Trie<V> {}

impl<V> Trie<V> {
    pub const fn new() -> Self {
        Trie {
            root: None,
            max_depth: 0,
            len: 0,
        }
    }

    /// Allocates the root node if it does not exist yet.
    ///
    /// Every mutating operation does this implicitly, so calling it is never required.
    /// Calling it again leaves the stored entries untouched.
    pub fn init(&mut self) {
        self.root.get_or_insert_with(Node::new);
    }

    /// Length in bytes of the longest key ever inserted.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_ref()
    }

    /// Stores `value` under `key`, returning the value previously stored there.
    pub fn insert<K: Key + ?Sized>(&mut self, key: &K, value: V) -> Option<V> {
        self.insert_bytes(key.as_bytes(), value)
    }

    /// Stores `value` under the concatenation of every part of the key, in order.
    pub fn insert_parts<'k, K, I>(&mut self, parts: I, value: V) -> Option<V>
    where
        K: Key + ?Sized + 'k,
        I: IntoIterator<Item = &'k K>,
    {
        self.insert_bytes(parts.into_iter().flat_map(|part| part.as_bytes()), value)
    }

    fn insert_bytes(&mut self, key: impl IntoIterator<Item = u8>, value: V) -> Option<V> {
        let mut current_node = self.root.get_or_insert_with(Node::new);
        let mut depth = 0;
        for byte in key {
            current_node = current_node.child_or_insert(byte);
            depth += 1;
        }
        self.max_depth = self.max_depth.max(depth);

        let previous = current_node.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    fn find<K: Key + ?Sized>(&self, key: &K) -> Option<&Node<V>> {
        let mut current_node = self.root.as_ref()?;
        for byte in key.as_bytes() {
            current_node = current_node.child(byte)?;
        }
        Some(current_node)
    }

    /// Returns the value stored under exactly `key`.
    ///
    /// A key that only exists as the prefix of longer keys has no value.
    pub fn get<K: Key + ?Sized>(&self, key: &K) -> Option<&V> {
        self.find(key)?.value.as_ref()
    }

    pub fn get_mut<K: Key + ?Sized>(&mut self, key: &K) -> Option<&mut V> {
        let mut current_node = self.root.as_mut()?;
        for byte in key.as_bytes() {
            current_node = current_node.child_mut(byte)?;
        }
        current_node.value.as_mut()
    }

    #[must_use]
    pub fn contains_key<K: Key + ?Sized>(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Greedily follows `sequence` down the trie and returns the value of the node it stops at.
    ///
    /// The walk stops at the first byte without a matching child or at the end of the input.
    /// It never backs off to a shorter prefix: if the stopping node holds no value, nothing
    /// matches, even when an ancestor along the path does hold one.
    pub fn scan<K: Key + ?Sized>(&self, sequence: &K) -> Option<&V> {
        let mut current_node = self.root.as_ref()?;
        for byte in sequence.as_bytes() {
            match current_node.child(byte) {
                Some(next) => current_node = next,
                None => break,
            }
        }
        current_node.value.as_ref()
    }

    /// Calls `visit` with the key and value of every stored entry.
    pub fn for_each(&self, mut visit: impl FnMut(&[u8], &V)) {
        let Some(ref root) = self.root else {
            return;
        };
        let mut key = Vec::with_capacity(self.max_depth);
        if let Some(ref value) = root.value {
            visit(key.as_slice(), value);
        }

        let mut stack: SmallVec<[Bytes<'_, V>; 8]> = smallvec![root.bytes()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some((byte, child)) => {
                    key.push(byte);
                    if let Some(ref value) = child.value {
                        visit(key.as_slice(), value);
                    }
                    stack.push(child.bytes());
                }
                None => {
                    stack.pop();
                    key.pop();
                }
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.root.as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Writes every key on its own line, decoding the bytes as (lossy) UTF-8.
    pub fn write_keys(&self, mut f: impl std::io::Write) -> std::io::Result<()> {
        let mut result = Ok(());
        self.for_each(|key, _| {
            if result.is_ok() {
                result = writeln!(f, "{}", String::from_utf8_lossy(key));
            }
        });
        result
    }

    pub fn print_keys(&self) -> std::io::Result<()> {
        self.write_keys(std::io::stdout().lock())
    }
}
