use super::{Key, NIBBLES, Node, Trie};
use smallvec::SmallVec;

/// Children of a single node, with the byte that leads to each.
pub struct Bytes<'a, V> {
    base: &'a Node<V>,
    high: usize,
    low: usize,
}

impl<V> Clone for Bytes<'_, V> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, V> Bytes<'a, V> {
    pub fn new(node: &'a Node<V>) -> Self {
        Self {
            base: node,
            high: 0,
            low: 0,
        }
    }
}

impl<'a, V> Iterator for Bytes<'a, V> {
    type Item = (u8, &'a Node<V>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.high < NIBBLES {
            if let Some(branch) = self.base.branch(self.high) {
                while self.low < NIBBLES {
                    let low = self.low;
                    self.low += 1;
                    if let Some(child) = branch[low].as_deref() {
                        return Some((((self.high << 4) | low) as u8, child));
                    }
                }
            }
            self.high += 1;
            self.low = 0;
        }
        None
    }
}

/// Depth-first iterator over every stored entry of a [`Trie`].
///
/// Keys are yielded in ascending byte order, shorter keys before their extensions.
#[must_use]
pub struct Iter<'a, V> {
    /// Value of the root (the empty key), yielded before anything else.
    pending: Option<&'a V>,
    stack: SmallVec<[Bytes<'a, V>; 8]>,
    key: Vec<u8>,
}

impl<'a, V> Iter<'a, V> {
    pub(super) fn new(root: Option<&'a Node<V>>) -> Self {
        let mut stack = SmallVec::new();
        let pending = root.and_then(|root| {
            stack.push(root.bytes());
            root.value.as_ref()
        });
        Self {
            pending,
            stack,
            key: Vec::new(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.pending.take() {
            return Some((Vec::new(), value));
        }
        while let Some(children) = self.stack.last_mut() {
            match children.next() {
                Some((byte, child)) => {
                    self.key.push(byte);
                    self.stack.push(child.bytes());
                    if let Some(ref value) = child.value {
                        return Some((self.key.clone(), value));
                    }
                }
                None => {
                    self.stack.pop();
                    self.key.pop();
                }
            }
        }
        None
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (Vec<u8>, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Key, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K: Key, V> Extend<(K, V)> for Trie<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(&key, value);
        }
    }
}
