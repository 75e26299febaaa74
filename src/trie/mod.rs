pub mod iter;
mod keys;
mod node;
#[cfg(test)]
mod test;

pub use iter::{Bytes, Iter};

/// Anything that can be read as a sequence of bytes.
pub trait Key {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_;
}

/// Fan-out of each level of a node's child table.
///
/// A byte is split into its high and low nibble, so the 256 possible children
/// of a node live in up to 16 lazily allocated branches of 16 slots each.
const NIBBLES: usize = 16;
const _: () = assert!(
    NIBBLES * NIBBLES == u8::MAX as usize + 1,
    "Nibble table must address every byte"
);

type Branch<V> = [Option<Box<Node<V>>>; NIBBLES];

/// A single position in the trie, reached by consuming one byte per level.
pub struct Node<V> {
    /// Payload stored when this exact prefix was inserted.
    pub value: Option<V>,
    children: [Option<Box<Branch<V>>>; NIBBLES],
}

/// Map from byte sequences to values.
///
/// The root node is only allocated once something is inserted (or [`Trie::init`] is called),
/// so an empty trie costs nothing.
pub struct Trie<V> {
    root: Option<Node<V>>,
    max_depth: usize,
    len: usize,
}
