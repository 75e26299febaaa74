//! A trie keyed by raw byte sequences.
//!
//! Besides exact lookups, [`Trie::scan`] walks an input buffer as far as the stored keys allow,
//! which makes it a good fit for recognising files by their leading bytes.
//!
//! ```
//! use bytetrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("hello", 1);
//! trie.insert("world", 2);
//! trie.insert("help", 3);
//! trie.insert("work", 4);
//!
//! assert_eq!(trie.get("help"), Some(&3));
//! assert_eq!(trie.scan("hello world"), Some(&1));
//! assert_eq!(trie.max_depth(), 5);
//! assert_eq!(trie.values().sum::<i32>(), 10);
//! ```

#[cfg(feature = "signatures")]
pub mod signature;
pub mod trie;

#[cfg(feature = "signatures")]
pub use signature::{FileType, Signatures};
pub use trie::{Key, Trie};
