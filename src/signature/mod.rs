//! File type detection by leading bytes.

mod error;
pub use error::{Error, Result};
mod table;
pub use table::parse;

use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::trie::Trie;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileType {
    /// Human readable name of the format.
    pub name: String,
    pub mime: String,
    /// Usual file extension, without the leading dot.
    pub extension: String,
}

/// A dictionary of byte signatures, each identifying a [`FileType`].
#[derive(Debug, Clone, Default)]
pub struct Signatures {
    trie: Trie<usize>,
    types: Vec<FileType>,
}

impl FromIterator<(Vec<u8>, FileType)> for Signatures {
    fn from_iter<T: IntoIterator<Item = (Vec<u8>, FileType)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        let mut types = Vec::new();

        for (signature, file_type) in iter {
            if let Some(&index) = trie.get(&signature) {
                types[index] = file_type;
            } else {
                trie.insert(&signature, types.len());
                types.push(file_type);
            }
        }

        Signatures { trie, types }
    }
}

impl Signatures {
    /// Loads a signature table, see [`parse`] for the format.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        table::parse(reader)
    }

    /// Returns the number of distinct signatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Number of leading bytes needed to identify any known file type.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.trie.max_depth()
    }

    /// Returns an iterator over every signature and the file type it identifies.
    pub fn iter(&self) -> impl Iterator<Item = (Vec<u8>, &FileType)> + '_ {
        self.trie
            .iter()
            .map(|(signature, &index)| (signature, &self.types[index]))
    }

    /// Identifies the file type from the leading bytes of a file.
    ///
    /// The header is scanned as far as the known signatures reach, and the type is the one
    /// registered exactly where that scan stops.
    #[must_use]
    pub fn identify(&self, header: &[u8]) -> Option<&FileType> {
        let found = self.trie.scan(header).map(|&index| &self.types[index]);
        trace!(
            header = %header.escape_ascii(),
            found = found.map(|file_type| file_type.name.as_str()),
            "Identify"
        );
        found
    }

    /// Reads at most [`Signatures::max_depth`] bytes from `reader` and identifies them.
    pub fn identify_reader(&self, reader: impl Read) -> Result<Option<&FileType>> {
        let mut header = Vec::with_capacity(self.max_depth());
        reader
            .take(self.max_depth() as u64)
            .read_to_end(&mut header)?;
        Ok(self.identify(&header))
    }
}
