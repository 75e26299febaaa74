use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use super::{Error, FileType, Result, Signatures};

#[derive(Debug, Deserialize)]
struct Record {
    signature: String,
    name: String,
    mime: String,
    extension: String,
}

/// Decodes a hex signature, ignoring any whitespace between the byte pairs.
pub(super) fn decode(signature: &str, line: u64) -> Result<Vec<u8>> {
    let digits: String = signature.split_whitespace().collect();
    if digits.is_empty() {
        return Err(Error::EmptySignature { line });
    }
    hex::decode(digits).map_err(|source| Error::Hex { line, source })
}

/// Parses a tab separated signature table.
///
/// Each row is `signature-hex`, `name`, `mime`, `extension`. Lines starting with `#` are comments.
pub fn parse(reader: impl Read) -> Result<Signatures> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());
        let Record {
            signature,
            name,
            mime,
            extension,
        } = record.deserialize(None)?;

        entries.push((
            decode(&signature, line)?,
            FileType {
                name,
                mime,
                extension,
            },
        ));
    }

    let signatures: Signatures = entries.into_iter().collect();
    debug!(
        signatures = signatures.len(),
        max_depth = signatures.max_depth(),
        "Loaded signature table"
    );
    Ok(signatures)
}
