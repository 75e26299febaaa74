use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Malformed signature table: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid signature on line {line}: {source}")]
    Hex {
        line: u64,
        #[source]
        source: hex::FromHexError,
    },
    #[error("Empty signature on line {line} would match every input")]
    EmptySignature { line: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
