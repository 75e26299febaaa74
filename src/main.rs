mod cli;

use std::io::Write;

use bytetrie::{FileType, Signatures, Trie, signature};
use clap::Parser;
use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::{Cli, Cmd, OptsSignatures, OutputFormat};

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to load the signature table: {0}")]
    Table(#[source] signature::Error),
    #[error("Unable to read '{0}': {1}")]
    Input(String, #[source] signature::Error),
    #[error("Unable to write the output: {0}")]
    Output(#[from] std::io::Error),
    #[error("Unable to encode the output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} of {1} inputs have an unknown file type")]
    Unknown(usize, usize),
}

#[derive(Debug, Serialize)]
struct Identified<'a> {
    path: &'a str,
    #[serde(rename = "type")]
    file_type: Option<&'a FileType>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = entry() {
        {
            eprintln!("{}", err)
        }
        std::process::exit(1)
    }
}

fn entry() -> Result<(), Error> {
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Demo => demo(),
        Cmd::Identify(mut opts) => {
            let signatures = load(&mut opts.table)?;
            let mut f = std::io::stdout().lock();
            let mut unknown = 0;

            for input in opts.files.iter_mut() {
                let path = input.path().to_string();
                let file_type = signatures
                    .identify_reader(&mut *input)
                    .map_err(|err| Error::Input(path.clone(), err))?;
                if file_type.is_none() {
                    unknown += 1;
                }

                match opts.format {
                    OutputFormat::Human => match file_type {
                        Some(t) => writeln!(f, "{path}: {} ({})", t.name, t.mime)?,
                        None => writeln!(f, "{path}: unknown")?,
                    },
                    OutputFormat::Json => {
                        serde_json::to_writer(
                            &mut f,
                            &Identified {
                                path: &path,
                                file_type,
                            },
                        )?;
                        writeln!(f)?;
                    }
                }
            }

            if unknown > 0 {
                Err(Error::Unknown(unknown, opts.files.len()))
            } else {
                Ok(())
            }
        }
        Cmd::Keys(mut opts) => {
            let signatures = load(&mut opts.table)?;
            let mut f = std::io::stdout().lock();
            for (signature, t) in signatures.iter() {
                let hex = signature.iter().map(|byte| format!("{byte:02X}")).join(" ");
                writeln!(f, "{hex}\t{}", t.name)?;
            }
            Ok(())
        }
    }
}

fn load(opts: &mut OptsSignatures) -> Result<Signatures, Error> {
    let signatures = opts.signatures.load().map_err(Error::Table)?;
    info!(
        signatures = signatures.len(),
        header = signatures.max_depth(),
        "Signature table ready"
    );
    Ok(signatures)
}

fn demo() -> Result<(), Error> {
    let mut trie = Trie::new();
    trie.init();
    for key in ["hello", "world", "help", "work"] {
        trie.insert(key, true);
    }
    debug!(entries = trie.len(), "Built demo trie");

    trie.print_keys()?;
    println!("max depth is {}", trie.max_depth());
    Ok(())
}
