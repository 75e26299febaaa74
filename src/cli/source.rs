use bytetrie::{Signatures, signature};
use clap::{
    ValueEnum,
    builder::{PossibleValue, TypedValueParser, ValueParserFactory},
};

use crate::cli::builtins::BuiltinTable;

/// Where the signature table is read from.
///
/// The argument is first matched against the builtin table names; anything else is opened as
/// a TSV file (`-` reads the table from stdin).
#[derive(Debug, Clone)]
pub enum TableSource<T: ValueEnum> {
    Builtin(T),
    File(clio::Input),
}

impl<T: ValueEnum + BuiltinTable> TableSource<T> {
    /// Parses the selected table into a signature dictionary.
    pub fn load(&mut self) -> signature::Result<Signatures> {
        match self {
            Self::Builtin(table) => Signatures::from_reader(table.reader()),
            Self::File(file) => Signatures::from_reader(file.lock()),
        }
    }
}

impl<T: ValueEnum> ValueParserFactory for TableSource<T> {
    type Parser = TableSourceParser<T>;

    fn value_parser() -> Self::Parser {
        TableSourceParser(std::marker::PhantomData)
    }
}

#[derive(Debug, Clone)]
pub struct TableSourceParser<T: ValueEnum>(std::marker::PhantomData<T>);

impl<T: ValueEnum + Send + Sync + 'static> TypedValueParser for TableSourceParser<T> {
    type Value = TableSource<T>;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let builtin = clap::builder::EnumValueParser::<T>::new();
        if let Ok(table) = builtin.parse_ref(cmd, arg, value) {
            return Ok(TableSource::Builtin(table));
        }
        let file = clio::Input::try_from(value).map_err(|err| {
            clap::Error::raw(
                clap::error::ErrorKind::Io,
                format!("cannot open signature table: {err}\n"),
            )
            .with_cmd(cmd)
        })?;
        Ok(TableSource::File(file))
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        let tables = T::value_variants()
            .iter()
            .filter_map(ValueEnum::to_possible_value);
        let file = PossibleValue::new("<table.tsv>")
            .help("TSV file of hex signature, name, mime type and extension");
        Some(Box::new(tables.chain(std::iter::once(file))))
    }
}
