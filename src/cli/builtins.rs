/// A table compiled into the binary.
pub trait BuiltinTable {
    fn bytes(&self) -> &'static [u8];

    fn reader(&self) -> std::io::Cursor<&'static [u8]> {
        std::io::Cursor::new(self.bytes())
    }
}

macro_rules! impl_builtin_table {
    ($struct:ident, $($field:ident => $filepath:literal),*) => {
        impl crate::cli::builtins::BuiltinTable for $struct {
            fn bytes(&self) -> &'static [u8] {
                match self {
                    $(
                        Self::$field => {
                            include_flate::flate!(static DATA: [u8] from $filepath);
                            DATA.as_slice()
                        }
                    )*
                }
            }
        }
    };
}
pub(crate) use impl_builtin_table;
