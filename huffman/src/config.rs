/// Codeword given to the only symbol of a one-symbol alphabet.
///
/// A tree with a single leaf has no edges, so the path to that leaf is empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SingleSymbolCode {
    /// Use the empty path. Every input then encodes to the empty bit string,
    /// whatever its length.
    Empty,
    /// Use `0`, so that each occurrence produces one bit.
    SingleBit,
}

impl Default for SingleSymbolCode {
    fn default() -> SingleSymbolCode {
        SingleSymbolCode::Empty
    }
}

/// Options for code generation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    pub single_symbol: SingleSymbolCode,
}

impl Config {
    pub fn single_symbol(mut self, single_symbol: SingleSymbolCode) -> Config {
        self.single_symbol = single_symbol;
        self
    }
}
