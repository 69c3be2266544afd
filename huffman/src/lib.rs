//! Minimum-redundancy prefix codes.
//!
//! The pipeline is split into the stages it is made of: count symbol
//! frequencies ([`FrequencyTable`]), build the code tree by greedily merging
//! the two lightest nodes ([`Tree`]), read the codewords off the tree
//! ([`CodeTable`]) and finally concatenate the codewords of the input
//! ([`BitString`]).
//!
//! ```
//! let (encoded, codes) = prefixcode_huffman::encode_str("abracadabra").unwrap();
//! assert_eq!(codes.get(&'a').unwrap().to_string(), "0");
//! assert_eq!(encoded.len(), codes.encoded_len("abracadabra".chars()).unwrap());
//! ```

use std::hash::Hash;
use thiserror::Error;

pub use self::bits::BitString;
pub use self::bits::Codeword;
pub use self::code::CodeTable;
pub use self::config::Config;
pub use self::config::SingleSymbolCode;
pub use self::frequency::FrequencyTable;
pub use self::tree::Node;
pub use self::tree::Tree;

pub mod bits;
pub mod code;
pub mod config;
pub mod frequency;
pub mod tree;

/// There were no symbols to build a code from.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no symbols to build a code from")]
pub struct InvalidInput;

/// A symbol of the input has no codeword in the code table.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("symbol at position {position} is not in the code table")]
pub struct LookupError {
    /// Index of the offending symbol in the input sequence.
    pub position: usize,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Builds the code for `input` and encodes `input` with it.
///
/// Fails with [`Error::InvalidInput`] if `input` is empty.
pub fn encode<S: Clone + Eq + Hash>(input: &[S]) -> Result<(BitString, CodeTable<S>), Error> {
    encode_with(input, &Config::default())
}

/// Like [`encode`], but with an explicit [`Config`].
pub fn encode_with<S: Clone + Eq + Hash>(
    input: &[S],
    config: &Config,
) -> Result<(BitString, CodeTable<S>), Error> {
    let frequencies = FrequencyTable::from_symbols(input.iter().cloned());
    let tree = Tree::from_frequencies(&frequencies)?;
    let codes = CodeTable::from_tree_with(&tree, config);
    let encoded = codes.encode(input.iter())?;
    log::debug!(
        "encoded {} symbols into {} bits using {} codewords",
        input.len(),
        encoded.len(),
        codes.len(),
    );
    Ok((encoded, codes))
}

/// Encodes the `char`s of `input`.
pub fn encode_str(input: &str) -> Result<(BitString, CodeTable<char>), Error> {
    let chars: Vec<char> = input.chars().collect();
    encode(&chars)
}
