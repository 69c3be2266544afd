use std::fmt::Write;
use std::fmt;
use std::iter::Copied;
use std::slice;

/// The bit pattern assigned to one symbol, read from the root of the tree.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Codeword {
    bits: Vec<bool>,
}

/// Concatenated codewords of an encoded input.
///
/// One `bool` per bit; the output is not packed into bytes.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct BitString {
    bits: Vec<bool>,
}

pub type Bits<'a> = Copied<slice::Iter<'a, bool>>;

impl Codeword {
    pub fn new() -> Codeword {
        Codeword { bits: Vec::new() }
    }
    pub fn from_bits(bits: Vec<bool>) -> Codeword {
        Codeword { bits: bits }
    }
    pub(crate) fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }
    pub fn len(&self) -> usize {
        self.bits.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
    pub fn bit(&self, idx: usize) -> bool {
        assert!(idx < self.len());
        self.bits[idx]
    }
    pub fn iter(&self) -> Bits {
        self.bits.iter().copied()
    }
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }
    /// Whether `self` is a (not necessarily proper) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl BitString {
    pub fn new() -> BitString {
        BitString { bits: Vec::new() }
    }
    pub fn with_capacity(capacity: usize) -> BitString {
        BitString {
            bits: Vec::with_capacity(capacity),
        }
    }
    pub fn push_codeword(&mut self, codeword: &Codeword) {
        self.bits.extend_from_slice(&codeword.bits);
    }
    pub fn len(&self) -> usize {
        self.bits.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
    pub fn iter(&self) -> Bits {
        self.bits.iter().copied()
    }
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }
}

fn write_bits(bits: &[bool], f: &mut fmt::Formatter) -> fmt::Result {
    for &bit in bits {
        f.write_char(if bit { '1' } else { '0' })?;
    }
    Ok(())
}

impl fmt::Debug for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char('"')?;
        write_bits(&self.bits, f)?;
        f.write_char('"')
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_bits(&self.bits, f)
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char('"')?;
        write_bits(&self.bits, f)?;
        f.write_char('"')
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_bits(&self.bits, f)
    }
}

impl<'a> IntoIterator for &'a Codeword {
    type Item = bool;
    type IntoIter = Bits<'a>;
    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a BitString {
    type Item = bool;
    type IntoIter = Bits<'a>;
    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::BitString;
    use super::Codeword;

    fn codeword(s: &str) -> Codeword {
        Codeword::from_bits(s.chars().map(|c| c == '1').collect())
    }

    #[test]
    fn display() {
        assert_eq!(codeword("").to_string(), "");
        assert_eq!(codeword("0110").to_string(), "0110");
        assert_eq!(format!("{:?}", codeword("10")), "\"10\"");
    }

    #[test]
    fn bit() {
        let c = codeword("01");
        assert!(!c.bit(0));
        assert!(c.bit(1));
    }

    #[test]
    #[should_panic]
    fn bit_out_of_range() {
        codeword("01").bit(2);
    }

    #[test]
    fn prefix() {
        assert!(codeword("").is_prefix_of(&codeword("1")));
        assert!(codeword("10").is_prefix_of(&codeword("101")));
        assert!(codeword("10").is_prefix_of(&codeword("10")));
        assert!(!codeword("11").is_prefix_of(&codeword("101")));
        assert!(!codeword("101").is_prefix_of(&codeword("10")));
    }

    #[test]
    fn concatenation() {
        let mut s = BitString::new();
        s.push_codeword(&codeword("10"));
        s.push_codeword(&codeword(""));
        s.push_codeword(&codeword("011"));
        assert_eq!(s.len(), 5);
        assert_eq!(s.to_string(), "10011");
        assert_eq!(s.iter().filter(|&b| b).count(), 3);
    }
}
