use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::slice;

use crate::BitString;
use crate::Codeword;
use crate::Config;
use crate::FrequencyTable;
use crate::LookupError;
use crate::Node;
use crate::SingleSymbolCode;
use crate::Tree;

/// Codewords of all symbols of a tree.
///
/// Iteration yields the leaves from left to right.
#[derive(Clone, Debug)]
pub struct CodeTable<S> {
    codes: Vec<(S, Codeword)>,
    index: HashMap<S, usize>,
}

impl<S: Clone + Eq + Hash> CodeTable<S> {
    pub fn from_tree(tree: &Tree<S>) -> CodeTable<S> {
        CodeTable::from_tree_with(tree, &Config::default())
    }
    pub fn from_tree_with(tree: &Tree<S>, config: &Config) -> CodeTable<S> {
        let mut codes = Vec::new();

        // Depth-first, left ("0") before right ("1"). The right child is
        // pushed first so that the left one is popped first.
        let mut stack = vec![(tree.root(), Codeword::new())];
        while let Some((node, path)) = stack.pop() {
            match *node {
                Node::Leaf { ref symbol, .. } => codes.push((symbol.clone(), path)),
                Node::Internal { ref left, ref right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((&**right, right_path));
                    stack.push((&**left, left_path));
                }
            }
        }

        if let [(_, code)] = &mut codes[..] {
            match config.single_symbol {
                SingleSymbolCode::Empty => {}
                SingleSymbolCode::SingleBit => code.push(false),
            }
        }

        let index = codes.iter()
            .enumerate()
            .map(|(i, (symbol, _))| (symbol.clone(), i))
            .collect();
        CodeTable {
            codes: codes,
            index: index,
        }
    }
    pub fn get(&self, symbol: &S) -> Option<&Codeword> {
        self.index.get(symbol).map(|&i| &self.codes[i].1)
    }
    /// Concatenates the codewords of `input`.
    pub fn encode<I>(&self, input: I) -> Result<BitString, LookupError>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let input = input.into_iter();
        let mut result = BitString::with_capacity(input.size_hint().0);
        for (position, symbol) in input.enumerate() {
            let code = self.get(symbol.borrow()).ok_or(LookupError { position })?;
            result.push_codeword(code);
        }
        Ok(result)
    }
    /// Number of bits [`encode`](CodeTable::encode) produces for `input`.
    pub fn encoded_len<I>(&self, input: I) -> Result<usize, LookupError>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut result = 0;
        for (position, symbol) in input.into_iter().enumerate() {
            result += self.get(symbol.borrow()).ok_or(LookupError { position })?.len();
        }
        Ok(result)
    }
    /// Sum over the symbols of `frequencies` of count times codeword length.
    ///
    /// Symbols of `frequencies` missing from the table are skipped.
    pub fn weighted_path_length(&self, frequencies: &FrequencyTable<S>) -> u64 {
        frequencies.iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|c| count * c.len() as u64))
            .sum()
    }
}

impl<S> CodeTable<S> {
    pub fn len(&self) -> usize {
        self.codes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
    pub fn iter(&self) -> Iter<S> {
        Iter {
            iter: self.codes.iter(),
        }
    }
}

impl<'a, S> IntoIterator for &'a CodeTable<S> {
    type Item = (&'a S, &'a Codeword);
    type IntoIter = Iter<'a, S>;
    fn into_iter(self) -> Iter<'a, S> {
        self.iter()
    }
}

pub struct Iter<'a, S> {
    iter: slice::Iter<'a, (S, Codeword)>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = (&'a S, &'a Codeword);
    fn next(&mut self) -> Option<(&'a S, &'a Codeword)> {
        self.iter.next().map(|(s, c)| (s, c))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, S> ExactSizeIterator for Iter<'a, S> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a, S> DoubleEndedIterator for Iter<'a, S> {
    fn next_back(&mut self) -> Option<(&'a S, &'a Codeword)> {
        self.iter.next_back().map(|(s, c)| (s, c))
    }
}

#[cfg(test)]
mod test {
    use super::CodeTable;
    use crate::Config;
    use crate::FrequencyTable;
    use crate::LookupError;
    use crate::SingleSymbolCode;
    use crate::Tree;
    use itertools::Itertools;
    use quickcheck::quickcheck;
    use quickcheck::TestResult;

    fn codes(input: &str) -> CodeTable<char> {
        CodeTable::from_tree(&Tree::from_frequencies(&input.chars().collect()).unwrap())
    }

    fn strings(table: &CodeTable<char>) -> Vec<(char, String)> {
        table.iter().map(|(&s, c)| (s, c.to_string())).collect()
    }

    #[test]
    fn single() {
        let table = codes("aaaa");
        assert_eq!(strings(&table), [('a', "".to_owned())]);
        assert!(table.encode("aaaa".chars()).unwrap().is_empty());
    }

    #[test]
    fn single_bit() {
        let tree = Tree::from_frequencies(&"aaaa".chars().collect()).unwrap();
        let config = Config::default().single_symbol(SingleSymbolCode::SingleBit);
        let table = CodeTable::from_tree_with(&tree, &config);
        assert_eq!(strings(&table), [('a', "0".to_owned())]);
        assert_eq!(table.encode("aaaa".chars()).unwrap().to_string(), "0000");
    }

    #[test]
    fn single_bit_only_affects_single_symbol() {
        let tree = Tree::from_frequencies(&"ab".chars().collect()).unwrap();
        let config = Config::default().single_symbol(SingleSymbolCode::SingleBit);
        assert_eq!(
            strings(&CodeTable::from_tree_with(&tree, &config)),
            strings(&CodeTable::from_tree(&tree)),
        );
    }

    #[test]
    fn left_is_zero() {
        let table = codes("abbcccc");
        // a(1) + b(2) -> 3, then c(4) is heavier than the merged node.
        assert_eq!(strings(&table), [
            ('a', "00".to_owned()),
            ('b', "01".to_owned()),
            ('c', "1".to_owned()),
        ]);
    }

    #[test]
    fn lookup_error() {
        let table = codes("abc");
        assert_eq!(table.encode("abxc".chars()), Err(LookupError { position: 2 }));
        assert_eq!(table.encoded_len("xa".chars()), Err(LookupError { position: 0 }));
    }

    #[test]
    fn encode_borrowed() {
        let table = codes("abc");
        let input = vec!['c', 'a'];
        assert_eq!(table.encode(&input), table.encode(input.iter().cloned()));
    }

    #[test]
    fn weighted_path_length() {
        let frequencies: FrequencyTable<char> = "abbcccc".chars().collect();
        let table = CodeTable::from_tree(&Tree::from_frequencies(&frequencies).unwrap());
        assert_eq!(table.weighted_path_length(&frequencies), 1 * 2 + 2 * 2 + 4 * 1);
    }

    quickcheck! {
        fn prefix_free(input: Vec<u8>) -> TestResult {
            let frequencies = FrequencyTable::from_symbols(input.iter().cloned());
            if frequencies.len() < 2 {
                return TestResult::discard();
            }
            let table = CodeTable::from_tree(&Tree::from_frequencies(&frequencies).unwrap());
            let codewords = table.iter().map(|(_, c)| c).collect_vec();
            TestResult::from_bool(codewords.iter().tuple_combinations().all(|(a, b)| {
                !a.is_prefix_of(b) && !b.is_prefix_of(a)
            }))
        }

        fn encoded_length(input: Vec<u8>) -> TestResult {
            if input.is_empty() {
                return TestResult::discard();
            }
            let frequencies = FrequencyTable::from_symbols(input.iter().cloned());
            let table = CodeTable::from_tree(&Tree::from_frequencies(&frequencies).unwrap());
            let encoded = table.encode(&input).unwrap();
            let expected: usize = input.iter().map(|b| table.get(b).unwrap().len()).sum();
            TestResult::from_bool(
                encoded.len() == expected
                    && table.encoded_len(&input) == Ok(expected)
                    && table.weighted_path_length(&frequencies) == expected as u64
            )
        }
    }
}
