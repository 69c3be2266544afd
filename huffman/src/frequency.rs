use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FromIterator;
use std::slice;

/// Occurrence counts of the symbols of an input sequence.
///
/// Symbols are kept in the order of their first occurrence, which is also the
/// order in which they enter the tree construction.
#[derive(Clone, Debug)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
    index: HashMap<S, usize>,
}

impl<S: Clone + Eq + Hash> FrequencyTable<S> {
    pub fn new() -> FrequencyTable<S> {
        FrequencyTable {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> FrequencyTable<S> {
        let mut result = FrequencyTable::new();
        for symbol in symbols {
            result.add(symbol);
        }
        result
    }
    /// Counts one more occurrence of `symbol`.
    pub fn add(&mut self, symbol: S) {
        match self.index.entry(symbol) {
            hash_map::Entry::Occupied(o) => self.entries[*o.get()].1 += 1,
            hash_map::Entry::Vacant(v) => {
                self.entries.push((v.key().clone(), 1));
                v.insert(self.entries.len() - 1);
            }
        }
    }
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }
}

impl<S> FrequencyTable<S> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }
    pub fn iter(&self) -> Iter<S> {
        Iter {
            iter: self.entries.iter(),
        }
    }
}

impl<S: Clone + Eq + Hash> Default for FrequencyTable<S> {
    fn default() -> FrequencyTable<S> {
        FrequencyTable::new()
    }
}

impl<S: Clone + Eq + Hash> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> FrequencyTable<S> {
        FrequencyTable::from_symbols(iter)
    }
}

impl<S: Clone + Eq + Hash> Extend<S> for FrequencyTable<S> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for symbol in iter {
            self.add(symbol);
        }
    }
}

impl<'a, S> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, u64);
    type IntoIter = Iter<'a, S>;
    fn into_iter(self) -> Iter<'a, S> {
        self.iter()
    }
}

/// Iterator over `(symbol, count)` in first-occurrence order.
pub struct Iter<'a, S> {
    iter: slice::Iter<'a, (S, u64)>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = (&'a S, u64);
    fn next(&mut self) -> Option<(&'a S, u64)> {
        self.iter.next().map(|(s, c)| (s, *c))
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
    fn next_back(&mut self) -> Option<(&'a S, u64)> {
        self.iter.next_back().map(|(s, c)| (s, *c))
    }
}
