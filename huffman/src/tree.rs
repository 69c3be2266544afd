use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::FrequencyTable;
use crate::InvalidInput;

/// A node of the code tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    /// Weight is the sum of the children's weights.
    Internal {
        weight: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn weight(&self) -> u64 {
        match *self {
            Node::Leaf { weight, .. } => weight,
            Node::Internal { weight, .. } => weight,
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(*self, Node::Leaf { .. })
    }
    fn merge(left: Node<S>, right: Node<S>) -> Node<S> {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Queue entry. `sequence` is the creation index of the node, leaves first
/// in first-occurrence order, then internal nodes in merge order.
struct Entry<S> {
    weight: u64,
    sequence: usize,
    node: Node<S>,
}

impl<S> Entry<S> {
    fn key(&self) -> (u64, usize) {
        (self.weight, self.sequence)
    }
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Entry<S>) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for Entry<S> {}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Entry<S>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Entry<S> {
    // Reversed, `BinaryHeap` is a max-heap.
    fn cmp(&self, other: &Entry<S>) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Minimum-redundancy code tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tree<S> {
    root: Node<S>,
}

impl<S: Clone> Tree<S> {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Of two nodes with equal weight, the one created first is taken first:
    /// leaves in the order the table lists them, before any internal node,
    /// and internal nodes in the order they were merged. The first node taken
    /// becomes the left child.
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Tree<S>, InvalidInput> {
        let mut queue: BinaryHeap<Entry<S>> = frequencies.iter()
            .enumerate()
            .map(|(i, (symbol, count))| Entry {
                weight: count,
                sequence: i,
                node: Node::Leaf { symbol: symbol.clone(), weight: count },
            })
            .collect();
        let mut sequence = queue.len();
        log::debug!("building code tree from {} symbols", sequence);

        let root = loop {
            let first = queue.pop().ok_or(InvalidInput)?;
            let second = match queue.pop() {
                Some(s) => s,
                None => break first.node,
            };
            log::trace!(
                "merging #{} ({}) and #{} ({}) into #{}",
                first.sequence,
                first.weight,
                second.sequence,
                second.weight,
                sequence,
            );
            let node = Node::merge(first.node, second.node);
            queue.push(Entry {
                weight: node.weight(),
                sequence: sequence,
                node: node,
            });
            sequence += 1;
        };
        log::debug!("built code tree with total weight {}", root.weight());
        Ok(Tree { root: root })
    }
}

impl<S> Tree<S> {
    pub fn root(&self) -> &Node<S> {
        &self.root
    }
    /// Total weight, equal to the length of the counted input.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }
    pub fn num_leaves(&self) -> usize {
        let mut result = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match *node {
                Node::Leaf { .. } => result += 1,
                Node::Internal { ref left, ref right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        result
    }
    pub fn into_root(self) -> Node<S> {
        self.root
    }
}
