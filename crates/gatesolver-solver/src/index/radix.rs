//! Binary radix tree over bit vectors.

use std::mem::size_of;

use crate::codec::BitVector;

#[derive(Debug, Clone)]
struct RadixNode {
    // First bit equals this node's slot in its parent's `children`.
    prefix: BitVector,
    children: [Option<usize>; 2],
    terminal: bool,
}

impl RadixNode {
    fn leaf(prefix: BitVector) -> Self {
        Self {
            prefix,
            children: [None, None],
            terminal: true,
        }
    }
}

/// A path-compressed binary trie storing a set of bit strings.
///
/// Nodes live in one arena vector; splitting a node keeps its index so
/// parent links never move.
///
/// # Example
///
/// ```
/// use gatesolver_solver::codec::BitVector;
/// use gatesolver_solver::index::RadixTree;
///
/// let mut tree = RadixTree::new();
/// let mut key = BitVector::new(6);
/// key.write_bits(0, 0b101101, 6);
///
/// assert!(tree.insert(&key));
/// assert!(!tree.insert(&key));
/// assert!(tree.contains(&key));
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RadixTree {
    nodes: Vec<RadixNode>,
    len: usize,
}

impl Default for RadixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![RadixNode {
                prefix: BitVector::new(0),
                children: [None, None],
                terminal: false,
            }],
            len: 0,
        }
    }

    /// Number of distinct keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of trie nodes, including the root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts `key`. Returns true if it was not present before.
    pub fn insert(&mut self, key: &BitVector) -> bool {
        let mut node = 0;
        let mut pos = 0;
        loop {
            let prefix_len = self.nodes[node].prefix.len();
            let common = self.nodes[node].prefix.common_prefix_len(0, key, pos);
            if common < prefix_len {
                self.split(node, common);
            }
            pos += common;

            if pos == key.len() {
                let n = &mut self.nodes[node];
                if n.terminal {
                    return false;
                }
                n.terminal = true;
                self.len += 1;
                return true;
            }

            let bit = usize::from(key.get_bit(pos));
            match self.nodes[node].children[bit] {
                Some(child) => node = child,
                None => {
                    let leaf = self.push(RadixNode::leaf(key.slice(pos, key.len())));
                    self.nodes[node].children[bit] = Some(leaf);
                    self.len += 1;
                    return true;
                }
            }
        }
    }

    /// Returns true if `key` was inserted before.
    pub fn contains(&self, key: &BitVector) -> bool {
        let mut node = &self.nodes[0];
        let mut pos = 0;
        loop {
            let common = node.prefix.common_prefix_len(0, key, pos);
            if common < node.prefix.len() {
                return false;
            }
            pos += common;
            if pos == key.len() {
                return node.terminal;
            }
            match node.children[usize::from(key.get_bit(pos))] {
                Some(child) => node = &self.nodes[child],
                None => return false,
            }
        }
    }

    /// Bytes of backing storage: node arena plus spilled prefixes.
    pub fn memory_usage(&self) -> usize {
        size_of::<Self>()
            + self.nodes.capacity() * size_of::<RadixNode>()
            + self
                .nodes
                .iter()
                .map(|n| n.prefix.heap_bytes())
                .sum::<usize>()
    }

    // Cuts `node`'s prefix at `at`, moving the remainder and the node's
    // children into a new child.
    fn split(&mut self, node: usize, at: usize) {
        let n = &mut self.nodes[node];
        let tail = RadixNode {
            prefix: n.prefix.slice(at, n.prefix.len()),
            children: n.children,
            terminal: n.terminal,
        };
        n.prefix = n.prefix.slice(0, at);
        n.children = [None, None];
        n.terminal = false;

        let bit = usize::from(tail.prefix.get_bit(0));
        let tail = self.push(tail);
        self.nodes[node].children[bit] = Some(tail);
    }

    fn push(&mut self, node: RadixNode) -> usize {
        let index = self.nodes.len();
        self.nodes.push(node);
        index
    }
}
