use std::fmt;

use crate::error::Error;
use crate::min_heap::MinHeap;
use crate::Result;

#[derive(Clone, Copy)]
enum NodeKind {
    Leaf { symbol: char },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy)]
struct Node {
    frequency: usize,
    kind: NodeKind,
}

/// A Huffman tree stored as an arena of nodes addressed by index.
///
/// Every node is either a leaf carrying a symbol or an inner node
/// carrying two child indices whose frequency is the sum of its
/// children. The build is deterministic: leaves enter the merge queue
/// in first-seen symbol order and ties are broken by queue insertion
/// order, so the first of two equal-frequency pops always becomes the
/// left child.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
}

impl HuffmanTree {
    /// Builds the tree for the given (symbol, frequency) pairs.
    /// The slice must not be empty.
    pub fn from_frequencies(frequencies: &[(char, usize)]) -> Result<HuffmanTree> {
        let mut nodes: Vec<Node> = Vec::new();
        let mut queue = MinHeap::new();
        for &(symbol, frequency) in frequencies {
            let index = nodes.len();
            nodes.push(Node {
                frequency,
                kind: NodeKind::Leaf { symbol },
            });
            queue.push(frequency as f64, index);
        }
        while queue.len() > 1 {
            let (_, left) = queue.pop_min()?;
            let (_, right) = queue.pop_min()?;
            let index = nodes.len();
            let frequency = nodes[left].frequency + nodes[right].frequency;
            nodes.push(Node {
                frequency,
                kind: NodeKind::Inner { left, right },
            });
            queue.push(frequency as f64, index);
        }
        let (_, root_index) = queue.pop_min()?;
        Ok(HuffmanTree { nodes, root_index })
    }

    /// Walks the tree depth first and returns one (symbol, code) pair
    /// per leaf, '0' for a left step and '1' for a right step.
    ///
    /// A tree that is a single leaf gets the one-bit code "0", since an
    /// empty code word could not be decoded.
    pub fn code_words(&self) -> Vec<(char, String)> {
        if let NodeKind::Leaf { symbol } = self.nodes[self.root_index].kind {
            return vec![(symbol, "0".to_owned())];
        }
        let mut words = Vec::new();
        self.collect_code_words(self.root_index, String::new(), &mut words);
        words
    }

    fn collect_code_words(&self, index: usize, prefix: String, words: &mut Vec<(char, String)>) {
        match self.nodes[index].kind {
            NodeKind::Leaf { symbol } => words.push((symbol, prefix)),
            NodeKind::Inner { left, right } => {
                self.collect_code_words(left, format!("{}0", prefix), words);
                self.collect_code_words(right, format!("{}1", prefix), words);
            }
        }
    }

    /// Decodes a stream of '0'/'1' characters by walking the tree from
    /// the root, emitting a symbol at every leaf.
    pub fn decode(&self, bits: &str) -> Result<String> {
        let mut decoded = String::new();
        let mut current = self.root_index;
        for (position, bit) in bits.chars().enumerate() {
            if bit != '0' && bit != '1' {
                return Err(Error::MalformedBitStream(position));
            }
            if let NodeKind::Inner { left, right } = self.nodes[current].kind {
                current = if bit == '0' { left } else { right };
            } else if bit == '0' {
                // single-leaf tree, every '0' is one symbol
                current = self.root_index;
            } else {
                return Err(Error::MalformedBitStream(position));
            }
            if let NodeKind::Leaf { symbol } = self.nodes[current].kind {
                decoded.push(symbol);
                current = self.root_index;
            }
        }
        if current != self.root_index {
            return Err(Error::TruncatedBitStream);
        }
        Ok(decoded)
    }

    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        prefix: &str,
        is_left: bool,
    ) -> fmt::Result {
        let branch = if is_left { "└── " } else { "┌── " };
        let node = &self.nodes[index];
        match node.kind {
            NodeKind::Leaf { symbol } => {
                let label = if symbol == ' ' {
                    "'space'".to_owned()
                } else {
                    format!("{:?}", symbol)
                };
                writeln!(f, "{}{}{} ({})", prefix, branch, label, node.frequency)?;
            }
            NodeKind::Inner { left, right } => {
                writeln!(f, "{}{}* ({})", prefix, branch, node.frequency)?;
                let extension = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
                // right subtree first so the drawing reads top-down
                self.write_node(f, right, &extension, false)?;
                self.write_node(f, left, &extension, true)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root_index, "", true)
    }
}

#[cfg(test)]
mod tests {
    use super::HuffmanTree;
    use crate::error::Error;

    #[test]
    fn single_leaf_gets_code_zero() {
        let tree = HuffmanTree::from_frequencies(&[('a', 4)]).unwrap();
        assert_eq!(tree.code_words(), vec![('a', "0".to_owned())]);
    }

    #[test]
    fn first_popped_node_becomes_left_child() {
        let tree = HuffmanTree::from_frequencies(&[('a', 2), ('b', 2)]).unwrap();
        assert_eq!(
            tree.code_words(),
            vec![('a', "0".to_owned()), ('b', "1".to_owned())]
        );
    }

    #[test]
    fn inner_frequencies_are_sums_of_children() {
        let tree = HuffmanTree::from_frequencies(&[('a', 1), ('b', 2), ('c', 4)]).unwrap();
        assert_eq!(tree.nodes[tree.root_index].frequency, 7);
    }

    #[test]
    fn decode_walks_back_to_the_root_after_each_symbol() {
        let tree = HuffmanTree::from_frequencies(&[('a', 1), ('b', 2), ('c', 4)]).unwrap();
        // a and b merge first (1+2=3), then the merged node joins c,
        // giving a="00", b="01", c="1"
        assert_eq!(tree.decode("00011").unwrap(), "abc");
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        let tree = HuffmanTree::from_frequencies(&[('a', 1), ('b', 2)]).unwrap();
        assert!(matches!(
            tree.decode("0x1"),
            Err(Error::MalformedBitStream(1))
        ));
    }

    #[test]
    fn decode_rejects_truncated_stream() {
        let tree = HuffmanTree::from_frequencies(&[('a', 1), ('b', 2), ('c', 4)]).unwrap();
        assert!(matches!(tree.decode("0"), Err(Error::TruncatedBitStream)));
    }

    #[test]
    fn single_leaf_decode_accepts_only_zeros() {
        let tree = HuffmanTree::from_frequencies(&[('a', 4)]).unwrap();
        assert_eq!(tree.decode("0000").unwrap(), "aaaa");
        assert!(matches!(
            tree.decode("01"),
            Err(Error::MalformedBitStream(1))
        ));
    }

    #[test]
    fn display_draws_every_leaf() {
        let tree = HuffmanTree::from_frequencies(&[('a', 1), ('b', 2)]).unwrap();
        let drawing = tree.to_string();
        assert!(drawing.contains("'a' (1)"));
        assert!(drawing.contains("'b' (2)"));
        assert!(drawing.contains("* (3)"));
    }
}
