//! Huffman coding of the block's RLE pair sequence
//!
//! Builds a prefix code over the (run, value) symbols observed in one
//! block and concatenates the per-pair codes into the final bit string.
//! Frequency statistics are block-local; the tree is rebuilt from scratch
//! whenever the selection changes.
//!
//! Merging is the classic greedy algorithm: repeatedly join the two
//! lowest-frequency nodes. Ties are broken by node creation order (leaves
//! in first-observed symbol order, merged parents after), so identical
//! input always yields the identical code table.

use crate::rle::RlePair;

/// One node of the Huffman tree
///
/// Leaves carry a symbol; internal nodes own their two children. The
/// assigned code is the path from the root, "0" per left edge and "1"
/// per right edge.
#[derive(Debug, Clone)]
pub struct HuffmanNode {
    /// The symbol at a leaf, `None` for internal nodes
    pub symbol: Option<RlePair>,
    /// Occurrence count (sum of both children for internal nodes)
    pub frequency: u32,
    /// Bit string assigned to this node
    pub code: String,
    pub left: Option<Box<HuffmanNode>>,
    pub right: Option<Box<HuffmanNode>>,
    seq: u32,
}

impl HuffmanNode {
    fn leaf(symbol: RlePair, frequency: u32, seq: u32) -> Self {
        Self {
            symbol: Some(symbol),
            frequency,
            code: String::new(),
            left: None,
            right: None,
            seq,
        }
    }

    /// Whether this node is a leaf
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }
}

/// Mapping from RLE pair symbols to their assigned bit strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(RlePair, String)>,
}

impl CodeTable {
    /// The code assigned to a symbol
    #[must_use]
    pub fn code(&self, symbol: RlePair) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, code)| code.as_str())
    }

    /// Iterate over (symbol, code) entries
    pub fn iter(&self) -> impl Iterator<Item = (RlePair, &str)> {
        self.entries.iter().map(|(s, code)| (*s, code.as_str()))
    }

    /// Number of distinct symbols
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count symbol frequencies, preserving first-observation order
fn count_frequencies(pairs: &[RlePair]) -> Vec<(RlePair, u32)> {
    let mut counts: Vec<(RlePair, u32)> = Vec::new();
    for &pair in pairs {
        match counts.iter().position(|(s, _)| *s == pair) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((pair, 1)),
        }
    }
    counts
}

/// Build the Huffman tree for a pair sequence
///
/// Returns `None` for an empty sequence. The returned root already has
/// codes assigned; a degenerate single-leaf root gets the one-bit code
/// "0" so the bit string stays decodable.
#[must_use]
pub fn build_tree(pairs: &[RlePair]) -> Option<HuffmanNode> {
    let counts = count_frequencies(pairs);
    if counts.is_empty() {
        return None;
    }

    let mut next_seq = 0u32;
    let mut nodes: Vec<HuffmanNode> = counts
        .into_iter()
        .map(|(symbol, frequency)| {
            let node = HuffmanNode::leaf(symbol, frequency, next_seq);
            next_seq += 1;
            node
        })
        .collect();

    while nodes.len() > 1 {
        let left = take_min(&mut nodes);
        let right = take_min(&mut nodes);

        nodes.push(HuffmanNode {
            symbol: None,
            frequency: left.frequency + right.frequency,
            code: String::new(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            seq: next_seq,
        });
        next_seq += 1;
    }

    let mut root = nodes.pop()?;
    if root.is_leaf() {
        root.code = "0".to_string();
    } else {
        assign_codes(&mut root, String::new());
    }
    Some(root)
}

/// Remove and return the node with the lowest (frequency, creation order)
fn take_min(nodes: &mut Vec<HuffmanNode>) -> HuffmanNode {
    let mut min_idx = 0;
    for (i, node) in nodes.iter().enumerate().skip(1) {
        let best = &nodes[min_idx];
        if (node.frequency, node.seq) < (best.frequency, best.seq) {
            min_idx = i;
        }
    }
    nodes.swap_remove(min_idx)
}

fn assign_codes(node: &mut HuffmanNode, code: String) {
    if let Some(left) = node.left.as_deref_mut() {
        assign_codes(left, format!("{}0", code));
    }
    if let Some(right) = node.right.as_deref_mut() {
        assign_codes(right, format!("{}1", code));
    }
    node.code = code;
}

/// Collect the leaf codes of a tree into a table
#[must_use]
pub fn code_table(root: &HuffmanNode) -> CodeTable {
    let mut entries = Vec::new();
    collect_leaves(root, &mut entries);
    CodeTable { entries }
}

fn collect_leaves(node: &HuffmanNode, entries: &mut Vec<(RlePair, String)>) {
    if let Some(symbol) = node.symbol {
        entries.push((symbol, node.code.clone()));
        return;
    }
    if let Some(left) = node.left.as_deref() {
        collect_leaves(left, entries);
    }
    if let Some(right) = node.right.as_deref() {
        collect_leaves(right, entries);
    }
}

/// Build the code table and final bit string for a pair sequence
///
/// The bit string is the concatenation of each pair's code in sequence
/// order; when the sequence terminates with the end-of-block marker, the
/// marker's code closes the stream. An empty sequence yields an empty
/// table and empty bit string.
#[must_use]
pub fn build_huffman(pairs: &[RlePair]) -> (CodeTable, String) {
    let root = match build_tree(pairs) {
        Some(root) => root,
        None => return (CodeTable::default(), String::new()),
    };

    let table = code_table(&root);
    let mut bits = String::new();
    for &pair in pairs {
        if let Some(code) = table.code(pair) {
            bits.push_str(code);
        }
    }

    (table, bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_prefix_free(table: &CodeTable) {
        let codes: Vec<&str> = table.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty(), "empty code in table");
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(
                        !b.starts_with(a),
                        "code {} is a prefix of code {}",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_sequence() {
        let (table, bits) = build_huffman(&[]);
        assert!(table.is_empty());
        assert!(bits.is_empty());
    }

    #[test]
    fn test_single_symbol_gets_one_bit_code() {
        let pairs = [RlePair::EOB];
        let (table, bits) = build_huffman(&pairs);

        assert_eq!(table.len(), 1);
        assert_eq!(table.code(RlePair::EOB), Some("0"));
        assert_eq!(bits, "0");
    }

    #[test]
    fn test_two_symbols_get_one_bit_codes() {
        let pairs = [RlePair::new(0, 10), RlePair::EOB];
        let (table, bits) = build_huffman(&pairs);

        assert_eq!(table.len(), 2);
        let dc = table.code(RlePair::new(0, 10)).unwrap();
        let eob = table.code(RlePair::EOB).unwrap();
        assert_eq!(dc.len(), 1);
        assert_eq!(eob.len(), 1);
        assert_ne!(dc, eob);
        assert_eq!(bits.len(), 2);
    }

    #[test]
    fn test_equal_frequency_ties_resolve_by_observation_order() {
        let pairs = [RlePair::new(0, 10), RlePair::EOB];
        let (table, _) = build_huffman(&pairs);

        // First-observed symbol becomes the left child
        assert_eq!(table.code(RlePair::new(0, 10)), Some("0"));
        assert_eq!(table.code(RlePair::EOB), Some("1"));
    }

    #[test]
    fn test_frequent_symbols_get_short_codes() {
        let mut pairs = Vec::new();
        for _ in 0..8 {
            pairs.push(RlePair::new(0, 1));
        }
        for _ in 0..3 {
            pairs.push(RlePair::new(1, 2));
        }
        pairs.push(RlePair::new(2, 3));
        pairs.push(RlePair::EOB);

        let (table, bits) = build_huffman(&pairs);

        let common = table.code(RlePair::new(0, 1)).unwrap().len();
        let rare = table.code(RlePair::new(2, 3)).unwrap().len();
        assert!(common <= rare, "common {} vs rare {}", common, rare);

        let total: usize = pairs
            .iter()
            .map(|&p| table.code(p).unwrap().len())
            .sum();
        assert_eq!(bits.len(), total);

        assert_prefix_free(&table);
    }

    #[test]
    fn test_prefix_free_over_varied_multisets() {
        let multisets: Vec<Vec<RlePair>> = vec![
            vec![RlePair::EOB],
            vec![RlePair::new(0, 5), RlePair::new(0, 5), RlePair::EOB],
            (0u8..20).map(|i| RlePair::new(i % 4, i as i16 + 1)).collect(),
            (0..64).map(|i| RlePair::new(0, (i % 7) as i16 - 3)).collect(),
        ];

        for pairs in multisets {
            let (table, _) = build_huffman(&pairs);
            assert_prefix_free(&table);
        }
    }

    #[test]
    fn test_deterministic_tables() {
        let pairs: Vec<RlePair> =
            (0u8..16).map(|i| RlePair::new(i % 3, (i % 5) as i16)).collect();

        let (a, bits_a) = build_huffman(&pairs);
        let (b, bits_b) = build_huffman(&pairs);
        assert_eq!(a, b);
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_root_frequency_is_total_count() {
        let pairs = [
            RlePair::new(0, 1),
            RlePair::new(0, 1),
            RlePair::new(3, -2),
            RlePair::EOB,
        ];
        let root = build_tree(&pairs).unwrap();
        assert_eq!(root.frequency, pairs.len() as u32);
        assert!(!root.is_leaf());
    }
}
