use log::{debug, info, trace};

use crate::error::CodecError;
use crate::tools::freq_count::freqs;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};
use std::hash::Hash;

/// Symbol to bit-string mapping. Ordered by symbol so it prints the same way every time.
pub type CodeTable<T> = BTreeMap<T, String>;

#[derive(Debug, Clone)]
pub enum NodeData<T> {
    Kids(Box<Node<T>>, Box<Node<T>>),
    Leaf(T),
}

#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Frequency of a leaf, or the sum of both children.
    pub weight: u32,
    /// Creation order. Breaks ties between equal weights.
    pub seq: u32,
    pub node_data: NodeData<T>,
}

impl<T> Node<T> {
    /// Create a new node
    pub fn new(weight: u32, seq: u32, node_data: NodeData<T>) -> Node<T> {
        Node {
            weight,
            seq,
            node_data,
        }
    }
}

impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl<T> Eq for Node<T> {}

impl<T> Ord for Node<T> {
    /// Sort Nodes by decreasing weight, then decreasing sequence, so the max-heap pops the lightest
    /// and oldest node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a Huffman tree from a frequency table. Leaves are seeded in table order, and each merge
/// makes the first node popped the left child.
pub fn build_tree<T: Clone>(freq_table: &[(T, u32)]) -> Result<Node<T>, CodecError> {
    let mut tree: BinaryHeap<Node<T>> = freq_table
        .iter()
        .enumerate()
        .map(|(i, (sym, f))| Node::new(*f, i as u32, NodeData::Leaf(sym.clone())))
        .collect();
    let mut seq = freq_table.len() as u32;

    // Pare it down to one single node with child nodes
    while tree.len() > 1 {
        let left_child = tree.pop().ok_or(CodecError::EmptyAlphabet)?;
        let right_child = tree.pop().ok_or(CodecError::EmptyAlphabet)?;
        trace!(
            "Merging weights {} and {} (seq {})",
            left_child.weight,
            right_child.weight,
            seq
        );
        tree.push(Node::new(
            left_child.weight + right_child.weight,
            seq,
            NodeData::Kids(Box::new(left_child), Box::new(right_child)),
        ));
        seq += 1;
    }
    tree.pop().ok_or(CodecError::EmptyAlphabet)
}

/// Walk the tree and collect the code for each leaf: left is '0', right is '1'.
/// A tree that is a single leaf still gets the one-bit code "0".
pub fn code_table<T: Ord + Clone>(root: &Node<T>) -> CodeTable<T> {
    let mut codes = CodeTable::new();
    match &root.node_data {
        NodeData::Leaf(sym) => {
            codes.insert(sym.clone(), "0".to_string());
        }
        NodeData::Kids(..) => return_leaves(root, String::new(), &mut codes),
    }
    codes
}

/// Recursively walk the tree, recording the path to every leaf.
fn return_leaves<T: Ord + Clone>(node: &Node<T>, code: String, codes: &mut CodeTable<T>) {
    match &node.node_data {
        NodeData::Kids(left_child, right_child) => {
            return_leaves(left_child, format!("{}0", code), codes);
            return_leaves(right_child, format!("{}1", code), codes);
        }
        NodeData::Leaf(sym) => {
            codes.insert(sym.clone(), code);
        }
    };
}

/// Huffman encode the input. Returns the bit string (as '0'/'1' characters) and the code table.
/// An empty input gives an empty string and an empty table.
pub fn huf_encode<T: Hash + Ord + Clone>(data: &[T]) -> Result<(String, CodeTable<T>), CodecError> {
    if data.is_empty() {
        return Ok((String::new(), CodeTable::new()));
    }

    let freq_table = freqs(data);
    let root = build_tree(&freq_table)?;
    let codes = code_table(&root);

    let mut bits = String::new();
    for sym in data {
        // Every input symbol has a leaf, so a miss means the tree is broken
        let code = codes.get(sym).ok_or(CodecError::EmptyAlphabet)?;
        bits.push_str(code);
    }

    info!(
        "Huffman coded {} symbols ({} distinct) into {} bits",
        data.len(),
        freq_table.len(),
        bits.len()
    );
    debug!("Root weight {}, {} codes", root.weight, codes.len());
    Ok((bits, codes))
}

#[cfg(test)]
mod test {
    use super::*;

    /// Decode by walking the tree from the root for each symbol.
    fn walk_decode<T: Clone>(root: &Node<T>, bits: &str) -> Vec<T> {
        let mut out = vec![];
        if let NodeData::Leaf(sym) = &root.node_data {
            return bits.chars().map(|_| sym.clone()).collect();
        }
        let mut node = root;
        for bit in bits.chars() {
            if let NodeData::Kids(left, right) = &node.node_data {
                node = if bit == '0' { &**left } else { &**right };
            }
            if let NodeData::Leaf(sym) = &node.node_data {
                out.push(sym.clone());
                node = root;
            }
        }
        out
    }

    #[test]
    fn huffman_empty_test() {
        let data: Vec<char> = vec![];
        let (bits, codes) = huf_encode(&data).unwrap();
        assert_eq!(bits, "");
        assert!(codes.is_empty());
    }

    #[test]
    fn huffman_aaab_test() {
        let data = "aaab".chars().collect::<Vec<char>>();
        assert_eq!(freqs(&data), vec![('a', 3), ('b', 1)]);
        let (bits, codes) = huf_encode(&data).unwrap();
        assert!(codes[&'a'].len() <= codes[&'b'].len());
        assert_eq!(
            bits.len(),
            data.iter().map(|c| codes[c].len()).sum::<usize>()
        );
        assert_eq!(bits, "1110");
    }

    #[test]
    fn huffman_single_symbol_test() {
        let data = vec!["7"; 5];
        let (bits, codes) = huf_encode(&data).unwrap();
        assert_eq!(codes[&"7"], "0");
        assert_eq!(bits, "00000");
    }

    #[test]
    fn huffman_abracadabra_test() {
        let data = "abracadabra".chars().collect::<Vec<char>>();
        let (bits, codes) = huf_encode(&data).unwrap();
        let expected = [('a', "0"), ('b', "110"), ('c', "100"), ('d', "101"), ('r', "111")]
            .iter()
            .map(|(c, s)| (*c, s.to_string()))
            .collect::<CodeTable<char>>();
        assert_eq!(codes, expected);
        assert_eq!(bits.len(), 23);
    }

    #[test]
    fn huffman_prefix_free_test() {
        let data = "this is an example of a huffman tree".chars().collect::<Vec<char>>();
        let (_, codes) = huf_encode(&data).unwrap();
        let all = codes.values().collect::<Vec<&String>>();
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()));
                }
            }
        }
    }

    #[test]
    fn huffman_tree_walk_test() {
        let data = ["3", "1", "4", "1", "5", "9", "2", "6", "5", "3", "5"];
        let (bits, _) = huf_encode(&data).unwrap();
        let root = build_tree(&freqs(&data)).unwrap();
        assert_eq!(walk_decode(&root, &bits), data.to_vec());
    }

    #[test]
    fn huffman_deterministic_test() {
        let data = "ABRACADABRA ALAKAZAM".chars().collect::<Vec<char>>();
        assert_eq!(huf_encode(&data).unwrap(), huf_encode(&data).unwrap());
    }

    #[test]
    fn huffman_empty_alphabet_test() {
        let table: Vec<(char, u32)> = vec![];
        assert!(matches!(build_tree(&table), Err(CodecError::EmptyAlphabet)));
    }
}
