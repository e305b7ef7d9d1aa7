use std::collections::HashMap;

use crate::error::Error;
use crate::Result;

pub mod tree;

use tree::HuffmanTree;

/// Per-symbol occurrence counts, kept in first-seen order.
///
/// The order matters: it decides how leaves enter the merge queue and
/// therefore which of two equal-frequency symbols ends up on which side
/// of the tree. Counting the same text twice yields the same table and
/// the same codes.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: Vec<(char, usize)>,
    positions: HashMap<char, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::default();
        for symbol in text.chars() {
            match table.positions.get(&symbol) {
                Some(&position) => table.counts[position].1 += 1,
                None => {
                    table.positions.insert(symbol, table.counts.len());
                    table.counts.push((symbol, 1));
                }
            }
            table.total += 1;
        }
        table
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().copied()
    }

    pub fn count(&self, symbol: char) -> usize {
        self.positions
            .get(&symbol)
            .map(|&position| self.counts[position].1)
            .unwrap_or(0)
    }

    pub fn distinct_symbols(&self) -> usize {
        self.counts.len()
    }

    pub fn total_symbols(&self) -> usize {
        self.total
    }
}

/// The prefix-free symbol-to-code mapping derived from a Huffman tree.
#[derive(Debug, Default)]
pub struct CodeTable {
    codes: HashMap<char, String>,
}

impl CodeTable {
    fn from_words(words: Vec<(char, String)>) -> Self {
        Self {
            codes: words.into_iter().collect(),
        }
    }

    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// A complete Huffman coding run: frequency table, tree and code table.
///
/// Empty input is the degenerate case: no tree is built and the code
/// table stays empty. Everything downstream (encode, decode, the
/// statistics) treats it as a no-op.
pub struct HuffmanCoding {
    frequencies: FrequencyTable,
    tree: Option<HuffmanTree>,
    code_table: CodeTable,
}

impl HuffmanCoding {
    pub fn from_text(text: &str) -> Result<Self> {
        let frequencies = FrequencyTable::from_text(text);
        if frequencies.distinct_symbols() == 0 {
            return Ok(Self {
                frequencies,
                tree: None,
                code_table: CodeTable::default(),
            });
        }
        let counts: Vec<(char, usize)> = frequencies.iter().collect();
        let tree = HuffmanTree::from_frequencies(&counts)?;
        let code_table = CodeTable::from_words(tree.code_words());
        Ok(Self {
            frequencies,
            tree: Some(tree),
            code_table,
        })
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    /// Encodes a text into a stream of '0'/'1' characters.
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut bits = String::new();
        for symbol in text.chars() {
            let code = self
                .code_table
                .code(symbol)
                .ok_or(Error::SymbolNotInCodeTable(symbol))?;
            bits.push_str(code);
        }
        Ok(bits)
    }

    /// Decodes a stream of '0'/'1' characters back into text.
    pub fn decode(&self, bits: &str) -> Result<String> {
        match &self.tree {
            Some(tree) => tree.decode(bits),
            None if bits.is_empty() => Ok(String::new()),
            None => Err(Error::MalformedBitStream(0)),
        }
    }

    /// Number of bits of the input at a fixed 8 bits per symbol.
    pub fn original_bit_count(&self) -> usize {
        self.frequencies.total_symbols() * 8
    }

    /// Number of bits the input occupies under the generated code.
    pub fn encoded_bit_count(&self) -> usize {
        self.frequencies
            .iter()
            .map(|(symbol, frequency)| {
                frequency * self.code_table.code(symbol).map_or(0, str::len)
            })
            .sum()
    }
}
