// --- File: src/core/trie.rs
use crate::core::types::SuffixRule;
use std::collections::HashMap;

#[derive(Clone)]
struct SuffixNode {
    children: HashMap<u8, usize>,
    rule: Option<usize>,
}

impl SuffixNode {
    fn new() -> Self {
        Self { children: HashMap::new(), rule: None }
    }
}

/// A trie over reversed suffixes.
///
/// Walking a word from its last byte backwards visits every suffix the word
/// ends with, shortest first, so the deepest rule seen on the way is the
/// longest match. This keeps `-ical` ahead of `-al` no matter how the rule
/// table is ordered.
#[derive(Clone)]
pub struct SuffixTrie {
    nodes: Vec<SuffixNode>,
    rules: Vec<SuffixRule>,
}

impl SuffixTrie {
    pub fn new(rules: &[SuffixRule]) -> Self {
        let mut trie = Self { nodes: vec![SuffixNode::new()], rules: Vec::new() };
        for rule in rules {
            trie.insert(*rule);
        }
        trie
    }

    /// Inserts a rule. A later rule for the same suffix replaces the earlier one.
    /// O(k) complexity where k is suffix length.
    pub fn insert(&mut self, rule: SuffixRule) {
        let mut node_idx = 0;
        for &byte in rule.suffix.as_bytes().iter().rev() {
            node_idx = if let Some(&id) = self.nodes[node_idx].children.get(&byte) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(SuffixNode::new());
                self.nodes[node_idx].children.insert(byte, new_node_id);
                new_node_id
            };
        }
        match self.nodes[node_idx].rule {
            Some(existing) => self.rules[existing] = rule,
            None => {
                self.nodes[node_idx].rule = Some(self.rules.len());
                self.rules.push(rule);
            }
        }
    }

    /// The longest rule whose suffix ends `word`, if any.
    pub fn longest_match(&self, word: &str) -> Option<&SuffixRule> {
        let mut node_idx = 0;
        let mut best = None;
        for byte in word.bytes().rev() {
            match self.nodes[node_idx].children.get(&byte) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if let Some(rule_idx) = self.nodes[node_idx].rule {
                best = Some(rule_idx);
            }
        }
        best.map(|idx| &self.rules[idx])
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
