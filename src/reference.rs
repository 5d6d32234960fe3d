// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A plain 26-way array trie.
//!
//! Every node reserves one child pointer per letter whether it is used or
//! not. It answers the same membership and importance questions as
//! [`HashedTrie`](crate::HashedTrie), which makes it a differential oracle in
//! tests and the baseline for the memory comparison in `sherwood stats`.
//!
//! Only `a-z` can be stored. Anything else is rejected rather than mapped.

use crate::trie::MAX_WORD_LEN;

const ALPHABET: usize = 26;

/// Estimated bytes for one node header: the word flag, importance and the
/// child-array pointer.
pub const NODE_BYTES: usize = 32;

/// Estimated bytes for a child array. Every node owns one, leaves included.
pub const CHILDREN_BYTES: usize = ALPHABET * 16;

#[derive(Debug, Default)]
struct Node {
    children: Option<Box<[Option<Box<Node>>; ALPHABET]>>,
    is_word: bool,
    importance: u32,
}

impl Node {
    fn child(&self, index: usize) -> Option<&Node> {
        self.children.as_ref()?[index].as_deref()
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.as_mut()?[index].as_deref_mut()
    }

    fn child_or_insert(&mut self, index: usize) -> &mut Node {
        let children = self
            .children
            .get_or_insert_with(|| Box::new(std::array::from_fn(|_| None)));
        children[index].get_or_insert_with(Box::default)
    }
}

/// Trie with a fixed 26-entry child array per node.
#[derive(Debug)]
pub struct ArrayTrie {
    root: Node,
    words: usize,
    nodes: usize,
}

impl ArrayTrie {
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            words: 0,
            nodes: 1,
        }
    }

    /// Insert a lowercase `a-z` word. Returns false for empty, repeated,
    /// over-long or non-alphabetic input.
    pub fn insert(&mut self, word: &str) -> bool {
        let Some(indices) = letter_indices(word) else {
            return false;
        };
        if indices.is_empty() || indices.len() > MAX_WORD_LEN {
            return false;
        }

        let mut node = &mut self.root;
        for index in indices {
            if node.child(index).is_none() {
                self.nodes += 1;
            }
            node = node.child_or_insert(index);
        }

        if node.is_word {
            return false;
        }
        node.is_word = true;
        self.words += 1;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.is_word)
    }

    pub fn importance(&self, word: &str) -> Option<u32> {
        self.find(word)
            .filter(|node| node.is_word)
            .map(|node| node.importance)
    }

    /// Raise a stored word's importance by one. False if `word` is not stored.
    pub fn increment_importance(&mut self, word: &str) -> bool {
        let Some(indices) = letter_indices(word) else {
            return false;
        };
        let mut node = &mut self.root;
        for index in indices {
            match node.child_mut(index) {
                Some(child) => node = child,
                None => return false,
            }
        }
        if !node.is_word {
            return false;
        }
        node.importance = node.importance.saturating_add(1);
        true
    }

    /// Every stored word with its importance, in alphabetical order.
    pub fn words(&self) -> Vec<(String, u32)> {
        let mut out = Vec::with_capacity(self.words);
        let mut path = String::new();
        collect(&self.root, &mut path, &mut out);
        out
    }

    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn memory_estimate(&self) -> usize {
        self.nodes * (NODE_BYTES + CHILDREN_BYTES)
    }

    fn find(&self, word: &str) -> Option<&Node> {
        let mut node = &self.root;
        for index in letter_indices(word)? {
            node = node.child(index)?;
        }
        Some(node)
    }
}

impl Default for ArrayTrie {
    fn default() -> Self {
        Self::new()
    }
}

fn collect(node: &Node, path: &mut String, out: &mut Vec<(String, u32)>) {
    if node.is_word {
        out.push((path.clone(), node.importance));
    }
    let Some(children) = &node.children else {
        return;
    };
    for (index, child) in children.iter().enumerate() {
        if let Some(child) = child {
            path.push(char::from(b'a' + index as u8));
            collect(child, path, out);
            path.pop();
        }
    }
}

fn letter_indices(word: &str) -> Option<Vec<usize>> {
    word.bytes()
        .map(|b| b.is_ascii_lowercase().then(|| usize::from(b - b'a')))
        .collect()
}
