//! Character trie for longest-pattern lookup at a fixed start position.
//!
//! Provides O(k) insertion and lookup where k is the pattern length, with
//! O(1) child access via hash map indexing. The engine builds two of these
//! (unconditional and conditional patterns) once at construction; they are
//! read-only afterwards.

use std::collections::HashMap;

/// A prefix tree keyed by character.
///
/// # Performance
///
/// - Insert: O(k) where k is key length in characters
/// - Lookup: O(k), bounded by the longest stored key
/// - Child access: O(1) via hash map
///
/// # Design
///
/// Lookups walk abstract characters, never byte offsets: grammar patterns
/// and replacements routinely mix ASCII source text with multi-byte Bengali.
/// Each node exclusively owns its children; the trie owns the root.
#[derive(Debug, Clone)]
pub struct Trie<V> {
    root: Node<V>,
}

#[derive(Debug, Clone)]
struct Node<V> {
    /// Value stored at this node when it terminates a key.
    value: Option<V>,
    /// Children indexed by the next character.
    children: HashMap<char, Node<V>>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            value: None,
            children: HashMap::new(),
        }
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    /// Create an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self { root: Node::new() }
    }

    /// Insert a key-value pair.
    ///
    /// If the key already exists, the value is replaced and the old value
    /// returned (last insert wins; duplicate `find` strings are a grammar
    /// authoring concern, not a runtime error).
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_insert_with(Node::new);
        }
        node.value.replace(value)
    }

    /// Find the value of the longest key matching `text` at exactly
    /// `position`.
    ///
    /// Walks characters from `position`, remembering the payload of the
    /// deepest terminal node reached; stops at the first character with no
    /// child. This is "longest match at this start position", not
    /// leftmost-longest-anywhere.
    ///
    /// # Example
    ///
    /// ```
    /// use okkhor::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("ng", "ং");
    /// trie.insert("ngg", "ঙ্গ");
    /// trie.insert("ngk", "ঙ্ক");
    ///
    /// let text: Vec<char> = "ngga".chars().collect();
    /// assert_eq!(trie.search_longest(&text, 0), Some(&"ঙ্গ"));
    /// let text: Vec<char> = "ngala".chars().collect();
    /// assert_eq!(trie.search_longest(&text, 0), Some(&"ং"));
    /// ```
    #[must_use]
    pub fn search_longest(&self, text: &[char], position: usize) -> Option<&V> {
        let mut node = &self.root;
        let mut best = None;

        for ch in text.get(position..).unwrap_or(&[]) {
            let Some(child) = node.children.get(ch) else {
                break;
            };
            node = child;
            if node.value.is_some() {
                best = node.value.as_ref();
            }
        }

        best
    }

    /// Find every value whose key matches `text` at `position`, longest
    /// first.
    ///
    /// Convenience for callers that want to try shorter matches when the
    /// longest is rejected; the rewrite engine itself only uses
    /// [`search_longest`](Self::search_longest).
    #[must_use]
    pub fn search_all(&self, text: &[char], position: usize) -> Vec<&V> {
        let mut node = &self.root;
        let mut matches = Vec::new();

        for ch in text.get(position..).unwrap_or(&[]) {
            let Some(child) = node.children.get(ch) else {
                break;
            };
            node = child;
            if let Some(ref v) = node.value {
                matches.push(v);
            }
        }

        matches.reverse();
        matches
    }

    /// Find the value for an exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut node = &self.root;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        node.value.as_ref()
    }

    /// Exact membership test.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
