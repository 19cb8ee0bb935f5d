//! An arena-backed prefix trie over a set of words.
use std::collections::BTreeMap;

/// An offset index into the trie's node arena.
pub type NodeIdx = usize;

/// The index of the root node, representing the empty prefix.
pub const ROOT: NodeIdx = 0;

/// A single trie node. Children are kept ordered by character so that any
/// walk over them is deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Node {
    children: BTreeMap<char, NodeIdx>,
    /// Marks that the path from the root to this node spells a whole word.
    terminal: bool,
}

impl Node {
    /// Returns the outgoing edges of the node in ascending character order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeIdx)> + '_ {
        self.children.iter().map(|(&c, &idx)| (c, idx))
    }

    pub fn child(&self, c: char) -> Option<NodeIdx> {
        self.children.get(&c).copied()
    }

    pub fn child_cnt(&self) -> usize {
        self.children.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A prefix trie where every node is owned by a single arena. The root is
/// always present at [`ROOT`] and nodes are never removed, so every
/// `NodeIdx` handed out stays valid for the life of the trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Builds a trie containing every word of the input. Insertion order has
    /// no effect on the resulting structure.
    ///
    /// # Example
    ///
    /// ```
    /// use word_regex_compiler::trie::Trie;
    ///
    /// let trie = Trie::from_words(["cat", "cats", "cat"]);
    ///
    /// assert!(trie.contains("cat"));
    /// assert!(trie.contains("cats"));
    /// assert!(!trie.contains("ca"));
    /// assert_eq!(2, trie.word_cnt());
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().fold(Self::new(), |mut trie, word| {
            trie.insert_mut(word.as_ref());
            trie
        })
    }

    /// Inserts a word, creating a node for each character not already on the
    /// path, and marks the final node terminal.
    pub fn insert_mut(&mut self, word: &str) {
        let last = word.chars().fold(ROOT, |parent, c| {
            match self.nodes[parent].child(c) {
                Some(child) => child,
                None => {
                    let child = self.insert_node_mut(Node::default());
                    self.nodes[parent].children.insert(c, child);
                    child
                }
            }
        });

        self.nodes[last].terminal = true;
    }

    fn insert_node_mut(&mut self, node: Node) -> NodeIdx {
        let next_idx = self.node_cnt();
        self.nodes.push(node);

        next_idx
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    /// Returns the number of nodes, root included.
    pub fn node_cnt(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct words stored.
    pub fn word_cnt(&self) -> usize {
        self.nodes.iter().filter(|node| node.terminal).count()
    }

    /// Returns true if the exact word was inserted.
    pub fn contains(&self, word: &str) -> bool {
        word.chars()
            .try_fold(ROOT, |idx, c| self.nodes[idx].child(c))
            .map_or(false, |idx| self.nodes[idx].terminal)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

/// Every `NodeIdx` is handed out by the arena, so indexing only panics on an
/// index taken from a different trie.
impl std::ops::Index<NodeIdx> for Trie {
    type Output = Node;

    fn index(&self, index: NodeIdx) -> &Self::Output {
        &self.nodes[index]
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
