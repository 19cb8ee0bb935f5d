//! Serializes a prefix trie into a regular expression that matches exactly
//! the words stored in it.
//!
//! # Example
//!
//! ```
//! use word_regex_compiler::compile;
//! use word_regex_compiler::trie::Trie;
//!
//! let trie = Trie::from_words(["foo", "bar", "baz"]);
//!
//! assert_eq!("(?:ba(?:r|z)|foo)", compile(&trie));
//! ```
use log::debug;

use super::config::Config;
use super::trie::{NodeIdx, Trie, ROOT};

const GROUP_OPEN: &str = "(?:";
const GROUP_CLOSE: char = ')';
const ALTERNATION: char = '|';
const OPTIONAL: char = '?';

/// Serializes the trie into a pattern body, without anchors.
///
/// Runs of single-child, non-terminal nodes are emitted as plain literals.
/// Any node with more than one child, or with one child while also ending a
/// word, becomes a non-capturing alternation group whose branches are
/// ordered by character. A group at a terminal node is made optional.
pub fn compile(trie: &Trie) -> String {
    let mut pattern = String::new();
    write_node(trie, ROOT, &mut pattern);
    pattern
}

/// Builds a trie from the words and serializes it between the configured
/// prefix and suffix anchors.
///
/// # Example
///
/// ```
/// use word_regex_compiler::{compile_pattern, Config};
///
/// assert_eq!(
///     "\\bcat(?:s)?\\b",
///     compile_pattern(["cats", "cat"], &Config::default())
/// );
/// ```
pub fn compile_pattern<I, S>(words: I, config: &Config) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let trie = words.into_iter().collect::<Trie>();
    debug!(
        "built trie of {} nodes for {} words",
        trie.node_cnt(),
        trie.word_cnt()
    );

    let body = compile(&trie);

    [config.prefix.as_str(), body.as_str(), config.suffix.as_str()].concat()
}

fn write_node(trie: &Trie, idx: NodeIdx, pattern: &mut String) {
    let node = &trie[idx];

    match (node.child_cnt(), node.is_terminal()) {
        (0, _) => (),
        // prefix compression, a lone continuation needs no group.
        (1, false) => {
            for (c, child) in node.children() {
                pattern.push(c);
                write_node(trie, child, pattern);
            }
        }
        (_, optional) => {
            pattern.push_str(GROUP_OPEN);
            for (branch, (c, child)) in node.children().enumerate() {
                if branch > 0 {
                    pattern.push(ALTERNATION);
                }
                pattern.push(c);
                write_node(trie, child, pattern);
            }
            pattern.push(GROUP_CLOSE);

            if optional {
                pattern.push(OPTIONAL);
            }
        }
    }
}
