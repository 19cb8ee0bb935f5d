//! Compiles a list of literal words into a compact regular expression that
//! matches exactly those words, and formats it as an assignment ready to be
//! spliced into a highlighting definition.
//!
//! # Example
//!
//! ```rust
//! // Generating the formatted assignment from a word list is accomplished by
//! // a single function.
//! use word_regex_compiler::generate;
//!
//! // Blank lines and comments are ignored, `#start`, `#end` and `#type`
//! // override the anchors and the assigned name.
//! let input = "# statements\nstatic\nstruct\n\nswitch\n";
//!
//! let output = generate(input.as_bytes()).expect("failed to read input");
//!
//! // Words sharing a prefix are folded into a trie, so each alternative is
//! // only spelled out from its first branching character onwards.
//! assert_eq!(
//!     "\tregex = '\\bs(?:t(?:atic|ruct)|witch)\\b'\n\n",
//!     output
//! )
//! ```
//!
//! The individual stages are exposed for callers that already hold a word
//! set or want a different layout.
//!
//! ```rust
//! use word_regex_compiler::{compile, format_assignment, Config};
//! use word_regex_compiler::trie::Trie;
//!
//! let trie = Trie::from_words(["cat", "cats"]);
//! let config = Config::default().with_type_name("animal");
//! let pattern = format!("{}{}{}", config.prefix, compile(&trie), config.suffix);
//!
//! assert_eq!(
//!     "\tanimal = '\\bcat(?:s)?\\b'\n\n",
//!     format_assignment(&config.type_name, &pattern)
//! );
//! ```

use std::io::BufRead;

pub mod ast;
pub mod compiler;
pub mod config;
mod error;
pub mod format;
pub mod parser;
pub mod reader;
pub mod trie;

pub use compiler::{compile, compile_pattern};
pub use config::Config;
pub use error::Error;
pub use format::{escape_literal, format_assignment, format_assignment_with_layout, Layout};
pub use parser::{parse_line, ParseErr};
pub use reader::{read_word_list, WordList};

/// Reads a word list in full and returns the formatted assignment for it.
/// The only failure is an input that cannot be read.
pub fn generate<R: BufRead>(input: R) -> Result<String, Error> {
    let WordList { words, config } = read_word_list(input)?;
    let pattern = compile_pattern(&words, &config);

    Ok(format_assignment(&config.type_name, &pattern))
}
