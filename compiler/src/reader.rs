//! Reads a line-oriented word list into a set of words and the configuration
//! overrides its directives carry.
//!
//! # Example
//!
//! ```
//! use word_regex_compiler::reader::read_word_list;
//!
//! let input = "#type keywords\n# control flow\nif\nelse\nif\n";
//! let word_list = read_word_list(input.as_bytes()).unwrap();
//!
//! assert_eq!("keywords", word_list.config.type_name);
//! assert_eq!(
//!     vec!["else", "if"],
//!     word_list.words.iter().map(String::as_str).collect::<Vec<_>>()
//! );
//! ```
use std::collections::BTreeSet;
use std::io::BufRead;

use log::{debug, trace};

use crate::ast::{Directive, DirectiveKind, Line, Word};
use crate::config::Config;
use crate::error::Error;
use crate::parser::parse_line;

/// The result of reading a word list: the distinct words and the
/// configuration that frames them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordList {
    pub words: BTreeSet<String>,
    pub config: Config,
}

impl WordList {
    /// Applies a directive to the configuration. A later directive of the
    /// same kind replaces an earlier one.
    fn apply(&mut self, directive: Directive) {
        debug!("{} overrides value with {:?}", directive.kind, directive.argument);

        let target = match directive.kind {
            DirectiveKind::Start => &mut self.config.prefix,
            DirectiveKind::End => &mut self.config.suffix,
            DirectiveKind::Type => &mut self.config.type_name,
        };
        *target = directive.argument;
    }
}

/// Consumes every line of the input. Any failure to read the stream,
/// including invalid UTF-8, is returned as [`Error::Io`].
pub fn read_word_list<R: BufRead>(input: R) -> Result<WordList, Error> {
    let word_list = input.lines().enumerate().try_fold(
        WordList::default(),
        |mut word_list, (idx, line)| -> Result<WordList, Error> {
            let line_no = idx + 1;
            let line = line?;

            match parse_line(&line).map_err(|source| Error::Parse {
                line: line_no,
                source,
            })? {
                Line::Blank => (),
                Line::Comment => trace!("line {}: skipping comment", line_no),
                Line::Directive(directive) => word_list.apply(directive),
                Line::Word(Word(word)) => {
                    word_list.words.insert(word);
                }
            }

            Ok(word_list)
        },
    )?;

    debug!("read {} distinct words", word_list.words.len());
    Ok(word_list)
}
