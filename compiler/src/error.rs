//! Errors surfaced while generating a pattern from a word list.
use thiserror::Error;

use crate::parser::ParseErr;

#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be read or the output could not be written.
    #[error("stream access failed: {0}")]
    Io(#[from] std::io::Error),

    /// A line the grammar could not classify.
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number within the input.
        line: usize,
        #[source]
        source: ParseErr,
    },
}
