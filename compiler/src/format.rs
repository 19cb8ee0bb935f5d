//! Formats a compiled pattern as a configuration assignment, splitting the
//! string literal across continuation lines.
//!
//! # Example
//!
//! ```
//! use word_regex_compiler::format_assignment;
//!
//! assert_eq!(
//!     "\tregex = '\\b(?:ba(?:r|z)|foo)\\b'\n\n",
//!     format_assignment("regex", "\\b(?:ba(?:r|z)|foo)\\b")
//! );
//! ```

const QUOTE: char = '\'';
const ESCAPED_QUOTE: &str = "''";
const CONCATENATION: &str = "+ ";

/// Controls how an assignment is broken into physical lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// The column budget of every physical line.
    pub line_width: usize,
    /// The column a tab advances to is the next multiple of this width.
    pub tab_width: usize,
    /// The fewest literal columns placed on a line, even when the line then
    /// exceeds `line_width`.
    pub min_chunk: usize,
}

impl Layout {
    pub const fn new(line_width: usize, tab_width: usize, min_chunk: usize) -> Self {
        Self {
            line_width,
            tab_width,
            min_chunk,
        }
    }

    /// Returns the column reached after printing `text` from column zero.
    pub fn columns(&self, text: &str) -> usize {
        text.chars().fold(0, |col, c| match c {
            '\t' if self.tab_width > 0 => (col / self.tab_width + 1) * self.tab_width,
            _ => col + 1,
        })
    }

    /// The literal columns available after `lead`, reserving one column for
    /// the closing quote.
    fn budget(&self, lead: &str) -> usize {
        self.line_width
            .saturating_sub(self.columns(lead) + 1)
            .max(self.min_chunk)
            .max(1)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(80, 8, 8)
    }
}

/// Escapes a pattern for inclusion in a single-quoted string by doubling
/// every quote.
pub fn escape_literal(pattern: &str) -> String {
    pattern.replace(QUOTE, ESCAPED_QUOTE)
}

/// Formats `<type_name> = '<pattern>'` using the default [`Layout`].
pub fn format_assignment(type_name: &str, pattern: &str) -> String {
    format_assignment_with_layout(type_name, pattern, &Layout::default())
}

/// Formats `<type_name> = '<pattern>'`. The first line is indented by one
/// tab, continuation lines by two tabs followed by the concatenation
/// operator. The output is terminated by a blank line.
pub fn format_assignment_with_layout(type_name: &str, pattern: &str, layout: &Layout) -> String {
    let head = format!("\t{} = {}", type_name, QUOTE);
    let continuation = format!("\t\t{}{}", CONCATENATION, QUOTE);

    let chunks = split_literal(
        pattern,
        layout.budget(&head),
        layout.budget(&continuation),
    );

    let mut output = String::new();
    for (idx, chunk) in chunks.iter().enumerate() {
        let lead = if idx == 0 { &head } else { &continuation };
        output.push_str(lead);
        output.push_str(chunk);
        output.push(QUOTE);
        output.push('\n');
    }
    output.push('\n');

    output
}

/// Escapes and splits the pattern into chunks no wider than the budget of
/// the line they land on. An escaped quote is never split, and every chunk
/// carries at least one character.
fn split_literal(pattern: &str, first_budget: usize, rest_budget: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    for c in pattern.chars() {
        let budget = if chunks.is_empty() {
            first_budget
        } else {
            rest_budget
        };
        let unit_width = if c == QUOTE { ESCAPED_QUOTE.len() } else { 1 };

        if width > 0 && width + unit_width > budget {
            chunks.push(std::mem::take(&mut current));
            width = 0;
        }

        if c == QUOTE {
            current.push_str(ESCAPED_QUOTE);
        } else {
            current.push(c);
        }
        width += unit_width;
    }
    chunks.push(current);

    chunks
}
