//! The line-level vocabulary of a word list.

/// A single classified line of a word list.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    /// An empty or whitespace-only line.
    Blank,
    /// A line beginning with `#` that is not a recognized directive.
    Comment,
    Directive(Directive),
    Word(Word),
}

impl From<Directive> for Line {
    fn from(src: Directive) -> Self {
        Self::Directive(src)
    }
}

impl From<Word> for Line {
    fn from(src: Word) -> Self {
        Self::Word(src)
    }
}

/// The configuration value a directive overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `#start`, the anchor placed before the compiled body.
    Start,
    /// `#end`, the anchor placed after the compiled body.
    End,
    /// `#type`, the name the pattern is assigned to.
    Type,
}

impl DirectiveKind {
    /// The keyword that follows the `#` marker for this directive.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Type => "type",
        }
    }
}

impl std::fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.keyword())
    }
}

/// A directive line paired with its left-trimmed argument.
#[derive(Debug, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub argument: String,
}

impl Directive {
    pub fn new<S: Into<String>>(kind: DirectiveKind, argument: S) -> Self {
        Self {
            kind,
            argument: argument.into(),
        }
    }
}

/// A literal word, inserted into the output pattern unescaped.
#[derive(Debug, PartialEq, Eq)]
pub struct Word(pub String);

impl From<String> for Word {
    fn from(src: String) -> Self {
        Self(src)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
