use parcel::parsers::character::expect_character;
use parcel::prelude::v1::*;

use super::ast;

#[derive(PartialEq)]
pub enum ParseErr {
    InvalidLine,
    Undefined(String),
}

impl std::fmt::Debug for ParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined(err) => write!(f, "undefined parse error: {}", err),
            Self::InvalidLine => write!(f, "provided line is invalid",),
        }
    }
}

impl std::fmt::Display for ParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for ParseErr {}

/// Classifies a single line of a word list. Surrounding whitespace is
/// discarded before the line is parsed.
///
/// # Example
///
/// ```
/// use word_regex_compiler::ast::*;
/// use word_regex_compiler::parse_line;
///
/// assert_eq!(
///     Ok(Line::Directive(Directive::new(DirectiveKind::Start, "^"))),
///     parse_line("  #start ^")
/// );
/// assert_eq!(Ok(Line::Comment), parse_line("# keywords"));
/// assert_eq!(Ok(Line::Word(Word("while".to_string()))), parse_line("while\n"));
/// ```
pub fn parse_line(line: &str) -> Result<ast::Line, ParseErr> {
    let input = line
        .trim()
        .chars()
        .enumerate()
        .collect::<Vec<(usize, char)>>();

    parse(&input)
}

pub fn parse(input: &[(usize, char)]) -> Result<ast::Line, ParseErr> {
    line()
        .parse(input)
        .map_err(|err| ParseErr::Undefined(format!("unspecified parse error occured: {}", err)))
        .and_then(|ms| match ms {
            MatchStatus::Match { inner, remainder, .. } if remainder.is_empty() => Ok(inner),
            // `word` consumes any non-blank line, so no input reaches these
            // arms. They guard against grammar changes.
            MatchStatus::Match { .. } => Err(ParseErr::InvalidLine),
            MatchStatus::NoMatch(..) => Err(ParseErr::InvalidLine),
        })
}

fn line<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], ast::Line> {
    parcel::or(blank().map(|_| ast::Line::Blank), || {
        parcel::or(directive().map(Into::into), || {
            parcel::or(comment().map(|_| ast::Line::Comment), || {
                word().map(Into::into)
            })
        })
    })
}

fn blank<'a>() -> impl Parser<'a, &'a [(usize, char)], ()> {
    move |input: &'a [(usize, char)]| match input.first() {
        None => Ok(MatchStatus::Match {
            span: 0..0,
            remainder: input,
            inner: (),
        }),
        Some(_) => Ok(MatchStatus::NoMatch(input)),
    }
}

// Directives

fn directive<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], ast::Directive> {
    parcel::right(parcel::join(
        expect_character('#'),
        parcel::join(directive_kind(), directive_argument()),
    ))
    .map(|(kind, argument)| ast::Directive::new(kind, argument))
}

fn directive_kind<'a>() -> impl Parser<'a, &'a [(usize, char)], ast::DirectiveKind> {
    parcel::or(keyword(ast::DirectiveKind::Start), || {
        parcel::or(keyword(ast::DirectiveKind::End), || {
            keyword(ast::DirectiveKind::Type)
        })
    })
}

/// Matches the keyword of the given directive kind, yielding the kind.
fn keyword<'a>(
    kind: ast::DirectiveKind,
) -> impl Parser<'a, &'a [(usize, char)], ast::DirectiveKind> {
    move |input: &'a [(usize, char)]| {
        let expected = kind.keyword();
        let len = expected.chars().count();

        match input.get(0..len) {
            Some(window) if window.iter().map(|&(_, c)| c).eq(expected.chars()) => {
                let start = window.first().map_or(0, |&(pos, _)| pos);

                Ok(MatchStatus::Match {
                    span: start..start + len,
                    remainder: &input[len..],
                    inner: kind,
                })
            }
            _ => Ok(MatchStatus::NoMatch(input)),
        }
    }
}

/// A directive keyword must be followed by whitespace or the end of the
/// line, otherwise the line is a comment such as `#starting`.
fn directive_argument<'a>() -> impl Parser<'a, &'a [(usize, char)], String> {
    move |input: &'a [(usize, char)]| match input.first() {
        None => Ok(MatchStatus::Match {
            span: 0..0,
            remainder: input,
            inner: String::new(),
        }),
        Some(&(_, next)) if next.is_whitespace() => rest_of_line()
            .map(|argument| argument.trim_start().to_string())
            .parse(input),
        Some(_) => Ok(MatchStatus::NoMatch(input)),
    }
}

// Comments

fn comment<'a>() -> impl Parser<'a, &'a [(usize, char)], ()> {
    parcel::join(expect_character('#'), rest_of_line()).map(|_| ())
}

// Words

fn word<'a>() -> impl Parser<'a, &'a [(usize, char)], ast::Word> {
    rest_of_line()
        .predicate(|word: &String| !word.is_empty())
        .map(ast::Word)
}

// Terminals

fn rest_of_line<'a>() -> impl Parser<'a, &'a [(usize, char)], String> {
    move |input: &'a [(usize, char)]| {
        let span = match (input.first(), input.last()) {
            (Some(&(start, _)), Some(&(end, _))) => start..end + 1,
            _ => 0..0,
        };

        Ok(MatchStatus::Match {
            span,
            remainder: &input[input.len()..],
            inner: input.iter().map(|&(_, c)| c).collect(),
        })
    }
}
