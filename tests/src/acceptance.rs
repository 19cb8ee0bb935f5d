use regex::Regex;
use word_regex_compiler::compile;
use word_regex_compiler::trie::Trie;

/// Compiles the word set and anchors the body so that it must match a whole
/// candidate.
fn matcher_for(words: &[&str]) -> Regex {
    let body = compile(&Trie::from_words(words));

    Regex::new(&format!("^(?:{})$", body)).unwrap()
}

/// Candidates that sit next to the word set without belonging to it: every
/// proper prefix and every single character extension of each word.
fn near_misses<'a>(words: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    words
        .iter()
        .flat_map(|word| {
            let prefixes = word
                .char_indices()
                .map(|(idx, _)| word[..idx].to_string())
                .collect::<Vec<_>>();
            let extensions = ['a', 's', 'z', '_']
                .iter()
                .map(|c| format!("{}{}", word, c))
                .collect::<Vec<_>>();

            prefixes.into_iter().chain(extensions)
        })
        .filter(move |candidate| !words.contains(&candidate.as_str()))
}

fn assert_accepts_exactly(words: &[&str]) {
    let matcher = matcher_for(words);

    for word in words {
        assert!(matcher.is_match(word), "{} rejected by {}", word, matcher);
    }
    for candidate in near_misses(words) {
        assert!(
            !matcher.is_match(&candidate),
            "{} accepted by {}",
            candidate,
            matcher
        );
    }
}

#[test]
fn should_accept_exactly_disjoint_words() {
    assert_accepts_exactly(&["foo", "bar", "baz"])
}

#[test]
fn should_accept_exactly_words_that_prefix_each_other() {
    assert_accepts_exactly(&["a", "ab", "abc", "abd", "b"])
}

#[test]
fn should_accept_exactly_a_keyword_list() {
    assert_accepts_exactly(&[
        "abstract", "as", "async", "await", "break", "const", "continue", "crate", "dyn",
        "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop",
        "match", "mod", "move", "mut", "pub", "ref", "return", "self", "Self", "static",
        "struct", "super", "trait", "true", "type", "unsafe", "use", "where", "while",
    ])
}

#[test]
fn should_accept_exactly_non_ascii_words() {
    assert_accepts_exactly(&["über", "übel", "ähnlich", "日本", "日本語"])
}

#[test]
fn should_match_whole_words_with_default_anchors() {
    let pattern = word_regex_compiler::compile_pattern(
        ["int", "integer"],
        &word_regex_compiler::Config::default(),
    );
    let matcher = Regex::new(&pattern).unwrap();

    let found = matcher
        .find_iter("int x; integer y; interior z; print")
        .map(|m| m.as_str())
        .collect::<Vec<_>>();

    assert_eq!(vec!["int", "integer"], found);
}
