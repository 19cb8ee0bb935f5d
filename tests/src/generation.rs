use word_regex_compiler::*;

/// Reassembles the unescaped pattern from a formatted assignment.
fn pattern_of(output: &str) -> String {
    let literal: String = output
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let start = line.find('\'').unwrap() + 1;
            &line[start..line.len() - 1]
        })
        .collect();

    literal.replace("''", "'")
}

#[test]
fn should_generate_assignment_for_plain_word_list() {
    let input = "foo\nbar\nbaz\n";

    assert_eq!(
        "\tregex = '\\b(?:ba(?:r|z)|foo)\\b'\n\n",
        generate(input.as_bytes()).unwrap()
    )
}

#[test]
fn should_fold_prefix_word_into_optional_group() {
    let input = "cats\ncat\n";

    assert_eq!(
        "\tregex = '\\bcat(?:s)?\\b'\n\n",
        generate(input.as_bytes()).unwrap()
    )
}

#[test]
fn should_apply_directives_to_generated_output() {
    let input = "\
# keywords recognized only at the start of a line
#start ^\\s*
#end (?=\\s|$)
#type start
include
define
";

    assert_eq!(
        "\tstart = '^\\s*(?:define|include)(?=\\s|$)'\n\n",
        generate(input.as_bytes()).unwrap()
    )
}

#[test]
fn should_lead_with_start_directive_text() {
    let input = "#start <\nbold\nbox\n";
    let output = generate(input.as_bytes()).unwrap();

    assert!(output.starts_with("\tregex = '<bo"), "{}", output)
}

#[test]
fn should_generate_identical_output_regardless_of_input_order() {
    let words = [
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double",
        "else", "enum", "extern", "float", "for", "goto", "if", "int", "long",
    ];

    let forward = words.join("\n");
    let reversed = words.iter().rev().copied().collect::<Vec<_>>().join("\n");
    let rotated = words[7..]
        .iter()
        .chain(words[..7].iter())
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let expected = generate(forward.as_bytes()).unwrap();
    assert_eq!(expected, generate(reversed.as_bytes()).unwrap());
    assert_eq!(expected, generate(rotated.as_bytes()).unwrap());
}

#[test]
fn should_generate_degenerate_pattern_for_empty_word_set() {
    let input = "# nothing but comments\n\n   \n";

    assert_eq!("\tregex = '\\b\\b'\n\n", generate(input.as_bytes()).unwrap())
}

#[test]
fn should_generate_empty_literal_when_anchors_are_cleared() {
    let input = "#start\n#end\n";

    assert_eq!("\tregex = ''\n\n", generate(input.as_bytes()).unwrap())
}

#[test]
fn should_accept_crlf_line_endings() {
    let input = "if\r\nin\r\n";

    assert_eq!(
        "\tregex = '\\bi(?:f|n)\\b'\n\n",
        generate(input.as_bytes()).unwrap()
    )
}

#[test]
fn should_wrap_long_patterns_without_altering_them() {
    let words = (0..200)
        .map(|n| format!("word{:03}x", n * 7))
        .collect::<Vec<_>>();
    let input = words.join("\n");

    let output = generate(input.as_bytes()).unwrap();
    let layout = Layout::default();

    assert!(output.lines().count() > 2);
    for line in output.lines() {
        assert!(layout.columns(line) <= layout.line_width, "{}", line);
    }
    assert_eq!(
        compile_pattern(&words, &Config::default()),
        pattern_of(&output)
    );
}

#[test]
fn should_escape_quotes_in_words() {
    let input = "don't\n";

    assert_eq!(
        "\tregex = '\\bdon''t\\b'\n\n",
        generate(input.as_bytes()).unwrap()
    )
}

#[test]
fn should_reject_unreadable_input() {
    let input: &[u8] = &[0xc3, 0x28, b'\n'];

    assert!(matches!(generate(input), Err(Error::Io(_))))
}
