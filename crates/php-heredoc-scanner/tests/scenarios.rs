//! End-to-end scenarios driven through the full dispatcher, using the
//! mock host in `support`. Each case was traced by hand against the
//! state machine in `src/scan.rs` before being written down here.
//!
//! The scanner never sees the `<<<` itself (the host grammar consumes
//! that); every input below starts right after it.

mod support;

use php_heredoc_scanner::HeredocToken::*;
use support::lex_heredoc;

#[test]
fn empty_nowdoc_closes_immediately() {
    let tokens = lex_heredoc("'EOF'\nEOF;\n");
    let kinds: Vec<_> = tokens.iter().map(|e| e.token).collect();
    assert_eq!(kinds, vec![HeredocStart, HeredocEnd]);
    assert_eq!(tokens[0].text, "'EOF'\n");
    assert_eq!(tokens[1].text, "EOF;\n");
}

#[test]
fn simple_body_with_no_interpolation() {
    let tokens = lex_heredoc("EOF\nHeredoc\nEOF;\n");
    let kinds: Vec<_> = tokens.iter().map(|e| e.token).collect();
    assert_eq!(kinds, vec![HeredocStart, HeredocBody, HeredocEnd]);
    assert_eq!(tokens[1].text, "Heredoc\n");
}

#[test]
fn variable_interpolation_splits_body_around_the_host_lexed_variable() {
    let tokens = lex_heredoc("EOF\n$var\nEOF;\n");
    let kinds: Vec<_> = tokens.iter().map(|e| e.token).collect();
    // No HEREDOC_BODY: the body was empty before `$var`, so the scanner's
    // attempt fails and the host takes the variable itself (§4.5).
    assert_eq!(kinds, vec![HeredocStart, HeredocEndNewline, HeredocEnd]);
}

#[test]
fn braced_interpolation_emits_the_opening_brace_then_hands_off() {
    let tokens = lex_heredoc("EOF\n{$var}\nEOF;\n");
    let kinds: Vec<_> = tokens.iter().map(|e| e.token).collect();
    assert_eq!(
        kinds,
        vec![HeredocStart, EmbeddedOpeningBrace, HeredocEndNewline, HeredocEnd]
    );
    assert_eq!(tokens[1].text, "{");
}

#[test]
fn a_false_positive_delimiter_prefix_does_not_close_the_heredoc() {
    let tokens = lex_heredoc("EOF\nEOFEOF\nEOF;\n");
    let kinds: Vec<_> = tokens.iter().map(|e| e.token).collect();
    assert_eq!(kinds, vec![HeredocStart, HeredocBody, HeredocEnd]);
    assert_eq!(tokens[1].text, "EOFEOF\n");
}

#[test]
fn escaped_dollar_and_brace_produce_no_interpolation_tokens() {
    let tokens = lex_heredoc("EOF\n\\$func\\{x\nEOF;\n");
    let kinds: Vec<_> = tokens.iter().map(|e| e.token).collect();
    assert_eq!(kinds, vec![HeredocStart, HeredocBody, HeredocEnd]);
    assert_eq!(tokens[1].text, "\\$func\\{x\n");
}

#[test]
fn dollar_not_followed_by_an_identifier_is_plain_body_text() {
    let tokens = lex_heredoc("EOT\n$('a')\nEOT;\n");
    let kinds: Vec<_> = tokens.iter().map(|e| e.token).collect();
    assert_eq!(kinds, vec![HeredocStart, HeredocBody, HeredocEnd]);
    assert_eq!(tokens[1].text, "$('a')\n");
}

#[test]
fn opener_without_a_terminating_newline_fails() {
    // No `\n` after the identifier: scan_start can't succeed, and since no
    // heredoc is open yet the driver just reports nothing.
    assert_eq!(lex_heredoc("EOF"), vec![]);
    assert_eq!(lex_heredoc("EOF;"), vec![]);
}

#[test]
fn nowdoc_ignores_interpolation_sites() {
    let tokens = lex_heredoc("'EOF'\n$var {$x}\nEOF;\n");
    let kinds: Vec<_> = tokens.iter().map(|e| e.token).collect();
    assert_eq!(kinds, vec![HeredocStart, HeredocBody, HeredocEnd]);
    assert_eq!(tokens[1].text, "$var {$x}\n");
}

#[test]
fn consecutive_heredocs_share_no_state() {
    let first = lex_heredoc("A\nbody one\nA;\n");
    let second = lex_heredoc("B\nbody two\nB;\n");
    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 3);
    assert_eq!(first[0].text, "A\n");
    assert_eq!(second[0].text, "B\n");
}

#[test]
fn long_delimiter_near_the_255_byte_limit_is_accepted() {
    let delimiter = "A".repeat(255);
    let input = format!("{delimiter}\nbody\n{delimiter};\n");
    let tokens = lex_heredoc(&input);
    let kinds: Vec<_> = tokens.iter().map(|e| e.token).collect();
    assert_eq!(kinds, vec![HeredocStart, HeredocBody, HeredocEnd]);
}

#[test]
fn high_byte_identifier_start_is_accepted_without_utf8_decoding() {
    // 0xFF EOF\n ... EOF;\n -- a delimiter starting with a raw high byte.
    let mut input = vec![0xFFu8];
    input.extend_from_slice(b"EOF\nx\n");
    input.push(0xFF);
    input.extend_from_slice(b"EOF;\n");
    let tokens = support::lex_heredoc_bytes(&input);
    let kinds: Vec<_> = tokens.iter().map(|e| e.token).collect();
    assert_eq!(kinds, vec![HeredocStart, HeredocBody, HeredocEnd]);
}
