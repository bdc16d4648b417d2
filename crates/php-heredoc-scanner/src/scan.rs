//! The scan dispatcher and the two sub-scanners (§4.2-§4.6).

use crate::lexer::{ScannerLexer, EOF};
use crate::state::{ScannerState, MAX_DELIMITER_LEN};
use crate::token::{ExpectedTokens, HeredocToken};

const SPACE: u32 = 0x20;
const TAB: u32 = 0x09;
const NEWLINE: u32 = 0x0A;
const BACKSLASH: u32 = 0x5C;
const DOLLAR: u32 = 0x24;
const LBRACE: u32 = 0x7B;
const SEMICOLON: u32 = 0x3B;
const SINGLE_QUOTE: u32 = 0x27;
const DOUBLE_QUOTE: u32 = 0x22;

fn is_ascii_alpha(c: u32) -> bool {
    (0x41..=0x5A).contains(&c) || (0x61..=0x7A).contains(&c)
}

fn is_ascii_digit(c: u32) -> bool {
    (0x30..=0x39).contains(&c)
}

/// First char of an identifier: ASCII letter, underscore, or a high byte
/// (0x80-0xFF), accepted only in this position (§4.3, §9).
fn is_ident_start(c: u32) -> bool {
    is_ascii_alpha(c) || c == 0x5F || (0x80..=0xFF).contains(&c)
}

/// Continuation byte of an identifier: ASCII letter, digit, or underscore.
fn is_ident_continue(c: u32) -> bool {
    is_ascii_alpha(c) || is_ascii_digit(c) || c == 0x5F
}

/// Decide which sub-scanner to run, or fail outright (§4.2).
///
/// `HEREDOC_START_NEWLINE` and `HEREDOC_END_NEWLINE` are never directly
/// requested by the host; they're only ever produced as side effects of
/// `scan_body`, which is why they don't gate the dispatch decision.
pub fn scan(state: &mut ScannerState, lexer: &mut dyn ScannerLexer, expected: &ExpectedTokens) -> bool {
    if state.is_open()
        && expected.contains_any(&[
            HeredocToken::HeredocBody,
            HeredocToken::HeredocEnd,
            HeredocToken::EmbeddedOpeningBrace,
        ])
    {
        scan_body(state, lexer, expected)
    } else if expected.contains(HeredocToken::HeredocStart) {
        scan_start(state, lexer)
    } else {
        false
    }
}

/// Recognize the opener: `[ \t]* ( '\'' ident '\'' | '"' ident '"' | ident ) '\n'` (§4.3).
pub fn scan_start(state: &mut ScannerState, lexer: &mut dyn ScannerLexer) -> bool {
    while matches!(lexer.peek(), SPACE | TAB) {
        lexer.advance(true);
    }

    let is_nowdoc = lexer.peek() == SINGLE_QUOTE;
    let quote = match lexer.peek() {
        q @ SINGLE_QUOTE | q @ DOUBLE_QUOTE => Some(q),
        _ => None,
    };
    if quote.is_some() {
        lexer.advance(false);
    }

    if !is_ident_start(lexer.peek()) {
        return false;
    }
    let mut delimiter = Vec::new();
    while is_ident_continue(lexer.peek()) {
        if delimiter.len() == MAX_DELIMITER_LEN {
            return false;
        }
        delimiter.push(lexer.peek() as u8);
        lexer.advance(false);
    }

    if let Some(q) = quote {
        if lexer.peek() != q {
            return false;
        }
        lexer.advance(false);
    }

    if lexer.peek() != NEWLINE || delimiter.is_empty() {
        return false;
    }
    lexer.advance(false); // the newline is part of HEREDOC_START
    lexer.set_result(HeredocToken::HeredocStart);
    lexer.mark_end();

    *state.delimiter_mut() = delimiter;
    state.set_is_nowdoc(is_nowdoc);
    state.set_did_start(false);
    state.set_did_end(false);

    try_optimistic_close(state, lexer);
    true
}

/// Try to match the closer immediately after the opener, so that a
/// following `scan_body` call can emit `HEREDOC_END_NEWLINE`/`HEREDOC_END`
/// without re-matching the delimiter (§4.3 step 6, §9 "Optimistic close").
///
/// Every byte this reads beyond `HEREDOC_START`'s marked end is pure
/// lookahead: if it doesn't pan out, the host rewinds to that mark before
/// the next `scan` call, so nothing here needs to be undone by hand.
fn try_optimistic_close(state: &mut ScannerState, lexer: &mut dyn ScannerLexer) {
    let delimiter = state.delimiter().to_vec();
    for b in delimiter {
        if lexer.peek() != b as u32 {
            return;
        }
        lexer.advance(false);
    }
    if lexer.peek() == SEMICOLON {
        lexer.advance(false);
    }
    if lexer.peek() == NEWLINE {
        state.set_did_end(true);
    }
}

/// Recognize body content, interpolation sites, and the close (§4.4).
pub fn scan_body(state: &mut ScannerState, lexer: &mut dyn ScannerLexer, _expected: &ExpectedTokens) -> bool {
    let mut did_advance = false;
    loop {
        let c = lexer.peek();

        if c == EOF {
            return false;
        }

        if c == BACKSLASH {
            lexer.advance(false);
            lexer.advance(false);
            did_advance = true;
            continue;
        }

        if !state.is_nowdoc() && (c == LBRACE || c == DOLLAR) {
            lexer.mark_end();
            if c == LBRACE {
                lexer.advance(false);
                if lexer.peek() == DOLLAR && !did_advance {
                    lexer.mark_end();
                    lexer.advance(false);
                    if is_ident_start(lexer.peek()) {
                        lexer.set_result(HeredocToken::EmbeddedOpeningBrace);
                        return true;
                    }
                }
                did_advance = true;
                continue;
            }
            // c == DOLLAR
            lexer.advance(false);
            if is_ident_start(lexer.peek()) {
                lexer.set_result(HeredocToken::HeredocBody);
                return did_advance;
            }
            did_advance = true;
            continue;
        }

        if c == NEWLINE || state.did_end() {
            if c == NEWLINE {
                lexer.advance(false);
            }
            lexer.mark_end();

            let delimiter_matched = scan_delimiter(state, lexer);
            let mut closed = false;
            if delimiter_matched {
                if lexer.peek() == SEMICOLON {
                    lexer.advance(false);
                }
                if lexer.peek() == NEWLINE {
                    lexer.advance(false);
                    closed = true;
                }
            }

            if closed {
                let had_prior_close = state.did_end();
                if did_advance {
                    // The mark set above already ends right after the body's
                    // own newline; the matched closer stays pure lookahead.
                    lexer.set_result(HeredocToken::HeredocBody);
                    state.set_did_start(true);
                    state.set_did_end(true);
                } else if had_prior_close {
                    // HEREDOC_END must cover the delimiter (and `;`) plus its
                    // newline, so extend the mark out to what we just matched.
                    lexer.mark_end();
                    lexer.set_result(HeredocToken::HeredocEnd);
                    state.reset();
                } else {
                    lexer.set_result(HeredocToken::HeredocEndNewline);
                    state.set_did_start(true);
                    state.set_did_end(true);
                }
                return true;
            } else if !delimiter_matched && !state.did_start() && !did_advance {
                lexer.set_result(HeredocToken::HeredocStartNewline);
                state.set_did_start(true);
                return true;
            }

            did_advance = true;
            continue;
        }

        lexer.advance(false);
        did_advance = true;
    }
}

/// Compare the upcoming bytes against `state.delimiter()`, byte-for-byte,
/// case-sensitively. On mismatch, returns `false`; whatever prefix did
/// match has already been consumed for real (the same "no undo" rule as
/// everywhere else in this scanner), so callers must be ready to treat
/// that prefix as ordinary content (§4.6).
fn scan_delimiter(state: &ScannerState, lexer: &mut dyn ScannerLexer) -> bool {
    for &b in state.delimiter() {
        if lexer.peek() != b as u32 {
            return false;
        }
        lexer.advance(false);
    }
    true
}
