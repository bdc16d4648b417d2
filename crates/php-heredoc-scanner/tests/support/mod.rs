//! A minimal host harness implementing the lexer/cursor contract the real
//! scanner relies on: advancing past a mark is pure lookahead, discarded
//! unless a later `mark_end` commits it, and a scan that returns `false`
//! leaves the cursor exactly where it was found.

use php_heredoc_scanner::{scan, EOF, ExpectedTokens, HeredocToken, ScannerLexer, ScannerState};

pub struct MockLexer<'a> {
    input: &'a [u8],
    cursor: usize,
    marked_end: usize,
    result: Option<HeredocToken>,
}

impl<'a> MockLexer<'a> {
    fn new(input: &'a [u8], start: usize) -> Self {
        Self {
            input,
            cursor: start,
            marked_end: start,
            result: None,
        }
    }
}

impl<'a> ScannerLexer for MockLexer<'a> {
    fn peek(&mut self) -> u32 {
        self.input
            .get(self.cursor)
            .map(|b| *b as u32)
            .unwrap_or(EOF)
    }

    fn advance(&mut self, _skip: bool) {
        if self.cursor < self.input.len() {
            self.cursor += 1;
        }
    }

    fn mark_end(&mut self) {
        self.marked_end = self.cursor;
    }

    fn set_result(&mut self, token: HeredocToken) {
        self.result = Some(token);
    }
}

/// One emitted token: its kind and the exact bytes it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub token: HeredocToken,
    pub text: String,
}

fn expected_for(state: &ScannerState) -> ExpectedTokens {
    if state.is_open() {
        ExpectedTokens::from_array([false, false, true, false, true, true])
    } else {
        ExpectedTokens::from_array([true, false, false, false, false, false])
    }
}

/// Drive the scanner over `input`, starting at byte offset 0, simulating
/// a host that hands interpolation sites ($var, {$var}) back to its own
/// grammar instead of the scanner. Stops once the heredoc fully closes,
/// at EOF, or after a scan failure outside an open heredoc.
pub fn lex_heredoc(input: &str) -> Vec<Emitted> {
    lex_heredoc_bytes(input.as_bytes())
}

/// Same as [`lex_heredoc`], but over raw bytes — needed for the high-byte
/// identifier boundary case, which isn't valid UTF-8.
pub fn lex_heredoc_bytes(bytes: &[u8]) -> Vec<Emitted> {
    let mut state = ScannerState::new();
    let mut cursor = 0usize;
    let mut out = Vec::new();

    loop {
        let expected = expected_for(&state);
        let snapshot = state.clone();
        let mut lexer = MockLexer::new(bytes, cursor);
        let ok = scan(&mut state, &mut lexer, &expected);

        if ok {
            let token = lexer.result.expect("scan succeeded without a result");
            let text = String::from_utf8_lossy(&bytes[cursor..lexer.marked_end]).into_owned();
            cursor = lexer.marked_end;
            let closed = token == HeredocToken::HeredocEnd;
            out.push(Emitted { token, text });
            if closed {
                return out;
            }
            continue;
        }

        state = snapshot;
        if !state.is_open() {
            return out;
        }

        // Host fallback: take the interpolation site itself (§4.5). A bare
        // `$var` is a variable reference; inside `{$var}` the host also
        // swallows the matching `}` once it finishes the expression.
        if bytes.get(cursor) == Some(&b'$') {
            let mut end = cursor + 1;
            while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
                end += 1;
            }
            if bytes.get(end) == Some(&b'}') {
                end += 1;
            }
            cursor = end;
            continue;
        }

        panic!("scan failed with no host fallback available at offset {cursor} in {bytes:?}");
    }
}
