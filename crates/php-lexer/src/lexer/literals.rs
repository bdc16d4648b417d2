//! Literal token recognition for PHP lexer
//!
//! This module handles recognition of PHP literals:
//! - String literals (single and double quoted)
//! - Number literals (integers and floats)
//! - Variables ($variable)
//! - Heredoc/nowdoc string literals (`<<<IDENT ... IDENT;`)

use crate::error::{LexError, LexResult};
use crate::stream::CharStream;
use crate::token::{HeredocPart, Token};
use php_heredoc_scanner::{scan, ExpectedTokens, HeredocToken, ScannerLexer, ScannerState};

/// Literal token recognition functionality
pub struct LiteralHandler;

impl LiteralHandler {
    /// Tokenize a variable ($variable)
    pub fn tokenize_variable(stream: &mut CharStream) -> LexResult<Token> {
        stream.next(); // consume '$'
        
        let mut name = String::new();
        while let Some(&ch) = stream.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                name.push(stream.next().unwrap());
            } else {
                break;
            }
        }
        
        if name.is_empty() {
            let pos = stream.position();
            return Err(LexError::UnexpectedChar {
                char: '$',
                line: pos.line,
                column: pos.column,
            });
        }
        
        Ok(Token::Variable(name))
    }

    /// Tokenize a string literal
    pub fn tokenize_string(stream: &mut CharStream) -> LexResult<Token> {
        let quote_char = stream.peek().copied().unwrap();
        let content = stream.read_string(quote_char)?;
        Ok(Token::String(content))
    }

    /// Tokenize a number literal
    pub fn tokenize_number(stream: &mut CharStream) -> LexResult<Token> {
        let number = stream.read_number()?;
        Ok(Token::Number(number))
    }

    /// Tokenize an identifier
    pub fn tokenize_identifier(stream: &mut CharStream) -> String {
        stream.read_identifier()
    }

    /// Tokenize a heredoc or nowdoc string literal beginning with `<<<`.
    ///
    /// Drives `php_heredoc_scanner::scan` one call at a time, the same way
    /// a generated parser's external-scanner hook would, except that here
    /// there's no incremental host to rely on for the "failed scan leaves
    /// the cursor untouched" contract — so each call snapshots the stream
    /// first and restores it on failure, per the note on `ScannerState`.
    pub fn tokenize_heredoc(stream: &mut CharStream) -> LexResult<Token> {
        let start_pos = stream.position();
        stream.next(); // '<'
        stream.next(); // '<'
        stream.next(); // '<'

        let mut state = ScannerState::new();
        let mut parts: Vec<HeredocPart> = Vec::new();
        let mut is_nowdoc = false;

        loop {
            let expected = expected_tokens(&state);
            let before = stream.clone();
            let (ok, token, mark) = {
                let mut lexer = StreamLexer::new(stream);
                let ok = scan(&mut state, &mut lexer, &expected);
                (ok, lexer.result, lexer.mark)
            };

            if ok {
                let token = token.expect("scan succeeded without setting a result token");
                let committed = commit_to(stream, before, mark);

                match token {
                    HeredocToken::HeredocStart => {
                        is_nowdoc = state.is_nowdoc();
                    }
                    HeredocToken::HeredocBody
                    | HeredocToken::HeredocStartNewline
                    | HeredocToken::HeredocEndNewline => {
                        parts.push(HeredocPart::Literal(committed));
                    }
                    HeredocToken::EmbeddedOpeningBrace => {
                        parts.push(read_braced_expression(stream)?);
                    }
                    HeredocToken::HeredocEnd => {
                        return Ok(Token::Heredoc { parts, is_nowdoc });
                    }
                }
                continue;
            }

            *stream = before;
            if !state.is_open() {
                return Err(LexError::UnterminatedHeredoc {
                    line: start_pos.line,
                    column: start_pos.column,
                });
            }
            // The only other failure the scanner can report while a heredoc
            // is open is a bare `$identifier` at the very start of a body
            // scan; the host is expected to lex the variable itself. Any
            // other failure here (including plain EOF mid-body) isn't a
            // variable site, and is reported as an unterminated heredoc.
            if stream.is_at_end() || stream.peek_byte() != b'$' as u32 {
                return Err(LexError::UnterminatedHeredoc {
                    line: start_pos.line,
                    column: start_pos.column,
                });
            }
            parts.push(read_bare_variable(stream));
        }
    }
}

/// Bitset of which of the six token kinds the driver is willing to accept
/// next. This eager driver always wants whatever the scanner can produce;
/// `HEREDOC_START_NEWLINE`/`HEREDOC_END_NEWLINE` are never requested
/// directly, matching how a real host grammar asks at a body-or-close
/// position (it can't tell the two apart before the scanner runs).
fn expected_tokens(state: &ScannerState) -> ExpectedTokens {
    if state.is_open() {
        ExpectedTokens::from_array([false, false, true, false, true, true])
    } else {
        ExpectedTokens::from_array([true, false, false, false, false, false])
    }
}

/// Rebuilds `stream` from `before` by walking forward char-by-char to
/// `mark`, returning the committed text. `before` holds the (correct)
/// position bookkeeping from right before the scan; re-deriving through
/// `CharStream::next` keeps that bookkeeping correct without needing a
/// separate byte-level seek. Every `mark_end` call inside the scanner
/// lands on a single-byte ASCII boundary, so this walk is always between
/// valid char boundaries.
fn commit_to(stream: &mut CharStream, mut before: CharStream, mark: usize) -> String {
    let mut text = String::new();
    while before.byte_offset() < mark {
        match before.next() {
            Some(ch) => text.push(ch),
            None => break,
        }
    }
    *stream = before;
    text
}

/// Host fallback for a bare `$identifier` inside a heredoc body (§4.5):
/// the scanner refuses to claim it so the ordinary variable token handler
/// can consume it.
fn read_bare_variable(stream: &mut CharStream) -> HeredocPart {
    stream.next(); // '$'
    HeredocPart::Variable(stream.read_identifier())
}

/// Host fallback for `{$...}` interpolation (§4.5): the scanner commits
/// only the `{`, then the surrounding grammar lexes the embedded
/// expression itself. Parsing that expression is out of scope here, so
/// its raw source (up to the matching `}`) is kept verbatim.
fn read_braced_expression(stream: &mut CharStream) -> LexResult<HeredocPart> {
    let start_pos = stream.position();
    let mut depth = 1usize;
    let mut source = String::new();
    loop {
        match stream.next() {
            Some('{') => {
                depth += 1;
                source.push('{');
            }
            Some('}') => {
                depth -= 1;
                if depth == 0 {
                    return Ok(HeredocPart::Expression(source));
                }
                source.push('}');
            }
            Some(ch) => source.push(ch),
            None => {
                return Err(LexError::UnterminatedHeredoc {
                    line: start_pos.line,
                    column: start_pos.column,
                });
            }
        }
    }
}

/// Adapts [`CharStream`]'s byte-level cursor to the [`ScannerLexer`]
/// contract. The scanner treats bytes 0x80-0xFF as raw identifier bytes
/// rather than decoding them, so this bridges at the byte level rather
/// than going through `CharStream`'s `char`-based API.
struct StreamLexer<'s, 'a> {
    stream: &'s mut CharStream<'a>,
    mark: usize,
    result: Option<HeredocToken>,
}

impl<'s, 'a> StreamLexer<'s, 'a> {
    fn new(stream: &'s mut CharStream<'a>) -> Self {
        let mark = stream.byte_offset();
        Self { stream, mark, result: None }
    }
}

impl<'s, 'a> ScannerLexer for StreamLexer<'s, 'a> {
    fn peek(&mut self) -> u32 {
        self.stream.peek_byte()
    }

    fn advance(&mut self, _skip: bool) {
        self.stream.advance_byte();
    }

    fn mark_end(&mut self) {
        self.mark = self.stream.byte_offset();
    }

    fn set_result(&mut self, token: HeredocToken) {
        self.result = Some(token);
    }
}
