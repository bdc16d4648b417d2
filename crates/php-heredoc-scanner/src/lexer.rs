//! The lexer I/O contract the scanner consumes (§4.1).
//!
//! The scanner never touches a byte buffer directly; it only knows these
//! three primitives, which the host lexer (an external tree-sitter parser,
//! or the bridge in `php-lexer`) implements over its own cursor.

use crate::token::HeredocToken;

/// End-of-input sentinel returned by [`ScannerLexer::peek`].
pub const EOF: u32 = 0;

/// Primitives the scanner needs from its host.
///
/// `peek`/`advance`/`mark_end` let the scanner look ahead past the
/// logical end of a token to decide what to emit, without committing
/// those lookahead bytes to the token unless `mark_end` is called again.
/// The cursor and the token's end are two different quantities; mixing
/// them up is the classic external-scanner bug this trait exists to avoid.
pub trait ScannerLexer {
    /// Current lookahead code point, or [`EOF`] at end of input.
    fn peek(&mut self) -> u32;

    /// Consume one code point. `skip = true` marks it as whitespace
    /// outside any token: it will not belong to the next emitted token.
    fn advance(&mut self, skip: bool);

    /// Record the current cursor position as the end of the token
    /// currently being matched.
    fn mark_end(&mut self);

    /// Record the token kind to emit on a successful scan.
    fn set_result(&mut self, token: HeredocToken);
}
