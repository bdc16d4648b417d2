//! The six token kinds the heredoc scanner can emit.

/// A token kind emitted by the scanner. Carries no attributes beyond the
/// kind itself; the byte range of the emitted token is the host's cursor
/// position at the time of the call to [`mark_end`](crate::lexer::ScannerLexer::mark_end)
/// combined with the token's start, which the host (not the scanner) owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeredocToken {
    /// The opener up to and including the first newline after the delimiter.
    HeredocStart,
    /// First body-region chunk when the body is empty between opener and close.
    HeredocStartNewline,
    /// A run of body bytes, ending before an interpolation site or newline.
    HeredocBody,
    /// The newline separating body from the closing delimiter line.
    HeredocEndNewline,
    /// The closing delimiter (and trailing `;` if present) plus its newline.
    HeredocEnd,
    /// The `{` of a `{$…}` interpolation, consumed by the host parser.
    EmbeddedOpeningBrace,
}

impl HeredocToken {
    /// Index into the `expected[]` / `valid_symbols[]` array, fixed by
    /// §6.3 of the scanner contract.
    pub const fn symbol_index(self) -> usize {
        match self {
            HeredocToken::HeredocStart => 0,
            HeredocToken::HeredocStartNewline => 1,
            HeredocToken::HeredocBody => 2,
            HeredocToken::HeredocEndNewline => 3,
            HeredocToken::HeredocEnd => 4,
            HeredocToken::EmbeddedOpeningBrace => 5,
        }
    }
}

/// The number of distinct token kinds (and the fixed length of the
/// `expected`/`valid_symbols` array).
pub const TOKEN_COUNT: usize = 6;

/// The `expected[]` Boolean vector the host passes into `scan`, indexed by
/// [`HeredocToken::symbol_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedTokens([bool; TOKEN_COUNT]);

impl ExpectedTokens {
    /// Build from a raw 6-element array in symbol order (§6.3).
    pub const fn from_array(bits: [bool; TOKEN_COUNT]) -> Self {
        Self(bits)
    }

    /// True if the host considers `token` valid at this position.
    pub fn contains(&self, token: HeredocToken) -> bool {
        self.0[token.symbol_index()]
    }

    /// True if any of the given tokens is valid at this position.
    pub fn contains_any(&self, tokens: &[HeredocToken]) -> bool {
        tokens.iter().any(|t| self.contains(*t))
    }
}
