//! Property-based tests, mirroring the proptest style used for the
//! wider lexer pipeline this crate was pulled out of.

mod support;

use php_heredoc_scanner::{HeredocToken, ScannerState};
use proptest::prelude::*;

fn ident_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,30}"
}

proptest! {
    /// Any delimiter/flag combination that fits the 255-byte limit must
    /// survive a serialize/deserialize round trip unchanged (§6.2). Built
    /// from raw bytes rather than the state's (crate-private) setters,
    /// since this test only has access to the public API.
    #[test]
    fn state_round_trips_through_serialization(
        delimiter in prop::collection::vec(any::<u8>(), 0..=255),
        is_nowdoc in any::<bool>(),
        did_start in any::<bool>(),
        did_end in any::<bool>(),
    ) {
        let mut original = Vec::with_capacity(3 + delimiter.len());
        original.push(is_nowdoc as u8);
        original.push(did_start as u8);
        original.push(did_end as u8);
        original.extend_from_slice(&delimiter);

        let mut state = ScannerState::new();
        state.deserialize(&original).unwrap();

        let mut buf = vec![0u8; original.len()];
        let written = state.serialize(&mut buf);
        prop_assert_eq!(written, original.len());
        prop_assert_eq!(buf, original);
    }

    /// A nowdoc body never produces interpolation tokens, no matter what
    /// `{`/`$` noise it contains, as long as it avoids the literal
    /// delimiter line and backslash escapes (§4.4 invariant: nowdoc is inert).
    #[test]
    fn nowdoc_body_never_interpolates(
        delimiter in ident_strategy(),
        filler in "[A-Za-z0-9 {}$_]{0,40}",
    ) {
        prop_assume!(!filler.contains(&delimiter));
        let input = format!("'{delimiter}'\n{filler}\n{delimiter};\n");
        let tokens = support::lex_heredoc(&input);
        for emitted in &tokens {
            prop_assert_ne!(emitted.token, HeredocToken::EmbeddedOpeningBrace);
        }
    }
}
