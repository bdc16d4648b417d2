//! The scanner's persistent state (§3) and its serialization codec (§6.2).

use crate::error::ScannerError;

/// Closing delimiters longer than this are rejected by `scan_start`
/// (spec §3: "length ≤ 255").
pub const MAX_DELIMITER_LEN: usize = 255;

/// Number of fixed flag bytes at the head of a serialized buffer.
const FLAG_BYTES: usize = 3;

/// The only persistent object in the scanner: one per parse session.
///
/// Created once per parser instance, reset to all-empty between
/// top-level heredocs, freed at parser destruction. All mutation happens
/// inside `scan`; the host discards mutations from a scan that returns
/// failure (§9, "Failed-scan rollback"), so callers that can't rely on
/// that contract (like an eager, non-incremental driver) should snapshot
/// via `clone()` before a speculative scan and restore on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerState {
    /// Owned growable buffer holding the close-identifier. Empty iff no
    /// heredoc is open.
    delimiter: Vec<u8>,
    /// True if the opener was single-quoted; forces the body scan to
    /// ignore `{` and `$`.
    is_nowdoc: bool,
    /// HEREDOC_START_NEWLINE has been emitted. Once true, stays true
    /// until the heredoc fully closes.
    did_start: bool,
    /// The closing delimiter was seen in a previous scan but not yet
    /// emitted as HEREDOC_END. Implies `delimiter` non-empty.
    did_end: bool,
}

impl ScannerState {
    /// Construct an empty state (no heredoc open).
    pub fn new() -> Self {
        Self::default()
    }

    /// True between `HEREDOC_START` and `HEREDOC_END` (§3 invariant 4).
    pub fn is_open(&self) -> bool {
        !self.delimiter.is_empty()
    }

    /// The close-identifier captured at open time.
    pub fn delimiter(&self) -> &[u8] {
        &self.delimiter
    }

    pub fn is_nowdoc(&self) -> bool {
        self.is_nowdoc
    }

    pub fn did_start(&self) -> bool {
        self.did_start
    }

    pub fn did_end(&self) -> bool {
        self.did_end
    }

    pub(crate) fn set_is_nowdoc(&mut self, value: bool) {
        self.is_nowdoc = value;
    }

    pub(crate) fn set_did_start(&mut self, value: bool) {
        self.did_start = value;
    }

    pub(crate) fn set_did_end(&mut self, value: bool) {
        self.did_end = value;
    }

    pub(crate) fn delimiter_mut(&mut self) -> &mut Vec<u8> {
        &mut self.delimiter
    }

    /// Reset to all-empty: no heredoc open, as after a destroy/create or
    /// a `deserialize(len == 0)`.
    pub fn reset(&mut self) {
        self.delimiter.clear();
        self.is_nowdoc = false;
        self.did_start = false;
        self.did_end = false;
    }

    /// Write state into `out`, return the number of bytes written.
    ///
    /// Returns `0` (the "do not persist" sentinel, §6.1) if `out` is too
    /// small to hold the 3 flag bytes plus the delimiter. A successful
    /// write is always at least [`FLAG_BYTES`] bytes, so `0` is
    /// unambiguous: it never means "empty state, serialized".
    pub fn serialize(&self, out: &mut [u8]) -> usize {
        let needed = FLAG_BYTES + self.delimiter.len();
        if out.len() < needed {
            return 0;
        }
        out[0] = self.is_nowdoc as u8;
        out[1] = self.did_start as u8;
        out[2] = self.did_end as u8;
        out[FLAG_BYTES..needed].copy_from_slice(&self.delimiter);
        needed
    }

    /// Restore state from a buffer written by [`ScannerState::serialize`].
    ///
    /// `buf.len() == 0` resets to empty (§6.1: "`len == 0` ⇒ reset").
    pub fn deserialize(&mut self, buf: &[u8]) -> Result<(), ScannerError> {
        if buf.is_empty() {
            self.reset();
            return Ok(());
        }
        if buf.len() < FLAG_BYTES {
            return Err(ScannerError::BufferTooShort { len: buf.len() });
        }
        let delimiter_len = buf.len() - FLAG_BYTES;
        if delimiter_len > MAX_DELIMITER_LEN {
            return Err(ScannerError::DelimiterTooLong { len: delimiter_len });
        }
        self.is_nowdoc = buf[0] != 0;
        self.did_start = buf[1] != 0;
        self.did_end = buf[2] != 0;
        self.delimiter.clear();
        self.delimiter.extend_from_slice(&buf[FLAG_BYTES..]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_closed() {
        let state = ScannerState::new();
        assert!(!state.is_open());
        assert!(state.delimiter().is_empty());
    }

    #[test]
    fn serialize_round_trips() {
        let mut state = ScannerState::new();
        state.delimiter_mut().extend_from_slice(b"EOF");
        state.set_is_nowdoc(true);
        state.set_did_start(true);
        let mut buf = [0u8; 16];
        let len = state.serialize(&mut buf);
        assert_eq!(len, 6);

        let mut restored = ScannerState::new();
        restored.deserialize(&buf[..len]).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn serialize_returns_zero_sentinel_when_region_too_small() {
        let mut state = ScannerState::new();
        state.delimiter_mut().extend_from_slice(b"VERYLONGDELIMITER");
        let mut buf = [0u8; 4];
        assert_eq!(state.serialize(&mut buf), 0);
    }

    #[test]
    fn deserialize_empty_buffer_resets() {
        let mut state = ScannerState::new();
        state.delimiter_mut().extend_from_slice(b"EOF");
        state.deserialize(&[]).unwrap();
        assert!(!state.is_open());
    }

    #[test]
    fn deserialize_rejects_short_buffer() {
        let mut state = ScannerState::new();
        let err = state.deserialize(&[1, 0]).unwrap_err();
        assert_eq!(err, ScannerError::BufferTooShort { len: 2 });
    }
}
