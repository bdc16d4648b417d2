//! Error type for the scanner's non-scan operations.
//!
//! `scan` itself has exactly one failure mode (spec §7: "no matching
//! token"), signaled by a plain `bool`/`Option`, not this type. This enum
//! only covers `deserialize`, which can be handed a buffer that didn't
//! come from a matching `serialize` call (a stale cache entry, a
//! corrupted snapshot) and needs to say why it refused it.
use thiserror::Error;

/// Errors surfaced by state (de)serialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScannerError {
    /// `deserialize` was given a non-empty buffer shorter than the 3
    /// fixed flag bytes it must start with.
    #[error("heredoc scanner state buffer too short: got {len} bytes, need at least 3")]
    BufferTooShort {
        /// Length of the buffer that was handed in.
        len: usize,
    },

    /// The delimiter recorded in a serialized buffer exceeds the 255-byte
    /// limit the scanner enforces on accumulation (§3).
    #[error("heredoc delimiter in serialized state exceeds 255 bytes: got {len}")]
    DelimiterTooLong {
        /// Length of the delimiter found in the buffer.
        len: usize,
    },
}
