//! Restartable external scanner for heredoc/nowdoc string literals.
//!
//! This crate implements only the state machine: the persistent
//! [`ScannerState`], the [`ScannerLexer`] contract it expects from its
//! host, and the `scan` entry point that drives both. It has no opinion
//! about how the host is wired up (a generated tree-sitter parser via
//! C ABI, or an ordinary Rust lexer driving it in-process) — see
//! `php-ffi` and `php-lexer` for the two hosts in this workspace.

mod error;
mod lexer;
mod scan;
mod state;
mod token;

pub use error::ScannerError;
pub use lexer::{ScannerLexer, EOF};
pub use scan::scan;
pub use state::{ScannerState, MAX_DELIMITER_LEN};
pub use token::{ExpectedTokens, HeredocToken, TOKEN_COUNT};
