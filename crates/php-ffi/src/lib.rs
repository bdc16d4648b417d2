//! C-ABI surface exposing [`php_heredoc_scanner`] as a tree-sitter
//! external scanner.
//!
//! This crate owns no logic of its own: it only adapts between the
//! `TSLexer` calling convention a generated parser links against and the
//! [`ScannerLexer`](php_heredoc_scanner::ScannerLexer) trait the scanner
//! core is written against. Everything here is `unsafe` because the
//! contract (non-null pointers, `valid_symbols` pointing at
//! [`php_heredoc_scanner::TOKEN_COUNT`] bools, a `buffer` at least
//! [`SERIALIZATION_BUFFER_SIZE`] bytes) is enforced by the C caller, not
//! by the type system.

use std::ffi::c_void;
use std::os::raw::c_char;
use std::slice;

use php_heredoc_scanner::{
    scan, ExpectedTokens, HeredocToken, ScannerLexer, ScannerState, TOKEN_COUNT,
};

/// The fixed-size scratch region the host provides to `serialize` and
/// `deserialize` (spec §5: "typically 1024 bytes").
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Mirrors `TSLexer` from `tree_sitter/parser.h`. Field order and types
/// must match the host's generated parser exactly; this is the one
/// struct in the workspace whose shape is dictated entirely by an
/// external C header rather than by our own design.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
}

/// Adapts a raw `*mut TSLexer` to [`ScannerLexer`].
struct HostLexer {
    raw: *mut TSLexer,
}

impl ScannerLexer for HostLexer {
    fn peek(&mut self) -> u32 {
        // `lookahead` is `-1` at EOF in the real ABI; our scanner uses 0.
        let code = unsafe { (*self.raw).lookahead };
        if code < 0 {
            0
        } else {
            code as u32
        }
    }

    fn advance(&mut self, skip: bool) {
        unsafe {
            let advance_fn = (*self.raw).advance;
            advance_fn(self.raw, skip);
        }
    }

    fn mark_end(&mut self) {
        unsafe {
            let mark_end_fn = (*self.raw).mark_end;
            mark_end_fn(self.raw);
        }
    }

    fn set_result(&mut self, token: HeredocToken) {
        unsafe {
            (*self.raw).result_symbol = token.symbol_index() as u16;
        }
    }
}

unsafe fn state_from_payload<'a>(payload: *mut c_void) -> &'a mut ScannerState {
    &mut *(payload as *mut ScannerState)
}

/// Allocate fresh zeroed state with an empty delimiter (spec §6.1).
///
/// # Safety
/// The returned pointer must be passed to exactly one of
/// [`hack_external_scanner_destroy`] and never used afterward.
#[no_mangle]
pub unsafe extern "C" fn hack_external_scanner_create() -> *mut c_void {
    log::trace!("heredoc scanner: create");
    Box::into_raw(Box::new(ScannerState::new())) as *mut c_void
}

/// Release the state allocated by [`hack_external_scanner_create`].
///
/// # Safety
/// `payload` must be a pointer returned by `hack_external_scanner_create`
/// that has not already been destroyed.
#[no_mangle]
pub unsafe extern "C" fn hack_external_scanner_destroy(payload: *mut c_void) {
    log::trace!("heredoc scanner: destroy");
    drop(Box::from_raw(payload as *mut ScannerState));
}

/// Perform one scan; on success the result token is recorded via
/// `lexer.result_symbol`.
///
/// # Safety
/// `payload` must come from `create`; `lexer` must be a valid `TSLexer`
/// with all function pointers initialized by the host; `valid_symbols`
/// must point to at least [`TOKEN_COUNT`] readable `bool`s.
#[no_mangle]
pub unsafe extern "C" fn hack_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    let state = state_from_payload(payload);
    let symbols = slice::from_raw_parts(valid_symbols, TOKEN_COUNT);
    let mut bits = [false; TOKEN_COUNT];
    bits.copy_from_slice(symbols);
    let expected = ExpectedTokens::from_array(bits);

    let mut host = HostLexer { raw: lexer };
    let ok = scan(state, &mut host, &expected);
    log::trace!("heredoc scanner: scan -> {ok}");
    ok
}

/// Write state to `buffer`, return the number of bytes written; `0` means
/// "do not persist" (spec §6.1).
///
/// # Safety
/// `payload` must come from `create`; `buffer` must be writable for at
/// least [`SERIALIZATION_BUFFER_SIZE`] bytes.
#[no_mangle]
pub unsafe extern "C" fn hack_external_scanner_serialize(payload: *mut c_void, buffer: *mut c_char) -> u32 {
    let state = state_from_payload(payload);
    let out = slice::from_raw_parts_mut(buffer as *mut u8, SERIALIZATION_BUFFER_SIZE);
    state.serialize(out) as u32
}

/// Restore state from `buffer`. `length == 0` resets to empty
/// (spec §6.1/§6.2).
///
/// # Safety
/// `payload` must come from `create`; `buffer` must be readable for at
/// least `length` bytes, and must either be empty or have been produced
/// by a prior call to [`hack_external_scanner_serialize`].
#[no_mangle]
pub unsafe extern "C" fn hack_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: u32,
) {
    let state = state_from_payload(payload);
    let bytes = if length == 0 {
        &[][..]
    } else {
        slice::from_raw_parts(buffer as *const u8, length as usize)
    };
    if let Err(err) = state.deserialize(bytes) {
        log::warn!("heredoc scanner: rejected serialized state ({err}), resetting");
        state.reset();
    }
}
