//! twtxt mentions core
//!
//! Converts mentions in twtxt status messages between the short form
//! typed by authors (`@nick`) and the expanded form published on the wire
//! (`@<nick url>`), and formats expanded mentions for display.
//!
//! Everything operates on a caller-supplied `SourceDirectory`. A small C ABI
//! is exported for host apps that embed the library.

pub mod config;
pub mod error;
pub mod mentions;
pub mod source;
pub mod style;

pub use error::{MentionsError, Result};
pub use mentions::{
    expand_mentions, extract_mentions, format_mentions, Mention, MentionExpander,
    MentionFormatter,
};
pub use source::{Source, SourceDirectory, SourceResolver};
pub use style::{AnsiStyler, PlainStyler, Style, Styler};

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Borrow a C string argument as UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives the call.
unsafe fn borrow_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(MentionsError::InvalidInput(format!("{} is null", what)));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| MentionsError::InvalidInput(format!("{} is not UTF-8: {}", what, e)))
}

fn into_c_string(text: &str) -> Result<*mut c_char> {
    CString::new(text)
        .map(CString::into_raw)
        .map_err(|e| MentionsError::InvalidInput(format!("output contains NUL: {}", e)))
}

fn ffi_result(result: Result<*mut c_char>) -> *mut c_char {
    match result {
        Ok(ptr) => ptr,
        Err(err) => {
            tracing::warn!("mentions FFI call failed: {}", err);
            std::ptr::null_mut()
        }
    }
}

/// Expand short mentions in `text` against a JSON directory snapshot.
///
/// Returns null on invalid input. Free the result with `twtxt_free_string`.
///
/// # Safety
/// Both pointers must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn twtxt_expand_mentions(
    directory_json: *const c_char,
    text: *const c_char,
    embed_names: bool,
) -> *mut c_char {
    ffi_result((|| {
        let directory = SourceDirectory::from_json(borrow_str(directory_json, "directory")?)?;
        let text = borrow_str(text, "text")?;
        let expanded = MentionExpander::new(&directory)
            .embed_names(embed_names)
            .expand(text);
        into_c_string(&expanded)
    })())
}

/// Format expanded mentions in `text` against a JSON directory snapshot.
///
/// `ansi` selects terminal escape codes; otherwise the output is unstyled.
/// Returns null on invalid input. Free the result with `twtxt_free_string`.
///
/// # Safety
/// Both pointers must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn twtxt_format_mentions(
    directory_json: *const c_char,
    text: *const c_char,
    embedded_names: bool,
    ansi: bool,
) -> *mut c_char {
    ffi_result((|| {
        let directory = SourceDirectory::from_json(borrow_str(directory_json, "directory")?)?;
        let text = borrow_str(text, "text")?;
        let styler: &dyn Styler = if ansi { &AnsiStyler } else { &PlainStyler };
        let formatted = MentionFormatter::new(&directory, styler)
            .embedded_names(embedded_names)
            .format(text);
        into_c_string(&formatted)
    })())
}

/// Free a string returned by this library.
///
/// # Safety
/// `ptr` must be null or a pointer previously returned by this library.
#[no_mangle]
pub unsafe extern "C" fn twtxt_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = CString::from_raw(ptr);
    }
}
