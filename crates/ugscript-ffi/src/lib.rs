// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// ugscript-ffi: C-compatible FFI layer for Converter.
//
// Memory management rules:
// - Opaque `Converter` pointer: created by `ugscript_new`, freed by `ugscript_free`.
// - Returned strings: caller must free with `ugscript_free_str`.
// - Returned string arrays: caller must free with `ugscript_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings.
// - Script identifiers are the codes `UAS`, `ULS`, `UYS`, `UCS`, `CTS`,
//   `UZBEK`, matched case-insensitively.

use std::ffi::{CStr, CString, c_char};
use std::ptr;

use ugscript_core::ConversionOptions;
use ugscript_engine::{ConversionPath, Converter};

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a converter over the built-in tables.
///
/// The handle is immutable and may be shared between threads.
#[unsafe(no_mangle)]
pub extern "C" fn ugscript_new() -> *mut Converter {
    Box::into_raw(Box::new(Converter::new()))
}

/// Free a converter created by `ugscript_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ugscript_free(handle: *mut Converter) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Conversion ──────────────────────────────────────────────────

/// Convert `text` from the `source` script to the `target` script.
///
/// `apostrophe` non-zero selects the apostrophe regime.
///
/// Returns a heap-allocated string that the caller must free with
/// `ugscript_free_str`, or NULL on failure. On failure, if `error_out` is
/// non-NULL, it receives a heap-allocated error string that the caller must
/// also free with `ugscript_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ugscript_convert(
    handle: *const Converter,
    text: *const c_char,
    source: *const c_char,
    target: *const c_char,
    apostrophe: bool,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(converter) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    let (Some(text), Some(source), Some(target)) =
        (cstr_to_str(text), cstr_to_str(source), cstr_to_str(target))
    else {
        set_error(error_out, "text, source or target is null or not UTF-8");
        return ptr::null_mut();
    };

    match converter.convert_codes(text, source, target, ConversionOptions::new(apostrophe)) {
        Ok(out) => str_to_c(&out),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// List the supported conversions as `"SRC->TGT"` strings.
///
/// Returns a NULL-terminated array. Caller must free with
/// `ugscript_free_str_array`.
#[unsafe(no_mangle)]
pub extern "C" fn ugscript_supported_pairs() -> *mut *mut c_char {
    let pairs: Vec<String> = ConversionPath::supported_pairs()
        .map(|(source, target)| format!("{source}->{target}"))
        .collect();
    strings_to_c_array(&pairs)
}

/// Free a heap-allocated C string returned by ugscript functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ugscript_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ugscript_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut());
    // Exact capacity so the array can be rebuilt from its length alone.
    let mut ptrs = ptrs.into_boxed_slice();
    let ptr = ptrs.as_mut_ptr();
    std::mem::forget(ptrs);
    ptr
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
