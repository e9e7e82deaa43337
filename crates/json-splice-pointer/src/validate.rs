//! Syntax checks for JSON Pointer strings.

use crate::util::has_valid_escapes;
use crate::PointerError;

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// Returns [`PointerError::Invalid`] if:
/// - The pointer is non-empty but doesn't start with `/`
/// - A reference token contains a `~` that is not part of `~0` or `~1`
///
/// # Example
///
/// ```
/// use json_splice_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();
/// validate_json_pointer("/foo/bar").unwrap();
/// validate_json_pointer("foo").unwrap_err();
/// validate_json_pointer("/a~2b").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), PointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::invalid(pointer, "must be empty or start with '/'"));
    }
    if !pointer[1..].split('/').all(has_valid_escapes) {
        return Err(PointerError::invalid(
            pointer,
            "'~' must be followed by '0' or '1'",
        ));
    }
    Ok(())
}
