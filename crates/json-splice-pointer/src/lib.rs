//! JSON Pointer (RFC 6901).
//!
//! This crate implements [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! over `serde_json::Value`: parsing a pointer string once into decoded
//! tokens, formatting it back, and resolving or replacing the node it names.
//!
//! # Example
//!
//! ```
//! use json_splice_pointer::{resolve, Pointer};
//!
//! let ptr = Pointer::parse("/foo/bar").unwrap();
//! assert_eq!(ptr.to_string(), "/foo/bar");
//!
//! let doc = serde_json::json!({"foo": {"bar": 42}});
//! assert_eq!(resolve(&doc, &ptr).unwrap(), &serde_json::json!(42));
//! ```

use thiserror::Error;

pub mod resolve;
pub mod types;
pub mod util;
pub mod validate;

pub use resolve::{replace, resolve, resolve_mut, resolve_parent, resolve_tokens, resolve_tokens_mut};
pub use types::{format_tokens, Pointer, Token};
pub use util::{escape_component, is_valid_index, unescape_component};
pub use validate::validate_json_pointer;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("NOT_FOUND: \"{pointer}\"")]
    NotFound { pointer: String },
    #[error("NO_PARENT")]
    NoParent,
    #[error("POINTER_INVALID: \"{pointer}\" {reason}")]
    Invalid { pointer: String, reason: &'static str },
}

impl PointerError {
    pub(crate) fn invalid(pointer: &str, reason: &'static str) -> Self {
        PointerError::Invalid {
            pointer: pointer.to_string(),
            reason,
        }
    }

    pub(crate) fn not_found(tokens: &[Token]) -> Self {
        PointerError::NotFound {
            pointer: format_tokens(tokens),
        }
    }
}
