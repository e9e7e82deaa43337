//! JSON Patch implementation (RFC 6902).
//!
//! # Operations
//!
//! All standard RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! # Example
//!
//! ```
//! use json_splice::json_patch::Patch;
//! use serde_json::json;
//!
//! let patch = Patch::from_json(&json!([
//!     {"op": "test", "path": "/a/b", "value": 1},
//!     {"op": "replace", "path": "/a/b", "value": 2}
//! ]))
//! .unwrap();
//!
//! let doc = json!({"a": {"b": 1}});
//! assert_eq!(patch.apply(&doc).unwrap(), json!({"a": {"b": 2}}));
//! assert_eq!(doc, json!({"a": {"b": 1}}));
//! ```

pub mod apply;
pub mod codec;
pub mod types;
pub mod validate;

pub use apply::{apply_op, apply_ops, apply_patch};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{
    ApplyPatchOptions, InvalidPatch, Op, OpKind, OpResult, Patch, PatchError, PatchResult,
    Pointer, PointerError,
};
pub use validate::{validate_operation, validate_operations};
