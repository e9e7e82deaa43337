//! json-splice: JSON Patch (RFC 6902) over `serde_json::Value`.
//!
//! Provides decoding and validation of patch documents, an all-or-nothing
//! executor, a positional diff generator and the core of the command-line
//! tools. JSON Pointer support lives in `json-splice-pointer` and is
//! re-exported here as [`pointer`].

pub mod json_cli;
pub mod json_patch;
pub mod json_patch_diff;

pub use json_splice_pointer as pointer;

pub use json_patch::{apply_patch, InvalidPatch, Op, OpKind, Patch, PatchError};
pub use json_patch_diff::{diff, diff_patch};
