//! Core logic behind the command-line tools.
//!
//! - `json-patch`: apply a JSON Patch to a document
//! - `json-pointer`: look up a JSON Pointer in a document
//! - `json-diff`: generate the JSON Patch between two documents
//!
//! Every entry point takes JSON text and returns pretty-printed JSON text.

use std::io::Read;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::json_patch::{apply_patch, from_json_patch, to_json_patch, InvalidPatch, PatchError};
use crate::json_patch_diff::diff;
use json_splice_pointer::{resolve, Pointer, PointerError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid patch: {0}")]
    InvalidPatch(#[from] InvalidPatch),
    #[error("patch failed: {0}")]
    Patch(#[from] PatchError),
    #[error(transparent)]
    Pointer(#[from] PointerError),
}

// ── Logging ───────────────────────────────────────────────────────────────

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `warn` when `RUST_LOG` is unset or unparsable. A second
/// call is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// ── Input ─────────────────────────────────────────────────────────────────

/// Read a document from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Apply a JSON Patch (RFC 6902) to a document.
///
/// `doc_json`: the document as a JSON string.
/// `patch_json`: the patch operations as a JSON array string.
///
/// The whole patch is validated before any operation runs.
pub fn apply_json_patch(doc_json: &str, patch_json: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let ops_raw: Value = serde_json::from_str(patch_json)?;
    let ops = from_json_patch(&ops_raw)?;
    let result = apply_patch(&doc, &ops)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

// ── json-pointer ──────────────────────────────────────────────────────────

/// Look up a JSON Pointer (RFC 6901) in a document.
///
/// Returns the found value as a pretty-printed JSON string.
pub fn lookup_pointer(doc_json: &str, pointer: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let pointer = Pointer::parse(pointer)?;
    let found = resolve(&doc, &pointer)?;
    Ok(serde_json::to_string_pretty(found)?)
}

// ── json-diff ─────────────────────────────────────────────────────────────

/// Compute the patch that turns `src_json` into `dst_json`.
///
/// Returns the patch as a pretty-printed JSON array.
pub fn diff_json(src_json: &str, dst_json: &str) -> Result<String, CliError> {
    let src: Value = serde_json::from_str(src_json)?;
    let dst: Value = serde_json::from_str(dst_json)?;
    let ops = diff(&src, &dst);
    Ok(serde_json::to_string_pretty(&to_json_patch(&ops))?)
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_input_missing_file_is_io_error() {
        let err = read_input(Some(Path::new("/nonexistent/doc.json"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    // ── json-patch ─────────────────────────────────────────────────────────

    #[test]
    fn patch_add_key() {
        let doc   = r#"{"a":1}"#;
        let patch = r#"[{"op":"add","path":"/b","value":2}]"#;
        let out   = apply_json_patch(doc, patch).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v, serde_json::json!({"a": 1, "b": 2}));
    }

    #[test]
    fn patch_rejects_malformed_patch_before_applying() {
        let doc   = r#"{"a":1}"#;
        let patch = r#"[{"op":"remove","path":"/a"},{"op":"add","path":"/b"}]"#;
        let err   = apply_json_patch(doc, patch).unwrap_err();
        assert!(matches!(err, CliError::InvalidPatch(InvalidPatch::Operation { index: 1, .. })));
    }

    #[test]
    fn patch_failure_is_reported() {
        let err = apply_json_patch(r#"{"a":1}"#, r#"[{"op":"test","path":"/a","value":2}]"#)
            .unwrap_err();
        assert!(matches!(err, CliError::Patch(PatchError::TestFailed { .. })));
        assert!(err.to_string().starts_with("patch failed: TEST"));
    }

    #[test]
    fn patch_bad_json() {
        assert!(matches!(apply_json_patch("{", "[]"), Err(CliError::Json(_))));
    }

    // ── json-pointer ───────────────────────────────────────────────────────

    #[test]
    fn pointer_root() {
        let out = lookup_pointer(r#"{"a":1}"#, "").unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["a"], 1);
    }

    #[test]
    fn pointer_nested() {
        let out = lookup_pointer(r#"{"foo":{"bar":42}}"#, "/foo/bar").unwrap();
        assert_eq!(out.trim(), "42");
    }

    #[test]
    fn pointer_array_element() {
        let out = lookup_pointer(r#"{"arr":[10,20,30]}"#, "/arr/1").unwrap();
        assert_eq!(out.trim(), "20");
    }

    #[test]
    fn pointer_not_found() {
        let err = lookup_pointer(r#"{"a":1}"#, "/z").unwrap_err();
        assert!(err.to_string().contains("NOT_FOUND"));
    }

    #[test]
    fn pointer_invalid() {
        let err = lookup_pointer(r#"{"a":1}"#, "a").unwrap_err();
        assert!(matches!(err, CliError::Pointer(PointerError::Invalid { .. })));
    }

    // ── json-diff ──────────────────────────────────────────────────────────

    #[test]
    fn diff_outputs_patch_array() {
        let out = diff_json(r#"{"a":1,"b":[1]}"#, r#"{"a":2,"b":[1,2]}"#).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            v,
            serde_json::json!([
                {"op": "replace", "path": "/a", "value": 2},
                {"op": "add", "path": "/b/1", "value": 2}
            ])
        );
    }

    #[test]
    fn diff_on_numeric_object_keys_does_not_reapply() {
        let src = r#"{"2024":{"n":1}}"#;
        let dst = r#"{"2024":{"n":2}}"#;
        let patch = diff_json(src, dst).unwrap();
        let v: Value = serde_json::from_str(&patch).unwrap();
        assert_eq!(v[0]["path"], "/2024/n");
        let err = apply_json_patch(src, &patch).unwrap_err();
        assert!(matches!(err, CliError::Patch(PatchError::TargetNotFound(_))));
    }

    #[test]
    fn diff_of_equal_documents_is_empty_array() {
        let out = diff_json("[1,2]", "[1,2]").unwrap();
        assert_eq!(out.trim(), "[]");
    }
}
