//! JSON Patch diff: generate a JSON Patch from two document values.
//!
//! The walk is positional. Arrays are compared index by index with no
//! alignment, and objects are visited through the keys of the source only,
//! so a key that exists only in the target never appears in the output.
//! Applying the result reproduces the target when both documents share
//! their shape or differ only in leaf values.
//!
//! Object keys are emitted verbatim as path tokens. A key that looks like an
//! array index (`"0"`, `"2024"`) or is `"-"` serialises to a pointer that
//! parses back as an index token, and an index token only addresses arrays.
//! Such a patch works in memory, but once written out as JSON it fails to
//! apply: `{"2024": {"n": 1}}` against `{"2024": {"n": 2}}` yields
//! `/2024/n`, which no longer resolves.

use json_splice_pointer::Token;
use serde_json::{Map, Value};
use tracing::trace;

use crate::json_patch::types::{Op, Patch, Pointer};

// ── Public API ────────────────────────────────────────────────────────────

/// Generate the list of operations that transforms `src` into `dst`.
pub fn diff(src: &Value, dst: &Value) -> Vec<Op> {
    let mut ops = Vec::new();
    diff_at_path(&mut ops, &mut Pointer::root(), Some(src), Some(dst));
    ops
}

/// Same as [`diff`], wrapped in a [`Patch`].
pub fn diff_patch(src: &Value, dst: &Value) -> Patch {
    Patch(diff(src, dst))
}

// ── Core recursive differ ─────────────────────────────────────────────────

fn emit(ops: &mut Vec<Op>, op: Op) {
    trace!(op = op.op_name(), path = %op.path(), "diff emitted operation");
    ops.push(op);
}

fn diff_at_path(ops: &mut Vec<Op>, path: &mut Pointer, src: Option<&Value>, dst: Option<&Value>) {
    match (src, dst) {
        (None, None) => {}
        (None, Some(dst)) => emit(
            ops,
            Op::Add {
                path: path.clone(),
                value: dst.clone(),
            },
        ),
        (Some(_), None) => emit(ops, Op::Remove { path: path.clone() }),
        (Some(src), Some(dst)) if src == dst => {}
        (Some(Value::Array(s)), Some(Value::Array(d))) => diff_arr(ops, path, s, d),
        (Some(Value::Object(s)), Some(Value::Object(d))) => diff_obj(ops, path, s, d),
        (Some(_), Some(dst)) => emit(
            ops,
            Op::Replace {
                path: path.clone(),
                value: dst.clone(),
            },
        ),
    }
}

fn diff_arr(ops: &mut Vec<Op>, path: &mut Pointer, src: &[Value], dst: &[Value]) {
    for i in 0..src.len().max(dst.len()) {
        path.push(Token::Index(i));
        diff_at_path(ops, path, src.get(i), dst.get(i));
        path.pop();
    }
}

fn diff_obj(
    ops: &mut Vec<Op>,
    path: &mut Pointer,
    src: &Map<String, Value>,
    dst: &Map<String, Value>,
) {
    for (key, val) in src {
        path.push(Token::key(key.as_str()));
        diff_at_path(ops, path, Some(val), dst.get(key));
        path.pop();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
