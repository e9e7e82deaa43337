//! JSON Patch apply logic.

use json_splice_pointer::{resolve, resolve_mut, resolve_tokens_mut, Token};
use serde_json::Value;
use tracing::debug;

use super::types::{
    ApplyPatchOptions, Op, OpResult, Patch, PatchError, PatchResult, Pointer, PointerError,
};

fn not_found(path: &Pointer) -> PatchError {
    PatchError::TargetNotFound(PointerError::NotFound {
        pointer: path.to_string(),
    })
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Value, path: &Pointer, value: Value) -> Result<Option<Value>, PatchError> {
    let Some((parent, last)) = path.split_last() else {
        return Ok(Some(std::mem::replace(doc, value)));
    };
    match (resolve_tokens_mut(doc, parent)?, last) {
        (Value::Array(arr), Token::Index(idx)) => {
            if *idx > arr.len() {
                return Err(PatchError::IndexOutOfRange {
                    path: path.clone(),
                    index: *idx,
                    len: arr.len(),
                });
            }
            arr.insert(*idx, value);
            Ok(None)
        }
        (Value::Array(arr), Token::Append) => {
            arr.push(value);
            Ok(None)
        }
        (Value::Object(map), Token::Key(key)) => Ok(map.insert(key.clone(), value)),
        _ => Err(not_found(path)),
    }
}

fn remove_at(doc: &mut Value, path: &Pointer) -> Result<Value, PatchError> {
    let Some((parent, last)) = path.split_last() else {
        return Err(PatchError::TargetNotFound(PointerError::NoParent));
    };
    match (resolve_tokens_mut(doc, parent)?, last) {
        (Value::Array(arr), Token::Index(idx)) => {
            if *idx >= arr.len() {
                return Err(PatchError::IndexOutOfRange {
                    path: path.clone(),
                    index: *idx,
                    len: arr.len(),
                });
            }
            Ok(arr.remove(*idx))
        }
        (Value::Array(arr), Token::Append) => Err(PatchError::IndexOutOfRange {
            path: path.clone(),
            index: arr.len(),
            len: arr.len(),
        }),
        (Value::Object(map), Token::Key(key)) => {
            map.shift_remove(key).ok_or_else(|| not_found(path))
        }
        _ => Err(not_found(path)),
    }
}

fn apply_replace(doc: &mut Value, path: &Pointer, value: Value) -> Result<Option<Value>, PatchError> {
    let target = resolve_mut(doc, path)?;
    Ok(Some(std::mem::replace(target, value)))
}

fn apply_copy(doc: &mut Value, path: &Pointer, from: &Pointer) -> Result<Option<Value>, PatchError> {
    let src = resolve(doc, from)?.clone();
    apply_add(doc, path, src)
}

fn apply_move(doc: &mut Value, path: &Pointer, from: &Pointer) -> Result<Option<Value>, PatchError> {
    resolve(doc, from)?;
    if from.is_prefix_of(path) {
        return Err(PatchError::MoveIntoDescendant {
            from: from.clone(),
            path: path.clone(),
        });
    }
    if from == path {
        return Ok(None);
    }
    let value = remove_at(doc, from)?;
    apply_add(doc, path, value)
}

fn apply_test(doc: &Value, path: &Pointer, value: &Value) -> Result<(), PatchError> {
    let actual = resolve(doc, path)?;
    if actual != value {
        return Err(PatchError::TestFailed {
            path: path.clone(),
            expected: value.clone(),
            actual: actual.clone(),
        });
    }
    Ok(())
}

// ── Main apply functions ──────────────────────────────────────────────────

/// Apply a single operation to the document (in-place mutation).
///
/// Returns the value the operation displaced, if any. On error the document
/// may be partially edited; callers that need the input intact must work on a
/// copy, as [`Op::apply`] and [`apply_patch`] do.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<Option<Value>, PatchError> {
    debug!(op = op.op_name(), path = %op.path(), "applying patch operation");
    match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone()),
        Op::Remove { path } => remove_at(doc, path).map(Some),
        Op::Replace { path, value } => apply_replace(doc, path, value.clone()),
        Op::Move { from, path } => apply_move(doc, path, from),
        Op::Copy { from, path } => apply_copy(doc, path, from),
        Op::Test { path, value } => {
            apply_test(doc, path, value)?;
            Ok(None)
        }
    }
}

/// `apply_op` for the `index`-th operation of a sequence, logging failures.
fn apply_at(doc: &mut Value, index: usize, op: &Op) -> Result<Option<Value>, PatchError> {
    apply_op(doc, op).map_err(|err| {
        debug!(index, op = op.op_name(), error = %err, "patch operation failed");
        err
    })
}

/// Apply a sequence of operations to a copy of `doc`.
///
/// The first failing operation aborts the sequence and its error is
/// returned; the caller's document is never touched.
pub fn apply_patch(doc: &Value, ops: &[Op]) -> Result<Value, PatchError> {
    let mut working = doc.clone();
    for (index, op) in ops.iter().enumerate() {
        apply_at(&mut working, index, op)?;
    }
    debug!(ops = ops.len(), "patch applied");
    Ok(working)
}

/// Apply a sequence of operations to an owned document.
///
/// When `mutate: true`, ops edit `doc` in place and no per-op record is kept.
/// When `mutate: false`, each op runs on a fresh clone of the previous
/// result and `PatchResult::res` records the document after every op
/// together with the value it displaced.
pub fn apply_ops(
    doc: Value,
    ops: &[Op],
    options: &ApplyPatchOptions,
) -> Result<PatchResult, PatchError> {
    if options.mutate {
        let mut working = doc;
        for (index, op) in ops.iter().enumerate() {
            apply_at(&mut working, index, op)?;
        }
        return Ok(PatchResult {
            doc: working,
            res: Vec::new(),
        });
    }
    let mut current = doc;
    let mut res = Vec::with_capacity(ops.len());
    for (index, op) in ops.iter().enumerate() {
        let mut next = current.clone();
        let old = apply_at(&mut next, index, op)?;
        res.push(OpResult {
            doc: next.clone(),
            old,
        });
        current = next;
    }
    Ok(PatchResult { doc: current, res })
}

impl Op {
    /// Apply this operation to a copy of `doc` and return the copy.
    pub fn apply(&self, doc: &Value) -> Result<Value, PatchError> {
        let mut out = doc.clone();
        apply_op(&mut out, self)?;
        Ok(out)
    }
}

impl Patch {
    /// Apply every operation in order to a copy of `doc`.
    pub fn apply(&self, doc: &Value) -> Result<Value, PatchError> {
        apply_patch(doc, &self.0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
