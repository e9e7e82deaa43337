//! JSON Patch operation validator.
//!
//! Validates raw operations (as `serde_json::Value`) against the
//! required-member table of their kind. This works on the raw JSON
//! representation before decoding, so callers can reject untrusted input
//! before anything is applied.

use serde_json::Value;

use super::types::{InvalidPatch, OpKind};

/// Validate a patch document: a JSON array of operations.
///
/// Errors carry the index of the failing operation.
pub fn validate_operations(ops: &Value) -> Result<(), InvalidPatch> {
    let arr = ops.as_array().ok_or(InvalidPatch::NotAnArray)?;
    for (index, op) in arr.iter().enumerate() {
        validate_operation(op).map_err(in_operation(index))?;
    }
    Ok(())
}

/// Attach the position of the failing operation to an error.
pub(crate) fn in_operation(index: usize) -> impl Fn(InvalidPatch) -> InvalidPatch {
    move |source| InvalidPatch::Operation {
        index,
        source: Box::new(source),
    }
}

/// Validate a single operation object and return its kind.
///
/// A member counts as present when its key exists; `null` is a value.
/// Members outside the kind's required set are ignored.
pub fn validate_operation(op: &Value) -> Result<OpKind, InvalidPatch> {
    let map = op.as_object().ok_or(InvalidPatch::NotAnObject)?;
    let kind = match map.get("op") {
        None => return Err(InvalidPatch::MissingOp),
        Some(Value::String(name)) => name.parse::<OpKind>()?,
        Some(other) => return Err(InvalidPatch::UnknownOp(other.to_string())),
    };
    if let Some(member) = kind
        .required_members()
        .iter()
        .copied()
        .find(|member| !map.contains_key(*member))
    {
        return Err(InvalidPatch::MissingMember { op: kind, member });
    }
    Ok(kind)
}
