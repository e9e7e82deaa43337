//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in the RFC 6902 shape.

use serde_json::{json, Map, Value};

use crate::json_patch::types::{InvalidPatch, Op, OpKind, Patch, Pointer, PointerError};
use crate::json_patch::validate::{in_operation, validate_operation, validate_operations};

// ── Member helpers ────────────────────────────────────────────────────────

fn decode_pointer(
    map: &Map<String, Value>,
    kind: OpKind,
    member: &'static str,
) -> Result<Pointer, InvalidPatch> {
    let raw = map
        .get(member)
        .ok_or(InvalidPatch::MissingMember { op: kind, member })?;
    let s = raw.as_str().ok_or_else(|| InvalidPatch::InvalidPointer {
        member,
        source: PointerError::Invalid {
            pointer: raw.to_string(),
            reason: "must be a string",
        },
    })?;
    Pointer::parse(s).map_err(|source| InvalidPatch::InvalidPointer { member, source })
}

fn member_value(map: &Map<String, Value>, kind: OpKind) -> Result<Value, InvalidPatch> {
    map.get("value")
        .cloned()
        .ok_or(InvalidPatch::MissingMember {
            op: kind,
            member: "value",
        })
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Decode one operation object.
///
/// The object is validated against its kind's required members before any
/// member is decoded.
pub fn from_json(v: &Value) -> Result<Op, InvalidPatch> {
    let kind = validate_operation(v)?;
    let map = v.as_object().ok_or(InvalidPatch::NotAnObject)?;
    let path = decode_pointer(map, kind, "path")?;
    let op = match kind {
        OpKind::Add => Op::Add {
            path,
            value: member_value(map, kind)?,
        },
        OpKind::Remove => Op::Remove { path },
        OpKind::Replace => Op::Replace {
            path,
            value: member_value(map, kind)?,
        },
        OpKind::Move => Op::Move {
            from: decode_pointer(map, kind, "from")?,
            path,
        },
        OpKind::Copy => Op::Copy {
            from: decode_pointer(map, kind, "from")?,
            path,
        },
        OpKind::Test => Op::Test {
            path,
            value: member_value(map, kind)?,
        },
    };
    Ok(op)
}

/// Decode a whole patch document (a JSON array of operations).
///
/// The whole document is validated first, so a missing member in a late
/// operation is reported before any pointer is decoded. Nothing is returned
/// unless every operation decodes.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, InvalidPatch> {
    validate_operations(v)?;
    let arr = v.as_array().ok_or(InvalidPatch::NotAnArray)?;
    arr.iter()
        .enumerate()
        .map(|(index, op)| from_json(op).map_err(in_operation(index)))
        .collect()
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the JSON Patch format.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": path.to_string(),
            "value": value
        }),
        Op::Remove { path } => json!({
            "op": "remove",
            "path": path.to_string()
        }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": path.to_string(),
            "value": value
        }),
        Op::Move { from, path } => json!({
            "op": "move",
            "path": path.to_string(),
            "from": from.to_string()
        }),
        Op::Copy { from, path } => json!({
            "op": "copy",
            "path": path.to_string(),
            "from": from.to_string()
        }),
        Op::Test { path, value } => json!({
            "op": "test",
            "path": path.to_string(),
            "value": value
        }),
    }
}

/// Serialize a list of operations into a JSON Patch array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

impl Patch {
    /// Parse a patch document from its JSON form.
    pub fn from_json(v: &Value) -> Result<Self, InvalidPatch> {
        from_json_patch(v).map(Patch)
    }

    pub fn to_json(&self) -> Value {
        to_json_patch(&self.0)
    }
}
