//! Core types for the JSON Patch module: operation kinds, the `Op` enum,
//! the patch document and the error taxonomy.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

pub use json_splice_pointer::{Pointer, PointerError};

// ── Errors ────────────────────────────────────────────────────────────────

/// Malformed patch input, detected before anything is applied.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidPatch {
    #[error("patch document must be a JSON array")]
    NotAnArray,
    #[error("operation must be a JSON object")]
    NotAnObject,
    #[error("operation has no \"op\" member")]
    MissingOp,
    #[error("unknown operation {0}")]
    UnknownOp(String),
    #[error("\"{op}\" operation is missing required member \"{member}\"")]
    MissingMember { op: OpKind, member: &'static str },
    #[error("member \"{member}\" is not a valid JSON pointer: {source}")]
    InvalidPointer {
        member: &'static str,
        #[source]
        source: PointerError,
    },
    #[error("error in operation [index = {index}]: {source}")]
    Operation {
        index: usize,
        #[source]
        source: Box<InvalidPatch>,
    },
}

/// Failure while applying a well-formed operation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    #[error("TARGET_NOT_FOUND: {0}")]
    TargetNotFound(#[from] PointerError),
    #[error("INDEX_OUT_OF_RANGE: index {index} at \"{path}\" exceeds array length {len}")]
    IndexOutOfRange {
        path: Pointer,
        index: usize,
        len: usize,
    },
    #[error("TEST: value at \"{path}\" is {actual}, expected {expected}")]
    TestFailed {
        path: Pointer,
        expected: Value,
        actual: Value,
    },
    #[error("MOVE_INTO_DESCENDANT: cannot move \"{from}\" into \"{path}\"")]
    MoveIntoDescendant { from: Pointer, path: Pointer },
}

// ── Operation kinds ───────────────────────────────────────────────────────

const ADD_MEMBERS: &[&str] = &["op", "path", "value"];
const REMOVE_MEMBERS: &[&str] = &["op", "path"];
const REPLACE_MEMBERS: &[&str] = &["op", "path", "value"];
const MOVE_MEMBERS: &[&str] = &["op", "path", "from"];
const COPY_MEMBERS: &[&str] = &["op", "path", "from"];
const TEST_MEMBERS: &[&str] = &["op", "path", "value"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl OpKind {
    pub const ALL: [OpKind; 6] = [
        OpKind::Add,
        OpKind::Remove,
        OpKind::Replace,
        OpKind::Move,
        OpKind::Copy,
        OpKind::Test,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Remove => "remove",
            OpKind::Replace => "replace",
            OpKind::Move => "move",
            OpKind::Copy => "copy",
            OpKind::Test => "test",
        }
    }

    /// Members an operation of this kind must carry.
    pub fn required_members(self) -> &'static [&'static str] {
        match self {
            OpKind::Add => ADD_MEMBERS,
            OpKind::Remove => REMOVE_MEMBERS,
            OpKind::Replace => REPLACE_MEMBERS,
            OpKind::Move => MOVE_MEMBERS,
            OpKind::Copy => COPY_MEMBERS,
            OpKind::Test => TEST_MEMBERS,
        }
    }
}

impl FromStr for OpKind {
    type Err = InvalidPatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InvalidPatch::UnknownOp(format!("{s:?}")))
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: Pointer, value: Value },
    Remove { path: Pointer },
    Replace { path: Pointer, value: Value },
    Move { from: Pointer, path: Pointer },
    Copy { from: Pointer, path: Pointer },
    Test { path: Pointer, value: Value },
}

impl Op {
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Add { .. } => OpKind::Add,
            Op::Remove { .. } => OpKind::Remove,
            Op::Replace { .. } => OpKind::Replace,
            Op::Move { .. } => OpKind::Move,
            Op::Copy { .. } => OpKind::Copy,
            Op::Test { .. } => OpKind::Test,
        }
    }

    /// The operation name string, as used in the `op` member.
    pub fn op_name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn path(&self) -> &Pointer {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Move { path, .. }
            | Op::Copy { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    pub fn from_path(&self) -> Option<&Pointer> {
        match self {
            Op::Move { from, .. } | Op::Copy { from, .. } => Some(from),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Op::Add { value, .. } | Op::Replace { value, .. } | Op::Test { value, .. } => {
                Some(value)
            }
            _ => None,
        }
    }
}

// ── Patch document ────────────────────────────────────────────────────────

/// An ordered sequence of operations, applied strictly in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch(pub Vec<Op>);

impl Patch {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn ops(&self) -> &[Op] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, op: Op) {
        self.0.push(op);
    }
}

impl From<Vec<Op>> for Patch {
    fn from(ops: Vec<Op>) -> Self {
        Self(ops)
    }
}

impl FromIterator<Op> for Patch {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Patch {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone)]
pub struct OpResult {
    /// The document after applying the operation.
    pub doc: Value,
    /// The value the operation displaced (removed, replaced or overwritten).
    pub old: Option<Value>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone)]
pub struct PatchResult {
    pub doc: Value,
    pub res: Vec<OpResult>,
}

/// Options for `apply_ops`.
#[derive(Debug, Clone, Default)]
pub struct ApplyPatchOptions {
    /// If true, edit the owned document in place and skip per-op records.
    /// If false, each operation works on a fresh clone and its result is
    /// recorded in `PatchResult::res`.
    pub mutate: bool,
}
