#![allow(dead_code)]

use json_splice::pointer::{Pointer, Token};
use proptest::prelude::*;
use serde_json::{json, Value};

pub fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z~/]{0,6}".prop_map(Value::String),
    ]
}

/// Arbitrary documents. Object keys never look like array indices.
pub fn arb_json() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z~/]{0,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Every node of `doc` paired with the pointer naming it, in pre-order.
pub fn walk(doc: &Value) -> Vec<(Pointer, Value)> {
    fn go(doc: &Value, at: &mut Pointer, out: &mut Vec<(Pointer, Value)>) {
        out.push((at.clone(), doc.clone()));
        match doc {
            Value::Array(arr) => {
                for (i, item) in arr.iter().enumerate() {
                    at.push(Token::Index(i));
                    go(item, at, out);
                    at.pop();
                }
            }
            Value::Object(map) => {
                for (key, item) in map {
                    at.push(Token::key(key.as_str()));
                    go(item, at, out);
                    at.pop();
                }
            }
            _ => {}
        }
    }
    let mut out = Vec::new();
    go(doc, &mut Pointer::root(), &mut out);
    out
}

/// Pointers to the scalar nodes of `doc`.
pub fn leaf_pointers(doc: &Value) -> Vec<Pointer> {
    walk(doc)
        .into_iter()
        .filter(|(_, node)| !node.is_array() && !node.is_object())
        .map(|(ptr, _)| ptr)
        .collect()
}
