//! Walking a document along a pointer's tokens.

use serde_json::Value;

use crate::types::{Pointer, Token};
use crate::PointerError;

/// One step of a read walk. Container kind mismatches yield `None`.
fn step<'a>(node: &'a Value, token: &Token) -> Option<&'a Value> {
    match (node, token) {
        (Value::Array(arr), Token::Index(idx)) => arr.get(*idx),
        (Value::Object(map), Token::Key(key)) => map.get(key),
        _ => None,
    }
}

fn step_mut<'a>(node: &'a mut Value, token: &Token) -> Option<&'a mut Value> {
    match (node, token) {
        (Value::Array(arr), Token::Index(idx)) => arr.get_mut(*idx),
        (Value::Object(map), Token::Key(key)) => map.get_mut(key),
        _ => None,
    }
}

/// Resolve a token slice against a document.
///
/// # Errors
///
/// [`PointerError::NotFound`] if a key or index is missing, a token expects
/// the other container kind, or a `-` token is met.
pub fn resolve_tokens<'a>(doc: &'a Value, tokens: &[Token]) -> Result<&'a Value, PointerError> {
    let mut current = doc;
    for token in tokens {
        current = step(current, token).ok_or_else(|| PointerError::not_found(tokens))?;
    }
    Ok(current)
}

/// Mutable counterpart of [`resolve_tokens`].
pub fn resolve_tokens_mut<'a>(
    doc: &'a mut Value,
    tokens: &[Token],
) -> Result<&'a mut Value, PointerError> {
    let mut current = doc;
    for token in tokens {
        current = step_mut(current, token).ok_or_else(|| PointerError::not_found(tokens))?;
    }
    Ok(current)
}

/// Resolve a pointer against a document.
///
/// The root pointer resolves to `doc` itself.
///
/// # Example
///
/// ```
/// use json_splice_pointer::{resolve, Pointer};
/// use serde_json::json;
///
/// let doc = json!({"a": ["x", "y"]});
/// let ptr = Pointer::parse("/a/1").unwrap();
/// assert_eq!(resolve(&doc, &ptr).unwrap(), &json!("y"));
///
/// let past_end = Pointer::parse("/a/2").unwrap();
/// assert!(resolve(&doc, &past_end).is_err());
/// ```
pub fn resolve<'a>(doc: &'a Value, pointer: &Pointer) -> Result<&'a Value, PointerError> {
    resolve_tokens(doc, pointer.tokens())
}

pub fn resolve_mut<'a>(doc: &'a mut Value, pointer: &Pointer) -> Result<&'a mut Value, PointerError> {
    resolve_tokens_mut(doc, pointer.tokens())
}

/// Resolve the container holding the node `pointer` names.
///
/// # Errors
///
/// [`PointerError::NoParent`] for the root pointer, [`PointerError::NotFound`]
/// when the parent does not resolve.
pub fn resolve_parent<'a>(doc: &'a Value, pointer: &Pointer) -> Result<&'a Value, PointerError> {
    let (parent, _) = pointer.split_last().ok_or(PointerError::NoParent)?;
    resolve_tokens(doc, parent)
}

/// Produce a copy of `doc` with the node at `pointer` set to `new_value`.
///
/// A root pointer returns `new_value` itself. An array index must already
/// exist; object keys are created or overwritten.
///
/// # Errors
///
/// [`PointerError::NotFound`] when the parent does not resolve, the index is
/// out of range, or the last token does not fit the parent's kind.
///
/// # Example
///
/// ```
/// use json_splice_pointer::{replace, Pointer};
/// use serde_json::json;
///
/// let doc = json!({"a": [1, 2]});
/// let out = replace(&doc, &Pointer::parse("/a/0").unwrap(), json!(9)).unwrap();
/// assert_eq!(out, json!({"a": [9, 2]}));
/// assert_eq!(doc, json!({"a": [1, 2]}));
/// ```
pub fn replace(doc: &Value, pointer: &Pointer, new_value: Value) -> Result<Value, PointerError> {
    let Some((parent, last)) = pointer.split_last() else {
        return Ok(new_value);
    };
    let mut out = doc.clone();
    match (resolve_tokens_mut(&mut out, parent)?, last) {
        (Value::Array(arr), Token::Index(idx)) if *idx < arr.len() => arr[*idx] = new_value,
        (Value::Object(map), Token::Key(key)) => {
            map.insert(key.clone(), new_value);
        }
        _ => return Err(PointerError::not_found(pointer.tokens())),
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ptr(s: &str) -> Pointer {
        Pointer::parse(s).unwrap()
    }

    #[test]
    fn test_resolve_scalar_root() {
        assert_eq!(resolve(&json!(123), &ptr("")).unwrap(), &json!(123));
        assert_eq!(resolve(&json!("foo"), &ptr("")).unwrap(), &json!("foo"));
    }

    #[test]
    fn test_resolve_nested() {
        let doc = json!({"foo": {"bar": {"baz": "qux"}}, "a": [1, {"b": 2}]});
        assert_eq!(resolve(&doc, &ptr("/foo/bar/baz")).unwrap(), &json!("qux"));
        assert_eq!(resolve(&doc, &ptr("/a/1/b")).unwrap(), &json!(2));
    }

    #[test]
    fn test_resolve_escaped_keys() {
        let doc = json!({"a/b": 1, "m~n": 2, "~1": 3});
        assert_eq!(resolve(&doc, &ptr("/a~1b")).unwrap(), &json!(1));
        assert_eq!(resolve(&doc, &ptr("/m~0n")).unwrap(), &json!(2));
        assert_eq!(resolve(&doc, &ptr("/~01")).unwrap(), &json!(3));
    }

    #[test]
    fn test_resolve_explicit_null() {
        let doc = json!({"foo": null});
        assert_eq!(resolve(&doc, &ptr("/foo")).unwrap(), &Value::Null);
    }

    #[test]
    fn test_resolve_missing() {
        let doc = json!({"a": ["x", "y"]});
        let err = resolve(&doc, &ptr("/a/2")).unwrap_err();
        assert_eq!(
            err,
            PointerError::NotFound {
                pointer: "/a/2".to_string()
            }
        );
        assert!(resolve(&doc, &ptr("/b")).is_err());
        assert!(resolve(&doc, &ptr("/a/0/deeper")).is_err());
    }

    #[test]
    fn test_resolve_kind_mismatch() {
        let doc = json!({"arr": [1], "obj": {"0": "zero"}});
        assert!(resolve(&doc, &ptr("/arr/x")).is_err());
        assert!(resolve(&doc, &ptr("/obj/0")).is_err());
    }

    #[test]
    fn test_resolve_append_is_not_readable() {
        let doc = json!([1, 2, 3]);
        assert!(resolve(&doc, &ptr("/-")).is_err());
    }

    #[test]
    fn test_resolve_parent() {
        let doc = json!({"a": {"b": 1}});
        assert_eq!(resolve_parent(&doc, &ptr("/a/b")).unwrap(), &json!({"b": 1}));
        assert_eq!(resolve_parent(&doc, &ptr("/a")).unwrap(), &doc);
        assert_eq!(resolve_parent(&doc, &ptr("")), Err(PointerError::NoParent));
        assert!(resolve_parent(&doc, &ptr("/x/y")).is_err());
    }

    #[test]
    fn test_resolve_mut_edits_in_place() {
        let mut doc = json!({"a": [1, 2]});
        *resolve_mut(&mut doc, &ptr("/a/1")).unwrap() = json!(20);
        assert_eq!(doc, json!({"a": [1, 20]}));
    }

    #[test]
    fn test_replace_root() {
        let doc = json!({"a": 1});
        assert_eq!(replace(&doc, &ptr(""), json!([1])).unwrap(), json!([1]));
    }

    #[test]
    fn test_replace_object_key_sets_or_creates() {
        let doc = json!({"a": 1});
        assert_eq!(replace(&doc, &ptr("/a"), json!(2)).unwrap(), json!({"a": 2}));
        assert_eq!(
            replace(&doc, &ptr("/b"), json!(2)).unwrap(),
            json!({"a": 1, "b": 2})
        );
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn test_replace_array_index_must_exist() {
        let doc = json!([1, 2]);
        assert_eq!(replace(&doc, &ptr("/1"), json!(3)).unwrap(), json!([1, 3]));
        assert!(replace(&doc, &ptr("/2"), json!(3)).is_err());
        assert!(replace(&doc, &ptr("/-"), json!(3)).is_err());
    }

    #[test]
    fn test_replace_missing_parent() {
        let doc = json!({"a": 1});
        assert!(replace(&doc, &ptr("/x/y"), json!(0)).is_err());
        assert!(replace(&doc, &ptr("/a/y"), json!(0)).is_err());
    }
}
