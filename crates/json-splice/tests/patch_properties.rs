mod common;

use common::{arb_json, leaf, leaf_pointers, walk};
use json_splice::json_patch::{apply_op, apply_patch, Op, Pointer};
use json_splice::pointer::{replace, resolve, Token};
use json_splice::diff;
use proptest::prelude::*;
use serde_json::{Map, Value};

proptest! {
    #[test]
    fn root_resolves_to_whole_document(doc in arb_json()) {
        prop_assert_eq!(resolve(&doc, &Pointer::root()).unwrap(), &doc);
    }

    #[test]
    fn diff_of_identical_documents_is_empty(doc in arb_json()) {
        prop_assert!(diff(&doc, &doc).is_empty());
    }

    #[test]
    fn diff_reproduces_leaf_edits(doc in arb_json(), edits in prop::collection::vec(leaf(), 0..8)) {
        let mut target = doc.clone();
        for (ptr, value) in leaf_pointers(&doc).into_iter().zip(edits) {
            target = replace(&target, &ptr, value).unwrap();
        }
        let ops = diff(&doc, &target);
        prop_assert!(ops.iter().all(|op| matches!(op, Op::Replace { .. })), "expected only Replace ops");
        prop_assert_eq!(apply_patch(&doc, &ops).unwrap(), target);
    }

    #[test]
    fn diff_reproduces_array_growth(xs in prop::collection::vec(leaf(), 0..6), extra in prop::collection::vec(leaf(), 0..6)) {
        let src = Value::Array(xs.clone());
        let dst = Value::Array(xs.into_iter().chain(extra).collect());
        prop_assert_eq!(apply_patch(&src, &diff(&src, &dst)).unwrap(), dst);
    }

    #[test]
    fn add_then_remove_object_member(
        map in prop::collection::btree_map("[a-z]{1,4}", leaf(), 0..5),
        value in arb_json(),
    ) {
        let doc = Value::Object(map.into_iter().collect::<Map<_, _>>());
        let path = Pointer::root().child(Token::key("NEW"));
        let ops = vec![
            Op::Add { path: path.clone(), value },
            Op::Remove { path },
        ];
        prop_assert_eq!(apply_patch(&doc, &ops).unwrap(), doc);
    }

    #[test]
    fn add_then_remove_array_element(
        xs in prop::collection::vec(leaf(), 0..6),
        at in 0usize..7,
        value in leaf(),
    ) {
        let at = at.min(xs.len());
        let doc = Value::Array(xs);
        let path = Pointer::root().child(at);
        let ops = vec![
            Op::Add { path: path.clone(), value },
            Op::Remove { path },
        ];
        prop_assert_eq!(apply_patch(&doc, &ops).unwrap(), doc);
    }

    #[test]
    fn array_add_shifts_right(xs in prop::collection::vec(leaf(), 0..6), at in 0usize..7, value in leaf()) {
        let at = at.min(xs.len());
        let mut expected = xs.clone();
        expected.insert(at, value.clone());
        let op = Op::Add { path: Pointer::root().child(at), value };
        prop_assert_eq!(op.apply(&Value::Array(xs)).unwrap(), Value::Array(expected));
    }

    #[test]
    fn array_remove_shifts_left(xs in prop::collection::vec(leaf(), 1..6), at in 0usize..6) {
        let at = at % xs.len();
        let mut expected = xs.clone();
        expected.remove(at);
        let op = Op::Remove { path: Pointer::root().child(at) };
        prop_assert_eq!(op.apply(&Value::Array(xs)).unwrap(), Value::Array(expected));
    }

    #[test]
    fn test_never_mutates(doc in arb_json(), probe in arb_json()) {
        for (path, node) in walk(&doc) {
            let mut working = doc.clone();
            let outcome = apply_op(&mut working, &Op::Test { path, value: probe.clone() });
            prop_assert_eq!(&working, &doc);
            prop_assert_eq!(outcome.is_ok(), node == probe);
        }
    }

    #[test]
    fn move_into_descendant_always_fails(doc in arb_json()) {
        for (from, node) in walk(&doc) {
            if !node.is_object() {
                continue;
            }
            let path = from.child(Token::key("inner"));
            let op = Op::Move { from, path };
            prop_assert!(op.apply(&doc).is_err());
        }
    }
}
