use super::*;
use proptest::prelude::*;

fn list(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| s.to_string()).collect())
}

fn nested(depth: usize) -> String {
    let mut lines: Vec<String> = (0..depth).map(|i| format!("{}k =", "  ".repeat(i))).collect();
    lines.push(format!("{}k = leaf", "  ".repeat(depth)));
    lines.join("\n")
}

#[test]
fn test_leaf_only() {
    let obj = parse_to_object("a = 1\nb = 2").unwrap();
    assert_eq!(obj, Object::new().with("a", "1").with("b", "2"));
}

#[test]
fn test_empty() {
    assert!(parse_to_object("").unwrap().is_empty());
    assert!(build_hierarchy(&[]).unwrap().is_empty());
}

#[test]
fn test_nested_object() {
    let obj = parse_to_object("server =\n  host = localhost\n  port = 5432").unwrap();
    assert_eq!(
        obj,
        Object::new().with(
            "server",
            Object::new().with("host", "localhost").with("port", "5432")
        )
    );
}

#[test]
fn test_deep_nesting() {
    let source = "\
database =
  host = localhost
  port = 5432
  credentials =
    username = admin
    password = secret
name = app";
    let obj = parse_to_object(source).unwrap();
    let db = obj.get("database").and_then(Value::as_object).unwrap();
    assert_eq!(db.get("port").and_then(Value::as_str), Some("5432"));
    let creds = db.get("credentials").and_then(Value::as_object).unwrap();
    assert_eq!(creds.get("username").and_then(Value::as_str), Some("admin"));
    assert_eq!(creds.get("password").and_then(Value::as_str), Some("secret"));
    assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["database", "name"]);
}

#[test]
fn test_blank_line_inside_nested_block() {
    let obj = parse_to_object("server =\n  host = h\n\n  port = 1").unwrap();
    assert_eq!(
        obj,
        Object::new().with("server", Object::new().with("host", "h").with("port", "1"))
    );
}

#[test]
fn test_repeated_key_in_nested_block_becomes_list() {
    let obj = parse_to_object("list =\n  item = a\n  item = b").unwrap();
    assert_eq!(
        obj,
        Object::new().with("list", Object::new().with("item", list(&["a", "b"])))
    );
}

#[test]
fn test_repeated_top_level_key_becomes_list() {
    let obj = parse_to_object("a = 1\nb = x\na = 2\na = 3").unwrap();
    assert_eq!(obj.get("a"), Some(&list(&["1", "2", "3"])));
    assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_overwrite_policy() {
    let options = BuildOptions::new().duplicate_keys(DuplicateKeys::Overwrite);
    let obj = parse_to_object_with("a = 1\nb = 2\na = 3", options).unwrap();
    assert_eq!(obj, Object::new().with("a", "3").with("b", "2"));
}

#[test]
fn test_overwrite_policy_allows_shape_change() {
    let options = BuildOptions::new().duplicate_keys(DuplicateKeys::Overwrite);
    let obj = parse_to_object_with("a = 1\na =\n  x = 1", options).unwrap();
    assert_eq!(obj, Object::new().with("a", Object::new().with("x", "1")));
}

#[test]
fn test_bare_list_block() {
    let obj = parse_to_object("tags =\n  = web\n  = prod").unwrap();
    assert_eq!(obj, Object::new().with("tags", list(&["web", "prod"])));
}

#[test]
fn test_bare_list_at_root_stays_keyed() {
    let obj = parse_to_object("= a\n= b").unwrap();
    assert_eq!(obj, Object::new().with("", list(&["a", "b"])));
}

#[test]
fn test_mixed_empty_and_named_keys_is_object() {
    let obj = parse_to_object("x =\n  = a\n  k = b").unwrap();
    assert_eq!(
        obj,
        Object::new().with("x", Object::new().with("", "a").with("k", "b"))
    );
}

#[test]
fn test_repeated_lists_concatenate() {
    let obj = parse_to_object("tags =\n  = a\ntags =\n  = b\ntags = c").unwrap();
    assert_eq!(obj.get("tags"), Some(&list(&["a", "b", "c"])));

    let obj = parse_to_object("tags = x\ntags =\n  = y\n  = z").unwrap();
    assert_eq!(obj.get("tags"), Some(&list(&["x", "y", "z"])));
}

#[test]
fn test_repeated_objects_merge() {
    let obj = parse_to_object("db =\n  host = a\ndb =\n  port = 1").unwrap();
    assert_eq!(
        obj,
        Object::new().with("db", Object::new().with("host", "a").with("port", "1"))
    );

    let obj = parse_to_object("db =\n  host = a\ndb =\n  host = b").unwrap();
    assert_eq!(
        obj,
        Object::new().with("db", Object::new().with("host", list(&["a", "b"])))
    );
}

#[test]
fn test_single_line_value_with_equals_is_leaf() {
    let obj = parse_to_object("url = http://x?a=b\nexpr = a = b = c").unwrap();
    assert_eq!(obj.get("url").and_then(Value::as_str), Some("http://x?a=b"));
    assert_eq!(obj.get("expr").and_then(Value::as_str), Some("a = b = c"));
}

#[test]
fn test_prose_containing_equals_is_leaf() {
    let obj = parse_to_object("note =\n  the formula is\n  x = y + 1").unwrap();
    assert_eq!(
        obj.get("note").and_then(Value::as_str),
        Some("\n  the formula is\n  x = y + 1")
    );
}

#[test]
fn test_inline_value_with_continuation_is_leaf() {
    let obj = parse_to_object("a = first\n  b = 2").unwrap();
    assert_eq!(obj.get("a").and_then(Value::as_str), Some("first\n  b = 2"));
}

#[test]
fn test_multiline_text_is_leaf() {
    let obj = parse_to_object("description =\n  line one\n\n  line two").unwrap();
    assert_eq!(
        obj.get("description").and_then(Value::as_str),
        Some("\n  line one\n\n  line two")
    );
}

#[test]
fn test_key_only_entries() {
    let obj = parse_to_object("flag\nname = x").unwrap();
    assert_eq!(obj, Object::new().with("flag", "").with("name", "x"));
}

#[test]
fn test_nested_entries_detection() {
    assert!(nested_entries("plain").is_none());
    assert!(nested_entries("a = b").is_none());
    assert!(nested_entries("\n  line\n  more").is_none());
    assert!(nested_entries("\n  text\n  k = v").is_none());
    let found = nested_entries("\n  k = v\n  j = w").unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[1].key, "j");
}

#[test]
fn test_build_from_constructed_entries() {
    let entries = vec![Entry::new("a", "1"), Entry::new("b", "\n  c = 2")];
    let obj = build_hierarchy(&entries).unwrap();
    assert_eq!(
        obj,
        Object::new().with("a", "1").with("b", Object::new().with("c", "2"))
    );
}

#[test]
fn test_comments_kept_by_default() {
    let obj = parse_to_object("/= note\nname = x").unwrap();
    assert_eq!(obj, Object::new().with("/", "note").with("name", "x"));
}

#[test]
fn test_strip_comments() {
    let source = "/= top\nserver =\n  /= inner\n  host = h\n/= again";
    let obj = parse_to_object_with(source, BuildOptions::new().strip_comments()).unwrap();
    assert_eq!(obj, Object::new().with("server", Object::new().with("host", "h")));
}

#[test]
fn test_strip_comments_in_list_block() {
    let source = "tags =\n  /= the tags\n  = a\n  = b";
    let obj = parse_to_object_with(source, BuildOptions::new().strip_comments()).unwrap();
    assert_eq!(obj, Object::new().with("tags", list(&["a", "b"])));
}

#[test]
fn test_conflicting_types_error() {
    let source = "a = 1\na =\n  x = 1";
    let err = parse_to_object(source).unwrap_err();
    assert_eq!(
        err.kind,
        BuildErrorKind::ConflictingTypes {
            existing: ValueKind::String,
            incoming: ValueKind::Object,
        }
    );
    assert_eq!(err.path, vec!["a".to_string()]);
    assert_eq!(err.value, "\n  x = 1");
    assert_eq!(err.span.slice(source), "a =\n  x = 1");
    insta::assert_snapshot!(err.to_string(), @"conflicting values for `a`: string and object");
}

#[test]
fn test_nested_conflict_reports_full_path() {
    let source = "server =\n  port = 1\n  port =\n    x = 1";
    let err = parse_to_object(source).unwrap_err();
    assert_eq!(err.path, vec!["server".to_string(), "port".to_string()]);
    assert_eq!(err.span.slice(source), source);
    insta::assert_snapshot!(err.to_string(), @"conflicting values for `server.port`: string and object");
}

#[test]
fn test_list_meets_object_is_error() {
    let err = parse_to_object("t =\n  = a\nt =\n  k = v").unwrap_err();
    assert_eq!(
        err.kind,
        BuildErrorKind::ConflictingTypes {
            existing: ValueKind::List,
            incoming: ValueKind::Object,
        }
    );
}

#[test]
fn test_nested_list_item_error() {
    let err = parse_to_object("items =\n  = one\n  =\n    k = v").unwrap_err();
    assert_eq!(err.kind, BuildErrorKind::NestedListItem);
    assert_eq!(err.path, vec!["items".to_string()]);
    assert_eq!(err.value, "\n  k = v");
    insta::assert_snapshot!(err.to_string(), @"list item under `items` contains nested entries");
}

#[test]
fn test_depth_limit() {
    let err = parse_to_object(&nested(200)).unwrap_err();
    assert_eq!(err.kind, BuildErrorKind::DepthLimitExceeded { limit: 64 });
    assert_eq!(err.path.len(), 65);
    assert!(err.path.iter().all(|k| k == "k"));
}

#[test]
fn test_depth_limit_boundary() {
    let source = "a =\n  b = 1";
    let err = parse_to_object_with(source, BuildOptions::new().max_depth(0)).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"nesting under `a` exceeds the depth limit of 0");
    assert!(parse_to_object_with(source, BuildOptions::new().max_depth(1)).is_ok());
}

#[test]
fn test_raised_depth_limit_reaches_fixed_point() {
    let obj = parse_to_object_with(&nested(200), BuildOptions::new().max_depth(500)).unwrap();
    let mut cur = &obj;
    for _ in 0..200 {
        cur = cur.get("k").and_then(Value::as_object).unwrap();
    }
    assert_eq!(cur.get("k").and_then(Value::as_str), Some("leaf"));
}

#[test]
fn test_self_similar_input_terminates() {
    let err = parse_to_object("= =\n  = =\n    = =\n      = =").unwrap_err();
    assert_eq!(err.kind, BuildErrorKind::NestedListItem);
    assert_eq!(err.path, vec![String::new()]);
    assert_eq!(err.value, "\n  = =\n    = =\n      = =");
    let obj = parse_to_object("a = a = a = a").unwrap();
    assert_eq!(obj.get("a").and_then(Value::as_str), Some("a = a = a"));
}

#[test]
fn test_map_text_expands_tabs() {
    let mut obj = parse_to_object("a = \tx\nb =\n  c = \ty").unwrap();
    obj.map_text(&mut |s: &mut String| *s = s.replace('\t', "    "));
    assert_eq!(
        obj,
        Object::new()
            .with("a", "    x")
            .with("b", Object::new().with("c", "    y"))
    );
}

proptest! {
    #[test]
    fn build_always_terminates(source in "[ =a/\n]{0,200}") {
        let _ = parse_to_object(&source);
    }

    #[test]
    fn flat_documents_build_to_leaves(
        lines in prop::collection::vec(("[a-z]{1,6}", "[a-z0-9]{1,6}"), 0..10)
    ) {
        let source = lines
            .iter()
            .map(|(k, v)| format!("{k} = {v}"))
            .collect::<Vec<_>>()
            .join("\n");
        let obj = parse_to_object(&source).unwrap();
        for (key, value) in obj.iter() {
            let expected: Vec<&str> = lines
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .collect();
            match value {
                Value::String(s) => {
                    prop_assert_eq!(vec![s.as_str()], expected);
                }
                Value::List(items) => {
                    let items: Vec<&str> = items.iter().map(String::as_str).collect();
                    prop_assert_eq!(items, expected);
                }
                Value::Object(_) => {
                    prop_assert!(false, "flat input built an object");
                }
            }
        }
    }
}
