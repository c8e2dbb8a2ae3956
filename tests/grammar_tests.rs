use serde_tinytoml::{get, parse, tinytoml, Datetime, ErrorKind, Value};

#[test]
fn test_key_value_lines_decode_by_type() {
    let cases = [
        ("s = \"text\"", Value::from("text")),
        ("i = 42", Value::Integer(42)),
        ("f = 2.5", Value::Float(2.5)),
        ("b = true", Value::Boolean(true)),
        ("a = [1, \"two\", 3.0]", tinytoml!([1, "two", 3.0])),
        ("t = { k = false }", tinytoml!({ "k": false })),
        (
            "d = 1979-05-27",
            Value::Datetime(Datetime::new("1979-05-27")),
        ),
    ];

    for (line, expected) in cases {
        let root = parse(line).unwrap();
        let key = &line[..1];
        assert_eq!(get(&root, &[key]), Some(&expected), "line: {}", line);
    }
}

#[test]
fn test_string_literal_is_not_expanded() {
    let root = parse("v = \"19\"").unwrap();
    let value = get(&root, &["v"]).unwrap();
    assert_eq!(value.as_str(), Some("19"));
    assert_eq!(value.to_string(), "\"19\"");
}

#[test]
fn test_duplicate_keys_last_write_wins() {
    let root = parse("a = 1\na = 2").unwrap();
    assert_eq!(get(&root, &["a"]), Some(&Value::Integer(2)));
    assert_eq!(root.len(), 1);
}

#[test]
fn test_duplicate_keys_may_change_type() {
    let root = parse("a = 1\na = \"now a string\"").unwrap();
    assert_eq!(get(&root, &["a"]), Some(&Value::from("now a string")));
}

#[test]
fn test_array_of_tables_accumulates_in_header_order() {
    let root = parse("[[pt]]\nx = 1\n[[pt]]\nx = 2").unwrap();
    let points = get(&root, &["pt"]).and_then(|v| v.as_array()).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0], tinytoml!({ "x": 1 }));
    assert_eq!(points[1], tinytoml!({ "x": 2 }));
}

#[test]
fn test_array_of_tables_interleaved_with_other_headers() {
    let root = parse(
        "[[job]]\nname = \"a\"\n[settings]\nlevel = 3\n[[job]]\nname = \"b\"\nretries = 2\n",
    )
    .unwrap();
    assert_eq!(
        Value::Table(root),
        tinytoml!({
            "job": [{ "name": "a" }, { "name": "b", "retries": 2 }],
            "settings": { "level": 3 }
        })
    );
}

#[test]
fn test_empty_array_of_tables_elements() {
    let root = parse("[[e]]\n[[e]]\n[[e]]").unwrap();
    assert_eq!(
        get(&root, &["e"]),
        Some(&tinytoml!([{}, {}, {}]))
    );
}

#[test]
fn test_nested_containers() {
    let root = parse("a = { b = [1, 2, 3] }").unwrap();
    let a = get(&root, &["a"]).unwrap();
    assert!(a.is_table());
    assert_eq!(a.get_path(&["b"]), Some(&tinytoml!([1, 2, 3])));
    assert_eq!(get(&root, &["a", "b"]), Some(&tinytoml!([1, 2, 3])));
}

#[test]
fn test_deeply_nested_values() {
    let root = parse("v = [[[[{ a = [{ b = [] }] }]]]]").unwrap();
    assert_eq!(
        get(&root, &["v"]),
        Some(&tinytoml!([[[[{ "a": [{ "b": [] }] }]]]]))
    );
}

#[test]
fn test_datetime_heuristic() {
    let root = parse("when = 2024-01-01T00:00:00Z\ndelta = -5").unwrap();
    assert_eq!(
        get(&root, &["when"]).and_then(|v| v.as_datetime()).map(Datetime::as_str),
        Some("2024-01-01T00:00:00Z")
    );
    assert_eq!(get(&root, &["delta"]), Some(&Value::Integer(-5)));
}

#[test]
fn test_dotted_header_is_a_flat_key() {
    let root = parse("[a.b]\nc = 1").unwrap();
    assert_eq!(get(&root, &["a.b", "c"]), Some(&Value::Integer(1)));
    assert_eq!(get(&root, &["a", "b", "c"]), None);
}

#[test]
fn test_keys_before_first_header_stay_in_root() {
    let root = parse("top = 1\n[section]\ninner = 2").unwrap();
    assert_eq!(get(&root, &["top"]), Some(&Value::Integer(1)));
    assert_eq!(get(&root, &["section", "inner"]), Some(&Value::Integer(2)));
    assert_eq!(get(&root, &["inner"]), None);
}

#[test]
fn test_failure_kinds() {
    assert_eq!(parse("a 1").unwrap_err().kind(), ErrorKind::InvalidSyntax);
    assert_eq!(
        parse("a = \"unterminated").unwrap_err().kind(),
        ErrorKind::UnexpectedEof
    );
    assert_eq!(parse("a = x").unwrap_err().kind(), ErrorKind::InvalidValue);
    assert_eq!(
        parse("a = 99999999999999999999").unwrap_err().kind(),
        ErrorKind::Overflow
    );
    assert_eq!(
        parse("a = 1.2.3").unwrap_err().kind(),
        ErrorKind::InvalidCharacter
    );
    assert_eq!(
        parse("a = [1 2]").unwrap_err().kind(),
        ErrorKind::UnexpectedCharacter
    );
}

#[test]
fn test_first_error_aborts_parse() {
    // the later line would be an Overflow, but the earlier failure wins
    let err = parse("ok = 1\nbad = ?\nworse = 99999999999999999999").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.position().map(|(line, _)| line), Some(2));
}

#[test]
fn test_comments_everywhere() {
    let source = "\
# leading comment
a = 1 # trailing
# between
[t] # after header
b = [ # inside array
  1, # element
  2,
]
";
    let root = parse(source).unwrap();
    assert_eq!(get(&root, &["a"]), Some(&Value::Integer(1)));
    assert_eq!(get(&root, &["t", "b"]), Some(&tinytoml!([1, 2])));
}

#[test]
fn test_unicode_content() {
    let root = parse("名前 = \"値 ✓\"\n[セクション]\nk = \"é\"").unwrap();
    assert_eq!(get(&root, &["名前"]), Some(&Value::from("値 ✓")));
    assert_eq!(get(&root, &["セクション", "k"]), Some(&Value::from("é")));
}
