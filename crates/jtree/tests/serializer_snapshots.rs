//! Snapshot tests over the serializer's escaping and nested-container
//! output, using `insta::assert_snapshot!` with inline (`@r#"..."#`)
//! snapshots.

#[test]
fn escapes_control_characters() {
    let v = jtree::parse(r#""a\u0000b\u001Fc""#).unwrap();
    insta::assert_snapshot!(v.to_json_string(), @r#""a\u0000b\u001Fc""#);
}

#[test]
fn escapes_quote_and_backslash() {
    let v = jtree::parse(r#""say \"hi\" \\ ok""#).unwrap();
    insta::assert_snapshot!(v.to_json_string(), @r#""say \"hi\" \\ ok""#);
}

#[test]
fn surrogate_pair_round_trips_through_utf8() {
    let v = jtree::parse(r#""𝄞""#).unwrap();
    insta::assert_snapshot!(v.to_json_string(), @r#""𝄞""#);
}

#[test]
fn nested_containers_serialize_without_whitespace() {
    let v = jtree::parse(r#"{"a": [1, 2, {"b": null}], "c": true}"#).unwrap();
    insta::assert_snapshot!(v.to_json_string(), @r#"{"a":[1.0,2.0,{"b":null}],"c":true}"#);
}

#[test]
fn duplicate_keys_serialize_in_parse_order() {
    let v = jtree::parse(r#"{"a":1,"a":2,"b":3}"#).unwrap();
    insta::assert_snapshot!(v.to_json_string(), @r#"{"a":1.0,"a":2.0,"b":3.0}"#);
}
