//! Differential tests against `serde_json` on a corpus of hand-written JSON
//! texts: accept/reject parity, and (for accepted inputs) structural
//! equality after canonicalizing `serde_json`'s object member order, which
//! this crate's `Object` preserves but `serde_json::Map` (without the
//! `preserve_order` feature's ordering guarantee being load-bearing here)
//! does not need to.

fn to_canonical(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut sorted: Vec<_> = map.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            serde_json::Value::Object(
                sorted
                    .into_iter()
                    .map(|(k, v)| (k.clone(), to_canonical(v)))
                    .collect(),
            )
        }
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(to_canonical).collect())
        }
        other => other.clone(),
    }
}

fn ours_to_canonical(value: &jtree::Value) -> serde_json::Value {
    let text = value.to_json_string();
    to_canonical(&serde_json::from_str(&text).unwrap())
}

const VALID_CORPUS: &[&str] = &[
    "null",
    "true",
    "false",
    "0",
    "-0",
    "1.5e10",
    r#""hello world""#,
    r#""with \"escapes\" and é""#,
    "[]",
    "{}",
    "[1,2,3]",
    r#"{"a":1,"b":[true,false,null]}"#,
    r#"{"nested":{"deeply":{"so":[1,2,{"x":"y"}]}}}"#,
];

const INVALID_CORPUS: &[&str] = &[
    "",
    "   ",
    "nul",
    "[1,2,]",
    "{\"a\":1,}",
    "01",
    "1.",
    "1e",
    "\"unterminated",
    "{\"a\" 1}",
    "[1 2]",
];

#[test]
fn valid_corpus_parses_and_matches_serde_json() {
    for &text in VALID_CORPUS {
        let ours = jtree::parse(text).unwrap_or_else(|e| panic!("{text:?} should parse: {e}"));
        let theirs: serde_json::Value =
            serde_json::from_str(text).unwrap_or_else(|e| panic!("{text:?} should parse: {e}"));
        assert_eq!(
            ours_to_canonical(&ours),
            to_canonical(&theirs),
            "structural mismatch on {text:?}"
        );
    }
}

#[test]
fn invalid_corpus_is_rejected_by_both_parsers() {
    for &text in INVALID_CORPUS {
        assert!(jtree::parse(text).is_err(), "{text:?} should be rejected");
        assert!(
            serde_json::from_str::<serde_json::Value>(text).is_err(),
            "{text:?} should be rejected by serde_json too"
        );
    }
}
