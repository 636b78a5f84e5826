//! Property: every `Value` tree survives a `serialize` then `parse` round
//! trip, and object equality does not depend on member order.
//!
//! Drives `QuickCheck::new().quickcheck(prop as fn(...) -> TestResult)`
//! directly rather than the `#[quickcheck]` attribute macro.


use std::collections::HashSet;

use arbitrary_value::ArbitraryValue;
use jtree::{Member, Object, Value};
use quickcheck::{QuickCheck, TestResult};

#[test]
fn parse_of_serialize_round_trips() {
    fn prop(value: ArbitraryValue) -> TestResult {
        let text = value.0.to_json_string();
        match jtree::parse(&text) {
            Ok(reparsed) => TestResult::from_bool(reparsed == value.0),
            Err(_) => TestResult::failed(),
        }
    }

    QuickCheck::new().quickcheck(prop as fn(ArbitraryValue) -> TestResult);
}

#[test]
fn object_equality_is_order_insensitive() {
    fn prop(members: Vec<(String, ArbitraryValue)>) -> TestResult {
        if members.is_empty() {
            return TestResult::discard();
        }
        let mut seen = HashSet::new();
        if members.iter().any(|(k, _)| !seen.insert(k.clone())) {
            return TestResult::discard();
        }

        let forward: Object = members
            .iter()
            .cloned()
            .map(|(key, v)| Member { key, value: v.0 })
            .collect();
        let backward: Object = members
            .into_iter()
            .rev()
            .map(|(key, v)| Member { key, value: v.0 })
            .collect();

        TestResult::from_bool(Value::Object(forward) == Value::Object(backward))
    }

    QuickCheck::new().quickcheck(prop as fn(Vec<(String, ArbitraryValue)>) -> TestResult);
}
