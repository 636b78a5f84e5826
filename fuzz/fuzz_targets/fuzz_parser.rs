#![no_main]

use libfuzzer_sys::fuzz_target;

/// Differentially fuzzes the parser against `serde_json`: on arbitrary
/// bytes interpreted (lossily) as UTF-8, the two parsers must agree on
/// whether the input is valid JSON. They are free to disagree on exactly
/// *which* error was produced (error taxonomies differ), and on object
/// member deduplication (`serde_json`'s default map merges duplicate keys;
/// this crate's `Object` does not), so only accept/reject parity is
/// checked.
fn run(data: &[u8]) {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    let ours = jtree::parse(text);
    let theirs = serde_json::from_str::<serde_json::Value>(text);

    assert_eq!(
        ours.is_ok(),
        theirs.is_ok(),
        "parser disagreement on {text:?}: jtree={ours:?} serde_json_ok={}",
        theirs.is_ok()
    );
}

fuzz_target!(|data: &[u8]| run(data));
