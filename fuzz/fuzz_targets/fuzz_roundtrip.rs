#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use jtree::{Member, Object, Value};
use libfuzzer_sys::fuzz_target;

/// A local `Value` generator, mirroring `fuzz_parser.rs`'s `ArbitraryValue`
/// wrapper: the library itself stays free of a fuzzing-only dependency, and
/// recursive generation is capped by depth rather than by `Unstructured`
/// exhaustion alone, to keep generated trees shallow enough for the
/// recursive-descent parser's call stack.
struct ArbitraryValue(Value);

const MAX_DEPTH: u32 = 8;

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(ArbitraryValue(generate(u, 0)?))
    }
}

fn generate(u: &mut Unstructured<'_>, depth: u32) -> arbitrary::Result<Value> {
    let max_variant = if depth >= MAX_DEPTH { 3 } else { 5 };
    let value = match u.int_in_range(0..=max_variant)? {
        0 => Value::Null,
        1 => Value::Bool(u.arbitrary()?),
        2 => {
            // NaN/infinite doubles cannot appear in a parsed JSON tree; draw
            // until a finite value lands (an `f64`'s bit pattern space is
            // overwhelmingly finite, so this terminates quickly).
            loop {
                let n: f64 = u.arbitrary()?;
                if n.is_finite() {
                    break Value::from(n);
                }
            }
        }
        3 => Value::from(arbitrary_string(u)?.as_str()),
        4 => {
            let len = u.int_in_range(0..=4)?;
            let mut elements = Vec::with_capacity(len);
            for _ in 0..len {
                elements.push(generate(u, depth + 1)?);
            }
            Value::from(elements)
        }
        _ => {
            let len = u.int_in_range(0..=4)?;
            let mut members = Vec::with_capacity(len);
            for _ in 0..len {
                let key = arbitrary_string(u)?;
                let value = generate(u, depth + 1)?;
                members.push(Member { key, value });
            }
            Value::from(members.into_iter().collect::<Object>())
        }
    };
    Ok(value)
}

/// Draws a `String` that cannot contain an unpaired surrogate (arbitrary's
/// built-in `String` generation already only produces valid `char`
/// sequences, so any code point it draws is by construction representable).
fn arbitrary_string(u: &mut Unstructured<'_>) -> arbitrary::Result<String> {
    u.arbitrary()
}

fn run(data: &[u8]) {
    let mut u = Unstructured::new(data);
    let Ok(ArbitraryValue(value)) = ArbitraryValue::arbitrary(&mut u) else {
        return;
    };

    let text = value.to_json_string();
    let reparsed = jtree::parse(&text).unwrap_or_else(|e| {
        panic!("serializer produced unparsable JSON {text:?}: {e}");
    });

    assert_eq!(
        reparsed, value,
        "round trip changed the tree: {text:?}"
    );
}

fuzz_target!(|data: &[u8]| run(data));
