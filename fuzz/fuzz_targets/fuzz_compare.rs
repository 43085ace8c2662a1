#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use shapecheck::{Value, check, compare};

/// Generate an arbitrary value tree from fuzzer bytes, nested up to `depth`.
fn arbitrary_value(u: &mut Unstructured<'_>, depth: u32) -> arbitrary::Result<Value> {
    let max = if depth == 0 { 5 } else { 7 };
    match u.int_in_range(0..=max)? {
        0 => Ok(Value::absent()),
        1 => Ok(Value::null()),
        2 => Ok(Value::from(bool::arbitrary(u)?)),
        3 => Ok(Value::from(f64::arbitrary(u)?)),
        4 => Ok(Value::from(String::arbitrary(u)?)),
        5 => Ok(Value::opaque(String::arbitrary(u)?, String::arbitrary(u)?)),
        6 => {
            let len = u.int_in_range(0..=6)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(arbitrary_value(u, depth - 1)?);
            }
            Ok(Value::from(items))
        }
        _ => {
            let len = u.int_in_range(0..=6)?;
            let mut pairs = Vec::with_capacity(len);
            for _ in 0..len {
                pairs.push((String::arbitrary(u)?, arbitrary_value(u, depth - 1)?));
            }
            Ok(pairs.into_iter().collect())
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);

    let (test, state) = match (arbitrary_value(&mut u, 6), arbitrary_value(&mut u, 6)) {
        (Ok(t), Ok(s)) => (t, s),
        _ => return,
    };

    let result = compare(&test, &state);
    assert_eq!(result.passes, result.err.is_none());
    assert_eq!(result.passes, check(&test, &state).is_ok());
});
