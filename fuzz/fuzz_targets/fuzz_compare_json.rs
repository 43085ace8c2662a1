#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Use the first byte to determine the split point between test and state.
    let split = data[0] as usize % data.len().max(1);
    let (test_bytes, state_bytes) = data.split_at(split.min(data.len()));

    if let (Ok(test), Ok(state)) = (
        serde_json::from_slice::<serde_json::Value>(test_bytes),
        serde_json::from_slice::<serde_json::Value>(state_bytes),
    ) {
        let result = shapecheck::compare_json(&test, &state);
        assert_eq!(result.passes, result.err.is_none());
    }
});
