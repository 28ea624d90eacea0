#![no_main]

use libfuzzer_sys::fuzz_target;

use cronex_expr::{expand_field, Field};

// Expansion must never panic, and every successful result must be a
// strictly increasing in-bounds sequence.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for &field in Field::all() {
        if let Ok(values) = expand_field(field, text) {
            let bounds = field.bounds();
            assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(values
                .iter()
                .all(|v| *v >= bounds.min && *v <= bounds.max));
        }
    }
});
