#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(Some(value)) = tranzit::parse_quantity_text(s) {
            // Whatever parses must format back to something that parses.
            let formatted = tranzit::format_decimal(value);
            assert_eq!(tranzit::parse_quantity_text(&formatted).ok().flatten(), Some(value));
        }
    }
});
