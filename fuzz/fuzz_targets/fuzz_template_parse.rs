#![no_main]

use libfuzzer_sys::fuzz_target;
use tranzit::declaration::Template;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(template) = Template::parse(s) {
            let _ = template.document().to_xml_string();
        }
    }
});
