#![no_main]

use libfuzzer_sys::fuzz_target;
use tranzit::ManifestConfig;
use tranzit::sheet::{read_manifest, xlsx};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a workbook: must not panic.
    if let Ok(sheet) = xlsx::read_first_sheet(data) {
        let _ = read_manifest(&sheet, &ManifestConfig::default());
    }
});
