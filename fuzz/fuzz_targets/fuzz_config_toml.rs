#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and validating an arbitrary config must never panic
        if let Ok(config) = toml::from_str::<octoship::Config>(content) {
            let _ = config.validate(std::path::Path::new("fuzz.toml"));
        }
    }
});
