#![no_main]

use std::path::Path;

use geo_mcp::config::parse_config;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(config) = parse_config(text, Path::new("fuzz.json")) {
            assert!(!config.base_url.ends_with('/'));
        }
    }
});
