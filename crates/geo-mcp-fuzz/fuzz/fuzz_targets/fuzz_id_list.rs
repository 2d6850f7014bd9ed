#![no_main]

use geo_mcp::geo::extract_id_list;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let ids = extract_id_list(&json);
        if json.pointer("/esearchresult/idlist").is_none() {
            assert!(ids.is_empty());
        }
    }
});
