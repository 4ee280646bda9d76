#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use nscheck::codec;
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(name) = codec::parse_name(s) {
            let _ = name.to_ascii();
        }
    }
});
