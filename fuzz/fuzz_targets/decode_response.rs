#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use nscheck::codec;
    use nscheck::RecordType;
    if let Ok(response) = codec::decode(data) {
        let _ = response.answers_for(RecordType::A);
        let _ = response.answers_for(RecordType::TXT);
    }
});
