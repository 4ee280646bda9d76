#[macro_use]
extern crate afl;

fn main() {
    use nscheck::codec;
    use nscheck::RecordType;
    fuzz!(|data: &[u8]| {
        if let Ok(response) = codec::decode(data) {
            let _ = response.answers_for(RecordType::MX);
        }
    });
}
