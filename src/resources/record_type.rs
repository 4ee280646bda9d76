// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::str::FromStr;

pub use hickory_proto::rr::RecordType;

use crate::codec::EncodeError;

/// Record types offered to users first; any other IANA mnemonic is accepted by [`parse`], too.
pub static COMMON_RECORD_TYPES: &[RecordType] = &[
    RecordType::A,
    RecordType::AAAA,
    RecordType::MX,
    RecordType::TXT,
    RecordType::CNAME,
    RecordType::NS,
    RecordType::SOA,
];

/// Parses a record type mnemonic case-insensitively, e.g. `mx` or `AAAA`.
pub fn parse(mnemonic: &str) -> Result<RecordType, EncodeError> {
    let upper = mnemonic.trim().to_ascii_uppercase();
    match RecordType::from_str(&upper) {
        Ok(RecordType::Unknown(_)) | Err(_) => Err(EncodeError::UnknownRecordType {
            mnemonic: mnemonic.to_string(),
        }),
        Ok(record_type) => Ok(record_type),
    }
}
