// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Resources
//!
//! Typed views on the records of a response and how they are presented to users. The record
//! types this crate presents specially are modelled explicitly, everything else is carried as
//! text.

pub use rdata::RData;
pub use record::Record;
pub use record_type::RecordType;

pub mod rdata;
pub mod record;
pub mod record_type;

/// Presents all `records` of `record_type` as strings, in the order they were received.
///
/// Records of any other type -- e.g., the CNAME chain leading to an A record, or glue -- are
/// skipped.
pub fn extract_answers<'a, I>(records: I, record_type: RecordType) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| record.record_type() == record_type)
        .map(|record| record.data().to_string())
        .collect()
}
