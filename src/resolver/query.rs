// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_proto::rr::Name;

use crate::codec::{self, EncodeError};
use crate::resources::{record_type, RecordType};

/// A single question sent to a single nameserver
///
/// Name's labels are all Rc, so clone is cheap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    id: u16,
    recursion_desired: bool,
    name: Name,
    record_type: RecordType,
}

impl Query {
    /// Creates a query with a random transaction id.
    ///
    /// `record_type` is matched case-insensitively.
    pub fn new(domain: &str, record_type: &str) -> Result<Query, EncodeError> {
        Query::with_id(domain, record_type, rand::random())
    }

    pub fn with_id(domain: &str, record_type: &str, id: u16) -> Result<Query, EncodeError> {
        let record_type = record_type::parse(record_type)?;
        let name = codec::parse_name(domain)?;

        Ok(Query {
            id,
            recursion_desired: true,
            name,
            record_type,
        })
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn recursion_desired(&self) -> bool {
        self.recursion_desired
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        codec::encode(self)
    }
}
