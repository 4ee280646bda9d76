// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Wire format of queries and responses.
//!
//! Queries carry exactly one question, have the recursion desired flag set, and never carry
//! EDNS. Responses are decoded as received, even when they are truncated.

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use hickory_proto::{ProtoError, ProtoErrorKind};
use tracing::trace;

pub use error::{DecodeError, EncodeError};

use crate::resolver::Query;
use crate::resources::{extract_answers, Record, RecordType};

mod error;

/// Size of the fixed DNS message header
pub const HEADER_LEN: usize = 12;
const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;

/// Parses `domain` into a name that fits into a DNS message.
///
/// Internationalized labels are converted to punycode and the length limits apply to the
/// converted form. A single `.` is the root name.
pub fn parse_name(domain: &str) -> Result<Name, EncodeError> {
    if domain.is_empty() {
        return Err(EncodeError::EmptyName);
    }
    if domain == "." {
        return Ok(Name::root());
    }

    // Each label costs its length plus one length octet; the root label adds the final octet.
    let mut wire_len = 1;
    for label in split_labels(domain) {
        if label.is_empty() {
            return Err(EncodeError::EmptyLabel {
                name: domain.to_string(),
            });
        }
        let parsed = Name::from_utf8(label).map_err(|e| label_error(domain, label, e))?;
        wire_len += parsed.iter().map(|x| x.len() + 1).sum::<usize>();
    }
    if wire_len > MAX_NAME_LEN {
        return Err(EncodeError::NameTooLong {
            name: domain.to_string(),
            len: wire_len,
        });
    }

    let mut name = Name::from_utf8(domain).map_err(|e| EncodeError::InvalidName {
        name: domain.to_string(),
        reason: e.to_string(),
    })?;
    name.set_fqdn(true);

    Ok(name)
}

/// Splits presentation format at unescaped dots; a trailing dot does not start another label.
fn split_labels(domain: &str) -> Vec<&str> {
    let mut labels = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in domain.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '.' => {
                labels.push(&domain[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < domain.len() || labels.is_empty() {
        labels.push(&domain[start..]);
    }

    labels
}

fn label_error(domain: &str, label: &str, err: ProtoError) -> EncodeError {
    match err.kind() {
        ProtoErrorKind::LabelBytesTooLong(len) if *len > MAX_LABEL_LEN => EncodeError::LabelTooLong {
            label: label.to_string(),
            len: *len,
        },
        _ => EncodeError::InvalidName {
            name: domain.to_string(),
            reason: err.to_string(),
        },
    }
}

/// Serializes `query` to wire format.
pub fn encode(query: &Query) -> Result<Vec<u8>, EncodeError> {
    let mut message = Message::new();
    message.set_id(query.id());
    message.set_message_type(MessageType::Query);
    message.set_op_code(OpCode::Query);
    message.set_recursion_desired(query.recursion_desired());
    message.add_query(hickory_proto::op::Query::query(
        query.name().clone(),
        query.record_type(),
    ));

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).map_err(|e| EncodeError::Serialization {
        reason: e.to_string(),
    })?;
    trace!("Encoded query id {} into {} bytes.", query.id(), buf.len());

    Ok(buf)
}

/// A decoded response
#[derive(Debug, Clone)]
pub struct Response {
    id: u16,
    truncated: bool,
    response_code: ResponseCode,
    answers: Vec<Record>,
}

impl Response {
    /// Transaction id copied from the query by the server
    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn response_code(&self) -> ResponseCode {
        self.response_code
    }

    /// All records of the answer section, in the order they were received.
    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    /// Presentation of all answers of `record_type`; cf. [`crate::resources::extract_answers`].
    pub fn answers_for(&self, record_type: RecordType) -> Vec<String> {
        extract_answers(&self.answers, record_type)
    }
}

/// Decodes a response from wire format.
///
/// Compressed names are followed only backwards, so a message with a pointer loop is rejected
/// instead of hanging the decoder.
pub fn decode(bytes: &[u8]) -> Result<Response, DecodeError> {
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::TooShort { len: bytes.len() });
    }

    let message = Message::from_vec(bytes).map_err(|e| DecodeError::Malformed { reason: e.to_string() })?;
    let answers = message.answers().iter().map(Record::from).collect();

    Ok(Response {
        id: message.id(),
        truncated: message.truncated(),
        response_code: message.response_code(),
        answers,
    })
}
