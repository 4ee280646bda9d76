// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum EncodeError {
    #[error("unknown record type '{mnemonic}'")]
    UnknownRecordType { mnemonic: String },
    #[error("domain name is empty")]
    EmptyName,
    #[error("domain name '{name}' contains an empty label")]
    EmptyLabel { name: String },
    #[error("label '{label}' is {len} bytes long; at most 63 bytes are allowed")]
    LabelTooLong { label: String, len: usize },
    #[error("domain name '{name}' is {len} bytes long on the wire; at most 255 bytes are allowed")]
    NameTooLong { name: String, len: usize },
    #[error("invalid domain name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
    #[error("failed to serialize query: {reason}")]
    Serialization { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum DecodeError {
    #[error("message of {len} bytes is shorter than a DNS header")]
    TooShort { len: usize },
    #[error("{reason}")]
    Malformed { reason: String },
}

