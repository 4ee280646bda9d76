// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;

use hickory_proto::rr::Name;

use super::display_name;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
#[allow(clippy::upper_case_acronyms)]
pub struct MX {
    preference: u16,
    exchange: Name,
}

impl MX {
    pub fn new(preference: u16, exchange: Name) -> MX {
        MX { preference, exchange }
    }

    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn exchange(&self) -> &Name {
        &self.exchange
    }
}

/// Renders as `<priority> <exchange>`.
impl fmt::Display for MX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, display_name(&self.exchange))
    }
}

#[doc(hidden)]
impl From<&hickory_proto::rr::rdata::MX> for MX {
    fn from(mx: &hickory_proto::rr::rdata::MX) -> Self {
        MX::new(mx.preference(), mx.exchange().clone())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use spectral::prelude::*;

    use super::*;

    #[test]
    fn display() {
        crate::utils::tests::logging::init();
        let mx = MX::new(10, Name::from_str("mail.example.com.").unwrap());

        assert_that(&mx.to_string()).is_equal_to("10 mail.example.com".to_string());
    }
}
