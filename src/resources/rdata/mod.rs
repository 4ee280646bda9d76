// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

pub use hickory_proto::rr::Name;
pub use mx::MX;
pub use soa::SOA;
pub use txt::TXT;

use crate::resources::RecordType;

mod mx;
mod soa;
mod txt;

/// Record data of the record types this crate knows how to present.
///
/// Everything else is kept as the textual representation hickory gives it.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum RData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(Name),
    MX(MX),
    NS(Name),
    SOA(SOA),
    TXT(TXT),
    Other { record_type: RecordType, data: String },
}

macro_rules! accessor {
    ($variant:ident, $method:ident, $out_type:ty) => {
        pub fn $method(&self) -> Option<&$out_type> {
            match self {
                RData::$variant(ref inner) => Some(inner),
                _ => None,
            }
        }
    };
}

impl RData {
    accessor!(A, a, Ipv4Addr);
    accessor!(AAAA, aaaa, Ipv6Addr);
    accessor!(CNAME, cname, Name);
    accessor!(MX, mx, MX);
    accessor!(NS, ns, Name);
    accessor!(SOA, soa, SOA);
    accessor!(TXT, txt, TXT);
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(ip) => write!(f, "{}", ip),
            RData::AAAA(ip) => write!(f, "{}", ip),
            RData::CNAME(name) | RData::NS(name) => f.write_str(&display_name(name)),
            RData::MX(mx) => write!(f, "{}", mx),
            RData::SOA(soa) => write!(f, "{}", soa),
            RData::TXT(txt) => write!(f, "{}", txt),
            RData::Other { data, .. } => f.write_str(data),
        }
    }
}

#[doc(hidden)]
impl From<&hickory_proto::rr::RData> for RData {
    fn from(rdata: &hickory_proto::rr::RData) -> Self {
        use hickory_proto::rr::RData as HRData;

        match rdata {
            HRData::A(value) => RData::A(value.0),
            HRData::AAAA(value) => RData::AAAA(value.0),
            HRData::CNAME(value) => RData::CNAME(value.0.clone()),
            HRData::MX(value) => RData::MX(value.into()),
            HRData::NS(value) => RData::NS(value.0.clone()),
            HRData::SOA(value) => RData::SOA(value.into()),
            HRData::TXT(value) => RData::TXT(value.into()),
            other => RData::Other {
                record_type: other.record_type(),
                data: other.to_string(),
            },
        }
    }
}

/// Renders a domain name without the trailing root label, the way people write names.
///
/// The root name itself stays `.`.
pub(crate) fn display_name(name: &Name) -> String {
    let ascii = name.to_ascii();
    match ascii.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => ascii,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use hickory_proto::rr::rdata;
    use spectral::prelude::*;

    use super::*;

    fn name(str: &str) -> Name {
        Name::from_str(str).unwrap()
    }

    #[test]
    fn display_name_strips_root_label() {
        crate::utils::tests::logging::init();

        assert_that(&display_name(&name("www.example.com."))).is_equal_to("www.example.com".to_string());
        assert_that(&display_name(&name("www.example.com"))).is_equal_to("www.example.com".to_string());
        assert_that(&display_name(&Name::root())).is_equal_to(".".to_string());
    }

    #[test]
    fn a_and_aaaa() {
        crate::utils::tests::logging::init();
        let a: RData = (&hickory_proto::rr::RData::A(rdata::A::new(192, 0, 2, 1))).into();
        let ipv6 = Ipv6Addr::from_str("2001:db8::1").unwrap();
        let aaaa: RData = (&hickory_proto::rr::RData::AAAA(rdata::AAAA::from(ipv6))).into();

        assert_that(&a.to_string()).is_equal_to("192.0.2.1".to_string());
        assert_that(&aaaa.to_string()).is_equal_to("2001:db8::1".to_string());
    }

    #[test]
    fn cname_and_ns() {
        crate::utils::tests::logging::init();
        let cname: RData = (&hickory_proto::rr::RData::CNAME(rdata::CNAME(name("alias.example.com.")))).into();
        let ns: RData = (&hickory_proto::rr::RData::NS(rdata::NS(name("ns1.linode.com.")))).into();

        assert_that(&cname.to_string()).is_equal_to("alias.example.com".to_string());
        assert_that(&ns.to_string()).is_equal_to("ns1.linode.com".to_string());
        assert_that(&ns.ns()).is_some();
        assert_that(&ns.cname()).is_none();
    }

    #[test]
    fn other_record_types_are_stringified() {
        crate::utils::tests::logging::init();
        let ptr = hickory_proto::rr::RData::PTR(rdata::PTR(name("host.example.com.")));
        let expected = ptr.to_string();

        let rdata: RData = (&ptr).into();

        assert_that(&rdata.to_string()).is_equal_to(expected);
        assert_that(&matches!(rdata, RData::Other { record_type: RecordType::PTR, .. })).is_true();
    }
}
