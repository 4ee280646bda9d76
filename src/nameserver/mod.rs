// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

use crate::Error;

pub use resolve::ServerResolver;

pub mod predefined;
mod resolve;

/// A nameserver identified by its host name, e.g. `ns1.linode.com`.
///
/// IPv4 literals are accepted as host names and are used without a lookup. Without an explicit
/// port, the port of the [`crate::ResolverOpts`] is used.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NameServer {
    host: String,
    port: Option<u16>,
}

impl NameServer {
    pub fn new<S: Into<String>>(host: S) -> NameServer {
        NameServer {
            host: host.into(),
            port: None,
        }
    }

    pub fn with_port<S: Into<String>>(host: S, port: u16) -> NameServer {
        NameServer {
            host: host.into(),
            port: Some(port),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl fmt::Display for NameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => f.write_str(&self.host),
        }
    }
}

impl FromStr for NameServer {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let host = s.trim();
        let err = |why: &str| Error::ParserError {
            what: s.to_string(),
            to: "NameServer",
            why: why.to_string(),
        };
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(err("is not a host name"));
        }

        // Bare IPv6 literals contain colons, too; only `host:port` with a colon-free host has a port
        match host.rsplit_once(':') {
            Some((name, port)) if !name.is_empty() && !name.contains(':') => {
                let port = port.parse::<u16>().map_err(|_| err("port is not a number"))?;
                Ok(NameServer::with_port(name, port))
            }
            _ => Ok(NameServer::new(host)),
        }
    }
}

/// A nameserver together with the IPv4 address it has been resolved to.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NameServerAddress {
    name_server: NameServer,
    ip_addr: Ipv4Addr,
}

impl NameServerAddress {
    pub fn new(name_server: NameServer, ip_addr: Ipv4Addr) -> NameServerAddress {
        NameServerAddress { name_server, ip_addr }
    }

    pub fn name_server(&self) -> &NameServer {
        &self.name_server
    }

    pub fn ip_addr(&self) -> Ipv4Addr {
        self.ip_addr
    }

    /// Socket address to send queries to; `default_port` applies unless the nameserver has its own.
    pub fn socket_addr(&self, default_port: u16) -> SocketAddr {
        let port = self.name_server.port.unwrap_or(default_port);
        SocketAddr::V4(SocketAddrV4::new(self.ip_addr, port))
    }
}

impl fmt::Display for NameServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name_server, self.ip_addr)
    }
}
