// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use tracing::{trace, warn};

use crate::nameserver::{NameServer, NameServerAddress};
use crate::resolver::Error;

/// Resolves the host names of nameservers to the IPv4 address the query is sent to.
#[derive(Clone)]
pub struct ServerResolver {
    inner: Arc<TokioResolver>,
}

impl ServerResolver {
    /// Creates a `ServerResolver` from local system configuration.
    ///
    /// Unix: Parses `/etc/resolv.conf`. Falls back to hickory's default upstream servers if the
    /// system configuration cannot be read.
    pub fn from_system_config() -> ServerResolver {
        let builder = match TokioResolver::builder_tokio() {
            Ok(builder) => builder,
            Err(err) => {
                warn!("Failed to load system resolver configuration, using defaults: {}", err);
                TokioResolver::builder_with_config(ResolverConfig::default(), TokioConnectionProvider::default())
            }
        };

        ServerResolver {
            inner: Arc::new(builder.build()),
        }
    }

    /// Resolves `name_server` to the first IPv4 address returned.
    pub async fn resolve(&self, name_server: &NameServer, timeout: Duration) -> Result<NameServerAddress, Error> {
        match name_server.host().parse::<IpAddr>() {
            Ok(IpAddr::V4(ip_addr)) => return Ok(NameServerAddress::new(name_server.clone(), ip_addr)),
            Ok(IpAddr::V6(_)) => {
                return Err(Error::Resolve {
                    reason: format!("no IPv4 address for {}", name_server),
                })
            }
            Err(_) => {}
        }

        trace!("Resolving nameserver {}.", name_server);
        let lookup = tokio::time::timeout(timeout, self.inner.ipv4_lookup(name_server.host()))
            .await
            .map_err(|_| Error::Resolve {
                reason: format!("resolving {} timed out", name_server),
            })?
            .map_err(|err| Error::Resolve {
                reason: err.to_string(),
            })?;

        lookup
            .iter()
            .next()
            .map(|a| NameServerAddress::new(name_server.clone(), a.0))
            .ok_or_else(|| Error::Resolve {
                reason: format!("no IPv4 address for {}", name_server),
            })
    }
}
