// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::task;
use tracing::debug;

pub use error::Error;
pub use lookup::{Answers, LookupResult, ServerOutcome};
pub use query::Query;

use crate::nameserver::{predefined, NameServer, ServerResolver};
use crate::report::LookupReport;

pub mod error;
pub mod lookup;
pub mod query;

/// Record type used when the caller does not ask for a specific one
pub static DEFAULT_RECORD_TYPE: &str = "A";

#[derive(Debug, Clone)]
pub struct ResolverOpts {
    /// How long to wait for the response of each nameserver
    pub timeout: Duration,
    /// How long to wait for the address of each nameserver
    pub resolve_timeout: Duration,
    pub port: u16,
    pub max_response_size: usize,
    /// Discard responses whose transaction id differs from the query's
    pub validate_response: bool,
}

impl Default for ResolverOpts {
    fn default() -> Self {
        ResolverOpts {
            timeout: Duration::from_secs(5),
            resolve_timeout: Duration::from_secs(5),
            port: 53,
            max_response_size: 4096,
            validate_response: true,
        }
    }
}

/// Queries a fixed, ordered set of nameservers concurrently.
#[derive(Debug, Clone)]
pub struct ResolverGroup {
    name_servers: Vec<NameServer>,
    opts: Arc<ResolverOpts>,
}

impl ResolverGroup {
    pub fn new<T: Into<Vec<NameServer>>>(name_servers: T, opts: ResolverOpts) -> Self {
        ResolverGroup {
            name_servers: name_servers.into(),
            opts: Arc::new(opts),
        }
    }

    /// Uses the predefined nameservers, cf. [`predefined::name_servers`].
    pub fn predefined(opts: ResolverOpts) -> Self {
        ResolverGroup::new(predefined::name_servers(), opts)
    }

    /// Queries every nameserver for `record_type` of `domain`.
    ///
    /// Never fails: every nameserver gets an outcome in the returned report, in the order the
    /// nameservers have been configured.
    pub async fn lookup(&self, domain: &str, record_type: &str) -> LookupReport {
        let server_resolver = ServerResolver::from_system_config();
        let domain: Arc<str> = Arc::from(domain);
        let record_type: Arc<str> = Arc::from(record_type);

        let handles: Vec<_> = self
            .name_servers
            .iter()
            .map(|name_server| {
                task::spawn(lookup::single_lookup(
                    server_resolver.clone(),
                    name_server.clone(),
                    domain.clone(),
                    record_type.clone(),
                    self.opts.clone(),
                ))
            })
            .collect();

        // join_all keeps the order of the handles, so the outcomes come back in configuration order
        let outcomes: Vec<_> = join_all(handles)
            .await
            .into_iter()
            .zip(self.name_servers.iter())
            .map(|(outcome, name_server)| {
                outcome.unwrap_or_else(|err| {
                    let err = Error::from(err);
                    debug!("Lookup task for {} did not finish: {}", name_server, &err);
                    ServerOutcome::failed(name_server.clone(), err)
                })
            })
            .collect();

        LookupReport::new(outcomes)
    }

    pub fn name_servers(&self) -> &[NameServer] {
        &self.name_servers
    }

    pub fn opts(&self) -> &ResolverOpts {
        &self.opts
    }

    pub fn len(&self) -> usize {
        self.name_servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_servers.is_empty()
    }
}

/// Asks all predefined nameservers for `record_type` of `domain` using default options.
///
/// `record_type` is matched case-insensitively; pass [`DEFAULT_RECORD_TYPE`] for A records.
pub async fn lookup_all_servers(domain: &str, record_type: &str) -> LookupReport {
    ResolverGroup::predefined(ResolverOpts::default())
        .lookup(domain, record_type)
        .await
}
