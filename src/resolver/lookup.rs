// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::net::UdpSocket;
use tracing::{debug, trace};

use crate::codec::{self, Response};
use crate::nameserver::{NameServer, NameServerAddress, ServerResolver};
use crate::resolver::{Error, Query, ResolverOpts};
use crate::utils::serialize::{ser_duration_ms, ser_to_string};

/// What a single nameserver answered, or why it did not.
#[derive(Debug, Clone, Serialize)]
pub struct ServerOutcome {
    #[serde(rename = "server", serialize_with = "ser_to_string")]
    name_server: NameServer,
    address: Option<Ipv4Addr>,
    result: LookupResult,
}

impl ServerOutcome {
    pub(crate) fn new(name_server: NameServer, address: Option<Ipv4Addr>, result: LookupResult) -> ServerOutcome {
        ServerOutcome {
            name_server,
            address,
            result,
        }
    }

    pub(crate) fn failed(name_server: NameServer, error: Error) -> ServerOutcome {
        ServerOutcome::new(name_server, None, LookupResult::Error(error))
    }

    pub fn name_server(&self) -> &NameServer {
        &self.name_server
    }

    /// The address the query has been sent to, if the nameserver could be resolved.
    pub fn address(&self) -> Option<Ipv4Addr> {
        self.address
    }

    pub fn result(&self) -> &LookupResult {
        &self.result
    }

    pub fn is_success(&self) -> bool {
        self.result.is_answers()
    }

    /// Presented answers; empty if the lookup failed or the server had no matching records.
    pub fn answers(&self) -> &[String] {
        self.result.answers().map(|x| x.values()).unwrap_or_default()
    }

    pub fn error(&self) -> Option<&Error> {
        self.result.err()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupResult {
    Answers(Answers),
    Error(Error),
}

impl LookupResult {
    pub fn is_answers(&self) -> bool {
        matches!(self, LookupResult::Answers { .. })
    }

    pub fn is_err(&self) -> bool {
        matches!(self, LookupResult::Error { .. })
    }

    pub fn answers(&self) -> Option<&Answers> {
        match self {
            LookupResult::Answers(ref answers) => Some(answers),
            _ => None,
        }
    }

    pub fn err(&self) -> Option<&Error> {
        match self {
            LookupResult::Error(ref err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Answers {
    values: Vec<String>,
    #[serde(rename = "response_time_ms", serialize_with = "ser_duration_ms")]
    response_time: Duration,
    truncated: bool,
}

impl Answers {
    pub(crate) fn new(values: Vec<String>, response_time: Duration, truncated: bool) -> Answers {
        Answers {
            values,
            response_time,
            truncated,
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn response_time(&self) -> &Duration {
        &self.response_time
    }

    /// Whether the server flagged the response as truncated; the answers may be incomplete.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

/// Queries one nameserver and always produces exactly one outcome.
pub(crate) async fn single_lookup(
    server_resolver: ServerResolver,
    name_server: NameServer,
    domain: Arc<str>,
    record_type: Arc<str>,
    opts: Arc<ResolverOpts>,
) -> ServerOutcome {
    let address = match server_resolver.resolve(&name_server, opts.resolve_timeout).await {
        Ok(address) => address,
        Err(err) => {
            debug!("Failed to resolve nameserver {}: {}", &name_server, &err);
            return ServerOutcome::failed(name_server, err);
        }
    };

    let result = match exchange(&address, &domain, &record_type, &opts).await {
        Ok(answers) => LookupResult::Answers(answers),
        Err(err) => LookupResult::Error(err),
    };
    debug!(
        "Lookup returned for '{}', record type {} from {}: {}",
        &domain,
        &record_type,
        &address,
        if result.is_err() { "error" } else { "ok" },
    );

    ServerOutcome::new(name_server, Some(address.ip_addr()), result)
}

/// Sends one query and waits for the response until the timeout fires.
///
/// The socket lives only as long as this future; it is closed on every path out of here,
/// including the timeout dropping the pending receive.
async fn exchange(
    address: &NameServerAddress,
    domain: &str,
    record_type: &str,
    opts: &ResolverOpts,
) -> Result<Answers, Error> {
    let query = Query::new(domain, record_type)?;
    let request = query.encode()?;

    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
    socket.connect(address.socket_addr(opts.port)).await?;

    trace!(
        "Sending query id {} for '{}', record type {} to {}.",
        query.id(),
        query.name(),
        query.record_type(),
        address
    );
    let start_time = Instant::now();
    socket.send(&request).await?;

    let response = tokio::time::timeout(opts.timeout, receive(&socket, &query, opts))
        .await
        .map_err(|_| Error::Timeout)??;

    Ok(Answers::new(
        response.answers_for(query.record_type()),
        start_time.elapsed(),
        response.truncated(),
    ))
}

async fn receive(socket: &UdpSocket, query: &Query, opts: &ResolverOpts) -> Result<Response, Error> {
    let mut buf = vec![0u8; opts.max_response_size];
    loop {
        let len = socket.recv(&mut buf).await?;
        let response = codec::decode(&buf[..len])?;
        if opts.validate_response && response.id() != query.id() {
            debug!(
                "Discarding response with id {} while waiting for id {}.",
                response.id(),
                query.id()
            );
            continue;
        }
        return Ok(response);
    }
}
