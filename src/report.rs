// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::collections::HashSet;

use indexmap::IndexSet;
use serde::Serialize;

use crate::error::Errors;
use crate::resolver::ServerOutcome;

/// Outcomes of all nameservers plus the union of their answers.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    #[serde(rename = "servers")]
    outcomes: Vec<ServerOutcome>,
    unique_answers: IndexSet<String>,
}

impl LookupReport {
    pub fn new(outcomes: Vec<ServerOutcome>) -> LookupReport {
        let unique_answers = unique_answers(&outcomes);
        LookupReport {
            outcomes,
            unique_answers,
        }
    }

    /// One outcome per nameserver, in configuration order.
    pub fn outcomes(&self) -> &[ServerOutcome] {
        &self.outcomes
    }

    /// Distinct answers of all successful nameservers, in the order they have been seen first.
    pub fn unique_answers(&self) -> &IndexSet<String> {
        &self.unique_answers
    }

    pub fn successes(&self) -> impl Iterator<Item = &ServerOutcome> {
        self.outcomes.iter().filter(|x| x.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ServerOutcome> {
        self.outcomes.iter().filter(|x| !x.is_success())
    }

    /// True if every nameserver answered and all of them gave the same set of answers.
    ///
    /// The order of answers within a response does not matter.
    pub fn is_consistent(&self) -> bool {
        if self.failures().next().is_some() {
            return false;
        }
        let mut sets = self
            .successes()
            .map(|x| x.answers().iter().collect::<HashSet<_>>());
        match sets.next() {
            Some(first) => sets.all(|x| x == first),
            None => true,
        }
    }
}

impl Errors for LookupReport {
    fn errors(&self) -> Box<dyn Iterator<Item = Box<&dyn std::error::Error>> + '_> {
        Box::new(
            self.outcomes
                .iter()
                .flat_map(|x| x.error())
                .map(|x| Box::new(x as &dyn std::error::Error)),
        )
    }
}

fn unique_answers(outcomes: &[ServerOutcome]) -> IndexSet<String> {
    outcomes
        .iter()
        .filter(|x| x.is_success())
        .flat_map(|x| x.answers().iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use spectral::prelude::*;

    use super::*;
    use crate::nameserver::NameServer;
    use crate::resolver::{Answers, Error, LookupResult};

    fn success(server: &str, answers: &[&str]) -> ServerOutcome {
        let values = answers.iter().map(|x| x.to_string()).collect();
        ServerOutcome::new(
            NameServer::new(server),
            None,
            LookupResult::Answers(Answers::new(values, Duration::from_millis(1), false)),
        )
    }

    fn failure(server: &str) -> ServerOutcome {
        ServerOutcome::failed(NameServer::new(server), Error::Timeout)
    }

    #[test]
    fn unique_answers_keep_first_seen_order() {
        crate::utils::tests::logging::init();
        let report = LookupReport::new(vec![
            success("ns1", &["192.0.2.2", "192.0.2.1"]),
            failure("ns2"),
            success("ns3", &["192.0.2.1", "192.0.2.3"]),
        ]);

        let unique: Vec<_> = report.unique_answers().iter().cloned().collect();

        assert_that(&unique).is_equal_to(vec![
            "192.0.2.2".to_string(),
            "192.0.2.1".to_string(),
            "192.0.2.3".to_string(),
        ]);
        assert_that(&report.outcomes().len()).is_equal_to(3);
        assert_that(&report.successes().count()).is_equal_to(2);
        assert_that(&report.failures().count()).is_equal_to(1);
        assert_that(&report.errors().count()).is_equal_to(1);
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        crate::utils::tests::logging::init();
        let report = LookupReport::new(vec![
            success("ns1", &["Mail.example.com"]),
            success("ns2", &["mail.example.com"]),
        ]);

        assert_that(&report.unique_answers().len()).is_equal_to(2);
    }

    #[test]
    fn empty_answers_are_not_an_error() {
        crate::utils::tests::logging::init();
        let report = LookupReport::new(vec![success("ns1", &[]), success("ns2", &[])]);

        assert_that(&report.unique_answers().is_empty()).is_true();
        assert_that(&report.is_consistent()).is_true();
    }

    #[test]
    fn consistency() {
        crate::utils::tests::logging::init();
        let consistent = LookupReport::new(vec![
            success("ns1", &["a", "b"]),
            success("ns2", &["b", "a"]),
        ]);
        let diverging = LookupReport::new(vec![success("ns1", &["a", "b"]), success("ns2", &["a"])]);
        let failing = LookupReport::new(vec![success("ns1", &["a"]), failure("ns2")]);

        assert_that(&consistent.is_consistent()).is_true();
        assert_that(&diverging.is_consistent()).is_false();
        assert_that(&failing.is_consistent()).is_false();
    }
}
