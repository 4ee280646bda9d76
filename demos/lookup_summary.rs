// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Usage: `cargo run --example lookup_summary -- example.com MX`

use std::env;

use tracing_subscriber::EnvFilter;

use nscheck::resolver::DEFAULT_RECORD_TYPE;
use nscheck::{lookup_all_servers, ServerOutcome};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let domain = env::args().nth(1).unwrap_or_else(|| "example.com".to_string());
    let record_type = env::args().nth(2).unwrap_or_else(|| DEFAULT_RECORD_TYPE.to_string());

    let report = lookup_all_servers(&domain, &record_type).await;

    println!("Unique answers for {} {}:", domain, record_type.to_uppercase());
    for answer in report.unique_answers() {
        println!("  {}", answer);
    }

    println!();
    for outcome in report.outcomes() {
        println!("{}", summary(outcome));
    }

    if report.is_consistent() {
        println!("\nAll {} nameservers agree.", report.outcomes().len());
    } else {
        println!(
            "\n{} of {} nameservers answered; the answers differ or some failed.",
            report.successes().count(),
            report.outcomes().len()
        );
    }
}

fn summary(outcome: &ServerOutcome) -> String {
    match (outcome.result().answers(), outcome.error()) {
        (Some(answers), _) => format!(
            "* {} ({} ms): {}",
            outcome.name_server(),
            answers.response_time().as_millis(),
            answers.values().join(", ")
        ),
        (None, Some(err)) => format!("! {}: {}", outcome.name_server(), err),
        (None, None) => format!("? {}", outcome.name_server()),
    }
}
