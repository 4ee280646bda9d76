// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::env;

use nscheck::resolver::DEFAULT_RECORD_TYPE;
use nscheck::{ResolverGroup, ResolverOpts};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let domain = env::args().nth(1).unwrap_or_else(|| "example.com".to_string());
    let record_type = env::args().nth(2).unwrap_or_else(|| DEFAULT_RECORD_TYPE.to_string());

    let group = ResolverGroup::predefined(ResolverOpts::default());
    let report = group.lookup(&domain, &record_type).await;

    let json = serde_json::to_string_pretty(&report).expect("failed to serialize report");
    println!("{}", json);
}
