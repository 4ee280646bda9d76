// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! nscheck asks every nameserver of a provider fleet the same question and reports what each of
//! them answered.
//!
//! Every nameserver gets exactly one UDP query with its own timeout. Failures stay local to the
//! server they happened on, so the resulting [`LookupReport`] always has one outcome per
//! configured nameserver plus the de-duplicated union of all answers.
//!
//! # Example
//! ```no_run
//! # async fn run() {
//! let report = nscheck::lookup_all_servers("example.com", "MX").await;
//! for answer in report.unique_answers() {
//!     println!("{}", answer);
//! }
//! # }
//! ```

pub use error::Error;
pub use report::LookupReport;
pub use resolver::{lookup_all_servers, ResolverGroup, ResolverOpts, ServerOutcome};
pub use resources::RecordType;

pub mod codec;
pub mod error;
pub mod nameserver;
pub mod report;
pub mod resolver;
pub mod resources;
pub mod utils;

pub type Result<T> = std::result::Result<T, Error>;
