/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

//! shared infrastructure for the LST/AOD period aggregation crates: calendar date ranges, region geometry,
//! simple statistics accumulators, RON config loading and the CLI / tracing setup used by our binaries

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod macros;
pub mod errors;
pub mod datetime;
pub mod geo;
pub mod fs;
pub mod stats;
pub mod config;

pub use errors::{LstAodCommonError, Result};

/// default log filter if RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// initialize a global tracing subscriber that writes to stderr and honors RUST_LOG.
/// Calling this more than once is harmless (subsequent calls are ignored)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with( fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with( filter)
        .try_init();
}
