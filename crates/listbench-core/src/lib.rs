//! Benchmark state and operations for comparing list implementations.
//!
//! This is the leaf crate of the `listbench` workspace. It owns everything
//! the harness measures, but none of the measuring:
//!
//! - [`BenchmarkSuite`]: an array-backed list and a linked list, both seeded
//!   with `[0..9]`, plus the fixed probe value.
//! - [`Operation`] / [`Outcome`]: the six measured operations and their
//!   results, for uniform dispatch and include-pattern discovery.
//! - [`HarnessConfig`]: the fixed single-shot warmup/measurement settings
//!   handed to the external harness.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod operation;
pub mod suite;

pub use config::{BatchConfig, ConfigError, HarnessConfig, TimeMode, TimeUnit};
pub use operation::{Operation, Outcome, SUITE_NAME};
pub use suite::{BenchmarkSuite, DEFAULT_PROBE, SEED_LEN};
