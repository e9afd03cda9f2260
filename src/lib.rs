//! SQLite Query Latency Benchmark
//!
//! Measures how long read queries take against a local SQLite store populated
//! with synthetic retail data, as row counts grow and large binary columns
//! get involved. Each product row carries a 500 KiB image BLOB, so a full
//! `SELECT *` over products pays the blob-transfer cost for every row while
//! the summary variant (non-blob columns only) does not.
//!
//! Three query variants are timed:
//! - **Full product load**: all columns including the image blob
//! - **Summary product load**: the seven non-blob columns
//! - **Sales-in-range with detail**: a year of sales with a correlated
//!   subquery concatenating line-item details per sale
//!
//! Run the single-shot harness: `cargo run --release`
//! Run benchmarks: `cargo bench`
//! Run tests: `cargo test`

pub mod populate;
pub mod query;
pub mod report;
pub mod schema;
