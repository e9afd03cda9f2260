//! Single-shot benchmark runner.
//!
//! Creates a fresh `store.db`, populates it with synthetic retail data,
//! times the product load queries, prints the results, and deletes the
//! database file. Any error aborts the run and leaves the file behind;
//! the next run's `init_db` removes it.
//!
//! Usage:
//!   cargo run --release

use anyhow::Result;
use store_bench::populate::{generate_synthetic, populate_db};
use store_bench::query::{bench_products_full, bench_products_summary};
use store_bench::report::print_load;
use store_bench::schema::{self, BenchParams};

fn main() -> Result<()> {
    // 2,000 products, 1,000 sales — enough blob volume to separate the two
    // product loads without making the run take long.
    let params = BenchParams::standard();

    let mut conn = schema::init_db(schema::DB_PATH)?;
    let data = generate_synthetic(&params);
    populate_db(&mut conn, &data)?;

    println!("\n--- Benchmarking ---");
    let full = bench_products_full(&conn)?;
    print_load("products", &full);

    let summary = bench_products_summary(&conn)?;
    print_load("products (summary)", &summary);

    // bench_sales_range is skipped here: the correlated subquery per sale
    // row is already known slow. It stays available for cargo bench.

    conn.close().map_err(|(_, e)| e)?;
    schema::remove_db(schema::DB_PATH)?;
    Ok(())
}
