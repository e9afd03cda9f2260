//! Integration tests: verify schema creation, population, and query results.

use chrono::{Duration, Local};
use rusqlite::Connection;
use store_bench::populate::{generate_synthetic, populate_db, IMAGE_BLOB_BYTES};
use store_bench::query::{
    bench_products_full, bench_products_summary, fetch_products_full, fetch_products_summary,
    fetch_sales_in_range,
};
use store_bench::schema::{create_tables, init_db, remove_db, BenchParams};

fn setup_and_populate(params: &BenchParams) -> Connection {
    let mut conn = Connection::open_in_memory().expect("open");
    create_tables(&conn).expect("create_tables");

    let data = generate_synthetic(params);
    populate_db(&mut conn, &data).expect("populate");
    conn
}

/// Date range wide enough to cover every generated sale regardless of when
/// within the test the clock is sampled.
fn covering_range() -> (String, String) {
    let now = Local::now();
    let start = now - Duration::days(366);
    (
        start.format("%Y-%m-%d %H:%M:%S").to_string(),
        now.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

#[test]
fn populate_row_counts() {
    let params = BenchParams::small();
    let conn = setup_and_populate(&params);

    let product_count: usize = conn
        .query_row("SELECT COUNT(*) FROM products", [], |r| r.get(0))
        .unwrap();
    assert_eq!(product_count, params.num_products);

    let sale_count: usize = conn
        .query_row("SELECT COUNT(*) FROM sales", [], |r| r.get(0))
        .unwrap();
    assert_eq!(sale_count, params.num_sales);

    // 1..=5 items per sale
    let item_count: usize = conn
        .query_row("SELECT COUNT(*) FROM sale_items", [], |r| r.get(0))
        .unwrap();
    assert!(item_count >= params.num_sales);
    assert!(item_count <= params.num_sales * 5);
}

#[test]
fn every_product_carries_the_full_blob() {
    let conn = setup_and_populate(&BenchParams::small());

    let products = fetch_products_full(&conn).unwrap();
    assert_eq!(products.len(), 10);
    for p in &products {
        let blob = p.image_blob.as_ref().expect("image_blob populated");
        assert_eq!(blob.len(), IMAGE_BLOB_BYTES);
        assert_eq!(blob.len(), 512_000);
    }
}

#[test]
fn barcodes_are_sequential_and_unique() {
    let conn = setup_and_populate(&BenchParams::small());

    let products = fetch_products_full(&conn).unwrap();
    for (i, p) in products.iter().enumerate() {
        assert_eq!(p.barcode, format!("BC{i}"));
        assert_eq!(p.name, format!("Product {i}"));
    }
}

#[test]
fn sale_items_reference_valid_ids() {
    let params = BenchParams::small();
    let conn = setup_and_populate(&params);

    let (min_sale, max_sale, min_product, max_product): (i64, i64, i64, i64) = conn
        .query_row(
            "SELECT MIN(sale_id), MAX(sale_id), MIN(product_id), MAX(product_id)
             FROM sale_items",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
        )
        .unwrap();

    assert!(min_sale >= 1);
    assert!(max_sale <= params.num_sales as i64);
    assert!(min_product >= 1);
    assert!(max_product <= params.num_products as i64);
}

#[test]
fn summary_matches_full_row_count() {
    let conn = setup_and_populate(&BenchParams::small());

    let full = fetch_products_full(&conn).unwrap();
    let summary = fetch_products_summary(&conn).unwrap();
    assert_eq!(full.len(), summary.len());
}

#[test]
fn full_query_is_nine_columns_summary_is_seven() {
    let conn = setup_and_populate(&BenchParams::small());

    let full = conn.prepare("SELECT * FROM products").unwrap();
    assert_eq!(full.column_count(), 9);

    let summary = conn
        .prepare(
            "SELECT id, barcode, name, category_id, cost_price, selling_price, stock
             FROM products",
        )
        .unwrap();
    assert_eq!(summary.column_count(), 7);
}

#[test]
fn sale_dates_fall_within_the_past_year() {
    let conn = setup_and_populate(&BenchParams::small());

    let (earliest, latest) = covering_range();
    let mut stmt = conn.prepare("SELECT sale_date FROM sales").unwrap();
    let dates: Vec<String> = stmt
        .query_map([], |r| r.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(dates.len(), 5);

    // %Y-%m-%d %H:%M:%S strings compare chronologically
    for d in &dates {
        assert!(*d >= earliest, "sale_date {d} before {earliest}");
        assert!(*d <= latest, "sale_date {d} after {latest}");
    }
}

#[test]
fn sales_range_returns_all_sales_newest_first() {
    let params = BenchParams::small();
    let conn = setup_and_populate(&params);

    let (start, end) = covering_range();
    let sales = fetch_sales_in_range(&conn, &start, &end).unwrap();
    assert_eq!(sales.len(), params.num_sales);

    for pair in sales.windows(2) {
        assert!(pair[0].sale_date >= pair[1].sale_date);
    }

    for sale in &sales {
        let details = sale.details.as_ref().expect("every sale has line items");
        for part in details.split(", ") {
            assert!(part.starts_with("Product "), "unexpected detail: {part}");
            assert!(part.ends_with("(x1)"), "unexpected detail: {part}");
        }
    }
}

#[test]
fn init_db_replaces_any_existing_file() {
    let path = std::env::temp_dir().join(format!("store_bench_test_{}.db", std::process::id()));

    let conn = init_db(&path).unwrap();
    assert!(path.exists());
    conn.execute(
        "INSERT INTO products (barcode, name, selling_price) VALUES ('BC0', 'Product 0', 20.0)",
        [],
    )
    .unwrap();
    conn.close().map_err(|(_, e)| e).unwrap();

    // Re-init wipes the previous file: the leftover row must be gone.
    let conn = init_db(&path).unwrap();
    let count: usize = conn
        .query_row("SELECT COUNT(*) FROM products", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
    conn.close().map_err(|(_, e)| e).unwrap();

    remove_db(&path).unwrap();
    assert!(!path.exists());
    // Removing an already-absent file is fine.
    remove_db(&path).unwrap();
}

/// Blob transfer must dominate: the full load has to be slower than the
/// summary load at 2,000 products. Builds ~1 GiB of blob data in memory,
/// so it only runs with `cargo test -- --ignored`.
#[test]
#[ignore]
fn full_load_is_slower_than_summary_at_scale() {
    let params = BenchParams {
        num_products: 2_000,
        num_sales: 0,
    };
    let conn = setup_and_populate(&params);

    let full = bench_products_full(&conn).unwrap();
    let summary = bench_products_summary(&conn).unwrap();

    assert_eq!(full.rows, 2_000);
    assert_eq!(summary.rows, 2_000);
    assert!(
        full.elapsed > summary.elapsed,
        "full load ({:?}) should exceed summary load ({:?})",
        full.elapsed,
        summary.elapsed
    );
}
