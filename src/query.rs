//! Timed query benchmarks and their row types.
//!
//! Each fetch fully materializes the result set into typed rows; the bench
//! wrappers bracket execute-through-materialize with a wall clock, so a
//! timing covers exactly one blocking query plus in-process row building.

use crate::report::QueryTiming;
use anyhow::Result;
use chrono::{Duration, Local};
use rusqlite::Connection;
use std::time::Instant;

/// Full product row: all nine columns, blob included.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: i64,
    pub barcode: String,
    pub name: String,
    pub category_id: Option<i64>,
    pub cost_price: f64,
    pub selling_price: f64,
    pub stock: i64,
    pub image_path: Option<String>,
    pub image_blob: Option<Vec<u8>>,
}

/// Summary product row: the seven non-blob columns.
#[derive(Debug, Clone)]
pub struct ProductSummary {
    pub id: i64,
    pub barcode: String,
    pub name: String,
    pub category_id: Option<i64>,
    pub cost_price: f64,
    pub selling_price: f64,
    pub stock: i64,
}

/// A sale joined with a concatenated description of its line items,
/// e.g. `"Product 3 (x1), Product 17 (x1)"`.
#[derive(Debug, Clone)]
pub struct SaleWithDetails {
    pub id: i64,
    pub user_id: Option<i64>,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub total_amount: f64,
    pub total_profit: Option<f64>,
    pub sale_date: String,
    pub details: Option<String>,
}

/// `SELECT *` over products — every row pays the image-blob transfer cost.
pub fn fetch_products_full(conn: &Connection) -> Result<Vec<ProductRow>> {
    let mut stmt = conn.prepare("SELECT * FROM products")?;
    let rows = stmt.query_map([], |row| {
        Ok(ProductRow {
            id: row.get(0)?,
            barcode: row.get(1)?,
            name: row.get(2)?,
            category_id: row.get(3)?,
            cost_price: row.get(4)?,
            selling_price: row.get(5)?,
            stock: row.get(6)?,
            image_path: row.get(7)?,
            image_blob: row.get(8)?,
        })
    })?;

    let mut products = Vec::new();
    for r in rows {
        products.push(r?);
    }
    Ok(products)
}

/// Non-blob product columns only — isolates query cost from blob transfer.
pub fn fetch_products_summary(conn: &Connection) -> Result<Vec<ProductSummary>> {
    let mut stmt = conn.prepare(
        "SELECT id, barcode, name, category_id, cost_price, selling_price, stock
         FROM products",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ProductSummary {
            id: row.get(0)?,
            barcode: row.get(1)?,
            name: row.get(2)?,
            category_id: row.get(3)?,
            cost_price: row.get(4)?,
            selling_price: row.get(5)?,
            stock: row.get(6)?,
        })
    })?;

    let mut products = Vec::new();
    for r in rows {
        products.push(r?);
    }
    Ok(products)
}

/// Sales within `[start, end]` (inclusive, `%Y-%m-%d %H:%M:%S` strings),
/// newest first, each with a correlated subquery concatenating its line
/// items as `{product name} (x{quantity})` pairs joined by `, `.
pub fn fetch_sales_in_range(
    conn: &Connection,
    start: &str,
    end: &str,
) -> Result<Vec<SaleWithDetails>> {
    let mut stmt = conn.prepare(
        "SELECT s.*,
                (SELECT GROUP_CONCAT(p.name || ' (x' || si.quantity || ')', ', ')
                 FROM sale_items si JOIN products p ON si.product_id = p.id
                 WHERE si.sale_id = s.id) AS details
         FROM sales s
         WHERE s.sale_date >= ?1 AND s.sale_date <= ?2
         ORDER BY s.sale_date DESC",
    )?;
    let rows = stmt.query_map([start, end], |row| {
        Ok(SaleWithDetails {
            id: row.get(0)?,
            user_id: row.get(1)?,
            subtotal: row.get(2)?,
            tax_amount: row.get(3)?,
            discount_amount: row.get(4)?,
            total_amount: row.get(5)?,
            total_profit: row.get(6)?,
            sale_date: row.get(7)?,
            details: row.get(8)?,
        })
    })?;

    let mut sales = Vec::new();
    for r in rows {
        sales.push(r?);
    }
    Ok(sales)
}

/// The date range covered by the sales benchmark: [now − 365 days, now].
pub fn year_range() -> (String, String) {
    let now = Local::now();
    let start = now - Duration::days(365);
    (
        start.format("%Y-%m-%d %H:%M:%S").to_string(),
        now.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

/// Time a full product load (blobs included).
pub fn bench_products_full(conn: &Connection) -> Result<QueryTiming> {
    let start = Instant::now();
    let products = fetch_products_full(conn)?;
    Ok(QueryTiming::new(products.len(), start.elapsed()))
}

/// Time a summary product load (non-blob columns only).
pub fn bench_products_summary(conn: &Connection) -> Result<QueryTiming> {
    let start = Instant::now();
    let products = fetch_products_summary(conn)?;
    Ok(QueryTiming::new(products.len(), start.elapsed()))
}

/// Time a year of sales with joined line-item detail. The correlated
/// subquery runs once per sale row, making this the most expensive query.
pub fn bench_sales_range(conn: &Connection) -> Result<QueryTiming> {
    let (start_date, end_date) = year_range();
    let start = Instant::now();
    let sales = fetch_sales_in_range(conn, &start_date, &end_date)?;
    Ok(QueryTiming::new(sales.len(), start.elapsed()))
}
