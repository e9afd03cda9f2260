//! Data population: generates synthetic retail rows and bulk-inserts them.
//!
//! Uses a fixed seed for deterministic, reproducible benchmarks. Products,
//! sales, and sale line items are generated up front, then inserted via
//! prepared statements inside transactions: products as one batch/commit,
//! sales and sale_items together as a second batch/commit.

use crate::schema::BenchParams;
use anyhow::Result;
use chrono::{Duration, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::{params, Connection, Transaction};

/// Size of the dummy product image blob: 500 KiB of zero bytes.
pub const IMAGE_BLOB_BYTES: usize = 500 * 1024;

/// Exclusive upper bound for random sale-date offsets (one year in seconds).
const YEAR_SECONDS: i64 = 365 * 24 * 3600;

/// Synthetic product row (blob excluded — all products share one blob).
#[derive(Debug, Clone)]
pub struct ProductSeed {
    pub barcode: String,
    pub name: String,
    pub category_id: i64,
    pub cost_price: f64,
    pub selling_price: f64,
    pub stock: i64,
}

/// Synthetic sale row. `sale_date` is preformatted `%Y-%m-%d %H:%M:%S`.
#[derive(Debug, Clone)]
pub struct SaleSeed {
    pub user_id: i64,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub total_amount: f64,
    pub total_profit: f64,
    pub sale_date: String,
}

/// Synthetic sale line item referencing a sale and a product by id.
#[derive(Debug, Clone)]
pub struct SaleItemSeed {
    pub sale_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price_at_sale: f64,
    pub cost_at_sale: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
}

/// All rows needed to populate a store database.
pub struct StoreData {
    pub products: Vec<ProductSeed>,
    /// Shared image payload, bound once per product row at insert time.
    pub image_blob: Vec<u8>,
    pub sales: Vec<SaleSeed>,
    pub sale_items: Vec<SaleItemSeed>,
}

/// Generate synthetic store data for the given population sizes.
///
/// Product i gets barcode `BC{i}` and name `Product {i}` with fixed prices
/// and stock. Sale dates are uniform-random within the 365 days preceding
/// now, at second resolution; sales are kept in index order, so on-disk
/// order does not match chronological order. Each sale gets 1–5 line items
/// referencing uniform-random products.
pub fn generate_synthetic(params: &BenchParams) -> StoreData {
    let mut rng = StdRng::seed_from_u64(0xC0FF_EE00_5EED_0001);

    let products = (0..params.num_products)
        .map(|i| ProductSeed {
            barcode: format!("BC{i}"),
            name: format!("Product {i}"),
            category_id: 1,
            cost_price: 10.0,
            selling_price: 20.0,
            stock: 100,
        })
        .collect();

    let start_date = Local::now() - Duration::days(365);

    let mut sales = Vec::with_capacity(params.num_sales);
    let mut sale_items = Vec::with_capacity(params.num_sales * 3);
    for i in 0..params.num_sales {
        let sale_date = start_date + Duration::seconds(rng.gen_range(0..YEAR_SECONDS));
        sales.push(SaleSeed {
            user_id: 1,
            subtotal: 100.0,
            tax_amount: 10.0,
            discount_amount: 0.0,
            total_amount: 110.0,
            total_profit: 50.0,
            sale_date: sale_date.format("%Y-%m-%d %H:%M:%S").to_string(),
        });

        // sale_id assumes rowids are assigned 1..=num_sales in insertion
        // order with no gaps. Holds for a fresh AUTOINCREMENT table with a
        // single writer; would break under parallel inserts or retries.
        for _ in 0..rng.gen_range(1..=5) {
            sale_items.push(SaleItemSeed {
                sale_id: (i + 1) as i64,
                product_id: rng.gen_range(1..=params.num_products) as i64,
                quantity: 1,
                price_at_sale: 20.0,
                cost_at_sale: 10.0,
                discount_amount: 0.0,
                tax_amount: 2.0,
            });
        }
    }

    StoreData {
        products,
        image_blob: vec![0u8; IMAGE_BLOB_BYTES],
        sales,
        sale_items,
    }
}

fn insert_products(tx: &Transaction, products: &[ProductSeed], image_blob: &[u8]) -> Result<()> {
    let mut stmt = tx.prepare(
        "INSERT INTO products (barcode, name, category_id, cost_price, selling_price, stock, image_blob)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for p in products {
        stmt.execute(params![
            p.barcode,
            p.name,
            p.category_id,
            p.cost_price,
            p.selling_price,
            p.stock,
            image_blob,
        ])?;
    }
    Ok(())
}

fn insert_sales(tx: &Transaction, sales: &[SaleSeed]) -> Result<()> {
    let mut stmt = tx.prepare(
        "INSERT INTO sales (user_id, subtotal, tax_amount, discount_amount, total_amount, total_profit, sale_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for s in sales {
        stmt.execute(params![
            s.user_id,
            s.subtotal,
            s.tax_amount,
            s.discount_amount,
            s.total_amount,
            s.total_profit,
            s.sale_date,
        ])?;
    }
    Ok(())
}

fn insert_sale_items(tx: &Transaction, items: &[SaleItemSeed]) -> Result<()> {
    let mut stmt = tx.prepare(
        "INSERT INTO sale_items (sale_id, product_id, quantity, price_at_sale, cost_at_sale, discount_amount, tax_amount)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for it in items {
        stmt.execute(params![
            it.sale_id,
            it.product_id,
            it.quantity,
            it.price_at_sale,
            it.cost_at_sale,
            it.discount_amount,
            it.tax_amount,
        ])?;
    }
    Ok(())
}

/// Bulk-insert all generated rows.
///
/// Products are one batch with its own commit; sales and sale_items are two
/// batches under a single commit. A failed row aborts its whole batch.
pub fn populate_db(conn: &mut Connection, data: &StoreData) -> Result<()> {
    println!("Populating {} products...", data.products.len());
    let tx = conn.transaction()?;
    insert_products(&tx, &data.products, &data.image_blob)?;
    tx.commit()?;

    println!("Populating {} sales...", data.sales.len());
    let tx = conn.transaction()?;
    insert_sales(&tx, &data.sales)?;
    insert_sale_items(&tx, &data.sale_items)?;
    tx.commit()?;

    Ok(())
}
