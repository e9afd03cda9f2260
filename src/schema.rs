//! Schema setup: database file lifecycle and table creation.
//!
//! The store is disposable — `init_db` unconditionally removes any existing
//! file at the target path before creating a fresh one, and the driver
//! deletes the file again after a successful run.

use anyhow::Result;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Default on-disk location for the benchmark database.
pub const DB_PATH: &str = "store.db";

/// Population sizes for a benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct BenchParams {
    pub num_products: usize,
    pub num_sales: usize,
}

impl BenchParams {
    /// Default run: 2,000 products, 1,000 sales. Enough rows for the
    /// blob-transfer cost to dominate the full product load.
    pub fn standard() -> Self {
        Self {
            num_products: 2_000,
            num_sales: 1_000,
        }
    }

    /// Small population for tests.
    pub fn small() -> Self {
        Self {
            num_products: 10,
            num_sales: 5,
        }
    }
}

/// Create the three store tables on an open connection.
///
/// No foreign-key constraints are declared; referential integrity between
/// sales, sale_items, and products is the populator's problem.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS products (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            barcode         TEXT UNIQUE,
            name            TEXT NOT NULL,
            category_id     INTEGER,
            cost_price      REAL NOT NULL DEFAULT 0.0,
            selling_price   REAL NOT NULL,
            stock           INTEGER NOT NULL DEFAULT 0,
            image_path      TEXT,
            image_blob      BLOB
        );
        CREATE TABLE IF NOT EXISTS sales (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id         INTEGER,
            subtotal        REAL DEFAULT 0.0,
            tax_amount      REAL DEFAULT 0.0,
            discount_amount REAL DEFAULT 0.0,
            total_amount    REAL NOT NULL,
            total_profit    REAL,
            sale_date       DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        CREATE TABLE IF NOT EXISTS sale_items (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            sale_id         INTEGER,
            product_id      INTEGER,
            quantity        INTEGER NOT NULL,
            price_at_sale   REAL NOT NULL,
            cost_at_sale    REAL,
            discount_amount REAL DEFAULT 0.0,
            tax_amount      REAL DEFAULT 0.0
        );
        ",
    )?;
    Ok(())
}

/// Open a fresh database at `path`: any existing file there is removed first.
/// Returns the open connection with all tables created.
pub fn init_db<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path)?;
    }

    let conn = Connection::open(path)?;
    create_tables(&conn)?;
    Ok(conn)
}

/// Remove the database file if it exists. Called on the successful
/// fall-through path only; a failed run leaves the file behind.
pub fn remove_db<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
