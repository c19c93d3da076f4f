//! Rendering of rows for the terminal: a comfy-table by default, JSON with
//! `--json`.

use catalog_core::{Category, CategorySellerCount, Product, Seller, SellerProduct, Timed, TopCategory};
use catalog_db::SampleReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::Serialize;

/// A row type that can be printed as a table line.
pub trait TableRow {
    fn header() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Category {
    fn header() -> Vec<&'static str> {
        vec!["category_id", "name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.category_id.to_string(), self.name.clone()]
    }
}

impl TableRow for Seller {
    fn header() -> Vec<&'static str> {
        vec!["seller_id", "name", "number"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.seller_id.to_string(),
            self.name.clone(),
            self.number.to_string(),
        ]
    }
}

impl TableRow for Product {
    fn header() -> Vec<&'static str> {
        vec!["product_id", "name", "category_id", "seller_id"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.product_id.to_string(),
            self.name.clone(),
            self.category_id.to_string(),
            self.seller_id.to_string(),
        ]
    }
}

impl TableRow for TopCategory {
    fn header() -> Vec<&'static str> {
        vec!["category", "product_count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.product_count.to_string()]
    }
}

impl TableRow for SellerProduct {
    fn header() -> Vec<&'static str> {
        vec!["seller", "product_id", "product"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.seller_name.clone(),
            self.product_id.to_string(),
            self.product_name.clone(),
        ]
    }
}

impl TableRow for CategorySellerCount {
    fn header() -> Vec<&'static str> {
        vec!["category", "seller", "product_count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.category_name.clone(),
            self.seller_name.clone(),
            self.product_count.to_string(),
        ]
    }
}

impl TableRow for SampleReport {
    fn header() -> Vec<&'static str> {
        vec!["categories", "sellers", "products"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            format!("+{}", self.categories),
            format!("+{}", self.sellers),
            format!("+{}", self.products),
        ]
    }
}

/// Builds a table for `rows`.
pub fn table<T: TableRow>(rows: &[T]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(T::header());
    for row in rows {
        table.add_row(row.cells());
    }
    table
}

/// Prints entity rows.
pub fn print_rows<T>(rows: &[T], json: bool) -> anyhow::Result<()>
where
    T: TableRow + Serialize,
{
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        println!("{}", table(rows));
        println!("{} row(s)", rows.len());
    }
    Ok(())
}

/// Prints a single value (an inserted row, a sample report, ...).
pub fn print_value<T>(value: &T, json: bool) -> anyhow::Result<()>
where
    T: TableRow + Serialize,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", table(std::slice::from_ref(value)));
    }
    Ok(())
}

/// Prints report rows followed by the query latency.
pub fn print_timed<T>(timed: &Timed<T>, json: bool) -> anyhow::Result<()>
where
    T: TableRow + Serialize,
{
    if json {
        println!("{}", serde_json::to_string_pretty(timed)?);
    } else {
        println!("{}", table(&timed.rows));
        println!("{} row(s) in {:.3} ms", timed.len(), timed.elapsed_ms);
    }
    Ok(())
}
