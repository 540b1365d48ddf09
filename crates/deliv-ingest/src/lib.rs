//! Dataset ingestion: bulk CSV loading into the raw order table.

pub mod csv_orders;

pub use csv_orders::load_orders;
