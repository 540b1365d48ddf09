//! The Normalizer: raw text table in, typed cleaned table out.
//!
//! Every dashboard view cleans its data through this one routine; there
//! is deliberately no per-view variant of it.

use chrono::NaiveDate;
use tracing::debug;

use deliv_model::{DelivError, DeliveryRecord, RawOrder, RawOrderTable, Result};

/// Literal placeholder the raw data uses in place of a true null.
/// The trailing space is part of the marker.
pub const MISSING_SENTINEL: &str = "NaN ";

/// Fixed day-month-year format of the `Order_Date` column.
pub const ORDER_DATE_FORMAT: &str = "%d-%m-%Y";

/// Marker text preceding the minutes value in `Time_taken(min)` cells.
const TIME_TAKEN_MARKER: &str = "(min)";

/// Sentinel-aware view of a raw cell: sentinel text means absent.
fn present(cell: &str) -> Option<&str> {
    (cell != MISSING_SENTINEL).then_some(cell)
}

/// A row survives cleaning only when none of these columns is absent.
fn row_is_complete(row: &RawOrder) -> bool {
    [
        &row.courier_rating,
        &row.weather,
        &row.traffic,
        &row.multiple_deliveries,
        &row.festival,
        &row.city,
        &row.courier_age,
    ]
    .into_iter()
    .all(|cell| present(cell).is_some())
}

/// Clean the raw table into typed delivery records.
///
/// Sentinel-valued rows are dropped, categorical text is trimmed, and
/// numeric/date columns are coerced to their declared types. Surviving
/// rows keep their relative order with indices renumbered contiguously.
///
/// # Errors
///
/// Fails only when a surviving row defeats type coercion; the error
/// names the offending column and the 1-based data row. Cleaning is
/// expected to remove every unparseable row up front, so this path
/// signals a dataset that violates its schema rather than a normal
/// outcome.
pub fn normalize(table: &RawOrderTable) -> Result<Vec<DeliveryRecord>> {
    let mut records = Vec::with_capacity(table.rows.len());
    let mut dropped = 0usize;
    for (index, row) in table.rows.iter().enumerate() {
        if !row_is_complete(row) {
            dropped += 1;
            continue;
        }
        records.push(coerce_row(row, index + 1)?);
    }
    debug!(kept = records.len(), dropped, "normalized raw orders");
    Ok(records)
}

fn coerce_row(row: &RawOrder, row_number: usize) -> Result<DeliveryRecord> {
    Ok(DeliveryRecord {
        order_id: row.order_id.clone(),
        courier_id: row.courier_id.trim().to_string(),
        courier_age: parse_int(&row.courier_age, "Delivery_person_Age", row_number)?,
        courier_rating: parse_float(&row.courier_rating, "Delivery_person_Ratings", row_number)?,
        restaurant_latitude: parse_float(
            &row.restaurant_latitude,
            "Restaurant_latitude",
            row_number,
        )?,
        restaurant_longitude: parse_float(
            &row.restaurant_longitude,
            "Restaurant_longitude",
            row_number,
        )?,
        delivery_latitude: parse_float(
            &row.delivery_latitude,
            "Delivery_location_latitude",
            row_number,
        )?,
        delivery_longitude: parse_float(
            &row.delivery_longitude,
            "Delivery_location_longitude",
            row_number,
        )?,
        order_date: parse_date(&row.order_date, row_number)?,
        weather: row.weather.trim().to_string(),
        traffic: row.traffic.trim().to_string(),
        vehicle_condition: parse_int(&row.vehicle_condition, "Vehicle_condition", row_number)?,
        order_type: row.order_type.trim().to_string(),
        vehicle_type: row.vehicle_type.trim().to_string(),
        multiple_deliveries: parse_int(
            &row.multiple_deliveries,
            "multiple_deliveries",
            row_number,
        )?,
        festival: row.festival.trim().to_string(),
        city: row.city.trim().to_string(),
        time_taken_min: parse_time_taken(&row.time_taken, row_number)?,
    })
}

fn parse_int<T: std::str::FromStr>(cell: &str, column: &'static str, row: usize) -> Result<T> {
    cell.trim().parse().map_err(|_| DelivError::Coerce {
        row,
        column,
        message: format!("invalid integer {cell:?}"),
    })
}

fn parse_float(cell: &str, column: &'static str, row: usize) -> Result<f64> {
    cell.trim().parse().map_err(|_| DelivError::Coerce {
        row,
        column,
        message: format!("invalid number {cell:?}"),
    })
}

fn parse_date(cell: &str, row: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(cell.trim(), ORDER_DATE_FORMAT).map_err(|error| {
        DelivError::Coerce {
            row,
            column: "Order_Date",
            message: format!("invalid date {cell:?}: {error}"),
        }
    })
}

/// Extract the minutes from text of the form "(min) N" or "(min)N".
fn parse_time_taken(cell: &str, row: usize) -> Result<u32> {
    let minutes = cell
        .split_once(TIME_TAKEN_MARKER)
        .map(|(_, rest)| rest)
        .ok_or_else(|| DelivError::Coerce {
            row,
            column: "Time_taken(min)",
            message: format!("missing {TIME_TAKEN_MARKER:?} marker in {cell:?}"),
        })?;
    parse_int(minutes, "Time_taken(min)", row)
}
