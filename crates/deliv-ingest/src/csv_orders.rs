use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::StringRecord;
use tracing::debug;

use deliv_model::{RawOrder, RawOrderTable};

/// Dataset headers consumed by the pipeline. The raw file carries a few
/// more (`Time_Orderd`, `Time_Order_picked`); those are ignored here.
const COLUMN_ID: &str = "ID";
const COLUMN_COURIER_ID: &str = "Delivery_person_ID";
const COLUMN_COURIER_AGE: &str = "Delivery_person_Age";
const COLUMN_COURIER_RATING: &str = "Delivery_person_Ratings";
const COLUMN_RESTAURANT_LAT: &str = "Restaurant_latitude";
const COLUMN_RESTAURANT_LON: &str = "Restaurant_longitude";
const COLUMN_DELIVERY_LAT: &str = "Delivery_location_latitude";
const COLUMN_DELIVERY_LON: &str = "Delivery_location_longitude";
const COLUMN_ORDER_DATE: &str = "Order_Date";
const COLUMN_WEATHER: &str = "Weatherconditions";
const COLUMN_TRAFFIC: &str = "Road_traffic_density";
const COLUMN_VEHICLE_CONDITION: &str = "Vehicle_condition";
const COLUMN_ORDER_TYPE: &str = "Type_of_order";
const COLUMN_VEHICLE_TYPE: &str = "Type_of_vehicle";
const COLUMN_MULTIPLE_DELIVERIES: &str = "multiple_deliveries";
const COLUMN_FESTIVAL: &str = "Festival";
const COLUMN_CITY: &str = "City";
const COLUMN_TIME_TAKEN: &str = "Time_taken(min)";

/// Positions of the consumed columns in the source header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    order_id: usize,
    courier_id: usize,
    courier_age: usize,
    courier_rating: usize,
    restaurant_latitude: usize,
    restaurant_longitude: usize,
    delivery_latitude: usize,
    delivery_longitude: usize,
    order_date: usize,
    weather: usize,
    traffic: usize,
    vehicle_condition: usize,
    order_type: usize,
    vehicle_type: usize,
    multiple_deliveries: usize,
    festival: usize,
    city: usize,
    time_taken: usize,
}

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn find_column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| normalize_header(header) == name)
        .with_context(|| format!("missing column {name:?} in dataset header"))
}

fn resolve_columns(headers: &StringRecord) -> Result<ColumnIndices> {
    Ok(ColumnIndices {
        order_id: find_column(headers, COLUMN_ID)?,
        courier_id: find_column(headers, COLUMN_COURIER_ID)?,
        courier_age: find_column(headers, COLUMN_COURIER_AGE)?,
        courier_rating: find_column(headers, COLUMN_COURIER_RATING)?,
        restaurant_latitude: find_column(headers, COLUMN_RESTAURANT_LAT)?,
        restaurant_longitude: find_column(headers, COLUMN_RESTAURANT_LON)?,
        delivery_latitude: find_column(headers, COLUMN_DELIVERY_LAT)?,
        delivery_longitude: find_column(headers, COLUMN_DELIVERY_LON)?,
        order_date: find_column(headers, COLUMN_ORDER_DATE)?,
        weather: find_column(headers, COLUMN_WEATHER)?,
        traffic: find_column(headers, COLUMN_TRAFFIC)?,
        vehicle_condition: find_column(headers, COLUMN_VEHICLE_CONDITION)?,
        order_type: find_column(headers, COLUMN_ORDER_TYPE)?,
        vehicle_type: find_column(headers, COLUMN_VEHICLE_TYPE)?,
        multiple_deliveries: find_column(headers, COLUMN_MULTIPLE_DELIVERIES)?,
        festival: find_column(headers, COLUMN_FESTIVAL)?,
        city: find_column(headers, COLUMN_CITY)?,
        time_taken: find_column(headers, COLUMN_TIME_TAKEN)?,
    })
}

// Cells are kept verbatim: the missing-value sentinel carries a trailing
// space and categorical trimming belongs to the Normalizer, so any
// cleanup here would change what downstream stages observe.
fn cell(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").to_string()
}

/// Load the delivery events CSV wholesale into a raw text table.
///
/// No type coercion happens here; a missing required header is the only
/// schema error this stage can report.
pub fn load_orders(path: &Path) -> Result<RawOrderTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read header: {}", path.display()))?
        .clone();
    if headers.is_empty() {
        bail!("empty dataset: {}", path.display());
    }
    let columns = resolve_columns(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        rows.push(RawOrder {
            order_id: cell(&record, columns.order_id),
            courier_id: cell(&record, columns.courier_id),
            courier_age: cell(&record, columns.courier_age),
            courier_rating: cell(&record, columns.courier_rating),
            restaurant_latitude: cell(&record, columns.restaurant_latitude),
            restaurant_longitude: cell(&record, columns.restaurant_longitude),
            delivery_latitude: cell(&record, columns.delivery_latitude),
            delivery_longitude: cell(&record, columns.delivery_longitude),
            order_date: cell(&record, columns.order_date),
            weather: cell(&record, columns.weather),
            traffic: cell(&record, columns.traffic),
            vehicle_condition: cell(&record, columns.vehicle_condition),
            order_type: cell(&record, columns.order_type),
            vehicle_type: cell(&record, columns.vehicle_type),
            multiple_deliveries: cell(&record, columns.multiple_deliveries),
            festival: cell(&record, columns.festival),
            city: cell(&record, columns.city),
            time_taken: cell(&record, columns.time_taken),
        });
    }
    debug!(rows = rows.len(), path = %path.display(), "loaded raw orders");
    Ok(RawOrderTable::new(rows))
}
