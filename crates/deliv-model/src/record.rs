use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the raw dataset, exactly as read from the CSV.
///
/// Every field is the untouched cell text: sentinel markers, stray
/// whitespace and the `"(min) N"` time encoding all survive until the
/// Normalizer runs. The source file names these columns
/// `Delivery_person_ID`, `Time_taken(min)` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOrder {
    pub order_id: String,
    pub courier_id: String,
    pub courier_age: String,
    pub courier_rating: String,
    pub restaurant_latitude: String,
    pub restaurant_longitude: String,
    pub delivery_latitude: String,
    pub delivery_longitude: String,
    pub order_date: String,
    pub weather: String,
    pub traffic: String,
    pub vehicle_condition: String,
    pub order_type: String,
    pub vehicle_type: String,
    pub multiple_deliveries: String,
    pub festival: String,
    pub city: String,
    pub time_taken: String,
}

/// The raw table: all rows of the dataset in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawOrderTable {
    pub rows: Vec<RawOrder>,
}

impl RawOrderTable {
    pub fn new(rows: Vec<RawOrder>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// One row of the cleaned table.
///
/// Produced by the Normalizer: sentinel-valued rows are gone, categorical
/// text is trimmed and the numeric/date columns carry their declared
/// types. Row order is the insertion order of the surviving raw rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Order identifier; not unique per courier.
    pub order_id: String,
    pub courier_id: String,
    pub courier_age: u32,
    /// Courier rating, typically 1.0-5.0.
    pub courier_rating: f64,
    pub restaurant_latitude: f64,
    pub restaurant_longitude: f64,
    pub delivery_latitude: f64,
    pub delivery_longitude: f64,
    pub order_date: NaiveDate,
    pub weather: String,
    /// Traffic density category: Low, Medium, High or Jam.
    pub traffic: String,
    /// Vehicle condition ordinal; 0 is worst.
    pub vehicle_condition: u8,
    pub order_type: String,
    pub vehicle_type: String,
    /// Concurrent deliveries carried with this order.
    pub multiple_deliveries: u32,
    /// Festival-day flag: "Yes" or "No".
    pub festival: String,
    /// City category: Metropolitan, Urban or Semi-Urban.
    pub city: String,
    /// Delivery time in minutes, extracted from the "(min) N" text.
    pub time_taken_min: u32,
}
