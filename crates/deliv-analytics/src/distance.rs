//! Great-circle distances between restaurants and delivery locations.

use std::collections::BTreeMap;

use serde::Serialize;

use deliv_model::DeliveryRecord;

use crate::stats;

/// Earth mean radius in kilometers (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine great-circle distance between two (lat, lon) pairs in
/// degrees, returned in kilometers.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

fn delivery_distance_km(record: &DeliveryRecord) -> f64 {
    haversine_km(
        record.restaurant_latitude,
        record.restaurant_longitude,
        record.delivery_latitude,
        record.delivery_longitude,
    )
}

/// Mean restaurant-to-delivery distance over the filtered table, rounded
/// to two decimals. `None` when no rows survive the filters.
pub fn mean_delivery_distance(records: &[DeliveryRecord]) -> Option<f64> {
    let distances: Vec<f64> = records.iter().map(delivery_distance_km).collect();
    stats::mean(&distances).map(stats::round2)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityDistance {
    pub city: String,
    pub mean_distance_km: f64,
}

/// Mean delivery distance per city, for chart rendering.
pub fn mean_delivery_distance_by_city(records: &[DeliveryRecord]) -> Vec<CityDistance> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.city.as_str())
            .or_default()
            .push(delivery_distance_km(record));
    }
    groups
        .into_iter()
        .map(|(city, distances)| CityDistance {
            city: city.to_string(),
            mean_distance_km: stats::mean(&distances).unwrap_or_default(),
        })
        .collect()
}
