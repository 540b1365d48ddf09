//! Contract tests for the great-circle distance queries.

use chrono::NaiveDate;

use deliv_analytics::stats::round2;
use deliv_analytics::{
    haversine_km, mean_delivery_distance, mean_delivery_distance_by_city,
};
use deliv_model::DeliveryRecord;

fn record(city: &str, restaurant: (f64, f64), delivery: (f64, f64)) -> DeliveryRecord {
    DeliveryRecord {
        order_id: "0x1".to_string(),
        courier_id: "COURIER01".to_string(),
        courier_age: 30,
        courier_rating: 4.5,
        restaurant_latitude: restaurant.0,
        restaurant_longitude: restaurant.1,
        delivery_latitude: delivery.0,
        delivery_longitude: delivery.1,
        order_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
        weather: "conditions Sunny".to_string(),
        traffic: "Low".to_string(),
        vehicle_condition: 1,
        order_type: "Snack".to_string(),
        vehicle_type: "motorcycle".to_string(),
        multiple_deliveries: 0,
        festival: "No".to_string(),
        city: city.to_string(),
        time_taken_min: 20,
    }
}

#[test]
fn haversine_is_symmetric() {
    let forward = haversine_km(22.745049, 75.892471, 22.765049, 75.912471);
    let backward = haversine_km(22.765049, 75.912471, 22.745049, 75.892471);
    assert_eq!(forward, backward);
}

#[test]
fn haversine_of_identical_points_is_zero() {
    assert_eq!(haversine_km(22.745049, 75.892471, 22.745049, 75.892471), 0.0);
}

#[test]
fn haversine_matches_a_known_arc() {
    // One degree of longitude along the equator.
    let distance = haversine_km(0.0, 0.0, 0.0, 1.0);
    assert!((distance - 111.195).abs() < 0.01);
}

#[test]
fn mean_distance_is_rounded_to_two_decimals() {
    let records = vec![
        record("Urban", (22.745049, 75.892471), (22.765049, 75.912471)),
        record("Urban", (22.745049, 75.892471), (22.785049, 75.932471)),
    ];
    let mean = mean_delivery_distance(&records).unwrap();
    assert_eq!(mean, round2(mean));
    assert!(mean > 0.0);
}

#[test]
fn per_city_distances_group_by_city() {
    let records = vec![
        record("Urban", (0.0, 0.0), (0.0, 1.0)),
        record("Urban", (0.0, 0.0), (0.0, 1.0)),
        record("Metropolitan", (0.0, 0.0), (0.0, 2.0)),
    ];
    let by_city = mean_delivery_distance_by_city(&records);
    assert_eq!(by_city.len(), 2);
    assert_eq!(by_city[0].city, "Metropolitan");
    assert_eq!(by_city[1].city, "Urban");
    assert!(by_city[0].mean_distance_km > by_city[1].mean_distance_km);
}
