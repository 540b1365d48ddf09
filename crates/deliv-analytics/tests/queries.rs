//! Contract tests for the aggregation queries.

use chrono::NaiveDate;

use deliv_analytics::{
    age_extremes, avg_rating_by_courier, avg_std_rating_by_traffic, avg_std_rating_by_weather,
    avg_std_time_by_city, avg_std_time_by_city_ordertype, avg_std_time_by_city_traffic,
    avg_std_time_by_festival, city_traffic_centroid, mean_delivery_distance,
    mean_delivery_distance_by_city, orders_by_city_traffic, orders_per_courier_per_week,
    orders_per_day, orders_per_week, top_couriers_by_time, traffic_share, unique_couriers,
    vehicle_condition_extremes,
};
use deliv_model::{DelivError, DeliveryRecord, FestivalFlag, RankOrder, TimeStat};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 3, day).unwrap()
}

fn record(order_id: &str) -> DeliveryRecord {
    DeliveryRecord {
        order_id: order_id.to_string(),
        courier_id: "COURIER01".to_string(),
        courier_age: 30,
        courier_rating: 4.5,
        restaurant_latitude: 22.745049,
        restaurant_longitude: 75.892471,
        delivery_latitude: 22.765049,
        delivery_longitude: 75.912471,
        order_date: date(1),
        weather: "conditions Sunny".to_string(),
        traffic: "Low".to_string(),
        vehicle_condition: 1,
        order_type: "Snack".to_string(),
        vehicle_type: "motorcycle".to_string(),
        multiple_deliveries: 0,
        festival: "No".to_string(),
        city: "Urban".to_string(),
        time_taken_min: 20,
    }
}

fn with<F: FnOnce(&mut DeliveryRecord)>(order_id: &str, tweak: F) -> DeliveryRecord {
    let mut record = record(order_id);
    tweak(&mut record);
    record
}

#[test]
fn orders_per_day_counts_distinct_ids_in_date_order() {
    let records = vec![
        with("0x1", |r| r.order_date = date(2)),
        with("0x2", |r| r.order_date = date(1)),
        // Same id twice on one day counts once.
        with("0x2", |r| r.order_date = date(1)),
        with("0x3", |r| r.order_date = date(1)),
    ];
    let daily = orders_per_day(&records);
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].date, date(1));
    assert_eq!(daily[0].orders, 2);
    assert_eq!(daily[1].date, date(2));
    assert_eq!(daily[1].orders, 1);
}

#[test]
fn traffic_share_fractions_sum_to_one() {
    let records = vec![
        with("0x1", |r| r.traffic = "Jam".to_string()),
        with("0x2", |r| r.traffic = "Jam".to_string()),
        with("0x3", |r| r.traffic = "Low".to_string()),
        with("0x4", |r| r.traffic = "Medium".to_string()),
    ];
    let shares = traffic_share(&records);
    let total: f64 = shares.iter().map(|s| s.share).sum();
    assert!((total - 1.0).abs() < 1e-9);
    // Keys in category order; Jam holds half the deliveries.
    assert_eq!(shares[0].traffic, "Jam");
    assert_eq!(shares[0].share, 0.5);
}

#[test]
fn city_traffic_orders_count_rows_per_pair() {
    let records = vec![
        with("0x1", |r| r.city = "Metropolitan".to_string()),
        with("0x2", |r| r.city = "Metropolitan".to_string()),
        with("0x3", |r| {
            r.city = "Metropolitan".to_string();
            r.traffic = "Jam".to_string();
        }),
    ];
    let counts = orders_by_city_traffic(&records);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].city, "Metropolitan");
    assert_eq!(counts[0].traffic, "Jam");
    assert_eq!(counts[0].orders, 1);
    assert_eq!(counts[1].traffic, "Low");
    assert_eq!(counts[1].orders, 2);
}

#[test]
fn weekly_series_use_sunday_based_weeks() {
    // 2022-03-05 is a Saturday, 2022-03-06 the next Sunday: consecutive
    // days, different %U weeks.
    let records = vec![
        with("0x1", |r| r.order_date = date(5)),
        with("0x2", |r| r.order_date = date(6)),
        with("0x3", |r| r.order_date = date(6)),
    ];
    let weekly = orders_per_week(&records);
    assert_eq!(weekly.len(), 2);
    assert_eq!(weekly[0].week, "09");
    assert_eq!(weekly[0].orders, 1);
    assert_eq!(weekly[1].week, "10");
    assert_eq!(weekly[1].orders, 2);
}

#[test]
fn courier_load_divides_orders_by_active_couriers() {
    let records = vec![
        with("0x1", |r| r.courier_id = "A".to_string()),
        with("0x2", |r| r.courier_id = "A".to_string()),
        with("0x3", |r| r.courier_id = "B".to_string()),
        with("0x4", |r| r.courier_id = "B".to_string()),
    ];
    let load = orders_per_courier_per_week(&records);
    assert_eq!(load.len(), 1);
    assert_eq!(load[0].orders_per_courier, 2.0);
}

#[test]
fn centroid_is_the_median_delivery_location() {
    let records = vec![
        with("0x1", |r| r.delivery_latitude = 10.0),
        with("0x2", |r| r.delivery_latitude = 30.0),
        with("0x3", |r| r.delivery_latitude = 20.0),
    ];
    let centroids = city_traffic_centroid(&records);
    assert_eq!(centroids.len(), 1);
    assert_eq!(centroids[0].city, "Urban");
    assert_eq!(centroids[0].traffic, "Low");
    assert_eq!(centroids[0].latitude, 20.0);
    assert_eq!(centroids[0].longitude, 75.912471);
}

#[test]
fn extremes_cover_max_and_min() {
    let records = vec![
        with("0x1", |r| {
            r.courier_age = 24;
            r.vehicle_condition = 0;
        }),
        with("0x2", |r| {
            r.courier_age = 39;
            r.vehicle_condition = 2;
        }),
    ];
    let ages = age_extremes(&records).unwrap();
    assert_eq!(ages.oldest, 39);
    assert_eq!(ages.youngest, 24);
    let conditions = vehicle_condition_extremes(&records).unwrap();
    assert_eq!(conditions.best, 2);
    assert_eq!(conditions.worst, 0);
}

#[test]
fn rating_aggregates_group_by_their_keys() {
    let records = vec![
        with("0x1", |r| {
            r.courier_id = "A".to_string();
            r.courier_rating = 4.0;
        }),
        with("0x2", |r| {
            r.courier_id = "A".to_string();
            r.courier_rating = 5.0;
        }),
        with("0x3", |r| {
            r.courier_id = "B".to_string();
            r.courier_rating = 3.0;
        }),
    ];
    let by_courier = avg_rating_by_courier(&records);
    assert_eq!(by_courier.len(), 2);
    assert_eq!(by_courier[0].courier_id, "A");
    assert_eq!(by_courier[0].mean_rating, 4.5);

    let by_traffic = avg_std_rating_by_traffic(&records);
    assert_eq!(by_traffic.len(), 1);
    // Population std of [4, 5, 3] is sqrt(2/3).
    assert!((by_traffic[0].std_rating - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);

    let by_weather = avg_std_rating_by_weather(&records);
    assert_eq!(by_weather[0].weather, "conditions Sunny");
    assert_eq!(by_weather[0].mean_rating, 4.0);
}

#[test]
fn top_couriers_caps_at_ten_per_city_in_rank_order() {
    let mut records = Vec::new();
    for courier in 0..12 {
        records.push(with(&format!("0x{courier}"), |r| {
            r.city = "Metropolitan".to_string();
            r.courier_id = format!("M{courier:02}");
            r.time_taken_min = 10 + courier;
        }));
    }
    records.push(with("0xu", |r| {
        r.courier_id = "U01".to_string();
        r.time_taken_min = 50;
    }));

    let fastest = top_couriers_by_time(&records, RankOrder::Fastest);
    let metro: Vec<&_> = fastest.iter().filter(|r| r.city == "Metropolitan").collect();
    assert_eq!(metro.len(), 10);
    assert!(
        metro
            .windows(2)
            .all(|pair| pair[0].mean_time_min <= pair[1].mean_time_min)
    );
    // Urban follows Metropolitan; Semi-Urban is absent and contributes
    // nothing rather than erroring.
    assert_eq!(fastest.last().unwrap().city, "Urban");
    assert_eq!(fastest.len(), 11);

    let slowest = top_couriers_by_time(&records, RankOrder::Slowest);
    let metro_slow: Vec<&_> = slowest.iter().filter(|r| r.city == "Metropolitan").collect();
    assert_eq!(metro_slow[0].courier_id, "M11");
    assert!(
        metro_slow
            .windows(2)
            .all(|pair| pair[0].mean_time_min >= pair[1].mean_time_min)
    );
}

#[test]
fn festival_scalar_extracts_mean_or_std() {
    let records = vec![
        with("0x1", |r| {
            r.festival = "Yes".to_string();
            r.time_taken_min = 40;
        }),
        with("0x2", |r| {
            r.festival = "Yes".to_string();
            r.time_taken_min = 50;
        }),
        with("0x3", |r| r.time_taken_min = 20),
    ];
    let mean = avg_std_time_by_festival(&records, FestivalFlag::Yes, TimeStat::Mean).unwrap();
    assert_eq!(mean, 45.0);
    let std = avg_std_time_by_festival(&records, FestivalFlag::Yes, TimeStat::StdDev).unwrap();
    assert_eq!(std, 5.0);
    let regular = avg_std_time_by_festival(&records, FestivalFlag::No, TimeStat::Mean).unwrap();
    assert_eq!(regular, 20.0);
}

#[test]
fn festival_scalar_with_no_matching_rows_is_an_error() {
    let records = vec![record("0x1")];
    let error = avg_std_time_by_festival(&records, FestivalFlag::Yes, TimeStat::Mean).unwrap_err();
    assert!(matches!(error, DelivError::EmptyGroup(_)));
    assert!(error.to_string().contains("Yes"));
}

#[test]
fn time_tables_group_by_city_keys() {
    let records = vec![
        with("0x1", |r| r.time_taken_min = 10),
        with("0x2", |r| r.time_taken_min = 30),
        with("0x3", |r| {
            r.city = "Metropolitan".to_string();
            r.time_taken_min = 25;
        }),
    ];
    let by_city = avg_std_time_by_city(&records);
    assert_eq!(by_city.len(), 2);
    assert_eq!(by_city[0].city, "Metropolitan");
    assert_eq!(by_city[1].city, "Urban");
    assert_eq!(by_city[1].mean_time_min, 20.0);
    assert_eq!(by_city[1].std_time_min, 10.0);

    let by_traffic = avg_std_time_by_city_traffic(&records);
    assert_eq!(by_traffic.len(), 2);
    assert_eq!(by_traffic[0].traffic, "Low");

    let by_order_type = avg_std_time_by_city_ordertype(&records);
    assert_eq!(by_order_type.len(), 2);
    assert_eq!(by_order_type[0].order_type, "Snack");
}

#[test]
fn unique_couriers_counts_distinct_ids() {
    let records = vec![
        with("0x1", |r| r.courier_id = "A".to_string()),
        with("0x2", |r| r.courier_id = "A".to_string()),
        with("0x3", |r| r.courier_id = "B".to_string()),
    ];
    assert_eq!(unique_couriers(&records), 2);
}

#[test]
fn every_aggregate_tolerates_an_empty_table() {
    let records: Vec<DeliveryRecord> = Vec::new();
    assert!(orders_per_day(&records).is_empty());
    assert!(traffic_share(&records).is_empty());
    assert!(orders_by_city_traffic(&records).is_empty());
    assert!(orders_per_week(&records).is_empty());
    assert!(orders_per_courier_per_week(&records).is_empty());
    assert!(city_traffic_centroid(&records).is_empty());
    assert!(age_extremes(&records).is_none());
    assert!(vehicle_condition_extremes(&records).is_none());
    assert!(avg_rating_by_courier(&records).is_empty());
    assert!(avg_std_rating_by_traffic(&records).is_empty());
    assert!(avg_std_rating_by_weather(&records).is_empty());
    assert!(top_couriers_by_time(&records, RankOrder::Fastest).is_empty());
    assert!(mean_delivery_distance(&records).is_none());
    assert!(mean_delivery_distance_by_city(&records).is_empty());
    assert!(avg_std_time_by_city(&records).is_empty());
    assert!(avg_std_time_by_city_traffic(&records).is_empty());
    assert!(avg_std_time_by_city_ordertype(&records).is_empty());
    assert_eq!(unique_couriers(&records), 0);
    // The scalar extractor is the one query that reports the emptiness.
    assert!(avg_std_time_by_festival(&records, FestivalFlag::No, TimeStat::Mean).is_err());
}
