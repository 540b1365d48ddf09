//! Dashboard view assembly.
//!
//! Each view composes the aggregation queries its widgets render. The
//! structs here are plain serializable data, so any rendering layer
//! (tables, JSON, charts) can consume them unchanged.

use serde::Serialize;
use tracing::warn;

use deliv_analytics::{
    AgeExtremes, CityDistance, CityOrderTypeTime, CityTime, CityTrafficOrders, CityTrafficTime,
    CourierRating, CourierTime, DailyOrders, DeliveryCentroid, TrafficRating, TrafficShare,
    VehicleConditionExtremes, WeatherRating, WeeklyCourierLoad, WeeklyOrders, age_extremes,
    avg_rating_by_courier, avg_std_rating_by_traffic, avg_std_rating_by_weather,
    avg_std_time_by_city, avg_std_time_by_city_ordertype, avg_std_time_by_city_traffic,
    avg_std_time_by_festival, city_traffic_centroid, mean_delivery_distance,
    mean_delivery_distance_by_city, orders_by_city_traffic, orders_per_courier_per_week,
    orders_per_day, orders_per_week, top_couriers_by_time, traffic_share, unique_couriers,
    vehicle_condition_extremes,
};
use deliv_model::{DeliveryRecord, FestivalFlag, RankOrder, TimeStat};

/// Order-volume widgets of the company page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyView {
    pub daily_orders: Vec<DailyOrders>,
    pub traffic_share: Vec<TrafficShare>,
    pub city_traffic_orders: Vec<CityTrafficOrders>,
    pub weekly_orders: Vec<WeeklyOrders>,
    pub weekly_courier_load: Vec<WeeklyCourierLoad>,
    pub centroids: Vec<DeliveryCentroid>,
}

pub fn build_company_view(records: &[DeliveryRecord]) -> CompanyView {
    CompanyView {
        daily_orders: orders_per_day(records),
        traffic_share: traffic_share(records),
        city_traffic_orders: orders_by_city_traffic(records),
        weekly_orders: orders_per_week(records),
        weekly_courier_load: orders_per_courier_per_week(records),
        centroids: city_traffic_centroid(records),
    }
}

/// Courier metrics, ratings and leaderboards of the courier page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourierView {
    pub ages: Option<AgeExtremes>,
    pub vehicle_conditions: Option<VehicleConditionExtremes>,
    pub courier_ratings: Vec<CourierRating>,
    pub traffic_ratings: Vec<TrafficRating>,
    pub weather_ratings: Vec<WeatherRating>,
    pub fastest_couriers: Vec<CourierTime>,
    pub slowest_couriers: Vec<CourierTime>,
}

pub fn build_courier_view(records: &[DeliveryRecord]) -> CourierView {
    CourierView {
        ages: age_extremes(records),
        vehicle_conditions: vehicle_condition_extremes(records),
        courier_ratings: avg_rating_by_courier(records),
        traffic_ratings: avg_std_rating_by_traffic(records),
        weather_ratings: avg_std_rating_by_weather(records),
        fastest_couriers: top_couriers_by_time(records, RankOrder::Fastest),
        slowest_couriers: top_couriers_by_time(records, RankOrder::Slowest),
    }
}

/// The four festival-flag delivery-time scalars of the restaurant page.
///
/// Fields are `None` when the flag has no matching rows; the underlying
/// query reports that as an error and the view degrades the widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FestivalTimes {
    pub festival_mean: Option<f64>,
    pub festival_std: Option<f64>,
    pub regular_mean: Option<f64>,
    pub regular_std: Option<f64>,
}

/// Distance and delivery-time widgets of the restaurant page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantView {
    pub unique_couriers: usize,
    pub mean_distance_km: Option<f64>,
    pub festival_times: FestivalTimes,
    pub city_times: Vec<CityTime>,
    pub city_order_type_times: Vec<CityOrderTypeTime>,
    pub city_traffic_times: Vec<CityTrafficTime>,
    pub city_distances: Vec<CityDistance>,
}

pub fn build_restaurant_view(records: &[DeliveryRecord]) -> RestaurantView {
    RestaurantView {
        unique_couriers: unique_couriers(records),
        mean_distance_km: mean_delivery_distance(records),
        festival_times: FestivalTimes {
            festival_mean: festival_scalar(records, FestivalFlag::Yes, TimeStat::Mean),
            festival_std: festival_scalar(records, FestivalFlag::Yes, TimeStat::StdDev),
            regular_mean: festival_scalar(records, FestivalFlag::No, TimeStat::Mean),
            regular_std: festival_scalar(records, FestivalFlag::No, TimeStat::StdDev),
        },
        city_times: avg_std_time_by_city(records),
        city_order_type_times: avg_std_time_by_city_ordertype(records),
        city_traffic_times: avg_std_time_by_city_traffic(records),
        city_distances: mean_delivery_distance_by_city(records),
    }
}

fn festival_scalar(
    records: &[DeliveryRecord],
    festival: FestivalFlag,
    stat: TimeStat,
) -> Option<f64> {
    match avg_std_time_by_festival(records, festival, stat) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(%festival, ?stat, %error, "festival metric unavailable");
            None
        }
    }
}
