//! Aggregation queries over the cleaned delivery table.
//!
//! Every function here is pure: an already-filtered slice of records in,
//! render-agnostic structured data out. Grouped outputs are ordered by
//! group key.

pub mod couriers;
pub mod distance;
pub mod orders;
pub mod stats;
pub mod timing;

pub use couriers::{
    AgeExtremes, CourierRating, CourierTime, TrafficRating, VehicleConditionExtremes,
    WeatherRating, age_extremes, avg_rating_by_courier, avg_std_rating_by_traffic,
    avg_std_rating_by_weather, top_couriers_by_time, unique_couriers, vehicle_condition_extremes,
};
pub use distance::{
    CityDistance, EARTH_RADIUS_KM, haversine_km, mean_delivery_distance,
    mean_delivery_distance_by_city,
};
pub use orders::{
    CityTrafficOrders, DailyOrders, DeliveryCentroid, TrafficShare, WeeklyCourierLoad,
    WeeklyOrders, city_traffic_centroid, orders_by_city_traffic, orders_per_courier_per_week,
    orders_per_day, orders_per_week, traffic_share,
};
pub use timing::{
    CityOrderTypeTime, CityTime, CityTrafficTime, avg_std_time_by_city,
    avg_std_time_by_city_ordertype, avg_std_time_by_city_traffic, avg_std_time_by_festival,
};
