//! Order-volume aggregates behind the company view.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use deliv_model::DeliveryRecord;
use deliv_transform::week_of_year;

use crate::stats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyOrders {
    pub date: NaiveDate,
    pub orders: usize,
}

/// Distinct orders per day, in date order.
pub fn orders_per_day(records: &[DeliveryRecord]) -> Vec<DailyOrders> {
    let mut ids: BTreeMap<NaiveDate, BTreeSet<&str>> = BTreeMap::new();
    for record in records {
        ids.entry(record.order_date)
            .or_default()
            .insert(record.order_id.as_str());
    }
    ids.into_iter()
        .map(|(date, ids)| DailyOrders {
            date,
            orders: ids.len(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficShare {
    pub traffic: String,
    pub share: f64,
}

/// Fraction of deliveries per traffic category. Fractions sum to 1.0 for
/// any non-empty input; empty input yields an empty sequence.
pub fn traffic_share(records: &[DeliveryRecord]) -> Vec<TrafficShare> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.traffic.as_str()).or_default() += 1;
    }
    let total = records.len() as f64;
    counts
        .into_iter()
        .map(|(traffic, count)| TrafficShare {
            traffic: traffic.to_string(),
            share: count as f64 / total,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityTrafficOrders {
    pub city: String,
    pub traffic: String,
    pub orders: usize,
}

/// Delivery counts per city and traffic category.
pub fn orders_by_city_traffic(records: &[DeliveryRecord]) -> Vec<CityTrafficOrders> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for record in records {
        *counts
            .entry((record.city.as_str(), record.traffic.as_str()))
            .or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((city, traffic), orders)| CityTrafficOrders {
            city: city.to_string(),
            traffic: traffic.to_string(),
            orders,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyOrders {
    /// Sunday-based week of year, "00".."53".
    pub week: String,
    pub orders: usize,
}

/// Distinct orders per week of year, in week order.
pub fn orders_per_week(records: &[DeliveryRecord]) -> Vec<WeeklyOrders> {
    let mut ids: BTreeMap<String, BTreeSet<&str>> = BTreeMap::new();
    for record in records {
        ids.entry(week_of_year(record.order_date))
            .or_default()
            .insert(record.order_id.as_str());
    }
    ids.into_iter()
        .map(|(week, ids)| WeeklyOrders {
            week,
            orders: ids.len(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyCourierLoad {
    pub week: String,
    pub orders_per_courier: f64,
}

#[derive(Default)]
struct WeekAccum<'a> {
    orders: usize,
    couriers: BTreeSet<&'a str>,
}

/// Orders per active courier per week of year.
///
/// A week group only exists because at least one row landed in it, so
/// the courier count per group is always nonzero.
pub fn orders_per_courier_per_week(records: &[DeliveryRecord]) -> Vec<WeeklyCourierLoad> {
    let mut weeks: BTreeMap<String, WeekAccum<'_>> = BTreeMap::new();
    for record in records {
        let entry = weeks.entry(week_of_year(record.order_date)).or_default();
        entry.orders += 1;
        entry.couriers.insert(record.courier_id.as_str());
    }
    weeks
        .into_iter()
        .map(|(week, accum)| WeeklyCourierLoad {
            week,
            orders_per_courier: accum.orders as f64 / accum.couriers.len() as f64,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryCentroid {
    pub city: String,
    pub traffic: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Median delivery location per city and traffic category, for map
/// plotting.
pub fn city_traffic_centroid(records: &[DeliveryRecord]) -> Vec<DeliveryCentroid> {
    let mut groups: BTreeMap<(&str, &str), (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for record in records {
        let entry = groups
            .entry((record.city.as_str(), record.traffic.as_str()))
            .or_default();
        entry.0.push(record.delivery_latitude);
        entry.1.push(record.delivery_longitude);
    }
    groups
        .into_iter()
        .filter_map(|((city, traffic), (lats, lons))| {
            Some(DeliveryCentroid {
                city: city.to_string(),
                traffic: traffic.to_string(),
                latitude: stats::median(&lats)?,
                longitude: stats::median(&lons)?,
            })
        })
        .collect()
}
