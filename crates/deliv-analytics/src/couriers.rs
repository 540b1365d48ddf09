//! Courier-centric aggregates behind the courier view.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use deliv_model::{DeliveryRecord, REPORT_CITIES, RankOrder};

use crate::stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeExtremes {
    pub oldest: u32,
    pub youngest: u32,
}

/// Oldest and youngest courier age; `None` on an empty table.
pub fn age_extremes(records: &[DeliveryRecord]) -> Option<AgeExtremes> {
    let oldest = records.iter().map(|record| record.courier_age).max()?;
    let youngest = records.iter().map(|record| record.courier_age).min()?;
    Some(AgeExtremes { oldest, youngest })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VehicleConditionExtremes {
    pub best: u8,
    pub worst: u8,
}

/// Best and worst vehicle-condition ordinal; `None` on an empty table.
pub fn vehicle_condition_extremes(records: &[DeliveryRecord]) -> Option<VehicleConditionExtremes> {
    let best = records.iter().map(|record| record.vehicle_condition).max()?;
    let worst = records.iter().map(|record| record.vehicle_condition).min()?;
    Some(VehicleConditionExtremes { best, worst })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourierRating {
    pub courier_id: String,
    pub mean_rating: f64,
}

/// Mean rating per courier, in courier-id order.
pub fn avg_rating_by_courier(records: &[DeliveryRecord]) -> Vec<CourierRating> {
    let mut ratings: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        ratings
            .entry(record.courier_id.as_str())
            .or_default()
            .push(record.courier_rating);
    }
    ratings
        .into_iter()
        .map(|(courier_id, samples)| CourierRating {
            courier_id: courier_id.to_string(),
            mean_rating: stats::mean(&samples).unwrap_or_default(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficRating {
    pub traffic: String,
    pub mean_rating: f64,
    pub std_rating: f64,
}

/// Mean and standard deviation of courier rating per traffic category.
pub fn avg_std_rating_by_traffic(records: &[DeliveryRecord]) -> Vec<TrafficRating> {
    let mut ratings: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        ratings
            .entry(record.traffic.as_str())
            .or_default()
            .push(record.courier_rating);
    }
    ratings
        .into_iter()
        .map(|(traffic, samples)| {
            let (mean_rating, std_rating) = stats::mean_std(&samples);
            TrafficRating {
                traffic: traffic.to_string(),
                mean_rating,
                std_rating,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRating {
    pub weather: String,
    pub mean_rating: f64,
    pub std_rating: f64,
}

/// Mean and standard deviation of courier rating per weather condition.
pub fn avg_std_rating_by_weather(records: &[DeliveryRecord]) -> Vec<WeatherRating> {
    let mut ratings: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        ratings
            .entry(record.weather.as_str())
            .or_default()
            .push(record.courier_rating);
    }
    ratings
        .into_iter()
        .map(|(weather, samples)| {
            let (mean_rating, std_rating) = stats::mean_std(&samples);
            WeatherRating {
                weather: weather.to_string(),
                mean_rating,
                std_rating,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourierTime {
    pub city: String,
    pub courier_id: String,
    pub mean_time_min: f64,
}

/// Top ten couriers per city by mean delivery time.
///
/// Cities come out in [`REPORT_CITIES`] order; a city absent from the
/// filtered data contributes an empty slice, not an error.
pub fn top_couriers_by_time(records: &[DeliveryRecord], order: RankOrder) -> Vec<CourierTime> {
    let mut times: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for record in records {
        times
            .entry((record.city.as_str(), record.courier_id.as_str()))
            .or_default()
            .push(f64::from(record.time_taken_min));
    }
    let averages: Vec<CourierTime> = times
        .into_iter()
        .map(|((city, courier_id), samples)| CourierTime {
            city: city.to_string(),
            courier_id: courier_id.to_string(),
            mean_time_min: stats::mean(&samples).unwrap_or_default(),
        })
        .collect();

    let mut ranked = Vec::new();
    for city in REPORT_CITIES {
        let mut rows: Vec<CourierTime> = averages
            .iter()
            .filter(|row| row.city == city)
            .cloned()
            .collect();
        rows.sort_by(|a, b| rank_cmp(a.mean_time_min, b.mean_time_min, order));
        rows.truncate(10);
        ranked.extend(rows);
    }
    ranked
}

fn rank_cmp(a: f64, b: f64, order: RankOrder) -> Ordering {
    match order {
        RankOrder::Fastest => a.total_cmp(&b),
        RankOrder::Slowest => b.total_cmp(&a),
    }
}

/// Count of distinct couriers in the filtered table.
pub fn unique_couriers(records: &[DeliveryRecord]) -> usize {
    records
        .iter()
        .map(|record| record.courier_id.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}
