//! Delivery-time statistics behind the restaurant view.

use std::collections::BTreeMap;

use serde::Serialize;

use deliv_model::{DelivError, DeliveryRecord, FestivalFlag, Result, TimeStat};

use crate::stats;

/// Scalar delivery-time statistic for one festival flag, rounded to two
/// decimals.
///
/// # Errors
///
/// Fails with [`DelivError::EmptyGroup`] when the requested flag has
/// zero matching rows; there is no sensible scalar to return.
pub fn avg_std_time_by_festival(
    records: &[DeliveryRecord],
    festival: FestivalFlag,
    stat: TimeStat,
) -> Result<f64> {
    let samples: Vec<f64> = records
        .iter()
        .filter(|record| record.festival == festival.as_str())
        .map(|record| f64::from(record.time_taken_min))
        .collect();
    let value = match stat {
        TimeStat::Mean => stats::mean(&samples),
        TimeStat::StdDev => stats::std_dev(&samples),
    }
    .ok_or_else(|| DelivError::EmptyGroup(format!("festival {festival}")))?;
    Ok(stats::round2(value))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityTime {
    pub city: String,
    pub mean_time_min: f64,
    pub std_time_min: f64,
}

/// Mean and standard deviation of delivery time per city.
pub fn avg_std_time_by_city(records: &[DeliveryRecord]) -> Vec<CityTime> {
    let mut times: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        times
            .entry(record.city.as_str())
            .or_default()
            .push(f64::from(record.time_taken_min));
    }
    times
        .into_iter()
        .map(|(city, samples)| {
            let (mean_time_min, std_time_min) = stats::mean_std(&samples);
            CityTime {
                city: city.to_string(),
                mean_time_min,
                std_time_min,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityTrafficTime {
    pub city: String,
    pub traffic: String,
    pub mean_time_min: f64,
    pub std_time_min: f64,
}

/// Mean and standard deviation of delivery time per city and traffic
/// category; feeds the hierarchical chart.
pub fn avg_std_time_by_city_traffic(records: &[DeliveryRecord]) -> Vec<CityTrafficTime> {
    let mut times: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for record in records {
        times
            .entry((record.city.as_str(), record.traffic.as_str()))
            .or_default()
            .push(f64::from(record.time_taken_min));
    }
    times
        .into_iter()
        .map(|((city, traffic), samples)| {
            let (mean_time_min, std_time_min) = stats::mean_std(&samples);
            CityTrafficTime {
                city: city.to_string(),
                traffic: traffic.to_string(),
                mean_time_min,
                std_time_min,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityOrderTypeTime {
    pub city: String,
    pub order_type: String,
    pub mean_time_min: f64,
    pub std_time_min: f64,
}

/// Mean and standard deviation of delivery time per city and order type.
pub fn avg_std_time_by_city_ordertype(records: &[DeliveryRecord]) -> Vec<CityOrderTypeTime> {
    let mut times: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for record in records {
        times
            .entry((record.city.as_str(), record.order_type.as_str()))
            .or_default()
            .push(f64::from(record.time_taken_min));
    }
    times
        .into_iter()
        .map(|((city, order_type), samples)| {
            let (mean_time_min, std_time_min) = stats::mean_std(&samples);
            CityOrderTypeTime {
                city: city.to_string(),
                order_type: order_type.to_string(),
                mean_time_min,
                std_time_min,
            }
        })
        .collect()
}
