//! CLI library components for the delivery dashboards.

pub mod logging;
pub mod views;
