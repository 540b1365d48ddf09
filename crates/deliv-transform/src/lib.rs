//! Cleaning and filtering stages for the delivery dataset.

pub mod calendar;
pub mod filter;
pub mod normalize;

pub use calendar::week_of_year;
pub use filter::{OrderFilters, apply_filters};
pub use normalize::{MISSING_SENTINEL, ORDER_DATE_FORMAT, normalize};
