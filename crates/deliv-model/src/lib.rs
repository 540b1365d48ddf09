pub mod enums;
pub mod error;
pub mod record;

pub use enums::{FestivalFlag, RankOrder, REPORT_CITIES, TimeStat};
pub use error::{DelivError, Result};
pub use record::{DeliveryRecord, RawOrder, RawOrderTable};
