//! Feature construction: calendar attributes, rolling mean, lag-1.

pub mod builder;
pub mod calendar;
pub mod rolling;

pub use builder::{build_features, partition_by_product};
pub use calendar::CalendarFeatures;
pub use rolling::rolling_mean;
