//! Count, sum-of-powers and power-mean aggregates

mod range;

pub use range::{range_item_count, range_mean, range_sum, range_values};
